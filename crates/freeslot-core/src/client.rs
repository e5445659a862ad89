//! One-shot HTTP client for the free-slot service.
//!
//! The whole exchange is a single `POST` of the calendar set as JSON, answered
//! by a JSON object whose `events` field lists the free intervals. There are
//! no retries; the request is bounded by [`ClientConfig::timeout`].

use std::time::Duration;

use log::debug;
use serde_json::Value;

use crate::error::{FreeSlotError, Result};
use crate::model::{CalendarSet, FreeSlotResponse};

/// Where the service lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub const DEFAULT_ENDPOINT: &'static str = "http://localhost:8088/api";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ENDPOINT, Self::DEFAULT_TIMEOUT)
    }
}

/// Anything that can turn a calendar set into free slots.
pub trait FreeSlotService {
    fn find_free_slots(&self, calendars: &CalendarSet) -> Result<FreeSlotResponse>;
}

/// Encode a calendar set as the request body.
///
/// The empty set encodes as `[]` and is still a valid request.
pub fn payload(calendars: &CalendarSet) -> Result<String> {
    serde_json::to_string(calendars).map_err(|e| FreeSlotError::InvalidInput(e.to_string()))
}

/// Interpret a status code and body from the service.
///
/// - anything but `200` is a [`FreeSlotError::Status`], body attached
/// - a body that is not JSON is [`FreeSlotError::MalformedBody`]
/// - a JSON body without `events` is [`FreeSlotError::MissingField`]
/// - an `events` value that is not a list of pairs is `MalformedBody`
pub fn parse_response(status: u16, body: &str) -> Result<FreeSlotResponse> {
    if status != 200 {
        return Err(FreeSlotError::Status {
            status,
            body: body.to_string(),
        });
    }

    let value: Value =
        serde_json::from_str(body).map_err(|e| FreeSlotError::MalformedBody(e.to_string()))?;

    if value.get("events").is_none() {
        return Err(FreeSlotError::MissingField("events"));
    }

    serde_json::from_value(value).map_err(|e| FreeSlotError::MalformedBody(e.to_string()))
}

/// [`FreeSlotService`] over a blocking `reqwest` client.
pub struct HttpFreeSlotService {
    config: ClientConfig,
    http: reqwest::blocking::Client,
}

impl HttpFreeSlotService {
    pub fn new(config: ClientConfig) -> Result<Self> {
        reqwest::Url::parse(&config.endpoint).map_err(|e| {
            FreeSlotError::InvalidInput(format!("endpoint {:?}: {}", config.endpoint, e))
        })?;

        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(FreeSlotError::ClientSetup)?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn transport_error(&self, err: reqwest::Error) -> FreeSlotError {
        debug!("request to {} failed: {}", self.config.endpoint, err);
        if err.is_timeout() {
            FreeSlotError::Timeout {
                endpoint: self.config.endpoint.clone(),
                timeout: self.config.timeout,
            }
        } else {
            FreeSlotError::Unreachable {
                endpoint: self.config.endpoint.clone(),
                source: err,
            }
        }
    }
}

impl FreeSlotService for HttpFreeSlotService {
    fn find_free_slots(&self, calendars: &CalendarSet) -> Result<FreeSlotResponse> {
        let body = payload(calendars)?;
        debug!(
            "POST {} with {} calendar(s), {} bytes",
            self.config.endpoint,
            calendars.len(),
            body.len()
        );

        let response = self
            .http
            .post(&self.config.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .map_err(|e| self.transport_error(e))?;

        let status = response.status().as_u16();
        debug!("service answered with status {}", status);

        let text = response.text().map_err(|e| self.transport_error(e))?;

        parse_response(status, &text).inspect_err(|err| debug!("free-slot lookup failed: {}", err))
    }
}
