//! Error types for collecting calendars and talking to the free-slot service.

use std::time::Duration;
use thiserror::Error;

/// Every way a free-slot lookup can fail.
///
/// The set is closed: the CLI maps each variant to its own exit code via
/// [`FreeSlotError::exit_code`].
#[derive(Error, Debug)]
pub enum FreeSlotError {
    /// The service could not be reached (connection refused, DNS, TLS, ...).
    #[error("free-slot service at {endpoint} is unreachable: {source}")]
    Unreachable {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client could not be built; no request was attempted.
    #[error("could not set up the HTTP client: {0}")]
    ClientSetup(#[source] reqwest::Error),

    /// The service did not answer within the configured timeout.
    #[error("free-slot service at {endpoint} did not answer within {timeout:?}")]
    Timeout { endpoint: String, timeout: Duration },

    /// The service answered with something other than `200 OK`.
    #[error("free-slot service answered with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the JSON document we expect.
    #[error("malformed response body: {0}")]
    MalformedBody(String),

    /// The response body was valid JSON but lacked a required key.
    #[error("response is missing the `{0}` field")]
    MissingField(&'static str),

    /// Reading the console or a file failed.
    #[error("I/O error: {0}")]
    Input(#[from] std::io::Error),

    /// Input ended while a value was still expected.
    #[error("input ended while waiting for \"{prompt}\"")]
    UnexpectedEof { prompt: String },

    /// A calendar document or the endpoint could not be understood.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A calendar failed time validation.
    #[error("calendar #{index}: {message}")]
    InvalidCalendar { index: usize, message: String },
}

impl FreeSlotError {
    /// Process exit code for this failure.
    ///
    /// `1` is left to unclassified failures and `2` to argument parsing.
    pub fn exit_code(&self) -> u8 {
        match self {
            FreeSlotError::Unreachable { .. } => 3,
            FreeSlotError::Timeout { .. } => 4,
            FreeSlotError::Status { .. } => 5,
            FreeSlotError::MalformedBody(_) => 6,
            FreeSlotError::MissingField(_) => 7,
            FreeSlotError::Input(_) | FreeSlotError::UnexpectedEof { .. } => 8,
            FreeSlotError::InvalidInput(_) | FreeSlotError::InvalidCalendar { .. } => 9,
            FreeSlotError::ClientSetup(_) => 10,
        }
    }
}

/// Convenience alias used throughout freeslot-core.
pub type Result<T> = std::result::Result<T, FreeSlotError>;
