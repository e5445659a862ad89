//! Records exchanged with the free-slot service.
//!
//! Every time value is an opaque string, kept exactly as the user typed it.
//! Only [`crate::validate`] ever looks inside one.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{FreeSlotError, Result};

/// A `(begin, end)` interval. On the wire it is a two-element array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Event {
    pub begin: String,
    pub end: String,
}

impl Event {
    pub fn new(begin: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            begin: begin.into(),
            end: end.into(),
        }
    }
}

impl From<(String, String)> for Event {
    fn from((begin, end): (String, String)) -> Self {
        Self { begin, end }
    }
}

impl From<Event> for (String, String) {
    fn from(event: Event) -> Self {
        (event.begin, event.end)
    }
}

/// One calendar: the window it is available in, plus its busy events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCalendar {
    /// Earliest allowed time.
    pub not_before: String,
    /// Latest allowed time.
    pub not_after: String,
    /// Busy events in entry order (not time order).
    pub events: Vec<Event>,
}

/// All calendars entered in one run, in entry order.
pub type CalendarSet = Vec<DayCalendar>;

/// The service's answer.
///
/// Only `events` is interpreted. Anything else the service sends back (the
/// reference service echoes a `not_before`/`not_after` window) is kept in
/// `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeSlotResponse {
    /// Free intervals, in the order the service returned them.
    pub events: Vec<Event>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Decode a calendar document shaped like the request payload.
pub fn parse_calendars(json: &str) -> Result<CalendarSet> {
    serde_json::from_str(json).map_err(|e| FreeSlotError::InvalidInput(e.to_string()))
}
