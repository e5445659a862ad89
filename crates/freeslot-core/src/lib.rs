//! # freeslot-core
//!
//! Client side of a free-slot finder: collect day calendars from a console,
//! ship them to a remote free-slot service as JSON, and print the free
//! intervals it answers with.
//!
//! The interval intersection itself happens on the service. This crate owns the
//! data contract, the interactive collection loop, the single HTTP round trip,
//! and the output format.
//!
//! ## Quick start
//!
//! ```rust
//! use freeslot_core::{collect_calendars, payload, Prompter};
//! use std::io::Cursor;
//!
//! let script = "y\n9:00\n17:00\ny\n12:00\n13:00\nn\nn\n";
//! let mut prompter = Prompter::new(Cursor::new(script), Vec::new());
//! let calendars = collect_calendars(&mut prompter).unwrap();
//!
//! assert_eq!(
//!     payload(&calendars).unwrap(),
//!     r#"[{"not_before":"9:00","not_after":"17:00","events":[["12:00","13:00"]]}]"#
//! );
//! ```
//!
//! ## Modules
//!
//! - [`model`] — `Event`, `DayCalendar`, `CalendarSet`, `FreeSlotResponse`
//! - [`collector`] — interactive prompt loops building a `CalendarSet`
//! - [`client`] — payload encoding, response decoding, HTTP service
//! - [`presenter`] — console rendering of free slots
//! - [`validate`] — optional `H:MM` checks before sending
//! - [`error`] — Error types

pub mod client;
pub mod collector;
pub mod error;
pub mod model;
pub mod presenter;
pub mod validate;

pub use client::{parse_response, payload, ClientConfig, FreeSlotService, HttpFreeSlotService};
pub use collector::{collect_calendars, input_day_calendar, Prompter};
pub use error::FreeSlotError;
pub use model::{parse_calendars, CalendarSet, DayCalendar, Event, FreeSlotResponse};
pub use presenter::show_free_slots;
pub use validate::validate_calendars;
