//! Optional sanity checks run before a calendar set leaves the machine.
//!
//! Time strings are opaque everywhere else in this crate. These checks use the
//! format the reference service understands: `:`-separated integers folded
//! base-60 into minutes after midnight (`"9:30"` is 570), strictly below
//! `24 * 60`.

use crate::error::{FreeSlotError, Result};
use crate::model::{CalendarSet, DayCalendar};

/// Minutes in a day; every parsed time must be below this.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parse a time of day into minutes after midnight.
///
/// ```
/// use freeslot_core::validate::parse_minutes;
///
/// assert_eq!(parse_minutes("9:30"), Ok(570));
/// assert_eq!(parse_minutes("0:0"), Ok(0));
/// assert!(parse_minutes("24:00").is_err());
/// ```
pub fn parse_minutes(time: &str) -> std::result::Result<u32, String> {
    let mut minutes: u32 = 0;
    for token in time.split(':') {
        let value: u32 = token
            .parse()
            .map_err(|e| format!("{:?} is not a time of day: {}", time, e))?;
        minutes = minutes
            .checked_mul(60)
            .and_then(|m| m.checked_add(value))
            .ok_or_else(|| format!("{:?} is out of range", time))?;
    }

    if minutes >= MINUTES_PER_DAY {
        return Err(format!(
            "{:?} is out of range [0-{}[ minutes",
            time, MINUTES_PER_DAY
        ));
    }
    Ok(minutes)
}

/// Check every calendar: all times parse, the window is not inverted, and
/// no event ends before it begins.
///
/// Errors name the calendar by its 1-based position in entry order.
pub fn validate_calendars(calendars: &CalendarSet) -> Result<()> {
    for (idx, calendar) in calendars.iter().enumerate() {
        validate_calendar(calendar).map_err(|message| FreeSlotError::InvalidCalendar {
            index: idx + 1,
            message,
        })?;
    }
    Ok(())
}

fn validate_calendar(calendar: &DayCalendar) -> std::result::Result<(), String> {
    let not_before = parse_minutes(&calendar.not_before)?;
    let not_after = parse_minutes(&calendar.not_after)?;
    if not_before > not_after {
        return Err(format!(
            "window {} - {} ends before it starts",
            calendar.not_before, calendar.not_after
        ));
    }

    for event in &calendar.events {
        let begin = parse_minutes(&event.begin)?;
        let end = parse_minutes(&event.end)?;
        if begin > end {
            return Err(format!(
                "event {} - {} ends before it starts",
                event.begin, event.end
            ));
        }
    }
    Ok(())
}
