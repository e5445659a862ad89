//! Console rendering of the service's answer.

use std::io::{self, Write};

use crate::model::FreeSlotResponse;

pub const NO_SLOTS: &str = "No free slots found";
pub const HEADER: &str = "Found free slots";

/// Print the free intervals, one `"<begin> - <end>"` line each, in the order
/// the service returned them. An empty answer prints [`NO_SLOTS`] alone.
pub fn show_free_slots<W: Write>(response: &FreeSlotResponse, out: &mut W) -> io::Result<()> {
    if response.events.is_empty() {
        writeln!(out, "{}", NO_SLOTS)?;
        return Ok(());
    }

    writeln!(out, "{}", HEADER)?;
    for slot in &response.events {
        writeln!(out, "{} - {}", slot.begin, slot.end)?;
    }
    Ok(())
}
