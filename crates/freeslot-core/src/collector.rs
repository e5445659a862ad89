//! Interactive collection of day calendars.
//!
//! Both loops ask a `[Y/n]` question before each new item. The answer is
//! parsed explicitly: an empty line, `y` or `yes` continues; `n` or `no`
//! stops; anything else is rejected and the question is asked again. End of
//! input on a question counts as `no`, so piped input without a trailing
//! answer still terminates.

use std::io::{BufRead, Write};

use log::debug;

use crate::error::{FreeSlotError, Result};
use crate::model::{CalendarSet, DayCalendar, Event};

const ANOTHER_CALENDAR: &str = "Insert another calendar?[Y/n]: ";
const ANOTHER_EVENT: &str = "Add another event?[Y/n]: ";
const NOT_BEFORE: &str = "Insert Early Time Limit: ";
const NOT_AFTER: &str = "Insert Late Time Limit: ";
const EVENT_BEGIN: &str = "Event Begin: ";
const EVENT_END: &str = "Event End: ";
const REPROMPT: &str = "Please answer y or n.";

/// Line-oriented console: writes a prompt, reads one answer.
///
/// Generic over the reader and writer so the same loops run against stdin and
/// stdout or against an in-memory script.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Everything written so far.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Ask for a free-form value.
    ///
    /// The line terminator is stripped; nothing else is. An empty line is a
    /// valid (empty) value.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        match self.read_answer(prompt)? {
            Some(value) => Ok(value),
            None => Err(FreeSlotError::UnexpectedEof {
                prompt: prompt.trim_end().to_string(),
            }),
        }
    }

    /// Ask a `[Y/n]` question until the answer is recognizable.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        loop {
            let Some(answer) = self.read_answer(question)? else {
                return Ok(false);
            };
            match parse_answer(&answer) {
                Some(yes) => return Ok(yes),
                None => {
                    debug!("rejected answer {:?} to {:?}", answer, question.trim_end());
                    writeln!(self.output, "{}", REPROMPT)?;
                }
            }
        }
    }

    /// Write the prompt and read one line. `None` means end of input.
    fn read_answer(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

/// Interpret a `[Y/n]` answer. Empty input takes the default, `yes`.
fn parse_answer(answer: &str) -> Option<bool> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "" | "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Prompt for calendars until the user declines another one.
///
/// Returns an empty set when the very first answer is negative.
pub fn collect_calendars<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<CalendarSet> {
    let mut calendars = Vec::new();
    while prompter.confirm(ANOTHER_CALENDAR)? {
        calendars.push(input_day_calendar(prompter)?);
    }
    debug!("collected {} calendar(s)", calendars.len());
    Ok(calendars)
}

/// Prompt for one calendar: its time window, then busy events until the user
/// declines another one.
pub fn input_day_calendar<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<DayCalendar> {
    let not_before = prompter.ask(NOT_BEFORE)?;
    let not_after = prompter.ask(NOT_AFTER)?;

    let mut events = Vec::new();
    while prompter.confirm(ANOTHER_EVENT)? {
        let begin = prompter.ask(EVENT_BEGIN)?;
        let end = prompter.ask(EVENT_END)?;
        events.push(Event::new(begin, end));
    }

    Ok(DayCalendar {
        not_before,
        not_after,
        events,
    })
}
