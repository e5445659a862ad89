//! `freeslot` CLI — ask a free-slot service when every calendar is free.
//!
//! ## Usage
//!
//! ```sh
//! # Enter calendars interactively, query the default local service
//! freeslot
//!
//! # Point at another service and give it five seconds
//! freeslot --endpoint http://scheduler.internal:8088/api --timeout 5
//!
//! # Same, configured through the environment
//! FREESLOT_ENDPOINT=http://scheduler.internal:8088/api freeslot
//!
//! # Read calendars from a file and check the time strings first
//! freeslot --input calendars.json --strict
//! ```
//!
//! Logging goes to stderr and is controlled by `FREESLOT_LOG`
//! (`env_logger` filter syntax, default `warn`).

use anyhow::{Context, Result};
use clap::Parser;
use freeslot_core::{
    collect_calendars, parse_calendars, show_free_slots, validate_calendars, CalendarSet,
    ClientConfig, FreeSlotError, FreeSlotService, HttpFreeSlotService, Prompter,
};
use log::{debug, info};
use std::env;
use std::io;
use std::process::ExitCode;
use std::time::Duration;

const LOG_ENV: &str = "FREESLOT_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser)]
#[command(
    name = "freeslot",
    version,
    about = "Collect calendars and ask a free-slot service when all of them are free"
)]
struct Cli {
    /// URL of the free-slot service
    #[arg(long, env = "FREESLOT_ENDPOINT", default_value = ClientConfig::DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Seconds to wait for the service before giving up
    #[arg(
        long,
        env = "FREESLOT_TIMEOUT",
        default_value_t = ClientConfig::DEFAULT_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,

    /// Read calendars from a JSON file instead of prompting
    #[arg(short, long)]
    input: Option<String>,

    /// Check that every time is a valid `H:MM` and no range is inverted
    #[arg(long)]
    strict: bool,
}

fn main() -> ExitCode {
    setup_logging();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Configuration problems surface before the user types anything.
    let config = ClientConfig::new(cli.endpoint, Duration::from_secs(cli.timeout));
    let service = HttpFreeSlotService::new(config)?;

    let calendars = match cli.input.as_deref() {
        Some(path) => read_calendars(path)?,
        None => {
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), io::stdout());
            collect_calendars(&mut prompter).context("Failed to collect calendars")?
        }
    };

    if cli.strict {
        validate_calendars(&calendars).context("Calendar validation failed")?;
        debug!("{} calendar(s) passed validation", calendars.len());
    }

    let config = service.config();
    info!("querying {} (timeout {:?})", config.endpoint, config.timeout);

    let free = service
        .find_free_slots(&calendars)
        .context("Failed to look up free slots")?;

    let stdout = io::stdout();
    show_free_slots(&free, &mut stdout.lock())
        .map_err(FreeSlotError::from)
        .context("Failed to print free slots")?;

    Ok(())
}

fn read_calendars(path: &str) -> Result<CalendarSet> {
    let json = std::fs::read_to_string(path)
        .map_err(FreeSlotError::from)
        .with_context(|| format!("Failed to read file: {}", path))?;
    let calendars =
        parse_calendars(&json).with_context(|| format!("Failed to parse calendars in {}", path))?;
    Ok(calendars)
}

/// Exit code for a failure; `1` when it did not come from the core taxonomy.
fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<FreeSlotError>()
        .map_or(1, FreeSlotError::exit_code)
}

fn setup_logging() {
    let filter = env::var(LOG_ENV).unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());
    pretty_env_logger::formatted_builder()
        .parse_filters(&filter)
        .init();
}
