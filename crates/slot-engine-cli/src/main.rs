//! `slots` — command-line front end for the slot-engine library.
//!
//! Reads an operating-hours policy as JSON on stdin (the shape of a remote
//! vendor record) and either lists a day's start-time slots or checks one
//! requested booking window.

use std::io::Read;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use slot_engine::{generate_slots, validate, OperatingHoursPolicy};

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Booking availability for storage vendors (policy JSON on stdin)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the start-time slots for a day
    List {
        /// Booking date (YYYY-MM-DD); omit to enumerate from the hours alone
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Requested booking duration in whole hours
        #[arg(long)]
        duration: i64,

        /// Emit the slot list as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Check whether a specific booking window is legal
    Check {
        /// Booking date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,

        /// Start time (HH:MM)
        #[arg(long, value_parser = parse_hm)]
        start: NaiveTime,

        /// Requested booking duration in whole hours
        #[arg(long)]
        duration: i64,
    },
}

fn parse_hm(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|e| format!("invalid time '{s}': {e}"))
}

fn read_policy() -> Result<OperatingHoursPolicy> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("reading policy from stdin")?;
    serde_json::from_str(&buf).context("parsing operating-hours policy JSON")
}

fn run(command: Command) -> Result<ExitCode> {
    match command {
        Command::List {
            date,
            duration,
            json,
        } => {
            let policy = read_policy()?;
            let slots = generate_slots(&policy, date, duration)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&slots)?);
            } else if slots.is_empty() {
                println!("No slots: vendor is closed that day.");
            } else {
                for slot in &slots {
                    if slot.is_available {
                        println!("{}  available", slot.time.format("%H:%M"));
                    } else {
                        println!("{}  unavailable ({})", slot.time.format("%H:%M"), slot.reason);
                    }
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Check {
            date,
            start,
            duration,
        } => {
            let policy = read_policy()?;
            let verdict = validate(date, start, duration, &policy)?;
            if verdict.is_valid {
                println!("OK");
                Ok(ExitCode::SUCCESS)
            } else {
                eprintln!("{}", verdict.error_message);
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    run(cli.command)
}
