//! Command-line interface for epochal.
//!
//! Argument parsing and command dispatch only; every conversion goes through
//! the library with the clock resolved from flags and configuration.

use anyhow::{Context, Result};
use chrono::FixedOffset;
use clap::{Parser, Subcommand};

use epochal::clock::Clock;
use epochal::config::Config;
use epochal::parse::CivilValue;
use epochal::pattern::{Pattern, DATETIME_FORMAT};
use epochal::units::Unit;
use epochal::{format, parse, units};

#[derive(Debug, Parser)]
#[command(name = "epochal", version, about = "Convert between epoch instants and civil date-times")]
struct Cli {
    /// Fixed UTC offset such as +08:00, overriding the configured clock
    #[arg(long, global = true, allow_hyphen_values = true)]
    offset: Option<FixedOffset>,

    /// Load configuration from this file instead of the usual locations
    #[arg(long, global = true)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the current time
    Now {
        /// Render with this pattern instead of the configured default
        #[arg(long)]
        pattern: Option<String>,

        /// Use the standard pattern with milliseconds
        #[arg(long, conflicts_with = "pattern")]
        millis: bool,
    },

    /// Parse text with a named pattern
    Parse {
        text: String,

        /// Named pattern: date, datetime, datetime-millis or compact
        #[arg(long, default_value = "datetime")]
        pattern: Pattern,

        /// Keep the pattern's natural civil type instead of an instant
        #[arg(long)]
        civil: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse a date string, anchored at midnight
    Date { text: String },

    /// Parse a date-time string
    Datetime { text: String },

    /// Print the epoch milliseconds of a date-time string
    ToMillis { text: String },

    /// Convert a base-10 epoch-millisecond literal to a date-time
    FromMillis { millis: String },

    /// Count whole units between two date-time strings
    Diff {
        unit: Unit,
        start: String,
        end: String,
    },

    /// Shift a date-time string by a number of whole units
    Add {
        unit: Unit,

        /// Amount of units, negative to shift backward
        #[arg(allow_hyphen_values = true)]
        amount: i64,

        text: String,
    },

    /// Render an epoch-millisecond instant with a free-form pattern
    Format { millis: String, pattern: String },

    /// Write a default configuration file to the XDG config directory
    InitConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    if config.logging.enabled {
        setup_logging()?;
    }

    let clock = match cli.offset {
        Some(offset) => Clock::with_offset(offset),
        None => config.build_clock()?,
    };

    match cli.command {
        Command::Now { pattern, millis } => {
            let rendered = if millis {
                format::format_now_millis(&clock)
            } else {
                match pattern {
                    Some(pattern) => format::format_now(&clock, &pattern)?,
                    None => format::format_now(&clock, &config.output.default_pattern)?,
                }
            };
            println!("{rendered}");
        }

        Command::Parse {
            text,
            pattern,
            civil,
            json,
        } => {
            if civil {
                let value = parse::parse_with_pattern(&clock, &text, pattern)
                    .with_context(|| format!("Failed to parse '{text}'"))?;
                print_civil(&value, json);
            } else {
                let instant = parse::parse(&clock, &text, pattern)
                    .with_context(|| format!("Failed to parse '{text}'"))?;
                print_instant(instant, json);
            }
        }

        Command::Date { text } => {
            let instant = parse::parse_date(&clock, &text)
                .with_context(|| format!("Failed to parse date '{text}'"))?;
            println!("{}", instant.to_rfc3339());
        }

        Command::Datetime { text } => {
            let instant = parse::parse_datetime(&clock, &text)
                .with_context(|| format!("Failed to parse date-time '{text}'"))?;
            println!("{}", instant.to_rfc3339());
        }

        Command::ToMillis { text } => {
            let millis = parse::to_epoch_millis(&clock, &text)
                .with_context(|| format!("Failed to parse date-time '{text}'"))?;
            println!("{millis}");
        }

        Command::FromMillis { millis } => {
            let instant = parse::from_epoch_millis(&millis)
                .with_context(|| format!("Invalid epoch milliseconds '{millis}'"))?;
            println!(
                "{}",
                format::format_instant(&clock, instant, &config.output.default_pattern)?
            );
        }

        Command::Diff { unit, start, end } => {
            let a = parse::parse_datetime(&clock, &start)
                .with_context(|| format!("Failed to parse date-time '{start}'"))?;
            let b = parse::parse_datetime(&clock, &end)
                .with_context(|| format!("Failed to parse date-time '{end}'"))?;
            println!("{}", units::between(&clock, unit, a, b));
        }

        Command::Add { unit, amount, text } => {
            let start = parse::parse_datetime(&clock, &text)
                .with_context(|| format!("Failed to parse date-time '{text}'"))?;
            let shifted = units::plus(&clock, unit, start, amount)
                .with_context(|| format!("Cannot add {amount} {unit} to '{text}'"))?;
            println!("{}", format::format_instant(&clock, shifted, DATETIME_FORMAT)?);
        }

        Command::Format { millis, pattern } => {
            let instant = parse::from_epoch_millis(&millis)
                .with_context(|| format!("Invalid epoch milliseconds '{millis}'"))?;
            println!("{}", format::format_instant(&clock, instant, &pattern)?);
        }

        Command::InitConfig => {
            let path = Config::get_default_config_path()?;
            Config::generate_default_config(path)?;
        }
    }

    Ok(())
}

fn print_instant(instant: chrono::DateTime<chrono::Utc>, json: bool) {
    if json {
        let payload = serde_json::json!({
            "kind": "instant",
            "epoch_millis": instant.timestamp_millis(),
            "rfc3339": instant.to_rfc3339(),
        });
        println!("{payload}");
    } else {
        println!("{}", instant.to_rfc3339());
    }
}

fn print_civil(value: &CivilValue, json: bool) {
    if json {
        let payload = match value {
            CivilValue::Instant(instant) => serde_json::json!({
                "kind": value.kind(),
                "epoch_millis": instant.timestamp_millis(),
                "rfc3339": instant.to_rfc3339(),
            }),
            _ => serde_json::json!({
                "kind": value.kind(),
                "value": value.to_string(),
            }),
        };
        println!("{payload}");
    } else {
        println!("{value}");
    }
}

fn setup_logging() -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format(DATETIME_FORMAT),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(std::io::stderr())
        .apply()
        .context("Failed to initialize logging")?;
    Ok(())
}
