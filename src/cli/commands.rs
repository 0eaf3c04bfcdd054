//! CLI command definitions

use crate::domain::Interval;
use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chrono-notes")]
#[command(about = "Open periodic Obsidian notes, creating them from templates", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Ordinal and interval (e.g., CurrentDaily, NextWeekly, PreviousMonthly)
    #[arg(value_name = "CHRONO_ARG")]
    pub chrono_arg: Option<String>,

    /// Resolve relative to this date (YYYY-MM-DD) instead of today
    #[arg(long, value_name = "DATE", value_parser = parse_reference_date, global = true)]
    pub date: Option<NaiveDate>,

    /// TOML config file (environment variables take precedence)
    #[arg(long, value_name = "FILE", env = "CHRONO_NOTES_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Create the note but do not hand it to Obsidian
    #[arg(long)]
    pub no_open: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the resolved configuration
    Config {
        /// Only show this interval (daily, weekly, monthly, quarterly, annually)
        #[arg(value_parser = parse_interval)]
        interval: Option<Interval>,
    },
}

fn parse_reference_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date '{}', expected YYYY-MM-DD", value))
}

fn parse_interval(value: &str) -> Result<Interval, String> {
    value.parse()
}
