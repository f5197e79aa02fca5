//! CLI argument definitions for the menu ingestion tool.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "menu-ingest",
    version,
    about = "School-meal menu ingestion - parse uploaded menu sheets",
    long_about = "Parse an uploaded weekly menu sheet (CSV) into validated,\n\
                  deduplicated menu items plus an error/warning report.\n\
                  Column headers are matched against Russian and English aliases."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a menu sheet and report the extracted items.
    Parse(ParseArgs),

    /// List the logical fields and their recognized header aliases.
    Fields,
}

#[derive(Parser)]
pub struct ParseArgs {
    /// Path to the menu CSV file.
    #[arg(value_name = "MENU_FILE")]
    pub menu_file: PathBuf,

    /// School (tenant) id to stamp on every item.
    #[arg(long = "school-id", value_name = "ID")]
    pub school_id: String,

    /// Write the full parse result as JSON to this path.
    #[arg(long = "json", value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Override the stamped week start (Monday, YYYY-MM-DD).
    ///
    /// Defaults to the Monday of the current calendar week. Useful for
    /// reproducible runs and for uploading a menu ahead of time.
    #[arg(long = "week-start", value_name = "YYYY-MM-DD")]
    pub week_start: Option<NaiveDate>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
