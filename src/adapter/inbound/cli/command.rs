//! Command-line interface definitions.
//!
//! Invoked without arguments the binary resets `School.db` in the working
//! directory, runs the sample enrollment and prints the report. Every flag
//! is an optional override of that default.

use clap::Parser;
use std::path::PathBuf;

/// Students, subjects and enrollments persisted to SQLite
#[derive(Parser, Debug, Default)]
#[command(name = "school")]
#[command(version, about)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the database file
    #[arg(long)]
    pub database: Option<PathBuf>,

    /// Keep existing rows instead of resetting the schema
    #[arg(long)]
    pub no_reset: bool,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,
}
