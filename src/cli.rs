// src/cli.rs

//! CLI argument parsing using `clap`.

use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};

/// Command-line arguments for `plandag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "plandag",
    version,
    about = "Compute a dependency-respecting execution order for a set of tasks.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the request file (TOML).
    ///
    /// Default: `Plandag.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Plandag.toml")]
    pub request: String,

    /// Output format for the computed schedule.
    #[arg(long, value_enum, value_name = "FORMAT", default_value = "text")]
    pub format: OutputFormat,

    /// After scheduling, check the order against task due dates assuming
    /// sequential single-worker execution.
    #[arg(long)]
    pub feasibility: bool,

    /// Simulation start instant for --feasibility (RFC 3339, e.g.
    /// "2026-08-05T09:00:00Z").
    ///
    /// If omitted, the current time is used.
    #[arg(long, value_name = "TIMESTAMP")]
    pub now: Option<DateTime<Utc>>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PLANDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse the request and print the tasks, but don't schedule anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Output format as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Numbered order lines plus a summary.
    Text,
    /// The serialized response object.
    Json,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Filter directive understood by `tracing-subscriber`.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
