//! CLI definitions.

pub mod commands;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "patents")]
#[command(author, version, about = "Patent filing data adapter and example algorithms")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level, defaults to the configured `logging.level`
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// The `--log-level` flag when given, else the configured level.
    pub fn log_level_or<'a>(&self, configured: &'a str) -> &'a str {
        match &self.log_level {
            Some(level) => level.as_str(),
            None => configured,
        }
    }
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a single vendor line and print the record
    Parse(ParseArgs),
    /// Replay the patent signal strategy over one symbol's time series
    Signals(SignalsArgs),
    /// Replay universe selection over a date range
    Universe(UniverseArgs),
    /// List available strategies
    Strategies,
    /// Validate configuration
    ValidateConfig,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RecordKind {
    /// Per-symbol row: date, then nine metrics
    Series,
    /// Universe row: identifier, ticker, then nine metrics
    Universe,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(clap::Args)]
pub struct ParseArgs {
    /// Raw CSV line
    pub line: String,

    /// Record kind of the line
    #[arg(short, long, default_value = "universe")]
    pub kind: RecordKind,

    /// Context date (YYYY-MM-DD), the file date for universe rows
    #[arg(short, long)]
    pub date: NaiveDate,

    /// Ticker the series row belongs to
    #[arg(short, long, default_value = "AAPL")]
    pub symbol: String,

    /// Output format
    #[arg(long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct SignalsArgs {
    /// Ticker to replay
    #[arg(short, long)]
    pub symbol: String,

    /// Start date (YYYY-MM-DD), defaults to the configured replay start
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// End date (YYYY-MM-DD), defaults to the configured replay end
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Output format
    #[arg(long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct UniverseArgs {
    /// Start date (YYYY-MM-DD), defaults to the configured replay start
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// End date (YYYY-MM-DD), defaults to the configured replay end
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Output format
    #[arg(long, default_value = "text")]
    pub output: OutputFormat,
}
