//! Error types for patent data parsing and consumption.

use thiserror::Error;

/// A date column did not match the exact `yyyy-MM-dd` pattern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid date '{value}': expected yyyy-MM-dd")]
pub struct FormatError {
    pub value: String,
}

/// A line could not be turned into numeric columns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Expected {expected} columns, found {found}")]
    ColumnCount { expected: usize, found: usize },

    #[error("Column {column}: '{value}' is not a decimal number")]
    InvalidNumber { column: usize, value: String },
}

/// A composite security identifier could not be resolved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Cannot resolve identifier '{identifier}': {reason}")]
pub struct ResolutionError {
    pub identifier: String,
    pub reason: String,
}

impl ResolutionError {
    pub fn new(identifier: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            reason: reason.into(),
        }
    }
}

/// Failure to build a record from a single input line.
///
/// Every variant is terminal for the line; no partial record is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Resolution error: {0}")]
    Resolution(#[from] ResolutionError),
}

/// Data source errors.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Source not found: {0}")]
    SourceNotFound(String),

    #[error("Unsupported source: {0}")]
    Unsupported(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("{source_name} line {line}: {error}")]
    Record {
        source_name: String,
        line: u64,
        error: RecordError,
    },

    #[error("{source_name} line {line}: {reason}")]
    Encoding {
        source_name: String,
        line: u64,
        reason: String,
    },
}

/// Strategy-specific errors.
#[derive(Error, Debug)]
pub enum StrategyError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Strategy not found: {0}")]
    NotFound(String),

    #[error("Strategy kind mismatch: {0}")]
    KindMismatch(String),
}

/// Result type alias for record parsing.
pub type RecordResult<T> = Result<T, RecordError>;
