//! Data source location traits.

use chrono::NaiveDate;
use std::fmt;
use std::path::PathBuf;

use crate::types::Symbol;

/// Where a data file lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    /// A file on local disk
    File(PathBuf),
    /// A remote URL
    Remote(String),
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLocation::File(path) => write!(f, "{}", path.display()),
            SourceLocation::Remote(url) => f.write_str(url),
        }
    }
}

/// Maps a request for patent data onto the file that holds it.
pub trait SourceLocator: Send + Sync {
    /// Location of the per-symbol time series file.
    fn time_series_source(&self, symbol: &Symbol) -> SourceLocation;

    /// Location of the universe file for one date.
    fn universe_source(&self, date: NaiveDate) -> SourceLocation;
}
