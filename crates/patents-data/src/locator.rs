//! File layout of the patent data set.

use chrono::NaiveDate;
use patents_core::parse::FILE_DATE_FORMAT;
use patents_core::{SourceLocation, SourceLocator, Symbol};
use std::path::{Path, PathBuf};

/// Default data set directory below the data root.
pub const DEFAULT_DATASET: &str = "alternative/granted_patents";

/// Locates patent files under a local data root.
///
/// Layout:
/// - `{root}/{dataset}/{ticker}.csv` per symbol (lower case ticker)
/// - `{root}/{dataset}/universe/{yyyymmdd}.csv` per date
#[derive(Debug, Clone)]
pub struct FileLocator {
    base: PathBuf,
}

impl FileLocator {
    /// Create a locator for `dataset` below `root`.
    pub fn new(root: impl AsRef<Path>, dataset: &str) -> Self {
        Self {
            base: root.as_ref().join(dataset),
        }
    }

    /// Directory holding the per-symbol files.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Directory holding the universe files.
    pub fn universe_dir(&self) -> PathBuf {
        self.base.join("universe")
    }
}

impl SourceLocator for FileLocator {
    fn time_series_source(&self, symbol: &Symbol) -> SourceLocation {
        let file = format!("{}.csv", symbol.ticker.to_lowercase());
        SourceLocation::File(self.base.join(file))
    }

    fn universe_source(&self, date: NaiveDate) -> SourceLocation {
        let file = format!("{}.csv", date.format(FILE_DATE_FORMAT));
        SourceLocation::File(self.universe_dir().join(file))
    }
}
