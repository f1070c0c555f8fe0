//! File-backed data sources for patent filing data.

mod cache;
mod csv_source;
mod locator;
mod resolver;

pub use cache::RecordCache;
pub use csv_source::{ErrorPolicy, PatentDataSource};
pub use locator::{FileLocator, DEFAULT_DATASET};
pub use resolver::IdentifierResolver;

use std::path::Path;

/// Build a data source over the standard file layout below `root`.
pub fn file_source(root: &Path, dataset: &str, policy: ErrorPolicy) -> PatentDataSource {
    PatentDataSource::new(FileLocator::new(root, dataset), IdentifierResolver::new())
        .with_policy(policy)
}
