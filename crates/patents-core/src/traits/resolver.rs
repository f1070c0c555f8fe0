//! Security identifier resolution.

use chrono::NaiveDate;

use crate::error::ResolutionError;
use crate::types::Symbol;

/// Turns a vendor's composite security identifier into a canonical symbol.
///
/// Implementations may consult a ticker mapping so that renamed securities
/// keep a stable identity.
pub trait SymbolResolver: Send + Sync {
    /// Resolve `identifier` as of `date`; `ticker` is the display ticker on
    /// the same row.
    fn resolve(
        &self,
        identifier: &str,
        ticker: &str,
        date: NaiveDate,
    ) -> Result<Symbol, ResolutionError>;
}
