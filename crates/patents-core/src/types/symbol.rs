//! Security identity types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical security identifier, stable across ticker renames.
///
/// The vendor feed writes identifiers as whitespace-separated tokens such as
/// `AAPL US EQUITY`; the canonical form is upper case with single spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecurityIdentifier(String);

impl SecurityIdentifier {
    /// Build an identifier from already-canonical text.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Normalise raw identifier text: trim, collapse whitespace, upper case.
    pub fn normalize(raw: &str) -> Self {
        let joined = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        Self(joined.to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SecurityIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A tradeable symbol: canonical identity plus display ticker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol {
    /// Canonical identifier
    pub id: SecurityIdentifier,
    /// Ticker as displayed on the date of the data
    pub ticker: String,
}

impl Symbol {
    /// Create a symbol from an identifier and ticker.
    pub fn new(id: SecurityIdentifier, ticker: impl Into<String>) -> Self {
        Self {
            id,
            ticker: ticker.into(),
        }
    }

    /// Create a US equity symbol from a bare ticker.
    pub fn equity(ticker: &str) -> Self {
        let ticker = ticker.trim().to_uppercase();
        Self {
            id: SecurityIdentifier::new(format!("{} US EQUITY", ticker)),
            ticker,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ticker)
    }
}
