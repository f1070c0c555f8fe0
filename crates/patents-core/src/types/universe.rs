//! Per-date universe snapshot records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::record::write_summary;
use super::{PatentData, PatentMetrics, Symbol, METRIC_COLUMNS};
use crate::error::RecordResult;
use crate::parse::{expect_columns, observation_date, split_line};
use crate::traits::SymbolResolver;

/// Columns in a universe row: identifier, ticker, then the metrics.
pub const UNIVERSE_COLUMNS: usize = 2 + METRIC_COLUMNS;

/// Patent filing metrics for one symbol within a dated universe file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatentUniverseRecord {
    /// Resolved symbol
    pub symbol: Symbol,
    /// Observation date (file date minus the lag)
    pub time: NaiveDate,
    /// Filing metrics
    pub metrics: PatentMetrics,
}

impl PatentUniverseRecord {
    /// Create a record from its parts.
    pub fn new(symbol: Symbol, time: NaiveDate, metrics: PatentMetrics) -> Self {
        Self {
            symbol,
            time,
            metrics,
        }
    }

    /// Parse one line of the universe file for `date`.
    pub fn parse_line(
        line: &str,
        date: NaiveDate,
        resolver: &dyn SymbolResolver,
    ) -> RecordResult<Self> {
        Self::from_fields(&split_line(line), date, resolver)
    }

    /// Build a record from pre-split columns.
    pub fn from_fields<S: AsRef<str>>(
        fields: &[S],
        date: NaiveDate,
        resolver: &dyn SymbolResolver,
    ) -> RecordResult<Self> {
        expect_columns(fields, UNIVERSE_COLUMNS)?;

        // Metrics first so a malformed row never reaches the resolver.
        let metrics = PatentMetrics::from_fields(&fields[2..], 2)?;
        let symbol = resolver.resolve(fields[0].as_ref(), fields[1].as_ref().trim(), date)?;

        Ok(Self {
            symbol,
            time: observation_date(date),
            metrics,
        })
    }

    /// Render the record as a row of its dated universe file.
    ///
    /// The date is not written; it is implied by the file name.
    pub fn to_csv_line(&self) -> String {
        format!(
            "{},{},{}",
            self.symbol.id,
            self.symbol.ticker,
            self.metrics.to_csv_columns()
        )
    }
}

impl PatentData for PatentUniverseRecord {
    fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    fn time(&self) -> NaiveDate {
        self.time
    }

    fn metrics(&self) -> &PatentMetrics {
        &self.metrics
    }
}

impl fmt::Display for PatentUniverseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_summary(f, self)
    }
}

/// All universe records sharing one file date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniverseSnapshot {
    /// File date
    pub date: NaiveDate,
    /// Records in file order
    pub records: Vec<PatentUniverseRecord>,
}

impl UniverseSnapshot {
    /// Create a snapshot for a date.
    pub fn new(date: NaiveDate, records: Vec<PatentUniverseRecord>) -> Self {
        Self { date, records }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find the record for a symbol.
    pub fn get(&self, symbol: &Symbol) -> Option<&PatentUniverseRecord> {
        self.records.iter().find(|r| &r.symbol == symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PatentUniverseRecord> {
        self.records.iter()
    }

    pub fn symbols(&self) -> Vec<Symbol> {
        self.records.iter().map(|r| r.symbol.clone()).collect()
    }
}
