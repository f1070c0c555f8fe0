//! Record caching.

use chrono::NaiveDate;
use patents_core::{PatentRecord, Symbol, UniverseSnapshot};
use std::collections::HashMap;

/// Simple in-memory record cache.
///
/// Reads hand out clones so callers never share storage with the cache.
#[derive(Debug, Default)]
pub struct RecordCache {
    series: HashMap<Symbol, Vec<PatentRecord>>,
    universes: HashMap<NaiveDate, UniverseSnapshot>,
}

impl RecordCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a copy of the cached time series for a symbol.
    pub fn series(&self, symbol: &Symbol) -> Option<Vec<PatentRecord>> {
        self.series.get(symbol).cloned()
    }

    /// Store a time series.
    pub fn put_series(&mut self, symbol: Symbol, records: Vec<PatentRecord>) {
        self.series.insert(symbol, records);
    }

    /// Get a copy of the cached universe for a date.
    pub fn universe(&self, date: NaiveDate) -> Option<UniverseSnapshot> {
        self.universes.get(&date).cloned()
    }

    /// Store a universe snapshot under its file date.
    pub fn put_universe(&mut self, snapshot: UniverseSnapshot) {
        self.universes.insert(snapshot.date, snapshot);
    }

    /// Clear cached data for a symbol.
    pub fn clear(&mut self, symbol: &Symbol) {
        self.series.remove(symbol);
    }

    /// Clear all cached data.
    pub fn clear_all(&mut self) {
        self.series.clear();
        self.universes.clear();
    }

    /// Number of cached entries (series plus universe dates).
    pub fn len(&self) -> usize {
        self.series.len() + self.universes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patents_core::PatentMetrics;
    use rust_decimal_macros::dec;

    fn record() -> PatentRecord {
        PatentRecord::new(
            Symbol::equity("AAPL"),
            NaiveDate::from_ymd_opt(2022, 2, 14).unwrap(),
            PatentMetrics {
                patents_filed: dec!(5),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_cached_series_is_isolated() {
        let mut cache = RecordCache::new();
        let symbol = Symbol::equity("AAPL");
        cache.put_series(symbol.clone(), vec![record()]);

        let mut copy = cache.series(&symbol).unwrap();
        copy[0].metrics.patents_filed = dec!(0);

        assert_eq!(cache.series(&symbol).unwrap()[0].metrics.patents_filed, dec!(5));
    }

    #[test]
    fn test_universe_and_clear() {
        let mut cache = RecordCache::new();
        let date = NaiveDate::from_ymd_opt(2022, 2, 15).unwrap();
        cache.put_universe(UniverseSnapshot::new(date, vec![]));
        cache.put_series(Symbol::equity("AAPL"), vec![record()]);
        assert_eq!(cache.len(), 2);
        assert!(cache.universe(date).is_some());

        cache.clear(&Symbol::equity("AAPL"));
        assert_eq!(cache.len(), 1);

        cache.clear_all();
        assert!(cache.is_empty());
    }
}
