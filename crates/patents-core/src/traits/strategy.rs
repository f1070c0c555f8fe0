//! Strategy trait definitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::StrategyError;
use crate::types::{PatentRecord, PatentUniverseRecord, Signal, Symbol};

/// Configuration trait for strategies.
pub trait StrategyConfig: Send + Sync + Clone + 'static {
    /// Validate the configuration.
    fn validate(&self) -> Result<(), StrategyError>;
}

/// State of a strategy for monitoring and serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyState {
    /// Strategy name
    pub name: String,
    /// Number of records processed
    pub records_processed: usize,
    /// Number of signals generated
    pub signals_generated: usize,
    /// Last observed metric values
    pub metrics: HashMap<String, String>,
    /// Custom strategy-specific state
    pub custom: serde_json::Value,
}

impl Default for StrategyState {
    fn default() -> Self {
        Self {
            name: String::new(),
            records_processed: 0,
            signals_generated: 0,
            metrics: HashMap::new(),
            custom: serde_json::Value::Null,
        }
    }
}

/// Strategy consuming a per-symbol patent time series.
pub trait Strategy: Send + Sync {
    /// Get the unique name of this strategy.
    fn name(&self) -> &str;

    /// Process the next record and optionally generate a signal.
    fn on_data(&mut self, record: &PatentRecord) -> Option<Signal>;

    /// Called when a signal has been executed.
    fn on_fill(&mut self, _signal: &Signal) {}

    /// Reset the strategy state.
    fn reset(&mut self);

    /// Get the current strategy state for monitoring.
    fn state(&self) -> StrategyState;

    /// Get the symbols this strategy trades.
    fn symbols(&self) -> &[String];

    /// Get a description of the strategy.
    fn description(&self) -> &str {
        ""
    }
}

/// Universe selection callback, invoked once per date with that date's
/// universe records.
pub trait UniverseSelector: Send + Sync {
    /// Get the unique name of this selector.
    fn name(&self) -> &str;

    /// Pick the symbols to trade from one date's universe.
    fn select(&mut self, date: NaiveDate, records: &[PatentUniverseRecord]) -> Vec<Symbol>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PatentMetrics, SignalType};
    use rust_decimal::Decimal;

    struct CountingStrategy {
        symbols: Vec<String>,
        seen: usize,
    }

    impl Strategy for CountingStrategy {
        fn name(&self) -> &str {
            "counting"
        }

        fn on_data(&mut self, record: &PatentRecord) -> Option<Signal> {
            self.seen += 1;
            (self.seen == 2).then(|| Signal {
                symbol: record.symbol.clone(),
                signal_type: SignalType::Buy,
                target_weight: Decimal::ONE,
                time: record.time,
                strategy_name: self.name().to_string(),
                reason: "second record".to_string(),
            })
        }

        fn reset(&mut self) {
            self.seen = 0;
        }

        fn state(&self) -> StrategyState {
            StrategyState {
                name: self.name().to_string(),
                records_processed: self.seen,
                ..Default::default()
            }
        }

        fn symbols(&self) -> &[String] {
            &self.symbols
        }
    }

    #[test]
    fn test_strategy_object() {
        let mut strategy: Box<dyn Strategy> = Box::new(CountingStrategy {
            symbols: vec!["AAPL".to_string()],
            seen: 0,
        });
        let record = PatentRecord::new(
            Symbol::equity("AAPL"),
            NaiveDate::from_ymd_opt(2022, 2, 14).unwrap(),
            PatentMetrics::default(),
        );

        assert!(strategy.on_data(&record).is_none());
        assert!(strategy.on_data(&record).is_some());
        assert_eq!(strategy.state().records_processed, 2);

        strategy.reset();
        assert_eq!(strategy.state().records_processed, 0);
        assert_eq!(strategy.description(), "");
    }
}
