//! Innovation Universe selection.
//!
//! Selects companies with recent patent activity and broad technology
//! coverage, most diverse first.

use chrono::NaiveDate;
use patents_core::{
    error::StrategyError,
    traits::{StrategyConfig, UniverseSelector},
    types::{PatentUniverseRecord, Symbol},
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Configuration for the Innovation Universe selector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InnovationUniverseConfig {
    /// Trailing 90 day filings must exceed this
    pub min_patents_90d: Decimal,
    /// Tech diversity must exceed this
    pub min_tech_diversity: Decimal,
    /// Cumulative filings must exceed this
    pub min_cumulative_patents: Decimal,
}

impl Default for InnovationUniverseConfig {
    fn default() -> Self {
        Self {
            min_patents_90d: Decimal::ZERO,
            min_tech_diversity: dec!(0.5),
            min_cumulative_patents: dec!(10),
        }
    }
}

impl StrategyConfig for InnovationUniverseConfig {
    fn validate(&self) -> Result<(), StrategyError> {
        if self.min_tech_diversity < Decimal::ZERO || self.min_tech_diversity > Decimal::ONE {
            return Err(StrategyError::InvalidConfig(
                "Minimum tech diversity must be between 0 and 1".into(),
            ));
        }
        if self.min_patents_90d < Decimal::ZERO || self.min_cumulative_patents < Decimal::ZERO {
            return Err(StrategyError::InvalidConfig(
                "Patent count thresholds must not be negative".into(),
            ));
        }
        Ok(())
    }
}

/// Innovation Universe selector.
pub struct InnovationUniverse {
    config: InnovationUniverseConfig,
    dates_processed: usize,
}

impl InnovationUniverse {
    /// Create a new Innovation Universe selector.
    pub fn new(config: InnovationUniverseConfig) -> Self {
        Self {
            config,
            dates_processed: 0,
        }
    }

    /// Number of universe dates seen.
    pub fn dates_processed(&self) -> usize {
        self.dates_processed
    }

    /// Whether a record passes every threshold.
    pub fn is_eligible(&self, record: &PatentUniverseRecord) -> bool {
        let m = &record.metrics;
        m.patents_90d > self.config.min_patents_90d
            && m.tech_diversity > self.config.min_tech_diversity
            && m.cumulative_patents > self.config.min_cumulative_patents
    }
}

impl UniverseSelector for InnovationUniverse {
    fn name(&self) -> &str {
        "Innovation Universe"
    }

    fn select(&mut self, date: NaiveDate, records: &[PatentUniverseRecord]) -> Vec<Symbol> {
        self.dates_processed += 1;

        for record in records {
            info!("{}", record);
        }

        let mut selected: Vec<&PatentUniverseRecord> =
            records.iter().filter(|r| self.is_eligible(r)).collect();

        // Stable sort keeps file order between equal diversities.
        selected.sort_by(|a, b| b.metrics.tech_diversity.cmp(&a.metrics.tech_diversity));

        info!(
            "{}: selected {} of {} symbols on {}",
            self.name(),
            selected.len(),
            records.len(),
            date
        );

        selected.into_iter().map(|r| r.symbol.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patents_core::types::PatentMetrics;

    fn record(ticker: &str, diversity: Decimal, patents_90d: Decimal) -> PatentUniverseRecord {
        PatentUniverseRecord::new(
            Symbol::equity(ticker),
            NaiveDate::from_ymd_opt(2022, 2, 14).unwrap(),
            PatentMetrics {
                patents_90d,
                tech_diversity: diversity,
                cumulative_patents: dec!(100),
                ..Default::default()
            },
        )
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 2, 15).unwrap()
    }

    #[test]
    fn test_selection_filters_and_sorts() {
        let records = vec![
            record("LOW", dec!(0.3), dec!(0)),
            record("MID", dec!(0.6), dec!(5)),
            record("HIGH", dec!(0.9), dec!(5)),
        ];

        let mut universe = InnovationUniverse::new(InnovationUniverseConfig::default());
        let selected = universe.select(date(), &records);

        let tickers: Vec<&str> = selected.iter().map(|s| s.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["HIGH", "MID"]);
        assert_eq!(universe.dates_processed(), 1);
    }

    #[test]
    fn test_cumulative_threshold() {
        let mut young = record("NEW", dec!(0.9), dec!(5));
        young.metrics.cumulative_patents = dec!(10);

        let mut universe = InnovationUniverse::new(InnovationUniverseConfig::default());
        assert!(universe.select(date(), &[young]).is_empty());
    }

    #[test]
    fn test_thresholds_are_strict() {
        let universe = InnovationUniverse::new(InnovationUniverseConfig::default());
        assert!(!universe.is_eligible(&record("EDGE", dec!(0.5), dec!(5))));
        assert!(universe.is_eligible(&record("OVER", dec!(0.51), dec!(1))));
    }

    #[test]
    fn test_equal_diversity_keeps_file_order() {
        let records = vec![
            record("B", dec!(0.7), dec!(5)),
            record("A", dec!(0.7), dec!(5)),
        ];
        let mut universe = InnovationUniverse::new(InnovationUniverseConfig::default());
        let tickers: Vec<String> = universe
            .select(date(), &records)
            .into_iter()
            .map(|s| s.ticker)
            .collect();
        assert_eq!(tickers, vec!["B", "A"]);
    }

    #[test]
    fn test_config_validation() {
        assert!(InnovationUniverseConfig::default().validate().is_ok());

        let config = InnovationUniverseConfig {
            min_tech_diversity: dec!(2),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
