//! Patent Signal Strategy.
//!
//! Buys a symbol when it files patents, sizing the position by how diverse
//! its technology classifications are.

use patents_core::{
    error::StrategyError,
    traits::{Strategy, StrategyConfig, StrategyState},
    types::{PatentMetrics, PatentRecord, Signal, SignalType},
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for the Patent Signal strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatentSignalConfig {
    /// Symbols to trade
    pub symbols: Vec<String>,
    /// Tech diversity above which the full weight is used
    pub diversity_threshold: Decimal,
    /// Target weight for diverse filers
    pub high_weight: Decimal,
    /// Target weight for narrow filers
    pub low_weight: Decimal,
}

impl Default for PatentSignalConfig {
    fn default() -> Self {
        Self {
            symbols: vec![],
            diversity_threshold: dec!(0.5),
            high_weight: dec!(1.0),
            low_weight: dec!(0.5),
        }
    }
}

impl StrategyConfig for PatentSignalConfig {
    fn validate(&self) -> Result<(), StrategyError> {
        if self.diversity_threshold < Decimal::ZERO || self.diversity_threshold > Decimal::ONE {
            return Err(StrategyError::InvalidConfig(
                "Diversity threshold must be between 0 and 1".into(),
            ));
        }
        for weight in [self.high_weight, self.low_weight] {
            if weight <= Decimal::ZERO || weight > Decimal::ONE {
                return Err(StrategyError::InvalidConfig(
                    "Weights must be in (0, 1]".into(),
                ));
            }
        }
        if self.symbols.is_empty() {
            return Err(StrategyError::InvalidConfig(
                "At least one symbol required".into(),
            ));
        }
        Ok(())
    }
}

/// Patent Signal Strategy.
pub struct PatentSignalStrategy {
    config: PatentSignalConfig,
    invested: bool,
    /// Weight of the filled position, repeated on hold signals
    position_weight: Decimal,
    last_metrics: Option<PatentMetrics>,
    records_processed: usize,
    signals_generated: usize,
}

impl PatentSignalStrategy {
    /// Create a new Patent Signal strategy.
    pub fn new(config: PatentSignalConfig) -> Self {
        Self {
            config,
            invested: false,
            position_weight: Decimal::ZERO,
            last_metrics: None,
            records_processed: 0,
            signals_generated: 0,
        }
    }

    /// Whether a fill has been reported since the last reset.
    pub fn is_invested(&self) -> bool {
        self.invested
    }

    fn target_weight(&self, metrics: &PatentMetrics) -> Decimal {
        if metrics.tech_diversity > self.config.diversity_threshold {
            self.config.high_weight
        } else {
            self.config.low_weight
        }
    }

    fn trades(&self, record: &PatentRecord) -> bool {
        self.config
            .symbols
            .iter()
            .any(|s| s.eq_ignore_ascii_case(&record.symbol.ticker))
    }
}

impl Strategy for PatentSignalStrategy {
    fn name(&self) -> &str {
        "Patent Signal"
    }

    fn description(&self) -> &str {
        "Buys on patent filing activity, sized by technology diversity"
    }

    fn on_data(&mut self, record: &PatentRecord) -> Option<Signal> {
        if !self.trades(record) {
            return None;
        }

        self.records_processed += 1;
        let metrics = record.metrics;
        self.last_metrics = Some(metrics);

        let (signal_type, target_weight, reason) = if metrics.patents_filed > Decimal::ZERO {
            if self.invested {
                return None;
            }
            (
                SignalType::Buy,
                self.target_weight(&metrics),
                format!(
                    "Patents Filed: {}, Tech Diversity: {}",
                    metrics.patents_filed, metrics.tech_diversity
                ),
            )
        } else if metrics.cumulative_patents > Decimal::ZERO && self.invested {
            (
                SignalType::Hold,
                self.position_weight,
                format!("Cumulative patents: {}", metrics.cumulative_patents),
            )
        } else {
            return None;
        };

        debug!("{} {} on {}: {}", self.name(), signal_type, record.symbol, reason);
        self.signals_generated += 1;

        Some(Signal {
            symbol: record.symbol.clone(),
            signal_type,
            target_weight,
            time: record.time,
            strategy_name: self.name().to_string(),
            reason,
        })
    }

    fn on_fill(&mut self, signal: &Signal) {
        if signal.signal_type == SignalType::Buy {
            self.invested = true;
            self.position_weight = signal.target_weight;
        }
    }

    fn reset(&mut self) {
        self.invested = false;
        self.position_weight = Decimal::ZERO;
        self.last_metrics = None;
        self.records_processed = 0;
        self.signals_generated = 0;
    }

    fn state(&self) -> StrategyState {
        let metrics = self
            .last_metrics
            .map(|m| {
                [
                    ("patents_filed".to_string(), m.patents_filed.to_string()),
                    ("tech_diversity".to_string(), m.tech_diversity.to_string()),
                ]
                .into_iter()
                .collect()
            })
            .unwrap_or_default();

        StrategyState {
            name: self.name().to_string(),
            records_processed: self.records_processed,
            signals_generated: self.signals_generated,
            metrics,
            custom: serde_json::json!({
                "invested": self.invested,
                "diversity_threshold": self.config.diversity_threshold,
            }),
        }
    }

    fn symbols(&self) -> &[String] {
        &self.config.symbols
    }
}
