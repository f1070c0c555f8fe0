//! Strategy registry for dynamic strategy loading.

use crate::{
    InnovationUniverse, InnovationUniverseConfig, PatentSignalConfig, PatentSignalStrategy,
};
use patents_core::{
    error::StrategyError,
    traits::{Strategy, StrategyConfig, UniverseSelector},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kind of algorithm a registry entry builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Consumes a per-symbol time series
    TimeSeries,
    /// Selects symbols from dated universes
    Universe,
}

/// Information about a registered strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyInfo {
    /// Strategy name
    pub name: String,
    /// Strategy description
    pub description: String,
    /// What the strategy consumes
    pub kind: StrategyKind,
    /// Default configuration as JSON
    pub default_config: serde_json::Value,
}

/// Registry for available strategies and universe selectors.
pub struct StrategyRegistry {
    strategies: BTreeMap<String, StrategyInfo>,
}

impl StrategyRegistry {
    /// Create a new registry with all built-in strategies.
    pub fn new() -> Self {
        let mut strategies = BTreeMap::new();

        strategies.insert(
            "patent_signal".to_string(),
            StrategyInfo {
                name: "Patent Signal".to_string(),
                description: "Buys on patent filing activity, sized by technology diversity"
                    .to_string(),
                kind: StrategyKind::TimeSeries,
                default_config: serde_json::to_value(PatentSignalConfig::default())
                    .unwrap_or_default(),
            },
        );

        strategies.insert(
            "innovation_universe".to_string(),
            StrategyInfo {
                name: "Innovation Universe".to_string(),
                description:
                    "Selects recent, diverse patent filers and equal-weights new additions"
                        .to_string(),
                kind: StrategyKind::Universe,
                default_config: serde_json::to_value(InnovationUniverseConfig::default())
                    .unwrap_or_default(),
            },
        );

        Self { strategies }
    }

    /// List all available strategies as `(key, info)` pairs.
    pub fn list(&self) -> Vec<(&String, &StrategyInfo)> {
        self.strategies.iter().collect()
    }

    /// Get strategy info by name.
    pub fn get(&self, name: &str) -> Option<&StrategyInfo> {
        self.strategies.get(name)
    }

    /// Check if a strategy exists.
    pub fn exists(&self, name: &str) -> bool {
        self.strategies.contains_key(name)
    }

    /// Create a time series strategy from configuration.
    pub fn create(
        &self,
        name: &str,
        config: serde_json::Value,
        symbols: Vec<String>,
    ) -> Result<Box<dyn Strategy>, StrategyError> {
        match name {
            "patent_signal" => {
                let mut config: PatentSignalConfig = serde_json::from_value(config)
                    .map_err(|e| StrategyError::InvalidConfig(e.to_string()))?;
                config.symbols = symbols;
                config.validate()?;
                Ok(Box::new(PatentSignalStrategy::new(config)))
            }
            _ => Err(StrategyError::NotFound(name.to_string())),
        }
    }

    /// Create a universe selector from configuration.
    pub fn create_selector(
        &self,
        name: &str,
        config: serde_json::Value,
    ) -> Result<Box<dyn UniverseSelector>, StrategyError> {
        match name {
            "innovation_universe" => {
                let config: InnovationUniverseConfig = serde_json::from_value(config)
                    .map_err(|e| StrategyError::InvalidConfig(e.to_string()))?;
                config.validate()?;
                Ok(Box::new(InnovationUniverse::new(config)))
            }
            _ => Err(StrategyError::NotFound(name.to_string())),
        }
    }

    /// Create a time series strategy with default configuration.
    ///
    /// Universe entries are built with [`Self::create_default_selector`].
    pub fn create_default(
        &self,
        name: &str,
        symbols: Vec<String>,
    ) -> Result<Box<dyn Strategy>, StrategyError> {
        let info = self.info_of_kind(name, StrategyKind::TimeSeries)?;
        self.create(name, info.default_config.clone(), symbols)
    }

    /// Create a universe selector with default configuration.
    pub fn create_default_selector(
        &self,
        name: &str,
    ) -> Result<Box<dyn UniverseSelector>, StrategyError> {
        let info = self.info_of_kind(name, StrategyKind::Universe)?;
        self.create_selector(name, info.default_config.clone())
    }

    fn info_of_kind(&self, name: &str, kind: StrategyKind) -> Result<&StrategyInfo, StrategyError> {
        let info = self
            .get(name)
            .ok_or_else(|| StrategyError::NotFound(name.to_string()))?;
        if info.kind != kind {
            return Err(StrategyError::KindMismatch(format!(
                "{} is {:?}, not {:?}",
                name, info.kind, kind
            )));
        }
        Ok(info)
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
