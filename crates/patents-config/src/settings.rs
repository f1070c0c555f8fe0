//! Configuration structures.

use chrono::NaiveDate;
use patents_data::{ErrorPolicy, DEFAULT_DATASET};
use patents_strategies::{InnovationUniverseConfig, PatentSignalConfig};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub signal: SignalSettings,
    #[serde(default)]
    pub universe: UniverseSettings,
    #[serde(default)]
    pub replay: ReplaySettings,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "patents".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

/// Data file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSettings {
    /// Data root directory
    pub root: PathBuf,
    /// Data set directory below the root
    pub dataset: String,
    /// Handling of unparseable lines
    pub error_policy: ErrorPolicy,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("data"),
            dataset: DEFAULT_DATASET.to_string(),
            error_policy: ErrorPolicy::default(),
        }
    }
}

/// Patent Signal strategy settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalSettings {
    pub diversity_threshold: Decimal,
    pub high_weight: Decimal,
    pub low_weight: Decimal,
}

impl Default for SignalSettings {
    fn default() -> Self {
        let defaults = PatentSignalConfig::default();
        Self {
            diversity_threshold: defaults.diversity_threshold,
            high_weight: defaults.high_weight,
            low_weight: defaults.low_weight,
        }
    }
}

impl SignalSettings {
    /// Strategy configuration for the given symbols.
    pub fn strategy_config(&self, symbols: Vec<String>) -> PatentSignalConfig {
        PatentSignalConfig {
            symbols,
            diversity_threshold: self.diversity_threshold,
            high_weight: self.high_weight,
            low_weight: self.low_weight,
        }
    }
}

/// Innovation Universe selection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniverseSettings {
    pub min_patents_90d: Decimal,
    pub min_tech_diversity: Decimal,
    pub min_cumulative_patents: Decimal,
}

impl Default for UniverseSettings {
    fn default() -> Self {
        let defaults = InnovationUniverseConfig::default();
        Self {
            min_patents_90d: defaults.min_patents_90d,
            min_tech_diversity: defaults.min_tech_diversity,
            min_cumulative_patents: defaults.min_cumulative_patents,
        }
    }
}

impl From<&UniverseSettings> for InnovationUniverseConfig {
    fn from(settings: &UniverseSettings) -> Self {
        Self {
            min_patents_90d: settings.min_patents_90d,
            min_tech_diversity: settings.min_tech_diversity,
            min_cumulative_patents: settings.min_cumulative_patents,
        }
    }
}

/// Replay window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplaySettings {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub initial_capital: Decimal,
}

impl Default for ReplaySettings {
    fn default() -> Self {
        use rust_decimal_macros::dec;
        Self {
            start: None,
            end: None,
            initial_capital: dec!(100000),
        }
    }
}
