//! Configuration management.

mod settings;

pub use settings::{
    AppConfig, AppSettings, DataSettings, LoggingConfig, ReplaySettings, SignalSettings,
    UniverseSettings,
};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Load configuration from file and environment.
///
/// Environment variables use the `PATENTS` prefix with `__` between keys,
/// e.g. `PATENTS__DATA__ROOT=/mnt/data`.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(true))
        .add_source(
            Environment::with_prefix("PATENTS")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}
