//! Validate configuration command.

use anyhow::Result;
use patents_config::load_config;
use patents_core::traits::StrategyConfig;
use patents_strategies::InnovationUniverseConfig;
use std::path::Path;

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            InnovationUniverseConfig::from(&config.universe).validate()?;
            config
                .signal
                .strategy_config(vec!["CHECK".to_string()])
                .validate()?;

            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Data root: {}", config.data.root.display());
            println!("Dataset: {}", config.data.dataset);
            println!("Error policy: {:?}", config.data.error_policy);
            println!("Diversity threshold: {}", config.signal.diversity_threshold);
            println!("Min 90d patents: {}", config.universe.min_patents_90d);
            println!("Min tech diversity: {}", config.universe.min_tech_diversity);
            println!("Min cumulative patents: {}", config.universe.min_cumulative_patents);
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
