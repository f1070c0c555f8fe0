//! Signal replay command implementation.

use anyhow::{Context, Result};
use patents_config::AppConfig;
use patents_core::{Signal, SignalType, Symbol};
use patents_data::file_source;
use patents_strategies::StrategyRegistry;
use tracing::info;

use super::replay_window;
use crate::cli::{OutputFormat, SignalsArgs};

pub async fn run(args: SignalsArgs, config: &AppConfig) -> Result<()> {
    let (start, end) = replay_window(args.start, args.end, config)?;
    let symbol = Symbol::equity(&args.symbol);
    info!("Replaying patent signals for {} from {} to {}", symbol, start, end);

    let registry = StrategyRegistry::new();
    let strategy_config = config.signal.strategy_config(vec![symbol.ticker.clone()]);
    let mut strategy = registry
        .create(
            "patent_signal",
            serde_json::to_value(&strategy_config)?,
            strategy_config.symbols.clone(),
        )
        .context("Failed to create strategy")?;

    let source = file_source(&config.data.root, &config.data.dataset, config.data.error_policy);
    let records = source
        .load_time_series(&symbol, Some(start), Some(end))
        .await
        .with_context(|| format!("Failed to load patent data for {}", symbol))?;
    info!("Loaded {} records for {}", records.len(), symbol);

    let mut signals: Vec<Signal> = Vec::new();
    for record in &records {
        if let Some(signal) = strategy.on_data(record) {
            // Replay fills every buy at once.
            if signal.signal_type == SignalType::Buy {
                info!(
                    "Bought {} - Patents Filed: {}, Tech Diversity: {}",
                    signal.symbol, record.metrics.patents_filed, record.metrics.tech_diversity
                );
                strategy.on_fill(&signal);
            }
            signals.push(signal);
        }
    }

    match args.output {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "signals": signals,
                "state": strategy.state(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            println!("{} ({} to {})", strategy.name(), start, end);
            println!("═══════════════════════════════════════════════════════════");
            for signal in &signals {
                println!("  {}", signal);
            }
            let state = strategy.state();
            println!();
            println!(
                "Records processed: {}, signals: {}",
                state.records_processed, state.signals_generated
            );
        }
    }

    Ok(())
}
