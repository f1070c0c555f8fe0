//! Universe replay command implementation.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use patents_config::AppConfig;
use patents_core::Symbol;
use patents_data::file_source;
use patents_strategies::{equal_weight, SecurityChanges, StrategyRegistry};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};

use super::replay_window;
use crate::cli::{OutputFormat, UniverseArgs};

/// Outcome of one universe date.
#[derive(Debug, Serialize)]
struct UniverseDay {
    date: NaiveDate,
    candidates: usize,
    selected: Vec<Symbol>,
    changes: SecurityChanges,
    targets: Vec<(Symbol, Decimal)>,
}

pub async fn run(args: UniverseArgs, config: &AppConfig) -> Result<()> {
    let (start, end) = replay_window(args.start, args.end, config)?;
    info!("Replaying universe selection from {} to {}", start, end);

    let registry = StrategyRegistry::new();
    let mut selector = registry
        .create_selector(
            "innovation_universe",
            serde_json::to_value(&config.universe)?,
        )
        .context("Failed to create universe selector")?;

    let source = file_source(&config.data.root, &config.data.dataset, config.data.error_policy);

    // One day of history should hold exactly one universe.
    let history = source.universe_history(start, start).await?;
    if history.len() != 1 {
        warn!("Expected 1 day of historical data, got {}", history.len());
    }
    for snapshot in &history {
        info!("Historical universe contains {} stocks", snapshot.len());
    }

    let mut previous: Vec<Symbol> = Vec::new();
    let mut days = Vec::new();

    for date in start.iter_days().take_while(|d| *d <= end) {
        let Some(snapshot) = source
            .load_universe(date)
            .await
            .with_context(|| format!("Failed to load universe for {}", date))?
        else {
            continue;
        };

        let selected = selector.select(date, &snapshot.records);
        let changes = SecurityChanges::between(&previous, &selected);
        if !changes.is_empty() {
            info!(
                "Universe changed - Added: {}, Removed: {}",
                changes.added.len(),
                changes.removed.len()
            );
        }
        let targets = equal_weight(&changes);

        previous = selected.clone();
        days.push(UniverseDay {
            date,
            candidates: snapshot.len(),
            selected,
            changes,
            targets,
        });
    }

    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&days)?),
        OutputFormat::Text => print_days(&days, config.replay.initial_capital),
    }

    Ok(())
}

fn print_days(days: &[UniverseDay], capital: Decimal) {
    println!("Innovation Universe");
    println!("═══════════════════════════════════════════════════════════");
    for day in days {
        println!();
        println!(
            "  {}: {} of {} selected",
            day.date,
            day.selected.len(),
            day.candidates
        );
        for symbol in &day.changes.removed {
            println!("    - {}", symbol);
        }
        for (symbol, weight) in &day.targets {
            println!(
                "    + {} weight {} (${})",
                symbol,
                weight.round_dp(4),
                (capital * weight).round_dp(2)
            );
        }
    }
    if days.is_empty() {
        println!("  No universe files in range");
    }
}
