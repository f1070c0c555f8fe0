//! List strategies command.

use anyhow::Result;
use patents_strategies::{StrategyKind, StrategyRegistry};

pub async fn run() -> Result<()> {
    let registry = StrategyRegistry::new();

    println!("Available Strategies");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    for (key, info) in registry.list() {
        let command = match info.kind {
            StrategyKind::TimeSeries => "signals",
            StrategyKind::Universe => "universe",
        };
        println!("  {} ({})", info.name, key);
        println!("  ───────────────────────────────────────────────────────");
        println!("  {}", info.description);
        println!("  Run with: patents {}", command);
        println!("  Defaults: {}", info.default_config);
        println!();
    }

    Ok(())
}
