//! CLI command implementations.

pub mod parse;
pub mod signals;
pub mod strategies;
pub mod universe;
pub mod validate;

use anyhow::{bail, Result};
use chrono::NaiveDate;
use patents_config::AppConfig;

/// Resolve a replay window from arguments, falling back to configuration.
pub fn replay_window(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    config: &AppConfig,
) -> Result<(NaiveDate, NaiveDate)> {
    let (Some(start), Some(end)) = (start.or(config.replay.start), end.or(config.replay.end))
    else {
        bail!("Please provide --start and --end (or set replay.start / replay.end in the configuration)");
    };
    if start > end {
        bail!("Start date {} is after end date {}", start, end);
    }
    Ok((start, end))
}
