//! Example algorithms consuming patent filing data.
//!
//! This crate provides:
//! - Patent Signal: a per-symbol strategy buying on filing activity
//! - Innovation Universe: universe selection on filing breadth
//! - Security change tracking with equal-weight allocation

mod allocation;
mod innovation_universe;
mod patent_signal;
mod registry;

pub use allocation::{equal_weight, SecurityChanges};
pub use innovation_universe::{InnovationUniverse, InnovationUniverseConfig};
pub use patent_signal::{PatentSignalConfig, PatentSignalStrategy};
pub use registry::{StrategyInfo, StrategyKind, StrategyRegistry};
