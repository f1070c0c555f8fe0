//! Core data types for patent filing data.

mod metrics;
mod record;
mod signal;
mod symbol;
mod universe;

pub use metrics::{MetricViolation, PatentMetrics, METRIC_COLUMNS};
pub use record::{PatentData, PatentRecord, TIME_SERIES_COLUMNS};
pub use signal::{Signal, SignalType};
pub use symbol::{SecurityIdentifier, Symbol};
pub use universe::{PatentUniverseRecord, UniverseSnapshot, UNIVERSE_COLUMNS};
