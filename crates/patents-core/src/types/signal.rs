//! Trading signals emitted by strategies.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Symbol;

/// Direction of a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalType {
    /// Open or increase a position
    Buy,
    /// Close a position
    Sell,
    /// Keep the current position
    Hold,
}

impl fmt::Display for SignalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalType::Buy => write!(f, "BUY"),
            SignalType::Sell => write!(f, "SELL"),
            SignalType::Hold => write!(f, "HOLD"),
        }
    }
}

/// A strategy's request to move a symbol to a target portfolio weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    /// Symbol to trade
    pub symbol: Symbol,
    /// Signal direction
    pub signal_type: SignalType,
    /// Target weight as a fraction of portfolio value
    pub target_weight: Decimal,
    /// Date of the data that triggered the signal
    pub time: NaiveDate,
    /// Name of the emitting strategy
    pub strategy_name: String,
    /// Human-readable reason
    pub reason: String,
}

impl Signal {
    /// Whether the signal asks for a position change.
    pub fn is_actionable(&self) -> bool {
        self.signal_type != SignalType::Hold
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} @ weight {} ({})",
            self.time, self.signal_type, self.symbol, self.target_weight, self.reason
        )
    }
}
