//! Universe change tracking and equal-weight allocation.

use patents_core::types::Symbol;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Symbols entering and leaving the selected universe between two dates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityChanges {
    /// Newly selected symbols, in selection order
    pub added: Vec<Symbol>,
    /// Symbols no longer selected, in previous selection order
    pub removed: Vec<Symbol>,
}

impl SecurityChanges {
    /// Diff two consecutive selections.
    pub fn between(previous: &[Symbol], current: &[Symbol]) -> Self {
        let before: HashSet<&Symbol> = previous.iter().collect();
        let after: HashSet<&Symbol> = current.iter().collect();

        Self {
            added: current
                .iter()
                .filter(|s| !before.contains(s))
                .cloned()
                .collect(),
            removed: previous
                .iter()
                .filter(|s| !after.contains(s))
                .cloned()
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Target weight for each added symbol: `1 / added.len()`.
///
/// Returns nothing when no symbol was added.
pub fn equal_weight(changes: &SecurityChanges) -> Vec<(Symbol, Decimal)> {
    if changes.added.is_empty() {
        return Vec::new();
    }

    let weight = Decimal::ONE / Decimal::from(changes.added.len());
    changes
        .added
        .iter()
        .map(|symbol| (symbol.clone(), weight))
        .collect()
}
