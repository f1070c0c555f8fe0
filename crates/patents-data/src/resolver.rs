//! Security identifier resolvers.

use chrono::NaiveDate;
use patents_core::error::ResolutionError;
use patents_core::{SecurityIdentifier, Symbol, SymbolResolver};
use std::collections::HashMap;

/// Resolves `TICKER MARKET TYPE` identifiers, e.g. `AAPL US EQUITY`.
///
/// Identifiers registered through [`IdentifierResolver::with_mapping`] are
/// redirected to their canonical identifier, which keeps renamed securities
/// on one identity.
#[derive(Debug, Clone, Default)]
pub struct IdentifierResolver {
    mappings: HashMap<SecurityIdentifier, SecurityIdentifier>,
}

impl IdentifierResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map an identifier onto a canonical one.
    pub fn with_mapping(mut self, from: &str, to: &str) -> Self {
        self.mappings.insert(
            SecurityIdentifier::normalize(from),
            SecurityIdentifier::normalize(to),
        );
        self
    }

    /// Number of registered mappings.
    pub fn mapping_count(&self) -> usize {
        self.mappings.len()
    }

    fn check_shape(raw: &str, id: &SecurityIdentifier) -> Result<(), ResolutionError> {
        let tokens: Vec<&str> = id.as_str().split(' ').collect();
        let [ticker, market, kind] = tokens.as_slice() else {
            return Err(ResolutionError::new(
                raw,
                format!("expected 3 tokens, found {}", tokens.len()),
            ));
        };

        if ticker.is_empty() {
            return Err(ResolutionError::new(raw, "empty ticker"));
        }
        if market.len() != 2 || !market.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ResolutionError::new(
                raw,
                format!("invalid market code '{}'", market),
            ));
        }
        if !kind.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ResolutionError::new(
                raw,
                format!("invalid security type '{}'", kind),
            ));
        }
        Ok(())
    }
}

impl SymbolResolver for IdentifierResolver {
    fn resolve(
        &self,
        identifier: &str,
        ticker: &str,
        _date: NaiveDate,
    ) -> Result<Symbol, ResolutionError> {
        let id = SecurityIdentifier::normalize(identifier);
        Self::check_shape(identifier, &id)?;

        if ticker.is_empty() {
            return Err(ResolutionError::new(identifier, "empty display ticker"));
        }

        let canonical = self.mappings.get(&id).cloned().unwrap_or(id);
        Ok(Symbol::new(canonical, ticker.to_uppercase()))
    }
}
