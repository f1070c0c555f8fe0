//! Collaborator traits for data access and strategies.

mod data_source;
mod resolver;
mod strategy;

pub use data_source::{SourceLocation, SourceLocator};
pub use resolver::SymbolResolver;
pub use strategy::{Strategy, StrategyConfig, StrategyState, UniverseSelector};
