//! Core types and traits for patent filing data.
//!
//! This crate provides the foundational building blocks including:
//! - Patent metrics and the two record kinds (time series and universe)
//! - Line parsing with a fixed one-day availability lag
//! - Collaborator traits for identifier resolution, file location and strategies

pub mod error;
pub mod parse;
pub mod traits;
pub mod types;

pub use error::{DataError, RecordError, RecordResult};
pub use traits::*;
pub use types::*;
