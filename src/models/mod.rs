//! Domain models for growth tracking
//!
//! This module contains the value types passed between the reference
//! evaluator, the series builder and the growth-log store.

pub mod measurement;
pub mod series;
pub mod types;

// Re-export commonly used types
pub use measurement::Measurement;
pub use series::{SeriesPoint, Validation};
pub use types::{AgeGroup, Metric, Sex};
