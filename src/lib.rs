//! A Rust library for comparing child growth measurements against the WHO
//! Child Growth Standards median curves.
//!
//! Measurements are placed on a per-month series by age, compared with the
//! interpolated reference medians and flagged when they deviate by more
//! than a fixed percentage.

pub mod age;
pub mod config;
pub mod error;
pub mod milestones;
pub mod models;
pub mod reference;
pub mod series;
pub mod store;
pub mod utils;
pub mod validation;

// Re-export the most common types for easier use
pub use config::{DateFormatConfig, ExtrapolationRates, GrowthConfig, NormalityThresholds};
pub use error::{GrowthError, Result};
pub use models::{AgeGroup, Measurement, Metric, SeriesPoint, Sex, Validation};

// Core computations
pub use age::{age_group, months_between, parse_date_string};
pub use reference::{WhoReference, evaluate};
pub use series::{ChartSummary, SeriesBuilder, build_series};
pub use validation::{validate, validate_with};

// Milestones
pub use milestones::{MilestoneChecklist, milestones_for};

// Storage
pub use store::{EntryDraft, GrowthSnapshot, LogEntry};
