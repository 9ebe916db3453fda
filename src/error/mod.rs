//! Error handling for the growth tracker.

use std::io;

/// Errors that can occur while loading, editing or reporting growth data
#[derive(Debug, thiserror::Error)]
pub enum GrowthError {
    /// Error opening, reading or writing a snapshot file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error encoding or decoding snapshot JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Date string could not be parsed with any configured format
    #[error("Date parsing error: {0}")]
    DateParsing(String),

    /// A log entry or profile field is missing or malformed
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    /// Requested chart horizon lies outside the permitted range
    #[error("Invalid horizon: {months} months (expected {min}..={max})")]
    InvalidHorizon {
        /// The rejected value
        months: i64,
        /// Smallest permitted horizon
        min: u32,
        /// Largest permitted horizon
        max: u32,
    },

    /// No log entry carries the requested identifier
    #[error("Log entry {0} not found")]
    EntryNotFound(u64),
}

impl GrowthError {
    /// Create an invalid entry error
    pub fn invalid_entry(message: impl Into<String>) -> Self {
        Self::InvalidEntry(message.into())
    }

    /// Create a date parsing error
    pub fn date_parsing(message: impl Into<String>) -> Self {
        Self::DateParsing(message.into())
    }
}

/// Result type for growth tracker operations
pub type Result<T> = std::result::Result<T, GrowthError>;
