//! Measurement model
//!
//! A single dated record of a child's body measurements. Values are
//! optional; a record may carry only some of them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One dated set of body measurements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Date the measurement was taken
    pub date: NaiveDate,
    /// Length/height in centimetres
    pub height: Option<f64>,
    /// Weight in kilograms
    pub weight: Option<f64>,
    /// Head circumference in centimetres
    pub head_circumference: Option<f64>,
    /// Free-text note
    pub comment: Option<String>,
}

impl Measurement {
    /// Create an empty measurement for a date
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            height: None,
            weight: None,
            head_circumference: None,
            comment: None,
        }
    }

    /// Set the height, discarding non-positive or non-finite values
    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = positive(height);
        self
    }

    /// Set the weight, discarding non-positive or non-finite values
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = positive(weight);
        self
    }

    /// Set the head circumference, discarding non-positive or non-finite values
    #[must_use]
    pub fn with_head_circumference(mut self, head: f64) -> Self {
        self.head_circumference = positive(head);
        self
    }

    /// Attach a comment; blank comments are dropped
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        let comment = comment.into();
        self.comment = (!comment.trim().is_empty()).then_some(comment);
        self
    }
}

/// Keep only usable measurement values
#[must_use]
pub fn positive(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then_some(value)
}
