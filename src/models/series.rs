//! Series point model
//!
//! One month of a comparison series: the reference medians for that age
//! plus whatever was actually measured.

use serde::{Deserialize, Serialize};

/// Outcome of comparing a measurement pair with the reference medians
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    /// Height lies within the permitted deviation
    pub height_normal: bool,
    /// Weight lies within the permitted deviation
    pub weight_normal: bool,
    /// Absolute height deviation from the median, in percent
    pub height_percent_diff: f64,
    /// Absolute weight deviation from the median, in percent
    pub weight_percent_diff: f64,
}

impl Validation {
    /// Whether both measurements lie within range
    #[must_use]
    pub fn is_normal(&self) -> bool {
        self.height_normal && self.weight_normal
    }
}

/// One month of a growth comparison series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    /// Completed months since birth
    pub month: u32,
    /// Median reference height, cm
    pub reference_height: f64,
    /// Median reference weight, kg
    pub reference_weight: f64,
    /// Measured height, cm
    pub actual_height: Option<f64>,
    /// Measured weight, kg
    pub actual_weight: Option<f64>,
    /// Measured head circumference, cm
    pub actual_head_circumference: Option<f64>,
    /// Present only when both height and weight were measured
    pub validation: Option<Validation>,
}

impl SeriesPoint {
    /// A point carrying only reference values
    #[must_use]
    pub fn reference(month: u32, reference_height: f64, reference_weight: f64) -> Self {
        Self {
            month,
            reference_height,
            reference_weight,
            actual_height: None,
            actual_weight: None,
            actual_head_circumference: None,
            validation: None,
        }
    }

    /// Whether any actual value was recorded for this month
    #[must_use]
    pub fn has_actual(&self) -> bool {
        self.actual_height.is_some()
            || self.actual_weight.is_some()
            || self.actual_head_circumference.is_some()
    }
}
