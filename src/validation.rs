//! Normality check of measurements against reference medians.

use crate::config::NormalityThresholds;
use crate::models::Validation;

/// Absolute deviation of `actual` from `reference`, in percent of `reference`
///
/// # Panics
/// Panics if `reference` is not strictly positive. Reference medians are
/// constant positive data, so this indicates a broken table.
#[must_use]
pub fn percent_diff(actual: f64, reference: f64) -> f64 {
    assert!(
        reference > 0.0,
        "reference median must be positive, got {reference}"
    );
    (actual - reference).abs() / reference * 100.0
}

/// Compare a height/weight pair with the reference medians using `thresholds`
///
/// # Panics
/// Panics if either reference value is not strictly positive.
#[must_use]
pub fn validate_with(
    thresholds: &NormalityThresholds,
    actual_height: f64,
    actual_weight: f64,
    reference_height: f64,
    reference_weight: f64,
) -> Validation {
    let height_percent_diff = percent_diff(actual_height, reference_height);
    let weight_percent_diff = percent_diff(actual_weight, reference_weight);

    Validation {
        height_normal: height_percent_diff <= thresholds.height_percent,
        weight_normal: weight_percent_diff <= thresholds.weight_percent,
        height_percent_diff,
        weight_percent_diff,
    }
}

/// Compare a height/weight pair with the reference medians (15% / 20% limits)
///
/// # Panics
/// Panics if either reference value is not strictly positive.
#[must_use]
pub fn validate(
    actual_height: f64,
    actual_weight: f64,
    reference_height: f64,
    reference_weight: f64,
) -> Validation {
    validate_with(
        &NormalityThresholds::default(),
        actual_height,
        actual_weight,
        reference_height,
        reference_weight,
    )
}
