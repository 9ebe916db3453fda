//! Per-month comparison series
//!
//! Merges the reference medians for every month of a horizon with the
//! measurements that fall inside it.

use chrono::NaiveDate;
use log::debug;

use crate::age::months_between;
use crate::config::{GrowthConfig, NormalityThresholds};
use crate::models::{Measurement, SeriesPoint, Sex};
use crate::reference::WhoReference;
use crate::validation::validate_with;

/// Builds comparison series with a fixed reference and thresholds
#[derive(Debug, Clone, Default)]
pub struct SeriesBuilder {
    reference: WhoReference,
    thresholds: NormalityThresholds,
}

impl SeriesBuilder {
    /// Create a builder from explicit parts
    #[must_use]
    pub fn new(reference: WhoReference, thresholds: NormalityThresholds) -> Self {
        Self {
            reference,
            thresholds,
        }
    }

    /// Create a builder from a configuration
    #[must_use]
    pub fn from_config(config: &GrowthConfig) -> Self {
        Self::new(WhoReference::new(config.extrapolation), config.thresholds)
    }

    /// Build the series for months `0..=max_months`
    ///
    /// Measurements are applied in order; a later measurement mapping to
    /// the same month replaces the earlier one entirely. Measurements
    /// outside the horizon are ignored.
    #[must_use]
    pub fn build(
        &self,
        max_months: u32,
        sex: Sex,
        measurements: &[Measurement],
        birth: NaiveDate,
    ) -> Vec<SeriesPoint> {
        let mut points: Vec<SeriesPoint> = (0..=max_months)
            .map(|month| {
                let age = i32::try_from(month).unwrap_or(i32::MAX);
                SeriesPoint::reference(
                    month,
                    self.reference.height(age, sex),
                    self.reference.weight(age, sex),
                )
            })
            .collect();

        for measurement in measurements {
            let month = months_between(birth, measurement.date);
            let Some(point) = points.get_mut(month as usize) else {
                debug!(
                    "Measurement on {} at month {month} lies past the {max_months}-month horizon",
                    measurement.date
                );
                continue;
            };
            self.apply(point, measurement);
        }

        points
    }

    fn apply(&self, point: &mut SeriesPoint, measurement: &Measurement) {
        point.actual_height = measurement.height;
        point.actual_weight = measurement.weight;
        point.actual_head_circumference = measurement.head_circumference;

        point.validation = match (measurement.height, measurement.weight) {
            (Some(height), Some(weight)) => Some(validate_with(
                &self.thresholds,
                height,
                weight,
                point.reference_height,
                point.reference_weight,
            )),
            _ => None,
        };
    }
}

/// Build a comparison series with the default reference and thresholds
#[must_use]
pub fn build_series(
    max_months: u32,
    sex: Sex,
    measurements: &[Measurement],
    birth: NaiveDate,
) -> Vec<SeriesPoint> {
    SeriesBuilder::default().build(max_months, sex, measurements, birth)
}
