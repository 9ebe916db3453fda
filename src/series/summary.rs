//! Chart summary derived from a comparison series
//!
//! Axis domains padded around every plotted value, the most recent
//! measured month and counts of measured and flagged months.

use itertools::{Itertools, MinMaxResult};
use serde::{Deserialize, Serialize};

use crate::models::SeriesPoint;

/// Padding applied either side of the height range, cm
pub const HEIGHT_DOMAIN_PADDING: f64 = 5.0;
/// Padding applied either side of the weight range, kg
pub const WEIGHT_DOMAIN_PADDING: f64 = 1.0;
/// Height axis used when nothing is plotted
pub const DEFAULT_HEIGHT_DOMAIN: (f64, f64) = (40.0, 170.0);
/// Weight axis used when nothing is plotted
pub const DEFAULT_WEIGHT_DOMAIN: (f64, f64) = (0.0, 22.0);

/// Summary of a comparison series for chart presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSummary {
    /// Height axis range
    pub height_domain: (f64, f64),
    /// Weight axis range
    pub weight_domain: (f64, f64),
    /// Highest month carrying an actual value
    pub latest_actual: Option<SeriesPoint>,
    /// Number of months carrying an actual value
    pub measured_months: usize,
    /// Months whose validation flagged height or weight
    pub flagged_months: Vec<u32>,
}

impl ChartSummary {
    /// Summarise a series
    #[must_use]
    pub fn from_series(points: &[SeriesPoint]) -> Self {
        let heights = points
            .iter()
            .flat_map(|p| std::iter::once(p.reference_height).chain(p.actual_height));
        let weights = points
            .iter()
            .flat_map(|p| std::iter::once(p.reference_weight).chain(p.actual_weight));

        let latest_actual = points
            .iter()
            .filter(|p| p.has_actual())
            .max_by_key(|p| p.month)
            .cloned();

        let flagged_months = points
            .iter()
            .filter(|p| p.validation.is_some_and(|v| !v.is_normal()))
            .map(|p| p.month)
            .collect();

        Self {
            height_domain: padded_domain(heights, HEIGHT_DOMAIN_PADDING, DEFAULT_HEIGHT_DOMAIN),
            weight_domain: padded_domain(weights, WEIGHT_DOMAIN_PADDING, DEFAULT_WEIGHT_DOMAIN),
            latest_actual,
            measured_months: points.iter().filter(|p| p.has_actual()).count(),
            flagged_months,
        }
    }
}

fn padded_domain(
    values: impl Iterator<Item = f64>,
    padding: f64,
    default: (f64, f64),
) -> (f64, f64) {
    match values.minmax_by(f64::total_cmp) {
        MinMaxResult::NoElements => default,
        MinMaxResult::OneElement(v) => (v - padding, v + padding),
        MinMaxResult::MinMax(min, max) => (min - padding, max + padding),
    }
}
