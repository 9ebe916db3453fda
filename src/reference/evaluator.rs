//! Reference median evaluation
//!
//! Exact table values where tabulated, linear interpolation between
//! tabulated ages, clamping below birth and a fixed monthly rate past
//! the last tabulated age.

use crate::config::ExtrapolationRates;
use crate::models::{Metric, Sex};
use crate::reference::tables::median_table;

/// Evaluator for WHO median curves
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WhoReference {
    rates: ExtrapolationRates,
}

impl WhoReference {
    /// Create an evaluator with custom extrapolation rates
    #[must_use]
    pub fn new(rates: ExtrapolationRates) -> Self {
        Self { rates }
    }

    /// Median value of `metric` at `age_months` for `sex`
    ///
    /// Total over all inputs: negative ages clamp to the birth value and
    /// ages past the table extend along the configured monthly rate.
    #[must_use]
    pub fn evaluate(&self, metric: Metric, age_months: i32, sex: Sex) -> f64 {
        let table = median_table(metric, sex);
        let first_value = table[0].1;
        let (last_month, last_value) = table[table.len() - 1];

        if age_months < 0 {
            return first_value;
        }
        let age = age_months.unsigned_abs();

        if let Ok(idx) = table.binary_search_by_key(&age, |(month, _)| *month) {
            return table[idx].1;
        }

        if age > last_month {
            let extra = f64::from(age - last_month);
            return last_value + extra * self.rates.rate(metric, sex);
        }

        // Not tabulated and within range, so both neighbours exist
        let upper = table.partition_point(|(month, _)| *month <= age);
        let (lower_month, lower_value) = table[upper - 1];
        let (upper_month, upper_value) = table[upper];

        let ratio = f64::from(age - lower_month) / f64::from(upper_month - lower_month);
        lower_value + ratio * (upper_value - lower_value)
    }

    /// Median height in cm
    #[must_use]
    pub fn height(&self, age_months: i32, sex: Sex) -> f64 {
        self.evaluate(Metric::Height, age_months, sex)
    }

    /// Median weight in kg
    #[must_use]
    pub fn weight(&self, age_months: i32, sex: Sex) -> f64 {
        self.evaluate(Metric::Weight, age_months, sex)
    }
}

/// Median value using the default extrapolation rates
#[must_use]
pub fn evaluate(metric: Metric, age_months: i32, sex: Sex) -> f64 {
    WhoReference::default().evaluate(metric, age_months, sex)
}
