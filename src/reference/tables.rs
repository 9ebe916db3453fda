//! WHO Child Growth Standards 2006 median (50th percentile) values
//!
//! Keys are completed months of age. Monthly through the first year,
//! then at quarter- and half-year steps up to 60 months.

use crate::models::{Metric, Sex};

/// Length/height-for-age medians for boys, cm
pub const HEIGHT_MALE: &[(u32, f64)] = &[
    (0, 49.9), (1, 54.7), (2, 58.4), (3, 61.4), (4, 63.9), (5, 65.9), (6, 67.6),
    (7, 69.2), (8, 70.6), (9, 72.0), (10, 73.3), (11, 74.5), (12, 75.7),
    (15, 79.1), (18, 82.3), (21, 85.1), (24, 87.8), (30, 92.3), (36, 96.1),
    (42, 99.6), (48, 102.9), (54, 106.0), (60, 109.0),
];

/// Length/height-for-age medians for girls, cm
pub const HEIGHT_FEMALE: &[(u32, f64)] = &[
    (0, 49.1), (1, 53.7), (2, 57.1), (3, 59.8), (4, 62.1), (5, 64.0), (6, 65.7),
    (7, 67.3), (8, 68.7), (9, 70.1), (10, 71.5), (11, 72.8), (12, 74.0),
    (15, 77.5), (18, 80.7), (21, 83.4), (24, 86.4), (30, 90.3), (36, 94.1),
    (42, 97.4), (48, 100.6), (54, 103.7), (60, 106.6),
];

/// Weight-for-age medians for boys, kg
pub const WEIGHT_MALE: &[(u32, f64)] = &[
    (0, 3.3), (1, 4.5), (2, 5.6), (3, 6.4), (4, 7.0), (5, 7.5), (6, 7.9),
    (7, 8.3), (8, 8.6), (9, 8.9), (10, 9.2), (11, 9.4), (12, 9.6),
    (15, 10.3), (18, 11.0), (21, 11.7), (24, 12.2), (30, 13.3), (36, 14.2),
    (42, 15.2), (48, 16.2), (54, 17.3), (60, 18.3),
];

/// Weight-for-age medians for girls, kg
pub const WEIGHT_FEMALE: &[(u32, f64)] = &[
    (0, 3.2), (1, 4.2), (2, 5.1), (3, 5.8), (4, 6.4), (5, 6.9), (6, 7.3),
    (7, 7.6), (8, 7.9), (9, 8.2), (10, 8.5), (11, 8.7), (12, 8.9),
    (15, 9.6), (18, 10.2), (21, 10.9), (24, 11.5), (30, 12.7), (36, 13.9),
    (42, 15.0), (48, 16.1), (54, 17.1), (60, 18.0),
];

/// Age of the last tabulated value, in months
pub const MAX_TABULATED_MONTH: u32 = 60;

/// Median table for a metric and sex, sorted ascending by month
#[must_use]
pub fn median_table(metric: Metric, sex: Sex) -> &'static [(u32, f64)] {
    match (metric, sex) {
        (Metric::Height, Sex::Male) => HEIGHT_MALE,
        (Metric::Height, Sex::Female) => HEIGHT_FEMALE,
        (Metric::Weight, Sex::Male) => WEIGHT_MALE,
        (Metric::Weight, Sex::Female) => WEIGHT_FEMALE,
    }
}
