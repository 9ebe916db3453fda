//! Console output utilities
//!
//! This module provides utilities for formatted console output.

use crate::models::{Metric, SeriesPoint};
use crate::series::ChartSummary;

fn optional(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.1}"))
}

/// Render one series point as a table row
#[must_use]
pub fn format_series_row(point: &SeriesPoint) -> String {
    let flags = match point.validation {
        Some(v) => {
            let height = if v.height_normal {
                "ok".to_string()
            } else {
                format!("{:.1}%", v.height_percent_diff)
            };
            let weight = if v.weight_normal {
                "ok".to_string()
            } else {
                format!("{:.1}%", v.weight_percent_diff)
            };
            format!("height {height}, weight {weight}")
        }
        None => String::new(),
    };

    format!(
        "{:>5} {:>9.1} {:>9.1} {:>9} {:>9} {:>7}  {}",
        point.month,
        point.reference_height,
        point.reference_weight,
        optional(point.actual_height),
        optional(point.actual_weight),
        optional(point.actual_head_circumference),
        flags
    )
    .trim_end()
    .to_string()
}

/// Column headings matching [`format_series_row`]
#[must_use]
pub fn format_series_header() -> String {
    format!(
        "{:>5} {:>9} {:>9} {:>9} {:>9} {:>7}  Flags",
        "Month",
        format!("WHO {}", Metric::Height.unit()),
        format!("WHO {}", Metric::Weight.unit()),
        "Height",
        "Weight",
        "Head"
    )
}

/// Print a comparison series as a table
///
/// With `measured_only`, months without an actual value are left out.
pub fn print_series_table(points: &[SeriesPoint], measured_only: bool) {
    println!("{}", format_series_header());
    for point in points.iter().filter(|p| !measured_only || p.has_actual()) {
        println!("{}", format_series_row(point));
    }
}

/// Print the chart summary
pub fn print_chart_summary(summary: &ChartSummary) {
    println!(
        "Height axis: {:.1} - {:.1} cm",
        summary.height_domain.0, summary.height_domain.1
    );
    println!(
        "Weight axis: {:.1} - {:.1} kg",
        summary.weight_domain.0, summary.weight_domain.1
    );
    println!("Measured months: {}", summary.measured_months);
    match &summary.latest_actual {
        Some(point) => println!("Latest measurement at month {}", point.month),
        None => println!("No measurements recorded"),
    }
    if !summary.flagged_months.is_empty() {
        let months: Vec<String> = summary.flagged_months.iter().map(u32::to_string).collect();
        println!("Outside normal range at months: {}", months.join(", "));
    }
}
