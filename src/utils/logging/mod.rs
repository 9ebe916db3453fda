//! Logging utilities for console output and operation tracking

pub mod console;
pub mod log;

pub use self::console::{
    format_series_header, format_series_row, print_chart_summary, print_series_table,
};
pub use self::log::{log_operation_complete, log_operation_start, log_warning};
