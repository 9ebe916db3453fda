//! Shared utilities

pub mod logging;

pub use logging::{
    format_series_header, format_series_row, log_operation_complete, log_operation_start, log_warning,
    print_chart_summary, print_series_table,
};
