//! Growth comparison series and their chart summaries

pub mod builder;
pub mod summary;

pub use builder::{SeriesBuilder, build_series};
pub use summary::ChartSummary;
