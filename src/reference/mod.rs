//! WHO median reference curves and their evaluation

pub mod evaluator;
pub mod tables;

pub use evaluator::{WhoReference, evaluate};
pub use tables::{MAX_TABULATED_MONTH, median_table};
