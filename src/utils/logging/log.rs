//! Logging utilities
//!
//! This module provides standardized logging functions for operations.

use std::path::Path;
use std::time::Duration;

/// Log an operation start with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `path` - Path of the file being operated on
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Log an operation completion with consistent format
///
/// # Arguments
/// * `operation` - Past-tense description of the operation
/// * `preposition` - Word linking the operation to the path ("from", "to")
/// * `path` - Path of the file that was operated on
/// * `items` - Number of log entries processed
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(
    operation: &str,
    preposition: &str,
    path: &Path,
    items: usize,
    elapsed: Option<Duration>,
) {
    log::info!(
        "{}",
        completion_message(operation, preposition, path, items, elapsed)
    );
}

fn completion_message(
    operation: &str,
    preposition: &str,
    path: &Path,
    items: usize,
    elapsed: Option<Duration>,
) -> String {
    let message = format!(
        "Successfully {} {} entries {} {}",
        operation,
        items,
        preposition,
        path.display()
    );
    match elapsed {
        Some(duration) => format!("{message} in {duration:?}"),
        None => message,
    }
}

/// Log a warning about a single growth-log entry
///
/// # Arguments
/// * `message` - Warning message
/// * `entry_id` - Optional identifier of the entry concerned
pub fn log_warning(message: &str, entry_id: Option<u64>) {
    if let Some(id) = entry_id {
        log::warn!("{message} (entry {id})");
    } else {
        log::warn!("{message}");
    }
}
