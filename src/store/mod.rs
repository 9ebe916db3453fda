//! Growth-log storage
//!
//! Snapshot documents holding the typed log entries and the child's
//! profile, with the editing operations of the log form.

pub mod entry;
pub mod snapshot;

pub use entry::{EntryDraft, LogEntry, parse_value};
pub use snapshot::GrowthSnapshot;
