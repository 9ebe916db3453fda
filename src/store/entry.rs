//! Growth-log entries
//!
//! Entries keep the values exactly as typed into the log form. They are
//! only interpreted when converted into a [`Measurement`].

use serde::{Deserialize, Deserializer, Serialize};

use crate::age::parse_date_string;
use crate::config::DateFormatConfig;
use crate::error::{GrowthError, Result};
use crate::models::Measurement;
use crate::models::measurement::positive;

/// A stored growth-log record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Identifier, unique within a log
    pub id: u64,
    /// Measurement date as entered
    #[serde(default, deserialize_with = "text_or_number")]
    pub date: String,
    /// Height in cm as entered
    #[serde(default, deserialize_with = "text_or_number")]
    pub height: String,
    /// Weight in kg as entered
    #[serde(default, deserialize_with = "text_or_number")]
    pub weight: String,
    /// Head circumference in cm as entered
    #[serde(default, deserialize_with = "text_or_number")]
    pub head: String,
    /// Free-text note
    #[serde(default, deserialize_with = "text_or_number")]
    pub comment: String,
    /// Fields written by other versions of the log, kept as found
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl LogEntry {
    /// Create an entry from a draft
    #[must_use]
    pub fn from_draft(id: u64, draft: EntryDraft) -> Self {
        Self {
            id,
            date: draft.date,
            height: draft.height,
            weight: draft.weight,
            head: draft.head,
            comment: draft.comment,
            extra: serde_json::Map::new(),
        }
    }

    /// Interpret the entry as a measurement
    ///
    /// Numeric fields that cannot be read are treated as absent; only an
    /// unreadable date is an error.
    pub fn to_measurement(&self, formats: &DateFormatConfig) -> Result<Measurement> {
        let date = parse_date_string(&self.date, formats).ok_or_else(|| {
            GrowthError::date_parsing(format!("entry {}: unreadable date {:?}", self.id, self.date))
        })?;

        let mut measurement = Measurement::new(date).with_comment(self.comment.clone());
        measurement.height = parse_value(&self.height);
        measurement.weight = parse_value(&self.weight);
        measurement.head_circumference = parse_value(&self.head);
        Ok(measurement)
    }
}

/// Field values for a new or edited entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    /// Measurement date
    pub date: String,
    /// Height in cm
    pub height: String,
    /// Weight in kg
    pub weight: String,
    /// Head circumference in cm
    pub head: String,
    /// Free-text note
    pub comment: String,
}

impl EntryDraft {
    /// Draft with the required fields
    #[must_use]
    pub fn new(date: impl Into<String>, height: impl Into<String>, weight: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            height: height.into(),
            weight: weight.into(),
            ..Self::default()
        }
    }

    /// Set the head circumference
    #[must_use]
    pub fn with_head(mut self, head: impl Into<String>) -> Self {
        self.head = head.into();
        self
    }

    /// Set the comment
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Check that date, height and weight were filled in
    pub fn check_required(&self) -> Result<()> {
        let missing: Vec<&str> = [
            ("date", &self.date),
            ("height", &self.height),
            ("weight", &self.weight),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(GrowthError::invalid_entry(format!(
                "missing required field(s): {}",
                missing.join(", ")
            )))
        }
    }
}

/// Read a typed measurement value, tolerating a trailing unit
///
/// Returns `None` for blank, unreadable, non-positive or non-finite input.
#[must_use]
pub fn parse_value(raw: &str) -> Option<f64> {
    let number = raw
        .trim()
        .trim_end_matches(|c: char| c.is_alphabetic() || c.is_whitespace());
    number.parse::<f64>().ok().and_then(positive)
}

/// Accept either a JSON string or a JSON number for text fields
fn text_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}
