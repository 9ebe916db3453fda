//! Growth-log snapshot
//!
//! The complete persisted state of the growth tracker: the log entries,
//! the child's date of birth and sex. Snapshots are plain JSON documents
//! and every computation works on a fresh snapshot.

use std::fs;
use std::path::Path;
use std::time::Instant;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::age::parse_date_string;
use crate::config::{DateFormatConfig, GrowthConfig};
use crate::error::{GrowthError, Result};
use crate::models::{Measurement, SeriesPoint, Sex};
use crate::series::SeriesBuilder;
use crate::store::entry::{EntryDraft, LogEntry};
use crate::utils::{log_operation_complete, log_operation_start, log_warning};

/// Persisted growth-tracker state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthSnapshot {
    /// Log entries in insertion order
    #[serde(rename = "growthLogs", default)]
    pub growth_logs: Vec<LogEntry>,
    /// Date of birth as entered
    #[serde(rename = "babyDOB", default, skip_serializing_if = "Option::is_none")]
    pub baby_dob: Option<String>,
    /// Sex category as entered
    #[serde(rename = "babyGender", default, skip_serializing_if = "Option::is_none")]
    pub baby_gender: Option<String>,
}

impl GrowthSnapshot {
    /// Parse a snapshot from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the snapshot as pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a snapshot from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let start = Instant::now();
        log_operation_start("Loading growth snapshot from", path);

        let json = fs::read_to_string(path)?;
        let snapshot = Self::from_json_str(&json)?;

        log_operation_complete("loaded", "from", path, snapshot.growth_logs.len(), Some(start.elapsed()));
        Ok(snapshot)
    }

    /// Write the snapshot to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        log_operation_start("Saving growth snapshot to", path);
        fs::write(path, self.to_json_string()?)?;
        log_operation_complete("saved", "to", path, self.growth_logs.len(), None);
        Ok(())
    }

    /// Entry with the given identifier
    #[must_use]
    pub fn entry(&self, id: u64) -> Option<&LogEntry> {
        self.growth_logs.iter().find(|e| e.id == id)
    }

    /// Identifier the next added entry will receive
    ///
    /// Fails once the highest identifier in use is `u64::MAX`.
    pub fn next_id(&self) -> Result<u64> {
        match self.growth_logs.iter().map(|e| e.id).max() {
            None => Ok(1),
            Some(id) => id
                .checked_add(1)
                .ok_or_else(|| GrowthError::invalid_entry("entry identifiers exhausted")),
        }
    }

    /// Append a new entry, returning its identifier
    pub fn add_entry(&mut self, draft: EntryDraft) -> Result<u64> {
        draft.check_required()?;
        let id = self.next_id()?;
        self.growth_logs.push(LogEntry::from_draft(id, draft));
        log::debug!("Added growth entry {id}");
        Ok(id)
    }

    /// Replace the fields of an existing entry, keeping its position
    pub fn update_entry(&mut self, id: u64, draft: EntryDraft) -> Result<()> {
        draft.check_required()?;
        let entry = self
            .growth_logs
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(GrowthError::EntryNotFound(id))?;
        let extra = std::mem::take(&mut entry.extra);
        *entry = LogEntry::from_draft(id, draft);
        entry.extra = extra;
        log::debug!("Updated growth entry {id}");
        Ok(())
    }

    /// Remove an entry, returning it
    pub fn delete_entry(&mut self, id: u64) -> Result<LogEntry> {
        let idx = self
            .growth_logs
            .iter()
            .position(|e| e.id == id)
            .ok_or(GrowthError::EntryNotFound(id))?;
        log::debug!("Deleted growth entry {id}");
        Ok(self.growth_logs.remove(idx))
    }

    /// Record the date of birth
    pub fn set_birth_date(&mut self, birth: NaiveDate) {
        self.baby_dob = Some(birth.format("%Y-%m-%d").to_string());
    }

    /// Record the sex category
    pub fn set_sex(&mut self, sex: Sex) {
        self.baby_gender = Some(sex.to_string());
    }

    /// Parsed date of birth; `None` when not recorded
    pub fn birth_date(&self, formats: &DateFormatConfig) -> Result<Option<NaiveDate>> {
        match self.baby_dob.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => parse_date_string(raw, formats)
                .map(Some)
                .ok_or_else(|| GrowthError::date_parsing(format!("unreadable date of birth {raw:?}"))),
        }
    }

    /// Parsed sex category; boys' curves when not recorded
    pub fn sex(&self) -> Result<Sex> {
        match self.baby_gender.as_deref().map(str::trim) {
            None | Some("") => Ok(Sex::default()),
            Some(raw) => raw.parse(),
        }
    }

    /// Entries readable as measurements, in insertion order
    ///
    /// Entries with an unreadable date are skipped with a warning.
    #[must_use]
    pub fn measurements(&self, formats: &DateFormatConfig) -> Vec<Measurement> {
        self.growth_logs
            .iter()
            .filter_map(|entry| match entry.to_measurement(formats) {
                Ok(measurement) => Some(measurement),
                Err(e) => {
                    log_warning(&format!("Skipping growth entry: {e}"), Some(entry.id));
                    None
                }
            })
            .collect()
    }

    /// Build the comparison series for this snapshot
    ///
    /// Without a date of birth no measurement can be placed, so the
    /// series carries reference values only.
    pub fn series(&self, config: &GrowthConfig, max_months: u32, sex: Sex) -> Result<Vec<SeriesPoint>> {
        let builder = SeriesBuilder::from_config(config);
        let series = match self.birth_date(&config.date_format_config)? {
            Some(birth) => builder.build(
                max_months,
                sex,
                &self.measurements(&config.date_format_config),
                birth,
            ),
            None => {
                log_warning("No date of birth recorded, showing reference curves only", None);
                builder.build(max_months, sex, &[], NaiveDate::MIN)
            }
        };
        Ok(series)
    }
}
