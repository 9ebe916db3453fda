//! Age arithmetic and date parsing.

use chrono::{Datelike, NaiveDate};

use crate::config::DateFormatConfig;
use crate::models::AgeGroup;

/// Completed months between `birth` and `observed`
///
/// Calendar-aware: a month only counts once the day of month of the
/// birth date has been reached. Observation dates before birth give 0.
#[must_use]
pub fn months_between(birth: NaiveDate, observed: NaiveDate) -> u32 {
    let years = i64::from(observed.year()) - i64::from(birth.year());
    let months = i64::from(observed.month()) - i64::from(birth.month());
    let mut total = years * 12 + months;

    // Birthday for this month not yet reached
    if observed.day() < birth.day() {
        total -= 1;
    }

    u32::try_from(total.max(0)).unwrap_or(u32::MAX)
}

/// Developmental age band of a child on `today`
#[must_use]
pub fn age_group(birth: NaiveDate, today: NaiveDate) -> AgeGroup {
    AgeGroup::from_months(months_between(birth, today))
}

/// Parse a date string with multiple format attempts
#[must_use]
pub fn parse_date_string(s: &str, config: &DateFormatConfig) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for format in &config.date_formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }

    if config.enable_format_detection {
        if let Some(detected_format) = detect_date_format(s) {
            if let Ok(date) = NaiveDate::parse_from_str(s, detected_format) {
                return Some(date);
            }
        }
    }

    None
}

/// Try to detect the date format based on string patterns
#[must_use]
pub fn detect_date_format(s: &str) -> Option<&'static str> {
    // Timestamp with a date prefix (YYYY-MM-DDT...)
    if s.len() > 10 && s.is_char_boundary(10) && s[10..].starts_with('T') {
        return Some("%Y-%m-%dT%H:%M:%S%.fZ");
    }

    if s.contains('/') {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() == 3 && parts[2].len() == 4 {
            // Day first unless the first part cannot be a day
            return match parts[0].parse::<u8>() {
                Ok(first) if first > 12 => Some("%d/%m/%Y"),
                Ok(_) => match parts[1].parse::<u8>() {
                    Ok(second) if second > 12 => Some("%m/%d/%Y"),
                    _ => Some("%d/%m/%Y"),
                },
                Err(_) => None,
            };
        }
    }

    if s.contains('-') {
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() == 3 && parts[2].len() == 4 {
            return Some("%d-%m-%Y");
        }
    }

    None
}
