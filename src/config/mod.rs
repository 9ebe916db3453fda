//! Configuration for growth series construction and reporting.

use crate::error::{GrowthError, Result};
use crate::models::{Metric, Sex};

/// Environment variable overriding the default chart horizon
pub const HORIZON_ENV_VAR: &str = "GROWTH_HORIZON_MONTHS";

/// Percent-deviation limits beyond which a measurement is flagged
///
/// These approximate the WHO +/-2 SD band with a flat percentage of the
/// median, as no per-age standard deviation data is carried.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalityThresholds {
    /// Maximum height deviation from the median, in percent
    pub height_percent: f64,
    /// Maximum weight deviation from the median, in percent
    pub weight_percent: f64,
}

impl Default for NormalityThresholds {
    fn default() -> Self {
        Self {
            height_percent: 15.0,
            weight_percent: 20.0,
        }
    }
}

/// Monthly growth rates used past the last tabulated age
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrapolationRates {
    /// Height gain for boys, cm per month
    pub height_male: f64,
    /// Height gain for girls, cm per month
    pub height_female: f64,
    /// Weight gain for boys, kg per month
    pub weight_male: f64,
    /// Weight gain for girls, kg per month
    pub weight_female: f64,
}

impl ExtrapolationRates {
    /// Rate for a metric and sex
    #[must_use]
    pub fn rate(&self, metric: Metric, sex: Sex) -> f64 {
        match (metric, sex) {
            (Metric::Height, Sex::Male) => self.height_male,
            (Metric::Height, Sex::Female) => self.height_female,
            (Metric::Weight, Sex::Male) => self.weight_male,
            (Metric::Weight, Sex::Female) => self.weight_female,
        }
    }
}

impl Default for ExtrapolationRates {
    fn default() -> Self {
        Self {
            height_male: 0.55,
            height_female: 0.5,
            weight_male: 0.22,
            weight_female: 0.20,
        }
    }
}

/// Configuration for date format handling
#[derive(Debug, Clone)]
pub struct DateFormatConfig {
    /// List of date format strings to try when parsing dates
    pub date_formats: Vec<String>,
    /// Enable heuristic format detection
    pub enable_format_detection: bool,
}

impl Default for DateFormatConfig {
    fn default() -> Self {
        Self {
            date_formats: vec![
                "%Y-%m-%d".to_string(), // ISO format: 2023-01-15
                "%Y/%m/%d".to_string(), // 2023/01/15
                "%d.%m.%Y".to_string(), // 15.01.2023
                "%Y%m%d".to_string(),   // Compact: 20230115
                "%d %b %Y".to_string(), // 15 Jan 2023
                "%d %B %Y".to_string(), // 15 January 2023
            ],
            enable_format_detection: true,
        }
    }
}

/// Configuration for the growth tracker
#[derive(Debug, Clone)]
pub struct GrowthConfig {
    /// Horizon used when none is requested
    pub default_horizon: u32,
    /// Smallest horizon a caller may request
    pub min_horizon: u32,
    /// Largest horizon a caller may request
    pub max_horizon: u32,
    /// Flagging thresholds for the normality validator
    pub thresholds: NormalityThresholds,
    /// Growth rates past the end of the reference tables
    pub extrapolation: ExtrapolationRates,
    /// Date format configuration for log entries
    pub date_format_config: DateFormatConfig,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            default_horizon: 68,
            min_horizon: 1,
            max_horizon: 68,
            thresholds: NormalityThresholds::default(),
            extrapolation: ExtrapolationRates::default(),
            date_format_config: DateFormatConfig::default(),
        }
    }
}

impl GrowthConfig {
    /// Default configuration with the horizon taken from the environment
    ///
    /// Values that do not parse or fall outside the permitted range are
    /// logged and ignored.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(HORIZON_ENV_VAR) {
            config.apply_horizon_override(&raw);
        }
        config
    }

    /// Replace the default horizon with a textual override
    ///
    /// Returns whether the override was accepted.
    pub fn apply_horizon_override(&mut self, raw: &str) -> bool {
        match raw.trim().parse::<i64>() {
            Ok(months) => match self.validate_horizon(months) {
                Ok(horizon) => {
                    self.default_horizon = horizon;
                    true
                }
                Err(e) => {
                    log::warn!("Ignoring {HORIZON_ENV_VAR}: {e}");
                    false
                }
            },
            Err(e) => {
                log::warn!("Ignoring {HORIZON_ENV_VAR}={raw:?}: {e}");
                false
            }
        }
    }

    /// Check a requested horizon against the permitted range
    pub fn validate_horizon(&self, months: i64) -> Result<u32> {
        if months < i64::from(self.min_horizon) || months > i64::from(self.max_horizon) {
            return Err(GrowthError::InvalidHorizon {
                months,
                min: self.min_horizon,
                max: self.max_horizon,
            });
        }
        // In range, so it fits in u32
        Ok(months as u32)
    }
}
