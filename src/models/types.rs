//! Common type definitions for growth models

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GrowthError;

/// Sex category selecting the reference curves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Boys' reference curves
    #[default]
    Male,
    /// Girls' reference curves
    Female,
}

impl FromStr for Sex {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" | "boy" => Ok(Self::Male),
            "f" | "female" | "girl" => Ok(Self::Female),
            other => Err(GrowthError::invalid_entry(format!(
                "unrecognised sex category: {other:?}"
            ))),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

/// Measured quantity with a reference curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Length/height in centimetres
    Height,
    /// Weight in kilograms
    Weight,
}

impl Metric {
    /// Unit symbol for display
    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            Self::Height => "cm",
            Self::Weight => "kg",
        }
    }
}

/// Coarse developmental age band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    /// Under one month
    Newborn,
    /// One to two months
    TwoToThreeMonths,
    /// Three to five months
    FourToSixMonths,
    /// Six to eight months
    SevenToNineMonths,
    /// Nine months and older
    TenPlusMonths,
}

impl AgeGroup {
    /// Band for a number of completed months
    #[must_use]
    pub fn from_months(months: u32) -> Self {
        match months {
            0 => Self::Newborn,
            1..=2 => Self::TwoToThreeMonths,
            3..=5 => Self::FourToSixMonths,
            6..=8 => Self::SevenToNineMonths,
            _ => Self::TenPlusMonths,
        }
    }

    /// Display label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Newborn => "0-1 month",
            Self::TwoToThreeMonths => "2-3 months",
            Self::FourToSixMonths => "4-6 months",
            Self::SevenToNineMonths => "7-9 months",
            Self::TenPlusMonths => "10+ months",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
