//! Closed vocabularies for entries, with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Unknown entry category string.
    #[error("invalid category: {value}")]
    InvalidCategory { value: String },

    /// Unknown entry status string.
    #[error("invalid status: {value}")]
    InvalidStatus { value: String },

    /// A threshold that must be positive was zero or negative.
    #[error("{field} must be positive, got {value}")]
    NonPositiveThreshold { field: &'static str, value: i64 },

    /// The home-visit warning threshold is not below the hard limit.
    #[error("home visit warning ({warning} days) must be below the hard limit ({limit} days)")]
    WarningNotBelowLimit { warning: i64, limit: i64 },
}

/// What a day was spent doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Working aboard a ship.
    WorkShip,
    /// Working ashore, in some country.
    WorkLand,
    Vacation,
    Travel,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 4] = [Self::WorkShip, Self::WorkLand, Self::Vacation, Self::Travel];

    /// String representation used in entry records.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WorkShip => "work_ship",
            Self::WorkLand => "work_land",
            Self::Vacation => "vacation",
            Self::Travel => "travel",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "work_ship" => Ok(Self::WorkShip),
            "work_land" => Ok(Self::WorkLand),
            "vacation" => Ok(Self::Vacation),
            "travel" => Ok(Self::Travel),
            _ => Err(ValidationError::InvalidCategory {
                value: s.to_string(),
            }),
        }
    }
}

/// Whether an entry has been confirmed by the seafarer.
///
/// Only confirmed entries take part in compliance calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Confirmed,
    Pending,
}

impl Status {
    /// String representation used in entry records.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Pending => "pending",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "confirmed" => Ok(Self::Confirmed),
            "pending" => Ok(Self::Pending),
            _ => Err(ValidationError::InvalidStatus {
                value: s.to_string(),
            }),
        }
    }
}
