//! Claim periods: selection of entries and validity of the window itself.

use std::borrow::Borrow;

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use thiserror::Error;

use crate::dates::{inclusive_days, parse_day};
use crate::entry::Entry;
use crate::types::Status;

/// Why a claim period cannot be evaluated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PeriodError {
    #[error("Claim period start or end date not specified.")]
    NotSpecified,

    #[error("Invalid claim period dates.")]
    InvalidDates,

    #[error("Claim period start date cannot be after end date.")]
    StartAfterEnd,

    #[error("Claim period is {length_days} days. Minimum {min_days} days required.")]
    TooShort { length_days: i64, min_days: i64 },
}

/// A closed, inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClaimPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl ClaimPeriod {
    /// Creates a period, rejecting a start after the end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, PeriodError> {
        if start > end {
            return Err(PeriodError::StartAfterEnd);
        }
        Ok(Self { start, end })
    }

    /// The `length_days`-long period finishing on `end`.
    pub fn ending_on(end: NaiveDate, length_days: i64) -> Self {
        let back = Duration::days(length_days.max(1) - 1);
        let start = end.checked_sub_signed(back).unwrap_or(NaiveDate::MIN);
        Self { start, end }
    }

    /// Parses and validates a period of at least `min_days` days.
    pub fn validate(
        start: Option<&str>,
        end: Option<&str>,
        min_days: i64,
    ) -> Result<Self, PeriodError> {
        let (Some(start), Some(end)) = (non_blank(start), non_blank(end)) else {
            return Err(PeriodError::NotSpecified);
        };
        let (Some(start), Some(end)) = (parse_day(start), parse_day(end)) else {
            return Err(PeriodError::InvalidDates);
        };

        let period = Self::new(start, end)?;
        let length_days = period.length_days();
        if length_days < min_days {
            return Err(PeriodError::TooShort {
                length_days,
                min_days,
            });
        }
        Ok(period)
    }

    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Days in the period, counting both endpoints.
    pub fn length_days(&self) -> i64 {
        inclusive_days(self.start, self.end)
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}

pub(crate) fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

/// Outcome of [`check_period_valid`], in the shape the presentation layer shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodCheck {
    pub valid: bool,
    /// Empty when valid.
    pub reason: String,
    /// Inclusive length, when both dates parsed and are in order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_days: Option<i64>,
}

/// Checks that `[start, end]` is a usable claim period of at least `min_days` days.
pub fn check_period_valid(start: Option<&str>, end: Option<&str>, min_days: i64) -> PeriodCheck {
    match ClaimPeriod::validate(start, end, min_days) {
        Ok(period) => PeriodCheck {
            valid: true,
            reason: String::new(),
            length_days: Some(period.length_days()),
        },
        Err(err) => {
            let length_days = match err {
                PeriodError::TooShort { length_days, .. } => Some(length_days),
                _ => None,
            };
            PeriodCheck {
                valid: false,
                reason: err.to_string(),
                length_days,
            }
        }
    }
}

/// Entries with the given status whose day falls inside `[start, end]`.
///
/// Entries whose date does not parse never match.
pub fn select_in_period<E: Borrow<Entry>>(
    entries: &[E],
    start: NaiveDate,
    end: NaiveDate,
    status: Status,
) -> Vec<&Entry> {
    entries
        .iter()
        .map(<E as Borrow<Entry>>::borrow)
        .filter(|entry| entry.status == status)
        .filter(|entry| entry.day().is_some_and(|day| start <= day && day <= end))
        .collect()
}
