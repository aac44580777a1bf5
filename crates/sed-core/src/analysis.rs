//! Compliance verdict for a claim period.
//!
//! # Sequence
//!
//! 1. Resolve the claim period, defaulting to the year ending on the latest
//!    entry when none is given.
//! 2. Validate it. An invalid period ends the analysis with no metrics.
//! 3. Narrow the entries to confirmed days inside the period.
//! 4. Run all four rules; none of them short-circuits another.
//! 5. Downgrade to non-compliant on insufficient days abroad, an over-long
//!    home visit, or an over-long gap between voyages.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clock::Clock;
use crate::dates::{format_day, half_rounded_up};
use crate::entry::Entry;
use crate::period::{ClaimPeriod, non_blank, select_in_period};
use crate::rules::{
    GapViolation, HomeStreak, VoyageGaps, days_inside_home, days_outside_home,
    longest_home_streak, voyage_gaps,
};
use crate::types::{Category, Status, ValidationError};

/// Length of the claim period used when none is given.
pub const DEFAULT_WINDOW_DAYS: i64 = 365;

/// Day limits applied by the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Shortest claim period accepted, counting both endpoints.
    /// Default: 365.
    pub min_claim_days: i64,

    /// Longest home visit before the claim fails. Default: 183.
    pub home_visit_limit_days: i64,

    /// Home visit length that draws a warning. Default: 90.
    pub home_visit_warning_days: i64,

    /// Longest gap between voyages before the claim fails. Default: 183.
    pub voyage_gap_limit_days: i64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_claim_days: 365,
            home_visit_limit_days: 183,
            home_visit_warning_days: 90,
            voyage_gap_limit_days: 183,
        }
    }
}

impl Thresholds {
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("min_claim_days", self.min_claim_days),
            ("home_visit_limit_days", self.home_visit_limit_days),
            ("home_visit_warning_days", self.home_visit_warning_days),
            ("voyage_gap_limit_days", self.voyage_gap_limit_days),
        ] {
            if value <= 0 {
                return Err(ValidationError::NonPositiveThreshold { field, value });
            }
        }
        if self.home_visit_warning_days >= self.home_visit_limit_days {
            return Err(ValidationError::WarningNotBelowLimit {
                warning: self.home_visit_warning_days,
                limit: self.home_visit_limit_days,
            });
        }
        Ok(())
    }
}

/// Analysis could not run at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("no entries recorded and no claim period given")]
    NoData,

    #[error("invalid thresholds: {0}")]
    InvalidThresholds(#[from] ValidationError),
}

/// Pass/warn/fail state of one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    Pass,
    Warning,
    Fail,
}

impl Indicator {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Warning => "WARN",
            Self::Fail => "FAIL",
        }
    }
}

/// Overall outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    InvalidPeriod,
    NonCompliant,
    /// No rule failed. This is an approximation, not a legal determination.
    Compliant,
}

impl ComplianceStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::InvalidPeriod => "Invalid Period",
            Self::NonCompliant => "Non-Compliant",
            Self::Compliant => "Compliant (Simplified)",
        }
    }
}

/// Measured value of one rule against its threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleResult {
    pub measured: i64,
    /// Minimum required for days abroad; maximum allowed for the others.
    pub threshold: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning_at: Option<i64>,
    pub indicator: Indicator,
    pub details: Vec<String>,
}

/// The four rule results of a valid period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleMetrics {
    pub days_abroad: RuleResult,
    /// Reported alongside `days_abroad` but never changes the status by itself.
    pub days_at_home: RuleResult,
    pub home_visit: RuleResult,
    pub voyage_gap: RuleResult,
    pub voyage_violations: Vec<GapViolation>,
}

/// Result of [`evaluate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub status: ComplianceStatus,
    /// Why the period is invalid, or which rules failed. Empty when compliant.
    pub reasons: Vec<String>,
    pub period_start: String,
    pub period_end: String,
    /// The period was derived from the entries rather than supplied.
    pub period_defaulted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_period_days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<RuleMetrics>,
}

impl Verdict {
    pub fn is_compliant(&self) -> bool {
        self.status == ComplianceStatus::Compliant
    }
}

/// Evaluates `entries` over the claim period `[start, end]`.
///
/// If either bound is missing the period defaults to the
/// [`DEFAULT_WINDOW_DAYS`] ending on the latest entry (or on `clock`'s today
/// when no entry date parses). With no bounds and no entries there is nothing
/// to evaluate. Thresholds that fail [`Thresholds::validate`] are rejected
/// before anything else is looked at.
pub fn evaluate<E: Borrow<Entry>, C: Clock>(
    entries: &[E],
    start: Option<&str>,
    end: Option<&str>,
    thresholds: &Thresholds,
    clock: &C,
) -> Result<Verdict, AnalysisError> {
    thresholds.validate()?;
    let (period_start, period_end, period_defaulted) = resolve_period(entries, start, end, clock)?;

    let period = match ClaimPeriod::validate(
        Some(period_start.as_str()),
        Some(period_end.as_str()),
        thresholds.min_claim_days,
    ) {
        Ok(period) => period,
        Err(err) => {
            tracing::debug!(%period_start, %period_end, %err, "claim period rejected");
            return Ok(Verdict {
                status: ComplianceStatus::InvalidPeriod,
                reasons: vec![err.to_string()],
                period_start,
                period_end,
                period_defaulted,
                total_period_days: None,
                metrics: None,
            });
        }
    };

    let total_days = period.length_days();
    let relevant = select_in_period(entries, period.start(), period.end(), Status::Confirmed);
    tracing::debug!(
        %period_start,
        %period_end,
        total_days,
        selected = relevant.len(),
        "evaluating claim period"
    );

    let abroad_target = half_rounded_up(total_days);
    let days_abroad = days_abroad_rule(days_outside_home(&relevant), abroad_target);
    let days_at_home = days_at_home_rule(days_inside_home(&relevant), total_days - abroad_target);
    let home_visit = home_visit_rule(
        longest_home_streak(&relevant, thresholds.home_visit_limit_days),
        thresholds,
    );
    let ship_days = relevant
        .iter()
        .filter(|e| e.category == Category::WorkShip)
        .count();
    let gaps = voyage_gaps(&relevant, thresholds.voyage_gap_limit_days);
    let voyage_gap = voyage_gap_rule(&gaps, ship_days, thresholds.voyage_gap_limit_days);

    let reasons: Vec<String> = [&days_abroad, &home_visit, &voyage_gap]
        .into_iter()
        .filter(|rule| rule.indicator == Indicator::Fail)
        .flat_map(|rule| rule.details.iter().cloned())
        .collect();
    let status = if reasons.is_empty() {
        ComplianceStatus::Compliant
    } else {
        ComplianceStatus::NonCompliant
    };
    tracing::debug!(?status, failures = reasons.len(), "verdict reached");

    Ok(Verdict {
        status,
        reasons,
        period_start,
        period_end,
        period_defaulted,
        total_period_days: Some(total_days),
        metrics: Some(RuleMetrics {
            days_abroad,
            days_at_home,
            home_visit,
            voyage_gap,
            voyage_violations: gaps.violations,
        }),
    })
}

/// Returns the period bounds as text, and whether they were defaulted.
fn resolve_period<E: Borrow<Entry>, C: Clock>(
    entries: &[E],
    start: Option<&str>,
    end: Option<&str>,
    clock: &C,
) -> Result<(String, String, bool), AnalysisError> {
    if let (Some(start), Some(end)) = (non_blank(start), non_blank(end)) {
        return Ok((start.to_string(), end.to_string(), false));
    }
    if entries.is_empty() {
        return Err(AnalysisError::NoData);
    }

    let latest = entries
        .iter()
        .map(<E as Borrow<Entry>>::borrow)
        .filter_map(Entry::day)
        .max()
        .unwrap_or_else(|| clock.today());
    let period = ClaimPeriod::ending_on(latest, DEFAULT_WINDOW_DAYS);
    tracing::debug!(start = %period.start(), end = %period.end(), "defaulted claim period");
    Ok((format_day(period.start()), format_day(period.end()), true))
}

fn days_abroad_rule(days_outside: i64, target: i64) -> RuleResult {
    let (indicator, detail) = if days_outside >= target {
        (Indicator::Pass, "Pass: Sufficient days outside UK.".to_string())
    } else {
        (
            Indicator::Fail,
            format!("Fail: Only {days_outside} of {target} required days outside UK."),
        )
    };
    RuleResult {
        measured: days_outside,
        threshold: target,
        warning_at: None,
        indicator,
        details: vec![detail],
    }
}

fn days_at_home_rule(days_inside: i64, allowed: i64) -> RuleResult {
    let (indicator, detail) = if days_inside <= allowed {
        (
            Indicator::Pass,
            "Pass: UK days do not exceed allowed limit.".to_string(),
        )
    } else {
        (Indicator::Fail, format!("Fail: {days_inside} UK days is too many."))
    };
    RuleResult {
        measured: days_inside,
        threshold: allowed,
        warning_at: None,
        indicator,
        details: vec![detail],
    }
}

fn home_visit_rule(streak: HomeStreak, thresholds: &Thresholds) -> RuleResult {
    let limit = thresholds.home_visit_limit_days;
    let warning = thresholds.home_visit_warning_days;
    let days = streak.max_streak;

    let (indicator, detail) = if streak.exceeds {
        (
            Indicator::Fail,
            format!("Fail: Longest UK visit of {days} days exceeds {limit} day limit."),
        )
    } else if days > warning {
        (
            Indicator::Warning,
            format!("Warning: Longest UK visit of {days} days (Warning at {warning})."),
        )
    } else {
        (
            Indicator::Pass,
            "Pass: No single UK visit exceeds limit.".to_string(),
        )
    };
    RuleResult {
        measured: days,
        threshold: limit,
        warning_at: Some(warning),
        indicator,
        details: vec![detail],
    }
}

fn voyage_gap_rule(gaps: &VoyageGaps, ship_days: usize, limit: i64) -> RuleResult {
    let (indicator, details) = if gaps.exceeds {
        let details: Vec<String> = gaps
            .violations
            .iter()
            .map(|v| {
                format!(
                    "Gap of {} days (after {}, before {}) exceeds {limit} day limit.",
                    v.gap_days, v.after_date, v.before_date
                )
            })
            .collect();
        (Indicator::Fail, details)
    } else if ship_days == 1 {
        (
            Indicator::Pass,
            vec!["Not enough voyages in period to calculate gaps.".to_string()],
        )
    } else {
        (
            Indicator::Pass,
            vec!["Pass: No voyage gaps exceed limit.".to_string()],
        )
    };
    RuleResult {
        measured: gaps.max_gap,
        threshold: limit,
        warning_at: None,
        indicator,
        details,
    }
}
