//! Core domain logic for the seafarer day tracker.
//!
//! This crate contains the compliance engine for a claimed tax-relief
//! period:
//! - Period selection and claim period validity
//! - Home-country classification of free-text country names
//! - The residency rules: days abroad, home visit length, voyage gaps
//! - Aggregation of the rules into a single verdict
//!
//! Nothing here performs I/O. Entries come in, a [`Verdict`] goes out.

mod analysis;
pub mod clock;
pub mod country;
pub mod dates;
mod entry;
pub mod period;
pub mod rules;
pub mod summary;
mod types;

pub use analysis::{
    AnalysisError, ComplianceStatus, DEFAULT_WINDOW_DAYS, Indicator, RuleMetrics, RuleResult,
    Thresholds, Verdict, evaluate,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use country::is_home_country;
pub use entry::Entry;
pub use period::{ClaimPeriod, PeriodCheck, PeriodError, check_period_valid, select_in_period};
pub use rules::{
    GapViolation, HomeStreak, VoyageGaps, days_inside_home, days_outside_home,
    longest_home_streak, voyage_gaps,
};
pub use summary::{ActivitySummary, EntryFilter, summarize};
pub use types::{Category, Status, ValidationError};
