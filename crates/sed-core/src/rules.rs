//! The independent residency rules.
//!
//! Every function here expects entries already narrowed to the claim period
//! and to confirmed status (see [`crate::select_in_period`]). Order-sensitive
//! rules sort by date themselves; entries whose date does not parse are
//! ignored by those rules.
//!
//! Vacation and travel days take part in none of the tallies below, even
//! when spent in the home country.

use std::borrow::Borrow;

use chrono::NaiveDate;
use serde::Serialize;

use crate::dates::days_between;
use crate::entry::Entry;
use crate::types::Category;

/// Longest unbroken run of home-country land days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HomeStreak {
    pub max_streak: i64,
    /// `max_streak` is strictly greater than the limit checked against.
    pub exceeds: bool,
}

/// A gap between voyages that is longer than allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GapViolation {
    /// Days strictly between the two ship days.
    pub gap_days: i64,
    /// Last ship day before the gap.
    pub after_date: NaiveDate,
    /// First ship day after the gap.
    pub before_date: NaiveDate,
}

/// Gaps between consecutive ship-work days.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct VoyageGaps {
    pub max_gap: i64,
    pub exceeds: bool,
    pub violations: Vec<GapViolation>,
}

/// Counts ship days plus land days in a named foreign country.
pub fn days_outside_home<E: Borrow<Entry>>(entries: &[E]) -> i64 {
    count_where(entries, Entry::is_abroad_day)
}

/// Counts land days in the home country.
pub fn days_inside_home<E: Borrow<Entry>>(entries: &[E]) -> i64 {
    count_where(entries, Entry::is_home_land_day)
}

fn count_where<E: Borrow<Entry>>(entries: &[E], pred: impl Fn(&Entry) -> bool) -> i64 {
    entries
        .iter()
        .map(<E as Borrow<Entry>>::borrow)
        .filter(|entry| pred(entry))
        .fold(0, |n, _| n + 1)
}

/// Finds the longest run of consecutive home-country land days.
///
/// Any other kind of day ends the run, and so does a hole in the record: a
/// home day followed by a gap of more than one calendar day closes its run
/// even though nothing contradicting it was recorded.
pub fn longest_home_streak<E: Borrow<Entry>>(entries: &[E], limit: i64) -> HomeStreak {
    let sorted = sorted_by_day(entries, |_| true);

    let mut current = 0;
    let mut max_streak = 0;
    for (i, (day, entry)) in sorted.iter().enumerate() {
        if !entry.is_home_land_day() {
            max_streak = max_streak.max(current);
            current = 0;
            continue;
        }

        current += 1;
        if let Some((next_day, _)) = sorted.get(i + 1) {
            if days_between(*day, *next_day) > 1 {
                max_streak = max_streak.max(current);
                current = 0;
            }
        }
    }
    max_streak = max_streak.max(current);

    tracing::trace!(max_streak, limit, "measured home streak");
    HomeStreak {
        max_streak,
        exceeds: max_streak > limit,
    }
}

/// Measures the gaps between consecutive ship-work days.
///
/// Fewer than two ship days means there is nothing to measure, which is not
/// an error. Adjacent or repeated days give no gap.
pub fn voyage_gaps<E: Borrow<Entry>>(entries: &[E], limit: i64) -> VoyageGaps {
    let ship_days: Vec<NaiveDate> = sorted_by_day(entries, |e| e.category == Category::WorkShip)
        .into_iter()
        .map(|(day, _)| day)
        .collect();

    if ship_days.len() < 2 {
        return VoyageGaps::default();
    }

    let mut max_gap = 0;
    let mut violations = Vec::new();
    for pair in ship_days.windows(2) {
        let (after_date, before_date) = (pair[0], pair[1]);
        let gap_days = days_between(after_date, before_date) - 1;
        if gap_days <= 0 {
            continue;
        }
        max_gap = max_gap.max(gap_days);
        if gap_days > limit {
            violations.push(GapViolation {
                gap_days,
                after_date,
                before_date,
            });
        }
    }

    tracing::trace!(max_gap, limit, violations = violations.len(), "measured voyage gaps");
    VoyageGaps {
        max_gap,
        exceeds: max_gap > limit,
        violations,
    }
}

/// Dated entries matching `keep`, ascending by day. Stable for equal days.
fn sorted_by_day<E: Borrow<Entry>>(
    entries: &[E],
    keep: impl Fn(&Entry) -> bool,
) -> Vec<(NaiveDate, &Entry)> {
    let mut dated: Vec<_> = entries
        .iter()
        .map(<E as Borrow<Entry>>::borrow)
        .filter(|entry| keep(entry))
        .filter_map(|entry| entry.day().map(|day| (day, entry)))
        .collect();
    dated.sort_by_key(|(day, _)| *day);
    dated
}
