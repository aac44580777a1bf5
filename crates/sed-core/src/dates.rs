//! Calendar-day helpers shared by the filters and rules.

use chrono::{DateTime, NaiveDate};

/// Format used for dates in entry records and claim periods.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a calendar day.
///
/// Accepts `YYYY-MM-DD`, or an RFC 3339 timestamp truncated to its own date.
/// Returns `None` for anything else.
pub fn parse_day(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

/// Formats a day as `YYYY-MM-DD`.
pub fn format_day(day: NaiveDate) -> String {
    day.format(DATE_FORMAT).to_string()
}

/// Whole days from `from` to `to` (negative when `to` is earlier).
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Number of days in `[start, end]`, counting both endpoints.
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> i64 {
    days_between(start, end) + 1
}

/// Half of `n`, rounded up.
pub const fn half_rounded_up(n: i64) -> i64 {
    n / 2 + n % 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_day_accepts_plain_dates() {
        assert_eq!(parse_day("2023-01-01"), Some(day(2023, 1, 1)));
        assert_eq!(parse_day(" 2024-02-29 "), Some(day(2024, 2, 29)));
    }

    #[test]
    fn test_parse_day_truncates_timestamps() {
        assert_eq!(
            parse_day("2023-06-01T23:30:00+00:00"),
            Some(day(2023, 6, 1))
        );
    }

    #[test]
    fn test_parse_day_rejects_garbage() {
        assert_eq!(parse_day(""), None);
        assert_eq!(parse_day("not-a-date"), None);
        assert_eq!(parse_day("2023-02-30"), None);
    }

    #[test]
    fn test_inclusive_days_counts_both_ends() {
        assert_eq!(inclusive_days(day(2023, 1, 1), day(2023, 1, 1)), 1);
        assert_eq!(inclusive_days(day(2023, 1, 1), day(2023, 12, 31)), 365);
        assert_eq!(inclusive_days(day(2024, 1, 1), day(2024, 12, 31)), 366);
    }

    #[test]
    fn test_half_rounded_up_matches_ceiling() {
        assert_eq!(half_rounded_up(365), 183);
        assert_eq!(half_rounded_up(366), 183);
        assert_eq!(half_rounded_up(1), 1);
        assert_eq!(half_rounded_up(0), 0);
    }
}
