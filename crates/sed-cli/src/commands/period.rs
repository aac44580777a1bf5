//! Period command: checks a claim period before analysis.

use std::io::Write;

use anyhow::Result;
use sed_core::{PeriodCheck, check_period_valid};

pub fn format_check(check: &PeriodCheck, min_days: i64) -> String {
    if check.valid {
        let length = check.length_days.unwrap_or_default();
        format!("Valid claim period: {length} days (minimum {min_days}).\n")
    } else {
        format!("Invalid claim period: {}\n", check.reason)
    }
}

/// Runs the period command.
pub fn run<W: Write>(
    writer: &mut W,
    start: &str,
    end: &str,
    min_days: i64,
    json: bool,
) -> Result<PeriodCheck> {
    let check = check_period_valid(Some(start), Some(end), min_days);
    tracing::debug!(start, end, min_days, valid = check.valid, "checked claim period");

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&check)?)?;
    } else {
        write!(writer, "{}", format_check(&check, min_days))?;
    }

    Ok(check)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_of(start: &str, end: &str, min_days: i64, json: bool) -> (PeriodCheck, String) {
        let mut output = Vec::new();
        let check = run(&mut output, start, end, min_days, json).unwrap();
        (check, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_valid_period() {
        let (check, output) = output_of("2024-01-01", "2024-12-31", 365, false);
        assert!(check.valid);
        assert_eq!(output, "Valid claim period: 366 days (minimum 365).\n");
    }

    #[test]
    fn test_short_period() {
        let (check, output) = output_of("2024-01-01", "2024-06-30", 365, false);
        assert!(!check.valid);
        assert_eq!(
            output,
            "Invalid claim period: Claim period is 182 days. Minimum 365 days required.\n"
        );
    }

    #[test]
    fn test_reversed_period_json() {
        let (_, output) = output_of("2024-12-31", "2024-01-01", 365, true);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["valid"], false);
        assert_eq!(
            value["reason"],
            "Claim period start date cannot be after end date."
        );
        assert!(value.get("length_days").is_none());
    }

    #[test]
    fn test_unparseable_dates() {
        let (check, _) = output_of("soon", "2024-12-31", 365, false);
        assert_eq!(check.reason, "Invalid claim period dates.");
    }

    #[test]
    fn test_lower_minimum() {
        let (check, _) = output_of("2024-01-01", "2024-01-31", 30, false);
        assert!(check.valid);
        assert_eq!(check.length_days, Some(31));
    }
}
