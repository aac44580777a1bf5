//! Summary command: day totals by category, ship and country.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use sed_core::{ActivitySummary, Category, Entry, EntryFilter, summarize};

/// Formats day totals with ship and country breakdowns.
pub fn format_summary(summary: &ActivitySummary) -> String {
    let mut output = String::new();

    writeln!(output, "ACTIVITY SUMMARY").unwrap();
    writeln!(output, "────────────────").unwrap();
    for category in Category::ALL {
        writeln!(
            output,
            "{:<10} {:>4} days",
            category.as_str(),
            summary.days_for(category)
        )
        .unwrap();
    }
    writeln!(output, "{:<10} {:>4} days", "total", summary.total_days()).unwrap();

    write_breakdown(&mut output, "SHIPS", &summary.ships);
    write_breakdown(&mut output, "COUNTRIES", &summary.countries);

    output
}

fn write_breakdown(output: &mut String, title: &str, counts: &BTreeMap<String, u32>) {
    if counts.is_empty() {
        return;
    }
    writeln!(output).unwrap();
    writeln!(output, "{title}").unwrap();
    for (name, days) in counts {
        writeln!(output, "  {name}: {days} days").unwrap();
    }
}

/// Runs the summary command.
pub fn run<W: Write>(
    writer: &mut W,
    entries: &[Entry],
    filter: &EntryFilter,
    json: bool,
) -> Result<ActivitySummary> {
    let summary = summarize(entries, filter);

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&summary)?)?;
    } else {
        write!(writer, "{}", format_summary(&summary))?;
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;
    use sed_core::Status;

    fn fixture() -> Vec<Entry> {
        vec![
            Entry::new("2024-03-01", Category::WorkShip, Status::Confirmed)
                .with_ship_name("MV Aurora"),
            Entry::new("2024-03-02", Category::WorkShip, Status::Confirmed)
                .with_ship_name("MV Aurora"),
            Entry::new("2024-03-03", Category::WorkShip, Status::Confirmed),
            Entry::new("2024-03-04", Category::WorkLand, Status::Confirmed).with_country("Norway"),
            Entry::new("2024-03-05", Category::Vacation, Status::Confirmed),
            Entry::new("2024-03-06", Category::Travel, Status::Pending),
        ]
    }

    #[test]
    fn test_format_summary() {
        let summary = summarize(&fixture(), &EntryFilter::default());
        assert_snapshot!(format_summary(&summary), @r"
        ACTIVITY SUMMARY
        ────────────────
        work_ship     3 days
        work_land     1 days
        vacation      1 days
        travel        0 days
        total         5 days

        SHIPS
          MV Aurora: 2 days
          N/A: 1 days

        COUNTRIES
          Norway: 1 days
        ");
    }

    #[test]
    fn test_format_summary_without_breakdowns() {
        let summary = ActivitySummary::default();
        let output = format_summary(&summary);
        assert!(output.ends_with("total         0 days\n"));
        assert!(!output.contains("SHIPS"));
        assert!(!output.contains("COUNTRIES"));
    }

    #[test]
    fn test_run_json_with_filter() {
        let filter = EntryFilter {
            category: Some(Category::WorkShip),
            ..EntryFilter::default()
        };
        let mut output = Vec::new();
        run(&mut output, &fixture(), &filter, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["work_ship_days"], 3);
        assert_eq!(value["work_land_days"], 0);
        assert_eq!(value["ships"]["MV Aurora"], 2);
        assert_eq!(value["ships"]["N/A"], 1);
    }
}
