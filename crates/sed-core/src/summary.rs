//! Browsing filters and per-category day totals.

use std::borrow::Borrow;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::entry::Entry;
use crate::types::Category;

/// Label for ship or country breakdowns when the name is missing.
pub const UNNAMED: &str = "N/A";

/// Criteria for narrowing a list of entries. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    /// Earliest day to include.
    pub date_start: Option<NaiveDate>,
    /// Latest day to include.
    pub date_end: Option<NaiveDate>,
    pub category: Option<Category>,
    /// Case-insensitive substring of the ship name, country or notes.
    pub keyword: Option<String>,
}

impl EntryFilter {
    /// Returns true if `entry` satisfies every set criterion.
    ///
    /// An entry with an unparseable date fails any date bound.
    pub fn matches(&self, entry: &Entry) -> bool {
        if self.date_start.is_some() || self.date_end.is_some() {
            let Some(day) = entry.day() else {
                return false;
            };
            if self.date_start.is_some_and(|start| day < start)
                || self.date_end.is_some_and(|end| day > end)
            {
                return false;
            }
        }

        if self.category.is_some_and(|category| entry.category != category) {
            return false;
        }

        match self.keyword.as_deref().map(str::trim) {
            Some(keyword) if !keyword.is_empty() => {
                let keyword = keyword.to_lowercase();
                [&entry.ship_name, &entry.country, &entry.notes]
                    .into_iter()
                    .flatten()
                    .any(|field| field.to_lowercase().contains(&keyword))
            }
            _ => true,
        }
    }

    /// The entries that match, in their original order.
    pub fn apply<'a, E: Borrow<Entry>>(&self, entries: &'a [E]) -> Vec<&'a Entry> {
        entries
            .iter()
            .map(<E as Borrow<Entry>>::borrow)
            .filter(|entry| self.matches(entry))
            .collect()
    }
}

/// Day totals over confirmed entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActivitySummary {
    pub work_ship_days: u32,
    pub work_land_days: u32,
    pub vacation_days: u32,
    pub travel_days: u32,
    /// Ship days per vessel name.
    pub ships: BTreeMap<String, u32>,
    /// Land days per country.
    pub countries: BTreeMap<String, u32>,
}

impl ActivitySummary {
    pub fn total_days(&self) -> u32 {
        self.work_ship_days + self.work_land_days + self.vacation_days + self.travel_days
    }

    pub const fn days_for(&self, category: Category) -> u32 {
        match category {
            Category::WorkShip => self.work_ship_days,
            Category::WorkLand => self.work_land_days,
            Category::Vacation => self.vacation_days,
            Category::Travel => self.travel_days,
        }
    }
}

/// Totals confirmed entries passing `filter`, by category, ship and country.
pub fn summarize<E: Borrow<Entry>>(entries: &[E], filter: &EntryFilter) -> ActivitySummary {
    let mut summary = ActivitySummary::default();

    for entry in filter.apply(entries) {
        if !entry.is_confirmed() {
            continue;
        }
        match entry.category {
            Category::WorkShip => {
                summary.work_ship_days += 1;
                *summary.ships.entry(name_or_unnamed(entry.ship_name.as_deref())).or_default() += 1;
            }
            Category::WorkLand => {
                summary.work_land_days += 1;
                *summary
                    .countries
                    .entry(name_or_unnamed(entry.country.as_deref()))
                    .or_default() += 1;
            }
            Category::Vacation => summary.vacation_days += 1,
            Category::Travel => summary.travel_days += 1,
        }
    }

    tracing::debug!(total = summary.total_days(), "summarized entries");
    summary
}

fn name_or_unnamed(name: Option<&str>) -> String {
    name.map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(UNNAMED)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::parse_day;
    use crate::types::Status;

    fn fixture() -> Vec<Entry> {
        vec![
            Entry::new("2023-01-01", Category::WorkShip, Status::Confirmed).with_ship_name("Vessel A"),
            Entry::new("2023-01-02", Category::WorkShip, Status::Confirmed).with_ship_name("Vessel A"),
            Entry::new("2023-01-03", Category::WorkShip, Status::Confirmed),
            Entry::new("2023-01-04", Category::WorkLand, Status::Confirmed)
                .with_country("France")
                .with_notes("Dry dock in Brest"),
            Entry::new("2023-01-05", Category::WorkLand, Status::Confirmed).with_country("UK"),
            Entry::new("2023-01-06", Category::Vacation, Status::Confirmed),
            Entry::new("2023-01-07", Category::Travel, Status::Pending),
            Entry::new("bad-date", Category::Travel, Status::Confirmed),
        ]
    }

    #[test]
    fn test_summarizes_confirmed_entries() {
        let summary = summarize(&fixture(), &EntryFilter::default());
        assert_eq!(summary.work_ship_days, 3);
        assert_eq!(summary.work_land_days, 2);
        assert_eq!(summary.vacation_days, 1);
        assert_eq!(summary.travel_days, 1);
        assert_eq!(summary.total_days(), 7);
        assert_eq!(summary.ships.get("Vessel A"), Some(&2));
        assert_eq!(summary.ships.get(UNNAMED), Some(&1));
        assert_eq!(
            summary.countries.keys().collect::<Vec<_>>(),
            ["France", "UK"]
        );
    }

    #[test]
    fn test_date_bounds_are_inclusive_and_drop_bad_dates() {
        let filter = EntryFilter {
            date_start: parse_day("2023-01-02"),
            date_end: parse_day("2023-01-04"),
            ..EntryFilter::default()
        };
        let dates: Vec<_> = filter
            .apply(&fixture())
            .iter()
            .map(|e| e.date.clone())
            .collect();
        assert_eq!(dates, ["2023-01-02", "2023-01-03", "2023-01-04"]);
    }

    #[test]
    fn test_category_filter() {
        let filter = EntryFilter {
            category: Some(Category::WorkLand),
            ..EntryFilter::default()
        };
        let summary = summarize(&fixture(), &filter);
        assert_eq!(summary.days_for(Category::WorkLand), 2);
        assert_eq!(summary.days_for(Category::WorkShip), 0);
    }

    #[test]
    fn test_keyword_searches_names_and_notes() {
        let by_notes = EntryFilter {
            keyword: Some("BREST".to_string()),
            ..EntryFilter::default()
        };
        assert_eq!(by_notes.apply(&fixture()).len(), 1);

        let by_ship = EntryFilter {
            keyword: Some("vessel".to_string()),
            ..EntryFilter::default()
        };
        assert_eq!(by_ship.apply(&fixture()).len(), 2);
    }

    #[test]
    fn test_blank_keyword_matches_everything() {
        let filter = EntryFilter {
            keyword: Some("  ".to_string()),
            ..EntryFilter::default()
        };
        assert_eq!(filter.apply(&fixture()).len(), fixture().len());
    }
}
