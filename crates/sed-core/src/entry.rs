//! Daily activity entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::country::is_home_country;
use crate::dates::parse_day;
use crate::types::{Category, Status};

/// One calendar day's classification.
///
/// The date is kept as supplied so that a malformed record can still be
/// carried around; [`Entry::day`] yields `None` for it and every filter
/// treats it as non-matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,

    pub category: Category,

    pub status: Status,

    /// Vessel name, meaningful for `work_ship` entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship_name: Option<String>,

    /// Country worked in, meaningful for `work_land` entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Entry {
    /// Creates an entry with no ship, country or notes.
    pub fn new(date: impl Into<String>, category: Category, status: Status) -> Self {
        Self {
            date: date.into(),
            category,
            status,
            ship_name: None,
            country: None,
            notes: None,
        }
    }

    #[must_use]
    pub fn with_ship_name(mut self, ship_name: impl Into<String>) -> Self {
        self.ship_name = Some(ship_name.into());
        self
    }

    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// The entry's calendar day, or `None` if the date does not parse.
    pub fn day(&self) -> Option<NaiveDate> {
        parse_day(&self.date)
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == Status::Confirmed
    }

    /// The country, if present and not blank.
    pub fn country_name(&self) -> Option<&str> {
        self.country.as_deref().filter(|c| !c.trim().is_empty())
    }

    /// Land work inside the home country.
    pub fn is_home_land_day(&self) -> bool {
        self.category == Category::WorkLand && self.country_name().is_some_and(is_home_country)
    }

    /// Ship work, or land work in a country other than home.
    ///
    /// Land work with no country or an empty one is neither abroad nor at
    /// home. A whitespace-only country is still a recorded country, and one
    /// that is not home.
    pub fn is_abroad_day(&self) -> bool {
        match self.category {
            Category::WorkShip => true,
            Category::WorkLand => self
                .country
                .as_deref()
                .is_some_and(|c| !c.is_empty() && !is_home_country(c)),
            Category::Vacation | Category::Travel => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_original_record_shape() {
        let json = r#"{
            "id": "6f1c",
            "date": "2023-01-01",
            "category": "work_ship",
            "status": "confirmed",
            "shipName": "Vessel A",
            "country": null,
            "notes": null
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(
            entry,
            Entry::new("2023-01-01", Category::WorkShip, Status::Confirmed)
                .with_ship_name("Vessel A")
        );
    }

    #[test]
    fn test_serializes_without_empty_optionals() {
        let entry = Entry::new("2023-01-02", Category::WorkLand, Status::Pending).with_country("France");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"date":"2023-01-02","category":"work_land","status":"pending","country":"France"}"#
        );
    }

    #[test]
    fn test_malformed_date_has_no_day() {
        let entry = Entry::new("yesterday", Category::Travel, Status::Confirmed);
        assert_eq!(entry.day(), None);
    }

    #[test]
    fn test_ship_days_are_always_abroad() {
        let entry = Entry::new("2023-01-01", Category::WorkShip, Status::Confirmed);
        assert!(entry.is_abroad_day());
        assert!(!entry.is_home_land_day());
    }

    #[test]
    fn test_land_days_split_on_country() {
        let home = Entry::new("2023-01-01", Category::WorkLand, Status::Confirmed).with_country("Scotland");
        let away = Entry::new("2023-01-02", Category::WorkLand, Status::Confirmed).with_country("Norway");
        assert!(home.is_home_land_day() && !home.is_abroad_day());
        assert!(away.is_abroad_day() && !away.is_home_land_day());
    }

    #[test]
    fn test_land_day_without_country_counts_nowhere() {
        for entry in [
            Entry::new("2023-01-01", Category::WorkLand, Status::Confirmed),
            Entry::new("2023-01-01", Category::WorkLand, Status::Confirmed).with_country(""),
        ] {
            assert!(!entry.is_abroad_day());
            assert!(!entry.is_home_land_day());
        }
    }

    #[test]
    fn test_whitespace_country_counts_abroad() {
        let entry = Entry::new("2023-01-01", Category::WorkLand, Status::Confirmed).with_country("   ");
        assert!(entry.is_abroad_day());
        assert!(!entry.is_home_land_day());
    }

    #[test]
    fn test_vacation_in_home_country_counts_nowhere() {
        let entry = Entry::new("2023-01-01", Category::Vacation, Status::Confirmed).with_country("UK");
        assert!(!entry.is_abroad_day());
        assert!(!entry.is_home_land_day());
    }
}
