//! Home-jurisdiction classification.

/// Names accepted as the home country (UK), compared case-insensitively.
///
/// Exact matches only: punctuated forms such as "U.K." are not recognised.
pub const HOME_ALIASES: [&str; 8] = [
    "uk",
    "united kingdom",
    "gb",
    "great britain",
    "england",
    "scotland",
    "wales",
    "northern ireland",
];

/// Returns true if `name` is one of the [`HOME_ALIASES`].
///
/// Surrounding whitespace and case are ignored. Blank input is never home.
pub fn is_home_country(name: &str) -> bool {
    let normalized = name.trim().to_lowercase();
    !normalized.is_empty() && HOME_ALIASES.contains(&normalized.as_str())
}
