//! Fixed-shape date templates ("2026-01-25", "25/01", "Jan 25", ...)

use std::sync::LazyLock;

use chrono::Month;
use regex::{Captures, Regex};

use super::CanonicalDate;

/// One accepted date layout
///
/// The pattern must match the whole input. Named groups: `y` (four-digit
/// year), `m` (two-digit month), `mon` (English month name) and `d` (day).
struct Template {
    layout: &'static str,
    shape: Regex,
}

/// Layouts in priority order
const LAYOUTS: [(&str, &str); 9] = [
    ("YYYY-MM-DD", r"^(?P<y>[0-9]{4})-(?P<m>[0-9]{2})-(?P<d>[0-9]{2})$"),
    ("DD-MM-YYYY", r"^(?P<d>[0-9]{2})-(?P<m>[0-9]{2})-(?P<y>[0-9]{4})$"),
    ("DD-MM", r"^(?P<d>[0-9]{2})-(?P<m>[0-9]{2})$"),
    ("DD/MM/YYYY", r"^(?P<d>[0-9]{2})/(?P<m>[0-9]{2})/(?P<y>[0-9]{4})$"),
    ("DD/MM", r"^(?P<d>[0-9]{2})/(?P<m>[0-9]{2})$"),
    ("D MMM", r"^(?P<d>[1-9][0-9]?) (?P<mon>[A-Za-z]{3})$"),
    ("D MMMM", r"^(?P<d>[1-9][0-9]?) (?P<mon>[A-Za-z]{4,9})$"),
    ("MMM D", r"^(?P<mon>[A-Za-z]{3}) (?P<d>[1-9][0-9]?)$"),
    ("MMMM D", r"^(?P<mon>[A-Za-z]{4,9}) (?P<d>[1-9][0-9]?)$"),
];

static TEMPLATES: LazyLock<Vec<Template>> = LazyLock::new(|| {
    LAYOUTS
        .iter()
        .map(|&(layout, pattern)| Template {
            layout,
            shape: Regex::new(pattern).expect("valid date template pattern"),
        })
        .collect()
});

impl Template {
    fn apply(&self, input: &str, reference: CanonicalDate) -> Option<CanonicalDate> {
        let caps = self.shape.captures(input)?;
        let day: u32 = caps.name("d")?.as_str().parse().ok()?;
        let month = month_number(&caps)?;

        match caps.name("y") {
            Some(year) => CanonicalDate::from_ymd(year.as_str().parse().ok()?, month, day),
            None => {
                // Year-less dates mean the next such day, never a past one
                let date = CanonicalDate::from_ymd(reference.year(), month, day)?;
                if date < reference {
                    Some(date.add_years(1))
                } else {
                    Some(date)
                }
            }
        }
    }
}

fn month_number(caps: &Captures<'_>) -> Option<u32> {
    if let Some(m) = caps.name("m") {
        return m.as_str().parse().ok();
    }
    // chrono accepts both "jan" and "january"; group width picks which
    let month: Month = caps.name("mon")?.as_str().parse().ok()?;
    Some(month.number_from_month())
}

/// Parse an explicit date in one of the supported layouts
///
/// Layouts are tried in order and the first one that both matches the
/// input's exact shape and names a real calendar day wins:
///
/// - `YYYY-MM-DD` → `2026-01-25`
/// - `DD-MM-YYYY` → `25-01-2026`
/// - `DD-MM` → `25-01`
/// - `DD/MM/YYYY` → `25/01/2026`
/// - `DD/MM` → `25/01`
/// - `D MMM` / `D MMMM` → `25 Jan`, `25 January`
/// - `MMM D` / `MMMM D` → `Jan 25`, `January 25`
///
/// Layouts without a year take `reference`'s year, moving to the following
/// year when that day has already passed.
pub fn parse_specific_date(input: &str, reference: CanonicalDate) -> Option<CanonicalDate> {
    let input = input.trim();
    TEMPLATES.iter().find_map(|template| {
        let parsed = template.apply(input, reference)?;
        tracing::trace!(layout = template.layout, input, date = %parsed, "matched date layout");
        Some(parsed)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CanonicalDate {
        s.parse().unwrap()
    }

    fn parse(input: &str, reference: &str) -> Option<String> {
        parse_specific_date(input, date(reference)).map(|d| d.to_string())
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(parse("2026-01-25", "2026-03-01"), Some("2026-01-25".to_string()));
        // Explicit years are taken as given, even in the past
        assert_eq!(parse("2020-06-15", "2026-03-01"), Some("2020-06-15".to_string()));
    }

    #[test]
    fn test_day_month_year() {
        assert_eq!(parse("25-01-2026", "2026-03-01"), Some("2026-01-25".to_string()));
        assert_eq!(parse("25/01/2026", "2026-03-01"), Some("2026-01-25".to_string()));
    }

    #[test]
    fn test_day_month_rolls_forward_when_passed() {
        assert_eq!(parse("25-01", "2026-02-01"), Some("2027-01-25".to_string()));
        assert_eq!(parse("25-01", "2026-01-01"), Some("2026-01-25".to_string()));
        assert_eq!(parse("25/01", "2026-02-01"), Some("2027-01-25".to_string()));
    }

    #[test]
    fn test_day_month_on_reference_day_is_this_year() {
        assert_eq!(parse("25-01", "2026-01-25"), Some("2026-01-25".to_string()));
    }

    #[test]
    fn test_month_names() {
        assert_eq!(parse("25 Jan", "2026-01-01"), Some("2026-01-25".to_string()));
        assert_eq!(parse("25 January", "2026-01-01"), Some("2026-01-25".to_string()));
        assert_eq!(parse("Jan 25", "2026-01-01"), Some("2026-01-25".to_string()));
        assert_eq!(parse("january 5", "2026-01-01"), Some("2026-01-05".to_string()));
        assert_eq!(parse("3 mar", "2026-06-01"), Some("2027-03-03".to_string()));
        assert_eq!(parse("May 4", "2026-01-01"), Some("2026-05-04".to_string()));
    }

    #[test]
    fn test_shapes_are_exact() {
        // Two-digit fields must be two digits
        assert_eq!(parse("5-01", "2026-01-01"), None);
        assert_eq!(parse("2026-1-25", "2026-01-01"), None);
        // Single-digit day layouts take no leading zero
        assert_eq!(parse("05 Jan", "2026-01-01"), None);
        // Mixed separators
        assert_eq!(parse("25-01/2026", "2026-01-01"), None);
        // Month names must be whole names or three-letter abbreviations
        assert_eq!(parse("25 Janu", "2026-01-01"), None);
        assert_eq!(parse("Sept 4", "2026-01-01"), None);
        // Trailing junk
        assert_eq!(parse("25-01x", "2026-01-01"), None);
    }

    #[test]
    fn test_invalid_calendar_days() {
        assert_eq!(parse("2026-02-30", "2026-01-01"), None);
        assert_eq!(parse("32-01", "2026-01-01"), None);
        assert_eq!(parse("15-13", "2026-01-01"), None);
        assert_eq!(parse("Feb 30", "2026-01-01"), None);
    }

    #[test]
    fn test_leap_day_without_year() {
        // No 29 February in the reference year
        assert_eq!(parse("29-02", "2026-01-01"), None);
        // Upcoming leap day
        assert_eq!(parse("29-02", "2028-01-10"), Some("2028-02-29".to_string()));
        // Passed leap day clamps in the following year
        assert_eq!(parse("29-02", "2028-03-01"), Some("2029-02-28".to_string()));
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        assert_eq!(parse("  25-01  ", "2026-01-01"), Some("2026-01-25".to_string()));
    }

    #[test]
    fn test_unrecognised() {
        assert_eq!(parse("xyz123", "2026-01-01"), None);
        assert_eq!(parse("", "2026-01-01"), None);
        assert_eq!(parse("mon-fri", "2026-01-01"), None);
    }
}
