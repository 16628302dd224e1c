//! Weekday names and next-occurrence arithmetic

use std::fmt;

use chrono::Weekday;

use super::CanonicalDate;

/// A day of the week as typed by users
///
/// Indexed from Sunday (0) to Saturday (6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeekdayToken {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl WeekdayToken {
    /// All seven days in index order
    pub const ALL: [WeekdayToken; 7] = [
        WeekdayToken::Sunday,
        WeekdayToken::Monday,
        WeekdayToken::Tuesday,
        WeekdayToken::Wednesday,
        WeekdayToken::Thursday,
        WeekdayToken::Friday,
        WeekdayToken::Saturday,
    ];

    /// Match a full or three-letter name, ignoring case and surrounding spaces
    pub fn from_alias(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sunday" | "sun" => Some(WeekdayToken::Sunday),
            "monday" | "mon" => Some(WeekdayToken::Monday),
            "tuesday" | "tue" => Some(WeekdayToken::Tuesday),
            "wednesday" | "wed" => Some(WeekdayToken::Wednesday),
            "thursday" | "thu" => Some(WeekdayToken::Thursday),
            "friday" | "fri" => Some(WeekdayToken::Friday),
            "saturday" | "sat" => Some(WeekdayToken::Saturday),
            _ => None,
        }
    }

    /// 0 for Sunday through 6 for Saturday
    pub fn index(self) -> u32 {
        match self {
            WeekdayToken::Sunday => 0,
            WeekdayToken::Monday => 1,
            WeekdayToken::Tuesday => 2,
            WeekdayToken::Wednesday => 3,
            WeekdayToken::Thursday => 4,
            WeekdayToken::Friday => 5,
            WeekdayToken::Saturday => 6,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WeekdayToken::Sunday => "Sunday",
            WeekdayToken::Monday => "Monday",
            WeekdayToken::Tuesday => "Tuesday",
            WeekdayToken::Wednesday => "Wednesday",
            WeekdayToken::Thursday => "Thursday",
            WeekdayToken::Friday => "Friday",
            WeekdayToken::Saturday => "Saturday",
        }
    }
}

impl From<Weekday> for WeekdayToken {
    fn from(day: Weekday) -> Self {
        WeekdayToken::ALL[day.num_days_from_sunday() as usize]
    }
}

impl From<WeekdayToken> for Weekday {
    fn from(day: WeekdayToken) -> Self {
        match day {
            WeekdayToken::Sunday => Weekday::Sun,
            WeekdayToken::Monday => Weekday::Mon,
            WeekdayToken::Tuesday => Weekday::Tue,
            WeekdayToken::Wednesday => Weekday::Wed,
            WeekdayToken::Thursday => Weekday::Thu,
            WeekdayToken::Friday => Weekday::Fri,
            WeekdayToken::Saturday => Weekday::Sat,
        }
    }
}

impl fmt::Display for WeekdayToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Find the next `target` weekday on or after `from`
///
/// If `from` already falls on `target`, `from` itself is returned rather
/// than the same weekday a week later.
pub fn next_occurrence(from: CanonicalDate, target: WeekdayToken) -> CanonicalDate {
    from.add_days(days_until(from, target))
}

/// Days from `from` to the next `target` weekday, 0 when it already is one
pub(crate) fn days_until(from: CanonicalDate, target: WeekdayToken) -> u32 {
    (7 + target.index() - from.weekday().index()) % 7
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CanonicalDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_from_alias_full_and_short() {
        let test_cases = vec![
            ("sun", WeekdayToken::Sunday),
            ("Monday", WeekdayToken::Monday),
            ("TUE", WeekdayToken::Tuesday),
            ("wednesday", WeekdayToken::Wednesday),
            ("Thu", WeekdayToken::Thursday),
            (" fri ", WeekdayToken::Friday),
            ("SATURDAY", WeekdayToken::Saturday),
        ];

        for (input, expected) in test_cases {
            assert_eq!(WeekdayToken::from_alias(input), Some(expected), "alias {:?}", input);
        }
    }

    #[test]
    fn test_from_alias_rejects_other_spellings() {
        assert_eq!(WeekdayToken::from_alias("tues"), None);
        assert_eq!(WeekdayToken::from_alias("thur"), None);
        assert_eq!(WeekdayToken::from_alias("mo"), None);
        assert_eq!(WeekdayToken::from_alias(""), None);
        assert_eq!(WeekdayToken::from_alias("mon-fri"), None);
    }

    #[test]
    fn test_index_matches_chrono() {
        for day in WeekdayToken::ALL {
            let chrono_day: Weekday = day.into();
            assert_eq!(day.index(), chrono_day.num_days_from_sunday());
            assert_eq!(WeekdayToken::from(chrono_day), day);
        }
    }

    #[test]
    fn test_next_occurrence_same_day_is_today() {
        // 2026-01-26 is a Monday
        let monday = date("2026-01-26");
        assert_eq!(next_occurrence(monday, WeekdayToken::Monday), monday);
    }

    #[test]
    fn test_next_occurrence_later_this_week() {
        // Wednesday -> Friday
        assert_eq!(next_occurrence(date("2026-01-21"), WeekdayToken::Friday), date("2026-01-23"));
    }

    #[test]
    fn test_next_occurrence_wraps_to_next_week() {
        // Wednesday -> Monday
        assert_eq!(next_occurrence(date("2026-01-21"), WeekdayToken::Monday), date("2026-01-26"));
        // Saturday -> Sunday
        assert_eq!(next_occurrence(date("2026-01-24"), WeekdayToken::Sunday), date("2026-01-25"));
    }

    #[test]
    fn test_next_occurrence_across_year_and_leap_day() {
        // Wednesday 2025-12-31 -> Monday 2026-01-05
        assert_eq!(next_occurrence(date("2025-12-31"), WeekdayToken::Monday), date("2026-01-05"));
        // Wednesday 2024-02-28 -> Thursday 2024-02-29
        assert_eq!(next_occurrence(date("2024-02-28"), WeekdayToken::Thursday), date("2024-02-29"));
    }
}
