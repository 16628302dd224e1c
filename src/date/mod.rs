//! Date expression module
//!
//! Turns the loose date expressions people type into chat commands
//! ("tomorrow", "fri", "mon-fri", "25-01", "Jan 25") into canonical
//! calendar dates. Resolution never fails: anything unrecognised falls back
//! to the reference date.
//!
//! Every function here takes the reference "now" as a parameter; only the
//! binary reads the system clock.

mod range;
mod resolve;
mod template;
mod weekday;

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{Datelike, Days, Months, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use range::{checked_expand, expand};
pub use resolve::resolve;
pub use template::parse_specific_date;
pub use weekday::{next_occurrence, WeekdayToken};

static ISO_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").expect("valid ISO date pattern")
});

/// A calendar day without time of day, rendered as `YYYY-MM-DD`
///
/// Restricted to years 0 through 9999 so the textual form is always ten
/// characters and sorts the same way the dates do. Arithmetic saturates at
/// those bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct CanonicalDate(NaiveDate);

impl CanonicalDate {
    /// Wrap a chrono date, rejecting years outside 0..=9999
    pub fn new(date: NaiveDate) -> Option<Self> {
        (0..=9999).contains(&date.year()).then_some(Self(date))
    }

    /// Build from year, month and day; `None` if that day does not exist
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).and_then(Self::new)
    }

    pub fn naive(self) -> NaiveDate {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn weekday(self) -> WeekdayToken {
        WeekdayToken::from(self.0.weekday())
    }

    /// The date `days` calendar days later; stops at 9999-12-31
    pub fn add_days(self, days: u32) -> Self {
        self.checked_add_days(days).unwrap_or_else(Self::highest)
    }

    /// The date `days` calendar days later, `None` past 9999-12-31
    pub fn checked_add_days(self, days: u32) -> Option<Self> {
        self.0
            .checked_add_days(Days::new(u64::from(days)))
            .and_then(Self::new)
    }

    /// The date `days` calendar days earlier
    pub fn sub_days(self, days: u32) -> Self {
        self.0
            .checked_sub_days(Days::new(u64::from(days)))
            .and_then(Self::new)
            .unwrap_or_else(Self::lowest)
    }

    /// Same month and day `years` later; 29 February clamps to the 28th
    pub fn add_years(self, years: u32) -> Self {
        self.0
            .checked_add_months(Months::new(years.saturating_mul(12)))
            .and_then(Self::new)
            .unwrap_or_else(Self::highest)
    }

    fn lowest() -> Self {
        Self(NaiveDate::from_ymd_opt(0, 1, 1).unwrap_or(NaiveDate::MIN))
    }

    fn highest() -> Self {
        Self(NaiveDate::from_ymd_opt(9999, 12, 31).unwrap_or(NaiveDate::MAX))
    }
}

impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CanonicalDate {
    type Err = Error;

    /// Strict `YYYY-MM-DD`; use [`resolve`] for anything people type
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidDate(s.to_string());
        let caps = ISO_DATE.captures(s).ok_or_else(invalid)?;
        let year = caps[1].parse().map_err(|_| invalid())?;
        let month = caps[2].parse().map_err(|_| invalid())?;
        let day = caps[3].parse().map_err(|_| invalid())?;
        Self::from_ymd(year, month, day).ok_or_else(invalid)
    }
}

impl From<CanonicalDate> for String {
    fn from(date: CanonicalDate) -> Self {
        date.to_string()
    }
}

impl TryFrom<String> for CanonicalDate {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// A non-empty run of consecutive calendar days
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    dates: Vec<CanonicalDate>,
}

impl DateRange {
    /// `days` consecutive dates starting at `start` (at least one)
    ///
    /// The run is cut short at 9999-12-31 rather than repeating that day.
    pub fn contiguous(start: CanonicalDate, days: u32) -> Self {
        let dates = (0..days.max(1))
            .map_while(|offset| start.checked_add_days(offset))
            .collect();
        Self { dates }
    }

    pub fn first(&self) -> CanonicalDate {
        self.dates[0]
    }

    pub fn last(&self) -> CanonicalDate {
        self.dates[self.dates.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// A range holds at least its start date, so this is false
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn as_slice(&self) -> &[CanonicalDate] {
        &self.dates
    }

    pub fn iter(&self) -> impl Iterator<Item = CanonicalDate> + '_ {
        self.dates.iter().copied()
    }
}

/// Outcome of resolving a date expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseResult {
    /// One date ("today", "fri", "25-01")
    Single(CanonicalDate),
    /// A weekday span ("mon-fri")
    Range(DateRange),
}

impl ParseResult {
    /// All resolved dates in order
    pub fn dates(&self) -> &[CanonicalDate] {
        match self {
            ParseResult::Single(date) => std::slice::from_ref(date),
            ParseResult::Range(range) => range.as_slice(),
        }
    }

    /// The first resolved date; single-date commands use only this one
    pub fn first(&self) -> CanonicalDate {
        match self {
            ParseResult::Single(date) => *date,
            ParseResult::Range(range) => range.first(),
        }
    }

    pub fn is_range(&self) -> bool {
        matches!(self, ParseResult::Range(_))
    }
}

/// Monday through Sunday of the ISO week containing `reference`
pub fn this_week(reference: CanonicalDate) -> DateRange {
    let monday = reference.sub_days(reference.naive().weekday().num_days_from_monday());
    DateRange::contiguous(monday, 7)
}

/// Format a date for display: "Fri, 23 Jan 2026"
pub fn format_date(date: CanonicalDate) -> String {
    date.naive().format("%a, %-d %b %Y").to_string()
}

/// Format a date without the year: "Fri, 23 Jan"
pub fn format_short_date(date: CanonicalDate) -> String {
    date.naive().format("%a, %-d %b").to_string()
}
