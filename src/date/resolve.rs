//! Date expression resolution
//!
//! An expression is run through an ordered list of rules; the first rule
//! that recognises it decides the result. Nothing matched means the
//! reference date.

use super::range::checked_expand;
use super::template::parse_specific_date;
use super::weekday::{days_until, WeekdayToken};
use super::{CanonicalDate, ParseResult};

/// Raw input together with its lowercased, trimmed form
struct Expression<'a> {
    raw: &'a str,
    lowered: String,
}

impl<'a> Expression<'a> {
    fn new(raw: &'a str) -> Self {
        Self {
            raw,
            lowered: raw.trim().to_lowercase(),
        }
    }

    fn is_hyphenated(&self) -> bool {
        self.lowered.contains('-')
    }
}

/// A named recogniser; `None` passes the expression to the next rule
struct Rule {
    name: &'static str,
    apply: fn(&Expression<'_>, CanonicalDate) -> Option<ParseResult>,
}

/// Rules in priority order
const RULES: [Rule; 6] = [
    Rule { name: "today", apply: today },
    Rule { name: "tomorrow", apply: tomorrow },
    Rule { name: "weekday-range", apply: weekday_range },
    Rule { name: "hyphenated-date", apply: hyphenated_date },
    Rule { name: "weekday", apply: weekday },
    Rule { name: "explicit-date", apply: explicit_date },
];

fn today(expr: &Expression<'_>, reference: CanonicalDate) -> Option<ParseResult> {
    (expr.lowered.is_empty() || expr.lowered == "today").then_some(ParseResult::Single(reference))
}

fn tomorrow(expr: &Expression<'_>, reference: CanonicalDate) -> Option<ParseResult> {
    (expr.lowered == "tomorrow").then(|| ParseResult::Single(reference.add_days(1)))
}

/// "mon-fri", "Friday - Monday"; spans past 9999-12-31 are not recognised
fn weekday_range(expr: &Expression<'_>, reference: CanonicalDate) -> Option<ParseResult> {
    let (start, end) = expr.lowered.split_once('-')?;
    if end.contains('-') {
        return None;
    }
    let start = WeekdayToken::from_alias(start)?;
    let end = WeekdayToken::from_alias(end)?;
    checked_expand(start, end, reference).map(ParseResult::Range)
}

/// "25-01", "2026-01-25" and other hyphenated dates that are not weekday spans
fn hyphenated_date(expr: &Expression<'_>, reference: CanonicalDate) -> Option<ParseResult> {
    if !expr.is_hyphenated() {
        return None;
    }
    parse_specific_date(expr.raw, reference).map(ParseResult::Single)
}

/// "monday", "Tue"
fn weekday(expr: &Expression<'_>, reference: CanonicalDate) -> Option<ParseResult> {
    let day = WeekdayToken::from_alias(&expr.lowered)?;
    let next = reference.checked_add_days(days_until(reference, day))?;
    Some(ParseResult::Single(next))
}

/// "25/01", "Jan 25", "25 January"
fn explicit_date(expr: &Expression<'_>, reference: CanonicalDate) -> Option<ParseResult> {
    if expr.is_hyphenated() {
        // Already tried by `hyphenated_date`
        return None;
    }
    parse_specific_date(expr.raw, reference).map(ParseResult::Single)
}

/// Resolve a user-typed date expression against `reference`
///
/// Supported expressions:
/// - `None`, `""`, `"today"` → `reference`
/// - `"tomorrow"` → the day after `reference`
/// - `"mon-fri"`, `"friday-monday"` → every day of the next such span
/// - `"monday"`, `"tue"` → the next such weekday (or `reference` itself)
/// - `"2026-01-25"`, `"25-01-2026"`, `"25/01"`, `"Jan 25"`, ... → that date
///
/// Never fails; an unrecognised expression resolves to `reference`. So do
/// weekdays and spans that would fall after 9999-12-31, while `"tomorrow"`
/// on 9999-12-31 stays on that day.
///
/// # Example
///
/// ```
/// use lunch_orders::date::{resolve, CanonicalDate};
///
/// let wednesday: CanonicalDate = "2026-01-21".parse().unwrap();
/// let result = resolve(Some("mon-fri"), wednesday);
///
/// assert_eq!(result.dates().len(), 5);
/// assert_eq!(result.first().to_string(), "2026-01-26");
/// ```
pub fn resolve(input: Option<&str>, reference: CanonicalDate) -> ParseResult {
    let expr = Expression::new(input.unwrap_or_default());

    for rule in &RULES {
        if let Some(result) = (rule.apply)(&expr, reference) {
            tracing::trace!(rule = rule.name, input = expr.raw, "resolved date expression");
            return result;
        }
    }

    tracing::debug!(input = expr.raw, "unrecognised date expression, using reference date");
    ParseResult::Single(reference)
}
