//! Weekday span expansion ("mon-fri", "fri-mon")

use super::weekday::{days_until, next_occurrence, WeekdayToken};
use super::{CanonicalDate, DateRange};

/// Expand a weekday span into concrete dates
///
/// The span starts at the next `start` weekday on or after `from` and runs
/// through the following `end` weekday, wrapping past Saturday when `end`
/// comes before `start` in the week. Always 1 to 7 days, fewer only when
/// the span would run past 9999-12-31; see [`checked_expand`].
pub fn expand(start: WeekdayToken, end: WeekdayToken, from: CanonicalDate) -> DateRange {
    let anchor = next_occurrence(from, start);
    DateRange::contiguous(anchor, span(start, end))
}

/// [`expand`], or `None` when the span does not end by 9999-12-31
pub fn checked_expand(
    start: WeekdayToken,
    end: WeekdayToken,
    from: CanonicalDate,
) -> Option<DateRange> {
    from.checked_add_days(days_until(from, start) + span(start, end) - 1)?;
    Some(expand(start, end, from))
}

fn span(start: WeekdayToken, end: WeekdayToken) -> u32 {
    if end.index() >= start.index() {
        end.index() - start.index() + 1
    } else {
        7 - start.index() + end.index() + 1
    }
}
