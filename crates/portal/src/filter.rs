//! Log filter engine
//!
//! Stateless and synchronous. Each predicate tests one criterion and an
//! absent criterion always passes, so a default `LogCriteria` returns the
//! collection unchanged. Results borrow from the input and keep its order.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use shared_types::{DateRange, LogCriteria, LogRecord, ShiftFilter, StatusFilter};

/// Reference point for the relative date predicates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterContext {
    pub now: NaiveDateTime,
    /// Width of the "this week" window.
    pub recent_window: Duration,
}

impl FilterContext {
    pub fn at(now: NaiveDateTime) -> Self {
        Self {
            now,
            recent_window: Duration::days(7),
        }
    }

    /// Context anchored at the local wall clock.
    pub fn current() -> Self {
        Self::at(Local::now().naive_local())
    }

    pub fn with_window_days(mut self, days: i64) -> Self {
        self.recent_window = Duration::days(days);
        self
    }
}

/// Case-insensitive substring match over summary, department and engineer.
pub fn matches_search(record: &LogRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    [&record.summary, &record.department, &record.engineer]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn matches_status(record: &LogRecord, filter: &StatusFilter) -> bool {
    match filter {
        StatusFilter::Review(status) => record.status == *status,
        StatusFilter::Condition(condition) => record.condition == Some(*condition),
        StatusFilter::Unrecognized(_) => false,
    }
}

pub fn matches_shift(record: &LogRecord, filter: &ShiftFilter) -> bool {
    match filter {
        ShiftFilter::Is(shift) => record.shift == *shift,
        ShiftFilter::Unrecognized(_) => false,
    }
}

/// Record's calendar day equals `day`; time of day is ignored.
pub fn matches_day(record: &LogRecord, day: NaiveDate) -> bool {
    record.date.date() == day
}

pub fn matches_range(record: &LogRecord, range: DateRange, ctx: &FilterContext) -> bool {
    let today = ctx.now.date();
    match range {
        DateRange::All => true,
        DateRange::Today => record.date.date() == today,
        DateRange::Yesterday => today
            .pred_opt()
            .map_or(false, |yesterday| record.date.date() == yesterday),
        // Lower bound only: anything not earlier than now minus the window.
        DateRange::ThisWeek => record.date >= ctx.now - ctx.recent_window,
    }
}

/// Evaluate every active criterion against one record (AND semantics).
pub fn matches(record: &LogRecord, criteria: &LogCriteria, ctx: &FilterContext) -> bool {
    if let Some(status) = &criteria.status {
        if !matches_status(record, status) {
            return false;
        }
    }

    if let Some(department) = &criteria.department {
        if record.department != *department {
            return false;
        }
    }

    if let Some(shift) = &criteria.shift {
        if !matches_shift(record, shift) {
            return false;
        }
    }

    if let Some(day) = criteria.on_date {
        if !matches_day(record, day) {
            return false;
        }
    }

    if !matches_range(record, criteria.date_range, ctx) {
        return false;
    }

    criteria
        .search
        .as_deref()
        .map_or(true, |term| matches_search(record, term))
}

/// Apply `criteria` to `records`, preserving order.
pub fn filter_logs<'a>(
    records: &'a [LogRecord],
    criteria: &LogCriteria,
    ctx: &FilterContext,
) -> Vec<&'a LogRecord> {
    records
        .iter()
        .filter(|record| matches(record, criteria, ctx))
        .collect()
}
