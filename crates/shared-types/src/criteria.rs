//! Filter criteria for the supervisor and compliance log views.
//!
//! Every criterion is optional: `None` means "no constraint". The raw
//! select values, with their `"all"` sentinel, only exist in
//! [`LogFilterParams`] and are converted once at the boundary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::log::{ConditionStatus, ReviewStatus, Shift};

/// Sentinel the select widgets use for "no constraint".
pub const ALL_SENTINEL: &str = "all";

/// Relative date window offered on the supervisor dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DateRange {
    #[default]
    All,
    Today,
    Yesterday,
    ThisWeek,
}

impl DateRange {
    /// Parse a select value. Unknown values (including "this-month", which
    /// the dashboard offers but never filtered on) fall back to `All`.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "today" => DateRange::Today,
            "yesterday" => DateRange::Yesterday,
            "this-week" => DateRange::ThisWeek,
            _ => DateRange::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DateRange::All => "all",
            DateRange::Today => "today",
            DateRange::Yesterday => "yesterday",
            DateRange::ThisWeek => "this-week",
        }
    }
}

/// Status constraint. The supervisor view filters on both the review
/// vocabulary and the engineer-reported condition, so the two stay
/// separate types and the filter names which one it targets.
///
/// A select value neither vocabulary knows is kept as `Unrecognized` and
/// matches no record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "vocabulary", content = "value", rename_all = "snake_case")]
pub enum StatusFilter {
    Review(ReviewStatus),
    Condition(ConditionStatus),
    Unrecognized(String),
}

impl StatusFilter {
    /// Case-insensitive parse, trying the review vocabulary first.
    pub fn parse_filter(s: &str) -> Option<Self> {
        ReviewStatus::parse_status(s)
            .map(StatusFilter::Review)
            .or_else(|| ConditionStatus::parse_condition(s).map(StatusFilter::Condition))
    }

    /// Like [`parse_filter`](Self::parse_filter) but never drops the value.
    pub fn from_select(s: &str) -> Self {
        Self::parse_filter(s).unwrap_or_else(|| StatusFilter::Unrecognized(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            StatusFilter::Review(status) => status.as_str(),
            StatusFilter::Condition(condition) => condition.as_str(),
            StatusFilter::Unrecognized(raw) => raw,
        }
    }
}

impl From<ReviewStatus> for StatusFilter {
    fn from(status: ReviewStatus) -> Self {
        StatusFilter::Review(status)
    }
}

impl From<ConditionStatus> for StatusFilter {
    fn from(condition: ConditionStatus) -> Self {
        StatusFilter::Condition(condition)
    }
}

/// Shift constraint. Values other than the three shift names are kept
/// as `Unrecognized` and match no record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShiftFilter {
    Is(Shift),
    Unrecognized(String),
}

impl ShiftFilter {
    pub fn from_select(s: &str) -> Self {
        Shift::parse_shift(s)
            .map(ShiftFilter::Is)
            .unwrap_or_else(|| ShiftFilter::Unrecognized(s.to_string()))
    }
}

impl From<Shift> for ShiftFilter {
    fn from(shift: Shift) -> Self {
        ShiftFilter::Is(shift)
    }
}

/// Typed filter criteria applied conjunctively to a log collection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LogCriteria {
    /// Case-insensitive substring over summary, department and engineer.
    pub search: Option<String>,
    pub department: Option<String>,
    pub shift: Option<ShiftFilter>,
    pub status: Option<StatusFilter>,
    /// Exact calendar day (compliance date picker).
    pub on_date: Option<NaiveDate>,
    /// Relative window (supervisor date select).
    pub date_range: DateRange,
}

impl LogCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no criterion is active, i.e. filtering returns the input unchanged.
    pub fn is_unconstrained(&self) -> bool {
        self == &Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = if term.is_empty() { None } else { Some(term) };
        self
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn shift(mut self, shift: impl Into<ShiftFilter>) -> Self {
        self.shift = Some(shift.into());
        self
    }

    pub fn status(mut self, status: impl Into<StatusFilter>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn on_date(mut self, day: NaiveDate) -> Self {
        self.on_date = Some(day);
        self
    }

    pub fn date_range(mut self, range: DateRange) -> Self {
        self.date_range = range;
        self
    }
}

fn default_all() -> String {
    ALL_SENTINEL.to_string()
}

/// Raw filter values as the dashboard widgets hold them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogFilterParams {
    #[serde(default)]
    pub search: String,
    #[serde(default = "default_all")]
    pub department: String,
    #[serde(default = "default_all")]
    pub shift: String,
    #[serde(default = "default_all")]
    pub status: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default = "default_all")]
    pub date_range: String,
}

impl Default for LogFilterParams {
    fn default() -> Self {
        Self {
            search: String::new(),
            department: default_all(),
            shift: default_all(),
            status: default_all(),
            date: None,
            date_range: default_all(),
        }
    }
}

fn unless_all(value: &str) -> Option<&str> {
    if value.is_empty() || value == ALL_SENTINEL {
        None
    } else {
        Some(value)
    }
}

impl From<LogFilterParams> for LogCriteria {
    fn from(p: LogFilterParams) -> Self {
        Self {
            search: if p.search.is_empty() { None } else { Some(p.search) },
            department: unless_all(&p.department).map(str::to_string),
            shift: unless_all(&p.shift).map(ShiftFilter::from_select),
            status: unless_all(&p.status).map(StatusFilter::from_select),
            on_date: p.date,
            date_range: DateRange::from_str_or_default(&p.date_range),
        }
    }
}
