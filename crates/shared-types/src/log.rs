use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const DEPARTMENTS: &[&str] = &[
    "Turbine Hall",
    "Boiler Room",
    "Control Room",
    "Water Treatment",
    "Electrical Systems",
];

/// Label shown on the engineer's recent-log rows for every fresh submission.
pub const PENDING_APPROVAL_LABEL: &str = "Pending Approval";

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// Plant shift a log entry covers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shift {
    Morning,
    Afternoon,
    Night,
}

impl Shift {
    pub const ALL: [Shift; 3] = [Shift::Morning, Shift::Afternoon, Shift::Night];

    pub fn as_str(&self) -> &'static str {
        match self {
            Shift::Morning => "Morning",
            Shift::Afternoon => "Afternoon",
            Shift::Night => "Night",
        }
    }

    /// Exact match against the select values ("Morning", "Afternoon", "Night").
    pub fn parse_shift(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|shift| shift.as_str() == s)
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Review state of a log as seen by supervisors and compliance officers.
///
/// `Pending` is the only state with outgoing transitions; `Approved` and
/// `Flagged` are final.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum ReviewStatus {
    #[default]
    Pending,
    Approved,
    Flagged,
}

impl ReviewStatus {
    pub const ALL: [ReviewStatus; 3] = [
        ReviewStatus::Pending,
        ReviewStatus::Approved,
        ReviewStatus::Flagged,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "Pending",
            ReviewStatus::Approved => "Approved",
            ReviewStatus::Flagged => "Flagged",
        }
    }

    /// Case-insensitive parse. Unknown values yield `None`.
    pub fn parse_status(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
    }

    pub fn is_final(&self) -> bool {
        !matches!(self, ReviewStatus::Pending)
    }

    pub fn can_transition_to(&self, next: ReviewStatus) -> bool {
        matches!(
            (self, next),
            (ReviewStatus::Pending, ReviewStatus::Approved)
                | (ReviewStatus::Pending, ReviewStatus::Flagged)
        )
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plant condition an engineer reports when submitting a log.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConditionStatus {
    Normal,
    NeedAttention,
    Critical,
}

impl ConditionStatus {
    pub const ALL: [ConditionStatus; 3] = [
        ConditionStatus::Normal,
        ConditionStatus::NeedAttention,
        ConditionStatus::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionStatus::Normal => "Normal",
            ConditionStatus::NeedAttention => "Need Attention",
            ConditionStatus::Critical => "Critical",
        }
    }

    /// Case-insensitive parse of the display label ("need attention" works).
    pub fn parse_condition(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|condition| condition.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for ConditionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Equipment state picked on the submission form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EquipmentStatus {
    Operational,
    MinorIssues,
    MajorIssues,
    Maintenance,
    Offline,
}

impl EquipmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentStatus::Operational => "Operational",
            EquipmentStatus::MinorIssues => "Minor Issues",
            EquipmentStatus::MajorIssues => "Major Issues",
            EquipmentStatus::Maintenance => "Maintenance",
            EquipmentStatus::Offline => "Offline",
        }
    }
}

// ---------------------------------------------------------------------------
// Domain Structs
// ---------------------------------------------------------------------------

/// A named reading recorded alongside a shift log (e.g. "Boiler pressure").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftParameter {
    pub name: String,
    pub value: String,
}

/// A single shift log entry authored by an engineer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub id: String,
    pub date: NaiveDateTime,
    pub shift: Shift,
    pub engineer: String,
    pub department: String,
    pub status: ReviewStatus,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Condition reported at submission, when the log came from the engineer form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<ConditionStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_status: Option<EquipmentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incident_details: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ShiftParameter>,
}

impl LogRecord {
    /// A pending record with no optional fields set.
    pub fn new(
        id: impl Into<String>,
        date: NaiveDateTime,
        shift: Shift,
        engineer: impl Into<String>,
        department: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            shift,
            engineer: engineer.into(),
            department: department.into(),
            status: ReviewStatus::Pending,
            summary: summary.into(),
            notes: None,
            condition: None,
            equipment_status: None,
            incident_details: None,
            parameters: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: ReviewStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_condition(mut self, condition: ConditionStatus) -> Self {
        self.condition = Some(condition);
        self
    }
}

/// A log handed to an engineer for follow-up. Does not affect review status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub log_id: String,
    pub engineer_id: String,
    pub assigned_at: NaiveDateTime,
}

/// Row in the engineer's "recent logs" list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentLog {
    pub id: u64,
    /// Calendar day formatted `yyyy-MM-dd`.
    pub date: String,
    pub department: String,
    pub shift: Shift,
    pub status: String,
}
