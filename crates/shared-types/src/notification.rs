use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Category of a supervisor alert.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Attention,
    Critical,
    Resolved,
    Pending,
}

impl NotificationKind {
    /// Attention and critical alerts can be handed to an engineer.
    pub fn is_assignable(&self) -> bool {
        matches!(self, NotificationKind::Attention | NotificationKind::Critical)
    }
}

/// An alert in the supervisor's inbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub timestamp: NaiveDateTime,
    #[serde(default)]
    pub read: bool,
    pub department: String,
}
