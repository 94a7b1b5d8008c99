use serde::{Deserialize, Serialize};

/// Portal role selected at login. Each role lands on its own dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Engineer,
    Supervisor,
    Compliance,
}

impl UserRole {
    pub fn parse_role(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "engineer" => Some(UserRole::Engineer),
            "supervisor" => Some(UserRole::Supervisor),
            "compliance" => Some(UserRole::Compliance),
            _ => None,
        }
    }

    /// Lowercase string, matching the login form values.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Engineer => "engineer",
            UserRole::Supervisor => "supervisor",
            UserRole::Compliance => "compliance",
        }
    }
}

/// The signed-in user of a portal session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortalUser {
    pub email: String,
    pub role: UserRole,
}
