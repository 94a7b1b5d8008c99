use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::log::DEPARTMENTS;
use crate::requests::MIN_OPERATIONAL_NOTES;

fn default_login_delay_ms() -> u64 {
    1500
}

fn default_min_operational_notes() -> usize {
    MIN_OPERATIONAL_NOTES
}

fn default_recent_window_days() -> i64 {
    7
}

fn default_page_size() -> usize {
    10
}

fn default_departments() -> Vec<String> {
    DEPARTMENTS.iter().map(|d| d.to_string()).collect()
}

/// Portal settings read from `portal.toml`.
///
/// Every field has a default so a missing or partial file still yields a
/// working portal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortalConfig {
    /// Simulated latency of the login call.
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,
    #[serde(default = "default_min_operational_notes")]
    pub min_operational_notes: usize,
    /// Width of the "this week" window, counted back from now.
    #[serde(default = "default_recent_window_days")]
    pub recent_window_days: i64,
    /// Rows shown in the compliance results table.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_departments")]
    pub departments: Vec<String>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: default_login_delay_ms(),
            min_operational_notes: default_min_operational_notes(),
            recent_window_days: default_recent_window_days(),
            page_size: default_page_size(),
            departments: default_departments(),
        }
    }
}

impl PortalConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn login_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.login_delay_ms)
    }

    /// Exact, case-sensitive membership in the configured department list.
    pub fn is_known_department(&self, department: &str) -> bool {
        self.departments.iter().any(|d| d == department)
    }
}
