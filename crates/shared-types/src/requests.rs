use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use std::collections::HashMap;
#[cfg(feature = "validation")]
use validator::Validate;

#[cfg(feature = "validation")]
use crate::config::PortalConfig;
#[cfg(feature = "validation")]
use crate::error::AppError;
use crate::log::{ConditionStatus, EquipmentStatus, Shift, ShiftParameter};
use crate::models::UserRole;

/// Default minimum length of the operational notes on a submitted log.
pub const MIN_OPERATIONAL_NOTES: usize = 10;

/// Minimum password length accepted by the login form.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Request DTO for the engineer's "new log entry" form.
///
/// Selects start empty, so every required select is an `Option` and a
/// missing choice is reported against its field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct SubmitLogRequest {
    #[cfg_attr(
        feature = "validation",
        validate(
            required(message = "Please select a department"),
            length(min = 1, message = "Please select a department")
        )
    )]
    pub department: Option<String>,
    #[cfg_attr(
        feature = "validation",
        validate(required(message = "Please select a shift"))
    )]
    pub shift: Option<Shift>,
    /// Condition reported by the engineer. Never becomes the review status.
    #[cfg_attr(
        feature = "validation",
        validate(required(message = "Please select a status"))
    )]
    pub status: Option<ConditionStatus>,
    #[cfg_attr(
        feature = "validation",
        validate(required(message = "Equipment status is required"))
    )]
    pub equipment_status: Option<EquipmentStatus>,
    /// Length is checked against the configured minimum in [`SubmitLogRequest::validate_for`].
    pub operational_notes: String,
    #[serde(default)]
    pub safety_observations: Option<String>,
    #[serde(default)]
    pub incidents_reported: bool,
    #[serde(default)]
    pub incident_details: Option<String>,
    #[serde(default)]
    pub parameters: Vec<ShiftParameter>,
}

/// Request DTO for the login form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Please enter a valid email address"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 6, message = "Password must be at least 6 characters"))
    )]
    pub password: String,
    #[cfg_attr(
        feature = "validation",
        validate(required(message = "Please select a role"))
    )]
    pub role: Option<UserRole>,
}

impl Default for LoginRequest {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            role: Some(UserRole::Engineer),
        }
    }
}

#[cfg(feature = "validation")]
impl SubmitLogRequest {
    /// Form validation plus the site rules from `config`: the minimum
    /// length of the operational notes and the department list.
    ///
    /// Every failing field is reported, one message each.
    pub fn validate_for(&self, config: &PortalConfig) -> Result<(), AppError> {
        let mut field_errors: HashMap<String, String> = match self.validate() {
            Ok(()) => HashMap::new(),
            Err(errors) => AppError::from(errors).field_errors,
        };

        let min_notes = config.min_operational_notes;
        if self.operational_notes.chars().count() < min_notes {
            field_errors
                .entry("operational_notes".to_string())
                .or_insert_with(|| {
                    format!("Operational notes should be at least {min_notes} characters")
                });
        }

        if let Some(department) = self.department.as_deref().filter(|d| !d.is_empty()) {
            if !config.is_known_department(department) {
                field_errors
                    .entry("department".to_string())
                    .or_insert_with(|| "Please select a department".to_string());
            }
        }

        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(
                "Please correct the highlighted fields",
                field_errors,
            ))
        }
    }
}
