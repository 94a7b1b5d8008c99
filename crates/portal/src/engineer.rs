//! Engineer dashboard: log submission and the recent-logs list.

use chrono::{Local, NaiveDateTime};
use shared_types::{
    AppError, LogRecord, PortalConfig, RecentLog, ReviewStatus, SubmitLogRequest,
    PENDING_APPROVAL_LABEL,
};
use uuid::Uuid;

use crate::config;
use crate::store::LogStore;

#[derive(Debug, Clone, Default)]
pub struct EngineerDesk {
    engineer: String,
    store: LogStore,
    recent: Vec<RecentLog>,
    config: PortalConfig,
}

impl EngineerDesk {
    pub fn new(engineer: impl Into<String>) -> Self {
        Self {
            engineer: engineer.into(),
            config: config::portal_config().clone(),
            ..Self::default()
        }
    }

    /// Validate submissions against `config` instead of the loaded settings.
    pub fn with_config(mut self, config: PortalConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the recent-logs list, most recent first.
    pub fn with_recent(mut self, recent: Vec<RecentLog>) -> Self {
        self.recent = recent;
        self
    }

    pub fn engineer(&self) -> &str {
        &self.engineer
    }

    pub fn store(&self) -> &LogStore {
        &self.store
    }

    pub fn recent(&self) -> &[RecentLog] {
        &self.recent
    }

    pub fn submit(&mut self, request: SubmitLogRequest) -> Result<LogRecord, AppError> {
        self.submit_at(request, Local::now().naive_local())
    }

    /// Validate and record a new log. The review status always starts at
    /// `Pending`; the condition the engineer picked is kept separately.
    #[tracing::instrument(skip(self, request), fields(engineer = %self.engineer))]
    pub fn submit_at(
        &mut self,
        request: SubmitLogRequest,
        now: NaiveDateTime,
    ) -> Result<LogRecord, AppError> {
        request.validate_for(&self.config)?;

        let SubmitLogRequest {
            department,
            shift,
            status,
            equipment_status,
            operational_notes,
            safety_observations,
            incidents_reported,
            incident_details,
            parameters,
        } = request;

        // validate_for() guarantees the required selects are present
        let (Some(department), Some(shift)) = (department, shift) else {
            return Err(AppError::internal("validated submission is missing a required field"));
        };

        let record = LogRecord {
            id: Uuid::new_v4().to_string(),
            date: now,
            shift,
            engineer: self.engineer.clone(),
            department,
            status: ReviewStatus::Pending,
            summary: operational_notes,
            notes: safety_observations.filter(|s| !s.is_empty()),
            condition: status,
            equipment_status,
            incident_details: if incidents_reported {
                incident_details.filter(|s| !s.is_empty())
            } else {
                None
            },
            parameters,
        };

        self.store.append(record.clone())?;

        let row = RecentLog {
            id: self.recent.len() as u64 + 1,
            date: now.format("%Y-%m-%d").to_string(),
            department: record.department.clone(),
            shift: record.shift,
            status: PENDING_APPROVAL_LABEL.to_string(),
        };
        self.recent.insert(0, row);

        tracing::info!(id = %record.id, department = %record.department, "log entry submitted");
        Ok(record)
    }
}
