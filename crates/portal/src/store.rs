//! In-memory log store owned by a single dashboard view.
//!
//! Filtering and statistics only borrow; `approve`, `flag`, `assign` and
//! `append` are the only paths that change a record or the collection.

use std::collections::HashSet;

use chrono::{Local, NaiveDateTime};
use shared_types::{AppError, Assignment, LogCriteria, LogRecord, LogStats, ReviewStatus};

use crate::aggregate;
use crate::filter::{self, FilterContext};

/// Result of a single-record mutation. Unknown ids are reported, not raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied,
    NotFound,
    /// The record already left `Pending`; its status is unchanged.
    AlreadyFinal(ReviewStatus),
}

impl MutationOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MutationOutcome::Applied)
    }
}

#[derive(Debug, Clone, Default)]
pub struct LogStore {
    records: Vec<LogRecord>,
    assignments: Vec<Assignment>,
}

impl LogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing records. Ids must be unique.
    pub fn from_records(records: Vec<LogRecord>) -> Result<Self, AppError> {
        {
            let mut seen = HashSet::with_capacity(records.len());
            if let Some(dup) = records.iter().find(|&r| !seen.insert(r.id.as_str())) {
                return Err(AppError::conflict(format!("Duplicate log id: {}", dup.id)));
            }
        }
        Ok(Self {
            records,
            assignments: Vec::new(),
        })
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&LogRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn assignments_for<'a>(&'a self, log_id: &'a str) -> impl Iterator<Item = &'a Assignment> + 'a {
        self.assignments.iter().filter(move |a| a.log_id == log_id)
    }

    /// Add a record at the end of the collection.
    pub fn append(&mut self, record: LogRecord) -> Result<(), AppError> {
        if self.get(&record.id).is_some() {
            return Err(AppError::conflict(format!("Duplicate log id: {}", record.id)));
        }
        tracing::debug!(id = %record.id, department = %record.department, "log appended");
        self.records.push(record);
        Ok(())
    }

    /// Filtered view in store order, evaluated against the given clock.
    pub fn view_at(&self, criteria: &LogCriteria, ctx: &FilterContext) -> Vec<&LogRecord> {
        filter::filter_logs(&self.records, criteria, ctx)
    }

    pub fn view(&self, criteria: &LogCriteria) -> Vec<&LogRecord> {
        self.view_at(criteria, &FilterContext::current())
    }

    pub fn stats(&self) -> LogStats {
        aggregate::summarize(&self.records)
    }

    pub fn stats_at(&self, criteria: &LogCriteria, ctx: &FilterContext) -> LogStats {
        aggregate::summarize(self.view_at(criteria, ctx))
    }

    #[tracing::instrument(skip(self))]
    pub fn approve(&mut self, id: &str) -> MutationOutcome {
        self.transition(id, ReviewStatus::Approved)
    }

    #[tracing::instrument(skip(self))]
    pub fn flag(&mut self, id: &str) -> MutationOutcome {
        self.transition(id, ReviewStatus::Flagged)
    }

    /// Record that `engineer_id` should follow up on log `id`.
    #[tracing::instrument(skip(self))]
    pub fn assign(&mut self, id: &str, engineer_id: &str) -> MutationOutcome {
        self.assign_at(id, engineer_id, Local::now().naive_local())
    }

    pub fn assign_at(&mut self, id: &str, engineer_id: &str, at: NaiveDateTime) -> MutationOutcome {
        if self.get(id).is_none() {
            tracing::debug!(id, "assign ignored, no such log");
            return MutationOutcome::NotFound;
        }
        self.assignments.push(Assignment {
            log_id: id.to_string(),
            engineer_id: engineer_id.to_string(),
            assigned_at: at,
        });
        tracing::info!(id, engineer_id, "log assigned");
        MutationOutcome::Applied
    }

    fn transition(&mut self, id: &str, next: ReviewStatus) -> MutationOutcome {
        let Some(record) = self.records.iter_mut().find(|r| r.id == id) else {
            tracing::debug!(id, "transition ignored, no such log");
            return MutationOutcome::NotFound;
        };
        if !record.status.can_transition_to(next) {
            tracing::debug!(id, current = %record.status, requested = %next, "transition ignored");
            return MutationOutcome::AlreadyFinal(record.status);
        }
        record.status = next;
        tracing::info!(id, status = %next, "log status changed");
        MutationOutcome::Applied
    }
}
