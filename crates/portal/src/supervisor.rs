//! Supervisor dashboard: review queue, approvals, assignment, alerts.

use shared_types::{LogCriteria, LogFilterParams, LogRecord, LogStats, Notification};

use crate::config;
use crate::filter::FilterContext;
use crate::inbox::NotificationInbox;
use crate::store::{LogStore, MutationOutcome};

#[derive(Debug, Clone)]
pub struct SupervisorDesk {
    store: LogStore,
    criteria: LogCriteria,
    inbox: NotificationInbox,
    /// Log awaiting an engineer pick in the assignment dialog.
    assigning: Option<String>,
    window_days: i64,
}

impl SupervisorDesk {
    pub fn new(store: LogStore) -> Self {
        Self {
            store,
            criteria: LogCriteria::default(),
            inbox: NotificationInbox::default(),
            assigning: None,
            window_days: config::portal_config().recent_window_days,
        }
    }

    pub fn with_notifications(mut self, notifications: Vec<Notification>) -> Self {
        self.inbox = NotificationInbox::new(notifications);
        self
    }

    pub fn store(&self) -> &LogStore {
        &self.store
    }

    pub fn criteria(&self) -> &LogCriteria {
        &self.criteria
    }

    pub fn set_criteria(&mut self, criteria: LogCriteria) {
        tracing::debug!(?criteria, "supervisor criteria changed");
        self.criteria = criteria;
    }

    /// Apply raw widget values ("all" sentinels included).
    pub fn apply_params(&mut self, params: LogFilterParams) {
        self.set_criteria(params.into());
    }

    pub fn context(&self) -> FilterContext {
        FilterContext::current().with_window_days(self.window_days)
    }

    pub fn visible_at(&self, ctx: &FilterContext) -> Vec<&LogRecord> {
        self.store.view_at(&self.criteria, ctx)
    }

    pub fn visible(&self) -> Vec<&LogRecord> {
        self.visible_at(&self.context())
    }

    /// (matching, total) for the "Showing N of M entries" line.
    pub fn showing_at(&self, ctx: &FilterContext) -> (usize, usize) {
        (self.visible_at(ctx).len(), self.store.len())
    }

    pub fn showing(&self) -> (usize, usize) {
        self.showing_at(&self.context())
    }

    pub fn stats(&self) -> LogStats {
        self.store.stats()
    }

    pub fn approve(&mut self, id: &str) -> MutationOutcome {
        self.store.approve(id)
    }

    pub fn flag(&mut self, id: &str) -> MutationOutcome {
        self.store.flag(id)
    }

    /// Open the assignment dialog for `id`.
    pub fn begin_assignment(&mut self, id: impl Into<String>) {
        self.assigning = Some(id.into());
    }

    pub fn pending_assignment(&self) -> Option<&str> {
        self.assigning.as_deref()
    }

    pub fn cancel_assignment(&mut self) {
        self.assigning = None;
    }

    /// Hand the log in the open dialog to `engineer_id` and close the dialog.
    /// Without an open dialog nothing happens and `NotFound` is returned.
    pub fn complete_assignment(&mut self, engineer_id: &str) -> MutationOutcome {
        match self.assigning.take() {
            Some(log_id) => self.store.assign(&log_id, engineer_id),
            None => MutationOutcome::NotFound,
        }
    }

    pub fn inbox(&self) -> &NotificationInbox {
        &self.inbox
    }

    pub fn inbox_mut(&mut self) -> &mut NotificationInbox {
        &mut self.inbox
    }
}
