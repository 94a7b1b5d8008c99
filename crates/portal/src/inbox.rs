use shared_types::Notification;

/// Supervisor alert inbox.
#[derive(Debug, Clone, Default)]
pub struct NotificationInbox {
    notifications: Vec<Notification>,
}

impl NotificationInbox {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self { notifications }
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Alerts that offer an "assign" action.
    pub fn assignable(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter().filter(|n| n.kind.is_assignable())
    }

    /// Mark one alert read. Returns false for an unknown id.
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                true
            }
            None => false,
        }
    }

    /// Mark everything read and return how many alerts changed.
    pub fn mark_all_read(&mut self) -> usize {
        let mut changed = 0;
        for n in self.notifications.iter_mut().filter(|n| !n.read) {
            n.read = true;
            changed += 1;
        }
        tracing::debug!(changed, "notifications marked read");
        changed
    }
}
