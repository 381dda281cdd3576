use std::collections::VecDeque;
use std::time::Duration;

use arxiv_triage_core::{Notification, NotificationLevel};
use tokio::time::Instant;

/// How many notifications the activity panel keeps.
const HISTORY_CAP: usize = 50;

/// How long a toast stays up unless dismissed first.
pub const TOAST_TIMEOUT: Duration = Duration::from_secs(5);

/// A notification and when it arrived.
#[derive(Debug, Clone)]
pub struct NotificationEntry {
    pub notification: Notification,
    pub raised: Instant,
}

/// Toast popup plus the history shown in the activity panel.
#[derive(Debug, Clone)]
pub struct NotificationState {
    pub history: VecDeque<NotificationEntry>,
    pub toast: Option<NotificationEntry>,
}

impl Default for NotificationState {
    fn default() -> Self {
        Self {
            history: VecDeque::with_capacity(HISTORY_CAP),
            toast: None,
        }
    }
}

impl NotificationState {
    /// Record a notification. Success and error outcomes also raise a toast.
    pub fn push(&mut self, notification: Notification) {
        self.push_at(notification, Instant::now());
    }

    pub fn push_at(&mut self, notification: Notification, raised: Instant) {
        let entry = NotificationEntry {
            notification,
            raised,
        };
        if entry.notification.level != NotificationLevel::Info {
            self.toast = Some(entry.clone());
        }
        if self.history.len() >= HISTORY_CAP {
            self.history.pop_back();
        }
        self.history.push_front(entry);
    }

    pub fn dismiss(&mut self) -> bool {
        self.toast.take().is_some()
    }

    /// Drop the toast once it has been up for [`TOAST_TIMEOUT`].
    pub fn expire(&mut self, now: Instant) {
        if let Some(toast) = &self.toast {
            if now.saturating_duration_since(toast.raised) >= TOAST_TIMEOUT {
                self.toast = None;
            }
        }
    }
}
