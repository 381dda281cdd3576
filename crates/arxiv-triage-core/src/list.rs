//! The paper list: one-shot load state, items, and aggregate counters.

use std::fmt::Display;

use crate::item::{ItemHandler, PaperItem};
use crate::status::{Decision, Stats};
use crate::{Paper, TriageError};

/// Outcome of the initial load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

/// An accepted paper waiting to be forwarded to the notes service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
    /// Local confirmations that never raise a toast.
    Info,
}

/// A user-facing message raised after a submission completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }
}

/// State owned by the list view for one session.
#[derive(Debug, Clone)]
pub struct PaperList {
    state: LoadState,
    items: Vec<PaperItem>,
    stats: Stats,
    outbox: Vec<Submission>,
    disposed: bool,
}

impl Default for PaperList {
    fn default() -> Self {
        Self::new()
    }
}

/// Disjoint borrows of the list handed to an item while it transitions.
///
/// This is the only way status changes and accepted papers reach the list.
/// It is built by `item_with_handler`, which refuses once the list is disposed,
/// so neither callback can fire afterwards.
struct ListHandler<'a> {
    stats: &'a mut Stats,
    outbox: &'a mut Vec<Submission>,
}

impl ItemHandler for ListHandler<'_> {
    /// Queue an accepted paper for the notes service.
    fn add_to_notion(&mut self, title: &str, url: &str) {
        self.outbox.push(Submission {
            title: title.to_string(),
            url: url.to_string(),
        });
    }

    /// Count a paper leaving `pending`. Items call this exactly once each.
    fn status_changed(&mut self, decision: Decision) {
        self.stats.record(decision);
    }
}

impl PaperList {
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
            items: Vec::new(),
            stats: Stats::default(),
            outbox: Vec::new(),
            disposed: false,
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn items(&self) -> &[PaperItem] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&PaperItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn pending_count(&self) -> usize {
        self.stats.pending(self.items.len())
    }

    /// Tear the list down. Every later state update is ignored.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.outbox.clear();
    }

    /// Apply the result of the one-shot fetch. Returns false if it was ignored.
    pub fn finish_load<E: Display>(&mut self, result: Result<Vec<Paper>, E>) -> bool {
        if self.disposed {
            tracing::debug!("dropping paper load result after dispose");
            return false;
        }
        if self.state != LoadState::Loading {
            tracing::warn!("ignoring duplicate paper load result");
            return false;
        }
        match result {
            Ok(papers) => {
                tracing::info!(count = papers.len(), "papers loaded");
                self.items = papers
                    .into_iter()
                    .enumerate()
                    .map(|(i, paper)| PaperItem::new(i, paper))
                    .collect();
                self.state = LoadState::Ready;
            }
            Err(e) => {
                let message = e.to_string();
                tracing::warn!(error = %message, "failed to load papers");
                self.state = LoadState::Failed(message);
            }
        }
        true
    }

    /// Add the paper at `index`. The local status changes regardless of how the
    /// submission later turns out.
    pub fn add(&mut self, index: usize) -> Result<(), TriageError> {
        let (item, mut handler) = self.item_with_handler(index)?;
        item.add(&mut handler)
    }

    pub fn ignore(&mut self, index: usize) -> Result<(), TriageError> {
        let (item, mut handler) = self.item_with_handler(index)?;
        item.ignore(&mut handler)
    }

    pub fn toggle_summary(&mut self, index: usize) -> Result<(), TriageError> {
        if self.disposed {
            return Err(TriageError::Disposed);
        }
        let item = self
            .items
            .get_mut(index)
            .ok_or(TriageError::NoSuchPaper(index))?;
        item.toggle_summary();
        Ok(())
    }

    /// Drain submissions queued since the last call.
    pub fn take_submissions(&mut self) -> Vec<Submission> {
        std::mem::take(&mut self.outbox)
    }

    /// Turn a finished submission into the notification shown to the user.
    /// Failures are logged; nothing is rolled back.
    pub fn finish_submission<E: Display>(
        &mut self,
        submission: &Submission,
        result: Result<(), E>,
    ) -> Option<Notification> {
        if self.disposed {
            return None;
        }
        match result {
            Ok(()) => {
                tracing::info!(title = %submission.title, "paper added to notion");
                Some(Notification::success("Paper added to Notion!"))
            }
            Err(e) => {
                tracing::warn!(title = %submission.title, error = %e, "add to notion failed");
                Some(Notification::error(format!("Error: {}", e)))
            }
        }
    }

    fn item_with_handler(
        &mut self,
        index: usize,
    ) -> Result<(&mut PaperItem, ListHandler<'_>), TriageError> {
        if self.disposed {
            return Err(TriageError::Disposed);
        }
        if self.state != LoadState::Ready {
            return Err(TriageError::NotReady);
        }
        let item = self
            .items
            .get_mut(index)
            .ok_or(TriageError::NoSuchPaper(index))?;
        let handler = ListHandler {
            stats: &mut self.stats,
            outbox: &mut self.outbox,
        };
        Ok((item, handler))
    }
}
