//! Per-paper state: summary expansion and the one-shot triage transition.

use crate::status::{Decision, PaperStatus};
use crate::{Paper, TriageError};

/// Summaries longer than this many characters are collapsed by default.
pub const MAX_SUMMARY_CHARS: usize = 250;

const ELLIPSIS: &str = "...";

/// Callbacks an item fires when the user decides on it.
///
/// `add_to_notion` is a side effect only; it never gates the transition.
pub trait ItemHandler {
    fn add_to_notion(&mut self, title: &str, url: &str);
    fn status_changed(&mut self, decision: Decision);
}

/// Toggle shown next to a long summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryToggle {
    ShowMore,
    Hide,
}

impl SummaryToggle {
    pub fn label(self) -> &'static str {
        match self {
            Self::ShowMore => "Show More",
            Self::Hide => "Hide",
        }
    }
}

/// What the summary area displays for the current expansion state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub text: String,
    pub toggle: Option<SummaryToggle>,
}

/// Relevance indicator band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelevanceBand {
    High,
    Medium,
    Low,
}

impl RelevanceBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.6 {
            Self::High
        } else if score >= 0.5 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// A single rendered paper and its local state.
#[derive(Debug, Clone)]
pub struct PaperItem {
    /// Position in the list; items are keyed by it.
    pub index: usize,
    pub paper: Paper,
    expanded: bool,
    status: PaperStatus,
}

impl PaperItem {
    pub fn new(index: usize, paper: Paper) -> Self {
        Self {
            index,
            paper,
            expanded: false,
            status: PaperStatus::Pending,
        }
    }

    pub fn status(&self) -> PaperStatus {
        self.status
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Whether the Add/Ignore actions are available.
    pub fn actions_enabled(&self) -> bool {
        self.status.is_pending()
    }

    pub fn is_truncatable(&self) -> bool {
        self.paper.summary.chars().count() > MAX_SUMMARY_CHARS
    }

    pub fn summary_view(&self) -> SummaryView {
        let summary = &self.paper.summary;
        if !self.is_truncatable() {
            return SummaryView {
                text: summary.clone(),
                toggle: None,
            };
        }
        if self.expanded {
            SummaryView {
                text: summary.clone(),
                toggle: Some(SummaryToggle::Hide),
            }
        } else {
            let mut text: String = summary.chars().take(MAX_SUMMARY_CHARS).collect();
            text.push_str(ELLIPSIS);
            SummaryView {
                text,
                toggle: Some(SummaryToggle::ShowMore),
            }
        }
    }

    /// Flip the expansion state. Short summaries have no toggle, so this is a no-op for them.
    pub fn toggle_summary(&mut self) {
        if self.is_truncatable() {
            self.expanded = !self.expanded;
        }
    }

    pub fn relevance_band(&self) -> RelevanceBand {
        RelevanceBand::from_score(self.paper.relevance)
    }

    pub fn relevance_label(&self) -> String {
        format!("{:.2}", self.paper.relevance)
    }

    /// Accept the paper: forward it to the notes service and mark it added.
    pub fn add(&mut self, handler: &mut dyn ItemHandler) -> Result<(), TriageError> {
        self.ensure_pending()?;
        handler.add_to_notion(&self.paper.title, &self.paper.url);
        self.status = PaperStatus::Added;
        handler.status_changed(Decision::Added);
        Ok(())
    }

    pub fn ignore(&mut self, handler: &mut dyn ItemHandler) -> Result<(), TriageError> {
        self.ensure_pending()?;
        self.status = PaperStatus::Ignored;
        handler.status_changed(Decision::Ignored);
        Ok(())
    }

    fn ensure_pending(&self) -> Result<(), TriageError> {
        if self.status.is_pending() {
            Ok(())
        } else {
            Err(TriageError::AlreadyDecided {
                index: self.index,
                status: self.status,
            })
        }
    }
}
