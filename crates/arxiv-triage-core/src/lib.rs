use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod api;
pub mod config_file;
pub mod item;
pub mod list;
pub mod status;

// Re-export for convenience
pub use api::{ApiError, HttpApi, PapersApi};
pub use item::{ItemHandler, MAX_SUMMARY_CHARS, PaperItem, RelevanceBand, SummaryToggle, SummaryView};
pub use list::{LoadState, Notification, NotificationLevel, PaperList, Submission};
pub use status::{Decision, PaperStatus, Stats};

/// Default backend location, used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// A recently published paper as returned by the papers endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub summary: String,
    /// Precomputed relevance score, conceptually in [0, 1] but not enforced.
    pub relevance: f64,
}

/// Body of `GET /fetch_recent_papers`. A missing `papers` key means no papers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PapersResponse {
    #[serde(default)]
    pub papers: Vec<Paper>,
}

/// Body of `POST /add_to_notion`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddToNotionRequest {
    pub title: String,
    pub url: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriageError {
    #[error("no paper at index {0}")]
    NoSuchPaper(usize),
    #[error("paper {index} is already {status}")]
    AlreadyDecided { index: usize, status: PaperStatus },
    #[error("papers have not finished loading")]
    NotReady,
    #[error("paper list has been disposed")]
    Disposed,
}
