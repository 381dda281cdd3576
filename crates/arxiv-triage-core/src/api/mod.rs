//! The two backend collaborators: the papers endpoint and the notes endpoint.

pub mod http;
pub mod mock;

use std::future::Future;
use std::pin::Pin;

pub use reqwest::StatusCode;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::Paper;

pub use http::HttpApi;

/// Boxed future returned by [`PapersApi`] methods.
pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ApiError>> + Send + 'a>>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to fetch papers (HTTP {0})")]
    FetchPapers(StatusCode),
    #[error("Failed to add paper to Notion (HTTP {0})")]
    AddToNotion(StatusCode),
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Backend that serves recent papers and accepts papers for the notes service.
pub trait PapersApi: Send + Sync {
    /// `GET /fetch_recent_papers`. Non-2xx responses are errors.
    fn fetch_recent_papers(&self) -> ApiFuture<'_, Vec<Paper>>;

    /// `POST /add_to_notion`. Any 2xx is success; the body is not read.
    fn add_to_notion<'a>(&'a self, title: &'a str, url: &'a str) -> ApiFuture<'a, ()>;
}

/// Fetch papers unless `cancel` fires first. `None` means cancelled.
pub async fn fetch_papers_cancellable(
    api: &dyn PapersApi,
    cancel: &CancellationToken,
) -> Option<Result<Vec<Paper>, ApiError>> {
    tokio::select! {
        _ = cancel.cancelled() => {
            tracing::debug!("paper fetch cancelled");
            None
        }
        result = api.fetch_recent_papers() => Some(result),
    }
}

/// Submit a paper unless `cancel` fires first. `None` means cancelled.
pub async fn add_to_notion_cancellable(
    api: &dyn PapersApi,
    title: &str,
    url: &str,
    cancel: &CancellationToken,
) -> Option<Result<(), ApiError>> {
    tokio::select! {
        _ = cancel.cancelled() => {
            tracing::debug!(title, "submission cancelled");
            None
        }
        result = api.add_to_notion(title, url) => Some(result),
    }
}
