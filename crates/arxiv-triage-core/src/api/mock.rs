//! Mock backend for testing.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use reqwest::StatusCode;

use super::{ApiError, ApiFuture, PapersApi};
use crate::Paper;

/// A configurable mock response for [`MockApi`].
#[derive(Clone, Debug)]
pub enum MockResponse {
    /// Serve these papers. Treated as plain success by `add_to_notion`.
    Papers(Vec<Paper>),
    /// Succeed with an empty body.
    Accepted,
    /// Simulate a non-2xx response.
    Status(StatusCode),
}

/// A hand-rolled mock implementing [`PapersApi`] for tests.
///
/// Both endpoints share one response unless [`with_submit`](MockApi::with_submit)
/// overrides the notes endpoint. Calls are counted and submissions recorded.
pub struct MockApi {
    fetch: MockResponse,
    submit: MockResponse,
    delay: Option<Duration>,
    fetch_count: AtomicUsize,
    submitted: Mutex<Vec<(String, String)>>,
}

impl MockApi {
    pub fn new(response: MockResponse) -> Self {
        Self {
            submit: response.clone(),
            fetch: response,
            delay: None,
            fetch_count: AtomicUsize::new(0),
            submitted: Mutex::new(Vec::new()),
        }
    }

    /// Override the response of the notes endpoint.
    pub fn with_submit(mut self, response: MockResponse) -> Self {
        self.submit = response;
        self
    }

    /// Set simulated network latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }

    /// `(title, url)` pairs received by `add_to_notion`, in call order.
    pub fn submitted(&self) -> Vec<(String, String)> {
        self.submitted
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }

    async fn wait(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

impl PapersApi for MockApi {
    fn fetch_recent_papers(&self) -> ApiFuture<'_, Vec<Paper>> {
        Box::pin(async move {
            self.fetch_count.fetch_add(1, Ordering::SeqCst);
            self.wait().await;
            match &self.fetch {
                MockResponse::Papers(papers) => Ok(papers.clone()),
                MockResponse::Accepted => Ok(Vec::new()),
                MockResponse::Status(code) => Err(ApiError::FetchPapers(*code)),
            }
        })
    }

    fn add_to_notion<'a>(&'a self, title: &'a str, url: &'a str) -> ApiFuture<'a, ()> {
        Box::pin(async move {
            if let Ok(mut submitted) = self.submitted.lock() {
                submitted.push((title.to_string(), url.to_string()));
            }
            self.wait().await;
            match &self.submit {
                MockResponse::Papers(_) | MockResponse::Accepted => Ok(()),
                MockResponse::Status(code) => Err(ApiError::AddToNotion(*code)),
            }
        })
    }
}
