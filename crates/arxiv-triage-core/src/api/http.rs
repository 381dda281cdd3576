use std::time::Duration;

use reqwest::Url;

use super::{ApiError, ApiFuture, PapersApi};
use crate::{AddToNotionRequest, Paper, PapersResponse};

/// reqwest-backed client for the papers/notes backend.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpApi {
    /// Build a client for `base_url` (e.g. `http://127.0.0.1:8000`).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let parsed =
            Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl(format!(
                "{base_url}: unsupported scheme {}",
                parsed.scheme()
            )));
        }
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

impl PapersApi for HttpApi {
    fn fetch_recent_papers(&self) -> ApiFuture<'_, Vec<Paper>> {
        Box::pin(async move {
            let url = self.endpoint("fetch_recent_papers");
            tracing::debug!(%url, "fetching papers");

            let resp = self
                .client
                .get(&url)
                .timeout(self.timeout)
                .send()
                .await?;

            if !resp.status().is_success() {
                return Err(ApiError::FetchPapers(resp.status()));
            }

            let body: PapersResponse = resp.json().await?;
            Ok(body.papers)
        })
    }

    fn add_to_notion<'a>(&'a self, title: &'a str, url: &'a str) -> ApiFuture<'a, ()> {
        Box::pin(async move {
            let endpoint = self.endpoint("add_to_notion");
            tracing::debug!(%endpoint, title, "submitting paper");

            let body = AddToNotionRequest {
                title: title.to_string(),
                url: url.to_string(),
            };
            let resp = self
                .client
                .post(&endpoint)
                .timeout(self.timeout)
                .json(&body)
                .send()
                .await?;

            if !resp.status().is_success() {
                return Err(ApiError::AddToNotion(resp.status()));
            }
            Ok(())
        })
    }
}
