//! HTTP client for the review service.

use std::sync::Arc;

use http::header::{ACCEPT, CONTENT_TYPE, HeaderMap};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use super::config::ClientConfig;
use super::endpoints::{analysis_url, history_url, review_url};
use super::error::ReviewError;
use super::models::{AnalysisResult, HistoryRecord};
use super::stream::AnalysisStream;

const ERROR_BODY_LIMIT: usize = 160;

/// Pass-through client for the review API.
///
/// Every request is independent: no retries, no caching, and no state beyond
/// the configuration the client was built with. Cloning is cheap and clones
/// share that configuration.
#[derive(Debug, Clone)]
pub struct ReviewClient {
    config: Arc<ClientConfig>,
    http: Client,
    stream_http: Client,
}

impl ReviewClient {
    /// Builds a client from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Configuration`] when the HTTP client cannot be
    /// constructed.
    pub fn new(config: ClientConfig) -> Result<Self, ReviewError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .default_headers(config.default_headers().clone())
            .build()
            .map_err(|error| ReviewError::Configuration {
                message: format!("failed to configure review HTTP client: {error}"),
            })?;

        // Streams stay open indefinitely, so they get no total timeout.
        let stream_http = Client::builder()
            .default_headers(stream_headers(config.default_headers()))
            .build()
            .map_err(|error| ReviewError::Configuration {
                message: format!("failed to configure review stream client: {error}"),
            })?;

        Ok(Self {
            config: Arc::new(config),
            http,
            stream_http,
        })
    }

    /// Builds a client for the local review service with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Configuration`] when the HTTP client cannot be
    /// constructed.
    pub fn with_defaults() -> Result<Self, ReviewError> {
        Self::new(ClientConfig::local()?)
    }

    /// Configuration shared by every call on this client.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches the review history.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Transport`] on network failure or timeout and
    /// [`ReviewError::Status`] on a non-success response.
    pub async fn get_history(&self) -> Result<Vec<HistoryRecord>, ReviewError> {
        let url = history_url(self.config.base_address())?;
        self.get_json(url, "review history").await
    }

    /// Fetches combined analysis and statistics for `title`.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Transport`] on network failure or timeout and
    /// [`ReviewError::Status`] on a non-success response.
    pub async fn analyze_and_stats(&self, title: &str) -> Result<AnalysisResult, ReviewError> {
        let url = review_url(self.config.base_address(), title)?;
        self.get_json(url, "review analysis").await
    }

    /// Opens the live analysis stream for `title`.
    ///
    /// Returns as soon as the connection task is spawned; connection progress,
    /// messages, and failures arrive on the returned handle.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::NoRuntime`] when called outside a Tokio runtime.
    pub fn open_analysis_stream(&self, title: &str) -> Result<AnalysisStream, ReviewError> {
        let url = analysis_url(self.config.base_address(), title)?;
        AnalysisStream::open(self.stream_http.clone(), url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        operation: &str,
    ) -> Result<T, ReviewError> {
        debug!(%url, "requesting {operation}");
        let response = self.http.get(url).send().await.map_err(|error| {
            warn!("{operation} request failed: {error}");
            ReviewError::Transport(error)
        })?;
        let accepted = ensure_success(response).await?;
        Ok(accepted.json::<T>().await?)
    }
}

/// Converts a non-success response into [`ReviewError::Status`].
pub(super) async fn ensure_success(response: Response) -> Result<Response, ReviewError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.map_or_else(
        |_| "(failed to read error response body)".to_owned(),
        |content| truncate_for_message(content.as_str(), ERROR_BODY_LIMIT),
    );
    warn!("review service returned {status}");
    Err(ReviewError::Status { status, body })
}

fn stream_headers(defaults: &HeaderMap) -> HeaderMap {
    let mut headers = defaults.clone();
    headers.remove(CONTENT_TYPE);
    headers.remove(ACCEPT);
    headers
}

fn truncate_for_message(message: &str, max_chars: usize) -> String {
    let mut output = String::new();
    let mut chars = message.chars();

    for _ in 0..max_chars {
        let Some(character) = chars.next() else {
            return output;
        };
        output.push(character);
    }

    if chars.next().is_some() {
        output.push_str("...");
    }

    output
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
