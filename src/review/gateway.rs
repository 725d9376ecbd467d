//! Trait seam between review consumers and the HTTP client.

use async_trait::async_trait;

use super::client::ReviewClient;
use super::error::ReviewError;
use super::models::{AnalysisResult, HistoryRecord};
use super::stream::AnalysisStream;

/// Gateway that can reach the review service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewGateway: Send + Sync {
    /// Fetch the review history.
    async fn get_history(&self) -> Result<Vec<HistoryRecord>, ReviewError>;

    /// Fetch combined analysis and statistics for one title.
    async fn analyze_and_stats(&self, title: &str) -> Result<AnalysisResult, ReviewError>;

    /// Open the live analysis stream for one title.
    fn open_analysis_stream(&self, title: &str) -> Result<AnalysisStream, ReviewError>;
}

#[async_trait]
impl ReviewGateway for ReviewClient {
    async fn get_history(&self) -> Result<Vec<HistoryRecord>, ReviewError> {
        Self::get_history(self).await
    }

    async fn analyze_and_stats(&self, title: &str) -> Result<AnalysisResult, ReviewError> {
        Self::analyze_and_stats(self, title).await
    }

    fn open_analysis_stream(&self, title: &str) -> Result<AnalysisStream, ReviewError> {
        Self::open_analysis_stream(self, title)
    }
}
