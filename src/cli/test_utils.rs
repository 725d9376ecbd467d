//! Shared test utilities for CLI tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use review_client::{AnalysisResult, AnalysisStream, HistoryRecord, ReviewError, ReviewGateway};

/// A stub gateway that captures requested titles and returns preconfigured
/// responses. Each response is consumed by the first call that uses it.
#[derive(Clone, Default)]
pub struct StubGateway {
    /// Titles passed to title-based operations, in call order.
    pub captured: Arc<Mutex<Vec<String>>>,
    /// Response for [`ReviewGateway::get_history`].
    pub history: Arc<Mutex<Option<Result<Vec<HistoryRecord>, ReviewError>>>>,
    /// Response for [`ReviewGateway::analyze_and_stats`].
    pub analysis: Arc<Mutex<Option<Result<AnalysisResult, ReviewError>>>>,
    /// Stream returned by [`ReviewGateway::open_analysis_stream`].
    pub stream: Arc<Mutex<Option<AnalysisStream>>>,
}

impl StubGateway {
    #[must_use]
    pub fn with_history(response: Result<Vec<HistoryRecord>, ReviewError>) -> Self {
        let gateway = Self::default();
        gateway
            .history
            .lock()
            .expect("history mutex should be available")
            .replace(response);
        gateway
    }

    #[must_use]
    pub fn with_analysis(response: Result<AnalysisResult, ReviewError>) -> Self {
        let gateway = Self::default();
        gateway
            .analysis
            .lock()
            .expect("analysis mutex should be available")
            .replace(response);
        gateway
    }

    #[must_use]
    pub fn with_stream(stream: AnalysisStream) -> Self {
        let gateway = Self::default();
        gateway
            .stream
            .lock()
            .expect("stream mutex should be available")
            .replace(stream);
        gateway
    }

    #[must_use]
    pub fn captured_titles(&self) -> Vec<String> {
        self.captured
            .lock()
            .expect("captured mutex should be available")
            .clone()
    }

    fn capture(&self, title: &str) {
        self.captured
            .lock()
            .expect("captured mutex should be available")
            .push(title.to_owned());
    }
}

#[async_trait]
impl ReviewGateway for StubGateway {
    async fn get_history(&self) -> Result<Vec<HistoryRecord>, ReviewError> {
        self.history
            .lock()
            .expect("history mutex should be available")
            .take()
            .expect("history response should only be consumed once")
    }

    async fn analyze_and_stats(&self, title: &str) -> Result<AnalysisResult, ReviewError> {
        self.capture(title);
        self.analysis
            .lock()
            .expect("analysis mutex should be available")
            .take()
            .expect("analysis response should only be consumed once")
    }

    fn open_analysis_stream(&self, title: &str) -> Result<AnalysisStream, ReviewError> {
        self.capture(title);
        Ok(self
            .stream
            .lock()
            .expect("stream mutex should be available")
            .take()
            .expect("stream should only be opened once"))
    }
}
