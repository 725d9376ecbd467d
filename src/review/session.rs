//! High-level facade used by the CLI.

use super::error::ReviewError;
use super::gateway::ReviewGateway;
use super::models::{AnalysisResult, HistoryRecord};
use super::sse::ServerEvent;
use super::stream::StreamEvent;

/// Counts collected while following an analysis stream to completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamSummary {
    /// Whether the server accepted the connection.
    pub opened: bool,
    /// Number of messages handed to the callback.
    pub messages: usize,
}

/// Runs review operations through a gateway.
pub struct ReviewSession<'client, Gateway>
where
    Gateway: ReviewGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> ReviewSession<'client, Gateway>
where
    Gateway: ReviewGateway,
{
    /// Create a new session using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Load the review history.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying gateway.
    pub async fn history(&self) -> Result<Vec<HistoryRecord>, ReviewError> {
        self.client.get_history().await
    }

    /// Load analysis and statistics for `title`.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying gateway.
    pub async fn analysis(&self, title: &str) -> Result<AnalysisResult, ReviewError> {
        self.client.analyze_and_stats(title).await
    }

    /// Follow the analysis stream for `title` until the server closes it.
    ///
    /// Each message is passed to `on_message`; returning an error from the
    /// callback closes the stream and propagates that error.
    ///
    /// # Errors
    ///
    /// Returns the first error delivered on the stream, or the first error
    /// returned by `on_message`.
    pub async fn follow_analysis<F>(
        &self,
        title: &str,
        mut on_message: F,
    ) -> Result<StreamSummary, ReviewError>
    where
        F: FnMut(&ServerEvent) -> Result<(), ReviewError>,
    {
        let mut stream = self.client.open_analysis_stream(title)?;
        let mut summary = StreamSummary::default();

        while let Some(event) = stream.next_event().await {
            match event {
                StreamEvent::Open => summary.opened = true,
                StreamEvent::Message(message) => {
                    if let Err(error) = on_message(&message) {
                        stream.close();
                        return Err(error);
                    }
                    summary.messages += 1;
                }
                StreamEvent::Error(error) => return Err(error),
                StreamEvent::Closed => break,
            }
        }

        Ok(summary)
    }
}
