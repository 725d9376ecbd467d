//! Caller-owned handle for a live analysis event stream.
//!
//! Opening a stream returns immediately. A background task connects, decodes
//! the `text/event-stream` body, and forwards [`StreamEvent`]s over a bounded
//! channel. The task never reconnects: a failed or finished connection
//! delivers [`StreamEvent::Error`] (if any) followed by [`StreamEvent::Closed`].

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::{Stream, StreamExt};
use http::header::{ACCEPT, CACHE_CONTROL, CONTENT_TYPE};
use reqwest::Client;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};
use url::Url;

use super::client::ensure_success;
use super::error::ReviewError;
use super::sse::{ServerEvent, SseDecoder};

const EVENT_STREAM: &str = "text/event-stream";
const EVENT_BUFFER: usize = 64;

/// Something that happened on an analysis stream.
#[derive(Debug)]
pub enum StreamEvent {
    /// The server accepted the connection and started streaming.
    Open,
    /// The server dispatched a message.
    Message(ServerEvent),
    /// The connection failed; a [`StreamEvent::Closed`] follows.
    Error(ReviewError),
    /// The connection is finished. No further events are delivered.
    Closed,
}

/// Connection state of an [`AnalysisStream`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    /// The request is in flight.
    Connecting,
    /// The server is streaming events.
    Open,
    /// The connection ended or the handle was closed.
    Closed,
}

/// Live server-push connection for one review title.
///
/// Dropping the handle closes the connection.
#[derive(Debug)]
pub struct AnalysisStream {
    url: Url,
    events: mpsc::Receiver<StreamEvent>,
    state: Arc<watch::Sender<ReadyState>>,
    task: Option<JoinHandle<()>>,
}

impl AnalysisStream {
    /// Spawns the connection task on the current Tokio runtime.
    pub(super) fn open(http: Client, url: Url) -> Result<Self, ReviewError> {
        let runtime =
            tokio::runtime::Handle::try_current().map_err(|_| ReviewError::NoRuntime)?;
        let (sender, events) = mpsc::channel(EVENT_BUFFER);
        let state = Arc::new(watch::Sender::new(ReadyState::Connecting));
        let task = runtime.spawn(run_connection(
            http,
            url.clone(),
            sender,
            Arc::clone(&state),
        ));

        Ok(Self {
            url,
            events,
            state,
            task: Some(task),
        })
    }

    /// Builds a finished stream that replays `events`.
    #[cfg(any(test, feature = "test-support"))]
    #[must_use]
    pub fn from_events(url: Url, events: Vec<StreamEvent>) -> Self {
        let (sender, receiver) = mpsc::channel(events.len().max(1));
        for event in events {
            if sender.try_send(event).is_err() {
                break;
            }
        }

        Self {
            url,
            events: receiver,
            state: Arc::new(watch::Sender::new(ReadyState::Closed)),
            task: None,
        }
    }

    /// URL the stream connects to, with the title percent-encoded.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Current connection state.
    #[must_use]
    pub fn ready_state(&self) -> ReadyState {
        *self.state.borrow()
    }

    /// Waits for the next event; `None` once the stream is drained.
    pub async fn next_event(&mut self) -> Option<StreamEvent> {
        self.events.recv().await
    }

    /// Closes the connection. Events already buffered can still be read.
    pub fn close(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.events.close();
        self.state.send_replace(ReadyState::Closed);
        debug!(url = %self.url, "analysis stream closed by caller");
    }
}

impl Stream for AnalysisStream {
    type Item = StreamEvent;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().events.poll_recv(cx)
    }
}

impl Drop for AnalysisStream {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn run_connection(
    http: Client,
    url: Url,
    sender: mpsc::Sender<StreamEvent>,
    state: Arc<watch::Sender<ReadyState>>,
) {
    if let Err(error) = pump_events(&http, &url, &sender, &state).await {
        warn!(%url, "analysis stream failed: {error}");
        if sender.send(StreamEvent::Error(error)).await.is_err() {
            state.send_replace(ReadyState::Closed);
            return;
        }
    }

    state.send_replace(ReadyState::Closed);
    if sender.send(StreamEvent::Closed).await.is_err() {
        trace!(%url, "analysis stream receiver dropped before close");
    }
}

async fn pump_events(
    http: &Client,
    url: &Url,
    sender: &mpsc::Sender<StreamEvent>,
    state: &watch::Sender<ReadyState>,
) -> Result<(), ReviewError> {
    debug!(%url, "opening analysis stream");
    let response = http
        .get(url.clone())
        .header(ACCEPT, EVENT_STREAM)
        .header(CACHE_CONTROL, "no-cache")
        .send()
        .await?;
    let accepted = ensure_success(response).await?;

    let content_type = accepted
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("(none)");
    if !is_event_stream(content_type) {
        return Err(ReviewError::InvalidContentType {
            content_type: content_type.to_owned(),
        });
    }

    state.send_replace(ReadyState::Open);
    if sender.send(StreamEvent::Open).await.is_err() {
        return Ok(());
    }

    let mut decoder = SseDecoder::new();
    let mut body = accepted.bytes_stream();
    while let Some(chunk) = body.next().await {
        let bytes = chunk?;
        for event in decoder.feed(&bytes) {
            trace!(%url, event = %event.event, "analysis stream message");
            if sender.send(StreamEvent::Message(event)).await.is_err() {
                return Ok(());
            }
        }
    }

    debug!(%url, "analysis stream ended by server");
    Ok(())
}

fn is_event_stream(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(EVENT_STREAM))
}

#[cfg(test)]
#[path = "stream_tests.rs"]
mod tests;
