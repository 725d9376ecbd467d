//! Client for the remote review API.
//!
//! [`ReviewClient`] forwards three calls to the review service: the history
//! listing, the per-title analysis lookup, and the live analysis event stream.
//! It performs no retries, caching, or response reshaping; payloads come back
//! as opaque JSON and failures surface as [`ReviewError`] carrying the
//! original transport error or the non-success status.

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod gateway;
pub mod models;
pub mod session;
pub mod sse;
pub mod stream;

pub use client::ReviewClient;
pub use config::{ClientConfig, DEFAULT_BASE_ADDRESS, DEFAULT_TIMEOUT};
pub use error::ReviewError;
pub use gateway::ReviewGateway;
pub use models::{AnalysisResult, HistoryRecord};
pub use session::{ReviewSession, StreamSummary};
pub use sse::{ServerEvent, SseDecoder};
pub use stream::{AnalysisStream, ReadyState, StreamEvent};

#[cfg(test)]
pub use gateway::MockReviewGateway;
