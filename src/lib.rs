//! Review client library crate.
//!
//! The library wraps reqwest to fetch review history, look up the analysis
//! and statistics for a review title, and follow the live analysis event
//! stream of a remote review service.

pub mod config;
pub mod review;

pub use config::{OperationMode, ReviewClientConfig};
pub use review::{
    AnalysisResult, AnalysisStream, ClientConfig, HistoryRecord, ReadyState, ReviewClient,
    ReviewError, ReviewGateway, ReviewSession, ServerEvent, StreamEvent, StreamSummary,
};
