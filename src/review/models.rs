//! Payloads returned by the review service.
//!
//! The service owns the response shapes, so both payloads are carried as
//! opaque JSON and handed back to callers verbatim.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of the review history listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryRecord(Value);

impl HistoryRecord {
    /// Wraps a raw JSON value.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// Borrow the raw JSON value.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume the record and return the raw JSON value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }
}

/// Combined analysis and statistics for a single review title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisResult(Value);

impl AnalysisResult {
    /// Wraps a raw JSON value.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// Borrow the raw JSON value.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume the result and return the raw JSON value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }
}
