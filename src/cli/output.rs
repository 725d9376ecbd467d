//! Output formatting utilities for CLI operations.
//!
//! Everything written to stdout is JSON so the output can be piped into other
//! tools: one record per line for history and stream messages, a pretty
//! printed document for a single analysis.

use std::io::{self, Write};

use review_client::{AnalysisResult, HistoryRecord, ReviewError, ServerEvent};
use serde::Serialize;
use serde_json::Value;

/// Writes each history record as one JSON line.
pub fn write_history<W: Write>(writer: &mut W, records: &[HistoryRecord]) -> Result<(), ReviewError> {
    for record in records {
        let line = serde_json::to_string(record).map_err(|e| encode_error(&e))?;
        writeln!(writer, "{line}").map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Writes an analysis result as pretty-printed JSON.
pub fn write_analysis<W: Write>(writer: &mut W, result: &AnalysisResult) -> Result<(), ReviewError> {
    let document = serde_json::to_string_pretty(result).map_err(|e| encode_error(&e))?;
    writeln!(writer, "{document}").map_err(|e| io_error(&e))
}

/// Stream message as printed by the CLI.
#[derive(Debug, Serialize)]
struct StreamLine<'a> {
    event: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    data: Value,
}

/// Writes one stream message as a JSON line and flushes it.
///
/// Message data that is itself JSON is embedded as JSON; anything else is
/// embedded as a string.
pub fn write_stream_message<W: Write>(
    writer: &mut W,
    message: &ServerEvent,
) -> Result<(), ReviewError> {
    let data = serde_json::from_str(&message.data)
        .unwrap_or_else(|_| Value::String(message.data.clone()));
    let line = StreamLine {
        event: &message.event,
        id: message.id.as_deref(),
        data,
    };
    let encoded = serde_json::to_string(&line).map_err(|e| encode_error(&e))?;
    writeln!(writer, "{encoded}").map_err(|e| io_error(&e))?;
    writer.flush().map_err(|e| io_error(&e))
}

/// Converts an I/O error to a [`ReviewError::Io`].
pub(crate) fn io_error(error: &io::Error) -> ReviewError {
    ReviewError::Io {
        message: error.to_string(),
    }
}

fn encode_error(error: &serde_json::Error) -> ReviewError {
    ReviewError::Io {
        message: format!("failed to encode output: {error}"),
    }
}
