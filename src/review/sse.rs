//! Incremental decoder for the `text/event-stream` wire format.
//!
//! Bytes arrive in arbitrary chunks; the decoder buffers partial lines and
//! yields complete [`ServerEvent`]s as blank lines dispatch them. A trailing
//! event that is not terminated by a blank line before the body ends is
//! discarded.
//!
//! A single line and the data of a single event are each limited to
//! [`MAX_EVENT_BYTES`]. A line over the limit is dropped, and an event whose
//! data grows past it is dropped at its dispatching blank line.

use std::mem;
use std::time::Duration;

use tracing::warn;

const BOM: char = '\u{feff}';

/// Default limit for one line and for the data of one event.
pub const MAX_EVENT_BYTES: usize = 1024 * 1024;

/// Event type used when the server does not name one.
pub const DEFAULT_EVENT_TYPE: &str = "message";

/// One message dispatched by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerEvent {
    /// Event type (`message` unless the server sent an `event:` field).
    pub event: String,
    /// Data lines joined with `\n`.
    pub data: String,
    /// Last event id seen on the stream, if any.
    pub id: Option<String>,
    /// Reconnection delay announced alongside this event.
    pub retry: Option<Duration>,
}

/// Stateful event-stream parser.
#[derive(Debug)]
pub struct SseDecoder {
    limit: usize,
    line: Vec<u8>,
    line_overflow: bool,
    data_overflow: bool,
    after_cr: bool,
    started: bool,
    event_type: String,
    data: String,
    last_event_id: Option<String>,
    retry: Option<Duration>,
}

impl Default for SseDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl SseDecoder {
    /// Creates an empty decoder limited to [`MAX_EVENT_BYTES`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_limit(MAX_EVENT_BYTES)
    }

    /// Creates an empty decoder with a custom line and event data limit.
    #[must_use]
    pub const fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            line: Vec::new(),
            line_overflow: false,
            data_overflow: false,
            after_cr: false,
            started: false,
            event_type: String::new(),
            data: String::new(),
            last_event_id: None,
            retry: None,
        }
    }

    /// Last event id recorded by the stream.
    #[must_use]
    pub fn last_event_id(&self) -> Option<&str> {
        self.last_event_id.as_deref()
    }

    /// Feeds one chunk of the body and returns the events it completed.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<ServerEvent> {
        let mut events = Vec::new();

        for &byte in chunk {
            if mem::take(&mut self.after_cr) && byte == b'\n' {
                continue;
            }
            match byte {
                b'\n' => self.finish_line(&mut events),
                b'\r' => {
                    self.after_cr = true;
                    self.finish_line(&mut events);
                }
                _ => self.push_byte(byte),
            }
        }

        events
    }

    fn push_byte(&mut self, byte: u8) {
        if self.line_overflow {
            return;
        }
        if self.line.len() >= self.limit {
            warn!(limit = self.limit, "dropping oversized event-stream line");
            self.line_overflow = true;
            self.line = Vec::new();
            return;
        }
        self.line.push(byte);
    }

    fn finish_line(&mut self, events: &mut Vec<ServerEvent>) {
        let raw = mem::take(&mut self.line);
        if mem::take(&mut self.line_overflow) {
            self.started = true;
            return;
        }
        let decoded = String::from_utf8_lossy(&raw);
        let line = if mem::replace(&mut self.started, true) {
            decoded.as_ref()
        } else {
            decoded.strip_prefix(BOM).unwrap_or(&decoded)
        };

        if line.is_empty() {
            if let Some(event) = self.dispatch() {
                events.push(event);
            }
            return;
        }

        if line.starts_with(':') {
            return;
        }

        let (field, value) = match line.split_once(':') {
            Some((name, rest)) => (name, rest.strip_prefix(' ').unwrap_or(rest)),
            None => (line, ""),
        };
        self.apply_field(field, value);
    }

    fn apply_field(&mut self, field: &str, value: &str) {
        match field {
            "event" => value.clone_into(&mut self.event_type),
            "data" if !self.data_overflow => {
                if self.data.len() + value.len() >= self.limit {
                    warn!(limit = self.limit, "dropping oversized event-stream event");
                    self.data_overflow = true;
                    self.data = String::new();
                } else {
                    self.data.push_str(value);
                    self.data.push('\n');
                }
            }
            "id" if !value.contains('\0') => {
                self.last_event_id = (!value.is_empty()).then(|| value.to_owned());
            }
            "retry" if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) => {
                if let Ok(millis) = value.parse::<u64>() {
                    self.retry = Some(Duration::from_millis(millis));
                }
            }
            _ => {}
        }
    }

    fn dispatch(&mut self) -> Option<ServerEvent> {
        let event_type = mem::take(&mut self.event_type);
        let mut data = mem::take(&mut self.data);
        if mem::take(&mut self.data_overflow) || data.is_empty() {
            return None;
        }
        if data.ends_with('\n') {
            data.pop();
        }

        Some(ServerEvent {
            event: if event_type.is_empty() {
                DEFAULT_EVENT_TYPE.to_owned()
            } else {
                event_type
            },
            data,
            id: self.last_event_id.clone(),
            retry: self.retry.take(),
        })
    }
}
