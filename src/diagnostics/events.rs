// SPDX-License-Identifier: MPL-2.0
//! Alert lifecycle event types.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Something that happened to an alert queue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AlertEvent {
    /// A message was appended to the queue.
    Enqueued {
        key: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        severity: Option<String>,
        /// Queue length after the append.
        pending: usize,
    },
    /// The view asked for the visible message to close.
    CloseRequested {
        key: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
    /// A close request arrived while nothing was open.
    RedundantClose,
    /// The exit transition of the front message finished.
    Exited {
        key: u64,
        /// Queue length after the removal.
        remaining: usize,
    },
    /// An exit signal arrived with an empty queue.
    RedundantExit,
    /// The user triggered a message's undo action.
    UndoInvoked { key: u64 },
}

/// An [`AlertEvent`] stamped with the moment it was recorded.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock).
    pub timestamp: Instant,
    pub kind: AlertEvent,
}

impl DiagnosticEvent {
    /// Creates a new event with the current timestamp.
    #[must_use]
    pub fn new(kind: AlertEvent) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// Event form used in JSON exports: timestamps become milliseconds relative
/// to the start of collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SerializableEvent {
    pub offset_ms: u64,
    #[serde(flatten)]
    pub kind: AlertEvent,
}

impl SerializableEvent {
    #[allow(clippy::cast_possible_truncation)] // offsets in ms fit comfortably in u64
    #[must_use]
    pub fn new(event: &DiagnosticEvent, started_at: Instant) -> Self {
        Self {
            offset_ms: event.timestamp.saturating_duration_since(started_at).as_millis() as u64,
            kind: event.kind.clone(),
        }
    }
}
