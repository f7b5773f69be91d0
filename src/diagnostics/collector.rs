// SPDX-License-Identifier: MPL-2.0
//! Collector and handle for alert lifecycle events.

use std::collections::VecDeque;
use std::time::Instant;

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use serde::Serialize;

use crate::domain::diagnostics::BufferCapacity;

use super::events::{AlertEvent, DiagnosticEvent, SerializableEvent};

/// Handle for sending events to a [`DiagnosticsCollector`].
///
/// Cheap to clone. Sends never block; events are dropped when the channel is
/// full.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Records an event, dropping it if the channel is full.
    pub fn log(&self, kind: AlertEvent) {
        let _ = self.try_log(kind);
    }

    /// Records an event, reporting back when the channel is full.
    ///
    /// # Errors
    ///
    /// Returns `TrySendError::Full` if the channel buffer is full, or
    /// `TrySendError::Disconnected` if the collector was dropped.
    pub fn try_log(&self, kind: AlertEvent) -> Result<(), TrySendError<DiagnosticEvent>> {
        self.event_tx.try_send(DiagnosticEvent::new(kind))
    }
}

/// Drains events from its handles and keeps the most recent ones.
///
/// Once `capacity` events are held, each new event evicts the oldest.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    events: VecDeque<DiagnosticEvent>,
    capacity: usize,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    started_at: Instant,
}

/// Minimum channel capacity between handles and the collector.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

#[derive(Serialize)]
struct Report<'a> {
    collection_duration_ms: u64,
    event_count: usize,
    events: &'a [SerializableEvent],
}

impl DiagnosticsCollector {
    /// Creates a collector whose channel can hold a full buffer's worth of
    /// events between two calls to [`process_pending`](Self::process_pending).
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::with_channel_capacity(capacity, capacity.value().max(DEFAULT_CHANNEL_CAPACITY))
    }

    /// Creates a collector with an explicit channel size.
    #[must_use]
    pub fn with_channel_capacity(capacity: BufferCapacity, channel_capacity: usize) -> Self {
        let (event_tx, event_rx) = bounded(channel_capacity.max(1));
        Self {
            events: VecDeque::with_capacity(capacity.value()),
            capacity: capacity.value(),
            event_rx,
            event_tx,
            started_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every event waiting in the channel into the collector.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.record(event);
        }
    }

    fn record(&mut self, event: DiagnosticEvent) {
        if self.events.len() == self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Maximum number of events kept.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.events.iter()
    }

    /// Returns the collected event kinds, oldest first.
    #[must_use]
    pub fn kinds(&self) -> Vec<AlertEvent> {
        self.events.iter().map(|event| event.kind.clone()).collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Exports buffered events as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn export_json(&self) -> serde_json::Result<String> {
        let events: Vec<SerializableEvent> = self
            .events
            .iter()
            .map(|event| SerializableEvent::new(event, self.started_at))
            .collect();
        let report = Report {
            collection_duration_ms: self.started_at.elapsed().as_millis() as u64,
            event_count: events.len(),
            events: &events,
        };
        serde_json::to_string_pretty(&report)
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
