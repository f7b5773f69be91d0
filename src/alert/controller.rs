// SPDX-License-Identifier: MPL-2.0
//! Alert queue and visibility state machine.
//!
//! The `Controller` keeps pending alerts in arrival order and a single
//! `is_open` flag. Closing is two-phase: [`Controller::request_close`] only
//! hides the front alert, and [`Controller::on_exited`] removes it once the
//! view has finished its exit transition. The front alert therefore stays
//! readable while it animates out.

use super::message::{AlertMessage, QueuedAlert};
use crate::diagnostics::{AlertEvent, DiagnosticsHandle};
use crate::domain::alert::{AlertKey, Phase};
use std::collections::VecDeque;

/// Owned copy of a controller's observable state.
#[derive(Debug, Clone, Default)]
pub struct AlertState {
    pub is_open: bool,
    pub current: Option<QueuedAlert>,
    pub pending_count: usize,
    pub queue: Vec<QueuedAlert>,
}

impl AlertState {
    #[must_use]
    pub fn phase(&self) -> Phase {
        Phase::from_state(self.is_open, self.pending_count)
    }
}

/// Owns the queue of pending alerts and whether the front one is visible.
#[derive(Debug, Default)]
pub struct Controller {
    queue: VecDeque<QueuedAlert>,
    is_open: bool,
    next_key: u64,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Controller {
    /// Creates an idle controller with an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the diagnostics handle used to record lifecycle events.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Appends a message and makes the queue visible.
    ///
    /// `is_open` is set even when it already is, so a stale close from the
    /// view cannot leave a non-empty queue hidden. If the front alert is
    /// mid-exit, it remains the front alert; the view still owes an
    /// [`on_exited`](Self::on_exited) for it.
    pub fn add(&mut self, message: AlertMessage) -> AlertKey {
        let key = AlertKey::new(self.next_key);
        self.next_key += 1;

        let severity = message.severity();
        self.queue.push_back(QueuedAlert::new(key, message));
        self.is_open = true;

        tracing::debug!(%key, pending = self.queue.len(), "alert enqueued");
        self.record(AlertEvent::Enqueued {
            key: key.value(),
            severity: severity.map(|s| s.as_str().to_string()),
            pending: self.queue.len(),
        });
        key
    }

    /// Hides the front alert without removing it.
    ///
    /// Calling this while already closed has no effect.
    pub fn request_close(&mut self) {
        self.request_close_with_reason(None);
    }

    pub(crate) fn request_close_with_reason(&mut self, reason: Option<&str>) {
        if !self.is_open {
            tracing::trace!("close requested while already closed");
            self.record(AlertEvent::RedundantClose);
            return;
        }
        self.is_open = false;

        if let Some(front) = self.queue.front() {
            let key = front.key();
            tracing::debug!(%key, reason, "alert closing");
            self.record(AlertEvent::CloseRequested {
                key: key.value(),
                reason: reason.map(str::to_string),
            });
        }
    }

    /// Removes the front alert once its exit transition has finished.
    ///
    /// If more alerts are queued the next one becomes visible immediately.
    /// With an empty queue this is a no-op and returns `None`.
    pub fn on_exited(&mut self) -> Option<QueuedAlert> {
        let Some(removed) = self.queue.pop_front() else {
            tracing::warn!("exit signal received with an empty alert queue");
            self.record(AlertEvent::RedundantExit);
            return None;
        };

        self.is_open = !self.queue.is_empty();

        tracing::debug!(
            key = %removed.key(),
            remaining = self.queue.len(),
            "alert exited"
        );
        self.record(AlertEvent::Exited {
            key: removed.key().value(),
            remaining: self.queue.len(),
        });
        Some(removed)
    }

    /// Records that the current alert's undo action ran.
    pub(crate) fn note_undo(&self, key: AlertKey) {
        tracing::debug!(%key, "alert undo invoked");
        self.record(AlertEvent::UndoInvoked { key: key.value() });
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// The front alert, visible or exiting.
    #[must_use]
    pub fn current(&self) -> Option<&QueuedAlert> {
        self.queue.front()
    }

    /// Number of alerts in the queue, including the current one.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Every queued alert in display order.
    pub fn queue(&self) -> impl Iterator<Item = &QueuedAlert> {
        self.queue.iter()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        Phase::from_state(self.is_open, self.queue.len())
    }

    #[must_use]
    pub fn snapshot(&self) -> AlertState {
        AlertState {
            is_open: self.is_open,
            current: self.queue.front().cloned(),
            pending_count: self.queue.len(),
            queue: self.queue.iter().cloned().collect(),
        }
    }

    fn record(&self, event: AlertEvent) {
        if let Some(handle) = &self.diagnostics {
            handle.log(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticsCollector;
    use std::cell::Cell;
    use std::rc::Rc;

    fn bodies(controller: &Controller) -> Vec<String> {
        controller.queue().map(|a| a.body().to_string()).collect()
    }

    #[test]
    fn new_controller_is_idle() {
        let controller = Controller::new();
        assert!(!controller.is_open());
        assert!(controller.current().is_none());
        assert_eq!(controller.pending_count(), 0);
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[test]
    fn add_to_idle_controller_shows_message() {
        let mut controller = Controller::new();
        controller.add(AlertMessage::new("hello"));

        assert!(controller.is_open());
        assert_eq!(controller.current().map(QueuedAlert::body), Some("hello"));
        assert_eq!(controller.phase(), Phase::Showing);
    }

    #[test]
    fn add_while_showing_queues_behind_current() {
        let mut controller = Controller::new();
        controller.add(AlertMessage::new("test1"));
        controller.add(AlertMessage::new("test2"));
        controller.add(AlertMessage::new("test3"));

        assert_eq!(controller.current().map(QueuedAlert::body), Some("test1"));
        assert_eq!(controller.pending_count(), 3);
        assert!(controller.is_open());
        assert_eq!(bodies(&controller), vec!["test1", "test2", "test3"]);
    }

    #[test]
    fn request_close_keeps_front_message() {
        let mut controller = Controller::new();
        controller.add(AlertMessage::new("test1"));
        controller.add(AlertMessage::new("test2"));

        controller.request_close();

        assert!(!controller.is_open());
        assert_eq!(controller.current().map(QueuedAlert::body), Some("test1"));
        assert_eq!(controller.phase(), Phase::Closing);
    }

    #[test]
    fn request_close_is_idempotent() {
        let mut controller = Controller::new();
        controller.add(AlertMessage::new("only"));
        controller.request_close();
        controller.request_close();

        assert!(!controller.is_open());
        assert_eq!(controller.pending_count(), 1);
    }

    #[test]
    fn on_exited_chains_to_next_message() {
        let mut controller = Controller::new();
        controller.add(AlertMessage::new("test1"));
        controller.add(AlertMessage::new("test2"));
        controller.add(AlertMessage::new("test3"));

        controller.request_close();
        let removed = controller.on_exited();

        assert_eq!(removed.map(|a| a.body().to_string()).as_deref(), Some("test1"));
        assert!(controller.is_open());
        assert_eq!(controller.current().map(QueuedAlert::body), Some("test2"));
        assert_eq!(controller.pending_count(), 2);
    }

    #[test]
    fn draining_queue_returns_to_idle() {
        let mut controller = Controller::new();
        for body in ["test1", "test2", "test3"] {
            controller.add(AlertMessage::new(body));
        }

        let mut shown = Vec::new();
        while let Some(current) = controller.current() {
            shown.push(current.body().to_string());
            controller.request_close();
            controller.on_exited();
        }

        assert_eq!(shown, vec!["test1", "test2", "test3"]);
        assert_eq!(controller.pending_count(), 0);
        assert!(!controller.is_open());
        assert!(controller.current().is_none());
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[test]
    fn on_exited_with_empty_queue_is_noop() {
        let mut controller = Controller::new();
        assert!(controller.on_exited().is_none());
        assert!(!controller.is_open());
        assert_eq!(controller.pending_count(), 0);
    }

    #[test]
    fn add_while_closing_stays_behind_exiting_message() {
        let mut controller = Controller::new();
        controller.add(AlertMessage::new("leaving"));
        controller.request_close();
        assert_eq!(controller.phase(), Phase::Closing);

        controller.add(AlertMessage::new("next"));

        // Adding re-opens the view; the exiting message keeps the front slot.
        assert!(controller.is_open());
        assert_eq!(controller.phase(), Phase::Showing);
        assert_eq!(controller.current().map(QueuedAlert::body), Some("leaving"));
        assert_eq!(controller.pending_count(), 2);

        controller.on_exited();
        assert!(controller.is_open());
        assert_eq!(controller.current().map(QueuedAlert::body), Some("next"));
    }

    #[test]
    fn keys_strictly_increase_for_back_to_back_adds() {
        let mut controller = Controller::new();
        let keys: Vec<AlertKey> = (0..100)
            .map(|i| controller.add(AlertMessage::new(format!("m{i}"))))
            .collect();

        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
        let queued: Vec<AlertKey> = controller.queue().map(QueuedAlert::key).collect();
        assert_eq!(queued, keys);
    }

    #[test]
    fn keys_are_not_reused_after_exit() {
        let mut controller = Controller::new();
        let first = controller.add(AlertMessage::new("a"));
        controller.request_close();
        controller.on_exited();
        let second = controller.add(AlertMessage::new("b"));
        assert_ne!(first, second);
    }

    #[test]
    fn undo_action_survives_until_exit() {
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let mut controller = Controller::new();
        controller.add(AlertMessage::success("deleted").with_undo(move || {
            counter.set(counter.get() + 1);
        }));

        controller.request_close();
        let current = controller.current().expect("message still present");
        current.undo().expect("undo should be exposed").invoke();
        assert_eq!(hits.get(), 1);

        controller.on_exited();
        assert!(controller.current().is_none());
    }

    #[test]
    fn snapshot_matches_live_state() {
        let mut controller = Controller::new();
        controller.add(AlertMessage::info("a"));
        controller.add(AlertMessage::new("b"));
        controller.request_close();

        let state = controller.snapshot();
        assert!(!state.is_open);
        assert_eq!(state.pending_count, 2);
        assert_eq!(state.current.as_ref().map(QueuedAlert::body), Some("a"));
        assert_eq!(state.queue.len(), 2);
        assert_eq!(state.phase(), Phase::Closing);
    }

    #[test]
    fn diagnostics_record_lifecycle() {
        let mut collector = DiagnosticsCollector::default();
        let mut controller = Controller::new();
        controller.set_diagnostics(collector.handle());

        let key = controller.add(AlertMessage::error("boom"));
        controller.request_close();
        controller.request_close();
        controller.on_exited();
        controller.on_exited();
        collector.process_pending();

        assert_eq!(
            collector.kinds(),
            vec![
                AlertEvent::Enqueued {
                    key: key.value(),
                    severity: Some("error".to_string()),
                    pending: 1,
                },
                AlertEvent::CloseRequested {
                    key: key.value(),
                    reason: None,
                },
                AlertEvent::RedundantClose,
                AlertEvent::Exited {
                    key: key.value(),
                    remaining: 0,
                },
                AlertEvent::RedundantExit,
            ]
        );
    }
}
