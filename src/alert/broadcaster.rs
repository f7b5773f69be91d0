// SPDX-License-Identifier: MPL-2.0
//! Scoped access to one controller from anywhere in a UI subtree.
//!
//! An [`AlertProvider`] owns a [`Controller`]. The composition root keeps the
//! provider alive and passes its [`AlertScope`] down the tree; descendants
//! pick the surface they need:
//!
//! - [`StateHandle`] reads the projection and forwards the view signals
//!   (`request_close`, `on_exited`).
//! - [`AddHandle`] only enqueues. It carries no state, so holding one never
//!   makes a producer observe visibility changes.
//!
//! Handles reference the provider weakly. Once the provider is dropped, or
//! for the [`AlertScope::detached`] scope that never had one, reads return an
//! inert [`AlertState::default`], view signals do nothing and `add` fails
//! with [`Error::ProviderNotFound`].

use super::controller::{AlertState, Controller};
use super::message::{AlertMessage, QueuedAlert};
use crate::diagnostics::DiagnosticsHandle;
use crate::domain::alert::AlertKey;
use crate::error::{Error, Result};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Listener = Rc<dyn Fn(&AlertState)>;

/// Identifies a listener registered with [`StateHandle::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct Shared {
    controller: RefCell<Controller>,
    revision: Cell<u64>,
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
    next_listener: Cell<u64>,
}

impl Shared {
    /// Runs `f` against the controller, then bumps the revision and notifies
    /// listeners if the observable state changed.
    ///
    /// Listeners run after the controller borrow is released, so they may
    /// call back into any handle.
    fn mutate<R>(&self, f: impl FnOnce(&mut Controller) -> R) -> R {
        let (result, changed) = {
            let mut controller = self.controller.borrow_mut();
            let before = fingerprint(&controller);
            let result = f(&mut *controller);
            let changed = (fingerprint(&controller) != before).then(|| controller.snapshot());
            (result, changed)
        };

        if let Some(state) = changed {
            self.revision.set(self.revision.get() + 1);
            let listeners: Vec<Listener> = self
                .listeners
                .borrow()
                .iter()
                .map(|(_, listener)| Rc::clone(listener))
                .collect();
            for listener in listeners {
                listener(&state);
            }
        }
        result
    }

    fn read<R>(&self, f: impl FnOnce(&Controller) -> R) -> R {
        f(&*self.controller.borrow())
    }
}

fn fingerprint(controller: &Controller) -> (bool, usize, Option<AlertKey>) {
    (
        controller.is_open(),
        controller.pending_count(),
        controller.current().map(QueuedAlert::key),
    )
}

/// Owns the controller backing one scope.
///
/// Dropping the provider tears the queue down; handles outliving it fall back
/// to the detached behavior.
pub struct AlertProvider {
    shared: Rc<Shared>,
}

impl AlertProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::with_controller(Controller::new())
    }

    /// Creates a provider whose controller reports to `handle`.
    #[must_use]
    pub fn with_diagnostics(handle: DiagnosticsHandle) -> Self {
        let mut controller = Controller::new();
        controller.set_diagnostics(handle);
        Self::with_controller(controller)
    }

    fn with_controller(controller: Controller) -> Self {
        Self {
            shared: Rc::new(Shared {
                controller: RefCell::new(controller),
                revision: Cell::new(0),
                listeners: RefCell::new(Vec::new()),
                next_listener: Cell::new(0),
            }),
        }
    }

    /// The value to inject into the subtree.
    #[must_use]
    pub fn scope(&self) -> AlertScope {
        AlertScope {
            shared: Rc::downgrade(&self.shared),
        }
    }

    #[must_use]
    pub fn state(&self) -> StateHandle {
        self.scope().state()
    }

    #[must_use]
    pub fn adder(&self) -> AddHandle {
        self.scope().adder()
    }
}

impl Default for AlertProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AlertProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertProvider")
            .field("controller", &self.shared.controller)
            .field("revision", &self.shared.revision.get())
            .finish_non_exhaustive()
    }
}

/// Injectable context value giving a subtree access to one provider.
#[derive(Clone, Default)]
pub struct AlertScope {
    shared: Weak<Shared>,
}

impl AlertScope {
    /// A scope with no provider behind it.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    /// Returns true while the backing provider is alive.
    #[must_use]
    pub fn has_provider(&self) -> bool {
        self.shared.strong_count() > 0
    }

    #[must_use]
    pub fn state(&self) -> StateHandle {
        StateHandle {
            shared: self.shared.clone(),
        }
    }

    #[must_use]
    pub fn adder(&self) -> AddHandle {
        AddHandle {
            shared: self.shared.clone(),
        }
    }

    /// Creates a provider for a nested subtree.
    ///
    /// The nested provider owns its own controller and queue; nothing is
    /// shared with this scope.
    #[must_use]
    pub fn nested(&self) -> AlertProvider {
        AlertProvider::new()
    }

    /// Shortcut for `self.adder().add(message)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProviderNotFound`] when no provider backs this scope.
    pub fn add(&self, message: AlertMessage) -> Result<AlertKey> {
        self.adder().add(message)
    }
}

impl fmt::Debug for AlertScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertScope")
            .field("has_provider", &self.has_provider())
            .finish()
    }
}

/// Enqueue-only surface of a scope.
#[derive(Clone, Default)]
pub struct AddHandle {
    shared: Weak<Shared>,
}

impl AddHandle {
    /// Enqueues a message on the provider's controller.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProviderNotFound`] when no provider backs this handle.
    /// Nothing is enqueued anywhere in that case.
    pub fn add(&self, message: AlertMessage) -> Result<AlertKey> {
        let Some(shared) = self.shared.upgrade() else {
            tracing::error!(body = message.body(), "alert added outside of any provider");
            return Err(Error::ProviderNotFound);
        };
        Ok(shared.mutate(|controller| controller.add(message)))
    }
}

impl fmt::Debug for AddHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddHandle")
            .field("has_provider", &(self.shared.strong_count() > 0))
            .finish()
    }
}

/// Read surface of a scope, plus the two view-layer signals.
#[derive(Clone, Default)]
pub struct StateHandle {
    shared: Weak<Shared>,
}

impl StateHandle {
    /// Owned copy of the current state; inert default without a provider.
    #[must_use]
    pub fn snapshot(&self) -> AlertState {
        self.read(Controller::snapshot).unwrap_or_default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.read(Controller::is_open).unwrap_or(false)
    }

    #[must_use]
    pub fn current(&self) -> Option<QueuedAlert> {
        self.read(|controller| controller.current().cloned()).flatten()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.read(Controller::pending_count).unwrap_or(0)
    }

    /// Counter bumped on every observable state change.
    ///
    /// Always 0 without a provider.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.shared
            .upgrade()
            .map_or(0, |shared| shared.revision.get())
    }

    /// Forwards the view's close request. No-op without a provider.
    pub fn request_close(&self) {
        self.mutate(Controller::request_close);
    }

    pub(crate) fn request_close_with_reason(&self, reason: &str) {
        self.mutate(|controller| controller.request_close_with_reason(Some(reason)));
    }

    /// Forwards the view's exit-transition completion. No-op without a provider.
    pub fn on_exited(&self) {
        self.mutate(|controller| {
            controller.on_exited();
        });
    }

    pub(crate) fn note_undo(&self, key: AlertKey) {
        self.read(|controller| controller.note_undo(key));
    }

    /// Registers a callback run with the new state after every change.
    ///
    /// Returns `None` without a provider.
    pub fn subscribe(&self, listener: impl Fn(&AlertState) + 'static) -> Option<ListenerId> {
        let shared = self.shared.upgrade()?;
        let id = ListenerId(shared.next_listener.get());
        shared.next_listener.set(id.0 + 1);
        let listener: Listener = Rc::new(listener);
        shared.listeners.borrow_mut().push((id, listener));
        Some(id)
    }

    /// Removes a listener. Returns true if it was registered.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let Some(shared) = self.shared.upgrade() else {
            return false;
        };
        let mut listeners = shared.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }

    fn read<R>(&self, f: impl FnOnce(&Controller) -> R) -> Option<R> {
        self.shared.upgrade().map(|shared| shared.read(f))
    }

    fn mutate(&self, f: impl FnOnce(&mut Controller)) {
        if let Some(shared) = self.shared.upgrade() {
            shared.mutate(f);
        }
    }
}

impl fmt::Debug for StateHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateHandle")
            .field("has_provider", &(self.shared.strong_count() > 0))
            .field("revision", &self.revision())
            .finish()
    }
}
