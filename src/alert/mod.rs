// SPDX-License-Identifier: MPL-2.0
//! Queued snackbar alerts, shown one at a time.
//!
//! # Components
//!
//! - [`message`] - `AlertMessage` payloads and their keyed, queued form
//! - [`controller`] - `Controller`, the queue and visibility state machine
//! - [`broadcaster`] - `AlertProvider` and the `AlertScope` handed to a subtree
//! - [`presenter`] - `Presenter`, the view-side timer and event driver
//!
//! # Usage
//!
//! ```
//! use alert_queue::alert::{AlertMessage, AlertProvider};
//!
//! let provider = AlertProvider::new();
//! let scope = provider.scope();
//!
//! // Anywhere below the composition root:
//! scope.add(AlertMessage::success("Image saved")).unwrap();
//!
//! // In the view layer:
//! let state = scope.state();
//! assert_eq!(state.current().unwrap().body(), "Image saved");
//! state.request_close();
//! state.on_exited();
//! assert!(state.current().is_none());
//! ```
//!
//! # Lifecycle
//!
//! `Idle --add--> Showing --request_close--> Closing --on_exited--> Idle`,
//! or straight back to `Showing` when more alerts are queued.

pub mod broadcaster;
pub mod controller;
pub mod message;
pub mod presenter;

pub use broadcaster::{AddHandle, AlertProvider, AlertScope, ListenerId, StateHandle};
pub use controller::{AlertState, Controller};
pub use message::{AlertMessage, QueuedAlert, UndoAction};
pub use presenter::{
    Action, AlertView, CloseReason, Event, Presenter, PresenterSettings, Variant,
};

pub use crate::domain::alert::{AlertKey, Phase, Severity};
