// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for the alert lifecycle.
//!
//! Controllers and presenters report what they do (enqueue, close request,
//! exit, undo) through a [`DiagnosticsHandle`]. Events are sent over a bounded
//! channel and drained by the [`DiagnosticsCollector`], which keeps the most
//! recent [`BufferCapacity`] events and can export them as JSON.
//!
//! Sending never blocks: when the channel is full the event is dropped.

mod collector;
mod events;

pub use crate::domain::diagnostics::BufferCapacity;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{AlertEvent, DiagnosticEvent, SerializableEvent};
