// SPDX-License-Identifier: MPL-2.0
//! Alert identity, category and lifecycle phase.

use std::fmt;

/// Identifier assigned by a controller when an alert is enqueued.
///
/// Keys come from a per-controller monotonic counter, so two alerts enqueued
/// by the same controller never share a key, even within the same tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlertKey(u64);

impl AlertKey {
    /// Wraps a raw key value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw key value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AlertKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Category of an alert.
///
/// An alert without a severity is a plain snackbar without category styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Operation completed successfully.
    Success,
    /// Informational message.
    Info,
    /// Something the user should look at, but nothing failed.
    Warning,
    /// Operation failed.
    Error,
}

impl Severity {
    /// Stable lowercase name, used for diagnostics and config values.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a controller stands in the show/close/exit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing queued, nothing visible.
    #[default]
    Idle,
    /// The front alert is visible.
    Showing,
    /// The front alert was asked to close and its exit transition is running.
    Closing,
}

impl Phase {
    /// Derives the phase from the two pieces of controller state.
    #[must_use]
    pub fn from_state(is_open: bool, pending: usize) -> Self {
        match (pending, is_open) {
            (0, _) => Phase::Idle,
            (_, true) => Phase::Showing,
            (_, false) => Phase::Closing,
        }
    }
}
