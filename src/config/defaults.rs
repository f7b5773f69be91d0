// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! Bounds live with their newtypes in [`crate::domain`]; these constants
//! mirror them so the settings file and the types cannot drift apart.

use crate::domain::diagnostics::buffer_capacity_bounds;
use crate::domain::ui::auto_hide_bounds;

// ==========================================================================
// Auto-hide Defaults
// ==========================================================================

/// Default time an alert stays visible (in milliseconds).
pub const DEFAULT_AUTO_HIDE_MS: u64 = auto_hide_bounds::DEFAULT_MS;

/// Minimum auto-hide duration (in milliseconds).
pub const MIN_AUTO_HIDE_MS: u64 = auto_hide_bounds::MIN_MS;

/// Maximum auto-hide duration (in milliseconds).
pub const MAX_AUTO_HIDE_MS: u64 = auto_hide_bounds::MAX_MS;

/// Whether clicking outside an alert dismisses it.
pub const DEFAULT_CLOSE_ON_CLICKAWAY: bool = false;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of alert events kept by the diagnostics buffer.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::DEFAULT;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::MIN;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::MAX;
