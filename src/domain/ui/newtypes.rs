// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Auto-hide Bounds
// =============================================================================

/// Auto-hide bounds for a shown alert (1 to 60 seconds, in milliseconds).
pub mod auto_hide_bounds {
    /// Minimum display duration in milliseconds.
    pub const MIN_MS: u64 = 1_000;
    /// Maximum display duration in milliseconds.
    pub const MAX_MS: u64 = 60_000;
    /// Default display duration in milliseconds.
    pub const DEFAULT_MS: u64 = 6_000;
}

// =============================================================================
// AutoHideDuration
// =============================================================================

/// How long an alert stays visible before the view asks the controller to
/// close it.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–60 seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoHideDuration(u64);

impl AutoHideDuration {
    /// Creates a new auto-hide duration from milliseconds, clamping to valid range.
    #[must_use]
    pub fn from_millis(value: u64) -> Self {
        Self(value.clamp(auto_hide_bounds::MIN_MS, auto_hide_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the timeout as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns true if this is the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= auto_hide_bounds::MIN_MS
    }

    /// Returns true if this is the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= auto_hide_bounds::MAX_MS
    }
}

impl Default for AutoHideDuration {
    fn default() -> Self {
        Self(auto_hide_bounds::DEFAULT_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_hide_clamps_to_bounds() {
        assert_eq!(
            AutoHideDuration::from_millis(10).as_millis(),
            auto_hide_bounds::MIN_MS
        );
        assert_eq!(
            AutoHideDuration::from_millis(u64::MAX).as_millis(),
            auto_hide_bounds::MAX_MS
        );
    }

    #[test]
    fn auto_hide_default_is_six_seconds() {
        assert_eq!(
            AutoHideDuration::default().as_duration(),
            Duration::from_secs(6)
        );
    }

    #[test]
    fn auto_hide_min_max() {
        assert!(AutoHideDuration::from_millis(auto_hide_bounds::MIN_MS).is_min());
        assert!(AutoHideDuration::from_millis(auto_hide_bounds::MAX_MS).is_max());
        assert!(!AutoHideDuration::default().is_min());
        assert!(!AutoHideDuration::default().is_max());
    }
}
