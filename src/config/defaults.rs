// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the library. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toast Queue**: Capacity of the notification list
//! - **Toast Timing**: Auto-dismiss durations and the tick interval

// ==========================================================================
// Toast Queue Defaults
// ==========================================================================

/// Default maximum number of toasts kept in the list.
pub const DEFAULT_MAX_TOASTS: usize = 5;

/// Smallest accepted toast capacity.
pub const MIN_MAX_TOASTS: usize = 1;

/// Largest accepted toast capacity.
pub const MAX_MAX_TOASTS: usize = 50;

// ==========================================================================
// Toast Timing Defaults
// ==========================================================================

/// Auto-dismiss duration applied when a host opts into timed toasts
/// without choosing a duration (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5000;

/// Longest accepted auto-dismiss duration (in milliseconds).
pub const MAX_TOAST_DURATION_MS: u64 = 60_000;

/// Interval of the tick used by hosts that drive expiry themselves.
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_MAX_TOASTS > 0);
    assert!(MAX_MAX_TOASTS >= MIN_MAX_TOASTS);
    assert!(DEFAULT_MAX_TOASTS >= MIN_MAX_TOASTS);
    assert!(DEFAULT_MAX_TOASTS <= MAX_MAX_TOASTS);

    assert!(DEFAULT_TOAST_DURATION_MS > 0);
    assert!(DEFAULT_TOAST_DURATION_MS <= MAX_TOAST_DURATION_MS);
    assert!(TICK_INTERVAL_MS > 0);
    assert!(TICK_INTERVAL_MS < DEFAULT_TOAST_DURATION_MS);
};
