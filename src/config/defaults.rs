// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Geometry**: Toast height classes and placement margins
//! - **Timing**: Per-type display durations
//! - **Animation**: Entrance/exit durations and tick rate

// ==========================================================================
// Geometry Defaults
// ==========================================================================

/// Height of a regular toast.
pub const TOAST_HEIGHT: f32 = 40.0;

/// Height of a compact ("small") toast.
pub const SMALL_TOAST_HEIGHT: f32 = 32.0;

/// Horizontal gap between the toast and the host surface edges.
pub const DEFAULT_HORIZONTAL_MARGIN: f32 = 16.0;

/// Gap between the toast and the bottom of the host (above any inset).
pub const DEFAULT_BOTTOM_MARGIN: f32 = 16.0;

/// Widest a toast may grow on large surfaces.
pub const DEFAULT_MAX_WIDTH: f32 = 480.0;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Display duration for default and success toasts (in seconds).
pub const DEFAULT_DURATION_SECS: f64 = 2.0;

/// Display duration for warning toasts (in seconds).
pub const DEFAULT_WARNING_DURATION_SECS: f64 = 3.5;

/// Display duration for error toasts (in seconds).
pub const DEFAULT_ERROR_DURATION_SECS: f64 = 3.5;

/// Longest configurable display duration (one day, in seconds).
pub const MAX_DURATION_SECS: f64 = 86_400.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Entrance (fade/slide in) duration in milliseconds.
pub const DEFAULT_ENTRANCE_MS: u64 = 250;

/// Exit (fade/slide out) duration in milliseconds.
pub const DEFAULT_EXIT_MS: u64 = 250;

/// Longest configurable entrance or exit, in milliseconds.
pub const MAX_ANIMATION_MS: u64 = 10_000;

/// Distance the toast travels while sliding in or out.
pub const DEFAULT_SLIDE_DISTANCE: f32 = 12.0;

/// Tick interval while a toast is active (~60 fps).
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

const _: () = {
    assert!(SMALL_TOAST_HEIGHT < TOAST_HEIGHT);
    assert!(DEFAULT_DURATION_SECS > 0.0);
    assert!(DEFAULT_WARNING_DURATION_SECS > 0.0);
    assert!(DEFAULT_ERROR_DURATION_SECS > 0.0);
    assert!(DEFAULT_DURATION_SECS <= MAX_DURATION_SECS);
    assert!(DEFAULT_WARNING_DURATION_SECS <= MAX_DURATION_SECS);
    assert!(DEFAULT_ERROR_DURATION_SECS <= MAX_DURATION_SECS);
    assert!(DEFAULT_ENTRANCE_MS <= MAX_ANIMATION_MS);
    assert!(DEFAULT_EXIT_MS <= MAX_ANIMATION_MS);
    assert!(DEFAULT_FRAME_INTERVAL_MS > 0);
};
