// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Controls**: Overlay auto-hide delay while playing
//! - **Seeking**: Skip button / arrow key step
//! - **Volume**: Audio volume bounds and keyboard step
//! - **Library**: Viewer list sizes and feed limits
//! - **Diagnostics**: Player action buffer capacity

// ==========================================================================
// Controls Defaults
// ==========================================================================

/// Default inactivity delay before the control overlay hides (milliseconds).
pub const DEFAULT_CONTROLS_HIDE_DELAY_MS: u64 = 3_000;

/// Minimum inactivity delay (milliseconds).
pub const MIN_CONTROLS_HIDE_DELAY_MS: u64 = 500;

/// Maximum inactivity delay (milliseconds).
pub const MAX_CONTROLS_HIDE_DELAY_MS: u64 = 30_000;

// ==========================================================================
// Seeking Defaults
// ==========================================================================

/// Default skip step for the skip buttons and arrow keys (seconds).
pub const DEFAULT_SKIP_STEP_SECS: f64 = 10.0;

/// Minimum skip step (seconds).
pub const MIN_SKIP_STEP_SECS: f64 = 1.0;

/// Maximum skip step (seconds).
pub const MAX_SKIP_STEP_SECS: f64 = 60.0;

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Volume a freshly constructed player starts with (0.0 to 1.0).
pub const DEFAULT_VOLUME: f64 = 1.0;

/// Minimum volume level.
pub const MIN_VOLUME: f64 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f64 = 1.0;

/// Volume adjustment step per key press (10%).
pub const VOLUME_STEP: f64 = 0.1;

// ==========================================================================
// Library Defaults
// ==========================================================================

/// Number of entries kept in the recently watched list.
pub const RECENTLY_WATCHED_LIMIT: usize = 10;

/// Number of videos shown in the recent and trending feeds.
pub const FEED_LIMIT: usize = 8;

/// Number of related videos suggested next to the player.
pub const RELATED_VIDEOS_LIMIT: usize = 4;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of player actions kept for diagnostics.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 256;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 4_096;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Controls validation
    assert!(MIN_CONTROLS_HIDE_DELAY_MS > 0);
    assert!(MAX_CONTROLS_HIDE_DELAY_MS >= MIN_CONTROLS_HIDE_DELAY_MS);
    assert!(DEFAULT_CONTROLS_HIDE_DELAY_MS >= MIN_CONTROLS_HIDE_DELAY_MS);
    assert!(DEFAULT_CONTROLS_HIDE_DELAY_MS <= MAX_CONTROLS_HIDE_DELAY_MS);

    // Seeking validation
    assert!(MIN_SKIP_STEP_SECS > 0.0);
    assert!(MAX_SKIP_STEP_SECS >= MIN_SKIP_STEP_SECS);
    assert!(DEFAULT_SKIP_STEP_SECS >= MIN_SKIP_STEP_SECS);
    assert!(DEFAULT_SKIP_STEP_SECS <= MAX_SKIP_STEP_SECS);

    // Volume validation
    assert!(MIN_VOLUME < MAX_VOLUME);
    assert!(DEFAULT_VOLUME >= MIN_VOLUME);
    assert!(DEFAULT_VOLUME <= MAX_VOLUME);
    assert!(VOLUME_STEP > 0.0);

    // Library validation
    assert!(RECENTLY_WATCHED_LIMIT > 0);
    assert!(FEED_LIMIT > 0);
    assert!(RELATED_VIDEOS_LIMIT > 0);

    // Diagnostics validation
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
