// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for player activity tracking.
//!
//! Each playback command the controller accepts or rejects is captured as a
//! [`PlayerAction`], so a bug report can show what the viewer did right
//! before a problem appeared.

use std::time::Instant;

/// Viewer-initiated actions captured for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerAction {
    // ==========================================================================
    // Source Actions
    // ==========================================================================
    /// A new source was handed to the media primitive.
    LoadSource {
        /// Source URL.
        url: String,
    },

    // ==========================================================================
    // Playback Actions
    // ==========================================================================
    /// Toggle play/pause state.
    TogglePlayback,

    /// Seek to a position (after clamping).
    Seek {
        /// Target position in seconds.
        position_secs: f64,
    },

    /// Relative jump from the current position.
    Skip {
        /// Requested offset in seconds (negative jumps backward).
        delta_secs: f64,
    },

    /// Click on the player surface.
    ClickSurface,

    // ==========================================================================
    // Audio Actions
    // ==========================================================================
    /// Change volume level.
    SetVolume {
        /// Volume level (0.0 to 1.0).
        volume: f64,
    },

    /// Volume command refused because the value was out of range.
    RejectedVolume {
        /// The refused value.
        volume: f64,
    },

    /// Set the mute flag.
    SetMuted {
        /// New mute state.
        muted: bool,
    },

    // ==========================================================================
    // View Actions
    // ==========================================================================
    /// Toggle fullscreen mode.
    ToggleFullscreen,

    /// The player was torn down.
    Teardown,
}

/// A recorded action with its position in the session.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// Monotonic sequence number, starting at 1.
    pub sequence: u64,
    /// When the action occurred (monotonic clock).
    pub timestamp: Instant,
    /// What the viewer did.
    pub action: PlayerAction,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(sequence: u64, action: PlayerAction) -> Self {
        Self {
            sequence,
            timestamp: Instant::now(),
            action,
        }
    }
}
