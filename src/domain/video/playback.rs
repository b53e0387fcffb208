// SPDX-License-Identifier: MPL-2.0
//! Playback phases and the derived player status.

/// Where the current source is in its loading lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// No source has been loaded.
    #[default]
    Idle,
    /// A source was handed to the media primitive; metadata is pending.
    Loading,
    /// Metadata (duration) has been reported.
    Ready,
}

impl LoadPhase {
    /// Returns true once metadata has loaded.
    #[must_use]
    pub fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }
}

/// Read-only summary of the playback dimension, derived from the
/// load phase and the playing/buffering flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// Nothing loaded.
    Idle,
    /// Source loading, metadata pending.
    Loading,
    /// Ready and paused.
    Paused,
    /// Ready and playing.
    Playing,
    /// Waiting for data; returns to playing or paused on resume.
    Buffering {
        /// Whether playback continues once data arrives.
        resume_playing: bool,
    },
}

impl PlaybackStatus {
    /// Derives the status from its inputs.
    ///
    /// Buffering wins over the load phase: a stall can be reported while
    /// metadata is still pending.
    #[must_use]
    pub fn derive(phase: LoadPhase, is_playing: bool, is_buffering: bool) -> Self {
        if is_buffering {
            return Self::Buffering {
                resume_playing: is_playing,
            };
        }
        match phase {
            LoadPhase::Idle => Self::Idle,
            LoadPhase::Loading if !is_playing => Self::Loading,
            _ if is_playing => Self::Playing,
            _ => Self::Paused,
        }
    }

    /// Returns true if playback is running or will resume after buffering.
    #[must_use]
    pub fn is_playing_or_will_resume(self) -> bool {
        match self {
            Self::Playing => true,
            Self::Buffering { resume_playing } => resume_playing,
            _ => false,
        }
    }
}
