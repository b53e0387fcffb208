// SPDX-License-Identifier: MPL-2.0
//! Playback state snapshot.
//!
//! The controller never edits a snapshot in place. Every transition builds a
//! new value with one of the `with_*` methods and swaps it in, so a copy
//! handed to a renderer is never observed half-updated.

use crate::domain::video::Volume;

/// Observable player state.
///
/// Field update sources:
/// - `is_playing`, `is_buffering`, `is_fullscreen`, `duration`: confirmed by
///   host events only
/// - `current_time` (seek), `volume` and `is_muted`: updated optimistically by
///   commands, then re-confirmed by events
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    /// Playing between an accepted play and a pause or end.
    pub is_playing: bool,
    /// Position in seconds, never negative.
    pub current_time: f64,
    /// Duration in seconds; 0 until metadata loads.
    pub duration: f64,
    /// Stored volume in `[0, 1]`; muting does not change it.
    pub volume: f64,
    pub is_muted: bool,
    /// Mirrors the host; never set by a command.
    pub is_fullscreen: bool,
    /// Whether the overlay controls are shown.
    pub is_controls_visible: bool,
    /// Between a stall and the matching resume.
    pub is_buffering: bool,
}

impl PlaybackState {
    /// Snapshot of a freshly constructed player: controls shown, nothing loaded.
    #[must_use]
    pub fn initial(volume: Volume, is_fullscreen: bool) -> Self {
        Self {
            is_playing: false,
            current_time: 0.0,
            duration: 0.0,
            volume: volume.value(),
            is_muted: false,
            is_fullscreen,
            is_controls_visible: true,
            is_buffering: false,
        }
    }

    /// Whether metadata reported a usable duration.
    #[must_use]
    pub fn has_duration(&self) -> bool {
        self.duration > 0.0
    }

    /// Upper seek bound: the duration when known, unbounded otherwise.
    #[must_use]
    pub fn seek_upper_bound(&self) -> f64 {
        if self.has_duration() {
            self.duration
        } else {
            f64::INFINITY
        }
    }

    /// Played fraction in `[0, 1]`, 0 while the duration is unknown.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.has_duration() {
            (self.current_time / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn with_playing(self, is_playing: bool) -> Self {
        Self { is_playing, ..self }
    }

    /// Negative positions are clamped to 0.
    #[must_use]
    pub fn with_current_time(self, current_time: f64) -> Self {
        Self {
            current_time: current_time.max(0.0),
            ..self
        }
    }

    #[must_use]
    pub fn with_duration(self, duration: f64) -> Self {
        Self { duration, ..self }
    }

    #[must_use]
    pub fn with_volume(self, volume: Volume, is_muted: bool) -> Self {
        Self {
            volume: volume.value(),
            is_muted,
            ..self
        }
    }

    #[must_use]
    pub fn with_muted(self, is_muted: bool) -> Self {
        Self { is_muted, ..self }
    }

    #[must_use]
    pub fn with_fullscreen(self, is_fullscreen: bool) -> Self {
        Self {
            is_fullscreen,
            ..self
        }
    }

    #[must_use]
    pub fn with_controls_visible(self, is_controls_visible: bool) -> Self {
        Self {
            is_controls_visible,
            ..self
        }
    }

    #[must_use]
    pub fn with_buffering(self, is_buffering: bool) -> Self {
        Self {
            is_buffering,
            ..self
        }
    }

    /// Clears everything tied to the previous source. Volume, mute,
    /// fullscreen and control visibility carry over.
    #[must_use]
    pub fn reset_for_load(self) -> Self {
        Self {
            is_playing: false,
            current_time: 0.0,
            duration: 0.0,
            is_buffering: false,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn initial_state_shows_controls() {
        let state = PlaybackState::initial(Volume::default(), false);
        assert!(!state.is_playing);
        assert!(state.is_controls_visible);
        assert!(!state.is_muted);
        assert_abs_diff_eq!(state.volume, 1.0);
        assert_abs_diff_eq!(state.current_time, 0.0);
        assert!(!state.has_duration());
    }

    #[test]
    fn seek_bound_is_unbounded_without_duration() {
        let state = PlaybackState::initial(Volume::default(), false);
        assert!(state.seek_upper_bound().is_infinite());
        assert_abs_diff_eq!(state.with_duration(30.0).seek_upper_bound(), 30.0);
    }

    #[test]
    fn negative_time_clamps_to_zero() {
        let state = PlaybackState::initial(Volume::default(), false).with_current_time(-4.0);
        assert_abs_diff_eq!(state.current_time, 0.0);
    }

    #[test]
    fn progress_is_a_fraction_of_duration() {
        let state = PlaybackState::initial(Volume::default(), false)
            .with_duration(200.0)
            .with_current_time(50.0);
        assert_abs_diff_eq!(state.progress(), 0.25);
    }

    #[test]
    fn reset_for_load_keeps_audio_and_view_fields() {
        let state = PlaybackState::initial(Volume::new(0.3), true)
            .with_playing(true)
            .with_buffering(true)
            .with_duration(90.0)
            .with_current_time(45.0)
            .with_muted(true)
            .reset_for_load();

        assert!(!state.is_playing);
        assert!(!state.is_buffering);
        assert_abs_diff_eq!(state.duration, 0.0);
        assert_abs_diff_eq!(state.current_time, 0.0);
        assert_abs_diff_eq!(state.volume, 0.3);
        assert!(state.is_muted);
        assert!(state.is_fullscreen);
    }
}
