// SPDX-License-Identifier: MPL-2.0
//! Video player for CodeCast.
//!
//! This module provides the playback controller that sits between a renderer
//! and the host's media element, plus the small pieces the control overlay
//! needs (time labels, keyboard shortcuts, auto-hide countdown).

mod controls;
mod controller;
mod shortcuts;
mod state;
mod time_format;

pub use controller::{PlaybackController, PlayerSettings, ProgressListener};
pub use controls::InactivityCountdown;
pub use shortcuts::PlayerShortcut;
pub use state::PlaybackState;
pub use time_format::format_time;

use crate::config::Config;
use crate::infrastructure::{HeadlessFullscreen, HeadlessMedia, ManualScheduler};

/// Controller wired to the in-memory adapters.
pub type HeadlessPlayer = PlaybackController<HeadlessMedia, HeadlessFullscreen, ManualScheduler>;

/// Creates a headless player for sources lasting `duration_secs`, using the
/// player and diagnostics settings from `config`.
#[must_use]
pub fn create_headless_player(duration_secs: f64, config: &Config) -> HeadlessPlayer {
    PlaybackController::new(
        HeadlessMedia::new(duration_secs),
        HeadlessFullscreen::new(),
        ManualScheduler::new(),
        PlayerSettings::from_config(config),
    )
}
