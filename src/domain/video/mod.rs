// SPDX-License-Identifier: MPL-2.0
//! Video playback domain types.
//!
//! This module contains playback value objects and enums that are
//! independent of any presentation or host concerns.

pub mod newtypes;
pub mod playback;

// Re-export commonly used types
pub use newtypes::{ControlsHideDelay, SkipStep, Volume};
pub use playback::{LoadPhase, PlaybackStatus};
