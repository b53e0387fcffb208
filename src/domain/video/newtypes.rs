// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! This module provides type-safe wrappers for playback values,
//! ensuring they are always within valid ranges.

use crate::domain::error::PlaybackError;
use std::time::Duration;

// =============================================================================
// Volume
// =============================================================================

/// Volume bounds (0.0 to 1.0, where 1.0 = 100%).
pub mod volume_bounds {
    /// Minimum volume level.
    pub const MIN: f64 = 0.0;
    /// Maximum volume level.
    pub const MAX: f64 = 1.0;
    /// Default volume level.
    pub const DEFAULT: f64 = 1.0;
    /// Volume adjustment step per key press (10%).
    pub const STEP: f64 = 0.1;
    /// Stepped levels are rounded to a millionth.
    pub const STEP_PRECISION: f64 = 1_000_000.0;
}

/// Volume level, guaranteed to be within `[0.0, 1.0]`.
///
/// Use [`Volume::try_new`] at command boundaries where out-of-range input
/// must be rejected, and [`Volume::new`] where clamping is the right thing
/// (keyboard stepping, values reported by the host).
///
/// # Example
///
/// ```
/// use codecast::domain::video::Volume;
///
/// let vol = Volume::try_new(0.5).unwrap();
/// assert_eq!(vol.value(), 0.5);
///
/// assert!(Volume::try_new(1.2).is_err());
/// assert_eq!(Volume::new(1.2).value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f64);

impl Volume {
    /// Silence.
    pub const ZERO: Self = Self(volume_bounds::MIN);

    /// Creates a new volume level, clamping to valid range.
    ///
    /// NaN maps to silence.
    #[must_use]
    pub fn new(volume: f64) -> Self {
        if volume.is_nan() {
            return Self::ZERO;
        }
        Self(volume.clamp(volume_bounds::MIN, volume_bounds::MAX))
    }

    /// Creates a volume level, rejecting values outside `[0.0, 1.0]`.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::InvalidArgument`] for out-of-range or NaN input.
    pub fn try_new(volume: f64) -> Result<Self, PlaybackError> {
        if (volume_bounds::MIN..=volume_bounds::MAX).contains(&volume) {
            Ok(Self(volume))
        } else {
            Err(PlaybackError::invalid_argument("volume", volume))
        }
    }

    /// Returns the volume value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns true for a zero volume, which implies mute.
    #[must_use]
    pub fn is_silent(self) -> bool {
        self.0 <= volume_bounds::MIN
    }

    /// Increases volume by one step, clamping to maximum.
    #[must_use]
    pub fn increase(self) -> Self {
        Self::stepped(self.0 + volume_bounds::STEP)
    }

    /// Decreases volume by one step, clamping to minimum.
    ///
    /// Repeated steps from any level reach exactly 0.
    #[must_use]
    pub fn decrease(self) -> Self {
        Self::stepped(self.0 - volume_bounds::STEP)
    }

    /// Rounds away the error accumulated by repeated stepping.
    fn stepped(volume: f64) -> Self {
        let scale = volume_bounds::STEP_PRECISION;
        Self::new((volume * scale).round() / scale)
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(volume_bounds::DEFAULT)
    }
}

// =============================================================================
// SkipStep
// =============================================================================

/// Skip step bounds (1 to 60 seconds).
pub mod skip_step_bounds {
    /// Minimum skip step in seconds.
    pub const MIN: f64 = 1.0;
    /// Maximum skip step in seconds.
    pub const MAX: f64 = 60.0;
    /// Default skip step in seconds.
    pub const DEFAULT: f64 = 10.0;
}

/// Distance covered by the skip buttons and arrow keys, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkipStep(f64);

impl SkipStep {
    /// Creates a new skip step, clamping to valid range.
    #[must_use]
    pub fn new(secs: f64) -> Self {
        if secs.is_nan() {
            return Self::default();
        }
        Self(secs.clamp(skip_step_bounds::MIN, skip_step_bounds::MAX))
    }

    /// Returns the step in seconds.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the step as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs_f64(self.0)
    }
}

impl Default for SkipStep {
    fn default() -> Self {
        Self(skip_step_bounds::DEFAULT)
    }
}

// =============================================================================
// ControlsHideDelay
// =============================================================================

/// Controls hide delay bounds (0.5 to 30 seconds, in milliseconds).
pub mod hide_delay_bounds {
    /// Minimum delay in milliseconds.
    pub const MIN: u64 = 500;
    /// Maximum delay in milliseconds.
    pub const MAX: u64 = 30_000;
    /// Default delay in milliseconds.
    pub const DEFAULT: u64 = 3_000;
}

/// Inactivity window after which the control overlay hides during playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlsHideDelay(u64);

impl ControlsHideDelay {
    /// Creates a new delay from milliseconds, clamping to valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(hide_delay_bounds::MIN, hide_delay_bounds::MAX))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for ControlsHideDelay {
    fn default() -> Self {
        Self(hide_delay_bounds::DEFAULT)
    }
}
