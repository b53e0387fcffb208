// SPDX-License-Identifier: MPL-2.0
//! Playback command errors.

use std::fmt;

/// Errors returned by playback commands.
///
/// Readiness mismatches (commands issued before metadata loads) are never
/// errors: they are absorbed by clamping. Host refusals (blocked autoplay,
/// denied fullscreen) are not errors either; they simply produce no state
/// change.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackError {
    /// A command argument is outside its accepted range.
    InvalidArgument {
        /// Name of the rejected parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl PlaybackError {
    /// Shorthand for an [`PlaybackError::InvalidArgument`].
    #[must_use]
    pub fn invalid_argument(name: &'static str, value: f64) -> Self {
        Self::InvalidArgument { name, value }
    }
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::InvalidArgument { name, value } => {
                write!(f, "Invalid argument: {name} = {value}")
            }
        }
    }
}

impl std::error::Error for PlaybackError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_parameter() {
        let err = PlaybackError::invalid_argument("volume", 1.5);
        assert_eq!(err.to_string(), "Invalid argument: volume = 1.5");
    }
}
