// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts understood by the player.

/// Player action bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerShortcut {
    TogglePlayback,
    SkipBackward,
    SkipForward,
    VolumeUp,
    VolumeDown,
    ToggleMute,
    ToggleFullscreen,
}

impl PlayerShortcut {
    /// Maps a key name (as reported by a keyboard event) to a shortcut.
    ///
    /// Letter keys are case-insensitive.
    ///
    /// | Key                | Action            |
    /// |--------------------|-------------------|
    /// | `Space`, `k`       | play / pause      |
    /// | `ArrowLeft`, `j`   | skip backward     |
    /// | `ArrowRight`, `l`  | skip forward      |
    /// | `ArrowUp`          | volume up         |
    /// | `ArrowDown`        | volume down       |
    /// | `m`                | mute / unmute     |
    /// | `f`                | fullscreen        |
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            " " | "Space" => Some(Self::TogglePlayback),
            "ArrowLeft" => Some(Self::SkipBackward),
            "ArrowRight" => Some(Self::SkipForward),
            "ArrowUp" => Some(Self::VolumeUp),
            "ArrowDown" => Some(Self::VolumeDown),
            _ => match key.to_ascii_lowercase().as_str() {
                "k" => Some(Self::TogglePlayback),
                "j" => Some(Self::SkipBackward),
                "l" => Some(Self::SkipForward),
                "m" => Some(Self::ToggleMute),
                "f" => Some(Self::ToggleFullscreen),
                _ => None,
            },
        }
    }
}
