// SPDX-License-Identifier: MPL-2.0
//! Media primitive port definition.
//!
//! This module defines the [`MediaPrimitive`] trait wrapping the host's media
//! element, and the [`MediaEvent`]s it raises.
//!
//! # Design Notes
//!
//! - The primitive is **stateful**: it owns the real position, volume and mute flag
//! - Commands never report success; confirmation arrives as events
//! - Events are pushed into every subscribed [`EventSink`] in the order raised

use tokio::sync::mpsc::UnboundedSender;

/// Lifecycle events raised by the media primitive or the fullscreen host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    /// Metadata is available; `duration_secs` may be non-finite for live streams.
    LoadedMetadata { duration_secs: f64 },
    /// Playback position changed.
    TimeUpdate { current_secs: f64 },
    /// Playback started (play request accepted).
    Play,
    /// Playback paused.
    Pause,
    /// Playback reached the end of the media.
    Ended,
    /// Volume or mute flag changed.
    VolumeChange { volume: f64, muted: bool },
    /// Playback stalled waiting for data.
    Waiting,
    /// Playback resumed after a stall.
    Playing,
    /// The container entered or left fullscreen.
    FullscreenChange { is_fullscreen: bool },
}

/// Channel end a host pushes events into.
pub type EventSink = UnboundedSender<MediaEvent>;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Port for the host's media element.
///
/// # Lifecycle
///
/// 1. `subscribe()` an event sink
/// 2. `load()` a source; the host later raises `LoadedMetadata`
/// 3. Issue `play()`, `pause()`, `set_current_time()`... and observe events
/// 4. `unsubscribe()` when the player goes away
pub trait MediaPrimitive {
    /// Hands a new source URL to the element.
    fn load(&mut self, url: &str);

    /// Requests playback. The host may refuse (e.g. autoplay policy).
    fn play(&mut self);

    /// Requests a pause.
    fn pause(&mut self);

    /// Current position in seconds.
    fn current_time(&self) -> f64;

    /// Moves the playback position.
    fn set_current_time(&mut self, secs: f64);

    /// Duration in seconds, `None` until metadata loads.
    fn duration(&self) -> Option<f64>;

    fn volume(&self) -> f64;

    fn set_volume(&mut self, volume: f64);

    fn muted(&self) -> bool;

    fn set_muted(&mut self, muted: bool);

    /// Registers a sink for lifecycle events.
    fn subscribe(&mut self, sink: EventSink) -> SubscriptionId;

    /// Releases a sink. Unknown ids are ignored.
    fn unsubscribe(&mut self, id: SubscriptionId);
}
