// SPDX-License-Identifier: MPL-2.0
//! In-memory media element and fullscreen host.
//!
//! Nothing is decoded or displayed. The adapters keep the state a real
//! element would keep and raise the matching [`MediaEvent`]s, so the
//! controller can be driven end to end without a browser or a window.
//! Playback progress is simulated with [`HeadlessMedia::advance`].

use crate::application::port::{
    EventSink, FullscreenHost, MediaEvent, MediaPrimitive, SubscriptionId,
};

/// Subscribed sinks; closed channels are pruned on the next emit.
#[derive(Debug, Default)]
struct SinkSet {
    next_id: u64,
    sinks: Vec<(SubscriptionId, EventSink)>,
}

impl SinkSet {
    fn subscribe(&mut self, sink: EventSink) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId::new(self.next_id);
        self.sinks.push((id, sink));
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.sinks.retain(|(sid, _)| *sid != id);
    }

    fn emit(&mut self, event: MediaEvent) {
        self.sinks.retain(|(_, sink)| sink.send(event).is_ok());
    }

    fn len(&self) -> usize {
        self.sinks.len()
    }
}

// =============================================================================
// HeadlessMedia
// =============================================================================

/// Simulated media element.
///
/// The source duration is fixed at construction; a non-finite value models a
/// live stream. Metadata is reported only when [`complete_metadata`] is called,
/// which lets callers exercise commands issued before the duration is known.
///
/// [`complete_metadata`]: HeadlessMedia::complete_metadata
#[derive(Debug)]
pub struct HeadlessMedia {
    source_duration: f64,
    source: Option<String>,
    metadata_loaded: bool,
    position: f64,
    paused: bool,
    volume: f64,
    muted: bool,
    autoplay_blocked: bool,
    sinks: SinkSet,
}

impl HeadlessMedia {
    /// Creates an element whose sources last `duration_secs`.
    #[must_use]
    pub fn new(duration_secs: f64) -> Self {
        Self {
            source_duration: duration_secs,
            source: None,
            metadata_loaded: false,
            position: 0.0,
            paused: true,
            volume: 1.0,
            muted: false,
            autoplay_blocked: false,
            sinks: SinkSet::default(),
        }
    }

    /// Makes every later `play()` a silent refusal, like a blocked autoplay.
    pub fn set_autoplay_blocked(&mut self, blocked: bool) {
        self.autoplay_blocked = blocked;
    }

    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sinks.len()
    }

    /// Reports metadata for the current source.
    pub fn complete_metadata(&mut self) {
        if self.source.is_none() {
            return;
        }
        self.metadata_loaded = true;
        self.sinks.emit(MediaEvent::LoadedMetadata {
            duration_secs: self.source_duration,
        });
    }

    /// Plays `secs` of media if playing, raising a time update.
    ///
    /// Reaching the end pauses the element and raises `Pause` then `Ended`.
    pub fn advance(&mut self, secs: f64) {
        if self.paused || self.source.is_none() {
            return;
        }
        self.position += secs.max(0.0);
        let ended = self.metadata_loaded
            && self.source_duration.is_finite()
            && self.position >= self.source_duration;
        if ended {
            self.position = self.source_duration;
        }
        self.sinks.emit(MediaEvent::TimeUpdate {
            current_secs: self.position,
        });
        if ended {
            self.paused = true;
            self.sinks.emit(MediaEvent::Pause);
            self.sinks.emit(MediaEvent::Ended);
        }
    }

    /// Simulates a network stall.
    pub fn stall(&mut self) {
        self.sinks.emit(MediaEvent::Waiting);
    }

    /// Simulates data arriving after a stall.
    pub fn recover(&mut self) {
        self.sinks.emit(MediaEvent::Playing);
    }

    fn known_duration(&self) -> Option<f64> {
        (self.metadata_loaded && self.source_duration.is_finite())
            .then_some(self.source_duration)
    }
}

impl MediaPrimitive for HeadlessMedia {
    fn load(&mut self, url: &str) {
        self.source = Some(url.to_string());
        self.metadata_loaded = false;
        self.position = 0.0;
        self.paused = true;
    }

    fn play(&mut self) {
        if self.source.is_none() || self.autoplay_blocked {
            log::debug!("headless media refused play request");
            return;
        }
        if self.paused {
            self.paused = false;
            self.sinks.emit(MediaEvent::Play);
            self.sinks.emit(MediaEvent::Playing);
        }
    }

    fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            self.sinks.emit(MediaEvent::Pause);
        }
    }

    fn current_time(&self) -> f64 {
        self.position
    }

    fn set_current_time(&mut self, secs: f64) {
        let upper = self.known_duration().unwrap_or(f64::INFINITY);
        self.position = secs.clamp(0.0, upper);
        self.sinks.emit(MediaEvent::TimeUpdate {
            current_secs: self.position,
        });
    }

    fn duration(&self) -> Option<f64> {
        self.metadata_loaded.then_some(self.source_duration)
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0);
        self.sinks.emit(MediaEvent::VolumeChange {
            volume: self.volume,
            muted: self.muted,
        });
    }

    fn muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.sinks.emit(MediaEvent::VolumeChange {
            volume: self.volume,
            muted: self.muted,
        });
    }

    fn subscribe(&mut self, sink: EventSink) -> SubscriptionId {
        self.sinks.subscribe(sink)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.sinks.unsubscribe(id);
    }
}

// =============================================================================
// HeadlessFullscreen
// =============================================================================

/// Simulated fullscreen host. Requests are granted unless denial is switched on.
#[derive(Debug, Default)]
pub struct HeadlessFullscreen {
    fullscreen: bool,
    deny: bool,
    sinks: SinkSet,
}

impl HeadlessFullscreen {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every later request a silent refusal.
    pub fn set_deny_requests(&mut self, deny: bool) {
        self.deny = deny;
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sinks.len()
    }

    fn change(&mut self, fullscreen: bool) {
        if self.fullscreen == fullscreen {
            return;
        }
        self.fullscreen = fullscreen;
        self.sinks.emit(MediaEvent::FullscreenChange {
            is_fullscreen: fullscreen,
        });
    }
}

impl FullscreenHost for HeadlessFullscreen {
    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn request_fullscreen(&mut self) {
        if self.deny {
            log::debug!("headless host denied fullscreen request");
            return;
        }
        self.change(true);
    }

    fn exit_fullscreen(&mut self) {
        self.change(false);
    }

    fn subscribe(&mut self, sink: EventSink) -> SubscriptionId {
        self.sinks.subscribe(sink)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.sinks.unsubscribe(id);
    }
}
