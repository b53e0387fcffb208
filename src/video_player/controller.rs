// SPDX-License-Identifier: MPL-2.0
//! Playback controller.
//!
//! Sits between a renderer and the host's media element. The renderer issues
//! commands and reads [`PlaybackState`] snapshots; the host reports what
//! actually happened through [`MediaEvent`]s.
//!
//! # State Dimensions
//!
//! - Load phase: `Idle → Loading → Ready`
//! - Playback: `Paused ⇄ Playing`, with buffering layered on either
//! - Fullscreen and control visibility: independent flags
//!
//! # Event Flow
//!
//! ```text
//! command ──► MediaPrimitive / FullscreenHost ──► MediaEvent ──► pump_events() ──► on_* sink
//! ```
//!
//! Play, pause and fullscreen changes are never applied optimistically: a host
//! that refuses simply never raises the confirming event. Seek, volume and
//! mute are applied right away and re-confirmed by later events.

use super::controls::InactivityCountdown;
use super::shortcuts::PlayerShortcut;
use super::state::PlaybackState;
use crate::application::port::{
    FullscreenHost, MediaEvent, MediaPrimitive, Scheduler, SubscriptionId, TimerId,
};
use crate::config::Config;
use crate::diagnostics::{BufferCapacity, DiagnosticsCollector, PlayerAction};
use crate::domain::error::PlaybackError;
use crate::domain::video::{ControlsHideDelay, LoadPhase, PlaybackStatus, SkipStep, Volume};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

/// Callback receiving `(current_time, duration)` on every time update.
pub type ProgressListener = Box<dyn FnMut(f64, f64)>;

/// Tunables the controller is built with.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerSettings {
    pub hide_delay: ControlsHideDelay,
    pub skip_step: SkipStep,
    pub initial_volume: Volume,
    pub diagnostics_capacity: BufferCapacity,
}

impl PlayerSettings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            hide_delay: config.player.hide_delay(),
            skip_step: config.player.skip_step(),
            initial_volume: config.player.initial_volume(),
            diagnostics_capacity: config.diagnostics.capacity(),
        }
    }
}

/// Playback control state machine for one media source at a time.
pub struct PlaybackController<M, F, S>
where
    M: MediaPrimitive,
    F: FullscreenHost,
    S: Scheduler,
{
    media: M,
    fullscreen: F,
    scheduler: S,
    settings: PlayerSettings,
    state: PlaybackState,
    phase: LoadPhase,
    source: Option<String>,
    countdown: InactivityCountdown,
    events: UnboundedReceiver<MediaEvent>,
    media_subscription: Option<SubscriptionId>,
    fullscreen_subscription: Option<SubscriptionId>,
    progress_listener: Option<ProgressListener>,
    diagnostics: DiagnosticsCollector,
    disposed: bool,
}

impl<M, F, S> PlaybackController<M, F, S>
where
    M: MediaPrimitive,
    F: FullscreenHost,
    S: Scheduler,
{
    /// Creates a controller and subscribes to both hosts.
    ///
    /// The initial snapshot shows the controls, uses the configured volume and
    /// mirrors the host's current fullscreen status.
    pub fn new(mut media: M, mut fullscreen: F, scheduler: S, settings: PlayerSettings) -> Self {
        let (sink, events) = unbounded_channel();
        let media_subscription = media.subscribe(sink.clone());
        let fullscreen_subscription = fullscreen.subscribe(sink);
        let state = PlaybackState::initial(settings.initial_volume, fullscreen.is_fullscreen());

        Self {
            media,
            fullscreen,
            scheduler,
            settings,
            state,
            phase: LoadPhase::Idle,
            source: None,
            countdown: InactivityCountdown::new(settings.hide_delay),
            events,
            media_subscription: Some(media_subscription),
            fullscreen_subscription: Some(fullscreen_subscription),
            progress_listener: None,
            diagnostics: DiagnosticsCollector::new(settings.diagnostics_capacity),
            disposed: false,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[must_use]
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Summary of the playback dimension.
    #[must_use]
    pub fn status(&self) -> PlaybackStatus {
        PlaybackStatus::derive(self.phase, self.state.is_playing, self.state.is_buffering)
    }

    /// URL of the loaded source.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    #[must_use]
    pub fn settings(&self) -> &PlayerSettings {
        &self.settings
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Id of the pending auto-hide timer.
    #[must_use]
    pub fn pending_timer(&self) -> Option<TimerId> {
        self.countdown.pending()
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    #[must_use]
    pub fn media(&self) -> &M {
        &self.media
    }

    /// Direct access to the media host, e.g. to simulate progress.
    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    #[must_use]
    pub fn fullscreen_host(&self) -> &F {
        &self.fullscreen
    }

    pub fn fullscreen_host_mut(&mut self) -> &mut F {
        &mut self.fullscreen
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Registers the callback invoked on every time update.
    pub fn set_progress_listener<L>(&mut self, listener: L)
    where
        L: FnMut(f64, f64) + 'static,
    {
        self.progress_listener = Some(Box::new(listener));
    }

    pub fn clear_progress_listener(&mut self) {
        self.progress_listener = None;
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Hands a new source to the media primitive and waits for its metadata.
    pub fn load(&mut self, url: &str) {
        if self.rejects("load") {
            return;
        }
        log::debug!("loading source {url}");
        self.diagnostics.log_action(PlayerAction::LoadSource {
            url: url.to_string(),
        });
        self.media.load(url);
        self.media.set_volume(self.state.volume);
        self.media.set_muted(self.state.is_muted);
        self.source = Some(url.to_string());
        self.phase = LoadPhase::Loading;
        self.state = self.state.reset_for_load();
    }

    /// Pauses when playing, plays otherwise.
    ///
    /// `is_playing` only changes once the primitive confirms.
    pub fn toggle_playback(&mut self) {
        if self.rejects("toggle_playback") {
            return;
        }
        self.diagnostics.log_action(PlayerAction::TogglePlayback);
        if self.state.is_playing {
            log::debug!("requesting pause");
            self.media.pause();
        } else {
            log::debug!("requesting play");
            self.media.play();
        }
    }

    /// Moves to `target` seconds, clamped to `[0, duration]` (or `[0, ∞)`
    /// while the duration is unknown).
    ///
    /// Non-finite targets are ignored.
    pub fn seek(&mut self, target: f64) {
        if self.rejects("seek") {
            return;
        }
        if !target.is_finite() {
            log::warn!("ignoring seek to non-finite position {target}");
            return;
        }
        let position = self.clamp_position(target);
        self.diagnostics.log_action(PlayerAction::Seek {
            position_secs: position,
        });
        self.seek_to(position);
    }

    /// Jumps `delta` seconds from the current position, clamped like [`seek`].
    ///
    /// [`seek`]: Self::seek
    pub fn skip(&mut self, delta: f64) {
        if self.rejects("skip") {
            return;
        }
        if !delta.is_finite() {
            log::warn!("ignoring skip by non-finite offset {delta}");
            return;
        }
        self.diagnostics
            .log_action(PlayerAction::Skip { delta_secs: delta });
        let position = self.clamp_position(self.state.current_time + delta);
        self.seek_to(position);
    }

    /// Skips forward by the configured step.
    pub fn skip_forward(&mut self) {
        self.skip(self.settings.skip_step.value());
    }

    /// Skips backward by the configured step.
    pub fn skip_backward(&mut self) {
        self.skip(-self.settings.skip_step.value());
    }

    /// Sets the mute flag. The stored volume is left untouched.
    pub fn set_muted(&mut self, muted: bool) {
        if self.rejects("set_muted") {
            return;
        }
        log::debug!("setting muted = {muted}");
        self.diagnostics.log_action(PlayerAction::SetMuted { muted });
        self.media.set_muted(muted);
        self.state = self.state.with_muted(muted);
    }

    pub fn toggle_mute(&mut self) {
        self.set_muted(!self.state.is_muted);
    }

    /// Sets the volume.
    ///
    /// A volume of 0 also mutes; a positive volume while muted also unmutes.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::InvalidArgument`] for values outside `[0, 1]`
    /// (including NaN), also after teardown. The state is left unchanged.
    pub fn set_volume(&mut self, volume: f64) -> Result<(), PlaybackError> {
        let volume = Volume::try_new(volume).inspect_err(|err| {
            log::warn!("rejecting volume change: {err}");
            self.diagnostics
                .log_action(PlayerAction::RejectedVolume { volume });
        })?;
        if self.rejects("set_volume") {
            return Ok(());
        }
        self.apply_volume(volume);
        Ok(())
    }

    /// Raises the volume by one step, saturating at 1.
    pub fn volume_up(&mut self) {
        if self.rejects("volume_up") {
            return;
        }
        self.apply_volume(Volume::new(self.state.volume).increase());
    }

    /// Lowers the volume by one step, saturating at 0 (which mutes).
    pub fn volume_down(&mut self) {
        if self.rejects("volume_down") {
            return;
        }
        self.apply_volume(Volume::new(self.state.volume).decrease());
    }

    /// Requests or exits fullscreen depending on the host's current status.
    ///
    /// `is_fullscreen` only changes once the host confirms.
    pub fn toggle_fullscreen(&mut self) {
        if self.rejects("toggle_fullscreen") {
            return;
        }
        self.diagnostics.log_action(PlayerAction::ToggleFullscreen);
        if self.fullscreen.is_fullscreen() {
            log::debug!("requesting fullscreen exit");
            self.fullscreen.exit_fullscreen();
        } else {
            log::debug!("requesting fullscreen");
            self.fullscreen.request_fullscreen();
        }
    }

    /// Shows the controls and restarts the auto-hide countdown.
    pub fn notify_activity(&mut self) {
        if self.rejects("notify_activity") {
            return;
        }
        self.state = self.state.with_controls_visible(true);
        self.countdown.restart(&mut self.scheduler);
    }

    /// Click on the player surface: toggles playback when the controls are
    /// shown, otherwise only reveals them.
    pub fn click_surface(&mut self) {
        if self.rejects("click_surface") {
            return;
        }
        self.diagnostics.log_action(PlayerAction::ClickSurface);
        if self.state.is_controls_visible {
            self.toggle_playback();
        } else {
            self.notify_activity();
        }
    }

    /// Runs a keyboard shortcut. Every shortcut counts as activity.
    pub fn apply_shortcut(&mut self, shortcut: PlayerShortcut) {
        if self.rejects("apply_shortcut") {
            return;
        }
        self.notify_activity();
        match shortcut {
            PlayerShortcut::TogglePlayback => self.toggle_playback(),
            PlayerShortcut::SkipBackward => self.skip_backward(),
            PlayerShortcut::SkipForward => self.skip_forward(),
            PlayerShortcut::VolumeUp => self.volume_up(),
            PlayerShortcut::VolumeDown => self.volume_down(),
            PlayerShortcut::ToggleMute => self.toggle_mute(),
            PlayerShortcut::ToggleFullscreen => self.toggle_fullscreen(),
        }
    }

    /// Releases everything the controller holds on the hosts.
    ///
    /// Cancels the auto-hide timer, unsubscribes from both hosts and stops
    /// accepting commands and events. Calling it twice is a no-op.
    pub fn teardown(&mut self) {
        if self.disposed {
            return;
        }
        log::debug!("tearing down playback controller");
        self.diagnostics.log_action(PlayerAction::Teardown);
        self.countdown.cancel(&mut self.scheduler);
        if let Some(id) = self.media_subscription.take() {
            self.media.unsubscribe(id);
        }
        if let Some(id) = self.fullscreen_subscription.take() {
            self.fullscreen.unsubscribe(id);
        }
        self.events.close();
        self.progress_listener = None;
        self.disposed = true;
    }

    // =========================================================================
    // Host Events
    // =========================================================================

    /// Applies every pending host event in the order raised.
    ///
    /// Returns how many events were applied.
    pub fn pump_events(&mut self) -> usize {
        let mut applied = 0;
        while !self.disposed {
            let Ok(event) = self.events.try_recv() else {
                break;
            };
            self.handle_event(event);
            applied += 1;
        }
        applied
    }

    /// Routes one event to its sink.
    pub fn handle_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::LoadedMetadata { duration_secs } => self.on_metadata_loaded(duration_secs),
            MediaEvent::TimeUpdate { current_secs } => self.on_time_update(current_secs),
            MediaEvent::Play => self.on_play(),
            MediaEvent::Pause => self.on_pause(),
            MediaEvent::Ended => self.on_ended(),
            MediaEvent::VolumeChange { volume, muted } => self.on_volume_change(volume, muted),
            MediaEvent::Waiting => self.on_buffering(),
            MediaEvent::Playing => self.on_resumed(),
            MediaEvent::FullscreenChange { is_fullscreen } => {
                self.on_fullscreen_change(is_fullscreen);
            }
        }
    }

    /// Records the duration and marks the source ready.
    ///
    /// Non-finite or negative durations (live streams) leave the duration
    /// unknown, so seeking stays unbounded.
    pub fn on_metadata_loaded(&mut self, duration: f64) {
        if self.ignores_event("metadata") {
            return;
        }
        if duration.is_finite() && duration >= 0.0 {
            self.state = self.state.with_duration(duration);
        } else {
            log::warn!("metadata reported unusable duration {duration}; treating as unknown");
        }
        self.phase = LoadPhase::Ready;
    }

    pub fn on_time_update(&mut self, time: f64) {
        if self.ignores_event("time update") {
            return;
        }
        if !time.is_finite() {
            log::warn!("ignoring non-finite time update {time}");
            return;
        }
        self.state = self.state.with_current_time(time);
        if let Some(listener) = self.progress_listener.as_mut() {
            listener(self.state.current_time, self.state.duration);
        }
    }

    pub fn on_play(&mut self) {
        if self.ignores_event("play") {
            return;
        }
        self.state = self.state.with_playing(true);
    }

    pub fn on_pause(&mut self) {
        if self.ignores_event("pause") {
            return;
        }
        self.state = self.state.with_playing(false);
    }

    /// End of media stops playback like a pause.
    pub fn on_ended(&mut self) {
        if self.ignores_event("ended") {
            return;
        }
        self.state = self.state.with_playing(false);
    }

    /// Host-reported volume; out-of-range values are clamped.
    pub fn on_volume_change(&mut self, volume: f64, muted: bool) {
        if self.ignores_event("volume change") {
            return;
        }
        self.state = self.state.with_volume(Volume::new(volume), muted);
    }

    pub fn on_buffering(&mut self) {
        if self.ignores_event("buffering") {
            return;
        }
        self.state = self.state.with_buffering(true);
    }

    pub fn on_resumed(&mut self) {
        if self.ignores_event("resumed") {
            return;
        }
        self.state = self.state.with_buffering(false);
    }

    pub fn on_fullscreen_change(&mut self, is_fullscreen: bool) {
        if self.ignores_event("fullscreen change") {
            return;
        }
        self.state = self.state.with_fullscreen(is_fullscreen);
    }

    /// Called by the host when a scheduler timer fires.
    ///
    /// Hides the controls if `timer` is the current countdown and playback is
    /// running. Superseded timers are ignored.
    pub fn on_inactivity_timeout(&mut self, timer: TimerId) {
        if self.ignores_event("inactivity timeout") {
            return;
        }
        if !self.countdown.expire(timer) {
            log::debug!("ignoring stale inactivity timer {}", timer.value());
            return;
        }
        if self.state.is_playing {
            self.state = self.state.with_controls_visible(false);
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn clamp_position(&self, target: f64) -> f64 {
        target.clamp(0.0, self.state.seek_upper_bound())
    }

    fn seek_to(&mut self, position: f64) {
        log::debug!("seeking to {position:.3}s");
        self.media.set_current_time(position);
        self.state = self.state.with_current_time(position);
    }

    fn apply_volume(&mut self, volume: Volume) {
        let muted = volume.is_silent();
        log::debug!("setting volume = {:.2} (muted = {muted})", volume.value());
        self.diagnostics.log_action(PlayerAction::SetVolume {
            volume: volume.value(),
        });
        self.media.set_volume(volume.value());
        if muted != self.state.is_muted {
            self.media.set_muted(muted);
        }
        self.state = self.state.with_volume(volume, muted);
    }

    fn rejects(&self, command: &str) -> bool {
        if self.disposed {
            log::warn!("ignoring {command} after teardown");
        }
        self.disposed
    }

    fn ignores_event(&self, event: &str) -> bool {
        if self.disposed {
            log::debug!("dropping {event} event after teardown");
        }
        self.disposed
    }
}

impl<M, F, S> Drop for PlaybackController<M, F, S>
where
    M: MediaPrimitive,
    F: FullscreenHost,
    S: Scheduler,
{
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<M, F, S> std::fmt::Debug for PlaybackController<M, F, S>
where
    M: MediaPrimitive,
    F: FullscreenHost,
    S: Scheduler,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackController")
            .field("state", &self.state)
            .field("phase", &self.phase)
            .field("source", &self.source)
            .field("settings", &self.settings)
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}
