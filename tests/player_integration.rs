// SPDX-License-Identifier: MPL-2.0
use approx::assert_abs_diff_eq;
use codecast::application::port::{
    EventSink, FullscreenHost, MediaEvent, MediaPrimitive, SubscriptionId,
};
use codecast::config::Config;
use codecast::domain::video::{LoadPhase, PlaybackStatus};
use codecast::infrastructure::{HeadlessFullscreen, ManualScheduler};
use codecast::video_player::{
    create_headless_player, HeadlessPlayer, PlaybackController, PlayerSettings, PlayerShortcut,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

const SOURCE: &str = "https://cdn.example/lesson.mp4";

fn deliver_timers(player: &mut HeadlessPlayer, by: Duration) {
    for timer in player.scheduler_mut().advance(by) {
        player.on_inactivity_timeout(timer);
    }
}

#[test]
fn test_full_viewing_session() {
    let mut player = create_headless_player(90.0, &Config::default());
    let progress = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&progress);
    player.set_progress_listener(move |time, _| sink.borrow_mut().push(time));

    player.load(SOURCE);
    assert_eq!(player.status(), PlaybackStatus::Loading);
    player.media_mut().complete_metadata();
    player.pump_events();
    assert_eq!(player.status(), PlaybackStatus::Paused);

    player.click_surface();
    player.pump_events();
    assert_eq!(player.status(), PlaybackStatus::Playing);

    player.notify_activity();
    player.media_mut().advance(2.0);
    deliver_timers(&mut player, Duration::from_secs(2));
    player.pump_events();
    assert!(player.state().is_controls_visible);

    player.media_mut().advance(2.0);
    deliver_timers(&mut player, Duration::from_secs(2));
    player.pump_events();
    assert!(!player.state().is_controls_visible);

    if let Some(shortcut) = PlayerShortcut::from_key("ArrowRight") {
        player.apply_shortcut(shortcut);
    }
    player.pump_events();
    assert!(player.state().is_controls_visible);
    assert_abs_diff_eq!(player.state().current_time, 14.0);

    player.media_mut().advance(100.0);
    player.pump_events();
    assert!(!player.state().is_playing);
    assert_abs_diff_eq!(player.state().current_time, 90.0);
    assert_abs_diff_eq!(progress.borrow().last().copied().unwrap_or_default(), 90.0);

    player.teardown();
    assert_eq!(player.media().subscriber_count(), 0);
    assert_eq!(player.phase(), LoadPhase::Ready);
}

#[test]
fn test_seek_before_and_after_metadata() {
    let mut player = create_headless_player(30.0, &Config::default());
    player.load(SOURCE);
    player.seek(50.0);
    assert_abs_diff_eq!(player.state().current_time, 50.0);

    player.media_mut().complete_metadata();
    player.pump_events();
    assert_abs_diff_eq!(player.state().duration, 30.0);

    player.seek(50.0);
    assert_abs_diff_eq!(player.state().current_time, 30.0);
}

#[test]
fn test_stall_and_recovery_while_playing() {
    let mut player = create_headless_player(60.0, &Config::default());
    player.load(SOURCE);
    player.media_mut().complete_metadata();
    player.toggle_playback();
    player.pump_events();

    player.media_mut().stall();
    player.pump_events();
    assert!(player.state().is_buffering);
    assert!(player.state().is_playing);
    assert!(player.status().is_playing_or_will_resume());

    player.media_mut().recover();
    player.pump_events();
    assert!(!player.state().is_buffering);
    assert!(player.state().is_playing);
}

#[test]
fn test_volume_scenario_zero_then_unmute() {
    let mut player = create_headless_player(60.0, &Config::default());
    player.load(SOURCE);
    player.set_volume(0.5).expect("in range");
    player.set_volume(0.0).expect("in range");
    player.pump_events();
    assert_abs_diff_eq!(player.state().volume, 0.0);
    assert!(player.state().is_muted);

    player.set_muted(false);
    player.pump_events();
    assert_abs_diff_eq!(player.state().volume, 0.0);
    assert!(!player.state().is_muted);
    assert!(!player.media().muted());
}

/// Media host that records every call and never raises events on its own.
#[derive(Default)]
struct RecordingMedia {
    calls: Rc<RefCell<Vec<String>>>,
    sinks: Vec<(SubscriptionId, EventSink)>,
    volume: f64,
    muted: bool,
}

impl RecordingMedia {
    fn record(&self, call: impl Into<String>) {
        self.calls.borrow_mut().push(call.into());
    }
}

impl MediaPrimitive for RecordingMedia {
    fn load(&mut self, url: &str) {
        self.record(format!("load {url}"));
    }

    fn play(&mut self) {
        self.record("play");
    }

    fn pause(&mut self) {
        self.record("pause");
    }

    fn current_time(&self) -> f64 {
        0.0
    }

    fn set_current_time(&mut self, secs: f64) {
        self.record(format!("seek {secs}"));
    }

    fn duration(&self) -> Option<f64> {
        None
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
        self.record(format!("volume {volume}"));
    }

    fn muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.record(format!("muted {muted}"));
    }

    fn subscribe(&mut self, sink: EventSink) -> SubscriptionId {
        let id = SubscriptionId::new(self.sinks.len() as u64 + 1);
        self.sinks.push((id, sink));
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.sinks.retain(|(sid, _)| *sid != id);
        self.record("unsubscribe");
    }
}

#[test]
fn test_controller_drives_custom_host() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let media = RecordingMedia {
        calls: Rc::clone(&calls),
        ..RecordingMedia::default()
    };
    let mut settings = PlayerSettings::default();
    settings.initial_volume = codecast::domain::video::Volume::new(0.8);
    let mut player = PlaybackController::new(
        media,
        HeadlessFullscreen::new(),
        ManualScheduler::new(),
        settings,
    );

    player.load(SOURCE);
    player.toggle_playback();
    player.toggle_playback();
    assert!(!player.state().is_playing);

    player.seek(-5.0);
    player.handle_event(MediaEvent::Play);
    assert!(player.state().is_playing);
    player.toggle_playback();

    // Events pushed by the host after teardown are never applied.
    let sink = player.media().sinks[0].1.clone();
    drop(player);
    assert!(sink.send(MediaEvent::Pause).is_err());

    assert_eq!(
        calls.borrow().as_slice(),
        [
            format!("load {SOURCE}"),
            "volume 0.8".to_string(),
            "muted false".to_string(),
            "play".to_string(),
            "play".to_string(),
            "seek 0".to_string(),
            "pause".to_string(),
            "unsubscribe".to_string(),
        ]
    );
}

#[test]
fn test_denied_fullscreen_then_granted() {
    let mut player = create_headless_player(60.0, &Config::default());
    player.fullscreen_host_mut().set_deny_requests(true);
    player.apply_shortcut(PlayerShortcut::ToggleFullscreen);
    player.pump_events();
    assert!(!player.state().is_fullscreen);

    player.fullscreen_host_mut().set_deny_requests(false);
    player.apply_shortcut(PlayerShortcut::ToggleFullscreen);
    player.pump_events();
    assert!(player.state().is_fullscreen);
    assert!(player.fullscreen_host().is_fullscreen());
}
