// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port` that ship with the crate. Real hosts (a browser
//! bridge, a native player) provide their own.
//!
//! # Available Adapters
//!
//! - [`headless`]: In-memory media element and fullscreen host that raise the
//!   same lifecycle events a real host would (implement [`MediaPrimitive`] and
//!   [`FullscreenHost`])
//! - [`scheduler`]: Deterministic timers advanced by hand (implements [`Scheduler`])
//!
//! [`MediaPrimitive`]: crate::application::port::MediaPrimitive
//! [`FullscreenHost`]: crate::application::port::FullscreenHost
//! [`Scheduler`]: crate::application::port::Scheduler

pub mod headless;
pub mod scheduler;

pub use headless::{HeadlessFullscreen, HeadlessMedia};
pub use scheduler::ManualScheduler;
