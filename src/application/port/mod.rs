// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! The playback controller never talks to a concrete media element, window
//! or clock. It drives these traits, and the host supplies implementations.
//!
//! # Available Ports
//!
//! - [`media`]: The media primitive (load, play, pause, seek, volume, mute)
//!   and the lifecycle events it raises
//! - [`fullscreen`]: Fullscreen requests scoped to the player container
//! - [`scheduler`]: One-shot cancellable timers
//!
//! # Design Notes
//!
//! - Hosts deliver lifecycle events through an [`EventSink`] channel; the
//!   controller drains it on the host's event loop
//! - Commands are fire-and-forget: a host that refuses a request (blocked
//!   autoplay, denied fullscreen) simply never emits the confirming event

pub mod fullscreen;
pub mod media;
pub mod scheduler;

pub use fullscreen::FullscreenHost;
pub use media::{EventSink, MediaEvent, MediaPrimitive, SubscriptionId};
pub use scheduler::{Scheduler, TimerId};
