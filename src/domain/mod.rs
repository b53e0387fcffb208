// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types and business rules.
//!
//! This module contains value objects and rules that do not depend on any
//! host environment: no media primitive, no filesystem, no timers.
//!
//! # Modules
//!
//! - [`catalog`]: Catalog types ([`Video`](catalog::Video),
//!   [`Difficulty`](catalog::Difficulty), [`VideoFilter`](catalog::VideoFilter))
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`error`]: Domain error types ([`PlaybackError`](error::PlaybackError))
//! - [`video`]: Playback value objects ([`Volume`](video::Volume),
//!   [`SkipStep`](video::SkipStep), [`LoadPhase`](video::LoadPhase))

pub mod catalog;
pub mod diagnostics;
pub mod error;
pub mod video;
