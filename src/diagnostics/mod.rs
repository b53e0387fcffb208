// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording player activity.
//!
//! # Architecture
//!
//! - [`ActionLog`]: Bounded log of recent events that counts what it drops
//! - [`DiagnosticEvent`]: A [`PlayerAction`] with its sequence number and timestamp
//! - [`DiagnosticsCollector`]: Bounded log the playback controller writes into
//! - [`BufferCapacity`]: Newtype for validated buffer capacity bounds

mod action_log;
mod collector;
mod events;

pub use action_log::{ActionLog, BufferCapacity};
pub use collector::DiagnosticsCollector;
pub use events::{DiagnosticEvent, PlayerAction};
