// SPDX-License-Identifier: MPL-2.0
//! `codecast` is the headless core of the CodeCast video client.
//!
//! It provides the playback controller that drives a host media element,
//! the in-memory video catalog with its search and feed queries, and the
//! viewer's watch-later and history library.
//!
//! # Architecture
//!
//! - [`domain`]: Value objects and catalog types, free of host concerns
//! - [`application`]: Ports to the host and catalog queries
//! - [`infrastructure`]: In-memory adapters implementing the ports
//! - [`video_player`]: Playback controller built on the ports
//! - [`app`]: Paths, persistence and the command-line front end

#![doc(html_root_url = "https://docs.rs/codecast/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod video_player;

#[cfg(test)]
pub(crate) mod test_utils;
