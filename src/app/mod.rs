// SPDX-License-Identifier: MPL-2.0
//! Application shell around the library crate.
//!
//! Resolves where settings and viewer data live, persists the viewer library
//! and exposes the command-line front end used by the `codecast` binary.

pub mod cli;
pub mod library;
pub mod paths;

pub use cli::{CliArgs, Command};
pub use library::ViewerLibrary;
