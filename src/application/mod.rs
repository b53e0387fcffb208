// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions for the host capabilities the player drives
//! - [`query`]: Query services over the video catalog
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The playback controller and CLI use application layer services
//!
//! # Example
//!
//! ```ignore
//! use codecast::application::port::MediaPrimitive;
//! use codecast::application::query::Catalog;
//!
//! // Infrastructure implements the port trait
//! struct BrowserVideo { /* ... */ }
//! impl MediaPrimitive for BrowserVideo { /* ... */ }
//! ```

pub mod port;
pub mod query;
