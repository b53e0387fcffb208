// SPDX-License-Identifier: MPL-2.0
//! Query services (CQRS read-side).
//!
//! # Available Services
//!
//! - [`catalog`]: Search and feeds over the video catalog (`Catalog`)

pub mod catalog;

pub use catalog::Catalog;
