// SPDX-License-Identifier: MPL-2.0
//! Catalog domain types.
//!
//! - [`Video`]: A published video and its creator
//! - [`Difficulty`]: Skill level a video targets
//! - [`VideoDraft`]: Upload and edit form fields
//! - [`VideoFilter`]: Search criteria combined with AND logic
//! - [`format_view_count`]: Compact view counter used on video cards

mod display;
mod filter;
mod types;

pub use display::format_view_count;
pub use filter::VideoFilter;
pub use types::{
    Creator, Difficulty, ParseDifficultyError, Video, VideoDraft, DEFAULT_VIDEO_CATEGORY,
    DEFAULT_VIDEO_TITLE,
};
