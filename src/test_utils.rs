// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and shared fixtures.
//!
//! This module re-exports the `approx` crate's assertion macro for float comparison,
//! which properly handles floating-point precision issues that `assert_eq!` cannot.

pub use approx::assert_abs_diff_eq;

use crate::domain::catalog::{Creator, Difficulty, Video};
use chrono::{TimeZone, Utc};

/// Builds a catalog video for tests.
///
/// `day` offsets `created_at` from 2024-01-01, so larger values are newer.
pub fn sample_video(
    id: &str,
    tags: &[&str],
    category: &str,
    difficulty: Difficulty,
    view_count: u64,
    day: u32,
) -> Video {
    Video {
        id: id.to_string(),
        title: format!("Video {id}"),
        description: format!("Description of {id}"),
        thumbnail_url: format!("https://img.example/{id}.jpg"),
        video_url: format!("https://cdn.example/{id}.mp4"),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
            + chrono::Duration::days(i64::from(day)),
        updated_at: None,
        duration_secs: 600.0,
        view_count,
        like_count: 0,
        dislike_count: 0,
        creator: Creator {
            id: format!("creator-{}", day % 3),
            name: "Test Creator".to_string(),
            avatar: String::new(),
        },
        tags: tags.iter().map(ToString::to_string).collect(),
        category: category.to_string(),
        difficulty,
    }
}
