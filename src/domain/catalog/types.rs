// SPDX-License-Identifier: MPL-2.0
//! Catalog entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Skill level a video targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// All levels, easiest first.
    pub const ALL: [Difficulty; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Lowercase identifier, as stored in catalog files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        };
        f.write_str(label)
    }
}

/// Returned when a string names no known difficulty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDifficultyError(pub String);

impl fmt::Display for ParseDifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown difficulty '{}' (expected beginner, intermediate or advanced)",
            self.0
        )
    }
}

impl std::error::Error for ParseDifficultyError {}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDifficultyError(s.to_string()))
    }
}

/// Public profile of the person who published a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
}

/// A published video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail_url: String,
    pub video_url: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Length in seconds.
    #[serde(default)]
    pub duration_secs: f64,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub dislike_count: u64,
    pub creator: Creator,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: String,
    pub difficulty: Difficulty,
}

impl Video {
    /// Identifier of the publishing creator.
    #[must_use]
    pub fn creator_id(&self) -> &str {
        &self.creator.id
    }

    /// Returns true if the video carries the given tag (exact match).
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Title given to an upload that was published without one.
pub const DEFAULT_VIDEO_TITLE: &str = "Untitled Video";

/// Category given to an upload that names none.
pub const DEFAULT_VIDEO_CATEGORY: &str = "Web Development";

/// Editable fields of a video, as submitted from an upload or edit form.
///
/// `None` keeps the current value on edit and falls back to a default on
/// upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub video_url: Option<String>,
    pub duration_secs: Option<f64>,
    pub tags: Option<Vec<String>>,
    pub category: Option<String>,
    pub difficulty: Option<Difficulty>,
}

impl VideoDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_video_url(mut self, url: impl Into<String>) -> Self {
        self.video_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Builds a new video with zeroed counters, stamped at `now`.
    #[must_use]
    pub fn into_video(self, id: String, creator: Creator, now: DateTime<Utc>) -> Video {
        let thumbnail_url = self
            .thumbnail_url
            .unwrap_or_else(|| format!("https://picsum.photos/seed/{id}/640/360"));
        Video {
            title: self
                .title
                .unwrap_or_else(|| DEFAULT_VIDEO_TITLE.to_string()),
            description: self.description.unwrap_or_default(),
            thumbnail_url,
            video_url: self.video_url.unwrap_or_default(),
            created_at: now,
            updated_at: Some(now),
            duration_secs: self.duration_secs.unwrap_or(0.0),
            view_count: 0,
            like_count: 0,
            dislike_count: 0,
            creator,
            tags: self.tags.unwrap_or_default(),
            category: self
                .category
                .unwrap_or_else(|| DEFAULT_VIDEO_CATEGORY.to_string()),
            difficulty: self.difficulty.unwrap_or(Difficulty::Intermediate),
            id,
        }
    }

    /// Overwrites the fields this draft sets. Counters and creator are kept.
    pub fn apply_to(self, video: &mut Video) {
        if let Some(title) = self.title {
            video.title = title;
        }
        if let Some(description) = self.description {
            video.description = description;
        }
        if let Some(url) = self.thumbnail_url {
            video.thumbnail_url = url;
        }
        if let Some(url) = self.video_url {
            video.video_url = url;
        }
        if let Some(secs) = self.duration_secs {
            video.duration_secs = secs;
        }
        if let Some(tags) = self.tags {
            video.tags = tags;
        }
        if let Some(category) = self.category {
            video.category = category;
        }
        if let Some(difficulty) = self.difficulty {
            video.difficulty = difficulty;
        }
    }
}
