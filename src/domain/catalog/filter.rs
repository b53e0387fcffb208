// SPDX-License-Identifier: MPL-2.0
//! Video search filter.
//!
//! All active criteria must match for a video to be included (AND logic).
//! When no criterion is active, every video matches.
//!
//! - **query**: case-insensitive substring of the title or the description
//! - **tags**: the video carries ANY of the selected tags
//! - **category**: exact match
//! - **difficulty**: exact match

use super::{Difficulty, Video};

/// Combined search criteria.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VideoFilter {
    /// Free-text query. Empty strings are treated as no query.
    pub query: Option<String>,
    /// Selected tags. Empty means no tag filtering.
    pub tags: Vec<String>,
    /// Selected category.
    pub category: Option<String>,
    /// Selected difficulty.
    pub difficulty: Option<Difficulty>,
}

impl VideoFilter {
    /// Creates a new filter with no active criteria (matches all videos).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text query.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Adds a tag to the selection.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Selects the tag if absent, deselects it otherwise.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag.to_string());
        }
    }

    fn active_query(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.is_empty())
    }

    /// Returns `true` if the video satisfies every active criterion.
    #[must_use]
    pub fn matches(&self, video: &Video) -> bool {
        if let Some(query) = self.active_query() {
            let query = query.to_lowercase();
            if !video.title.to_lowercase().contains(&query)
                && !video.description.to_lowercase().contains(&query)
            {
                return false;
            }
        }

        if !self.tags.is_empty() && !self.tags.iter().any(|tag| video.has_tag(tag)) {
            return false;
        }

        if let Some(category) = &self.category {
            if &video.category != category {
                return false;
            }
        }

        if let Some(difficulty) = self.difficulty {
            if video.difficulty != difficulty {
                return false;
            }
        }

        true
    }

    /// Returns `true` if any criterion is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active_count() > 0
    }

    /// Returns the number of active criteria.
    #[must_use]
    pub fn active_count(&self) -> usize {
        [
            self.active_query().is_some(),
            !self.tags.is_empty(),
            self.category.is_some(),
            self.difficulty.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    /// Returns `true` if any criterion other than the free-text query is active.
    ///
    /// Search results are labelled "(Filtered)" in that case.
    #[must_use]
    pub fn has_refinements(&self) -> bool {
        !self.tags.is_empty() || self.category.is_some() || self.difficulty.is_some()
    }

    /// Resets all criteria.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Creator;
    use chrono::{TimeZone, Utc};

    fn video(title: &str, description: &str, tags: &[&str], category: &str, difficulty: Difficulty) -> Video {
        Video {
            id: title.to_lowercase().replace(' ', "-"),
            title: title.to_string(),
            description: description.to_string(),
            thumbnail_url: String::new(),
            video_url: String::new(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            updated_at: None,
            duration_secs: 600.0,
            view_count: 0,
            like_count: 0,
            dislike_count: 0,
            creator: Creator {
                id: "user-1".to_string(),
                name: "Alex".to_string(),
                avatar: String::new(),
            },
            tags: tags.iter().map(ToString::to_string).collect(),
            category: category.to_string(),
            difficulty,
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = VideoFilter::new();
        let v = video("Intro", "", &[], "Web Development", Difficulty::Beginner);
        assert!(filter.matches(&v));
        assert!(!filter.is_active());
        assert_eq!(filter.active_count(), 0);
    }

    #[test]
    fn empty_query_string_is_inactive() {
        let filter = VideoFilter::new().with_query("");
        assert!(!filter.is_active());
    }

    #[test]
    fn query_matches_title_or_description_case_insensitively() {
        let v = video(
            "Async Rust",
            "Futures and executors explained",
            &[],
            "Backend Development",
            Difficulty::Advanced,
        );
        assert!(VideoFilter::new().with_query("async").matches(&v));
        assert!(VideoFilter::new().with_query("EXECUTORS").matches(&v));
        assert!(!VideoFilter::new().with_query("python").matches(&v));
    }

    #[test]
    fn tags_match_any_selected_tag() {
        let v = video("Hooks", "", &["React", "TypeScript"], "Frontend Development", Difficulty::Beginner);
        let filter = VideoFilter::new().with_tag("Go").with_tag("React");
        assert!(filter.matches(&v));
        assert!(!VideoFilter::new().with_tag("Go").matches(&v));
    }

    #[test]
    fn criteria_combine_with_and() {
        let v = video("Docker basics", "", &["Docker"], "DevOps", Difficulty::Beginner);
        let matching = VideoFilter::new()
            .with_tag("Docker")
            .with_category("DevOps")
            .with_difficulty(Difficulty::Beginner);
        assert!(matching.matches(&v));
        assert_eq!(matching.active_count(), 3);

        let wrong_level = matching.clone().with_difficulty(Difficulty::Advanced);
        assert!(!wrong_level.matches(&v));
    }

    #[test]
    fn toggle_tag_adds_then_removes() {
        let mut filter = VideoFilter::new();
        filter.toggle_tag("Rust");
        assert_eq!(filter.tags, vec!["Rust".to_string()]);
        filter.toggle_tag("Rust");
        assert!(filter.tags.is_empty());
    }

    #[test]
    fn refinements_ignore_query() {
        assert!(!VideoFilter::new().with_query("rust").has_refinements());
        assert!(VideoFilter::new().with_category("Cloud").has_refinements());
    }

    #[test]
    fn clear_resets_everything() {
        let mut filter = VideoFilter::new()
            .with_query("x")
            .with_tag("Go")
            .with_difficulty(Difficulty::Advanced);
        filter.clear();
        assert_eq!(filter, VideoFilter::default());
    }
}
