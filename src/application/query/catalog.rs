// SPDX-License-Identifier: MPL-2.0
//! Queries and edits over the video catalog.
//!
//! The catalog is loaded once from a TOML file (a list of `[[videos]]`
//! tables) and then queried in memory: search, tag and category listings,
//! and the home and watch page feeds. Creator uploads, edits, deletions and
//! view counting change the in-memory list; [`Catalog::save_to_path`] writes
//! it back.

use crate::domain::catalog::{Creator, Video, VideoDraft, VideoFilter};
use chrono::{DateTime, Utc};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// On-disk layout of a catalog file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    videos: Vec<Video>,
}

/// In-memory video collection, kept in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    videos: Vec<Video>,
}

impl Catalog {
    #[must_use]
    pub fn new(videos: Vec<Video>) -> Self {
        Self { videos }
    }

    /// Loads a catalog from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and [`Error::Catalog`]
    /// if it is not a valid catalog.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parses a catalog from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Catalog`] on malformed input.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|err| Error::Catalog(err.to_string()))?;
        log::debug!("catalog loaded with {} videos", file.videos.len());
        Ok(Self::new(file.videos))
    }

    /// Serializes the catalog back to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Catalog`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        let file = CatalogFile {
            videos: self.videos.clone(),
        };
        toml::to_string_pretty(&file).map_err(|err| Error::Catalog(err.to_string()))
    }

    /// Writes the catalog to a TOML file, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Catalog`] if serialization fails and [`Error::Io`] if
    /// the file cannot be written.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = self.to_toml_string()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    #[must_use]
    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Video> {
        self.videos.iter().find(|v| v.id == id)
    }

    /// Videos matching every active criterion, in catalog order.
    #[must_use]
    pub fn filter(&self, filter: &VideoFilter) -> Vec<&Video> {
        self.videos.iter().filter(|v| filter.matches(v)).collect()
    }

    /// Unique tags in first-seen order.
    #[must_use]
    pub fn all_tags(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.videos
            .iter()
            .flat_map(|v| v.tags.iter())
            .map(String::as_str)
            .filter(|tag| seen.insert(*tag))
            .collect()
    }

    /// Unique categories in first-seen order.
    #[must_use]
    pub fn all_categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.videos
            .iter()
            .map(|v| v.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }

    /// Videos published by the given creator, in catalog order.
    #[must_use]
    pub fn by_creator(&self, creator_id: &str) -> Vec<&Video> {
        self.videos
            .iter()
            .filter(|v| v.creator_id() == creator_id)
            .collect()
    }

    /// Newest uploads first.
    #[must_use]
    pub fn recent(&self, limit: usize) -> Vec<&Video> {
        let mut videos: Vec<&Video> = self.videos.iter().collect();
        videos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        videos.truncate(limit);
        videos
    }

    /// Most viewed first; equal view counts favour the newer upload.
    #[must_use]
    pub fn trending(&self, limit: usize) -> Vec<&Video> {
        let mut videos: Vec<&Video> = self.videos.iter().collect();
        videos.sort_by(|a, b| {
            b.view_count
                .cmp(&a.view_count)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        videos.truncate(limit);
        videos
    }

    /// Other videos sharing a tag, the category or the difficulty with `video_id`.
    ///
    /// Returns an empty list for unknown ids.
    #[must_use]
    pub fn related(&self, video_id: &str, limit: usize) -> Vec<&Video> {
        let Some(current) = self.get(video_id) else {
            return Vec::new();
        };
        self.videos
            .iter()
            .filter(|v| v.id != current.id)
            .filter(|v| {
                v.tags.iter().any(|tag| current.has_tag(tag))
                    || v.category == current.category
                    || v.difficulty == current.difficulty
            })
            .take(limit)
            .collect()
    }

    /// Publishes a new upload at the front of the catalog.
    ///
    /// The id is derived from `now` in milliseconds, with a numeric suffix
    /// when another video already uses it.
    pub fn add_video(
        &mut self,
        draft: VideoDraft,
        creator: Creator,
        now: DateTime<Utc>,
    ) -> &Video {
        let base = format!("video-{}", now.timestamp_millis());
        let mut id = base.clone();
        let mut suffix = 2;
        while self.get(&id).is_some() {
            id = format!("{base}-{suffix}");
            suffix += 1;
        }
        log::info!("video {id} published by {}", creator.id);
        self.videos.insert(0, draft.into_video(id, creator, now));
        &self.videos[0]
    }

    /// Applies the fields set in `draft` and stamps `updated_at`.
    ///
    /// Returns false for unknown ids.
    pub fn update_video(&mut self, id: &str, draft: VideoDraft, now: DateTime<Utc>) -> bool {
        let Some(video) = self.videos.iter_mut().find(|v| v.id == id) else {
            log::warn!("cannot update unknown video {id}");
            return false;
        };
        draft.apply_to(video);
        video.updated_at = Some(now);
        true
    }

    /// Removes a video, returning it if it existed.
    pub fn remove_video(&mut self, id: &str) -> Option<Video> {
        let index = self.videos.iter().position(|v| v.id == id)?;
        Some(self.videos.remove(index))
    }

    /// Counts one more view, returning the new total.
    pub fn increment_view(&mut self, id: &str) -> Option<u64> {
        let video = self.videos.iter_mut().find(|v| v.id == id)?;
        video.view_count = video.view_count.saturating_add(1);
        Some(video.view_count)
    }
}
