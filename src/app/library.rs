// SPDX-License-Identifier: MPL-2.0
//! Viewer library persistence using CBOR format.
//!
//! The library holds the viewer's personal lists: videos saved for later and
//! videos recently watched. It is application-managed state, stored apart from
//! the user-editable `settings.toml`.
//!
//! # Path Resolution
//!
//! 1. Use `load_from()`/`save_to()` with explicit path override
//! 2. Pass `--data-dir` or set `CODECAST_DATA_DIR`
//! 3. Falls back to platform-specific data directory

use super::paths;
use crate::application::query::Catalog;
use crate::config::RECENTLY_WATCHED_LIMIT;
use crate::domain::catalog::Video;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// Library file name within the app data directory.
const LIBRARY_FILE: &str = "library.cbor";

/// Watch-later and recently-watched lists, storing video ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewerLibrary {
    /// Saved videos, in the order they were added.
    #[serde(default)]
    pub watch_later: Vec<String>,

    /// Most recently watched first, at most [`RECENTLY_WATCHED_LIMIT`] entries.
    #[serde(default)]
    pub recently_watched: Vec<String>,
}

impl ViewerLibrary {
    /// Adds the video to the watch-later list, or removes it if already there.
    ///
    /// Returns `true` when the video was added.
    pub fn toggle_watch_later(&mut self, video_id: &str) -> bool {
        if let Some(pos) = self.watch_later.iter().position(|id| id == video_id) {
            self.watch_later.remove(pos);
            false
        } else {
            self.watch_later.push(video_id.to_string());
            true
        }
    }

    #[must_use]
    pub fn is_in_watch_later(&self, video_id: &str) -> bool {
        self.watch_later.iter().any(|id| id == video_id)
    }

    /// Moves the video to the front of the recently watched list.
    pub fn record_watched(&mut self, video_id: &str) {
        self.recently_watched.retain(|id| id != video_id);
        self.recently_watched.insert(0, video_id.to_string());
        self.recently_watched.truncate(RECENTLY_WATCHED_LIMIT);
    }

    /// Watch-later videos still present in the catalog.
    #[must_use]
    pub fn watch_later_videos<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Video> {
        self.watch_later
            .iter()
            .filter_map(|id| catalog.get(id))
            .collect()
    }

    /// Recently watched videos still present in the catalog.
    #[must_use]
    pub fn recently_watched_videos<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Video> {
        self.recently_watched
            .iter()
            .filter_map(|id| catalog.get(id))
            .collect()
    }

    /// Loads the library from the default location.
    ///
    /// Returns a tuple of (library, optional_warning). Loading never fails:
    /// a missing file gives an empty library, an unreadable one gives an empty
    /// library plus a warning key.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads the library from a custom directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::library_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(library) => (library, None),
                    Err(err) => {
                        log::warn!("discarding unreadable library {}: {}", path.display(), err);
                        (
                            Self::default(),
                            Some("notification-library-parse-error".to_string()),
                        )
                    }
                }
            }
            Err(_) => (
                Self::default(),
                Some("notification-library-read-error".to_string()),
            ),
        }
    }

    /// Saves the library to the default location.
    ///
    /// Returns an optional warning key if save failed.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves the library to a custom directory, creating it if needed.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::library_file_path_with_override(base_dir) else {
            return Some("notification-library-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-library-dir-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if ciborium::into_writer(self, writer).is_err() {
                    return Some("notification-library-write-error".to_string());
                }
                None
            }
            Err(_) => Some("notification-library-create-error".to_string()),
        }
    }

    fn library_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(LIBRARY_FILE);
            path
        })
    }
}
