//! Snapshot loading for the three collections.
//!
//! In the full application the collections arrive as live arrays from
//! the realtime subscription layer; the search core only ever sees a
//! per-pass snapshot. This module is the CLI's version of that
//! collaborator: it reads `media.json`, `notes.json`, and
//! `places.json` from a data directory into one [`Library`] value.

use crate::core::error::{Result, TandemError};
use crate::core::types::{MediaItem, Note, Place};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// In-memory snapshot of the three collections
///
/// The search core borrows from a `Library` and never mutates it.
#[derive(Debug, Clone, Default)]
pub struct Library {
    pub media: Vec<MediaItem>,
    pub notes: Vec<Note>,
    pub places: Vec<Place>,
}

impl Library {
    /// Load a snapshot from a data directory
    ///
    /// Each collection file is optional: a missing file is an empty
    /// collection. Malformed JSON in a present file is an error; the
    /// directory itself must exist.
    pub fn load(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(TandemError::DataDirNotFound(dir.display().to_string()));
        }

        Ok(Self {
            media: load_collection(dir, "media.json")?,
            notes: load_collection(dir, "notes.json")?,
            places: load_collection(dir, "places.json")?,
        })
    }

    /// Total number of items across all collections
    pub fn len(&self) -> usize {
        self.media.len() + self.notes.len() + self.places.len()
    }

    /// Whether every collection is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn load_collection<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<Vec<T>> {
    let path = dir.join(file);
    if !path.exists() {
        tracing::debug!("Collection file missing, treating as empty: {:?}", path);
        return Ok(Vec::new());
    }

    let contents = fs::read_to_string(&path)?;
    serde_json::from_str(&contents)
        .map_err(|e| TandemError::LoadFailed(format!("{}: {e}", path.display())))
}
