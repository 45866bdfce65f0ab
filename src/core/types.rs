//! Core data types for Tandem.
//!
//! This module defines the three tracked entity shapes (media items,
//! notes, places), the entity-kind discriminant shared by every search
//! consumer, and the owned response types the search service returns.
//!
//! The entity structs deserialize from the camelCase JSON the original
//! document store exports. Adding a fourth entity kind here is meant to
//! be loud: every `match` over [`EntityType`] is exhaustive, so the
//! projection and ranking code stops compiling until it is taught about
//! the new kind.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of media item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Tv,
    Game,
}

impl MediaKind {
    /// The entity-type discriminant this kind maps to
    pub fn entity_type(self) -> EntityType {
        match self {
            MediaKind::Movie => EntityType::Movie,
            MediaKind::Tv => EntityType::Tv,
            MediaKind::Game => EntityType::Game,
        }
    }
}

/// Entity-kind discriminant used by type filters and result rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Movie,
    Tv,
    Game,
    Note,
    Place,
}

impl EntityType {
    /// Canonical lowercase name (what `@movie` style filters use)
    pub fn as_str(self) -> &'static str {
        match self {
            EntityType::Movie => "movie",
            EntityType::Tv => "tv",
            EntityType::Game => "game",
            EntityType::Note => "note",
            EntityType::Place => "place",
        }
    }

    /// Parse a type name case-insensitively; `None` for unknown names
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "movie" => Some(EntityType::Movie),
            "tv" => Some(EntityType::Tv),
            "game" => Some(EntityType::Game),
            "note" => Some(EntityType::Note),
            "place" => Some(EntityType::Place),
            _ => None,
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tracked film, show, or game
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    /// Document id from the originating store
    pub id: String,

    /// Media kind (movie, tv, game)
    pub kind: MediaKind,

    /// Display title (always present, never empty)
    pub title: String,

    /// Synopsis / overview text
    #[serde(default)]
    pub overview: Option<String>,

    /// Tracking status (e.g. "watching", "finished", "backlog")
    #[serde(default)]
    pub status: Option<String>,

    /// Personal rating
    #[serde(default)]
    pub rating: Option<f32>,

    /// Release year
    #[serde(default)]
    pub year: Option<i32>,

    /// Genre labels
    #[serde(default)]
    pub genres: Vec<String>,

    /// Collection or studio name
    #[serde(default)]
    pub collection: Option<String>,

    /// Which of the two users added this item
    pub created_by: String,

    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A free-form note
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Document id from the originating store
    pub id: String,

    /// Note title (always present, never empty)
    pub title: String,

    /// Note body
    #[serde(default)]
    pub content: Option<String>,

    /// Tag labels
    #[serde(default)]
    pub tags: Vec<String>,

    /// Whether the note has been archived
    #[serde(default)]
    pub archived: Option<bool>,

    /// Whether the note has been read by the other user
    #[serde(default)]
    pub read: Option<bool>,

    /// Which of the two users added this note
    pub created_by: String,

    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A saved place
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Document id from the originating store
    pub id: String,

    /// Place name (always present, never empty)
    pub name: String,

    /// Free-form notes about the place
    #[serde(default)]
    pub notes: Option<String>,

    /// Tag labels
    #[serde(default)]
    pub tags: Vec<String>,

    /// Whether the place has been visited
    #[serde(default)]
    pub visited: Option<bool>,

    /// Which of the two users added this place
    pub created_by: String,

    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A single row in a search response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// 1-based rank within the response
    pub rank: usize,

    /// Id of the matched entity
    pub id: String,

    /// Entity kind of the matched entity
    pub entity_type: EntityType,

    /// Display title
    pub title: String,

    /// Relevance score in [0, 100]
    pub score: u8,

    /// Short body excerpt, when the entity has body text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,

    /// Creation timestamp of the matched entity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Response from a search pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Original query string
    pub query: String,

    /// Ranked results, best first
    pub results: Vec<SearchResult>,

    /// Number of results returned
    pub count: usize,

    /// Query duration in milliseconds
    pub duration_ms: u64,
}
