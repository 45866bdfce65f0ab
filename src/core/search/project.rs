//! Normalized projection of the three entity shapes.
//!
//! Media items, notes, and places carry different fields under
//! different names. [`SearchableItem`] flattens each of them into the
//! one shape the filter evaluator and scorer understand, borrowing
//! from the source entity. Projections are built fresh for every
//! ranking pass and thrown away with it.

use crate::core::types::{EntityType, MediaItem, Note, Place};

/// Uniform, borrow-based view of one entity for filtering and scoring
///
/// `title` is always present and non-empty (every entity shape
/// guarantees a display name); everything else is optional.
#[derive(Debug, Clone)]
pub struct SearchableItem<'a> {
    pub id: &'a str,
    pub entity_type: EntityType,
    pub title: &'a str,
    pub content: Option<&'a str>,
    pub status: Option<&'a str>,
    pub rating: Option<f32>,
    pub year: Option<i32>,
    pub created_by: &'a str,
    pub keywords: &'a [String],
    pub collection: Option<&'a str>,
    pub visited: Option<bool>,
}

impl<'a> SearchableItem<'a> {
    /// Project a media item (movie, tv, or game)
    pub fn from_media(item: &'a MediaItem) -> Self {
        Self {
            id: &item.id,
            entity_type: item.kind.entity_type(),
            title: &item.title,
            content: item.overview.as_deref(),
            status: item.status.as_deref(),
            rating: item.rating,
            year: item.year,
            created_by: &item.created_by,
            keywords: &item.genres,
            collection: item.collection.as_deref(),
            visited: None,
        }
    }

    /// Project a note
    pub fn from_note(note: &'a Note) -> Self {
        Self {
            id: &note.id,
            entity_type: EntityType::Note,
            title: &note.title,
            content: note.content.as_deref(),
            status: None,
            rating: None,
            year: None,
            created_by: &note.created_by,
            keywords: &note.tags,
            collection: None,
            visited: None,
        }
    }

    /// Project a place
    pub fn from_place(place: &'a Place) -> Self {
        Self {
            id: &place.id,
            entity_type: EntityType::Place,
            title: &place.name,
            content: place.notes.as_deref(),
            status: None,
            rating: None,
            year: None,
            created_by: &place.created_by,
            keywords: &place.tags,
            collection: None,
            visited: place.visited,
        }
    }

    /// Keyword labels joined into one scoring target
    pub fn keywords_joined(&self) -> Option<String> {
        if self.keywords.is_empty() {
            None
        } else {
            Some(self.keywords.join(" "))
        }
    }

    /// All searchable text, lowercased, for excluded-term checks
    pub fn searchable_text(&self) -> String {
        let mut text = String::from(self.title);
        if let Some(content) = self.content {
            text.push(' ');
            text.push_str(content);
        }
        for keyword in self.keywords {
            text.push(' ');
            text.push_str(keyword);
        }
        if let Some(collection) = self.collection {
            text.push(' ');
            text.push_str(collection);
        }
        text.to_lowercase()
    }
}
