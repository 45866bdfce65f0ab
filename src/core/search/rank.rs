//! Result ranking across the three collections.
//!
//! [`rank`] is the whole search pass as one pure function: parse the
//! query, project every item, gate on hard filters, phrases, and
//! excluded terms, score the survivors, then stable-sort and cap. The
//! same query against the same snapshot always produces the same
//! ordered output.
//!
//! [`SearchService`] wraps the pure pass with the caller-facing
//! concerns: query length limits, display limits, duration tracking,
//! and an owned response the adapters can serialize.

use crate::core::error::{Result, TandemError};
use crate::core::search::filter::{contains_excluded_term, passes_hard_filters};
use crate::core::search::project::SearchableItem;
use crate::core::search::query::{has_search_criteria, parse_query, ParsedQuery};
use crate::core::search::score::fuzzy_score_multi;
use crate::core::store::Library;
use crate::core::types::{
    EntityType, MediaItem, Note, Place, SearchResponse, SearchResult,
};
use chrono::{DateTime, Utc};
use std::time::Instant;

/// Hard cap on results per ranking pass
pub const RESULT_CAP: usize = 50;

/// Characters of body text carried into a result snippet
const SNIPPET_CHARS: usize = 120;

/// Reference to a matched entity in the caller's snapshot
#[derive(Debug, Clone, Copy)]
pub enum EntityRef<'a> {
    Media(&'a MediaItem),
    Note(&'a Note),
    Place(&'a Place),
}

impl<'a> EntityRef<'a> {
    /// Id of the referenced entity
    pub fn id(&self) -> &'a str {
        match self {
            EntityRef::Media(item) => &item.id,
            EntityRef::Note(note) => &note.id,
            EntityRef::Place(place) => &place.id,
        }
    }

    /// Display title of the referenced entity
    pub fn title(&self) -> &'a str {
        match self {
            EntityRef::Media(item) => &item.title,
            EntityRef::Note(note) => &note.title,
            EntityRef::Place(place) => &place.name,
        }
    }

    /// Body text suitable for a result snippet
    pub fn body(&self) -> Option<&'a str> {
        match self {
            EntityRef::Media(item) => item.overview.as_deref(),
            EntityRef::Note(note) => note.content.as_deref(),
            EntityRef::Place(place) => place.notes.as_deref(),
        }
    }

    /// Creation timestamp of the referenced entity
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        match self {
            EntityRef::Media(item) => item.created_at,
            EntityRef::Note(note) => note.created_at,
            EntityRef::Place(place) => place.created_at,
        }
    }
}

/// One scored match from a ranking pass
#[derive(Debug, Clone, Copy)]
pub struct RankedHit<'a> {
    pub entity_type: EntityType,
    pub entity: EntityRef<'a>,
    pub score: u8,
}

/// Rank every item in the snapshot against a raw query
///
/// Returns at most [`RESULT_CAP`] hits, best first. Ties keep the
/// insertion order: media before notes before places, each in its
/// original collection order. A query with no search criteria returns
/// an empty list; distinguishing that from "nothing matched" is the
/// caller's job via `has_search_criteria`.
pub fn rank<'a>(
    raw_query: &str,
    media: &'a [MediaItem],
    notes: &'a [Note],
    places: &'a [Place],
) -> Vec<RankedHit<'a>> {
    let parsed = parse_query(raw_query);
    if !has_search_criteria(&parsed) {
        return Vec::new();
    }

    let mut hits: Vec<RankedHit<'a>> = Vec::new();

    for item in media {
        if let Some(score) = score_item(&SearchableItem::from_media(item), &parsed) {
            hits.push(RankedHit {
                entity_type: item.kind.entity_type(),
                entity: EntityRef::Media(item),
                score,
            });
        }
    }
    for note in notes {
        if let Some(score) = score_item(&SearchableItem::from_note(note), &parsed) {
            hits.push(RankedHit {
                entity_type: EntityType::Note,
                entity: EntityRef::Note(note),
                score,
            });
        }
    }
    for place in places {
        if let Some(score) = score_item(&SearchableItem::from_place(place), &parsed) {
            hits.push(RankedHit {
                entity_type: EntityType::Place,
                entity: EntityRef::Place(place),
                score,
            });
        }
    }

    // sort_by is stable, so equal scores keep insertion order
    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits.truncate(RESULT_CAP);
    hits
}

/// Score one projected item, or `None` when a gate disqualifies it
fn score_item(item: &SearchableItem<'_>, parsed: &ParsedQuery) -> Option<u8> {
    if !passes_hard_filters(item, parsed) {
        return None;
    }

    // Excluded terms veto the item no matter what else matches
    if !parsed.excluded_terms().is_empty()
        && contains_excluded_term(&item.searchable_text(), parsed)
    {
        return None;
    }

    // Phrases are hard gates against title and body only; they never
    // contribute to the score
    for phrase in parsed.phrase_filters() {
        let needle = phrase.to_lowercase();
        let in_title = item.title.to_lowercase().contains(&needle);
        let in_content = item
            .content
            .is_some_and(|content| content.to_lowercase().contains(&needle));
        if !in_title && !in_content {
            return None;
        }
    }

    // Filter-only query: everything that survived the gates is a full match
    if parsed.term_groups().is_empty() {
        return Some(100);
    }

    // AND across groups, OR within a group: every group must match
    // somewhere, and the weakest group bounds the overall score
    let keywords = item.keywords_joined();
    let targets = [
        Some(item.title),
        item.content,
        keywords.as_deref(),
        item.collection,
    ];

    let mut overall = 100u8;
    for group in parsed.term_groups() {
        let best = group
            .iter()
            .map(|term| fuzzy_score_multi(term, &targets))
            .max()
            .unwrap_or(0);
        if best == 0 {
            return None;
        }
        overall = overall.min(best);
    }
    Some(overall)
}

/// Config-aware search entry point used by the adapters
pub struct SearchService {
    default_limit: usize,
    max_query_length: usize,
}

impl SearchService {
    /// Create a new search service
    pub fn new(default_limit: usize, max_query_length: usize) -> Self {
        Self {
            default_limit,
            max_query_length,
        }
    }

    /// Execute a search pass over a library snapshot
    ///
    /// `limit` overrides the configured display limit; both are clamped
    /// to `[1, RESULT_CAP]`.
    pub fn search(
        &self,
        query: &str,
        library: &Library,
        limit: Option<usize>,
    ) -> Result<SearchResponse> {
        let start = Instant::now();

        if query.len() > self.max_query_length {
            return Err(TandemError::InvalidQuery(format!(
                "Query exceeds maximum length of {} bytes",
                self.max_query_length
            )));
        }

        let limit = limit.unwrap_or(self.default_limit).clamp(1, RESULT_CAP);

        let hits = rank(query, &library.media, &library.notes, &library.places);
        let total = hits.len();

        let results: Vec<SearchResult> = hits
            .iter()
            .take(limit)
            .enumerate()
            .map(|(i, hit)| SearchResult {
                rank: i + 1,
                id: hit.entity.id().to_string(),
                entity_type: hit.entity_type,
                title: hit.entity.title().to_string(),
                score: hit.score,
                snippet: hit.entity.body().map(snippet),
                created_at: hit.entity.created_at(),
            })
            .collect();

        let duration_ms = start.elapsed().as_millis() as u64;
        let count = results.len();

        tracing::debug!(
            query,
            total,
            count,
            duration_ms,
            "search pass complete"
        );

        Ok(SearchResponse {
            query: query.to_string(),
            results,
            count,
            duration_ms,
        })
    }
}

/// Truncate body text for display, on a character boundary
fn snippet(body: &str) -> String {
    let mut out: String = body.chars().take(SNIPPET_CHARS).collect();
    if body.chars().count() > SNIPPET_CHARS {
        out.push_str("...");
    }
    out
}
