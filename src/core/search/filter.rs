//! Hard filter evaluation.
//!
//! Hard filters are pass/fail gates an item must clear before it is
//! scored at all: type tags, field equality filters, and numeric
//! comparators. Type filters are OR'd against each other; everything
//! else must hold simultaneously. Comparators fail closed: an item
//! that lacks the compared field never passes.

use crate::core::search::project::SearchableItem;
use crate::core::search::query::{FieldFilter, ParsedQuery};
use crate::core::types::EntityType;

/// Whether `item` clears every hard filter in `parsed`
pub fn passes_hard_filters(item: &SearchableItem<'_>, parsed: &ParsedQuery) -> bool {
    let types = parsed.type_filters();
    if !types.is_empty() && !types.contains(&item.entity_type) {
        return false;
    }

    parsed
        .field_filters()
        .iter()
        .all(|filter| field_filter_passes(item, filter))
}

fn field_filter_passes(item: &SearchableItem<'_>, filter: &FieldFilter) -> bool {
    match filter {
        FieldFilter::Status(want) => item
            .status
            .is_some_and(|status| status.eq_ignore_ascii_case(want)),
        FieldFilter::Year(cmp, want) => item.year.is_some_and(|year| cmp.holds(year, *want)),
        FieldFilter::Rating(cmp, want) => {
            item.rating.is_some_and(|rating| cmp.holds(rating, *want))
        }
        FieldFilter::By(user) => item.created_by == user,
        FieldFilter::Visited(want) => {
            // Only places carry a visited flag; the filter disqualifies
            // every other entity kind outright
            item.entity_type == EntityType::Place
                && item.visited.is_some_and(|visited| visited == *want)
        }
    }
}

/// Whether any excluded term occurs in the item's searchable text
///
/// `haystack` must already be lowercased (excluded terms are stored
/// lowercased at parse time).
pub fn contains_excluded_term(haystack: &str, parsed: &ParsedQuery) -> bool {
    parsed
        .excluded_terms()
        .iter()
        .any(|term| haystack.contains(term.as_str()))
}
