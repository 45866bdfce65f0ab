//! The search core: parse, filter, score, rank.
//!
//! This is the one part of the application with real logic. A raw
//! query string becomes a structured [`ParsedQuery`]; every entity is
//! projected to a [`SearchableItem`]; hard filters and excluded terms
//! gate eligibility; the fuzzy scorer grades free-text terms; and the
//! ranker merges all three collections into one ordered, capped list.
//!
//! Everything here is pure and synchronous. Identical inputs produce
//! identical output, so callers re-run the whole pass whenever the
//! query or the data changes and never need to coordinate with it.

pub mod filter;
pub mod project;
pub mod query;
pub mod rank;
pub mod score;

// Re-export the core contract surface
pub use filter::{contains_excluded_term, passes_hard_filters};
pub use project::SearchableItem;
pub use query::{
    filter_summary, has_search_criteria, parse_query, Comparator, FieldFilter, ParsedQuery,
};
pub use rank::{rank, EntityRef, RankedHit, SearchService, RESULT_CAP};
pub use score::{fuzzy_score, fuzzy_score_multi};
