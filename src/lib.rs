//! Tandem - Unified Search for a Shared Tracking Library
//!
//! Two people track what they watch, play, read, note down, and want
//! to visit. Tandem is the search subsystem over that shared library:
//! one query box across three differently-shaped collections (media
//! items, notes, places), with a compact query syntax and a single
//! relevance-ranked result list.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic (adapter-agnostic)
//!   - config, error, types, xdg
//!   - store (collection snapshots)
//!   - search (query parsing, fuzzy scoring, ranking)
//!   - services (unified service container)
//!
//! - **cli**: Command-line adapter (depends on core)
//!   - commands, output
//!
//! # Query syntax
//!
//! - `@movie`, `@tv`, `@game`, `@note`, `@place` — type filters (OR'd)
//! - `status:watching`, `year:2001`, `by:am`, `visited:yes` — field filters
//! - `rating>4`, `year<=1999` — numeric comparators
//! - `"exact phrase"` — phrase filter (substring, whitespace significant)
//! - `alien OR aliens` — OR-grouped terms
//! - `-spoiler`, `NOT spoiler` — excluded terms
//! - anything else — fuzzy-matched free text
//!
//! Parsing never fails: malformed syntax degrades to plain text.

// Core domain logic (adapter-agnostic)
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{Result, TandemError};
pub use core::search::{
    filter_summary, fuzzy_score, fuzzy_score_multi, has_search_criteria, parse_query, rank,
    ParsedQuery, RankedHit, SearchService, RESULT_CAP,
};
pub use core::services::Services;
pub use core::store::Library;
pub use core::types::*;
