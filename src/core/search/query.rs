//! Query parsing for the unified search box.
//!
//! This module turns the raw text a user types into a [`ParsedQuery`]:
//! a structured bundle of type filters, field filters, phrase filters,
//! free-text term groups, and excluded terms.
//!
//! The grammar is one token per whitespace run, with quoted spans kept
//! intact:
//! - `"exact phrase"` — phrase filter (substring, whitespace significant)
//! - `@movie` — type filter; several `@type` tokens are OR'd
//! - `status:watching`, `year:2001`, `by:am`, `visited:yes`,
//!   `type:note` — equality field filters
//! - `rating>4`, `year<=1999` — numeric comparator filters
//! - `OR` (uppercase) — joins the adjacent free-text terms into one group
//! - `-word` or `NOT word` — excluded term
//! - anything else — a free-text term in its own group
//!
//! Parsing never fails. Malformed syntax (unknown field keys, bad
//! comparator values, unmatched quotes) degrades to literal free text
//! instead of erroring, so any string the user can type produces a
//! usable query.
//!
//! # Examples
//!
//! ```
//! use tandem::core::search::{parse_query, has_search_criteria};
//!
//! let parsed = parse_query("@movie rating>4 blade runner");
//! assert!(has_search_criteria(&parsed));
//! assert_eq!(parsed.term_groups().len(), 2);
//!
//! assert!(!has_search_criteria(&parse_query("   ")));
//! ```

use crate::core::types::EntityType;
use once_cell::sync::Lazy;
use regex::Regex;

// Matches `<field><op><value>` comparator tokens, e.g. `rating>=4.5`
static COMPARATOR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]+)(>=|<=|>|<)(.+)$").unwrap());

/// Comparison operator for field filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Eq,
    Gt,
    Lt,
    Ge,
    Le,
}

impl Comparator {
    /// Display symbol for filter chips
    pub fn symbol(self) -> &'static str {
        match self {
            Comparator::Eq => "=",
            Comparator::Gt => ">",
            Comparator::Lt => "<",
            Comparator::Ge => ">=",
            Comparator::Le => "<=",
        }
    }

    /// Whether `have <op> want` holds
    pub fn holds<T: PartialOrd>(self, have: T, want: T) -> bool {
        match self {
            Comparator::Eq => have == want,
            Comparator::Gt => have > want,
            Comparator::Lt => have < want,
            Comparator::Ge => have >= want,
            Comparator::Le => have <= want,
        }
    }
}

/// A single hard field constraint
#[derive(Debug, Clone, PartialEq)]
pub enum FieldFilter {
    /// Tracking status, compared case-insensitively
    Status(String),
    /// Release year
    Year(Comparator, i32),
    /// Personal rating
    Rating(Comparator, f32),
    /// Creating user, compared case-sensitively
    By(String),
    /// Visited flag; only places can satisfy this
    Visited(bool),
}

impl FieldFilter {
    /// Canonical field key
    pub fn key(&self) -> &'static str {
        match self {
            FieldFilter::Status(_) => "status",
            FieldFilter::Year(_, _) => "year",
            FieldFilter::Rating(_, _) => "rating",
            FieldFilter::By(_) => "by",
            FieldFilter::Visited(_) => "visited",
        }
    }

    /// Comparison operator (equality filters report `Eq`)
    pub fn comparator(&self) -> Comparator {
        match self {
            FieldFilter::Year(cmp, _) | FieldFilter::Rating(cmp, _) => *cmp,
            _ => Comparator::Eq,
        }
    }

    /// Human-readable chip label
    pub fn label(&self) -> String {
        match self {
            FieldFilter::Status(value) => format!("status: {value}"),
            FieldFilter::Year(Comparator::Eq, value) => format!("year: {value}"),
            FieldFilter::Year(cmp, value) => format!("year {} {value}", cmp.symbol()),
            FieldFilter::Rating(cmp, value) => format!("rating {} {value}", cmp.symbol()),
            FieldFilter::By(user) => format!("by: {user}"),
            FieldFilter::Visited(visited) => {
                format!("visited: {}", if *visited { "yes" } else { "no" })
            }
        }
    }
}

/// Structured form of a raw search query
///
/// Constructed only by [`parse_query`] and never mutated afterwards;
/// re-parsing always produces a fresh value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedQuery {
    type_filters: Vec<EntityType>,
    field_filters: Vec<FieldFilter>,
    phrase_filters: Vec<String>,
    term_groups: Vec<Vec<String>>,
    excluded_terms: Vec<String>,
}

impl ParsedQuery {
    /// Required entity types (OR'd; empty means unrestricted)
    pub fn type_filters(&self) -> &[EntityType] {
        &self.type_filters
    }

    /// Hard field constraints (all must hold)
    pub fn field_filters(&self) -> &[FieldFilter] {
        &self.field_filters
    }

    /// Required exact substrings (whitespace significant)
    pub fn phrase_filters(&self) -> &[String] {
        &self.phrase_filters
    }

    /// Free-text term groups: OR within a group, AND across groups
    pub fn term_groups(&self) -> &[Vec<String>] {
        &self.term_groups
    }

    /// Terms that disqualify an item outright (stored lowercased)
    pub fn excluded_terms(&self) -> &[String] {
        &self.excluded_terms
    }

    fn push_type_filter(&mut self, ty: EntityType) {
        if !self.type_filters.contains(&ty) {
            self.type_filters.push(ty);
        }
    }

    // Last filter with a given (key, operator) pair wins, so
    // `year:2001 year:2005` keeps 2005 while `rating>3 rating<8`
    // keeps both bounds.
    fn push_field_filter(&mut self, filter: FieldFilter) {
        let slot = (filter.key(), filter.comparator());
        self.field_filters
            .retain(|f| (f.key(), f.comparator()) != slot);
        self.field_filters.push(filter);
    }

    fn push_term(&mut self, term: String, join_previous: bool) {
        if join_previous {
            if let Some(group) = self.term_groups.last_mut() {
                group.push(term);
                return;
            }
        }
        self.term_groups.push(vec![term]);
    }
}

/// True iff the query restricts results at all
///
/// Excluded terms alone are not criteria: a query that only removes
/// things has nothing to rank.
pub fn has_search_criteria(parsed: &ParsedQuery) -> bool {
    !parsed.type_filters.is_empty()
        || !parsed.field_filters.is_empty()
        || !parsed.phrase_filters.is_empty()
        || !parsed.term_groups.is_empty()
}

/// Ordered chip labels for the active hard filters
///
/// Order: type filters, then field filters, then phrase filters. Term
/// groups are not summarized; they are what the user already sees in
/// the search box.
pub fn filter_summary(parsed: &ParsedQuery) -> Vec<String> {
    let mut chips = Vec::new();
    for ty in &parsed.type_filters {
        chips.push(format!("@{ty}"));
    }
    for filter in &parsed.field_filters {
        chips.push(filter.label());
    }
    for phrase in &parsed.phrase_filters {
        chips.push(format!("\"{phrase}\""));
    }
    chips
}

/// Raw lexer output: words split on whitespace, quoted spans kept whole
#[derive(Debug, PartialEq)]
enum RawToken {
    Word(String),
    Phrase(String),
}

fn tokenize(raw: &str) -> Vec<RawToken> {
    let mut tokens = Vec::new();
    let mut word = String::new();
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c == '"' {
            if !word.is_empty() {
                tokens.push(RawToken::Word(std::mem::take(&mut word)));
            }
            let mut span = String::new();
            let mut closed = false;
            for inner in chars.by_ref() {
                if inner == '"' {
                    closed = true;
                    break;
                }
                span.push(inner);
            }
            if closed {
                tokens.push(RawToken::Phrase(span));
            } else {
                // Unmatched quote: drop the quote, keep the text as plain words
                for w in span.split_whitespace() {
                    tokens.push(RawToken::Word(w.to_string()));
                }
            }
        } else if c.is_whitespace() {
            if !word.is_empty() {
                tokens.push(RawToken::Word(std::mem::take(&mut word)));
            }
        } else {
            word.push(c);
        }
    }
    if !word.is_empty() {
        tokens.push(RawToken::Word(word));
    }
    tokens
}

/// Result of interpreting a `key:value` token
enum Equality {
    Filter(FieldFilter),
    Type(EntityType),
}

fn parse_equality(token: &str) -> Option<Equality> {
    let (key, value) = token.split_once(':')?;
    if key.is_empty() || value.is_empty() {
        return None;
    }

    match key.to_ascii_lowercase().as_str() {
        "status" => Some(Equality::Filter(FieldFilter::Status(value.to_string()))),
        "year" => value
            .parse::<i32>()
            .ok()
            .map(|y| Equality::Filter(FieldFilter::Year(Comparator::Eq, y))),
        "by" => Some(Equality::Filter(FieldFilter::By(value.to_string()))),
        "visited" => match value.to_ascii_lowercase().as_str() {
            "yes" | "true" => Some(Equality::Filter(FieldFilter::Visited(true))),
            "no" | "false" => Some(Equality::Filter(FieldFilter::Visited(false))),
            _ => None,
        },
        "type" => EntityType::parse(value).map(Equality::Type),
        _ => None,
    }
}

fn parse_comparator(token: &str) -> Option<FieldFilter> {
    let caps = COMPARATOR_PATTERN.captures(token)?;
    let cmp = match &caps[2] {
        ">=" => Comparator::Ge,
        "<=" => Comparator::Le,
        ">" => Comparator::Gt,
        "<" => Comparator::Lt,
        _ => return None,
    };

    match caps[1].to_ascii_lowercase().as_str() {
        "rating" => caps[3].parse::<f32>().ok().map(|v| FieldFilter::Rating(cmp, v)),
        "year" => caps[3].parse::<i32>().ok().map(|v| FieldFilter::Year(cmp, v)),
        _ => None,
    }
}

/// Parse a raw query string
///
/// Total over all inputs: any string, however malformed, produces a
/// [`ParsedQuery`]. Unrecognized filter syntax degrades to free text;
/// dangling operators (`OR` at an edge, trailing `NOT`, bare `-`) are
/// dropped.
pub fn parse_query(raw: &str) -> ParsedQuery {
    let tokens = tokenize(raw);
    let mut parsed = ParsedQuery::default();

    // `or_pending` is armed only when the previous token produced a
    // free-text term; any other token breaks OR adjacency.
    let mut or_pending = false;
    let mut last_was_term = false;

    let mut i = 0;
    while i < tokens.len() {
        match &tokens[i] {
            RawToken::Phrase(span) => {
                if !span.is_empty() {
                    parsed.phrase_filters.push(span.clone());
                }
                or_pending = false;
                last_was_term = false;
            }
            RawToken::Word(word) => {
                if word == "OR" {
                    or_pending = last_was_term;
                    last_was_term = false;
                } else if word == "NOT" {
                    if let Some(RawToken::Word(next)) = tokens.get(i + 1) {
                        if next != "OR" && next != "NOT" {
                            parsed.excluded_terms.push(next.to_lowercase());
                            i += 1;
                        }
                    }
                    or_pending = false;
                    last_was_term = false;
                } else if let Some(excluded) = word.strip_prefix('-') {
                    if !excluded.is_empty() {
                        parsed.excluded_terms.push(excluded.to_lowercase());
                    }
                    or_pending = false;
                    last_was_term = false;
                } else if let Some(name) = word.strip_prefix('@') {
                    if let Some(ty) = EntityType::parse(name) {
                        parsed.push_type_filter(ty);
                        or_pending = false;
                        last_was_term = false;
                    } else {
                        // Unknown type tag stays a literal term
                        parsed.push_term(word.clone(), or_pending);
                        or_pending = false;
                        last_was_term = true;
                    }
                } else if let Some(filter) = parse_comparator(word) {
                    parsed.push_field_filter(filter);
                    or_pending = false;
                    last_was_term = false;
                } else if let Some(equality) = parse_equality(word) {
                    match equality {
                        Equality::Filter(filter) => parsed.push_field_filter(filter),
                        Equality::Type(ty) => parsed.push_type_filter(ty),
                    }
                    or_pending = false;
                    last_was_term = false;
                } else {
                    parsed.push_term(word.clone(), or_pending);
                    or_pending = false;
                    last_was_term = true;
                }
            }
        }
        i += 1;
    }

    parsed
}
