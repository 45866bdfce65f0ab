// Hard filters and exclusions through the whole pipeline

use crate::common::sample_library;
use tandem::core::search::{filter_summary, parse_query, rank};
use tandem::core::types::EntityType;

#[test]
fn test_visited_filter_only_returns_places() {
    let library = sample_library();

    let hits = rank("visited:yes", &library.media, &library.notes, &library.places);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].entity.id(), "p1");
    assert_eq!(hits[0].entity_type, EntityType::Place);
    assert_eq!(hits[0].score, 100);

    let hits = rank("visited:no", &library.media, &library.notes, &library.places);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].entity.id(), "p2");
}

#[test]
fn test_by_filter_is_case_sensitive() {
    let library = sample_library();

    let hits = rank("by:pb", &library.media, &library.notes, &library.places);
    let ids: Vec<&str> = hits.iter().map(|hit| hit.entity.id()).collect();
    assert_eq!(ids, vec!["m2", "m4", "n1", "n2"]);

    let hits = rank("by:PB", &library.media, &library.notes, &library.places);
    assert!(hits.is_empty());
}

#[test]
fn test_status_filter_is_case_insensitive() {
    let library = sample_library();

    let hits = rank(
        "status:WATCHING",
        &library.media,
        &library.notes,
        &library.places,
    );
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].entity.id(), "m3");
}

#[test]
fn test_type_filters_or_together() {
    let library = sample_library();

    let hits = rank("@game @tv", &library.media, &library.notes, &library.places);
    let ids: Vec<&str> = hits.iter().map(|hit| hit.entity.id()).collect();
    assert_eq!(ids, vec!["m3", "m4"]);
}

#[test]
fn test_type_alias_matches_tag_form() {
    let library = sample_library();

    let tagged = rank("@note", &library.media, &library.notes, &library.places);
    let aliased = rank("type:note", &library.media, &library.notes, &library.places);

    let tagged_ids: Vec<&str> = tagged.iter().map(|hit| hit.entity.id()).collect();
    let aliased_ids: Vec<&str> = aliased.iter().map(|hit| hit.entity.id()).collect();
    assert_eq!(tagged_ids, aliased_ids);
    assert_eq!(tagged_ids, vec!["n1", "n2"]);
}

#[test]
fn test_year_bounds() {
    let library = sample_library();

    let hits = rank("year<1990", &library.media, &library.notes, &library.places);
    let ids: Vec<&str> = hits.iter().map(|hit| hit.entity.id()).collect();
    // Notes and places carry no year, so comparators fail closed for them
    assert_eq!(ids, vec!["m1", "m5"]);
}

#[test]
fn test_filters_and_terms_together() {
    let library = sample_library();

    let hits = rank(
        "@movie rating>=4.5 blade",
        &library.media,
        &library.notes,
        &library.places,
    );
    let ids: Vec<&str> = hits.iter().map(|hit| hit.entity.id()).collect();
    assert_eq!(ids, vec!["m1", "m2"]);
    // Term groups still grade the survivors
    assert!(hits.iter().all(|hit| hit.score > 0 && hit.score <= 100));
}

#[test]
fn test_unknown_syntax_degrades_to_fuzzy_text() {
    let library = sample_library();

    // "director:scott" is not a recognized filter; as literal text it
    // matches nothing in the sample library
    let hits = rank(
        "director:scott",
        &library.media,
        &library.notes,
        &library.places,
    );
    assert!(hits.is_empty());
}

#[test]
fn test_filter_chips_reflect_parsed_query() {
    let chips = filter_summary(&parse_query("@movie status:finished rating>=4 \"blade\""));
    assert_eq!(
        chips,
        vec![
            "@movie".to_string(),
            "status: finished".to_string(),
            "rating >= 4".to_string(),
            "\"blade\"".to_string(),
        ]
    );
}
