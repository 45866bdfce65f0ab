// End-to-end ranking tests over full libraries

use crate::common::{media_item, note, sample_library};
use tandem::core::search::{has_search_criteria, parse_query, rank, RESULT_CAP};
use tandem::core::types::MediaKind;

#[test]
fn test_blank_queries_have_no_criteria_and_rank_empty() {
    let library = sample_library();

    for raw in ["", "  ", "\t"] {
        assert!(!has_search_criteria(&parse_query(raw)));
        assert!(rank(raw, &library.media, &library.notes, &library.places).is_empty());
    }
}

#[test]
fn test_type_and_comparator_filters_combine() {
    // A movie and a TV show both rated 5, plus a lower-rated movie.
    // "@movie rating>4" keeps only the highly-rated movie, as a pure
    // filter match scoring 100.
    let media = vec![
        media_item("movie-hi", MediaKind::Movie, "Heat", Some(5.0), None),
        media_item("tv-hi", MediaKind::Tv, "The Wire", Some(5.0), None),
        media_item("movie-lo", MediaKind::Movie, "Hackers", Some(3.0), None),
    ];

    let hits = rank("@movie rating>4", &media, &[], &[]);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].entity.id(), "movie-hi");
    assert_eq!(hits[0].score, 100);
}

#[test]
fn test_phrase_filter_is_literal_substring() {
    // Phrase matching must not normalize whitespace: a double space in
    // the note body is a different string
    let notes = vec![
        note("single", "Watchlist", "rewatch star wars soon"),
        note("double", "Watchlist", "rewatch star  wars soon"),
    ];

    let hits = rank("\"star wars\"", &[], &notes, &[]);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].entity.id(), "single");
}

#[test]
fn test_excluded_term_vetoes_strong_matches() {
    let notes = vec![
        note("clean", "Finale thoughts", "what an ending"),
        note("tainted", "Finale thoughts", "huge spoiler: the station was earth"),
    ];

    let hits = rank("finale -spoiler", &[], &notes, &[]);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].entity.id(), "clean");

    // The exclusion wins regardless of how strong the other match is
    let hits = rank("\"finale thoughts\" -spoiler", &[], &notes, &[]);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].entity.id(), "clean");
}

#[test]
fn test_idempotent_ranking() {
    let library = sample_library();
    let raw = "@movie blade OR runner rating>4";

    let first: Vec<(String, u8)> = rank(raw, &library.media, &library.notes, &library.places)
        .iter()
        .map(|hit| (hit.entity.id().to_string(), hit.score))
        .collect();
    let second: Vec<(String, u8)> = rank(raw, &library.media, &library.notes, &library.places)
        .iter()
        .map(|hit| (hit.entity.id().to_string(), hit.score))
        .collect();

    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn test_ties_keep_collection_order() {
    // One media item, one note, one place, all exact title matches
    let media = vec![media_item("m", MediaKind::Movie, "Echo", None, None)];
    let notes = vec![note("n", "Echo", "")];
    let places = vec![crate::common::place("p", "Echo", None)];

    let hits = rank("echo", &media, &notes, &places);
    let ids: Vec<&str> = hits.iter().map(|hit| hit.entity.id()).collect();
    assert_eq!(ids, vec!["m", "n", "p"]);
}

#[test]
fn test_cap_keeps_the_best_fifty() {
    // 40 exact-title matches (score 100) and 40 prefix matches (95):
    // the cap must keep all 40 exact plus the first 10 prefix matches
    let mut media = Vec::new();
    for i in 0..40 {
        media.push(media_item(
            &format!("exact{i}"),
            MediaKind::Movie,
            "Orbit",
            None,
            None,
        ));
    }
    for i in 0..40 {
        media.push(media_item(
            &format!("prefix{i}"),
            MediaKind::Movie,
            "Orbital Decay",
            None,
            None,
        ));
    }

    let hits = rank("orbit", &media, &[], &[]);
    assert_eq!(hits.len(), RESULT_CAP);

    assert!(hits[..40].iter().all(|hit| hit.score == 100));
    assert!(hits[40..].iter().all(|hit| hit.score == 95));
    assert_eq!(hits[40].entity.id(), "prefix0");
    assert_eq!(hits[49].entity.id(), "prefix9");
}

#[test]
fn test_or_groups_and_weakest_group_bound() {
    let library = sample_library();

    // "blade OR expanse" matches movies and the show; adding a second
    // group that only fuzzy-matches drags every score down to it
    let hits = rank(
        "blade OR expanse",
        &library.media,
        &library.notes,
        &library.places,
    );
    let ids: Vec<&str> = hits.iter().map(|hit| hit.entity.id()).collect();
    assert!(ids.contains(&"m1"));
    assert!(ids.contains(&"m2"));
    assert!(ids.contains(&"m3"));

    let gated = rank(
        "blade OR expanse runner",
        &library.media,
        &library.notes,
        &library.places,
    );
    // "runner" never matches The Expanse, so it drops out entirely
    assert!(gated.iter().all(|hit| hit.entity.id() != "m3"));
}

#[test]
fn test_search_across_all_three_collections() {
    let library = sample_library();

    // A place name wins for "ramen"; a note title wins for "marathon".
    // Weak subsequence matches elsewhere may trail behind.
    let hits = rank("ramen", &library.media, &library.notes, &library.places);
    assert_eq!(hits[0].entity.id(), "p1");
    assert_eq!(hits[0].score, 95);

    let hits = rank("marathon", &library.media, &library.notes, &library.places);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].entity.id(), "n1");
}

#[test]
fn test_genre_keywords_are_searchable() {
    let library = sample_library();

    // "noir" appears verbatim only in Blade Runner's genres
    let hits = rank("noir", &library.media, &library.notes, &library.places);
    assert_eq!(hits[0].entity.id(), "m1");
    assert_eq!(hits[0].score, 85);
}
