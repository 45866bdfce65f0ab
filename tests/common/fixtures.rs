// Test fixtures for integration testing

use tandem::core::store::Library;
use tandem::core::types::{MediaItem, MediaKind, Note, Place};
use tempfile::TempDir;

/// Build a media item with the fields the search tests care about
#[allow(dead_code)] // Used across test binaries
pub fn media_item(
    id: &str,
    kind: MediaKind,
    title: &str,
    rating: Option<f32>,
    year: Option<i32>,
) -> MediaItem {
    MediaItem {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        overview: None,
        status: None,
        rating,
        year,
        genres: vec![],
        collection: None,
        created_by: "am".to_string(),
        created_at: None,
    }
}

/// Build a note with a body
#[allow(dead_code)] // Used across test binaries
pub fn note(id: &str, title: &str, content: &str) -> Note {
    Note {
        id: id.to_string(),
        title: title.to_string(),
        content: Some(content.to_string()),
        tags: vec![],
        archived: None,
        read: None,
        created_by: "pb".to_string(),
        created_at: None,
    }
}

/// Build a place
#[allow(dead_code)] // Used across test binaries
pub fn place(id: &str, name: &str, visited: Option<bool>) -> Place {
    Place {
        id: id.to_string(),
        name: name.to_string(),
        notes: None,
        tags: vec![],
        visited,
        created_by: "am".to_string(),
        created_at: None,
    }
}

/// A small curated library covering all three collections
#[allow(dead_code)] // Used across test binaries
pub fn sample_library() -> Library {
    let media = vec![
        MediaItem {
            overview: Some("A blade runner must pursue replicants.".to_string()),
            status: Some("finished".to_string()),
            genres: vec!["sci-fi".to_string(), "noir".to_string()],
            ..media_item("m1", MediaKind::Movie, "Blade Runner", Some(5.0), Some(1982))
        },
        MediaItem {
            overview: Some("Officer K unearths a long-buried secret.".to_string()),
            status: Some("finished".to_string()),
            created_by: "pb".to_string(),
            ..media_item(
                "m2",
                MediaKind::Movie,
                "Blade Runner 2049",
                Some(4.5),
                Some(2017),
            )
        },
        MediaItem {
            status: Some("watching".to_string()),
            genres: vec!["sci-fi".to_string()],
            ..media_item("m3", MediaKind::Tv, "The Expanse", Some(5.0), Some(2015))
        },
        MediaItem {
            status: Some("backlog".to_string()),
            created_by: "pb".to_string(),
            ..media_item("m4", MediaKind::Game, "Outer Wilds", Some(5.0), Some(2019))
        },
        media_item("m5", MediaKind::Movie, "Alien", Some(3.0), Some(1979)),
    ];

    let notes = vec![
        note("n1", "Marathon order", "star wars machete order, skip nothing"),
        note("n2", "Weekend plans", "bake bread, fix the bike"),
    ];

    let places = vec![
        place("p1", "Ramen Yokocho", Some(true)),
        place("p2", "Cafe Flore", Some(false)),
    ];

    Library {
        media,
        notes,
        places,
    }
}

/// A data directory on disk holding a library as JSON snapshots
#[allow(dead_code)] // Used across test binaries
pub struct SnapshotDir {
    pub dir: TempDir,
}

impl SnapshotDir {
    /// Write a library to a fresh temp directory
    #[allow(dead_code)] // Used across test binaries
    pub fn from_library(library: &Library) -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("media.json"),
            serde_json::to_string_pretty(&library.media).unwrap(),
        )
        .unwrap();
        std::fs::write(
            dir.path().join("notes.json"),
            serde_json::to_string_pretty(&library.notes).unwrap(),
        )
        .unwrap();
        std::fs::write(
            dir.path().join("places.json"),
            serde_json::to_string_pretty(&library.places).unwrap(),
        )
        .unwrap();
        Self { dir }
    }

    /// Write the sample library
    #[allow(dead_code)] // Used across test binaries
    pub fn sample() -> Self {
        Self::from_library(&sample_library())
    }

    #[allow(dead_code)] // Used across test binaries
    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }
}
