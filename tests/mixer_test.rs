use std::collections::HashMap;

use tastemix::mixer::aggregate::aggregate;
use tastemix::mixer::assemble::{MAX_PLAYLIST_SIZE, assemble};
use tastemix::mixer::mood::filter_by_mood;
use tastemix::mixer::seeds::{
    DEFAULT_TRACK_DURATION_MS, MAX_SEEDS_PER_KIND, SeedSelection, promote_track_seed,
};
use tastemix::types::{
    ArtistSeed, AudioFeatures, CandidateTrack, GenreSeed, MergeMode, MoodTarget, Seed, TrackSeed,
};

// Helper function to create a test candidate track
fn create_track(id: &str, name: &str) -> CandidateTrack {
    CandidateTrack {
        id: id.to_string(),
        name: name.to_string(),
        artists: vec![format!("{}_artist", id)],
        album_image_url: None,
        duration_ms: 180_000,
    }
}

// Helper function to create a feature vector keyed by the same id
fn create_features(id: &str, energy: f64, valence: f64, danceability: f64, acousticness: f64) -> AudioFeatures {
    AudioFeatures {
        id: id.to_string(),
        energy,
        valence,
        danceability,
        acousticness,
    }
}

fn feature_map(features: Vec<AudioFeatures>) -> HashMap<String, AudioFeatures> {
    features.into_iter().map(|f| (f.id.clone(), f)).collect()
}

#[test]
fn test_aggregate_dedups_by_id() {
    let lists = vec![
        vec![create_track("a", "A"), create_track("b", "B")],
        vec![create_track("b", "B"), create_track("c", "C")],
    ];

    let pool = aggregate(lists);
    let ids: Vec<&str> = pool.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn test_aggregate_idempotence() {
    let lists = vec![
        vec![create_track("a", "A"), create_track("b", "B")],
        vec![create_track("b", "B"), create_track("c", "C")],
    ];

    let once = aggregate(lists);
    let twice = aggregate(vec![once.clone()]);

    let once_ids: Vec<&str> = once.iter().map(|t| t.id.as_str()).collect();
    let twice_ids: Vec<&str> = twice.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(once_ids, twice_ids);
}

#[test]
fn test_aggregate_drops_missing_ids() {
    let lists = vec![vec![
        create_track("a", "A"),
        create_track("", "no id"),
        create_track("b", "B"),
    ]];

    let pool = aggregate(lists);
    assert_eq!(pool.len(), 2);
    assert!(pool.iter().all(|t| !t.id.is_empty()));
}

#[test]
fn test_aggregate_last_write_wins_keeps_position() {
    let lists = vec![
        vec![create_track("a", "first copy"), create_track("b", "B")],
        vec![create_track("a", "second copy")],
    ];

    let pool = aggregate(lists);
    // the later copy supersedes the stored fields, at the first-seen position
    assert_eq!(pool[0].id, "a");
    assert_eq!(pool[0].name, "second copy");
    assert_eq!(pool[1].id, "b");
}

#[test]
fn test_aggregate_three_seeds_with_overlap() {
    // three artist seeds, ten tracks each, two ids shared across seeds
    let seed_one: Vec<CandidateTrack> =
        (0..10).map(|i| create_track(&format!("a{}", i), "track")).collect();
    let mut seed_two: Vec<CandidateTrack> =
        (0..8).map(|i| create_track(&format!("b{}", i), "track")).collect();
    seed_two.push(create_track("a0", "track"));
    seed_two.push(create_track("a1", "track"));
    let seed_three: Vec<CandidateTrack> =
        (0..10).map(|i| create_track(&format!("c{}", i), "track")).collect();

    let pool = aggregate(vec![seed_one, seed_two, seed_three]);
    assert_eq!(pool.len(), 28);
}

#[test]
fn test_mood_filter_midpoint_match() {
    // all deltas within the band, acousticness below the ceiling
    let target = MoodTarget::default();
    let tracks = vec![create_track("a", "A")];
    let features = feature_map(vec![create_features("a", 0.6, 0.5, 0.5, 0.3)]);

    let result = filter_by_mood(tracks, &target, &features, 0.15);
    assert_eq!(result.len(), 1);
}

#[test]
fn test_mood_filter_rejects_too_acoustic() {
    let target = MoodTarget::default();
    let tracks = vec![create_track("a", "A")];
    let features = feature_map(vec![create_features("a", 0.5, 0.5, 0.5, 0.7)]);

    let result = filter_by_mood(tracks, &target, &features, 0.15);
    assert!(result.is_empty());
}

#[test]
fn test_mood_filter_acousticness_is_one_sided() {
    // far less acoustic than requested still passes
    let target = MoodTarget {
        acousticness: 0.9,
        ..MoodTarget::default()
    };
    let tracks = vec![create_track("a", "A")];
    let features = feature_map(vec![create_features("a", 0.5, 0.5, 0.5, 0.0)]);

    let result = filter_by_mood(tracks, &target, &features, 0.15);
    assert_eq!(result.len(), 1);
}

#[test]
fn test_mood_filter_without_features_is_noop() {
    let target = MoodTarget::default();
    let tracks = vec![create_track("a", "A"), create_track("b", "B")];

    let result = filter_by_mood(tracks.clone(), &target, &HashMap::new(), 0.15);
    assert_eq!(result.len(), tracks.len());
}

#[test]
fn test_mood_filter_excludes_per_track_miss() {
    // feature data exists, but not for track b
    let target = MoodTarget::default();
    let tracks = vec![create_track("a", "A"), create_track("b", "B")];
    let features = feature_map(vec![create_features("a", 0.5, 0.5, 0.5, 0.5)]);

    let result = filter_by_mood(tracks, &target, &features, 0.15);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "a");
}

#[test]
fn test_mood_filter_widening_tolerance_is_monotonic() {
    let target = MoodTarget::default();
    let tracks: Vec<CandidateTrack> =
        (0..11).map(|i| create_track(&format!("t{}", i), "track")).collect();
    let features = feature_map(
        (0..11)
            .map(|i| {
                let v = i as f64 / 10.0;
                create_features(&format!("t{}", i), v, v, v, v)
            })
            .collect(),
    );

    let narrow = filter_by_mood(tracks.clone(), &target, &features, 0.15);
    let wide = filter_by_mood(tracks, &target, &features, 0.30);

    assert!(wide.len() >= narrow.len());
    for track in &narrow {
        assert!(wide.iter().any(|t| t.id == track.id));
    }
}

#[test]
fn test_assemble_truncation_bound() {
    let filtered: Vec<CandidateTrack> =
        (0..80).map(|i| create_track(&format!("t{}", i), "track")).collect();

    let result = assemble(filtered, MergeMode::Replace, Vec::new());
    assert_eq!(result.len(), MAX_PLAYLIST_SIZE);
    // insertion order, not re-ranked
    assert_eq!(result[0].id, "t0");
    assert_eq!(result[49].id, "t49");
}

#[test]
fn test_assemble_replace_below_bound() {
    let filtered: Vec<CandidateTrack> =
        (0..7).map(|i| create_track(&format!("t{}", i), "track")).collect();
    let existing = vec![create_track("old", "old")];

    let result = assemble(filtered, MergeMode::Replace, existing);
    assert_eq!(result.len(), 7);
    assert!(result.iter().all(|t| t.id != "old"));
}

#[test]
fn test_assemble_append_preserves_existing_and_dedups() {
    let existing = vec![create_track("a", "A"), create_track("b", "B")];
    let filtered = vec![
        create_track("b", "B"),
        create_track("c", "C"),
        create_track("d", "D"),
    ];

    let result = assemble(filtered, MergeMode::Append, existing);
    let ids: Vec<&str> = result.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c", "d"]);
}

#[test]
fn test_assemble_append_has_no_duplicates() {
    let existing: Vec<CandidateTrack> =
        (0..30).map(|i| create_track(&format!("e{}", i), "track")).collect();
    let mut filtered: Vec<CandidateTrack> =
        (0..30).map(|i| create_track(&format!("n{}", i), "track")).collect();
    filtered.push(create_track("e5", "track"));
    filtered.push(create_track("e6", "track"));

    let result = assemble(filtered, MergeMode::Append, existing.clone());

    let mut seen = std::collections::HashSet::new();
    assert!(result.iter().all(|t| seen.insert(t.id.clone())));

    // every existing id survives the merge
    for track in &existing {
        assert!(result.iter().any(|t| t.id == track.id));
    }
}

#[test]
fn test_seed_selection_cap() {
    let mut selection = SeedSelection::default();

    for i in 0..MAX_SEEDS_PER_KIND {
        let added = selection.add(Seed::Artist(ArtistSeed {
            id: format!("a{}", i),
            name: format!("Artist {}", i),
        }));
        assert!(added.is_ok());
    }

    let overflow = selection.add(Seed::Artist(ArtistSeed {
        id: "a99".to_string(),
        name: "One Too Many".to_string(),
    }));
    assert!(overflow.is_err());

    // other categories are capped independently
    let genre = selection.add(Seed::Genre(GenreSeed {
        name: "synthwave".to_string(),
    }));
    assert!(genre.is_ok());
}

#[test]
fn test_seed_selection_rejects_duplicates() {
    let mut selection = SeedSelection::default();

    let seed = Seed::Artist(ArtistSeed {
        id: "a1".to_string(),
        name: "Artist".to_string(),
    });
    assert!(selection.add(seed.clone()).is_ok());
    assert!(selection.add(seed).is_err());
}

#[test]
fn test_seed_selection_removal_by_identity() {
    let mut selection = SeedSelection::default();
    selection
        .add(Seed::Artist(ArtistSeed {
            id: "a1".to_string(),
            name: "Artist".to_string(),
        }))
        .unwrap();
    selection
        .add(Seed::Genre(GenreSeed {
            name: "techno".to_string(),
        }))
        .unwrap();

    assert!(selection.remove_artist("a1"));
    assert!(!selection.remove_artist("a1"));
    assert!(selection.remove_genre("techno"));
    assert!(!selection.remove_genre("house"));
    assert!(selection.is_empty());
}

#[test]
fn test_promote_track_seed_backfills_defaults() {
    let seed = TrackSeed {
        id: "t1".to_string(),
        name: "Song".to_string(),
        artist_name: "Artist".to_string(),
        image_url: None,
        duration_ms: None,
    };

    let candidate = promote_track_seed(&seed);
    assert_eq!(candidate.id, "t1");
    assert_eq!(candidate.artists, vec!["Artist".to_string()]);
    assert_eq!(candidate.duration_ms, DEFAULT_TRACK_DURATION_MS);
}

#[test]
fn test_promote_track_seed_keeps_known_duration() {
    let seed = TrackSeed {
        id: "t1".to_string(),
        name: "Song".to_string(),
        artist_name: "Artist".to_string(),
        image_url: Some("https://example.com/cover.jpg".to_string()),
        duration_ms: Some(123_456),
    };

    let candidate = promote_track_seed(&seed);
    assert_eq!(candidate.duration_ms, 123_456);
    assert_eq!(
        candidate.album_image_url.as_deref(),
        Some("https://example.com/cover.jpg")
    );
}
