use chrono::NaiveDate;
use tastemix::utils::*;

#[test]
fn test_generate_state_token() {
    let token = generate_state_token();

    // Should be exactly 16 characters
    assert_eq!(token.len(), 16);

    // Should contain only alphanumeric characters
    assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated tokens should be different
    let token2 = generate_state_token();
    assert_ne!(token, token2);
}

#[test]
fn test_track_uri() {
    assert_eq!(track_uri("4uLU6hMCjMI75M1A2tKUQC"), "spotify:track:4uLU6hMCjMI75M1A2tKUQC");
}

#[test]
fn test_chunk_ids_scenario_130() {
    // 130 ids must produce exactly two chunks of 100 and 30
    let ids: Vec<String> = (0..130).map(|i| format!("track{}", i)).collect();
    let chunks = chunk_ids(&ids, 100);

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].len(), 100);
    assert_eq!(chunks[1].len(), 30);

    // No id lost or reordered
    let flattened: Vec<String> = chunks.into_iter().flatten().collect();
    assert_eq!(flattened, ids);
}

#[test]
fn test_chunk_ids_boundaries() {
    let empty: Vec<String> = Vec::new();
    assert!(chunk_ids(&empty, 100).is_empty());

    // Exact multiple of the chunk size
    let ids: Vec<String> = (0..200).map(|i| format!("track{}", i)).collect();
    let chunks = chunk_ids(&ids, 100);
    assert_eq!(chunks.len(), 2);
    assert!(chunks.iter().all(|c| c.len() == 100));

    // Fewer ids than the chunk size
    let ids: Vec<String> = (0..3).map(|i| format!("track{}", i)).collect();
    let chunks = chunk_ids(&ids, 100);
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].len(), 3);
}

#[test]
fn test_default_playlist_name() {
    let date = NaiveDate::from_ymd_opt(2025, 8, 6).unwrap();
    assert_eq!(
        default_playlist_name_for(date, 28),
        "Taste Mix (06 Aug - 28 tracks)"
    );

    let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
    assert_eq!(
        default_playlist_name_for(date, 0),
        "Taste Mix (31 Dec - 0 tracks)"
    );
}

#[test]
fn test_truncate_detail() {
    // Short details are untouched
    assert_eq!(truncate_detail("bad request", 100), "bad request");

    // Long details are cut to the limit
    let long = "x".repeat(250);
    let truncated = truncate_detail(&long, 100);
    assert_eq!(truncated.chars().count(), 100);

    // Truncation respects character boundaries
    let unicode = "é".repeat(150);
    let truncated = truncate_detail(&unicode, 100);
    assert_eq!(truncated.chars().count(), 100);
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(200_000), "3:20");
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(59_999), "0:59");
    assert_eq!(format_duration(60_000), "1:00");
    assert_eq!(format_duration(3_605_000), "60:05");
}

#[test]
fn test_join_artists() {
    assert_eq!(join_artists(&[]), "");
    assert_eq!(join_artists(&["Daft Punk".to_string()]), "Daft Punk");
    assert_eq!(
        join_artists(&["Daft Punk".to_string(), "Pharrell Williams".to_string()]),
        "Daft Punk, Pharrell Williams"
    );
}
