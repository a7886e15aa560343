use chrono::{NaiveDate, Utc};
use rand::{Rng, distr::Alphanumeric};

pub fn generate_state_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

pub fn track_uri(id: &str) -> String {
    format!("spotify:track:{}", id)
}

pub fn chunk_ids(ids: &[String], chunk_size: usize) -> Vec<Vec<String>> {
    ids.chunks(chunk_size)
        .map(|chunk| chunk.to_vec())
        .collect()
}

pub fn default_playlist_name(track_count: usize) -> String {
    default_playlist_name_for(Utc::now().date_naive(), track_count)
}

pub fn default_playlist_name_for(date: NaiveDate, track_count: usize) -> String {
    format!(
        "Taste Mix ({} - {} tracks)",
        date.format("%d %b"),
        track_count
    )
}

// Provider error bodies can be arbitrarily large; only the first ~100
// characters are ever surfaced to the user.
pub fn truncate_detail(detail: &str, max_chars: usize) -> String {
    if detail.chars().count() <= max_chars {
        return detail.to_string();
    }
    detail.chars().take(max_chars).collect()
}

pub fn format_duration(duration_ms: u64) -> String {
    let total_seconds = duration_ms / 1000;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

pub fn join_artists(artists: &[String]) -> String {
    artists.join(", ")
}
