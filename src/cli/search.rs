use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error,
    management::TokenManager,
    spotify, utils, warning,
    types::{ArtistTableRow, TrackTableRow},
};

pub async fn search_artists(query: String) {
    let mut tokens = load_tokens().await;

    let pb = spinner("Searching artists...");
    let artists = spotify::tracks::search_artists(&mut tokens, &query).await;
    pb.finish_and_clear();

    if artists.is_empty() {
        warning!("No artists found for '{}'.", query);
        return;
    }

    let table_rows: Vec<ArtistTableRow> = artists
        .into_iter()
        .map(|a| ArtistTableRow {
            name: a.name,
            genres: a.genres.iter().take(3).cloned().collect::<Vec<_>>().join(","),
            id: a.id,
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}

pub async fn search_tracks(query: String) {
    let mut tokens = load_tokens().await;

    let pb = spinner("Searching tracks...");
    let tracks = spotify::tracks::search_tracks(&mut tokens, &query).await;
    pb.finish_and_clear();

    if tracks.is_empty() {
        warning!("No tracks found for '{}'.", query);
        return;
    }

    let table_rows: Vec<TrackTableRow> = tracks
        .into_iter()
        .map(|t| TrackTableRow {
            name: t.name,
            artists: utils::join_artists(&t.artists),
            duration: utils::format_duration(t.duration_ms),
            id: t.id,
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}

async fn load_tokens() -> TokenManager {
    match TokenManager::load().await {
        Ok(tokens) => tokens,
        Err(e) => {
            error!(
                "Failed to load credentials. Please run tastemix auth\n Error: {}",
                e
            );
        }
    }
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
