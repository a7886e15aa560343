use tabled::Table;

use crate::{
    error,
    management::TokenManager,
    spotify, utils, warning,
    types::{ArtistTableRow, TrackTableRow},
};

pub async fn top_artists(time_range: String, limit: u32) {
    let mut tokens = load_tokens().await;

    let artists = spotify::tracks::get_top_artists(&mut tokens, &time_range, limit).await;
    if artists.is_empty() {
        warning!("No top artists available.");
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

pub async fn top_tracks(time_range: String, limit: u32) {
    let mut tokens = load_tokens().await;

    let tracks = spotify::tracks::get_top_tracks(&mut tokens, &time_range, limit).await;
    if tracks.is_empty() {
        warning!("No top tracks available.");
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
