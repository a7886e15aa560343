use tabled::Table;

use crate::{
    info,
    management::SelectionManager,
    success,
    types::{Seed, SeedTableRow},
    warning,
};

pub async fn show_seeds() {
    let manager = SelectionManager::load_or_default().await;
    let selection = manager.selection();

    if selection.is_empty() {
        info!("No seeds selected. Use tastemix seeds add-artist/add-genre/add-track.");
    } else {
        let mut table_rows: Vec<SeedTableRow> = Vec::new();
        for artist in &selection.artists {
            table_rows.push(SeedTableRow {
                kind: "artist".to_string(),
                name: artist.name.clone(),
                identity: artist.id.clone(),
            });
        }
        for track in &selection.tracks {
            table_rows.push(SeedTableRow {
                kind: "track".to_string(),
                name: format!("{} - {}", track.artist_name, track.name),
                identity: track.id.clone(),
            });
        }
        for genre in &selection.genres {
            table_rows.push(SeedTableRow {
                kind: "genre".to_string(),
                name: genre.name.clone(),
                identity: genre.name.clone(),
            });
        }

        let table = Table::new(table_rows);
        println!("{}", table);
    }

    let mood = &selection.mood;
    info!(
        "Mood targets: energy {:.2}, valence {:.2}, danceability {:.2}, acousticness {:.2}",
        mood.energy, mood.valence, mood.danceability, mood.acousticness
    );
}

pub async fn add_seed(seed: Seed) {
    let mut manager = SelectionManager::load_or_default().await;

    let label = seed_label(&seed);
    match manager.selection_mut().add(seed) {
        Ok(()) => {
            if let Err(e) = manager.persist().await {
                warning!("Failed to persist selection: {}", e);
                return;
            }
            success!("Added {}.", label);
        }
        Err(e) => warning!("Cannot add seed: {}", e),
    }
}

pub async fn remove_artist_seed(artist_id: String) {
    let mut manager = SelectionManager::load_or_default().await;
    if manager.selection_mut().remove_artist(&artist_id) {
        persist_and_confirm(&manager, "artist").await;
    } else {
        warning!("No artist seed with id {}.", artist_id);
    }
}

pub async fn remove_genre_seed(genre_name: String) {
    let mut manager = SelectionManager::load_or_default().await;
    if manager.selection_mut().remove_genre(&genre_name) {
        persist_and_confirm(&manager, "genre").await;
    } else {
        warning!("No genre seed named {}.", genre_name);
    }
}

pub async fn remove_track_seed(track_id: String) {
    let mut manager = SelectionManager::load_or_default().await;
    if manager.selection_mut().remove_track(&track_id) {
        persist_and_confirm(&manager, "track").await;
    } else {
        warning!("No track seed with id {}.", track_id);
    }
}

pub async fn clear_seeds() {
    let mut manager = SelectionManager::load_or_default().await;
    match manager.clear().await {
        Ok(()) => success!("Selection cleared; mood targets reset."),
        Err(e) => warning!("Failed to clear selection: {}", e),
    }
}

async fn persist_and_confirm(manager: &SelectionManager, kind: &str) {
    match manager.persist().await {
        Ok(()) => success!("Removed {} seed.", kind),
        Err(e) => warning!("Failed to persist selection: {}", e),
    }
}

fn seed_label(seed: &Seed) -> String {
    match seed {
        Seed::Artist(artist) => format!("artist seed {}", artist.name),
        Seed::Genre(genre) => format!("genre seed {}", genre.name),
        Seed::Track(track) => format!("track seed {}", track.name),
    }
}
