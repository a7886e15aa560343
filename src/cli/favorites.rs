use tabled::Table;

use crate::{
    info,
    management::FavoritesManager,
    success,
    types::{Seed, SeedTableRow},
    warning,
};

pub async fn favorites_toggle(seed: Seed) {
    let mut manager = FavoritesManager::load_or_default().await;

    let added = manager.toggle(seed);
    match manager.persist().await {
        Ok(()) => {
            if added {
                success!("Added to favorites.");
            } else {
                success!("Removed from favorites.");
            }
        }
        Err(e) => warning!("Failed to persist favorites: {}", e),
    }
}

pub async fn favorites_list() {
    let manager = FavoritesManager::load_or_default().await;
    let favorites = manager.favorites();

    if favorites.artists.is_empty() && favorites.tracks.is_empty() && favorites.genres.is_empty() {
        info!("No favorites yet. Use tastemix favorites toggle.");
        return;
    }

    let mut table_rows: Vec<SeedTableRow> = Vec::new();
    for artist in &favorites.artists {
        table_rows.push(SeedTableRow {
            kind: "artist".to_string(),
            name: artist.name.clone(),
            identity: artist.id.clone(),
        });
    }
    for track in &favorites.tracks {
        table_rows.push(SeedTableRow {
            kind: "track".to_string(),
            name: format!("{} - {}", track.artist_name, track.name),
            identity: track.id.clone(),
        });
    }
    for genre in &favorites.genres {
        table_rows.push(SeedTableRow {
            kind: "genre".to_string(),
            name: genre.name.clone(),
            identity: genre.name.clone(),
        });
    }

    let table = Table::new(table_rows);
    println!("{}", table);
}
