use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::{ArtistSeed, GenreSeed, Seed, TrackSeed};

/// Favorite seeds, one fixed field per seed kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Favorites {
    pub artists: Vec<ArtistSeed>,
    pub tracks: Vec<TrackSeed>,
    pub genres: Vec<GenreSeed>,
}

/// Persists favorite seeds. Toggling dispatches on the tagged `Seed`
/// variant onto the matching fixed field; identity is the id for artists
/// and tracks, the name for genres.
pub struct FavoritesManager {
    favorites: Favorites,
}

impl FavoritesManager {
    pub fn new() -> Self {
        FavoritesManager {
            favorites: Favorites::default(),
        }
    }

    pub async fn load() -> Result<Self, String> {
        let path = Self::state_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let favorites: Favorites = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { favorites })
    }

    pub async fn load_or_default() -> Self {
        Self::load().await.unwrap_or_else(|_| Self::new())
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::state_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.favorites).map_err(|e| e.to_string())?;
        async_fs::write(path, json).await.map_err(|e| e.to_string())
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    /// Returns true when the seed was added, false when it was removed.
    pub fn toggle(&mut self, seed: Seed) -> bool {
        match seed {
            Seed::Artist(artist) => {
                toggle_by(&mut self.favorites.artists, artist, |a, b| a.id == b.id)
            }
            Seed::Track(track) => {
                toggle_by(&mut self.favorites.tracks, track, |a, b| a.id == b.id)
            }
            Seed::Genre(genre) => {
                toggle_by(&mut self.favorites.genres, genre, |a, b| a.name == b.name)
            }
        }
    }

    fn state_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("tastemix/state/favorites.json");
        path
    }
}

fn toggle_by<T>(list: &mut Vec<T>, item: T, same: impl Fn(&T, &T) -> bool) -> bool {
    if let Some(pos) = list.iter().position(|existing| same(existing, &item)) {
        list.remove(pos);
        false
    } else {
        list.push(item);
        true
    }
}
