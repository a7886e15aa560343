use serde::{Deserialize, Serialize};

use crate::types::{ArtistSeed, CandidateTrack, GenreSeed, MoodTarget, Seed, TrackSeed};

/// Provider API constraint: at most five seeds per category.
pub const MAX_SEEDS_PER_KIND: usize = 5;

/// Duration backfilled onto promoted track seeds that arrived without one,
/// so downstream code always sees a uniform shape.
pub const DEFAULT_TRACK_DURATION_MS: u64 = 200_000;

/// The user's current seed selection plus mood targets. Seeds are immutable
/// once added; removal is by identity (id for artists/tracks, name for
/// genres).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedSelection {
    pub artists: Vec<ArtistSeed>,
    pub genres: Vec<GenreSeed>,
    pub tracks: Vec<TrackSeed>,
    pub mood: MoodTarget,
}

impl SeedSelection {
    /// Adds a seed to its category, rejecting duplicates and enforcing the
    /// per-category cap.
    pub fn add(&mut self, seed: Seed) -> Result<(), String> {
        match seed {
            Seed::Artist(artist) => {
                if self.artists.iter().any(|a| a.id == artist.id) {
                    return Err(format!("artist {} is already selected", artist.name));
                }
                if self.artists.len() >= MAX_SEEDS_PER_KIND {
                    return Err(format!("at most {} artist seeds", MAX_SEEDS_PER_KIND));
                }
                self.artists.push(artist);
            }
            Seed::Genre(genre) => {
                if self.genres.iter().any(|g| g.name == genre.name) {
                    return Err(format!("genre {} is already selected", genre.name));
                }
                if self.genres.len() >= MAX_SEEDS_PER_KIND {
                    return Err(format!("at most {} genre seeds", MAX_SEEDS_PER_KIND));
                }
                self.genres.push(genre);
            }
            Seed::Track(track) => {
                if self.tracks.iter().any(|t| t.id == track.id) {
                    return Err(format!("track {} is already selected", track.name));
                }
                if self.tracks.len() >= MAX_SEEDS_PER_KIND {
                    return Err(format!("at most {} track seeds", MAX_SEEDS_PER_KIND));
                }
                self.tracks.push(track);
            }
        }
        Ok(())
    }

    pub fn remove_artist(&mut self, artist_id: &str) -> bool {
        let before = self.artists.len();
        self.artists.retain(|a| a.id != artist_id);
        self.artists.len() < before
    }

    pub fn remove_genre(&mut self, genre_name: &str) -> bool {
        let before = self.genres.len();
        self.genres.retain(|g| g.name != genre_name);
        self.genres.len() < before
    }

    pub fn remove_track(&mut self, track_id: &str) -> bool {
        let before = self.tracks.len();
        self.tracks.retain(|t| t.id != track_id);
        self.tracks.len() < before
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty() && self.genres.is_empty() && self.tracks.is_empty()
    }
}

/// Promotes a track seed directly into a candidate, no network call.
/// Missing fields are backfilled with fixed defaults.
pub fn promote_track_seed(seed: &TrackSeed) -> CandidateTrack {
    CandidateTrack {
        id: seed.id.clone(),
        name: seed.name.clone(),
        artists: vec![seed.artist_name.clone()],
        album_image_url: seed.image_url.clone(),
        duration_ms: seed.duration_ms.unwrap_or(DEFAULT_TRACK_DURATION_MS),
    }
}
