use std::collections::HashMap;

use reqwest::Method;

use crate::{
    config,
    management::TokenManager,
    spotify::request,
    types::{
        ApiArtistFull, ApiTrack, ArtistSearchResponse, AudioFeatures, AudioFeaturesResponse,
        CandidateTrack, TopTracksResponse, TrackSearchResponse, UserProfile,
    },
    utils, warning,
};

/// Retrieves an artist's top tracks, market-scoped.
///
/// Used to resolve artist seeds. The function loads its own token manager
/// so it can run inside a spawned fetch task; any failure (missing
/// credentials, network, malformed payload) degrades to an empty list so a
/// single seed never aborts a whole generation.
pub async fn get_artist_top_tracks(artist_id: &str) -> Vec<CandidateTrack> {
    let mut tokens = match TokenManager::load().await {
        Ok(tokens) => tokens,
        Err(_) => {
            warning!("No stored credentials. Please run tastemix auth");
            return Vec::new();
        }
    };

    let endpoint = format!(
        "/artists/{id}/top-tracks?market={market}",
        id = artist_id,
        market = &config::spotify_market()
    );

    let Some(json) = request::request(&mut tokens, Method::GET, &endpoint, None).await else {
        return Vec::new();
    };

    match serde_json::from_value::<TopTracksResponse>(json) {
        Ok(response) => response
            .tracks
            .into_iter()
            .filter_map(ApiTrack::into_candidate)
            .collect(),
        Err(e) => {
            warning!("Unexpected top-tracks payload: {}", e);
            Vec::new()
        }
    }
}

/// Resolves a genre seed through a genre-scoped track search.
///
/// Ten popular tracks per genre gives the aggregation a reasonable pool
/// without flooding it from a single seed. Failures degrade to an empty
/// list, like every other per-seed fetch.
pub async fn search_tracks_by_genre(genre: &str) -> Vec<CandidateTrack> {
    let mut tokens = match TokenManager::load().await {
        Ok(tokens) => tokens,
        Err(_) => {
            warning!("No stored credentials. Please run tastemix auth");
            return Vec::new();
        }
    };

    let endpoint = format!("/search?q=genre:\"{}\"&type=track&limit=10", genre);

    let Some(json) = request::request(&mut tokens, Method::GET, &endpoint, None).await else {
        return Vec::new();
    };

    match serde_json::from_value::<TrackSearchResponse>(json) {
        Ok(response) => response
            .tracks
            .items
            .into_iter()
            .filter_map(ApiTrack::into_candidate)
            .collect(),
        Err(e) => {
            warning!("Unexpected search payload: {}", e);
            Vec::new()
        }
    }
}

/// Fetches audio feature vectors for the given track ids, keyed by id.
///
/// The endpoint accepts at most 100 ids per call, so the pool is fetched in
/// chunks and merged into one map. Ids the provider cannot analyze come
/// back as `null` entries and are simply absent from the result; the mood
/// filter treats such tracks as disqualified.
pub async fn get_audio_features(track_ids: &[String]) -> HashMap<String, AudioFeatures> {
    let mut features: HashMap<String, AudioFeatures> = HashMap::new();
    if track_ids.is_empty() {
        return features;
    }

    let mut tokens = match TokenManager::load().await {
        Ok(tokens) => tokens,
        Err(_) => {
            warning!("No stored credentials. Please run tastemix auth");
            return features;
        }
    };

    for chunk in utils::chunk_ids(track_ids, 100) {
        let endpoint = format!("/audio-features?ids={}", chunk.join(","));

        let Some(json) = request::request(&mut tokens, Method::GET, &endpoint, None).await else {
            continue;
        };

        match serde_json::from_value::<AudioFeaturesResponse>(json) {
            Ok(response) => {
                for feature in response.audio_features.into_iter().flatten() {
                    features.insert(feature.id.clone(), feature);
                }
            }
            Err(e) => warning!("Unexpected audio-features payload: {}", e),
        }
    }

    features
}

/// Searches artists by free-text query, for seed lookup.
pub async fn search_artists(tokens: &mut TokenManager, query: &str) -> Vec<ApiArtistFull> {
    let endpoint = format!("/search?q={}&type=artist&limit=10", query);

    let Some(json) = request::request(tokens, Method::GET, &endpoint, None).await else {
        return Vec::new();
    };

    match serde_json::from_value::<ArtistSearchResponse>(json) {
        Ok(response) => response.artists.items,
        Err(e) => {
            warning!("Unexpected search payload: {}", e);
            Vec::new()
        }
    }
}

/// Searches tracks by free-text query, for seed lookup.
pub async fn search_tracks(tokens: &mut TokenManager, query: &str) -> Vec<CandidateTrack> {
    let endpoint = format!("/search?q={}&type=track&limit=10", query);

    let Some(json) = request::request(tokens, Method::GET, &endpoint, None).await else {
        return Vec::new();
    };

    match serde_json::from_value::<TrackSearchResponse>(json) {
        Ok(response) => response
            .tracks
            .items
            .into_iter()
            .filter_map(ApiTrack::into_candidate)
            .collect(),
        Err(e) => {
            warning!("Unexpected search payload: {}", e);
            Vec::new()
        }
    }
}

/// Retrieves the authenticated user's profile.
///
/// The publisher uses this to resolve the playlist owner; a caller-supplied
/// user id is never trusted.
pub async fn get_my_profile(tokens: &mut TokenManager) -> Option<UserProfile> {
    let json = request::request(tokens, Method::GET, "/me", None).await?;

    match serde_json::from_value::<UserProfile>(json) {
        Ok(profile) => Some(profile),
        Err(e) => {
            warning!("Unexpected profile payload: {}", e);
            None
        }
    }
}

/// Retrieves the user's top artists for the given time range.
pub async fn get_top_artists(
    tokens: &mut TokenManager,
    time_range: &str,
    limit: u32,
) -> Vec<ApiArtistFull> {
    let endpoint = format!(
        "/me/top/artists?time_range={time_range}&limit={limit}",
        time_range = time_range,
        limit = limit
    );

    let Some(json) = request::request(tokens, Method::GET, &endpoint, None).await else {
        return Vec::new();
    };

    #[derive(serde::Deserialize)]
    struct TopArtists {
        items: Vec<ApiArtistFull>,
    }

    match serde_json::from_value::<TopArtists>(json) {
        Ok(response) => response.items,
        Err(e) => {
            warning!("Unexpected top-items payload: {}", e);
            Vec::new()
        }
    }
}

/// Retrieves the user's top tracks for the given time range.
pub async fn get_top_tracks(
    tokens: &mut TokenManager,
    time_range: &str,
    limit: u32,
) -> Vec<CandidateTrack> {
    let endpoint = format!(
        "/me/top/tracks?time_range={time_range}&limit={limit}",
        time_range = time_range,
        limit = limit
    );

    let Some(json) = request::request(tokens, Method::GET, &endpoint, None).await else {
        return Vec::new();
    };

    #[derive(serde::Deserialize)]
    struct TopTracks {
        items: Vec<ApiTrack>,
    }

    match serde_json::from_value::<TopTracks>(json) {
        Ok(response) => response
            .items
            .into_iter()
            .filter_map(ApiTrack::into_candidate)
            .collect(),
        Err(e) => {
            warning!("Unexpected top-items payload: {}", e);
            Vec::new()
        }
    }
}
