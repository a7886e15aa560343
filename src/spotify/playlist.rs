use reqwest::Method;

use crate::{
    error::MixerError,
    management::TokenManager,
    spotify::{request, tracks},
    types::{
        AddTracksRequest, CreatePlaylistRequest, CreatePlaylistResponse, PublishedPlaylist,
    },
    utils, warning,
};

/// Provider hard limit on track URIs per addition call.
const TRACKS_PER_CHUNK: usize = 100;

/// Creates a remote playlist and populates it with the given tracks.
///
/// The owner is always the authenticated user: the id is resolved from the
/// profile endpoint rather than taken from the caller, so a caller can
/// never target another account. Track URIs are added in chunks of at most
/// 100, one concurrent call per chunk.
///
/// # Errors
///
/// - `MixerError::ProviderRejected` - no usable credentials, or the user id
///   could not be verified; the caller should prompt re-authentication
/// - `MixerError::Unavailable` - playlist creation failed outright
/// - `MixerError::PartialPublish` - the playlist was created but one or
///   more chunk additions failed; carries the playlist and the failed chunk
///   indices so the caller can surface what actually happened
pub async fn publish(name: &str, track_ids: &[String]) -> Result<PublishedPlaylist, MixerError> {
    let mut tokens = TokenManager::load()
        .await
        .map_err(|_| MixerError::ProviderRejected("no stored credentials".to_string()))?;

    let profile = tracks::get_my_profile(&mut tokens)
        .await
        .ok_or_else(|| {
            MixerError::ProviderRejected("could not verify the user id".to_string())
        })?;

    let created = create_playlist(&mut tokens, &profile.id, name).await?;
    let published = PublishedPlaylist {
        playlist_id: created.id.clone(),
        playlist_url: created.external_urls.spotify.clone(),
    };

    let uris: Vec<String> = track_ids.iter().map(|id| utils::track_uri(id)).collect();
    let chunks = utils::chunk_ids(&uris, TRACKS_PER_CHUNK);
    let total_chunks = chunks.len();

    let mut handles = Vec::new();
    for (index, chunk) in chunks.into_iter().enumerate() {
        let playlist_id = created.id.clone();
        let handle = tokio::spawn(async move { add_tracks_chunk(&playlist_id, chunk).await });
        handles.push((index, handle));
    }

    let mut failed_chunks = Vec::new();
    for (index, handle) in handles {
        match handle.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                warning!("Chunk {} failed: {}", index, e);
                failed_chunks.push(index);
            }
            Err(e) => {
                warning!("Task join error on chunk {}: {}", index, e);
                failed_chunks.push(index);
            }
        }
    }

    if !failed_chunks.is_empty() {
        return Err(MixerError::PartialPublish {
            playlist_id: published.playlist_id,
            playlist_url: published.playlist_url,
            failed_chunks,
            total_chunks,
        });
    }

    Ok(published)
}

async fn create_playlist(
    tokens: &mut TokenManager,
    user_id: &str,
    name: &str,
) -> Result<CreatePlaylistResponse, MixerError> {
    let body = serde_json::to_value(CreatePlaylistRequest {
        name: name.to_string(),
        description: "Generated by Spotify Taste Mixer".to_string(),
        public: true,
    })
    .map_err(|e| MixerError::Unavailable(e.to_string()))?;

    let endpoint = format!("/users/{}/playlists", user_id);

    let json = request::request(tokens, Method::POST, &endpoint, Some(&body))
        .await
        .ok_or_else(|| MixerError::Unavailable("playlist creation failed".to_string()))?;

    serde_json::from_value(json).map_err(|e| MixerError::Unavailable(e.to_string()))
}

async fn add_tracks_chunk(playlist_id: &str, uris: Vec<String>) -> Result<(), MixerError> {
    let mut tokens = TokenManager::load()
        .await
        .map_err(MixerError::Unavailable)?;

    let body = serde_json::to_value(AddTracksRequest { uris })
        .map_err(|e| MixerError::Unavailable(e.to_string()))?;

    let endpoint = format!("/playlists/{}/tracks", playlist_id);

    request::request(&mut tokens, Method::POST, &endpoint, Some(&body))
        .await
        .ok_or_else(|| MixerError::Unavailable("track addition failed".to_string()))?;

    Ok(())
}
