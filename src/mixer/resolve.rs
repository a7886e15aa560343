use crate::{mixer::seeds, spotify, types::CandidateTrack, warning};

use seeds::SeedSelection;

/// Resolves every seed in the selection into a candidate track list.
///
/// Track seeds are promoted locally; artist and genre seeds fan out as
/// concurrent fetches, each with its own token manager, and the resolver
/// waits for all of them before returning. A failed fetch degrades to an
/// empty list for that seed rather than aborting the whole generation.
///
/// Output order follows the selection: promoted tracks first, then one list
/// per artist seed, then one per genre seed.
pub async fn resolve_seeds(selection: &SeedSelection) -> Vec<Vec<CandidateTrack>> {
    let mut lists: Vec<Vec<CandidateTrack>> = Vec::new();

    let promoted: Vec<CandidateTrack> = selection
        .tracks
        .iter()
        .map(seeds::promote_track_seed)
        .collect();
    if !promoted.is_empty() {
        lists.push(promoted);
    }

    let mut handles = Vec::new();

    for artist in &selection.artists {
        let artist_id = artist.id.clone();
        let handle =
            tokio::spawn(async move { spotify::tracks::get_artist_top_tracks(&artist_id).await });
        handles.push(handle);
    }

    for genre in &selection.genres {
        let genre_name = genre.name.clone();
        let handle =
            tokio::spawn(
                async move { spotify::tracks::search_tracks_by_genre(&genre_name).await },
            );
        handles.push(handle);
    }

    for handle in handles {
        match handle.await {
            Ok(list) => lists.push(list),
            Err(e) => {
                warning!("Task join error: {}", e);
                lists.push(Vec::new());
            }
        }
    }

    lists
}
