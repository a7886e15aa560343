use crate::{cli::generate::print_playlist, info, management::PlaylistManager, success, warning};

pub async fn show_playlist() {
    let manager = PlaylistManager::load_or_default().await;

    if manager.count() == 0 {
        info!("The working playlist is empty. Run tastemix generate.");
        return;
    }

    info!("Working playlist ({} tracks):", manager.count());
    print_playlist(manager.tracks());
}

pub async fn remove_playlist_track(track_id: String) {
    let mut manager = PlaylistManager::load_or_default().await;

    if !manager.remove_track(&track_id) {
        warning!("No track with id {} in the working playlist.", track_id);
        return;
    }

    match manager.persist().await {
        Ok(()) => success!("Removed track. {} tracks remain.", manager.count()),
        Err(e) => warning!("Failed to persist the working playlist: {}", e),
    }
}

pub async fn clear_playlist() {
    let mut manager = PlaylistManager::load_or_default().await;
    match manager.clear().await {
        Ok(()) => success!("Working playlist cleared."),
        Err(e) => warning!("Failed to clear the working playlist: {}", e),
    }
}
