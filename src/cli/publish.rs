use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error::MixerError,
    info,
    management::PlaylistManager,
    spotify, success, utils, warning,
};

pub async fn publish(name: Option<String>) {
    let playlist_mgr = PlaylistManager::load_or_default().await;

    if playlist_mgr.count() == 0 {
        warning!("The working playlist is empty. Generate tracks first.");
        return;
    }

    let track_ids: Vec<String> = playlist_mgr.tracks().iter().map(|t| t.id.clone()).collect();

    let playlist_name = match name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()) {
        Some(name) => name,
        None => utils::default_playlist_name(track_ids.len()),
    };

    info!("Publishing '{}' with {} tracks...", playlist_name, track_ids.len());

    let pb = ProgressBar::new_spinner();
    pb.set_message("Creating playlist on Spotify...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = spotify::playlist::publish(&playlist_name, &track_ids).await;
    pb.finish_and_clear();

    match result {
        Ok(published) => {
            success!("Playlist '{}' saved: {}", playlist_name, published.playlist_url);
            if webbrowser::open(&published.playlist_url).is_err() {
                info!("Open it at {}", published.playlist_url);
            }
        }
        Err(MixerError::PartialPublish {
            playlist_url,
            failed_chunks,
            total_chunks,
            ..
        }) => {
            warning!(
                "Playlist created at {} but {} of {} track batches failed. It is incomplete.",
                playlist_url,
                failed_chunks.len(),
                total_chunks
            );
        }
        Err(MixerError::ProviderRejected(detail)) => {
            warning!("Authentication failed ({}). Please run tastemix auth.", detail);
        }
        Err(e) => warning!("Failed to publish playlist: {}", e),
    }
}
