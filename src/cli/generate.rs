use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    info,
    management::{PlaylistManager, SelectionManager},
    mixer, success,
    types::{CandidateTrack, MergeMode, PlaylistTableRow},
    utils, warning,
};

pub async fn generate(append: bool) {
    let selection_mgr = SelectionManager::load_or_default().await;
    let selection = selection_mgr.selection();

    if selection.is_empty() {
        warning!("Please select at least one artist, track, or genre seed first.");
        return;
    }

    let mode = if append {
        MergeMode::Append
    } else {
        MergeMode::Replace
    };

    let mut playlist_mgr = PlaylistManager::load_or_default().await;
    let existing = playlist_mgr.tracks().clone();
    let existing_count = existing.len();

    let pb = ProgressBar::new_spinner();
    pb.set_message("Mixing tracks...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let tracks = mixer::generate(selection, mode, existing).await;
    pb.finish_and_clear();

    if tracks.is_empty() {
        info!("Nothing matched the current seeds and mood. Try widening the selection.");
    }

    let count = tracks.len();
    playlist_mgr.replace(tracks);
    if let Err(e) = playlist_mgr.persist().await {
        warning!("Failed to persist the working playlist: {}", e);
        return;
    }

    match mode {
        MergeMode::Append => success!(
            "Working playlist now holds {} tracks ({} added).",
            count,
            count.saturating_sub(existing_count)
        ),
        MergeMode::Replace => success!("Generated a working playlist of {} tracks.", count),
    }

    print_playlist(playlist_mgr.tracks());
}

pub fn print_playlist(tracks: &[CandidateTrack]) {
    if tracks.is_empty() {
        return;
    }

    let table_rows: Vec<PlaylistTableRow> = tracks
        .iter()
        .enumerate()
        .map(|(index, t)| PlaylistTableRow {
            position: index + 1,
            name: t.name.clone(),
            artists: utils::join_artists(&t.artists),
            duration: utils::format_duration(t.duration_ms),
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}
