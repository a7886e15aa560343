use std::collections::HashSet;

use crate::types::{CandidateTrack, MergeMode};

/// Upper bound of the working playlist.
pub const MAX_PLAYLIST_SIZE: usize = 50;

/// Bounds the filtered candidates and merges them into the existing working
/// playlist.
///
/// The filtered list is truncated to the first 50 entries in the order the
/// aggregation produced. Replace discards the existing playlist; Append
/// keeps it untouched and adds only entries whose id is not already
/// present.
pub fn assemble(
    filtered: Vec<CandidateTrack>,
    mode: MergeMode,
    existing: Vec<CandidateTrack>,
) -> Vec<CandidateTrack> {
    let mut truncated = filtered;
    truncated.truncate(MAX_PLAYLIST_SIZE);

    match mode {
        MergeMode::Replace => truncated,
        MergeMode::Append => {
            let existing_ids: HashSet<String> =
                existing.iter().map(|t| t.id.clone()).collect();
            let mut merged = existing;
            merged.extend(
                truncated
                    .into_iter()
                    .filter(|t| !existing_ids.contains(&t.id)),
            );
            merged
        }
    }
}
