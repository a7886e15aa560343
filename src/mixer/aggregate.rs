use std::collections::HashMap;

use crate::types::CandidateTrack;

/// Merges per-seed candidate lists into one flat, deduplicated pool.
///
/// Tracks are keyed by id; a later copy of an already-seen id overwrites
/// the stored fields (last write wins) while the track keeps the position
/// of its first occurrence. Tracks without an id are dropped. There is no
/// cross-seed ranking beyond insertion order.
pub fn aggregate(lists: Vec<Vec<CandidateTrack>>) -> Vec<CandidateTrack> {
    let mut pool: Vec<CandidateTrack> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for track in lists.into_iter().flatten() {
        if track.id.is_empty() {
            continue;
        }
        match positions.get(&track.id) {
            Some(&pos) => pool[pos] = track,
            None => {
                positions.insert(track.id.clone(), pool.len());
                pool.push(track);
            }
        }
    }

    pool
}
