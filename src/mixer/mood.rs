use std::collections::HashMap;

use crate::types::{AudioFeatures, CandidateTrack, MoodTarget};

/// Filters candidates against the mood targets within a tolerance band.
///
/// An empty feature map means no audio analysis was available at all; the
/// filter then passes everything through unchanged ("cannot judge, don't
/// exclude"). A per-track feature miss, by contrast, disqualifies that
/// track.
///
/// The acousticness check is one-sided: tracks less acoustic than the
/// target always pass, only more-acoustic-than-requested is rejected.
pub fn filter_by_mood(
    tracks: Vec<CandidateTrack>,
    target: &MoodTarget,
    features: &HashMap<String, AudioFeatures>,
    tolerance: f64,
) -> Vec<CandidateTrack> {
    if features.is_empty() {
        return tracks;
    }

    tracks
        .into_iter()
        .filter(|track| {
            features
                .get(&track.id)
                .is_some_and(|f| matches_mood(f, target, tolerance))
        })
        .collect()
}

fn matches_mood(features: &AudioFeatures, target: &MoodTarget, tolerance: f64) -> bool {
    (features.energy - target.energy).abs() <= tolerance
        && (features.valence - target.valence).abs() <= tolerance
        && (features.danceability - target.danceability).abs() <= tolerance
        && features.acousticness <= target.acousticness + tolerance
}
