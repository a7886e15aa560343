//! # Generation Pipeline
//!
//! The core of the mixer: turns heterogeneous seed types into a bounded,
//! mood-filtered track list. A single generation request runs four strictly
//! sequential stages, each fully consuming the previous stage's output:
//!
//! ```text
//! Seed Selection (artists, genres, tracks + mood targets)
//!          ↓
//! Seed Resolution     concurrent per-seed fetches, failures degrade to
//!                     empty contributions
//!          ↓
//! Aggregation/Dedup   flat candidate pool, unique by track id
//!          ↓
//! Mood Filter         fixed-width tolerance band over audio features
//!          ↓
//! Assembly            truncate to 50, replace or append-unique
//! ```
//!
//! The pool is deliberately unranked: no seed is prioritized over another,
//! and truncation keeps the first candidates in insertion order. Audio
//! features are fetched once for the whole pool, between aggregation and
//! filtering.

pub mod aggregate;
pub mod assemble;
pub mod mood;
pub mod resolve;
pub mod seeds;

use crate::{
    config,
    spotify,
    types::{CandidateTrack, MergeMode},
};

use seeds::SeedSelection;

/// Runs a full generation request against the current seed selection and
/// merges the outcome into the existing working playlist according to
/// `mode`. An empty result is not an error; it means nothing matched.
pub async fn generate(
    selection: &SeedSelection,
    mode: MergeMode,
    existing: Vec<CandidateTrack>,
) -> Vec<CandidateTrack> {
    let lists = resolve::resolve_seeds(selection).await;
    let pool = aggregate::aggregate(lists);

    let ids: Vec<String> = pool.iter().map(|t| t.id.clone()).collect();
    let features = spotify::tracks::get_audio_features(&ids).await;

    let filtered = mood::filter_by_mood(pool, &selection.mood, &features, config::mood_tolerance());

    assemble::assemble(filtered, mode, existing)
}
