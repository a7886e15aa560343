use crate::{management::SelectionManager, success, types::MoodTarget, warning};

pub async fn set_mood(
    energy: Option<f64>,
    valence: Option<f64>,
    danceability: Option<f64>,
    acousticness: Option<f64>,
) {
    for value in [energy, valence, danceability, acousticness].into_iter().flatten() {
        if !(0.0..=1.0).contains(&value) {
            warning!("Mood targets must be within 0.0 and 1.0 (got {}).", value);
            return;
        }
    }

    let mut manager = SelectionManager::load_or_default().await;
    let mood = &mut manager.selection_mut().mood;

    if let Some(energy) = energy {
        mood.energy = energy;
    }
    if let Some(valence) = valence {
        mood.valence = valence;
    }
    if let Some(danceability) = danceability {
        mood.danceability = danceability;
    }
    if let Some(acousticness) = acousticness {
        mood.acousticness = acousticness;
    }

    let mood = manager.selection().mood.clone();
    match manager.persist().await {
        Ok(()) => success!(
            "Mood targets: energy {:.2}, valence {:.2}, danceability {:.2}, acousticness {:.2}",
            mood.energy,
            mood.valence,
            mood.danceability,
            mood.acousticness
        ),
        Err(e) => warning!("Failed to persist mood targets: {}", e),
    }
}

pub async fn reset_mood() {
    let mut manager = SelectionManager::load_or_default().await;
    manager.selection_mut().mood = MoodTarget::default();

    match manager.persist().await {
        Ok(()) => success!("Mood targets reset to 0.50 each."),
        Err(e) => warning!("Failed to persist mood targets: {}", e),
    }
}
