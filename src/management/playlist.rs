use std::path::PathBuf;

use crate::types::CandidateTrack;

/// Persists the working playlist: the in-session, not-yet-published track
/// list the user edits. Replaced wholesale on generate, extended on append,
/// never silently persisted anywhere else.
pub struct PlaylistManager {
    tracks: Vec<CandidateTrack>,
}

impl PlaylistManager {
    pub fn new() -> Self {
        PlaylistManager { tracks: Vec::new() }
    }

    pub async fn load() -> Result<Self, String> {
        let path = Self::state_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let tracks: Vec<CandidateTrack> =
            serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { tracks })
    }

    pub async fn load_or_default() -> Self {
        Self::load().await.unwrap_or_else(|_| Self::new())
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::state_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.tracks).map_err(|e| e.to_string())?;
        async_fs::write(path, json).await.map_err(|e| e.to_string())
    }

    pub async fn clear(&mut self) -> Result<(), String> {
        self.tracks.clear();
        match async_fs::remove_file(Self::state_path()).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.to_string()),
        }
    }

    pub fn tracks(&self) -> &Vec<CandidateTrack> {
        &self.tracks
    }

    pub fn replace(&mut self, tracks: Vec<CandidateTrack>) {
        self.tracks = tracks;
    }

    pub fn remove_track(&mut self, track_id: &str) -> bool {
        let before = self.tracks.len();
        self.tracks.retain(|t| t.id != track_id);
        self.tracks.len() < before
    }

    pub fn count(&self) -> usize {
        self.tracks.len()
    }

    fn state_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("tastemix/state/playlist.json");
        path
    }
}
