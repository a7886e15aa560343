use std::path::PathBuf;

use crate::mixer::seeds::SeedSelection;

/// Persists the seed selection and mood targets between CLI invocations.
pub struct SelectionManager {
    selection: SeedSelection,
}

impl SelectionManager {
    pub fn new() -> Self {
        SelectionManager {
            selection: SeedSelection::default(),
        }
    }

    pub async fn load() -> Result<Self, String> {
        let path = Self::state_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let selection: SeedSelection = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { selection })
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

        let json = serde_json::to_string_pretty(&self.selection).map_err(|e| e.to_string())?;
        async_fs::write(path, json).await.map_err(|e| e.to_string())
    }

    pub async fn clear(&mut self) -> Result<(), String> {
        self.selection = SeedSelection::default();
        match async_fs::remove_file(Self::state_path()).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.to_string()),
        }
    }

    pub fn selection(&self) -> &SeedSelection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SeedSelection {
        &mut self.selection
    }

    fn state_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("tastemix/state/selection.json");
        path
    }
}
