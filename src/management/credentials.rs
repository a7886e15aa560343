use std::path::PathBuf;

use crate::types::Credentials;

/// Exclusive owner of the persisted OAuth credentials.
///
/// The store is loaded once at startup, mutated only by the token lifecycle
/// after a successful exchange or refresh, and cleared at logout or when the
/// provider rejects the refresh token. The whole record is replaced in one
/// step, so readers observe either the old-valid or the new-valid
/// credentials, never a torn write.
pub struct CredentialStore {
    path: PathBuf,
    credentials: Option<Credentials>,
}

impl CredentialStore {
    pub fn new(credentials: Option<Credentials>) -> Self {
        Self::at_path(Self::default_path(), credentials)
    }

    pub fn at_path(path: PathBuf, credentials: Option<Credentials>) -> Self {
        CredentialStore { path, credentials }
    }

    pub async fn load() -> Result<Self, String> {
        Self::load_from(Self::default_path()).await
    }

    pub async fn load_from(path: PathBuf) -> Result<Self, String> {
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let credentials: Credentials = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self {
            path,
            credentials: Some(credentials),
        })
    }

    pub fn current(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn replace(&mut self, credentials: Credentials) {
        self.credentials = Some(credentials);
    }

    pub async fn persist(&self) -> Result<(), String> {
        let Some(credentials) = &self.credentials else {
            return Err("no credentials to persist".to_string());
        };

        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(credentials).map_err(|e| e.to_string())?;
        async_fs::write(&self.path, json)
            .await
            .map_err(|e| e.to_string())
    }

    pub async fn clear(&mut self) -> Result<(), String> {
        self.credentials = None;
        match async_fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.to_string()),
        }
    }

    fn default_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("tastemix/cache/credentials.json");
        path
    }
}
