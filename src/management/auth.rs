use chrono::Utc;

use crate::{error::MixerError, management::CredentialStore, spotify, warning};

/// Token lifecycle on top of the credential store: hands out a valid access
/// token, refreshing transparently within the expiry safety margin.
///
/// `None` results mean "must re-authenticate"; refresh failure is a normal,
/// expected flow outcome, not an error. The refresh token is only discarded
/// when the provider explicitly rejects it.
pub struct TokenManager {
    store: CredentialStore,
}

impl TokenManager {
    pub fn new(store: CredentialStore) -> Self {
        TokenManager { store }
    }

    pub async fn load() -> Result<Self, String> {
        Ok(Self {
            store: CredentialStore::load().await?,
        })
    }

    pub async fn get_valid_access_token(&mut self) -> Option<String> {
        let credentials = self.store.current()?.clone();
        if !credentials.needs_refresh(Utc::now().timestamp_millis()) {
            return Some(credentials.access_token);
        }

        self.refresh_and_store(&credentials.refresh_token).await
    }

    /// Unconditional refresh, used by the gateway after a 401 on a token
    /// that still looked valid locally.
    pub async fn force_refresh(&mut self) -> Option<String> {
        let refresh_token = self.store.current()?.refresh_token.clone();
        self.refresh_and_store(&refresh_token).await
    }

    async fn refresh_and_store(&mut self, refresh_token: &str) -> Option<String> {
        match spotify::auth::refresh(refresh_token).await {
            Ok(credentials) => {
                let access_token = credentials.access_token.clone();
                self.store.replace(credentials);
                if let Err(e) = self.store.persist().await {
                    warning!("Failed to persist refreshed credentials: {}", e);
                }
                Some(access_token)
            }
            Err(MixerError::ProviderRejected(detail)) => {
                // revoked refresh token: the whole credential set is invalid
                warning!("Refresh token rejected ({}). Run tastemix auth.", detail);
                if let Err(e) = self.store.clear().await {
                    warning!("Failed to clear credentials: {}", e);
                }
                None
            }
            Err(e) => {
                warning!("Token refresh failed: {}", e);
                None
            }
        }
    }

    pub async fn logout(&mut self) -> Result<(), String> {
        self.store.clear().await
    }
}
