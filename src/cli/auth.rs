use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{error, management::CredentialStore, spotify, success, types::AuthSession};

pub async fn auth(shared_state: Arc<Mutex<Option<AuthSession>>>) {
    spotify::auth::auth(shared_state).await;
}

pub async fn logout() {
    let mut store = match CredentialStore::load().await {
        Ok(store) => store,
        Err(_) => CredentialStore::new(None),
    };

    match store.clear().await {
        Ok(()) => success!("Logged out. Stored credentials removed."),
        Err(e) => error!("Failed to clear credentials: {}", e),
    }
}
