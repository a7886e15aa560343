use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{spotify, types::AuthSession, warning};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<Option<AuthSession>>>>,
) -> Html<&'static str> {
    // the provider reports denial via an error query parameter
    if let Some(error) = params.get("error") {
        warning!("Authorization denied: {}", error);
        return Html("<h4>Authorization was denied.</h4>");
    }

    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>");
    };

    let mut state = shared_state.lock().await;
    let Some(ref mut session) = state.as_mut() else {
        return Html("<h4>No authentication in progress.</h4>");
    };

    // single-use state token; a mismatch means the redirect did not come
    // from our authorize request
    match params.get("state") {
        Some(state_token) if *state_token == session.state => {}
        _ => {
            warning!("State mismatch on OAuth callback.");
            return Html("<h4>State mismatch. Please retry the login.</h4>");
        }
    }

    match spotify::auth::exchange_code(code).await {
        Ok(credentials) => {
            session.credentials = Some(credentials);
            Html("<h2>Authentication successful.</h2><p>Close browser window.</p>")
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            Html("<h4>Login failed.</h4>")
        }
    }
}
