use std::{sync::Arc, time::Duration};

use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::{Client, Response, Url, header::AUTHORIZATION};
use serde_json::Value;
use tokio::sync::Mutex;

use crate::{
    config,
    error,
    error::MixerError,
    management::CredentialStore,
    server::start_api_server,
    success,
    types::{AuthSession, Credentials},
    utils, warning,
};

/// Initiates the complete OAuth 2.0 authorization code flow with Spotify.
///
/// This function orchestrates the entire authentication process including:
/// 1. Generating a single-use CSRF state token
/// 2. Starting a local callback server
/// 3. Opening the authorization URL in the user's browser
/// 4. Waiting for the OAuth callback to exchange the code
/// 5. Persisting the obtained credentials for future use
///
/// The app authenticates as a confidential client: the code exchange and
/// all refreshes carry a Basic-Auth header built from the client id and
/// secret, so both must be configured before this flow starts.
///
/// # Arguments
///
/// * `shared_state` - Thread-safe shared state carrying the CSRF token and
///   the resulting credentials between the auth flow and callback handler
///
/// # Error Handling
///
/// - Missing client credentials terminate the program with a configuration
///   error before any network call
/// - Browser launch failures result in a warning with manual URL instructions
/// - Credential persistence failures terminate the program with an error
/// - Authentication timeouts or failures terminate with an error message
pub async fn auth(shared_state: Arc<Mutex<Option<AuthSession>>>) {
    let state_token = utils::generate_state_token();

    let client_id = match config::spotify_client_id() {
        Ok(id) => id,
        Err(e) => error!("{}", e),
    };
    let redirect_uri = match config::spotify_redirect_uri() {
        Ok(uri) => uri,
        Err(e) => error!("{}", e),
    };

    // start API server
    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        start_api_server(server_state).await;
    });

    // Construct the authorization URL
    let auth_url = match Url::parse_with_params(
        &config::spotify_apiauth_url(),
        &[
            ("response_type", "code"),
            ("client_id", client_id.as_str()),
            ("redirect_uri", redirect_uri.as_str()),
            ("state", state_token.as_str()),
            ("scope", config::spotify_scope().as_str()),
            ("show_dialog", "true"),
        ],
    ) {
        Ok(url) => url,
        Err(e) => error!("Failed to build authorization URL: {}", e),
    };

    // Store the state token before the redirect so the callback can verify it
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(AuthSession {
            state: state_token.clone(),
            credentials: None,
        });
    }

    // Open the authorization URL in the default browser
    if webbrowser::open(auth_url.as_str()).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    // wait for callback to be hit
    let credentials = wait_for_credentials(shared_state).await;

    match credentials {
        Some(credentials) => {
            let store = CredentialStore::new(Some(credentials));
            if let Err(e) = store.persist().await {
                error!("Failed to save credentials to cache: {}", e);
            }

            success!("Authentication successful!");
        }
        None => {
            error!("Authentication failed or timed out.");
        }
    }
}

/// Waits for the OAuth callback to complete and deposit credentials.
///
/// Polls the shared state for up to 60 seconds while the callback handler
/// runs the code exchange concurrently.
async fn wait_for_credentials(
    shared_state: Arc<Mutex<Option<AuthSession>>>,
) -> Option<Credentials> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(session) = lock.as_ref() {
            if let Some(credentials) = &session.credentials {
                return Some(credentials.clone());
            }
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges an authorization code for credentials.
///
/// Completes the OAuth 2.0 flow by posting the code to the token endpoint
/// with the Basic-Auth header. The authorization code is single-use and
/// expires quickly, so the exchange happens immediately after the callback
/// receives it.
///
/// # Errors
///
/// - `MixerError::Config` - client id, secret, or redirect URI unset
/// - `MixerError::ProviderRejected` - the provider refused the code
///   (invalid, expired, or already used)
/// - `MixerError::Unavailable` - transport failure or provider outage
pub async fn exchange_code(code: &str) -> Result<Credentials, MixerError> {
    let redirect_uri = config::spotify_redirect_uri()?;
    let auth_header = basic_auth_header()?;

    let client = Client::new();
    let res = client
        .post(&config::spotify_apitoken_url())
        .header(AUTHORIZATION, auth_header)
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri.as_str()),
        ])
        .send()
        .await?;

    read_token_response(res, None).await
}

/// Exchanges a refresh token for fresh credentials.
///
/// The provider may rotate the refresh token; when the response omits one,
/// the token passed in is carried over into the returned credentials.
///
/// # Errors
///
/// - `MixerError::Config` - client credentials unset
/// - `MixerError::ProviderRejected` - the refresh token is invalid or
///   revoked; the caller must discard all stored credentials and force
///   re-authentication
/// - `MixerError::Unavailable` - transport failure or provider outage; the
///   stored credentials remain usable for a later attempt
pub async fn refresh(refresh_token: &str) -> Result<Credentials, MixerError> {
    let auth_header = basic_auth_header()?;

    let client = Client::new();
    let res = client
        .post(&config::spotify_apitoken_url())
        .header(AUTHORIZATION, auth_header)
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])
        .send()
        .await?;

    read_token_response(res, Some(refresh_token)).await
}

fn basic_auth_header() -> Result<String, MixerError> {
    let client_id = config::spotify_client_id()?;
    let client_secret = config::spotify_client_secret()?;
    Ok(format!(
        "Basic {}",
        STANDARD.encode(format!("{}:{}", client_id, client_secret))
    ))
}

async fn read_token_response(
    response: Response,
    previous_refresh: Option<&str>,
) -> Result<Credentials, MixerError> {
    let status = response.status();
    if !status.is_success() {
        let detail = response.text().await.unwrap_or_default();
        let detail = utils::truncate_detail(&detail, 100);
        // only an explicit refusal invalidates credentials; provider
        // outages must not log the user out
        if status.is_client_error() {
            return Err(MixerError::ProviderRejected(detail));
        }
        return Err(MixerError::Unavailable(format!("{}: {}", status, detail)));
    }

    let json: Value = response.json().await?;
    Credentials::from_token_response(&json, previous_refresh, Utc::now().timestamp_millis())
}
