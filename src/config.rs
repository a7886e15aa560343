//! Configuration management for the Spotify Taste Mixer.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including Spotify API credentials, server settings, and tuning
//! parameters of the generation pipeline.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)
//!
//! Client id, client secret, and redirect URI have no defaults: their getters
//! return a `MixerError::Config` so token operations can fail cleanly instead
//! of panicking when the application is misconfigured.

use std::{env, path::PathBuf};

use dotenv;

use crate::error::MixerError;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `tastemix/.env`. This allows users to store
/// configuration securely without hardcoding sensitive values. A missing
/// `.env` file is not an error; variables may come from the environment.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/tastemix/.env`
/// - macOS: `~/Library/Application Support/tastemix/.env`
/// - Windows: `%LOCALAPPDATA%/tastemix/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment is usable, or an error string if
/// directory creation fails.
///
/// # Example
///
/// ```
/// use tastemix::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("tastemix/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn required(var: &str) -> Result<String, MixerError> {
    env::var(var).map_err(|_| MixerError::Config(format!("{} must be set", var)))
}

/// Returns the server address for the local OAuth callback server.
///
/// Retrieves the `SERVER_ADDRESS` environment variable which specifies
/// the address and port where the local HTTP server should bind for
/// handling OAuth callbacks during the authentication flow. Defaults to
/// `127.0.0.1:8888` when unset; the port must match the registered
/// redirect URI.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8888".to_string())
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `SPOTIFY_CLIENT_ID` environment variable which contains
/// the client ID obtained when registering the application with Spotify's
/// developer platform.
///
/// # Errors
///
/// Returns `MixerError::Config` if the variable is not set. Token
/// operations surface this as a non-retryable configuration failure.
pub fn spotify_client_id() -> Result<String, MixerError> {
    required("SPOTIFY_CLIENT_ID")
}

/// Returns the Spotify API client secret for authentication.
///
/// Retrieves the `SPOTIFY_CLIENT_SECRET` environment variable which contains
/// the client secret obtained when registering the application with Spotify's
/// developer platform. It is only ever sent inside the Basic-Auth header of
/// the token endpoints.
///
/// # Errors
///
/// Returns `MixerError::Config` if the variable is not set.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_client_secret() -> Result<String, MixerError> {
    required("SPOTIFY_CLIENT_SECRET")
}

/// Returns the Spotify OAuth redirect URI.
///
/// Retrieves the `SPOTIFY_REDIRECT_URI` environment variable which specifies
/// the callback URL that Spotify should redirect to after user authorization.
/// This must match the redirect URI registered in the Spotify application
/// settings and point at the local callback server.
///
/// # Errors
///
/// Returns `MixerError::Config` if the variable is not set.
pub fn spotify_redirect_uri() -> Result<String, MixerError> {
    required("SPOTIFY_REDIRECT_URI")
}

/// Returns the Spotify API scope permissions.
///
/// Retrieves the `SPOTIFY_SCOPE` environment variable which defines the
/// scope of permissions requested during OAuth authentication. Defaults to
/// the scopes the mixer needs: profile read, top items read, and playlist
/// modification.
pub fn spotify_scope() -> String {
    env::var("SPOTIFY_SCOPE").unwrap_or_else(|_| {
        "user-read-private user-read-email user-top-read playlist-modify-public playlist-modify-private"
            .to_string()
    })
}

/// Returns the Spotify OAuth authorization URL.
///
/// Retrieves the `SPOTIFY_AUTH_URL` environment variable which contains
/// the base URL for Spotify's OAuth authorization endpoint. This is where
/// users are redirected to grant permissions to the application.
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_AUTH_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/authorize".to_string())
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable which contains the
/// base URL for Spotify's Web API endpoints. This is used for all API
/// operations after authentication.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the Spotify OAuth token exchange URL.
///
/// Retrieves the `SPOTIFY_TOKEN_URL` environment variable which contains
/// the URL for exchanging authorization codes for access tokens and for
/// refreshing them during the OAuth flow.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}

/// Returns the market (country code) used for artist top-track lookups.
///
/// Retrieves the `SPOTIFY_MARKET` environment variable. Defaults to `ES`,
/// which keeps the returned tracks playable for the accounts the mixer was
/// built around. Any ISO 3166-1 alpha-2 code is accepted by the API.
pub fn spotify_market() -> String {
    env::var("SPOTIFY_MARKET").unwrap_or_else(|_| "ES".to_string())
}

/// Returns the tolerance band applied by the mood filter.
///
/// Retrieves the `MOOD_TOLERANCE` environment variable, the half-width of
/// the acceptance band around each mood target. Defaults to `0.15`. This is
/// the single most consequential tuning parameter of the filter: widening it
/// only ever admits more tracks.
pub fn mood_tolerance() -> f64 {
    env::var("MOOD_TOLERANCE")
        .ok()
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(0.15)
}
