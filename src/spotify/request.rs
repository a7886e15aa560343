use reqwest::{Client, Method, StatusCode};
use serde_json::{Value, json};

use crate::{config, management::TokenManager, warning};

/// Issues an authenticated call against the Spotify Web API.
///
/// This is the single chokepoint every resource call goes through. The
/// contract keeps call sites simple:
///
/// - no valid token available → `None`, without touching the network
/// - HTTP 401 → exactly one refresh attempt and exactly one retry with the
///   new token; a second 401 surfaces as `None`, never a loop
/// - HTTP 204 → `Some` empty object, distinguishing "no content" from
///   failure
/// - any other non-2xx or transport failure → logged and `None`
///
/// # Arguments
///
/// * `tokens` - the token manager backing this call; the 401 recovery path
///   may refresh (and thereby mutate) the stored credentials
/// * `method` - HTTP method
/// * `endpoint` - path plus query relative to the API base URL, e.g. `/me`
/// * `body` - optional JSON body for POST/PUT calls
pub async fn request(
    tokens: &mut TokenManager,
    method: Method,
    endpoint: &str,
    body: Option<&Value>,
) -> Option<Value> {
    let token = tokens.get_valid_access_token().await?;

    let response = match send(&token, method.clone(), endpoint, body).await {
        Ok(response) => response,
        Err(e) => {
            warning!("Request to {} failed: {}", endpoint, e);
            return None;
        }
    };

    if response.status() != StatusCode::UNAUTHORIZED {
        return into_json(endpoint, response).await;
    }

    // one refresh, one retry; a second 401 falls through as failure below
    let token = tokens.force_refresh().await?;
    match send(&token, method, endpoint, body).await {
        Ok(retried) => into_json(endpoint, retried).await,
        Err(e) => {
            warning!("Retry of {} failed: {}", endpoint, e);
            None
        }
    }
}

async fn send(
    token: &str,
    method: Method,
    endpoint: &str,
    body: Option<&Value>,
) -> Result<reqwest::Response, reqwest::Error> {
    let api_url = format!("{uri}{endpoint}", uri = &config::spotify_apiurl());

    let client = Client::new();
    let mut request = client.request(method, &api_url).bearer_auth(token);
    if let Some(body) = body {
        request = request.json(body);
    }
    request.send().await
}

async fn into_json(endpoint: &str, response: reqwest::Response) -> Option<Value> {
    let status = response.status();

    if status == StatusCode::NO_CONTENT {
        return Some(json!({}));
    }

    if !status.is_success() {
        warning!("Spotify API error (Endpoint: {}, Status: {})", endpoint, status);
        return None;
    }

    match response.json::<Value>().await {
        Ok(json) => Some(json),
        Err(e) => {
            warning!("Failed to decode response from {}: {}", endpoint, e);
            None
        }
    }
}
