use serde_json::json;
use tastemix::types::{Credentials, EXPIRY_MARGIN_MS};

fn create_credentials(expires_at: i64) -> Credentials {
    Credentials {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
        expires_at,
    }
}

#[test]
fn test_needs_refresh_boundary() {
    let expires_at = 1_700_000_000_000;
    let credentials = create_credentials(expires_at);

    // strictly before the margin: no refresh
    assert!(!credentials.needs_refresh(expires_at - EXPIRY_MARGIN_MS - 1));

    // exactly at the margin: refresh
    assert!(credentials.needs_refresh(expires_at - EXPIRY_MARGIN_MS));

    // at and past expiry: refresh
    assert!(credentials.needs_refresh(expires_at));
    assert!(credentials.needs_refresh(expires_at + 1));
}

#[test]
fn test_from_token_response_full() {
    let now = 1_700_000_000_000;
    let json = json!({
        "access_token": "new-access",
        "refresh_token": "new-refresh",
        "expires_in": 3600,
        "token_type": "Bearer",
        "scope": "user-read-private"
    });

    let credentials = Credentials::from_token_response(&json, None, now).unwrap();
    assert_eq!(credentials.access_token, "new-access");
    assert_eq!(credentials.refresh_token, "new-refresh");
    assert_eq!(credentials.expires_at, now + 3600 * 1000);
}

#[test]
fn test_from_token_response_carries_over_refresh_token() {
    // the refresh response may omit refresh_token; the previous one stays
    let now = 1_700_000_000_000;
    let json = json!({
        "access_token": "new-access",
        "expires_in": 3600
    });

    let credentials = Credentials::from_token_response(&json, Some("old-refresh"), now).unwrap();
    assert_eq!(credentials.refresh_token, "old-refresh");
}

#[test]
fn test_from_token_response_prefers_rotated_refresh_token() {
    let now = 1_700_000_000_000;
    let json = json!({
        "access_token": "new-access",
        "refresh_token": "rotated-refresh",
        "expires_in": 3600
    });

    let credentials = Credentials::from_token_response(&json, Some("old-refresh"), now).unwrap();
    assert_eq!(credentials.refresh_token, "rotated-refresh");
}

#[test]
fn test_from_token_response_defaults_expiry() {
    let now = 1_700_000_000_000;
    let json = json!({
        "access_token": "new-access",
        "refresh_token": "new-refresh"
    });

    let credentials = Credentials::from_token_response(&json, None, now).unwrap();
    assert_eq!(credentials.expires_at, now + 3600 * 1000);
}

#[test]
fn test_from_token_response_requires_access_token() {
    let json = json!({
        "refresh_token": "new-refresh",
        "expires_in": 3600
    });

    assert!(Credentials::from_token_response(&json, None, 0).is_err());
}

#[test]
fn test_fresh_token_is_not_refreshed() {
    // a token a full hour from expiry is handed out as-is
    let now = 1_700_000_000_000;
    let credentials = create_credentials(now + 3_600_000);
    assert!(!credentials.needs_refresh(now));
}
