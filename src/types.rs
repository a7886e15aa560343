use serde::{Deserialize, Serialize};
use serde_json::Value;
use tabled::Tabled;

use crate::error::MixerError;

/// Safety margin before the stored expiry instant at which a token is
/// already treated as expired, absorbing network latency between the
/// validity check and the actual request.
pub const EXPIRY_MARGIN_MS: i64 = 5_000;

/// OAuth credentials as persisted by the credential store. `expires_at` is
/// an absolute unix-millisecond instant so validity survives suspended
/// processes without TTL drift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: i64,
}

impl Credentials {
    /// True once `now` is within the safety margin of the expiry instant.
    pub fn needs_refresh(&self, now_ms: i64) -> bool {
        now_ms >= self.expires_at - EXPIRY_MARGIN_MS
    }

    /// Builds credentials from a token endpoint response body.
    ///
    /// The refresh response may omit `refresh_token`; the previous one is
    /// then carried over, since a refresh token is only ever replaced when
    /// the provider rotates it.
    pub fn from_token_response(
        json: &Value,
        previous_refresh: Option<&str>,
        now_ms: i64,
    ) -> Result<Credentials, MixerError> {
        let access_token = json["access_token"]
            .as_str()
            .ok_or_else(|| MixerError::Unavailable("token response without access_token".into()))?
            .to_string();

        let refresh_token = json["refresh_token"]
            .as_str()
            .or(previous_refresh)
            .unwrap_or_default()
            .to_string();

        let expires_in = json["expires_in"].as_i64().unwrap_or(3600);

        Ok(Credentials {
            access_token,
            refresh_token,
            expires_at: now_ms + expires_in * 1000,
        })
    }
}

/// Shared state between the auth flow and the callback handler: the CSRF
/// state token sent with the authorize redirect, and the credentials filled
/// in once the exchange succeeds.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub state: String,
    pub credentials: Option<Credentials>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtistSeed {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenreSeed {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackSeed {
    pub id: String,
    pub name: String,
    pub artist_name: String,
    pub image_url: Option<String>,
    pub duration_ms: Option<u64>,
}

/// A user-chosen seed. The tagged variants map onto fixed fields of the
/// selection and favorites records; dispatch never goes through type-name
/// strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Seed {
    Artist(ArtistSeed),
    Genre(GenreSeed),
    Track(TrackSeed),
}

/// Mood targets, each the midpoint of the desired range in `[0.0, 1.0]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodTarget {
    pub energy: f64,
    pub valence: f64,
    pub danceability: f64,
    pub acousticness: f64,
}

impl Default for MoodTarget {
    fn default() -> Self {
        MoodTarget {
            energy: 0.5,
            valence: 0.5,
            danceability: 0.5,
            acousticness: 0.5,
        }
    }
}

/// A track under consideration for the working playlist. Ephemeral: created
/// fresh on every generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateTrack {
    pub id: String,
    pub name: String,
    pub artists: Vec<String>,
    pub album_image_url: Option<String>,
    pub duration_ms: u64,
}

/// Provider-computed audio feature vector, keyed by track id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub id: String,
    pub energy: f64,
    pub valence: f64,
    pub danceability: f64,
    pub acousticness: f64,
}

/// Whether a generation result replaces the working playlist or extends it
/// with de-duplication.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MergeMode {
    Replace,
    Append,
}

/// The remote playlist created at publish time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishedPlaylist {
    pub playlist_id: String,
    pub playlist_url: String,
}

// --- Spotify Web API response shapes ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiArtistRef {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiImage {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiAlbum {
    #[serde(default)]
    pub images: Vec<ApiImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiTrack {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<ApiArtistRef>,
    pub album: Option<ApiAlbum>,
    pub duration_ms: Option<u64>,
}

impl ApiTrack {
    /// Converts an API track into a candidate. Tracks without an id cannot
    /// be deduplicated or published and yield `None`.
    pub fn into_candidate(self) -> Option<CandidateTrack> {
        let id = self.id?;
        Some(CandidateTrack {
            id,
            name: self.name,
            artists: self.artists.into_iter().map(|a| a.name).collect(),
            album_image_url: self
                .album
                .and_then(|album| album.images.into_iter().next().map(|i| i.url)),
            duration_ms: self.duration_ms.unwrap_or(0),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiArtistFull {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    pub tracks: Vec<ApiTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackPage {
    pub items: Vec<ApiTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistPage {
    pub items: Vec<ApiArtistFull>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackSearchResponse {
    pub tracks: TrackPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistSearchResponse {
    pub artists: ArtistPage,
}

/// The audio-features batch endpoint returns `null` entries for ids it
/// cannot analyze; those tracks simply never make it into the feature map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFeaturesResponse {
    pub audio_features: Vec<Option<AudioFeatures>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
}

// --- table rows ---

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub name: String,
    pub genres: String,
    pub id: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub name: String,
    pub artists: String,
    pub duration: String,
    pub id: String,
}

#[derive(Tabled)]
pub struct SeedTableRow {
    pub kind: String,
    pub name: String,
    pub identity: String,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub position: usize,
    pub name: String,
    pub artists: String,
    pub duration: String,
}
