//! # Spotify Integration Module
//!
//! The single chokepoint for all communication with the Spotify Web API:
//! authentication, token lifecycle, resource retrieval, and playlist
//! publishing. Higher layers (CLI, mixer) never talk HTTP themselves.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Mixer)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 Authorization Code, Basic-Auth exchange)
//!     ├── Gateway (bearer auth, single 401-refresh-retry, error classification)
//!     ├── Track Operations (top tracks, search, audio features, top items)
//!     └── Playlist Operations (create, batched track addition)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication Strategy
//!
//! [`auth`] implements the confidential-client authorization code flow: a
//! CSRF `state` token is sent with the authorize redirect and validated once
//! by the local callback server, then the code is exchanged at the token
//! endpoint using `Authorization: Basic base64(client_id:client_secret)`.
//! Refreshes use the same Basic header with the `refresh_token` grant. The
//! token manager refreshes proactively within a 5-second margin of the
//! stored expiry instant.
//!
//! ## Error Handling Philosophy
//!
//! [`request`] absorbs ordinary HTTP failures into `None` results so call
//! sites stay simple: callers treat `None` as "unavailable". A 401 triggers
//! exactly one refresh attempt followed by exactly one retry; a second 401
//! surfaces as failure rather than looping against a provider whose refresh
//! token was just revoked. Explicit token rejections clear the stored
//! credentials and force re-authentication.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - code exchange and refresh (accounts host)
//! - `GET /me` - profile, used to verify the playlist owner
//! - `GET /me/top/{type}` - the user's top artists/tracks
//! - `GET /artists/{id}/top-tracks` - artist seed resolution
//! - `GET /search` - genre seed resolution and seed lookup
//! - `GET /audio-features` - batched feature vectors for the mood filter
//! - `POST /users/{user_id}/playlists` - playlist creation
//! - `POST /playlists/{playlist_id}/tracks` - batched track addition

pub mod auth;
pub mod playlist;
pub mod request;
pub mod tracks;
