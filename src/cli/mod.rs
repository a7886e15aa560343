//! # CLI Module
//!
//! This module provides the command-line interface layer for Tastemix, a
//! Spotify client that mixes mood-filtered playlists from user-chosen
//! seeds. It implements all user-facing commands and coordinates between
//! the generation pipeline, persisted session state, and the Spotify
//! integration layer.
//!
//! ## Command Categories
//!
//! ### Authentication
//!
//! - [`auth`] - Initiates the Spotify OAuth authorization-code flow
//! - [`logout`] - Clears stored credentials
//!
//! ### Seed Management
//!
//! - [`search_artists`] / [`search_tracks`] - Find seed candidates and
//!   their ids
//! - [`show_seeds`], [`add_seed`], [`remove_artist_seed`] (and friends),
//!   [`clear_seeds`] - Edit the persisted selection, capped at five seeds
//!   per category
//! - [`set_mood`] / [`reset_mood`] - Adjust the mood targets
//!
//! ### Playlist Operations
//!
//! - [`generate`] - Runs the full pipeline and stores the working playlist
//! - [`show_playlist`], [`remove_playlist_track`], [`clear_playlist`] -
//!   Inspect and edit the working playlist
//! - [`publish`] - Creates the remote playlist and populates it
//!
//! ### Information Commands
//!
//! - [`top_artists`] / [`top_tracks`] - The user's top items
//! - [`favorites_toggle`] / [`favorites_list`] - Favorite seeds
//!
//! ## Data Flow
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (Persisted Session State)
//!     ↓
//! Mixer Layer (Generation Pipeline)
//!     ↓
//! Spotify Layer (HTTP Requests)
//! ```
//!
//! Each command delegates to the management and mixer modules while
//! handling user interaction, progress feedback, and error presentation.
//! Generation failures yield an empty or partial result with a message
//! rather than a crash; authentication failures direct the user back to
//! `tastemix auth`.

mod auth;
mod favorites;
mod generate;
mod mood;
mod playlist;
mod publish;
mod search;
mod seeds;
mod top;

pub use auth::auth;
pub use auth::logout;
pub use favorites::favorites_list;
pub use favorites::favorites_toggle;
pub use generate::generate;
pub use mood::reset_mood;
pub use mood::set_mood;
pub use playlist::clear_playlist;
pub use playlist::remove_playlist_track;
pub use playlist::show_playlist;
pub use publish::publish;
pub use search::search_artists;
pub use search::search_tracks;
pub use seeds::add_seed;
pub use seeds::clear_seeds;
pub use seeds::remove_artist_seed;
pub use seeds::remove_genre_seed;
pub use seeds::remove_track_seed;
pub use seeds::show_seeds;
pub use top::top_artists;
pub use top::top_tracks;
