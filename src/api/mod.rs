//! # API Module
//!
//! This module provides HTTP API endpoints for the Taste Mixer's local web
//! server. It implements the endpoints needed to complete OAuth
//! authentication plus a health check.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`callback`] - Handles OAuth callback requests from Spotify's
//!   authorization server. Validates the single-use CSRF state token and
//!   completes the authorization-code flow by exchanging the code for
//!   credentials.
//!
//! ### Monitoring
//!
//! - [`health`] - Returns application status and version information.
//!
//! ## Architecture
//!
//! Built on the [Axum](https://docs.rs/axum) web framework; each endpoint
//! is an async handler wired into the router in [`crate::server`]. The
//! callback shares an `AuthSession` with the CLI auth flow through an
//! `Arc<Mutex<...>>` extension, depositing credentials for the waiting
//! flow to pick up.
//!
//! ## Security Considerations
//!
//! - The `state` query parameter must match the token generated when the
//!   authorize URL was built; a mismatch aborts the flow without an
//!   exchange attempt (CSRF protection)
//! - An `error` query parameter (user denied access) likewise aborts
//!   without touching the token endpoint

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
