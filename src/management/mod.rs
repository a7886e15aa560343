mod auth;
mod credentials;
mod favorites;
mod playlist;
mod selection;

pub use auth::TokenManager;
pub use credentials::CredentialStore;
pub use favorites::Favorites;
pub use favorites::FavoritesManager;
pub use playlist::PlaylistManager;
pub use selection::SelectionManager;
