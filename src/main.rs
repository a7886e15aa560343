use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use tastemix::{
    cli, config, error,
    types::{ArtistSeed, AuthSession, GenreSeed, Seed, TrackSeed},
};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Remove stored credentials
    Logout,

    /// Search artists or tracks to use as seeds
    Search(SearchOptions),

    /// Manage the seed selection
    Seeds(SeedsOptions),

    /// Adjust the mood targets
    Mood(MoodOptions),

    /// Generate the working playlist from the current seeds
    Generate(GenerateOptions),

    /// Inspect and edit the working playlist
    Playlist(PlaylistOptions),

    /// Save the working playlist as a Spotify playlist
    Publish(PublishOptions),

    /// Show your top artists or tracks
    Top(TopOptions),

    /// Manage favorite seeds
    Favorites(FavoritesOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    #[command(subcommand)]
    pub command: SearchSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum SearchSubcommand {
    /// Search artists by name
    Artist { query: String },
    /// Search tracks by name
    Track { query: String },
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Manage the seed selection (at most 5 seeds per category)")]
pub struct SeedsOptions {
    /// Subcommands under `seeds`; without one the selection is listed
    #[command(subcommand)]
    pub command: Option<SeedsSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum SeedsSubcommand {
    /// Add an artist seed by id
    AddArtist { id: String, name: String },
    /// Add a genre seed by name
    AddGenre { name: String },
    /// Add a track seed by id
    AddTrack {
        id: String,
        name: String,
        /// Artist name shown alongside the track
        #[clap(long)]
        artist: String,
        /// Album image URL, if known
        #[clap(long)]
        image_url: Option<String>,
        /// Track duration in milliseconds, if known
        #[clap(long)]
        duration_ms: Option<u64>,
    },
    /// Remove a seed by identity
    Remove(RemoveSeedOptions),
    /// Clear the selection and reset the mood targets
    Clear,
}

#[derive(Parser, Debug, Clone)]
pub struct RemoveSeedOptions {
    #[command(subcommand)]
    pub command: RemoveSeedSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum RemoveSeedSubcommand {
    /// Remove an artist seed by id
    Artist { id: String },
    /// Remove a genre seed by name
    Genre { name: String },
    /// Remove a track seed by id
    Track { id: String },
}

#[derive(Parser, Debug, Clone)]
pub struct MoodOptions {
    /// Energy target, 0.0 (calm) to 1.0 (intense)
    #[clap(long)]
    pub energy: Option<f64>,

    /// Valence target, 0.0 (sad) to 1.0 (happy)
    #[clap(long)]
    pub valence: Option<f64>,

    /// Danceability target, 0.0 to 1.0
    #[clap(long)]
    pub danceability: Option<f64>,

    /// Acousticness ceiling midpoint, 0.0 (electronic) to 1.0 (acoustic)
    #[clap(long)]
    pub acousticness: Option<f64>,

    /// Reset all four targets to 0.5
    #[clap(long)]
    pub reset: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateOptions {
    /// Append unique new tracks to the working playlist instead of
    /// replacing it
    #[clap(long)]
    pub append: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistOptions {
    /// Subcommands under `playlist`; without one the playlist is listed
    #[command(subcommand)]
    pub command: Option<PlaylistSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum PlaylistSubcommand {
    /// Remove a track from the working playlist by id
    Remove { id: String },
    /// Clear the working playlist
    Clear,
}

#[derive(Parser, Debug, Clone)]
pub struct PublishOptions {
    /// Playlist name; derived from date and track count when omitted
    #[clap(long)]
    pub name: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct TopOptions {
    #[command(subcommand)]
    pub command: TopSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum TopSubcommand {
    /// Your top artists
    Artists(TopItemOptions),
    /// Your top tracks
    Tracks(TopItemOptions),
}

#[derive(Parser, Debug, Clone)]
pub struct TopItemOptions {
    /// One of short_term, medium_term, long_term
    #[clap(long, default_value = "medium_term")]
    pub time_range: String,

    #[clap(long, default_value_t = 10)]
    pub limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct FavoritesOptions {
    /// Subcommands under `favorites`; without one the favorites are listed
    #[command(subcommand)]
    pub command: Option<FavoritesSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum FavoritesSubcommand {
    /// Toggle an artist favorite by id
    ToggleArtist { id: String, name: String },
    /// Toggle a genre favorite by name
    ToggleGenre { name: String },
    /// Toggle a track favorite by id
    ToggleTrack {
        id: String,
        name: String,
        #[clap(long)]
        artist: String,
    },
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<AuthSession>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Logout => cli::logout().await,

        Command::Search(opt) => match opt.command {
            SearchSubcommand::Artist { query } => cli::search_artists(query).await,
            SearchSubcommand::Track { query } => cli::search_tracks(query).await,
        },

        Command::Seeds(opt) => match opt.command {
            Some(SeedsSubcommand::AddArtist { id, name }) => {
                cli::add_seed(Seed::Artist(ArtistSeed { id, name })).await
            }
            Some(SeedsSubcommand::AddGenre { name }) => {
                cli::add_seed(Seed::Genre(GenreSeed { name })).await
            }
            Some(SeedsSubcommand::AddTrack {
                id,
                name,
                artist,
                image_url,
                duration_ms,
            }) => {
                cli::add_seed(Seed::Track(TrackSeed {
                    id,
                    name,
                    artist_name: artist,
                    image_url,
                    duration_ms,
                }))
                .await
            }
            Some(SeedsSubcommand::Remove(remove)) => match remove.command {
                RemoveSeedSubcommand::Artist { id } => cli::remove_artist_seed(id).await,
                RemoveSeedSubcommand::Genre { name } => cli::remove_genre_seed(name).await,
                RemoveSeedSubcommand::Track { id } => cli::remove_track_seed(id).await,
            },
            Some(SeedsSubcommand::Clear) => cli::clear_seeds().await,
            None => cli::show_seeds().await,
        },

        Command::Mood(opt) => {
            if opt.reset {
                cli::reset_mood().await
            } else {
                cli::set_mood(opt.energy, opt.valence, opt.danceability, opt.acousticness).await
            }
        }

        Command::Generate(opt) => cli::generate(opt.append).await,

        Command::Playlist(opt) => match opt.command {
            Some(PlaylistSubcommand::Remove { id }) => cli::remove_playlist_track(id).await,
            Some(PlaylistSubcommand::Clear) => cli::clear_playlist().await,
            None => cli::show_playlist().await,
        },

        Command::Publish(opt) => cli::publish(opt.name).await,

        Command::Top(opt) => match opt.command {
            TopSubcommand::Artists(o) => cli::top_artists(o.time_range, o.limit).await,
            TopSubcommand::Tracks(o) => cli::top_tracks(o.time_range, o.limit).await,
        },

        Command::Favorites(opt) => match opt.command {
            Some(FavoritesSubcommand::ToggleArtist { id, name }) => {
                cli::favorites_toggle(Seed::Artist(ArtistSeed { id, name })).await
            }
            Some(FavoritesSubcommand::ToggleGenre { name }) => {
                cli::favorites_toggle(Seed::Genre(GenreSeed { name })).await
            }
            Some(FavoritesSubcommand::ToggleTrack { id, name, artist }) => {
                cli::favorites_toggle(Seed::Track(TrackSeed {
                    id,
                    name,
                    artist_name: artist,
                    image_url: None,
                    duration_ms: None,
                }))
                .await
            }
            None => cli::favorites_list().await,
        },

        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
