use std::fmt;

/// Error taxonomy for provider and configuration failures.
///
/// Transport failures are absorbed into `Unavailable`; the gateway turns
/// those into `None` results so ordinary HTTP failures never cross its
/// boundary as errors. `ProviderRejected` is reserved for explicit refusals
/// of a token operation and forces re-authentication upstream.
#[derive(Debug)]
pub enum MixerError {
    /// Required client credentials or secrets are missing. Not retryable.
    Config(String),
    /// The provider explicitly refused a token operation (bad code, revoked
    /// refresh token). Stored credentials must be discarded.
    ProviderRejected(String),
    /// Network/transport failure or a non-2xx response other than 401.
    Unavailable(String),
    /// The playlist was created but one or more track-addition chunks failed.
    /// Carries the created playlist so the caller can still surface it.
    PartialPublish {
        playlist_id: String,
        playlist_url: String,
        failed_chunks: Vec<usize>,
        total_chunks: usize,
    },
}

impl fmt::Display for MixerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MixerError::Config(msg) => write!(f, "configuration error: {}", msg),
            MixerError::ProviderRejected(msg) => write!(f, "provider rejected: {}", msg),
            MixerError::Unavailable(msg) => write!(f, "provider unavailable: {}", msg),
            MixerError::PartialPublish {
                playlist_id,
                failed_chunks,
                total_chunks,
                ..
            } => write!(
                f,
                "playlist {} created but {}/{} track chunks failed",
                playlist_id,
                failed_chunks.len(),
                total_chunks
            ),
        }
    }
}

impl std::error::Error for MixerError {}

impl From<reqwest::Error> for MixerError {
    fn from(err: reqwest::Error) -> Self {
        MixerError::Unavailable(err.to_string())
    }
}
