use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while fetching themes and storing tracks.
///
/// Network failures are split into transport problems and non-2xx answers so
/// the CLI can tell "host unreachable" apart from "Spotify said no". Decoding
/// failures keep the endpoint they came from, since the same JSON error from
/// the search and the playlist endpoint means different things.
#[derive(Error, Debug)]
pub enum Error {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("unexpected response from {endpoint}: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("token response did not contain an access_token")]
    MissingAccessToken,

    #[error("no playlist found for theme '{theme}'")]
    PlaylistNotFound { theme: String },

    #[error("track store error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("no track database at {}", .0.display())]
    MissingDatabase(PathBuf),

    #[error("cannot prepare database location: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} must be set")]
    MissingConfig(&'static str),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
