//! Configuration management for the theme track seeder.
//!
//! Values come from environment variables and from a `.env` file in the
//! local data directory. Process environment variables win over the file,
//! because `dotenv` never overwrites a variable that is already set.
//!
//! Only the Spotify credentials are required. Endpoints and the database
//! location fall back to defaults so a fresh install only needs a client id
//! and secret.

use std::{env, path::PathBuf};

use crate::error::{Error, Result};

pub const APP_DIR: &str = "themetracks";

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_DATABASE_FILE: &str = "spotify_tracks.db";

/// Themes seeded when no theme is given on the command line.
pub const DEFAULT_THEMES: [&str; 20] = [
    "Pop mix",
    "Rock",
    "Années 80",
    "Années 90",
    "Musique de film",
    "Jazz",
    "R&B",
    "Country",
    "Dubstep",
    "Hip-Hop",
    "Rap",
    "Rap Francais",
    "Rap US",
    "Beurette à chicha",
    "Funk",
    "Années 2000",
    "Afrotrap",
    "Bachata",
    "Latino",
    "Dua Lipa",
];

/// Client-credentials pair used to obtain an access token.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Runtime configuration collected from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub api_url: String,
    pub token_url: String,
    pub database_path: PathBuf,
}

impl Config {
    /// Reads every setting the seeder needs to talk to Spotify.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingConfig`] naming the first credential variable
    /// that is not set.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            credentials: Credentials {
                client_id: spotify_client_id()?,
                client_secret: spotify_client_secret()?,
            },
            api_url: spotify_apiurl(),
            token_url: spotify_apitoken_url(),
            database_path: database_path(),
        })
    }
}

/// Loads environment variables from `<data_local>/themetracks/.env`.
///
/// Creates the directory if needed. A missing `.env` file is fine: the
/// variables may just as well come from the process environment.
///
/// The file is looked up in:
/// - Linux: `~/.local/share/themetracks/.env`
/// - macOS: `~/Library/Application Support/themetracks/.env`
/// - Windows: `%LOCALAPPDATA%/themetracks/.env`
pub fn load_env() -> Result<()> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if dotenv::from_path(&path).is_err() {
        tracing::debug!(path = %path.display(), "no .env file loaded");
    }
    Ok(())
}

/// Platform local data directory for this application.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path
}

/// Returns the Spotify API client ID (`SPOTIFY_API_AUTH_CLIENT_ID`).
pub fn spotify_client_id() -> Result<String> {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Returns the Spotify API client secret (`SPOTIFY_API_AUTH_CLIENT_SECRET`).
///
/// The secret is only ever sent to the token endpoint and must not end up in
/// logs.
pub fn spotify_client_secret() -> Result<String> {
    required("SPOTIFY_API_AUTH_CLIENT_SECRET")
}

/// Returns the Spotify Web API base URL, without a trailing slash.
pub fn spotify_apiurl() -> String {
    optional("SPOTIFY_API_URL", DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_string()
}

/// Returns the token endpoint used for the client-credentials grant.
pub fn spotify_apitoken_url() -> String {
    optional("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)
}

/// Returns the SQLite database location.
///
/// `THEMETRACKS_DATABASE` overrides the default file in the data directory.
pub fn database_path() -> PathBuf {
    match env::var("THEMETRACKS_DATABASE") {
        Ok(p) if !p.trim().is_empty() => PathBuf::from(p),
        _ => data_dir().join(DEFAULT_DATABASE_FILE),
    }
}

fn required(name: &'static str) -> Result<String> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::MissingConfig(name)),
    }
}

fn optional(name: &str, default: &str) -> String {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => v,
        _ => default.to_string(),
    }
}
