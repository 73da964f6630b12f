//! # Spotify Integration Module
//!
//! Thin blocking client for the three Spotify Web API calls the seeder needs,
//! plus the client-credentials token exchange that precedes them.
//!
//! ```text
//! Seeder / CLI
//!      ↓
//! CatalogApi (trait)  ←  Session (HTTP client + API base URL + token)
//!      ↓
//! reqwest::blocking  →  Spotify Web API
//! ```
//!
//! ## Submodules
//!
//! - [`auth`] - client-credentials grant against the token endpoint
//! - [`search`] - playlist search, playlist detail and track search
//!
//! Every request is sent once. There is no retry, no rate-limit handling and
//! no pagination: a playlist longer than one page is seen only up to the
//! first page.
//!
//! ## Sessions
//!
//! A [`Session`] is created once per run with [`Session::connect`], which
//! fetches the token. The token is then reused for every theme in the run.
//! Code that only needs the catalog operations takes `&impl CatalogApi`, so
//! the seeding loop can be driven by fixtures in tests.

pub mod auth;
pub mod search;

use reqwest::blocking::{Client, Request, Response};
use serde::de::DeserializeOwned;

use crate::{
    config::Config,
    error::{Error, Result},
    types::{AccessToken, Playlist, PlaylistSearchResponse, TrackSearchResponse},
};

/// The read operations the seeding loop performs against the catalog.
pub trait CatalogApi {
    /// Searches playlists by free text, returning at most one result.
    fn search_playlist_id(&self, name: &str) -> Result<PlaylistSearchResponse>;

    /// Fetches a playlist with the first page of its tracks.
    fn search_playlist(&self, playlist_id: &str) -> Result<Playlist>;

    /// Searches tracks by free text, returning at most one result.
    fn search_track(&self, name: &str) -> Result<TrackSearchResponse>;
}

/// Authenticated connection to the Spotify Web API.
pub struct Session {
    client: Client,
    api_url: String,
    token: AccessToken,
}

impl Session {
    /// Wraps an existing client and token.
    ///
    /// No request is sent. Useful when the token comes from elsewhere, and for
    /// building requests in tests without reaching the network.
    ///
    /// # Arguments
    ///
    /// * `client` - HTTP client reused for every call of the session
    /// * `api_url` - Web API base URL without a trailing slash
    /// * `token` - Bearer token sent with every request
    pub fn new(client: Client, api_url: impl Into<String>, token: AccessToken) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            token,
        }
    }

    /// Obtains a token with the configured credentials and opens a session.
    ///
    /// # Errors
    ///
    /// Any error of [`auth::get_access_token`]: the token endpoint is
    /// unreachable, answers with a non-2xx status (wrong credentials give 400),
    /// or returns a body without a usable token.
    pub fn connect(config: &Config) -> Result<Self> {
        let client = Client::new();
        let token = auth::get_access_token(&client, &config.token_url, &config.credentials)?;
        Ok(Self::new(client, config.api_url.clone(), token))
    }

    /// Base URL every request path is appended to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// The HTTP client shared by every request of the session.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Bearer token obtained when the session was opened.
    pub fn access_token(&self) -> &str {
        &self.token.access_token
    }

    // Sends a prepared GET and decodes its body as `T`.
    pub(crate) fn get_json<T: DeserializeOwned>(
        &self,
        request: Request,
        endpoint: &'static str,
    ) -> Result<T> {
        let url = request.url().to_string();
        tracing::debug!(%url, endpoint, "GET");

        let response = self
            .client
            .execute(request)
            .map_err(|source| Error::Transport {
                url: url.clone(),
                source,
            })?;

        let body = read_body(response, &url)?;
        decode(endpoint, &body)
    }
}

impl CatalogApi for Session {
    fn search_playlist_id(&self, name: &str) -> Result<PlaylistSearchResponse> {
        search::search_playlist_id(self, name)
    }

    fn search_playlist(&self, playlist_id: &str) -> Result<Playlist> {
        search::search_playlist(self, playlist_id)
    }

    fn search_track(&self, name: &str) -> Result<TrackSearchResponse> {
        search::search_track(self, name)
    }
}

/// Decodes a response body, tagging failures with the endpoint they came from.
pub fn decode<T: DeserializeOwned>(endpoint: &'static str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|source| Error::Decode { endpoint, source })
}

/// Reads the body of a 2xx response; anything else is [`Error::Status`].
pub(crate) fn read_body(response: Response, url: &str) -> Result<String> {
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status {
            url: url.to_string(),
            status,
        });
    }

    response.text().map_err(|source| Error::Transport {
        url: url.to_string(),
        source,
    })
}
