use std::fmt;

use reqwest::blocking::Request;

use crate::{
    error::{Error, Result},
    spotify::Session,
    types::{Playlist, PlaylistSearchResponse, PlaylistSummary, Track, TrackSearchResponse},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Playlist,
    Track,
}

impl SearchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::Playlist => "playlist",
            SearchKind::Track => "track",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds `GET {api}/search?q=<query>&type=<kind>&limit=1`.
///
/// The query is URL-encoded by reqwest, so theme names with spaces, accents
/// or `&` (e.g. "R&B") are sent as a single `q` parameter.
pub fn search_request(session: &Session, query: &str, kind: SearchKind) -> reqwest::Result<Request> {
    session
        .client()
        .get(format!("{}/search", session.api_url()))
        .bearer_auth(session.access_token())
        .query(&[("q", query), ("type", kind.as_str()), ("limit", "1")])
        .build()
}

/// Builds `GET {api}/playlists/<playlist_id>`.
pub fn playlist_request(session: &Session, playlist_id: &str) -> reqwest::Result<Request> {
    session
        .client()
        .get(format!("{}/playlists/{}", session.api_url(), playlist_id))
        .bearer_auth(session.access_token())
        .build()
}

/// Searches for a playlist matching `name`.
///
/// The raw search response is returned; use [`first_playlist`] to pick the
/// match. An empty result is not an error at this level.
///
/// # Arguments
///
/// * `session` - Authenticated session holding the API base URL and token
/// * `name` - Free-text query, usually a theme name
///
/// # Returns
///
/// The decoded search response with at most one playlist, possibly `null`.
///
/// # Errors
///
/// - [`Error::Transport`] if the API cannot be reached
/// - [`Error::Status`] on a non-2xx answer (an expired token gives 401)
/// - [`Error::Decode`] if the body has no `playlists` page
pub fn search_playlist_id(session: &Session, name: &str) -> Result<PlaylistSearchResponse> {
    let request = search_request(session, name, SearchKind::Playlist)
        .map_err(|source| request_error(session, "/search", source))?;
    session.get_json(request, "search")
}

/// Fetches a playlist and the first page of its tracks.
///
/// # Arguments
///
/// * `session` - Authenticated session
/// * `playlist_id` - Spotify id taken from a search result
///
/// # Errors
///
/// Same kinds as [`search_playlist_id`]; an unknown id answers 404 and
/// becomes [`Error::Status`].
pub fn search_playlist(session: &Session, playlist_id: &str) -> Result<Playlist> {
    let request = playlist_request(session, playlist_id)
        .map_err(|source| request_error(session, "/playlists", source))?;
    session.get_json(request, "playlists")
}

/// Searches for a track matching `name`.
///
/// # Arguments
///
/// * `session` - Authenticated session
/// * `name` - Free-text query, a track title or "artist title"
///
/// # Errors
///
/// Same kinds as [`search_playlist_id`], with [`Error::Decode`] when the body
/// has no `tracks` page.
pub fn search_track(session: &Session, name: &str) -> Result<TrackSearchResponse> {
    let request = search_request(session, name, SearchKind::Track)
        .map_err(|source| request_error(session, "/search", source))?;
    session.get_json(request, "search")
}

/// First non-null playlist of a search response.
pub fn first_playlist(response: &PlaylistSearchResponse) -> Option<&PlaylistSummary> {
    response.playlists.items.iter().flatten().next()
}

/// First non-null track of a search response.
pub fn first_track(response: &TrackSearchResponse) -> Option<&Track> {
    response.tracks.items.iter().flatten().next()
}

fn request_error(session: &Session, path: &str, source: reqwest::Error) -> Error {
    Error::Transport {
        url: format!("{}{}", session.api_url(), path),
        source,
    }
}
