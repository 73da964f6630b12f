#![allow(dead_code)]

use std::{
    cell::RefCell,
    collections::HashMap,
    io::{Read, Write},
    net::{TcpListener, TcpStream},
    thread::{self, JoinHandle},
};

use reqwest::StatusCode;
use themetracks::{
    Error, Result,
    spotify::{self, CatalogApi},
    types::{Playlist, PlaylistSearchResponse, TrackSearchResponse},
};

pub const EMPTY_SEARCH: &str = r#"{"playlists": {"items": [], "next": null, "total": 0}}"#;

pub const NULL_ITEM_SEARCH: &str = r#"{"playlists": {"items": [null], "total": 1}}"#;

pub fn playlist_search(id: &str, name: &str) -> String {
    format!(
        r#"{{"playlists": {{"items": [{{"id": "{id}", "name": "{name}"}}], "next": null, "total": 1}}}}"#
    )
}

// Three entries, the second one has no preview.
pub const ROCK_PLAYLIST: &str = r#"{
  "id": "pl_rock",
  "name": "Rock Classics",
  "tracks": {
    "items": [
      {"track": {
        "id": "t1",
        "name": "Back In Black",
        "artists": [{"name": "AC/DC"}, {"name": "Someone Else"}],
        "preview_url": "https://p.scdn.co/mp3-preview/t1",
        "album": {"images": [{"url": "https://i.scdn.co/image/t1-640"}, {"url": "https://i.scdn.co/image/t1-300"}]}
      }},
      {"track": {
        "id": "t2",
        "name": "Thunderstruck",
        "artists": [{"name": "AC/DC"}],
        "preview_url": null,
        "album": {"images": [{"url": "https://i.scdn.co/image/t2-640"}]}
      }},
      {"track": {
        "id": "t3",
        "name": "Bohemian Rhapsody",
        "artists": [{"name": "Queen"}],
        "preview_url": "https://p.scdn.co/mp3-preview/t3",
        "album": {"images": [{"url": "https://i.scdn.co/image/t3-640"}]}
      }}
    ],
    "next": "https://api.spotify.com/v1/playlists/pl_rock/tracks?offset=100&limit=100",
    "total": 3
  }
}"#;

// Shares t3 with the rock playlist, with a newer preview URL.
pub const FILM_PLAYLIST: &str = r#"{
  "id": "pl_film",
  "name": "Movie Soundtracks",
  "tracks": {
    "items": [
      {"track": {
        "id": "t3",
        "name": "Bohemian Rhapsody",
        "artists": [{"name": "Queen"}],
        "preview_url": "https://p.scdn.co/mp3-preview/t3-film",
        "album": {"images": [{"url": "https://i.scdn.co/image/t3-film"}]}
      }},
      {"track": null},
      {"track": {
        "id": null,
        "name": "Local file",
        "artists": [],
        "preview_url": "file:///local.mp3",
        "album": {"images": []}
      }}
    ]
  }
}"#;

pub const BROKEN_PLAYLIST: &str = r#"{"id": "pl_broken", "name": "No tracks key"}"#;

pub const TRACK_SEARCH: &str = r#"{"tracks": {"items": [{
  "id": "t9",
  "name": "Take Five",
  "artists": [{"name": "The Dave Brubeck Quartet"}],
  "preview_url": null,
  "album": {"images": []}
}]}}"#;

/// Catalog backed by JSON fixtures, recording every call it receives.
#[derive(Default)]
pub struct FakeCatalog {
    searches: HashMap<String, String>,
    playlists: HashMap<String, String>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, theme: &str, body: impl Into<String>) -> Self {
        self.searches.insert(theme.to_string(), body.into());
        self
    }

    pub fn with_playlist(mut self, id: &str, body: impl Into<String>) -> Self {
        self.playlists.insert(id.to_string(), body.into());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CatalogApi for FakeCatalog {
    fn search_playlist_id(&self, name: &str) -> Result<PlaylistSearchResponse> {
        self.calls.borrow_mut().push(format!("search:{name}"));
        let body = self
            .searches
            .get(name)
            .map(String::as_str)
            .unwrap_or(EMPTY_SEARCH);
        spotify::decode("search", body)
    }

    fn search_playlist(&self, playlist_id: &str) -> Result<Playlist> {
        self.calls.borrow_mut().push(format!("playlist:{playlist_id}"));
        match self.playlists.get(playlist_id) {
            Some(body) => spotify::decode("playlists", body),
            None => Err(Error::Status {
                url: format!("https://api.spotify.com/v1/playlists/{playlist_id}"),
                status: StatusCode::NOT_FOUND,
            }),
        }
    }

    fn search_track(&self, name: &str) -> Result<TrackSearchResponse> {
        self.calls.borrow_mut().push(format!("track:{name}"));
        spotify::decode("search", TRACK_SEARCH)
    }
}

pub fn rock_and_film() -> FakeCatalog {
    FakeCatalog::new()
        .with_search("Rock", playlist_search("pl_rock", "Rock Classics"))
        .with_search("Musique de film", playlist_search("pl_film", "Movie Soundtracks"))
        .with_playlist("pl_rock", ROCK_PLAYLIST)
        .with_playlist("pl_film", FILM_PLAYLIST)
}

/// Answers exactly one HTTP request on 127.0.0.1 with `status_line` and `body`.
///
/// Returns the base URL to point a session at and a handle yielding the raw
/// request text, so tests can check what was sent.
pub fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = read_request(&mut stream);

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        request
    });

    (base_url, handle)
}

// Reads headers and, when announced, the whole body, so the socket is drained
// before the response is written.
fn read_request(stream: &mut TcpStream) -> String {
    let mut data = Vec::new();
    let mut buf = [0u8; 1024];

    let header_end = loop {
        let n = stream.read(&mut buf).unwrap();
        if n == 0 {
            return String::from_utf8_lossy(&data).into_owned();
        }
        data.extend_from_slice(&buf[..n]);
        if let Some(pos) = data.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&data[..header_end]).to_lowercase();
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while data.len() < header_end + content_length {
        let n = stream.read(&mut buf).unwrap();
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buf[..n]);
    }

    String::from_utf8_lossy(&data).into_owned()
}

/// A local address nothing listens on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
