use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

// The search endpoint may return `null` entries inside `items`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistSearchResponse {
    pub playlists: Page<Option<PlaylistSummary>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub id: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: Option<String>,
    pub tracks: Page<PlaylistItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
    pub preview_url: Option<String>,
    pub album: Option<TrackAlbum>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAlbum {
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackSearchResponse {
    pub tracks: Page<Option<Track>>,
}

/// One row of the `tracks` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub track_id: String,
    pub name: String,
    pub artist: String,
    pub preview_url: String,
    pub image_url: String,
    pub theme: String,
}

/// Outcome of seeding a single theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeReport {
    pub theme: String,
    pub playlist_id: String,
    pub playlist_name: Option<String>,
    pub stored: usize,
    pub skipped: usize,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub theme: String,
    pub artist: String,
    pub name: String,
    pub track_id: String,
}

#[derive(Tabled)]
pub struct ThemeCountRow {
    pub theme: String,
    pub tracks: u64,
}
