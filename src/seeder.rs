//! The seeding loop: theme → playlist → tracks → store.
//!
//! Themes are processed one after the other. Every theme resolves its own
//! playlist from scratch; nothing found for a theme is an explicit
//! [`Error::PlaylistNotFound`], never the playlist of the theme before it.

use crate::{
    error::{Error, Result},
    management::TrackStore,
    spotify::{CatalogApi, search},
    types::{Playlist, PlaylistSummary, ThemeReport, Track, TrackRecord},
};

/// What to do when a theme fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Report the failure and move on to the next theme.
    #[default]
    Continue,
    /// Stop the run at the first failing theme.
    Abort,
}

/// Progress notifications emitted by [`seed_themes`].
#[derive(Debug)]
pub enum Progress<'a> {
    Started {
        theme: &'a str,
        index: usize,
        total: usize,
    },
    Finished(&'a ThemeReport),
    Failed {
        theme: &'a str,
        error: &'a Error,
    },
}

#[derive(Debug)]
pub struct ThemeFailure {
    pub theme: String,
    pub error: Error,
}

#[derive(Debug, Default)]
pub struct SeedSummary {
    pub reports: Vec<ThemeReport>,
    pub failures: Vec<ThemeFailure>,
}

impl SeedSummary {
    /// Tracks upserted over all successful themes.
    pub fn stored(&self) -> usize {
        self.reports.iter().map(|r| r.stored).sum()
    }

    pub fn skipped(&self) -> usize {
        self.reports.iter().map(|r| r.skipped).sum()
    }

    /// `true` when no theme failed.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Tracks pulled out of a playlist for one theme.
#[derive(Debug, Default)]
pub struct ExtractedTracks {
    pub records: Vec<TrackRecord>,
    pub skipped: usize,
}

/// Resolves a theme to the first playlist the search returns.
pub fn resolve_playlist(api: &impl CatalogApi, theme: &str) -> Result<PlaylistSummary> {
    let response = api.search_playlist_id(theme)?;
    search::first_playlist(&response)
        .cloned()
        .ok_or_else(|| Error::PlaylistNotFound {
            theme: theme.to_string(),
        })
}

/// Builds a record for a playlist entry, or `None` if it cannot be stored.
///
/// Entries without a preview URL are dropped, as are entries without a track
/// id (local files, removed tracks). A missing artist or cover image becomes
/// an empty string.
pub fn extract_track(track: &Track, theme: &str) -> Option<TrackRecord> {
    let preview_url = track.preview_url.as_ref()?;
    let track_id = track.id.as_ref()?;

    let artist = track
        .artists
        .first()
        .map(|a| a.name.clone())
        .unwrap_or_default();
    let image_url = track
        .album
        .as_ref()
        .and_then(|album| album.images.first())
        .map(|image| image.url.clone())
        .unwrap_or_default();

    Some(TrackRecord {
        track_id: track_id.clone(),
        name: track.name.clone(),
        artist,
        preview_url: preview_url.clone(),
        image_url,
        theme: theme.to_string(),
    })
}

/// Builds records for every storable entry of a playlist.
///
/// `null` entries and entries rejected by [`extract_track`] are counted in
/// [`ExtractedTracks::skipped`]. Records keep the playlist order.
///
/// # Arguments
///
/// * `playlist` - Playlist with the first page of its tracks
/// * `theme` - Theme written into every record
pub fn extract_tracks(playlist: &Playlist, theme: &str) -> ExtractedTracks {
    let mut extracted = ExtractedTracks::default();

    for item in &playlist.tracks.items {
        match item.track.as_ref().and_then(|t| extract_track(t, theme)) {
            Some(record) => extracted.records.push(record),
            None => extracted.skipped += 1,
        }
    }

    extracted
}

/// Seeds a single theme and reports how many tracks were stored.
///
/// Searches a playlist for `theme`, fetches it and upserts every track that
/// has a preview. Each upsert commits on its own, so a failure halfway keeps
/// the rows already written.
///
/// # Errors
///
/// - [`Error::PlaylistNotFound`] if the search has no usable playlist
/// - any request error of the catalog (transport, status, decode)
/// - [`Error::Store`] if an upsert fails
pub fn seed_theme(api: &impl CatalogApi, store: &TrackStore, theme: &str) -> Result<ThemeReport> {
    let summary = resolve_playlist(api, theme)?;
    tracing::debug!(theme, playlist_id = %summary.id, "resolved playlist");

    let playlist = api.search_playlist(&summary.id)?;
    let extracted = extract_tracks(&playlist, theme);

    for record in &extracted.records {
        store.upsert(record)?;
    }

    tracing::debug!(
        theme,
        stored = extracted.records.len(),
        skipped = extracted.skipped,
        "theme seeded"
    );

    Ok(ThemeReport {
        theme: theme.to_string(),
        playlist_id: playlist.id,
        playlist_name: playlist.name.or(summary.name),
        stored: extracted.records.len(),
        skipped: extracted.skipped,
    })
}

/// Seeds every theme in order.
///
/// With [`FailurePolicy::Continue`] a failing theme is recorded in the
/// summary and the loop goes on. With [`FailurePolicy::Abort`] the error of
/// the first failing theme is returned; tracks stored for earlier themes stay
/// in the store.
pub fn seed_themes<S: AsRef<str>>(
    api: &impl CatalogApi,
    store: &TrackStore,
    themes: &[S],
    policy: FailurePolicy,
    mut progress: impl FnMut(Progress<'_>),
) -> Result<SeedSummary> {
    let mut summary = SeedSummary::default();
    let total = themes.len();

    for (index, theme) in themes.iter().enumerate() {
        let theme = theme.as_ref();
        progress(Progress::Started {
            theme,
            index,
            total,
        });

        match seed_theme(api, store, theme) {
            Ok(report) => {
                progress(Progress::Finished(&report));
                summary.reports.push(report);
            }
            Err(error) => {
                tracing::warn!(theme, %error, "theme failed");
                progress(Progress::Failed {
                    theme,
                    error: &error,
                });

                if policy == FailurePolicy::Abort {
                    return Err(error);
                }

                summary.failures.push(ThemeFailure {
                    theme: theme.to_string(),
                    error,
                });
            }
        }
    }

    Ok(summary)
}
