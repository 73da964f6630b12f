use std::collections::HashSet;

use crate::{
    config::DEFAULT_THEMES,
    types::{TrackRecord, TrackTableRow},
};

/// Trims theme names and drops empty and repeated ones, keeping first-seen order.
pub fn normalize_themes(themes: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    themes
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

/// Themes to seed: the given ones, or the built-in list when none are given.
pub fn themes_or_default(themes: Vec<String>) -> Vec<String> {
    let themes = normalize_themes(themes);
    if themes.is_empty() {
        DEFAULT_THEMES.iter().map(|t| t.to_string()).collect()
    } else {
        themes
    }
}

/// Keeps tracks whose name or artist contains `term`, ignoring case.
pub fn filter_tracks(tracks: &mut Vec<TrackRecord>, term: &str) {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return;
    }
    tracks.retain(|t| {
        t.name.to_lowercase().contains(&term) || t.artist.to_lowercase().contains(&term)
    });
}

/// Turns stored records into table rows, keeping their order.
///
/// # Arguments
///
/// * `tracks` - Records as returned by the store, already sorted
///
/// # Returns
///
/// One [`TrackTableRow`] per record with theme, artist, name and track id.
pub fn to_table_rows(tracks: Vec<TrackRecord>) -> Vec<TrackTableRow> {
    tracks
        .into_iter()
        .map(|t| TrackTableRow {
            theme: t.theme,
            artist: t.artist,
            name: t.name,
            track_id: t.track_id,
        })
        .collect()
}
