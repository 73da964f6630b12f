use themetracks::config::DEFAULT_THEMES;
use themetracks::types::TrackRecord;
use themetracks::utils::*;

// Helper function to create a test track record
fn create_test_track(track_id: &str, name: &str, artist: &str, theme: &str) -> TrackRecord {
    TrackRecord {
        track_id: track_id.to_string(),
        name: name.to_string(),
        artist: artist.to_string(),
        preview_url: String::new(),
        image_url: String::new(),
        theme: theme.to_string(),
    }
}

#[test]
fn test_normalize_themes() {
    let themes = normalize_themes(vec![
        "  Rock ".to_string(),
        "".to_string(),
        "Jazz".to_string(),
        "Rock".to_string(),
        "   ".to_string(),
        "R&B".to_string(),
    ]);

    // Trimmed, empty dropped, first occurrence kept
    assert_eq!(themes, vec!["Rock", "Jazz", "R&B"]);
}

#[test]
fn test_themes_or_default_uses_builtin_list() {
    let themes = themes_or_default(Vec::new());
    assert_eq!(themes.len(), 20);
    assert_eq!(themes.first().map(String::as_str), Some("Pop mix"));
    assert_eq!(themes.last().map(String::as_str), Some("Dua Lipa"));
    assert_eq!(themes, DEFAULT_THEMES.to_vec());

    // Only blank input also falls back
    let themes = themes_or_default(vec![" ".to_string()]);
    assert_eq!(themes.len(), 20);
}

#[test]
fn test_themes_or_default_keeps_given_themes() {
    let themes = themes_or_default(vec!["Bachata".to_string(), "Latino".to_string()]);
    assert_eq!(themes, vec!["Bachata", "Latino"]);
}

#[test]
fn test_filter_tracks() {
    let mut tracks = vec![
        create_test_track("id1", "Back In Black", "AC/DC", "Rock"),
        create_test_track("id2", "So What", "Miles Davis", "Jazz"),
        create_test_track("id3", "Black Or White", "Michael Jackson", "Pop mix"),
    ];

    filter_tracks(&mut tracks, "BLACK");
    let ids: Vec<&str> = tracks.iter().map(|t| t.track_id.as_str()).collect();
    assert_eq!(ids, vec!["id1", "id3"]);

    // Artist names match as well
    filter_tracks(&mut tracks, "jackson");
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].track_id, "id3");
}

#[test]
fn test_filter_tracks_with_blank_term_keeps_everything() {
    let mut tracks = vec![
        create_test_track("id1", "Song", "Artist", "Rock"),
        create_test_track("id2", "Other", "Someone", "Jazz"),
    ];
    filter_tracks(&mut tracks, "  ");
    assert_eq!(tracks.len(), 2);
}

#[test]
fn test_to_table_rows() {
    let rows = to_table_rows(vec![
        create_test_track("id1", "Song", "Artist", "Funk"),
        create_test_track("id0", "Another", "Band", "Funk"),
    ]);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].theme, "Funk");
    assert_eq!(rows[0].artist, "Artist");
    assert_eq!(rows[0].name, "Song");
    assert_eq!(rows[0].track_id, "id1");

    // Order is left as the store returned it
    assert_eq!(rows[1].track_id, "id0");
}
