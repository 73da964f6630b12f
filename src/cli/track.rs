use crate::{
    config::Config,
    error, info,
    spotify::{CatalogApi, Session, search},
    warning,
};

/// Looks up a single track by free text and prints what the seeder would store.
pub fn search_track(name: String) {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("{}", e),
    };

    let session = match Session::connect(&config) {
        Ok(session) => session,
        Err(e) => error!("Cannot obtain access token: {}", e),
    };

    let response = match session.search_track(&name) {
        Ok(response) => response,
        Err(e) => error!("Track search failed: {}", e),
    };

    let Some(track) = search::first_track(&response) else {
        warning!("No track found for '{}'.", name);
        return;
    };

    info!("Name: {}", track.name);
    info!(
        "Artist: {}",
        track
            .artists
            .first()
            .map(|a| a.name.as_str())
            .unwrap_or("-")
    );
    info!("ID: {}", track.id.as_deref().unwrap_or("-"));
    match &track.preview_url {
        Some(url) => info!("Preview: {}", url),
        None => warning!("No preview available, the seeder would skip this track."),
    }
}
