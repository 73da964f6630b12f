use std::path::Path;

use tabled::Table;

use crate::{Error, error, management::TrackStore, types::TrackRecord, utils, warning};

/// Prints the stored tracks as a table, optionally narrowed to one theme and
/// to names or artists containing `search`.
///
/// Rows keep the order the store returns them in. A missing database is
/// reported as a warning and never created.
pub fn list_tracks(database: &Path, theme: Option<String>, search: Option<String>) {
    let mut tracks = match load_tracks(database, theme.as_deref()) {
        Ok(tracks) => tracks,
        Err(Error::MissingDatabase(_)) => {
            warning!(
                "No database at {}. Run themetracks seed first.",
                database.display()
            );
            return;
        }
        Err(e) => error!("Failed to load tracks from {}: {}", database.display(), e),
    };

    if let Some(term) = search {
        utils::filter_tracks(&mut tracks, &term);
    }

    if tracks.is_empty() {
        match theme {
            Some(theme) => warning!("No tracks stored for theme {}.", theme),
            None => warning!("No tracks stored. Run themetracks seed first."),
        }
        return;
    }

    let table = Table::new(utils::to_table_rows(tracks));
    println!("{}", table);
}

fn load_tracks(database: &Path, theme: Option<&str>) -> crate::Result<Vec<TrackRecord>> {
    let store = TrackStore::open_read_only(database)?;
    match theme {
        Some(theme) => store.by_theme(theme),
        None => store.all(),
    }
}
