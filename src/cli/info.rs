use std::path::Path;

use tabled::Table;

use crate::{Error, error, info, management::TrackStore, types::ThemeCountRow, warning};

/// Prints the database location and how many tracks each theme holds.
pub fn info(database: &Path) {
    let (total, counts) = match load_counts(database) {
        Ok(counts) => counts,
        Err(Error::MissingDatabase(_)) => {
            info!("Database: {}", database.display());
            warning!("No database yet. Run themetracks seed first.");
            return;
        }
        Err(e) => error!("Failed to read {}: {}", database.display(), e),
    };

    info!("Database: {}", database.display());
    info!("Stored tracks: {}", total);

    if counts.is_empty() {
        return;
    }

    let rows: Vec<ThemeCountRow> = counts
        .into_iter()
        .map(|(theme, tracks)| ThemeCountRow { theme, tracks })
        .collect();
    println!("{}", Table::new(rows));
}

fn load_counts(database: &Path) -> crate::Result<(u64, Vec<(String, u64)>)> {
    let store = TrackStore::open_read_only(database)?;
    Ok((store.count()?, store.theme_counts()?))
}
