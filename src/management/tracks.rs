use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags, OptionalExtension, Row, params};

use crate::{
    error::{Error, Result},
    types::TrackRecord,
};

const CREATE_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS tracks (
        track_id    TEXT PRIMARY KEY,
        name        TEXT,
        artist      TEXT,
        preview_url TEXT,
        image_url   TEXT,
        theme       TEXT
    )";

const SELECT_COLUMNS: &str = "SELECT track_id, name, artist, preview_url, image_url, theme FROM tracks";

const ORDER_BY_ARTIST: &str = "artist COLLATE NOCASE, name COLLATE NOCASE";

/// SQLite-backed store of discovered tracks, keyed by Spotify track id.
///
/// The connection lives as long as the store and is closed when it is
/// dropped, including on early returns through `?`.
pub struct TrackStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl TrackStore {
    /// Opens (or creates) the database file and makes sure the table exists.
    ///
    /// Missing parent directories are created first, so a fresh install can
    /// point `THEMETRACKS_DATABASE` anywhere.
    ///
    /// # Arguments
    ///
    /// * `path` - Location of the SQLite file
    ///
    /// # Errors
    ///
    /// - [`Error::Io`] if the parent directory cannot be created
    /// - [`Error::Store`] if SQLite cannot open the file or create the table
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let store = Self {
            conn: Connection::open(path)?,
            path: Some(path.to_path_buf()),
        };
        store.init()?;
        Ok(store)
    }

    /// Opens an existing database file without write access.
    ///
    /// Used by the listing commands: nothing is created on disk, neither the
    /// file nor its directory, and the table is expected to exist already.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingDatabase`] if no file exists at `path`
    /// - [`Error::Store`] if SQLite cannot open the file
    pub fn open_read_only(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::MissingDatabase(path.to_path_buf()));
        }

        Ok(Self {
            conn: Connection::open_with_flags(
                path,
                OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
            )?,
            path: Some(path.to_path_buf()),
        })
    }

    /// Opens a throwaway store that lives as long as the value.
    pub fn open_in_memory() -> Result<Self> {
        let store = Self {
            conn: Connection::open_in_memory()?,
            path: None,
        };
        store.init()?;
        Ok(store)
    }

    fn init(&self) -> Result<()> {
        self.conn.execute_batch(CREATE_TABLE)?;
        Ok(())
    }

    /// Database file backing this store, `None` when in memory.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Inserts the track or overwrites every column of the existing row.
    pub fn upsert(&self, track: &TrackRecord) -> Result<()> {
        self.conn.execute(
            "INSERT INTO tracks (track_id, name, artist, preview_url, image_url, theme)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT(track_id) DO UPDATE SET
                name = excluded.name,
                artist = excluded.artist,
                preview_url = excluded.preview_url,
                image_url = excluded.image_url,
                theme = excluded.theme",
            params![
                track.track_id,
                track.name,
                track.artist,
                track.preview_url,
                track.image_url,
                track.theme,
            ],
        )?;
        Ok(())
    }

    /// Looks up a single track by its Spotify id.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when no row has this id.
    pub fn get(&self, track_id: &str) -> Result<Option<TrackRecord>> {
        let track = self
            .conn
            .query_row(
                &format!("{SELECT_COLUMNS} WHERE track_id = ?1"),
                params![track_id],
                row_to_track,
            )
            .optional()?;
        Ok(track)
    }

    /// Returns every stored track.
    ///
    /// Rows are ordered by theme, then by artist and name ignoring case, which
    /// is the order the `tracks` command prints them in.
    pub fn all(&self) -> Result<Vec<TrackRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELECT_COLUMNS} ORDER BY theme, {ORDER_BY_ARTIST}"))?;
        let tracks = stmt
            .query_map([], row_to_track)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(tracks)
    }

    /// Returns the tracks last stored under `theme`, ordered like [`Self::all`].
    ///
    /// The theme must match exactly. A track found under several themes is
    /// only listed under the most recent one.
    pub fn by_theme(&self, theme: &str) -> Result<Vec<TrackRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "{SELECT_COLUMNS} WHERE theme = ?1 ORDER BY {ORDER_BY_ARTIST}"
        ))?;
        let tracks = stmt
            .query_map(params![theme], row_to_track)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(tracks)
    }

    /// Total number of stored tracks.
    pub fn count(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM tracks", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// Number of stored tracks per theme, ordered by theme.
    pub fn theme_counts(&self) -> Result<Vec<(String, u64)>> {
        let mut stmt = self.conn.prepare(
            "SELECT COALESCE(theme, ''), COUNT(*) FROM tracks GROUP BY theme ORDER BY theme",
        )?;
        let counts = stmt
            .query_map([], |row| {
                let theme: String = row.get(0)?;
                let count: i64 = row.get(1)?;
                Ok((theme, count as u64))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(counts)
    }
}

// Columns are nullable in the schema; rows written by other tools may hold NULLs.
fn row_to_track(row: &Row<'_>) -> rusqlite::Result<TrackRecord> {
    Ok(TrackRecord {
        track_id: row.get(0)?,
        name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        artist: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        preview_url: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        image_url: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        theme: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
    })
}
