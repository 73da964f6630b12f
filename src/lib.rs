//! Theme Track Seeder Library
//!
//! Looks up a Spotify playlist for each theme name, reads its tracks and
//! stores the ones that have an audio preview in a local SQLite table,
//! one row per track id.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration from environment variables and `.env`
//! - `error` - Error type shared by every module
//! - `management` - SQLite track store
//! - `seeder` - The theme → playlist → tracks → store loop
//! - `spotify` - Spotify Web API client (token, search, playlists)
//! - `types` - API response shapes and stored records
//! - `utils` - Theme list and table helpers
//!
//! # Example
//!
//! ```
//! use themetracks::{config, management::TrackStore, seeder, spotify::Session};
//!
//! fn main() -> themetracks::Result<()> {
//!     config::load_env()?;
//!     let config = config::Config::from_env()?;
//!     let session = Session::connect(&config)?;
//!     let store = TrackStore::open(&config.database_path)?;
//!     let report = seeder::seed_theme(&session, &store, "Jazz")?;
//!     println!("stored {} tracks", report.stored);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod seeder;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::{Error, Result};

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Seeding {} themes", themes.len());
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits with status 1.
///
/// Only for fatal errors: code after the macro does not run.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable problems, such as a single theme that could not be
/// seeded while the rest of the run continues.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
