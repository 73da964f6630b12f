//! # CLI Module
//!
//! User-facing commands. Each command resolves its inputs, calls into the
//! library layers and prints the result with the crate's output macros.
//! Fatal problems end the process through [`crate::error!`] with exit
//! status 1.
//!
//! ```text
//! CLI Layer (output, prompts, progress)
//!     ↓
//! Seeder (theme loop)
//!     ↓
//! Spotify client  /  Track store
//! ```
//!
//! - [`seed`] - fetch playlists for themes and store their tracks
//! - [`list_tracks`] - print stored tracks, optionally filtered
//! - [`search_track`] - look up a single track on Spotify
//! - [`info`] - database location and per-theme counts
//!
//! ```bash
//! themetracks seed                       # the built-in theme list
//! themetracks seed --theme Jazz --theme "R&B"
//! themetracks seed --interactive         # prompt for one theme
//! themetracks tracks --theme Jazz
//! themetracks info
//! ```

mod info;
mod seed;
mod track;
mod tracks;

pub use info::info;
pub use seed::seed;
pub use track::search_track;
pub use tracks::list_tracks;
