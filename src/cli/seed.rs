use std::{path::Path, time::Duration};

use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config::{self, Config},
    error, info,
    error::Result,
    management::TrackStore,
    seeder::{self, FailurePolicy, Progress, SeedSummary},
    spotify::Session,
    success, utils, warning,
};

pub fn seed(database: &Path, themes: Vec<String>, interactive: bool, fail_fast: bool) {
    let themes = if interactive {
        match prompt_theme() {
            Ok(theme) => vec![theme],
            Err(e) => error!("Cannot read theme: {}", e),
        }
    } else {
        utils::themes_or_default(themes)
    };

    if themes.is_empty() {
        error!("No theme given.");
    }

    let policy = if fail_fast {
        FailurePolicy::Abort
    } else {
        FailurePolicy::Continue
    };

    info!(
        "Seeding {} theme(s) into {}",
        themes.len(),
        database.display()
    );

    let summary = match run(database, &themes, policy) {
        Ok(summary) => summary,
        Err(e) => error!("Seeding aborted: {}", e),
    };

    if summary.is_success() {
        success!(
            "Stored {} track(s) for {} theme(s), skipped {} without preview.",
            summary.stored(),
            summary.reports.len(),
            summary.skipped()
        );
        return;
    }

    warning!(
        "Stored {} track(s) for {} theme(s), skipped {} without preview.",
        summary.stored(),
        summary.reports.len(),
        summary.skipped()
    );
    let failed: Vec<&str> = summary.failures.iter().map(|f| f.theme.as_str()).collect();
    error!(
        "{} theme(s) failed: {}",
        summary.failures.len(),
        failed.join(", ")
    );
}

// The store is dropped before returning, so the connection is closed before
// the caller decides on the exit status.
fn run(database: &Path, themes: &[String], policy: FailurePolicy) -> Result<SeedSummary> {
    let config = Config::from_env().inspect_err(|_| {
        warning!(
            "Set the Spotify credentials in {} or in the environment.",
            config::data_dir().join(".env").display()
        )
    })?;
    let session = Session::connect(&config)?;
    let store = TrackStore::open(database)?;

    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = seeder::seed_themes(&session, &store, themes, policy, |progress| {
        match progress {
            Progress::Started {
                theme,
                index,
                total,
            } => pb.set_message(format!(
                "Fetching playlist for theme {theme} ({current}/{total})...",
                current = index + 1
            )),
            Progress::Finished(report) => pb.suspend(|| {
                success!(
                    "{theme}: {stored} track(s) stored, {skipped} skipped (playlist {playlist})",
                    theme = report.theme,
                    stored = report.stored,
                    skipped = report.skipped,
                    playlist = report
                        .playlist_name
                        .as_deref()
                        .unwrap_or(&report.playlist_id)
                )
            }),
            Progress::Failed { theme, error } => {
                pb.suspend(|| warning!("{}: {}", theme, error))
            }
        }
    });

    pb.finish_and_clear();
    result
}

fn prompt_theme() -> Result<String> {
    let theme: String = Input::new().with_prompt("Theme").interact_text()?;
    Ok(theme.trim().to_string())
}
