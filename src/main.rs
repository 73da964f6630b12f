use std::path::PathBuf;

use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::EnvFilter;

use themetracks::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// SQLite database file (defaults to THEMETRACKS_DATABASE or the local data directory)
    #[clap(long, global = true)]
    database: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fetch a playlist per theme and store its tracks
    Seed(SeedOptions),

    /// List stored tracks
    Tracks(TracksOptions),

    /// Look up a single track on Spotify
    Track(TrackOptions),

    /// Database location and tracks per theme
    Info,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SeedOptions {
    /// Theme to seed; can be repeated. Without it the built-in theme list is used
    #[clap(long = "theme", action = ArgAction::Append, conflicts_with = "interactive")]
    pub themes: Vec<String>,

    /// Prompt for a single theme
    #[clap(long)]
    pub interactive: bool,

    /// Stop at the first theme that fails instead of continuing
    #[clap(long)]
    pub fail_fast: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct TracksOptions {
    /// Only show tracks stored under this theme
    #[clap(long)]
    pub theme: Option<String>,

    /// Filter by track name or artist
    #[clap(long)]
    pub search: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct TrackOptions {
    /// Free-text track query
    pub name: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = config::load_env() {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();
    let database = cli.database.unwrap_or_else(config::database_path);

    match cli.command {
        Command::Seed(opt) => cli::seed(&database, opt.themes, opt.interactive, opt.fail_fast),
        Command::Tracks(opt) => cli::list_tracks(&database, opt.theme, opt.search),
        Command::Track(opt) => cli::search_track(opt.name),
        Command::Info => cli::info(&database),
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
