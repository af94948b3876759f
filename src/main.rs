use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

mod app;
mod config;
mod core;
mod models;
mod utils;

use crate::core::catalog::TmdbClient;
use crate::core::dashboard::Dashboard;
use crate::core::filter::{FilterCriteria, GenreSelector};
use crate::core::render::{render_dashboard, PosterCdn};

/// Browse popular movies from TMDB, filtered by title, genre and year
#[derive(Parser, Debug)]
#[command(name = "cinedash", version, long_about = None)]
struct Cli {
    /// Case-insensitive title substring
    #[arg(short, long, default_value = "")]
    search: String,

    /// Genre id or name (e.g. 28 or "Action")
    #[arg(short, long)]
    genre: Option<String>,

    /// Release year (matched as a substring of the release date)
    #[arg(short, long)]
    year: Option<String>,

    /// Keep reading filter commands from stdin after the first render
    #[arg(short, long)]
    interactive: bool,

    /// Path to the config file (defaults to $CINEDASH_CONFIG_PATH or ./config.toml)
    #[arg(short, long)]
    config: Option<String>,
}

#[dotenvy::load(path = "./.env", required = false)]
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match config::Config::init(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to initialize configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    app::common::init_logging(&config);

    let mut criteria = FilterCriteria { search_term: cli.search, ..Default::default() };
    criteria.set_year(cli.year.as_deref());
    let mut dashboard = Dashboard::new(criteria);

    let client = TmdbClient::from_config(&config.tmdb);
    tracing::info!("Loading catalog from {}", config.tmdb.base_url);
    crate::core::dashboard::load(&mut dashboard, &client).await;
    if dashboard.movies().is_empty() {
        tracing::warn!("No movies loaded from the catalog");
    }

    // names can only be resolved once the taxonomy is in
    if let Some(genre) = &cli.genre {
        app::common::apply_genre_selector(&mut dashboard, &GenreSelector::parse(genre));
    }

    let cdn = PosterCdn::from_config(&config.tmdb);
    let mut stdout = std::io::stdout();
    if let Err(e) = write!(stdout, "{}", render_dashboard(&dashboard, &cdn)) {
        tracing::error!("Failed to write dashboard: {e}");
        return ExitCode::FAILURE;
    }

    if cli.interactive {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        if let Err(e) = app::interactive::run(&mut dashboard, &cdn, stdin, &mut stdout).await {
            tracing::error!("Interactive session ended: {e}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
