//! `apiscope`: terminal browser for weather, dog breed and movie APIs.

use std::path::PathBuf;

use anyhow::Context;
use apiscope::config::{resolve_api_keys, Config};
use apiscope::logging::init_tracing;
use apiscope::ui::route::Route;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "apiscope", version, about = "Browse public APIs from the terminal")]
struct Cli {
    /// Path to the config file (defaults to the user config dir).
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Page to open first.
    #[arg(short = 'p', long = "page", value_enum, default_value_t = Route::Home)]
    page: Route,

    /// OpenWeatherMap API key (overrides config and env).
    #[arg(long = "weather-key")]
    weather_key: Option<String>,

    /// OMDb API key (overrides config and env).
    #[arg(long = "omdb-key")]
    omdb_key: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    if let Some(key) = cli.weather_key {
        config.weather.api_key = Some(key);
    }
    if let Some(key) = cli.omdb_key {
        config.movies.api_key = Some(key);
    }
    resolve_api_keys(&mut config, |name| std::env::var(name).ok());
    config.validate().context("Invalid configuration")?;

    tracing::info!(
        weather_key = config.weather.api_key.is_some(),
        omdb_key = config.movies.api_key.is_some(),
        "Configuration loaded"
    );

    apiscope::ui::runtime::run(config, cli.page)
}
