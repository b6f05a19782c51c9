//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use apiscope::config::Config;
use apiscope::ui::app::{App, UiCommand};
use std::path::PathBuf;
use tempfile::TempDir;
use tokio::sync::mpsc;

/// Config whose adapters all point at `base_url`, with both keys set.
pub fn config_for(base_url: &str) -> Config {
    let mut config = Config::default();
    config.weather.base_url = base_url.to_string();
    config.weather.api_key = Some("weather-test-key".into());
    config.dogs.base_url = format!("{base_url}/api");
    config.movies.base_url = base_url.to_string();
    config.movies.api_key = Some("omdb-test-key".into());
    config.http.timeout_seconds = 2;
    config.http.connect_timeout_seconds = 1;
    config
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- App helpers --------------------------------------------------------------

/// App wired to a command channel the test drains by hand.
pub fn make_app() -> (App, mpsc::Receiver<UiCommand>) {
    let mut app = App::new(&Config::default());
    let (tx, rx) = mpsc::channel(64);
    app.set_command_sender(tx);
    (app, rx)
}

pub fn drain(rx: &mut mpsc::Receiver<UiCommand>) -> Vec<UiCommand> {
    let mut commands = Vec::new();
    while let Ok(command) = rx.try_recv() {
        commands.push(command);
    }
    commands
}

pub fn breeds(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

pub fn image_urls(breed: &str, count: usize) -> Vec<String> {
    (0..count)
        .map(|idx| format!("https://images.dog.ceo/breeds/{breed}/n{idx:04}.jpg"))
        .collect()
}
