use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming the log file base path.
pub const LOG_PATH_ENV: &str = "APISCOPE_LOG";

/// Initialize tracing with optional file output.
///
/// Nothing is logged unless `APISCOPE_LOG` names a file; writing to the
/// terminal would corrupt the TUI. Each run gets `{path}.{timestamp}.{pid}`
/// so concurrent instances never share a file. `RUST_LOG` sets the filter
/// (default `info`).
pub fn init_tracing() {
    let Some(log_path) = std::env::var(LOG_PATH_ENV).ok().filter(|p| !p.trim().is_empty())
    else {
        return;
    };

    let unique_path = unique_log_path(&log_path);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

fn unique_log_path(base: &str) -> String {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", base, timestamp, pid)
}
