use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILTER: &str = "nvterm=info";

pub fn log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from(std::env::var("HOME").unwrap_or_default()).join(".cache"))
        .join("nvterm")
        .join("nvterm.log")
}

/// Send `tracing` output to the log file; the terminal belongs to the UI.
/// Logging is skipped entirely if the file cannot be created.
pub fn init() {
    let path = log_path();
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(file) = File::create(&path) else {
        return;
    };

    let layer = fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(LOG_FILTER))
        .with(layer)
        .try_init();
}
