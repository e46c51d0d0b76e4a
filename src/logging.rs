//! File-backed `tracing` setup.
//!
//! The terminal belongs to the UI, so log lines go to a file. Logging is
//! optional: when the file cannot be opened the application runs without it.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive that beats the configured
/// level, e.g. `CINEFIND_LOG=cinefind=debug,reqwest=warn`.
pub const LOG_ENV: &str = "CINEFIND_LOG";
pub const DEFAULT_LEVEL: &str = "info";
pub const DEFAULT_FILE_NAME: &str = "cinefind.log";

/// Install the global subscriber writing to `path`.
///
/// Returns `false` when logging stays disabled, either because the file could
/// not be opened or because a subscriber is already installed.
pub fn initialize(level: &str, path: &Path) -> bool {
	if let Some(parent) = path.parent()
		&& fs::create_dir_all(parent).is_err()
	{
		return false;
	}
	let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
		return false;
	};

	let installed = tracing_subscriber::fmt()
		.with_env_filter(filter(level))
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.with_target(true)
		.try_init()
		.is_ok();
	if installed {
		tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging started");
	}
	installed
}

fn filter(level: &str) -> EnvFilter {
	EnvFilter::try_from_env(LOG_ENV)
		.or_else(|_| EnvFilter::try_new(level))
		.unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}
