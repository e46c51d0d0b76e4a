use std::path::PathBuf;
use std::time::Duration;

use cinefind::catalog::TmdbConfig;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	/// Catalogue endpoint and credentials. The token may still be missing.
	pub api: TmdbConfig,
	pub theme: Option<String>,
	pub prompt: Option<String>,
	pub initial_query: Option<String>,
	pub toast_ttl: Duration,
	pub log_level: String,
	/// `None` when no data directory could be determined.
	pub log_file: Option<PathBuf>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		for line in summary::summary_lines(self) {
			println!("{line}");
		}
	}
}
