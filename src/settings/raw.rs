use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Error, Result};
use cinefind::app_dirs;
use cinefind::catalog::{DEFAULT_BASE_URL, TmdbConfig};
use cinefind::logging::{DEFAULT_FILE_NAME, DEFAULT_LEVEL};
use serde::Deserialize;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};
use crate::cli::CliArgs;

const DEFAULT_TOAST_SECONDS: u64 = 4;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	api: ApiSection,
	ui: UiSection,
	logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ApiSection {
	base_url: Option<String>,
	token: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	prompt: Option<String>,
	initial_query: Option<String>,
	toast_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	level: Option<String>,
	file: Option<PathBuf>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		override_with(&mut self.api.token, cli.token.clone());
		override_with(&mut self.api.base_url, cli.api_url.clone());
		override_with(&mut self.ui.theme, cli.theme.clone());
		override_with(&mut self.ui.prompt, cli.title.clone());
		override_with(&mut self.ui.initial_query, cli.initial_query.clone());
		override_with(&mut self.ui.toast_seconds, cli.toast_seconds);
		override_with(&mut self.logging.level, cli.log_level.clone());
		override_with(&mut self.logging.file, cli.log_file.clone());
	}

	/// Convert into a [`ResolvedConfig`], filling defaults and validating.
	///
	/// A missing token is not an error here; the catalogue client rejects it
	/// when it is constructed.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"CINEFIND__UI__THEME",
				"--theme",
				"ui.theme",
			),
			toast_seconds: detect_source(
				cli.toast_seconds.is_some(),
				self.ui.toast_seconds.is_some(),
				"CINEFIND__UI__TOAST_SECONDS",
				"--toast-seconds",
				"ui.toast_seconds",
			),
			base_url: detect_source(
				cli.api_url.is_some(),
				self.api.base_url.is_some(),
				"CINEFIND__API__BASE_URL",
				"--api-url",
				"api.base_url",
			),
		};

		let base_url = non_blank(self.api.base_url).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
		let api = TmdbConfig::new(non_blank(self.api.token)).with_base_url(base_url);
		let log_file = self.logging.file.or_else(|| {
			app_dirs::get_data_dir()
				.ok()
				.map(|dir| dir.join(DEFAULT_FILE_NAME))
		});

		let config = ResolvedConfig {
			api,
			theme: non_blank(self.ui.theme),
			prompt: non_blank(self.ui.prompt),
			initial_query: non_blank(self.ui.initial_query),
			toast_ttl: Duration::from_secs(self.ui.toast_seconds.unwrap_or(DEFAULT_TOAST_SECONDS)),
			log_level: non_blank(self.logging.level).unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
			log_file,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn override_with<T>(slot: &mut Option<T>, value: Option<T>) {
	if value.is_some() {
		*slot = value;
	}
}

fn non_blank(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
