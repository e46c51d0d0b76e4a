use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;

	use super::*;

	#[test]
	fn file_values_are_loaded_and_cli_wins() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("cinefind.toml");
		fs::write(
			&path,
			r#"
[api]
base_url = "http://localhost:9999/3"
token = "from-file"

[ui]
theme = "light"
prompt = "Find a film"
toast_seconds = 6

[logging]
level = "debug"
"#,
		)
		.expect("write config");

		let cli = CliArgs::parse_from([
			"cinefind",
			"--no-config",
			"--config",
			path.to_str().expect("utf-8 path"),
			"--theme",
			"solarized",
			"--token",
			"from-cli",
		]);
		let config = load(&cli).expect("config loads");

		assert_eq!(config.api.base_url, "http://localhost:9999/3");
		assert_eq!(config.api.token.as_deref(), Some("from-cli"));
		assert_eq!(config.theme.as_deref(), Some("solarized"));
		assert_eq!(config.prompt.as_deref(), Some("Find a film"));
		assert_eq!(config.toast_ttl.as_secs(), 6);
		assert_eq!(config.log_level, "debug");
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let dir = tempfile::tempdir().expect("tempdir");
		let missing = dir.path().join("absent.toml");
		let cli = CliArgs::parse_from([
			"cinefind",
			"--no-config",
			"--config",
			missing.to_str().expect("utf-8 path"),
		]);

		assert!(load(&cli).is_err());
	}

	#[test]
	fn invalid_values_name_their_origin() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("cinefind.toml");
		fs::write(&path, "[ui]\ntoast_seconds = 0\n").expect("write config");

		let cli = CliArgs::parse_from([
			"cinefind",
			"--no-config",
			"--config",
			path.to_str().expect("utf-8 path"),
		]);
		let err = load(&cli).expect_err("zero is rejected").to_string();
		assert!(err.contains("ui.toast_seconds"));
		assert!(err.contains("configuration key"));
	}
}
