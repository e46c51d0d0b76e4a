use cinefind::tui::style;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if let Some(theme) = &config.theme
		&& style::by_name(theme).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			theme.clone(),
			sources.source_for_theme(),
			format!("unknown theme; expected one of {}", style::names().join(", ")),
		));
	}

	if config.toast_ttl.is_zero() {
		return Err(ConfigError::invalid(
			"ui.toast_seconds",
			"0",
			sources.source_for_toast_seconds(),
			"must be at least 1",
		));
	}

	let base_url = &config.api.base_url;
	if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
		return Err(ConfigError::invalid(
			"api.base_url",
			base_url.clone(),
			sources.source_for_base_url(),
			"must be an http:// or https:// URL",
		));
	}

	Ok(())
}
