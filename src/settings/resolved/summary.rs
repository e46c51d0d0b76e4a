use super::ResolvedConfig;

/// Lines of the `--print-config` report. The token is reported as present or
/// missing, never printed.
pub(super) fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let mut lines = vec![
		"Effective configuration:".to_string(),
		format!("  API base URL: {}", config.api.base_url),
		format!("  API token: {}", token_status(config.api.token.as_deref())),
		format!(
			"  UI theme: {}",
			config.theme.as_deref().unwrap_or("(use the library default)")
		),
		format!("  Notification time: {}s", config.toast_ttl.as_secs()),
		format!("  Log level: {}", config.log_level),
	];
	match &config.log_file {
		Some(path) => lines.push(format!("  Log file: {}", path.display())),
		None => lines.push("  Log file: (disabled)".to_string()),
	}
	if let Some(prompt) = &config.prompt {
		lines.push(format!("  Prompt title: {prompt}"));
	}
	if let Some(query) = &config.initial_query {
		lines.push(format!("  Initial query: {query}"));
	}
	lines
}

fn token_status(token: Option<&str>) -> &'static str {
	match token {
		Some(token) if !token.trim().is_empty() => "set",
		_ => "missing",
	}
}
