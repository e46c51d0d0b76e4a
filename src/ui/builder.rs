use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use cinefind_catalog::MovieSource;
use cinefind_tui::Theme;
use cinefind_tui::style::theme;

use super::App;
use crate::outcome::SearchOutcome;

/// Configures the interactive movie search before it takes over the
/// terminal.
pub struct MovieSearch {
	source: Arc<dyn MovieSource>,
	prompt: Option<String>,
	initial_query: Option<String>,
	theme: Option<Theme>,
	toast_ttl: Option<Duration>,
}

impl MovieSearch {
	pub fn new(source: Arc<dyn MovieSource>) -> Self {
		Self {
			source,
			prompt: None,
			initial_query: None,
			theme: None,
			toast_ttl: None,
		}
	}

	pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
		self.prompt = Some(prompt.into());
		self
	}

	/// Query submitted as soon as the UI starts.
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = Some(query.into());
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Unknown names keep the current theme.
	pub fn with_theme_name(mut self, name: &str) -> Self {
		match theme::by_name(name) {
			Some(theme) => self.theme = Some(theme),
			None => tracing::warn!(theme = name, "unknown theme; keeping the default"),
		}
		self
	}

	pub fn with_toast_ttl(mut self, ttl: Duration) -> Self {
		self.toast_ttl = Some(ttl);
		self
	}

	/// Build the app without touching the terminal.
	pub fn build(self) -> Result<App<'static>> {
		let mut app = App::new(self.source)?;
		if let Some(prompt) = self.prompt {
			app.set_prompt(prompt);
		}
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		if let Some(ttl) = self.toast_ttl {
			app.set_toast_ttl(ttl);
		}
		if let Some(query) = self.initial_query.filter(|query| !query.trim().is_empty()) {
			app.submit_text(&query);
		}
		Ok(app)
	}

	pub fn run(self) -> Result<SearchOutcome> {
		self.build()?.run()
	}
}
