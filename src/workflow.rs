use std::sync::Arc;

use anyhow::Result;
use cinefind::catalog::{MovieSource, TmdbClient};
use cinefind::{MovieSearch, SearchOutcome};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive search experience.
pub(crate) struct SearchWorkflow {
	search: MovieSearch,
}

impl SearchWorkflow {
	/// Build the catalogue client and UI. Fails before the terminal is touched
	/// when the token is missing.
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let search = MovieSearchFactory::build(config)?;
		Ok(Self { search })
	}

	pub(crate) fn run(self) -> Result<SearchOutcome> {
		self.search.run()
	}
}

/// Translates resolved configuration into a configured [`MovieSearch`].
struct MovieSearchFactory {
	search: MovieSearch,
}

impl MovieSearchFactory {
	fn build(config: ResolvedConfig) -> Result<MovieSearch> {
		let ResolvedConfig {
			api,
			theme,
			prompt,
			initial_query,
			toast_ttl,
			..
		} = config;

		let client = TmdbClient::new(api)?;
		tracing::info!(endpoint = client.endpoint(), "catalogue client ready");

		let builder = Self::new(Arc::new(client))
			.with_prompt(prompt)
			.with_theme(theme)
			.with_initial_query(initial_query);
		Ok(builder.finish().with_toast_ttl(toast_ttl))
	}

	fn new(source: Arc<dyn MovieSource>) -> Self {
		Self {
			search: MovieSearch::new(source),
		}
	}

	fn with_prompt(mut self, prompt: Option<String>) -> Self {
		if let Some(prompt) = prompt {
			self.search = self.search.with_prompt(prompt);
		}
		self
	}

	fn with_theme(mut self, theme: Option<String>) -> Self {
		if let Some(theme) = theme {
			self.search = self.search.with_theme_name(&theme);
		}
		self
	}

	fn with_initial_query(mut self, query: Option<String>) -> Self {
		if let Some(query) = query {
			self.search = self.search.with_initial_query(query);
		}
		self
	}

	fn finish(self) -> MovieSearch {
		self.search
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use cinefind::catalog::{CatalogError, TmdbConfig};

	use super::*;

	fn config(token: Option<&str>) -> ResolvedConfig {
		ResolvedConfig {
			api: TmdbConfig::new(token.map(str::to_string)),
			theme: Some("light".into()),
			prompt: Some("Films".into()),
			initial_query: None,
			toast_ttl: Duration::from_secs(4),
			log_level: "info".into(),
			log_file: None,
		}
	}

	#[test]
	fn missing_token_is_fatal() {
		let err = SearchWorkflow::from_config(config(None))
			.err()
			.expect("missing token rejected");
		assert!(matches!(
			err.downcast_ref::<CatalogError>(),
			Some(CatalogError::MissingToken)
		));
	}

	#[test]
	fn token_present_builds_the_workflow() {
		assert!(SearchWorkflow::from_config(config(Some("abc"))).is_ok());
	}
}
