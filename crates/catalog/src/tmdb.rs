//! HTTP gateway to TMDB's `search/movie` endpoint.

use std::fmt;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::error::CatalogError;
use crate::movie::MoviePage;
use crate::request::SearchRequest;
use crate::source::MovieSource;

/// Public TMDB API root.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

const SEARCH_PATH: &str = "/search/movie";

/// Connection settings for [`TmdbClient`].
#[derive(Clone)]
pub struct TmdbConfig {
	pub base_url: String,
	pub token: Option<String>,
}

impl TmdbConfig {
	pub fn new(token: Option<String>) -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.to_string(),
			token,
		}
	}

	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}
}

impl fmt::Debug for TmdbConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TmdbConfig")
			.field("base_url", &self.base_url)
			.field("token", &self.token.as_ref().map(|_| "<redacted>"))
			.finish()
	}
}

/// Body TMDB sends alongside error statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
	status_message: Option<String>,
}

/// Movie search client authenticated with a TMDB v4 bearer token.
#[derive(Clone)]
pub struct TmdbClient {
	http: Client,
	endpoint: String,
	token: String,
}

impl TmdbClient {
	/// Build a client, failing fast when no usable token is configured.
	pub fn new(config: TmdbConfig) -> Result<Self, CatalogError> {
		let token = config
			.token
			.map(|token| token.trim().to_string())
			.filter(|token| !token.is_empty())
			.ok_or(CatalogError::MissingToken)?;
		let endpoint = format!("{}{SEARCH_PATH}", config.base_url.trim_end_matches('/'));
		let http = Client::builder().build().map_err(CatalogError::Transport)?;

		Ok(Self {
			http,
			endpoint,
			token,
		})
	}

	#[must_use]
	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}
}

impl fmt::Debug for TmdbClient {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TmdbClient")
			.field("endpoint", &self.endpoint)
			.finish_non_exhaustive()
	}
}

#[async_trait]
impl MovieSource for TmdbClient {
	async fn search(&self, request: &SearchRequest) -> Result<MoviePage, CatalogError> {
		tracing::debug!(query = %request.query, page = request.page.get(), "searching catalogue");

		let response = self
			.http
			.get(&self.endpoint)
			.query(&request.params()[..])
			.header(AUTHORIZATION, format!("Bearer {}", self.token))
			.header(ACCEPT, "application/json")
			.send()
			.await
			.map_err(CatalogError::Transport)?;

		let status = response.status();
		let body = response.bytes().await.map_err(CatalogError::Transport)?;

		if !status.is_success() {
			let message = status_message(status, &body);
			tracing::warn!(status = status.as_u16(), ?message, "catalogue rejected search");
			return Err(CatalogError::Status {
				status: status.as_u16(),
				message,
			});
		}

		let page: MoviePage = serde_json::from_slice(&body).map_err(CatalogError::Decode)?;
		tracing::debug!(
			results = page.len(),
			total_pages = page.total_pages,
			"catalogue search completed"
		);
		Ok(page)
	}
}

fn status_message(status: StatusCode, body: &[u8]) -> Option<String> {
	serde_json::from_slice::<ErrorBody>(body)
		.ok()
		.and_then(|body| body.status_message)
		.or_else(|| status.canonical_reason().map(str::to_string))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_or_blank_token_is_a_configuration_error() {
		assert!(matches!(
			TmdbClient::new(TmdbConfig::new(None)),
			Err(CatalogError::MissingToken)
		));
		assert!(matches!(
			TmdbClient::new(TmdbConfig::new(Some("  ".into()))),
			Err(CatalogError::MissingToken)
		));
	}

	#[test]
	fn token_present_builds_a_client() {
		let client = TmdbClient::new(TmdbConfig::new(Some("token".into())));
		assert!(client.is_ok(), "unexpected error: {:?}", client.err());
	}

	#[test]
	fn endpoint_joins_base_url_without_double_slash() {
		let client = TmdbClient::new(
			TmdbConfig::new(Some("token".into())).with_base_url("http://localhost:9000/3/"),
		)
		.expect("client");
		assert_eq!(client.endpoint(), "http://localhost:9000/3/search/movie");
	}

	#[test]
	fn debug_output_never_contains_the_token() {
		let config = TmdbConfig::new(Some("super-secret".into()));
		let rendered = format!("{config:?}");
		assert!(!rendered.contains("super-secret"));
		assert!(rendered.contains("<redacted>"));
	}

	#[test]
	fn status_message_prefers_tmdb_body() {
		let body = br#"{"status_code":7,"status_message":"Invalid API key: You must be granted a valid key."}"#;
		assert_eq!(
			status_message(StatusCode::UNAUTHORIZED, body).as_deref(),
			Some("Invalid API key: You must be granted a valid key.")
		);
		assert_eq!(
			status_message(StatusCode::BAD_GATEWAY, b"<html>").as_deref(),
			Some("Bad Gateway")
		);
	}
}
