use thiserror::Error;

/// Reasons a [`SearchRequest`](crate::SearchRequest) cannot be built.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
	/// The query was empty once surrounding whitespace was removed.
	#[error("search query must not be blank")]
	BlankQuery,

	/// Pages are numbered from one.
	#[error("page numbers start at 1")]
	ZeroPage,
}

/// Errors produced by the movie catalogue gateway.
#[derive(Debug, Error)]
pub enum CatalogError {
	/// No bearer token was configured. The application cannot start without it.
	#[error("TMDB bearer token is missing; set TMDB_TOKEN or CINEFIND__API__TOKEN")]
	MissingToken,

	/// The request parameters were rejected before anything was sent.
	#[error(transparent)]
	InvalidRequest(#[from] RequestError),

	/// The HTTP request could not be completed.
	#[error("request to the movie catalogue failed: {0}")]
	Transport(#[source] reqwest::Error),

	/// The catalogue answered with a non-success status code.
	#[error("movie catalogue responded with status {status}{}", status_suffix(.message))]
	Status { status: u16, message: Option<String> },

	/// The response body did not match the expected shape.
	#[error("failed to decode movie catalogue response: {0}")]
	Decode(#[source] serde_json::Error),

	/// The request never reached the gateway because whatever runs it has
	/// shut down.
	#[error("search request was not delivered")]
	Undelivered,
}

fn status_suffix(message: &Option<String>) -> String {
	match message {
		Some(message) => format!(": {message}"),
		None => String::new(),
	}
}

impl CatalogError {
	/// Whether the failure happened while talking to the remote service.
	#[must_use]
	pub fn is_network(&self) -> bool {
		matches!(
			self,
			Self::Transport(_) | Self::Status { .. } | Self::Decode(_)
		)
	}
}
