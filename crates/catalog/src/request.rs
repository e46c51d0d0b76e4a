use std::fmt;
use std::num::NonZeroU32;

use crate::error::RequestError;

/// Search text with surrounding whitespace removed. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
	/// Trim `text` and reject it when nothing is left.
	pub fn parse(text: &str) -> Result<Self, RequestError> {
		let trimmed = text.trim();
		if trimmed.is_empty() {
			return Err(RequestError::BlankQuery);
		}
		Ok(Self(trimmed.to_string()))
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Query {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// One-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Page(NonZeroU32);

impl Page {
	pub const FIRST: Self = Self(NonZeroU32::MIN);

	pub fn new(number: u32) -> Result<Self, RequestError> {
		NonZeroU32::new(number)
			.map(Self)
			.ok_or(RequestError::ZeroPage)
	}

	#[must_use]
	pub fn get(self) -> u32 {
		self.0.get()
	}
}

impl Default for Page {
	fn default() -> Self {
		Self::FIRST
	}
}

impl fmt::Display for Page {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// A validated request for one page of search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
	pub query: Query,
	pub page: Page,
}

impl SearchRequest {
	/// Validate raw input into a request.
	pub fn new(query: &str, page: u32) -> Result<Self, RequestError> {
		Ok(Self {
			query: Query::parse(query)?,
			page: Page::new(page)?,
		})
	}

	#[must_use]
	pub fn from_parts(query: Query, page: Page) -> Self {
		Self { query, page }
	}

	/// Query string parameters sent to the search endpoint. Adult titles are
	/// always excluded and the language is fixed.
	#[must_use]
	pub fn params(&self) -> [(&'static str, String); 4] {
		[
			("query", self.query.as_str().to_string()),
			("page", self.page.get().to_string()),
			("include_adult", "false".to_string()),
			("language", "en-US".to_string()),
		]
	}
}
