//! The query/page state machine behind the search screen.
//!
//! [`SearchCoordinator`] performs no I/O. Every transition that needs data
//! hands back a [`FetchTicket`]; the caller runs it and later feeds the
//! [`FetchOutcome`] to [`SearchCoordinator::resolve`]. Only the most recently
//! issued ticket can change what is displayed, so answers that arrive out of
//! order are dropped instead of overwriting newer state.

use std::fmt;

use cinefind_catalog::{Movie, MoviePage, Page, Query, SearchRequest};
use thiserror::Error;

use super::commands::{FetchOutcome, FetchTicket};

/// Rejected user input. Recovered locally with an advisory message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
	#[error("Please enter your search query.")]
	BlankQuery,
}

/// Advisory messages produced while resolving fetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
	NoResults { query: String },
}

impl fmt::Display for Notice {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NoResults { .. } => f.write_str("No movies found for your request."),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStatus {
	/// Nothing has been searched yet.
	#[default]
	Idle,
	/// A fetch for the current query and page is outstanding.
	Loading,
	/// The last fetch returned at least one movie.
	Loaded,
	/// The last fetch succeeded with zero movies.
	Empty,
	/// The last fetch failed.
	Failed,
}

/// What [`SearchCoordinator::resolve`] did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
	Applied(SearchStatus),
	/// The outcome belonged to a superseded request and was ignored.
	Stale,
}

#[derive(Debug, Default)]
pub struct SearchCoordinator {
	query: Option<Query>,
	page: Page,
	status: SearchStatus,
	results: Option<MoviePage>,
	selection: Option<Movie>,
	last_ticket: u64,
	pending: Option<FetchTicket>,
	notices: Vec<Notice>,
}

impl SearchCoordinator {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn query(&self) -> Option<&Query> {
		self.query.as_ref()
	}

	#[must_use]
	pub fn page(&self) -> Page {
		self.page
	}

	#[must_use]
	pub fn status(&self) -> SearchStatus {
		self.status
	}

	/// Results on screen. While a page change loads these are the previous
	/// page's results.
	#[must_use]
	pub fn results(&self) -> Option<&MoviePage> {
		self.results.as_ref()
	}

	#[must_use]
	pub fn movies(&self) -> &[Movie] {
		self.results
			.as_ref()
			.map(|page| page.results.as_slice())
			.unwrap_or_default()
	}

	/// Total pages reported by the displayed results, zero when unknown.
	#[must_use]
	pub fn total_pages(&self) -> u32 {
		self.results.as_ref().map_or(0, |page| page.total_pages)
	}

	#[must_use]
	pub fn selection(&self) -> Option<&Movie> {
		self.selection.as_ref()
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.status == SearchStatus::Loading
	}

	#[must_use]
	pub fn is_failed(&self) -> bool {
		self.status == SearchStatus::Failed
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.status == SearchStatus::Empty
	}

	/// The ticket whose outcome is still awaited, if any.
	#[must_use]
	pub fn pending(&self) -> Option<&FetchTicket> {
		self.pending.as_ref()
	}

	/// Start a search for `text`.
	///
	/// Blank text is rejected without touching any state. Re-submitting the
	/// current query is a no-op and returns `Ok(None)`.
	pub fn submit_query(&mut self, text: &str) -> Result<Option<FetchTicket>, ValidationError> {
		let query = Query::parse(text).map_err(|_| ValidationError::BlankQuery)?;
		if self.query.as_ref() == Some(&query) {
			tracing::debug!(%query, "query unchanged; not fetching again");
			return Ok(None);
		}

		self.query = Some(query.clone());
		self.page = Page::FIRST;
		self.selection = None;
		self.results = None;
		Ok(Some(self.issue(query)))
	}

	/// Move to page `number` of the current query.
	///
	/// Ignored before the first search, for page zero, for the current page,
	/// and for pages past the known total. Displayed results and the
	/// selection are kept until the new page arrives.
	pub fn change_page(&mut self, number: u32) -> Option<FetchTicket> {
		let query = self.query.clone()?;
		let page = Page::new(number).ok()?;
		if page == self.page {
			return None;
		}
		let total = self.total_pages();
		if total > 0 && page.get() > total {
			tracing::debug!(page = page.get(), total, "page out of range");
			return None;
		}

		self.page = page;
		Some(self.issue(query))
	}

	pub fn next_page(&mut self) -> Option<FetchTicket> {
		self.change_page(self.page.get().saturating_add(1))
	}

	pub fn previous_page(&mut self) -> Option<FetchTicket> {
		self.change_page(self.page.get().saturating_sub(1))
	}

	/// Apply a finished fetch if it answers the latest ticket.
	pub fn resolve(&mut self, outcome: FetchOutcome) -> Resolution {
		let FetchOutcome { ticket, result } = outcome;
		if !self.is_current(&ticket) {
			tracing::debug!(
				ticket = ticket.id,
				query = %ticket.request.query,
				page = ticket.request.page.get(),
				"discarding stale fetch outcome"
			);
			return Resolution::Stale;
		}
		self.pending = None;

		self.status = match result {
			Ok(page) if page.is_empty() => {
				self.notices.push(Notice::NoResults {
					query: ticket.request.query.to_string(),
				});
				self.results = Some(page);
				SearchStatus::Empty
			}
			Ok(page) => {
				self.results = Some(page);
				SearchStatus::Loaded
			}
			Err(err) => {
				tracing::warn!(ticket = ticket.id, error = %err, "movie search failed");
				self.results = None;
				SearchStatus::Failed
			}
		};
		tracing::debug!(ticket = ticket.id, status = ?self.status, "fetch outcome applied");
		Resolution::Applied(self.status)
	}

	/// Remember `movie` as the one being inspected.
	pub fn select_item(&mut self, movie: Movie) {
		self.selection = Some(movie);
	}

	pub fn close_selection(&mut self) {
		self.selection = None;
	}

	/// Hand over advisory notices produced since the last call.
	pub fn take_notices(&mut self) -> Vec<Notice> {
		std::mem::take(&mut self.notices)
	}

	fn issue(&mut self, query: Query) -> FetchTicket {
		self.last_ticket += 1;
		let ticket = FetchTicket {
			id: self.last_ticket,
			request: SearchRequest::from_parts(query, self.page),
		};
		self.status = SearchStatus::Loading;
		self.pending = Some(ticket.clone());
		tracing::debug!(
			ticket = ticket.id,
			query = %ticket.request.query,
			page = ticket.request.page.get(),
			"issuing fetch"
		);
		ticket
	}

	fn is_current(&self, ticket: &FetchTicket) -> bool {
		let Some(pending) = &self.pending else {
			return false;
		};
		pending.id == ticket.id
			&& self.query.as_ref() == Some(&ticket.request.query)
			&& self.page == ticket.request.page
	}
}
