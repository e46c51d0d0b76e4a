use std::time::Instant;

use cinefind_catalog::CatalogError;

use super::App;
use super::modal::ModalSession;
use crate::search::{FetchOutcome, FetchTicket, Resolution, SearchStatus};

impl<'a> App<'a> {
	/// Submit whatever is in the query input.
	///
	/// Blank input raises a toast and leaves the editor alone. Anything else
	/// clears the editor, whether or not it starts a fetch.
	pub(crate) fn submit_input(&mut self) {
		let text = self.input.text();
		self.submit_text(&text);
	}

	pub(crate) fn submit_text(&mut self, text: &str) {
		match self.coordinator.submit_query(text) {
			Ok(ticket) => {
				self.input.clear();
				if let Some(ticket) = ticket {
					self.grid.reset();
					self.sync_overlay();
					self.dispatch(ticket);
				}
			}
			Err(err) => self.toasts.push(err.to_string(), Instant::now()),
		}
	}

	pub(crate) fn next_page(&mut self) {
		let ticket = self.coordinator.next_page();
		self.dispatch_page(ticket);
	}

	pub(crate) fn previous_page(&mut self) {
		let ticket = self.coordinator.previous_page();
		self.dispatch_page(ticket);
	}

	/// Drain finished fetches and apply the ones still wanted.
	pub(crate) fn pump_search_results(&mut self) {
		while let Some(outcome) = self.fetcher.try_recv() {
			self.handle_outcome(outcome);
		}
	}

	pub(crate) fn handle_outcome(&mut self, outcome: FetchOutcome) {
		match self.coordinator.resolve(outcome) {
			Resolution::Stale => return,
			Resolution::Applied(SearchStatus::Loaded) => {
				self.grid.reset();
				self.grid.clamp(self.coordinator.movies().len());
			}
			Resolution::Applied(_) => self.grid.reset(),
		}

		let now = Instant::now();
		for notice in self.coordinator.take_notices() {
			self.toasts.push(notice.to_string(), now);
		}
	}

	/// Open the overlay for the highlighted card.
	pub(crate) fn open_selected(&mut self) {
		let Some(movie) = self
			.grid
			.selected()
			.and_then(|index| self.coordinator.movies().get(index))
			.cloned()
		else {
			return;
		};
		self.coordinator.select_item(movie);
		self.sync_overlay();
	}

	pub(crate) fn close_overlay(&mut self) {
		self.coordinator.close_selection();
		self.sync_overlay();
	}

	/// Make the modal session mirror the coordinator's selection.
	pub(crate) fn sync_overlay(&mut self) {
		let wanted = self.coordinator.selection().map(|movie| movie.id);
		let current = self.overlay.as_ref().map(ModalSession::movie_id);
		if wanted == current {
			return;
		}
		// Drop the old session first so its guard is released.
		self.overlay = None;
		if let Some(movie) = self.coordinator.selection() {
			self.overlay = Some(ModalSession::open(movie, &self.scroll_lock));
		}
	}

	fn dispatch_page(&mut self, ticket: Option<FetchTicket>) {
		if let Some(ticket) = ticket {
			self.dispatch(ticket);
		}
	}

	fn dispatch(&mut self, ticket: FetchTicket) {
		if !self.fetcher.dispatch(ticket.clone()) {
			self.handle_outcome(FetchOutcome {
				ticket,
				result: Err(CatalogError::Undelivered),
			});
		}
	}
}
