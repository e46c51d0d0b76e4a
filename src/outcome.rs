use cinefind_catalog::Movie;

/// How a search session ended.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
	/// `true` when the user confirmed a movie from the detail overlay.
	pub accepted: bool,
	/// The last query submitted, if any.
	pub query: Option<String>,
	pub selection: Option<Movie>,
}

impl SearchOutcome {
	#[must_use]
	pub fn cancelled(query: Option<String>) -> Self {
		Self {
			accepted: false,
			query,
			selection: None,
		}
	}

	#[must_use]
	pub fn accepted(query: Option<String>, movie: Movie) -> Self {
		Self {
			accepted: true,
			query,
			selection: Some(movie),
		}
	}

	/// The confirmed movie, if the user accepted one.
	#[must_use]
	pub fn selected_movie(&self) -> Option<&Movie> {
		if self.accepted {
			self.selection.as_ref()
		} else {
			None
		}
	}
}
