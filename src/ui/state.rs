use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use cinefind_catalog::MovieSource;
use cinefind_tui::components::GridState;
use cinefind_tui::components::toast::{DEFAULT_TTL, Toasts};
use cinefind_tui::{QueryInput, Theme};
use ratatui::layout::Rect;
use throbber_widgets_tui::ThrobberState;

use super::modal::{ModalSession, ScrollLock};
use crate::search::{self, FetchRuntime, SearchCoordinator};

/// Prompt shown above the query input when none is configured.
pub const DEFAULT_PROMPT: &str = "Movie search";

/// Which widget receives key presses while no overlay is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
	#[default]
	Input,
	Grid,
}

impl Focus {
	#[must_use]
	pub fn toggled(self) -> Self {
		match self {
			Self::Input => Self::Grid,
			Self::Grid => Self::Input,
		}
	}
}

pub struct App<'a> {
	pub(crate) coordinator: SearchCoordinator,
	pub(crate) fetcher: FetchRuntime,
	pub(crate) input: QueryInput<'a>,
	pub(crate) grid: GridState,
	pub(crate) focus: Focus,
	pub(crate) overlay: Option<ModalSession>,
	pub(crate) scroll_lock: ScrollLock,
	pub(crate) toasts: Toasts,
	pub theme: Theme,
	pub(crate) prompt: String,
	pub(crate) throbber_state: ThrobberState,
	/// Size of the last drawn frame, for mouse hit-testing.
	pub(crate) screen: Rect,
}

impl<'a> App<'a> {
	/// Build the app and start its fetch worker.
	pub fn new(source: Arc<dyn MovieSource>) -> Result<Self> {
		let fetcher = search::spawn(source).context("failed to start the fetch worker")?;
		let theme = Theme::default();
		Ok(Self {
			coordinator: SearchCoordinator::new(),
			fetcher,
			input: QueryInput::new(theme),
			grid: GridState::default(),
			focus: Focus::default(),
			overlay: None,
			scroll_lock: ScrollLock::default(),
			toasts: Toasts::new(DEFAULT_TTL),
			theme,
			prompt: DEFAULT_PROMPT.to_string(),
			throbber_state: ThrobberState::default(),
			screen: Rect::default(),
		})
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
		self.input.set_theme(theme);
	}

	pub fn set_prompt(&mut self, prompt: impl Into<String>) {
		self.prompt = prompt.into();
	}

	pub fn set_toast_ttl(&mut self, ttl: Duration) {
		self.toasts = Toasts::new(ttl);
	}

	#[must_use]
	pub fn coordinator(&self) -> &SearchCoordinator {
		&self.coordinator
	}

	#[must_use]
	pub fn focus(&self) -> Focus {
		self.focus
	}

	#[must_use]
	pub fn overlay_open(&self) -> bool {
		self.overlay.is_some()
	}

	/// The query the user last submitted, as reported on exit.
	pub(crate) fn submitted_query(&self) -> Option<String> {
		self.coordinator.query().map(ToString::to_string)
	}
}

impl Drop for App<'_> {
	fn drop(&mut self) {
		// Release the scroll lock before the worker goes away.
		self.overlay = None;
		self.fetcher.shutdown();
	}
}
