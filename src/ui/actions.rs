use anyhow::Result;
use cinefind_tui::components::overlay_area;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use super::App;
use super::modal::ModalAction;
use super::state::Focus;
use crate::outcome::SearchOutcome;

impl<'a> App<'a> {
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<SearchOutcome>> {
		if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
			return Ok(Some(self.cancelled()));
		}

		if let Some(session) = &self.overlay {
			match session.route(key) {
				ModalAction::Close => self.close_overlay(),
				ModalAction::Accept => {
					if let Some(movie) = self.coordinator.selection().cloned() {
						tracing::info!(movie = movie.id, title = %movie.title, "movie accepted");
						self.overlay = None;
						return Ok(Some(SearchOutcome::accepted(self.submitted_query(), movie)));
					}
					self.close_overlay();
				}
				ModalAction::Ignore => {}
			}
			return Ok(None);
		}

		if key.code == KeyCode::Tab {
			self.focus = self.focus.toggled();
			return Ok(None);
		}

		match self.focus {
			Focus::Input => self.handle_input_key(key),
			Focus::Grid => {
				self.handle_grid_key(key);
				Ok(None)
			}
		}
	}

	/// Wheel scrolls the grid, a click on a card opens it, and a click on the
	/// backdrop around the overlay closes it.
	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		let clicked = mouse.kind == MouseEventKind::Down(MouseButton::Left);
		if self.overlay.is_some() {
			let inside = overlay_area(self.screen).contains(Position::new(mouse.column, mouse.row));
			if clicked && !inside {
				self.close_overlay();
			}
			return;
		}
		if self.scroll_lock.is_locked() {
			return;
		}

		let len = self.coordinator.movies().len();
		match mouse.kind {
			MouseEventKind::ScrollDown => self.grid.move_down(len),
			MouseEventKind::ScrollUp => self.grid.move_up(len),
			_ if clicked => {
				if let Some(index) = self.grid.index_at(mouse.column, mouse.row, len) {
					self.grid.select(Some(index));
					self.focus = Focus::Grid;
					self.open_selected();
				}
			}
			_ => {}
		}
	}

	fn handle_input_key(&mut self, key: KeyEvent) -> Result<Option<SearchOutcome>> {
		match key.code {
			KeyCode::Esc => return Ok(Some(self.cancelled())),
			KeyCode::Enter => self.submit_input(),
			_ => {
				self.input.input(key);
			}
		}
		Ok(None)
	}

	fn handle_grid_key(&mut self, key: KeyEvent) {
		let len = self.coordinator.movies().len();
		let scrollable = !self.scroll_lock.is_locked();
		match key.code {
			KeyCode::Left if scrollable => self.grid.move_left(len),
			KeyCode::Right if scrollable => self.grid.move_right(len),
			KeyCode::Up if scrollable => self.grid.move_up(len),
			KeyCode::Down if scrollable => self.grid.move_down(len),
			KeyCode::Enter => self.open_selected(),
			KeyCode::Char(']') | KeyCode::PageDown => self.next_page(),
			KeyCode::Char('[') | KeyCode::PageUp => self.previous_page(),
			KeyCode::Esc => self.focus = Focus::Input,
			_ => {}
		}
	}

	fn cancelled(&self) -> SearchOutcome {
		SearchOutcome::cancelled(self.submitted_query())
	}
}
