use cinefind_tui::components::{
	BannerKind, DetailOverlay, MovieGrid, Pagination, StatusBanner, ToastStack,
};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType};

use super::App;
use super::state::Focus;
use crate::search::SearchStatus;

const INPUT_HEIGHT: u16 = 3;
const HINT: &str = " Tab switch focus · [ ] pages · Esc back ";

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		self.screen = frame.area();
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let [input_area, results_area, pagination_area] = Layout::vertical([
			Constraint::Length(INPUT_HEIGHT),
			Constraint::Min(1),
			Constraint::Length(1),
		])
		.areas(area);

		self.render_input(frame, input_area);
		self.render_results(frame, results_area);

		let pagination = Pagination::new(
			self.coordinator.page().get(),
			self.coordinator.total_pages(),
			&self.theme,
		);
		if pagination.is_visible() {
			frame.render_widget(pagination, pagination_area);
		}

		if !self.toasts.is_empty() {
			frame.render_widget(ToastStack::new(&self.toasts, &self.theme), area);
		}

		if self.overlay.is_some()
			&& let Some(movie) = self.coordinator.selection()
		{
			frame.render_widget(DetailOverlay::new(movie, &self.theme), frame.area());
		}
	}

	fn render_input(&mut self, frame: &mut Frame, area: Rect) {
		let focused = self.focus == Focus::Input && self.overlay.is_none();
		let border_style = if focused {
			self.theme.prompt_style()
		} else {
			self.theme.muted_style()
		};
		let block = Block::bordered()
			.border_type(BorderType::Rounded)
			.border_style(border_style)
			.title(Line::from(Span::styled(
				format!(" {} ", self.prompt),
				self.theme.header_style(),
			)))
			.title_bottom(Line::from(Span::styled(HINT, self.theme.muted_style())).right_aligned());
		let inner = block.inner(area);
		frame.render_widget(block, area);
		self.input.render(frame, inner, focused);
	}

	fn render_results(&mut self, frame: &mut Frame, area: Rect) {
		let banner = match self.coordinator.status() {
			SearchStatus::Idle => Some(BannerKind::Idle),
			SearchStatus::Loading => Some(BannerKind::Loading),
			SearchStatus::Failed => Some(BannerKind::Failed),
			SearchStatus::Empty => Some(BannerKind::Empty),
			SearchStatus::Loaded => None,
		};
		let movies = self.coordinator.movies();

		let grid_area = match banner {
			// Retained results stay visible under the spinner.
			Some(BannerKind::Loading) if !movies.is_empty() => {
				let [banner_area, rest] =
					Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(area);
				frame.render_widget(
					StatusBanner::new(BannerKind::Loading, &self.theme, &self.throbber_state),
					banner_area,
				);
				rest
			}
			Some(kind) => {
				let [_, banner_area, _] = Layout::vertical([
					Constraint::Fill(1),
					Constraint::Length(1),
					Constraint::Fill(1),
				])
				.areas(area);
				frame.render_widget(
					StatusBanner::new(kind, &self.theme, &self.throbber_state),
					banner_area,
				);
				return;
			}
			None => area,
		};

		let grid = MovieGrid::new(movies, &self.theme)
			.focused(self.focus == Focus::Grid || self.overlay.is_some());
		frame.render_stateful_widget(grid, grid_area, &mut self.grid);
	}
}
