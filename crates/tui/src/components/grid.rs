//! Poster-less card grid for search results.

use cinefind_catalog::Movie;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, StatefulWidget, Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::style::Theme;

/// Width a card would like to occupy, borders included.
pub const CARD_WIDTH: u16 = 28;
/// Border, title, metadata, border.
pub const CARD_HEIGHT: u16 = 4;

/// Cursor and scroll position of a [`MovieGrid`].
///
/// `area`, `columns` and `visible_rows` are refreshed on every render so that
/// key and mouse navigation follow whatever layout was last drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
	selected: Option<usize>,
	offset_row: usize,
	area: Rect,
	columns: usize,
	visible_rows: usize,
}

impl Default for GridState {
	fn default() -> Self {
		Self {
			selected: None,
			offset_row: 0,
			area: Rect::default(),
			columns: 1,
			visible_rows: 1,
		}
	}
}

impl GridState {
	#[must_use]
	pub fn selected(&self) -> Option<usize> {
		self.selected
	}

	pub fn select(&mut self, index: Option<usize>) {
		self.selected = index;
	}

	#[must_use]
	pub fn columns(&self) -> usize {
		self.columns
	}

	#[must_use]
	pub fn offset_row(&self) -> usize {
		self.offset_row
	}

	/// Forget the cursor and scroll position, e.g. for a new result set.
	pub fn reset(&mut self) {
		self.selected = None;
		self.offset_row = 0;
	}

	/// Keep the cursor inside `len` items, selecting the first one when needed.
	pub fn clamp(&mut self, len: usize) {
		self.selected = match self.selected {
			_ if len == 0 => None,
			None => Some(0),
			Some(index) => Some(index.min(len - 1)),
		};
	}

	pub fn move_left(&mut self, len: usize) {
		if let Some(index) = self.cursor(len)
			&& index > 0
		{
			self.selected = Some(index - 1);
		}
	}

	pub fn move_right(&mut self, len: usize) {
		if let Some(index) = self.cursor(len)
			&& index + 1 < len
		{
			self.selected = Some(index + 1);
		}
	}

	pub fn move_up(&mut self, len: usize) {
		if let Some(index) = self.cursor(len)
			&& index >= self.columns
		{
			self.selected = Some(index - self.columns);
		}
	}

	pub fn move_down(&mut self, len: usize) {
		if let Some(index) = self.cursor(len) {
			let target = index + self.columns;
			if target < len {
				self.selected = Some(target);
			} else if index / self.columns < (len - 1) / self.columns {
				// Short last row: land on its final card.
				self.selected = Some(len - 1);
			}
		}
	}

	/// Card under the terminal cell `(x, y)` in the last drawn layout.
	#[must_use]
	pub fn index_at(&self, x: u16, y: u16, len: usize) -> Option<usize> {
		if !self.area.contains(Position::new(x, y)) {
			return None;
		}
		let card_width = (self.area.width / self.columns as u16).max(1);
		let column = usize::from((x - self.area.x) / card_width);
		let row = usize::from((y - self.area.y) / CARD_HEIGHT);
		if column >= self.columns || row >= self.visible_rows {
			return None;
		}
		let index = (self.offset_row + row) * self.columns + column;
		(index < len).then_some(index)
	}

	fn cursor(&mut self, len: usize) -> Option<usize> {
		self.clamp(len);
		self.selected
	}

	fn update_layout(&mut self, area: Rect, columns: usize, visible_rows: usize, len: usize) {
		self.area = area;
		self.columns = columns.max(1);
		self.visible_rows = visible_rows.max(1);
		self.clamp(len);

		let Some(selected) = self.selected else {
			self.offset_row = 0;
			return;
		};
		let row = selected / self.columns;
		if row < self.offset_row {
			self.offset_row = row;
		} else if row >= self.offset_row + self.visible_rows {
			self.offset_row = row + 1 - self.visible_rows;
		}
	}
}

/// Grid of movie cards.
pub struct MovieGrid<'a> {
	movies: &'a [Movie],
	theme: &'a Theme,
	focused: bool,
}

impl<'a> MovieGrid<'a> {
	#[must_use]
	pub fn new(movies: &'a [Movie], theme: &'a Theme) -> Self {
		Self {
			movies,
			theme,
			focused: true,
		}
	}

	/// Dim the cursor highlight when another widget owns the keyboard.
	#[must_use]
	pub fn focused(mut self, focused: bool) -> Self {
		self.focused = focused;
		self
	}
}

impl StatefulWidget for MovieGrid<'_> {
	type State = GridState;

	fn render(self, area: Rect, buf: &mut Buffer, state: &mut GridState) {
		if area.width == 0 || area.height == 0 {
			return;
		}

		let columns = usize::from((area.width / CARD_WIDTH).max(1));
		let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
		state.update_layout(area, columns, visible_rows, self.movies.len());

		let card_width = area.width / columns as u16;
		let first = state.offset_row * columns;
		let last = (first + columns * visible_rows).min(self.movies.len());

		for (slot, index) in (first..last).enumerate() {
			let column = (slot % columns) as u16;
			let row = (slot / columns) as u16;
			let card = Rect {
				x: area.x + column * card_width,
				y: area.y + row * CARD_HEIGHT,
				width: card_width,
				height: CARD_HEIGHT.min(area.bottom().saturating_sub(area.y + row * CARD_HEIGHT)),
			};
			let selected = state.selected == Some(index);
			render_card(&self.movies[index], card, buf, self.theme, selected && self.focused);
		}
	}
}

fn render_card(movie: &Movie, area: Rect, buf: &mut Buffer, theme: &Theme, selected: bool) {
	let (border_style, title_style, border_type) = if selected {
		(
			theme.card_selected_style(),
			theme.selected_title_style(),
			BorderType::Thick,
		)
	} else {
		(theme.card_style(), theme.card_style(), BorderType::Rounded)
	};

	let block = Block::bordered()
		.border_type(border_type)
		.border_style(border_style);
	let inner = block.inner(area);
	block.render(area, buf);

	let width = usize::from(inner.width);
	let meta = match movie.release_year() {
		Some(year) => format!("{year} · {}", movie.rating_label()),
		None => movie.rating_label(),
	};
	let lines = vec![
		Line::from(Span::styled(truncate_to_width(&movie.title, width), title_style)),
		Line::from(Span::styled(truncate_to_width(&meta, width), theme.muted_style())),
	];
	Paragraph::new(lines).render(inner, buf);
}

/// Cut `text` to at most `width` terminal columns, ending in `…` when shortened.
#[must_use]
pub fn truncate_to_width(text: &str, width: usize) -> String {
	if text.width() <= width {
		return text.to_string();
	}
	if width == 0 {
		return String::new();
	}

	let mut out = String::new();
	let mut used = 0;
	for c in text.chars() {
		let w = c.width().unwrap_or(0);
		if used + w > width - 1 {
			break;
		}
		out.push(c);
		used += w;
	}
	out.push('…');
	out
}
