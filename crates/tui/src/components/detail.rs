use cinefind_catalog::Movie;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph, Widget, Wrap};

use crate::style::Theme;

const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 12;
/// Share of the screen the popup covers in each direction.
pub const OVERLAY_PERCENT: u16 = 70;

/// Modal card describing one movie.
pub struct DetailOverlay<'a> {
	movie: &'a Movie,
	theme: &'a Theme,
}

impl<'a> DetailOverlay<'a> {
	#[must_use]
	pub fn new(movie: &'a Movie, theme: &'a Theme) -> Self {
		Self { movie, theme }
	}
}

impl Widget for DetailOverlay<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		let popup = overlay_area(area);
		if popup.width < 4 || popup.height < 4 {
			return;
		}

		Clear.render(popup, buf);
		let block = Block::bordered()
			.border_type(BorderType::Double)
			.border_style(self.theme.accent_style())
			.title(Line::from(Span::styled(
				format!(" {} ", self.movie.title),
				self.theme.accent_style(),
			)))
			.title_bottom(Line::from(Span::styled(
				" Esc close · Enter choose ",
				self.theme.muted_style(),
			)));
		let inner = block.inner(popup);
		block.render(popup, buf);

		let [facts, overview, links] = Layout::vertical([
			Constraint::Length(3),
			Constraint::Min(1),
			Constraint::Length(2),
		])
		.areas(inner);

		let label = self.theme.header_style();
		Paragraph::new(vec![
			Line::from(vec![
				Span::styled("Release Date: ", label),
				Span::raw(self.movie.release_label().to_string()),
			]),
			Line::from(vec![
				Span::styled("Rating: ", label),
				Span::raw(self.movie.rating_label()),
			]),
		])
		.render(facts, buf);

		let synopsis = if self.movie.overview.trim().is_empty() {
			Span::styled("No overview available.", self.theme.muted_style())
		} else {
			Span::raw(self.movie.overview.clone())
		};
		Paragraph::new(Line::from(synopsis))
			.wrap(Wrap { trim: true })
			.render(overview, buf);

		Paragraph::new(vec![
			Line::from(Span::styled(
				format!("Backdrop: {}", self.movie.backdrop_url()),
				self.theme.muted_style(),
			)),
			Line::from(Span::styled(
				format!("Poster: {}", self.movie.poster_url()),
				self.theme.muted_style(),
			)),
		])
		.render(links, buf);
	}
}

/// Rectangle covering the given percentages of `area`, centred, but never
/// smaller than the overlay minimum unless `area` itself is smaller.
#[must_use]
pub fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
	let width = percent_of(area.width, percent_x)
		.max(MIN_WIDTH)
		.min(area.width);
	let height = percent_of(area.height, percent_y)
		.max(MIN_HEIGHT)
		.min(area.height);
	Rect {
		x: area.x + (area.width - width) / 2,
		y: area.y + (area.height - height) / 2,
		width,
		height,
	}
}

/// Where [`DetailOverlay`] draws its popup when rendered into `area`.
#[must_use]
pub fn overlay_area(area: Rect) -> Rect {
	centered_rect(area, OVERLAY_PERCENT, OVERLAY_PERCENT)
}

fn percent_of(length: u16, percent: u16) -> u16 {
	let scaled = u32::from(length) * u32::from(percent) / 100;
	u16::try_from(scaled).unwrap_or(u16::MAX)
}
