use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::style::Theme;

pub const IDLE_HINT: &str = "Type a movie title and press Enter";
pub const LOADING_LABEL: &str = "Loading movies";
pub const ERROR_MESSAGE: &str = "There was an error, please try again...";
pub const EMPTY_MESSAGE: &str = "No results";

/// Which message the results area shows instead of (or above) the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
	Idle,
	Loading,
	Failed,
	Empty,
}

/// One-line status message, with a spinner while loading.
pub struct StatusBanner<'a> {
	kind: BannerKind,
	theme: &'a Theme,
	throbber: &'a ThrobberState,
}

impl<'a> StatusBanner<'a> {
	#[must_use]
	pub fn new(kind: BannerKind, theme: &'a Theme, throbber: &'a ThrobberState) -> Self {
		Self {
			kind,
			theme,
			throbber,
		}
	}

	fn line(&self) -> Line<'static> {
		match self.kind {
			BannerKind::Idle => Line::from(Span::styled(IDLE_HINT, self.theme.muted_style())),
			BannerKind::Loading => {
				let style = self.theme.accent_style();
				let spinner = Throbber::default()
					.style(style)
					.throbber_style(style)
					.to_symbol_span(self.throbber);
				Line::from(vec![spinner, Span::styled(LOADING_LABEL, style)])
			}
			BannerKind::Failed => Line::from(Span::styled(ERROR_MESSAGE, self.theme.error_style())),
			BannerKind::Empty => Line::from(Span::styled(EMPTY_MESSAGE, self.theme.muted_style())),
		}
	}
}

impl Widget for StatusBanner<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		if area.width == 0 || area.height == 0 {
			return;
		}
		Paragraph::new(self.line())
			.alignment(Alignment::Center)
			.render(area, buf);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn text_of(kind: BannerKind) -> String {
		let theme = Theme::default();
		let state = ThrobberState::default();
		StatusBanner::new(kind, &theme, &state)
			.line()
			.spans
			.iter()
			.map(|span| span.content.as_ref())
			.collect()
	}

	#[test]
	fn each_kind_has_its_own_message() {
		assert_eq!(text_of(BannerKind::Idle), IDLE_HINT);
		assert_eq!(text_of(BannerKind::Failed), ERROR_MESSAGE);
		assert_eq!(text_of(BannerKind::Empty), EMPTY_MESSAGE);
		assert!(text_of(BannerKind::Loading).ends_with(LOADING_LABEL));
	}
}
