use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::style::Theme;

/// Pages shown around the current one.
pub const PAGE_RANGE: u32 = 5;
/// Pages always shown at each end.
pub const MARGIN_PAGES: u32 = 1;

/// One entry of the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
	Page(u32),
	Gap,
}

/// Compute which page numbers to display for `current` out of `total`.
///
/// A window of `range` pages follows the current page, `margin` pages are
/// pinned at both ends, and every run of hidden pages collapses into a single
/// [`PageSlot::Gap`].
#[must_use]
pub fn page_window(current: u32, total: u32, range: u32, margin: u32) -> Vec<PageSlot> {
	if total == 0 {
		return Vec::new();
	}
	if total <= range + 2 * margin {
		return (1..=total).map(PageSlot::Page).collect();
	}

	let current = current.clamp(1, total);
	let mut start = current.saturating_sub(range / 2).max(1);
	let mut end = start + range.saturating_sub(1);
	if end > total {
		end = total;
		start = total + 1 - range.max(1);
	}

	let visible = |page: u32| page <= margin || page > total - margin || (start..=end).contains(&page);

	let mut slots = Vec::new();
	for page in 1..=total {
		if visible(page) {
			slots.push(PageSlot::Page(page));
		} else if slots.last() != Some(&PageSlot::Gap) {
			slots.push(PageSlot::Gap);
		}
	}
	slots
}

/// `← 1 … 4 5 [6] 7 8 … 20 →`
pub struct Pagination<'a> {
	current: u32,
	total: u32,
	theme: &'a Theme,
}

impl<'a> Pagination<'a> {
	#[must_use]
	pub fn new(current: u32, total: u32, theme: &'a Theme) -> Self {
		Self {
			current,
			total,
			theme,
		}
	}

	/// Paginators are hidden for single-page results.
	#[must_use]
	pub fn is_visible(&self) -> bool {
		self.total > 1
	}

	fn line(&self) -> Line<'static> {
		let muted = self.theme.muted_style();
		let arrow = |enabled: bool| if enabled { self.theme.card_style() } else { muted };

		let mut spans = vec![Span::styled("← ", arrow(self.current > 1))];
		for slot in page_window(self.current, self.total, PAGE_RANGE, MARGIN_PAGES) {
			let span = match slot {
				PageSlot::Page(page) if page == self.current => {
					Span::styled(format!("[{page}]"), self.theme.accent_style())
				}
				PageSlot::Page(page) => Span::styled(page.to_string(), self.theme.card_style()),
				PageSlot::Gap => Span::styled("…", muted),
			};
			spans.push(span);
			spans.push(Span::raw(" "));
		}
		spans.push(Span::styled("→", arrow(self.current < self.total)));
		Line::from(spans)
	}
}

impl Widget for Pagination<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		if !self.is_visible() {
			return;
		}
		Paragraph::new(self.line())
			.alignment(Alignment::Center)
			.render(area, buf);
	}
}

#[cfg(test)]
mod tests {
	use super::PageSlot::{Gap, Page};
	use super::*;

	#[test]
	fn small_totals_list_every_page() {
		assert_eq!(page_window(1, 0, 5, 1), vec![]);
		assert_eq!(page_window(2, 3, 5, 1), vec![Page(1), Page(2), Page(3)]);
		assert_eq!(page_window(7, 7, 5, 1).len(), 7);
	}

	#[test]
	fn middle_page_has_gaps_on_both_sides() {
		assert_eq!(
			page_window(6, 20, 5, 1),
			vec![
				Page(1),
				Gap,
				Page(4),
				Page(5),
				Page(6),
				Page(7),
				Page(8),
				Gap,
				Page(20)
			]
		);
	}

	#[test]
	fn window_sticks_to_the_edges() {
		assert_eq!(
			page_window(1, 20, 5, 1),
			vec![Page(1), Page(2), Page(3), Page(4), Page(5), Gap, Page(20)]
		);
		assert_eq!(
			page_window(20, 20, 5, 1),
			vec![Page(1), Gap, Page(16), Page(17), Page(18), Page(19), Page(20)]
		);
	}

	#[test]
	fn adjacent_margin_does_not_produce_a_gap() {
		assert_eq!(
			page_window(3, 9, 5, 1),
			vec![
				Page(1),
				Page(2),
				Page(3),
				Page(4),
				Page(5),
				Gap,
				Page(9)
			]
		);
	}

	#[test]
	fn line_marks_current_page() {
		let theme = Theme::default();
		let pagination = Pagination::new(2, 3, &theme);
		assert!(pagination.is_visible());
		let text: String = pagination
			.line()
			.spans
			.iter()
			.map(|span| span.content.as_ref())
			.collect();
		assert_eq!(text, "← 1 [2] 3 →");
		assert!(!Pagination::new(1, 1, &theme).is_visible());
	}
}
