//! Short-lived notifications stacked in the top-right corner.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

pub const DEFAULT_TTL: Duration = Duration::from_secs(4);
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
	pub message: String,
	pub expires_at: Instant,
}

/// Queue of advisory messages. Oldest toasts are dropped first.
#[derive(Debug, Clone)]
pub struct Toasts {
	entries: VecDeque<Toast>,
	ttl: Duration,
}

impl Default for Toasts {
	fn default() -> Self {
		Self::new(DEFAULT_TTL)
	}
}

impl Toasts {
	#[must_use]
	pub fn new(ttl: Duration) -> Self {
		Self {
			entries: VecDeque::new(),
			ttl,
		}
	}

	pub fn push(&mut self, message: impl Into<String>, now: Instant) {
		self.entries.push_back(Toast {
			message: message.into(),
			expires_at: now + self.ttl,
		});
		while self.entries.len() > MAX_VISIBLE {
			self.entries.pop_front();
		}
	}

	/// Drop every toast whose time has passed.
	pub fn prune(&mut self, now: Instant) {
		self.entries.retain(|toast| toast.expires_at > now);
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Toast> {
		self.entries.iter()
	}
}

/// Renders [`Toasts`] newest-last, one line each, aligned to the right edge.
pub struct ToastStack<'a> {
	toasts: &'a Toasts,
	theme: &'a Theme,
}

impl<'a> ToastStack<'a> {
	#[must_use]
	pub fn new(toasts: &'a Toasts, theme: &'a Theme) -> Self {
		Self { toasts, theme }
	}
}

impl Widget for ToastStack<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		for (row, toast) in self.toasts.iter().enumerate() {
			let y = area.y + row as u16;
			if y >= area.bottom() {
				break;
			}
			let text = format!(" ⚠ {} ", toast.message);
			let width = (text.width() as u16).min(area.width);
			let rect = Rect {
				x: area.right().saturating_sub(width),
				y,
				width,
				height: 1,
			};
			Clear.render(rect, buf);
			Paragraph::new(Line::from(text))
				.style(self.theme.toast_style())
				.render(rect, buf);
		}
	}
}
