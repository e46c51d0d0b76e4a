//! Single-line query input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

use crate::style::Theme;

const PLACEHOLDER: &str = "Search movies...";

/// Editable search box. Newlines are never inserted; `Enter` belongs to the
/// caller.
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
	theme: Theme,
}

impl<'a> QueryInput<'a> {
	#[must_use]
	pub fn new(theme: Theme) -> Self {
		Self {
			textarea: styled_textarea(&theme),
			theme,
		}
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
		let text = self.text();
		self.textarea = styled_textarea(&theme);
		self.textarea.insert_str(text);
	}

	/// Feed a key press into the editor. Returns whether the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if is_line_break(&key) {
			return false;
		}
		self.textarea.input(key)
	}

	/// Current text with no trimming applied.
	#[must_use]
	pub fn text(&self) -> String {
		self.textarea.lines().join(" ")
	}

	pub fn set_text(&mut self, text: &str) {
		self.clear();
		self.textarea.insert_str(text.replace(['\r', '\n'], " "));
	}

	pub fn clear(&mut self) {
		self.textarea = styled_textarea(&self.theme);
	}

	/// Render the editor, showing the cursor only while focused.
	pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
		let cursor = if focused {
			Style::default().add_modifier(Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(cursor);
		frame.render_widget(&self.textarea, area);
	}
}

fn styled_textarea<'a>(theme: &Theme) -> TextArea<'a> {
	let mut textarea = TextArea::default();
	textarea.set_placeholder_text(PLACEHOLDER);
	textarea.set_placeholder_style(theme.muted_style());
	textarea.set_cursor_line_style(Style::default());
	textarea
}

fn is_line_break(key: &KeyEvent) -> bool {
	matches!(key.code, KeyCode::Enter)
		|| (key.modifiers.contains(KeyModifiers::CONTROL)
			&& matches!(key.code, KeyCode::Char('m') | KeyCode::Char('j')))
}
