use ratatui::style::{Color, Modifier, Style};

/// Colour scheme applied to every cinefind widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub header: Style,
	pub prompt: Style,
	pub card: Style,
	pub card_selected: Style,
	pub muted: Style,
	pub accent: Style,
	pub error: Style,
	pub toast: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn card_style(&self) -> Style {
		self.card
	}

	#[must_use]
	pub fn card_selected_style(&self) -> Style {
		self.card_selected
	}

	#[must_use]
	pub fn muted_style(&self) -> Style {
		self.muted
	}

	#[must_use]
	pub fn accent_style(&self) -> Style {
		self.accent
	}

	#[must_use]
	pub fn error_style(&self) -> Style {
		self.error
	}

	#[must_use]
	pub fn toast_style(&self) -> Style {
		self.toast
	}

	/// Title style for the card under the cursor.
	#[must_use]
	pub fn selected_title_style(&self) -> Style {
		self.card_selected.add_modifier(Modifier::BOLD)
	}

	#[must_use]
	pub fn accent_fg(&self) -> Color {
		self.accent.fg.unwrap_or(Color::Reset)
	}
}

/// A named theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			theme,
			aliases: &[],
		}
	}

	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}

	/// Whether `name` refers to this theme, ignoring ASCII case.
	#[must_use]
	pub fn answers_to(&self, name: &str) -> bool {
		self.name.eq_ignore_ascii_case(name)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(name))
	}
}
