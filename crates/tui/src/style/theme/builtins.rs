use ratatui::style::{Color, Modifier, Style};

use super::types::{Theme, ThemeDefinition};

pub const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(30, 41, 59)),
	prompt: Style::new().fg(Color::Rgb(125, 211, 252)),
	card: Style::new().fg(Color::Rgb(148, 163, 184)),
	card_selected: Style::new().fg(Color::Rgb(250, 204, 21)),
	muted: Style::new().fg(Color::Rgb(100, 116, 139)),
	accent: Style::new()
		.fg(Color::Rgb(56, 189, 248))
		.add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::Rgb(248, 113, 113)),
	toast: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(251, 191, 36)),
};

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	card: Style::new().fg(Color::Rgb(71, 85, 105)),
	card_selected: Style::new().fg(Color::Rgb(180, 83, 9)),
	muted: Style::new().fg(Color::Rgb(100, 100, 100)),
	accent: Style::new()
		.fg(Color::Rgb(29, 78, 216))
		.add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::Rgb(185, 28, 28)),
	toast: Style::new()
		.fg(Color::Rgb(255, 255, 255))
		.bg(Color::Rgb(185, 28, 28)),
};

pub const SOLARIZED: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(253, 246, 227))
		.bg(Color::Rgb(7, 54, 66)),
	prompt: Style::new().fg(Color::Rgb(38, 139, 210)),
	card: Style::new().fg(Color::Rgb(131, 148, 150)),
	card_selected: Style::new().fg(Color::Rgb(181, 137, 0)),
	muted: Style::new().fg(Color::Rgb(88, 110, 117)),
	accent: Style::new()
		.fg(Color::Rgb(42, 161, 152))
		.add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::Rgb(220, 50, 47)),
	toast: Style::new()
		.fg(Color::Rgb(253, 246, 227))
		.bg(Color::Rgb(203, 75, 22)),
};

pub(super) const BUILT_IN_DEFINITIONS: &[ThemeDefinition] = &[
	ThemeDefinition::new("slate", SLATE).with_aliases(&["dark", "default"]),
	ThemeDefinition::new("light", LIGHT),
	ThemeDefinition::new("solarized", SOLARIZED).with_aliases(&["solarized-dark"]),
];
