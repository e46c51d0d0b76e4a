mod builtins;
mod types;

pub use builtins::{LIGHT, SLATE, SOLARIZED};
pub use types::{Theme, ThemeDefinition};

use builtins::BUILT_IN_DEFINITIONS;

/// Return the built-in themes bundled with the application.
#[must_use]
pub fn builtin_themes() -> &'static [ThemeDefinition] {
	BUILT_IN_DEFINITIONS
}

/// Theme used when nothing else is configured.
#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

/// Look up a theme by name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let name = name.trim();
	BUILT_IN_DEFINITIONS
		.iter()
		.find(|definition| definition.answers_to(name))
		.map(|definition| definition.theme)
}

/// Canonical names of every built-in theme.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILT_IN_DEFINITIONS
		.iter()
		.map(|definition| definition.name)
		.collect()
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_accepts_names_and_aliases_case_insensitively() {
		assert_eq!(by_name("light"), Some(LIGHT));
		assert_eq!(by_name("Solarized-Dark"), Some(SOLARIZED));
		assert_eq!(by_name(" default "), Some(SLATE));
		assert_eq!(by_name("neon"), None);
	}

	#[test]
	fn names_list_canonical_entries_only() {
		assert_eq!(names(), vec!["slate", "light", "solarized"]);
	}
}
