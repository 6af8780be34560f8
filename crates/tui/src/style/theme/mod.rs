mod builtins;
mod types;

pub use builtins::{LIGHT, SLATE, SOLARIZED, default_theme};
pub use types::{Theme, ThemeDefinition};

/// Name of the theme returned by [`default_theme`].
pub const DEFAULT_THEME_NAME: &str = "slate";

/// Return the built-in themes bundled with the application.
#[must_use]
pub fn builtin_themes() -> &'static [ThemeDefinition] {
	&builtins::DEFINITIONS
}

/// Look up a built-in theme, ignoring case and surrounding whitespace.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = name.trim();
	builtin_themes()
		.iter()
		.find(|definition| definition.name.eq_ignore_ascii_case(wanted))
		.map(|definition| definition.theme)
}

/// Names of every built-in theme, in display order.
#[must_use]
pub fn names() -> Vec<&'static str> {
	builtin_themes()
		.iter()
		.map(|definition| definition.name)
		.collect()
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
