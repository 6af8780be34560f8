//! Visual styling utilities.
//!
//! Themes are the colour schemes applied to the terminal UI.

pub mod theme;

pub use theme::{
	DEFAULT_THEME_NAME, Theme, ThemeDefinition, builtin_themes, by_name, default_theme, names,
};
