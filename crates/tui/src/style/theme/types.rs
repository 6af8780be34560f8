use ratatui::style::{Color, Style};

/// A theme containing styles for various UI elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Style for header elements.
	pub header: Style,
	/// Style for highlighted rows.
	pub row_highlight: Style,
	/// Style for prompt elements.
	pub prompt: Style,
	/// Style for empty states and secondary text.
	pub empty: Style,
	/// Style for highlighted elements.
	pub highlight: Style,
	/// Style for error banners and failed outcomes.
	pub error: Style,
	/// Style for successful outcomes.
	pub success: Style,
}

impl Theme {
	/// Returns the style for inactive tabs.
	#[must_use]
	pub fn tab_inactive_style(&self) -> Style {
		Style::new()
			.fg(self.header.fg.unwrap_or(Color::Reset))
			.bg(self.row_highlight.bg.unwrap_or(Color::Reset))
	}

	/// Returns the style for the selected tab.
	#[must_use]
	pub fn tab_highlight_style(&self) -> Style {
		Style::new()
			.fg(self.header.fg.unwrap_or(Color::Reset))
			.bg(self.header.bg.unwrap_or(Color::Reset))
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}
}

/// A built-in theme and the name it is selected by.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
}

impl ThemeDefinition {
	#[must_use]
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self { name, theme }
	}
}
