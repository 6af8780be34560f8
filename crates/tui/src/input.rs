//! Single-line query input built on `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// Editable search text. Always exactly one line.
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> QueryInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea.lines().first().map_or("", String::as_str)
	}

	pub fn set_placeholder(&mut self, text: impl Into<String>, style: Style) {
		self.textarea.set_placeholder_text(text.into());
		self.textarea.set_placeholder_style(style);
	}

	/// Feed a key to the editor. Returns whether the text changed.
	///
	/// Keys that would split the line are swallowed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if is_line_break(key) {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

fn is_line_break(key: KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_appends_after_initial_text() {
		let mut input = QueryInput::new("hel");
		assert!(input.input(key(KeyCode::Char('l'))));
		assert!(input.input(key(KeyCode::Char('o'))));
		assert_eq!(input.text(), "hello");

		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "hell");
	}

	#[test]
	fn line_breaks_are_rejected() {
		let mut input = QueryInput::new("one");
		assert!(!input.input(key(KeyCode::Enter)));
		assert!(!input.input(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::CONTROL)));
		assert_eq!(input.text(), "one");
	}

	#[test]
	fn cursor_movement_is_not_a_change() {
		let mut input = QueryInput::new("abc");
		assert!(!input.input(key(KeyCode::Left)));
		assert_eq!(input.text(), "abc");
	}
}
