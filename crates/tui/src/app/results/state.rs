//! Selection and viewport state for the results list.

use ratatui::widgets::ListState;

/// Aggregate state for the results list and its navigation.
#[derive(Default)]
pub(crate) struct ResultsState {
	/// Selection state for the results list.
	pub list_state: ListState,
	/// Rows visible inside the list border on the last frame.
	pub viewport_rows: usize,
}

impl ResultsState {
	/// Point the selection at the first row of a freshly replaced list.
	pub fn reset(&mut self, len: usize) {
		*self.list_state.offset_mut() = 0;
		self.list_state.select((len > 0).then_some(0));
	}

	/// Ensure the row selection remains valid for a list of `len` rows.
	pub fn ensure_selection(&mut self, len: usize) {
		match self.list_state.selected() {
			_ if len == 0 => self.list_state.select(None),
			Some(selected) if selected >= len => self.list_state.select(Some(len - 1)),
			None => self.list_state.select(Some(0)),
			Some(_) => {}
		}
	}

	pub fn move_up(&mut self, by: usize) {
		if let Some(selected) = self.list_state.selected() {
			self.list_state.select(Some(selected.saturating_sub(by)));
		}
	}

	pub fn move_down(&mut self, by: usize, len: usize) {
		if len == 0 {
			return;
		}
		let next = self
			.list_state
			.selected()
			.map_or(0, |selected| selected.saturating_add(by));
		self.list_state.select(Some(next.min(len - 1)));
	}

	/// Rows moved by a page jump.
	pub fn page(&self) -> usize {
		self.viewport_rows.max(1)
	}
}
