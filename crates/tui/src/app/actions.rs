use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;
use wordscope_core::{AdminAction, Dispatch, Modal};

use super::App;
use super::state::Awaiting;
use crate::outcome::SessionSummary;

impl<'a> App<'a> {
	/// Process a keyboard event and return the session summary if the user
	/// exits.
	pub fn handle_key(&mut self, key: KeyEvent) -> Option<SessionSummary> {
		if is_ctrl(key, 'c') {
			return Some(self.summary());
		}

		let modal = &self.client.state().modal;
		let confirming = matches!(modal, Some(Modal::Confirm(_)));
		let showing_outcome = matches!(modal, Some(Modal::Outcome(_)));

		if confirming {
			self.handle_confirm_key(key);
		} else if showing_outcome {
			self.handle_outcome_key(key);
		} else {
			return self.handle_query_key(key);
		}
		None
	}

	fn handle_confirm_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Char('y' | 'Y') | KeyCode::Enter => self.confirm(),
			KeyCode::Char('n' | 'N') | KeyCode::Esc => {
				self.client.cancel();
			}
			_ => {}
		}
	}

	fn handle_outcome_key(&mut self, key: KeyEvent) {
		if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
			self.client.dismiss();
		}
	}

	fn handle_query_key(&mut self, key: KeyEvent) -> Option<SessionSummary> {
		match key.code {
			KeyCode::Esc => return Some(self.summary()),
			KeyCode::Enter => self.submit(),
			KeyCode::Tab => {
				self.client.cycle_mode();
			}
			KeyCode::BackTab => {
				self.client.cycle_mode_back();
			}
			KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.request_action(AdminAction::Rebuild);
			}
			KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.request_action(AdminAction::DeleteEntry);
			}
			KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.request_action(AdminAction::DeleteAll);
			}
			KeyCode::Up => self.results.move_up(1),
			KeyCode::Down => self.move_down(1),
			KeyCode::PageUp => {
				let page = self.results.page();
				self.results.move_up(page);
			}
			KeyCode::PageDown => self.move_down(self.results.page()),
			_ => {
				if self.search_input.input(key) {
					self.client.set_term(self.search_input.text());
				}
			}
		}
		None
	}

	pub(crate) fn submit(&mut self) {
		if let Dispatch::Sent(_) = self.client.submit() {
			self.awaiting = Some(Awaiting::Search);
			self.searches += 1;
		}
	}

	fn request_action(&mut self, action: AdminAction) {
		if let Err(reason) = self.client.request_action(action) {
			debug!(?action, ?reason, "admin action not staged");
		}
	}

	fn confirm(&mut self) {
		let action = self
			.client
			.state()
			.modal
			.as_ref()
			.and_then(Modal::as_confirmation)
			.map(|pending| pending.action());
		if let (Dispatch::Sent(_), Some(action)) = (self.client.confirm(), action) {
			self.awaiting = Some(Awaiting::Admin(action));
		}
	}

	fn move_down(&mut self, by: usize) {
		let len = self.client.state().results.len();
		self.results.move_down(by, len);
	}
}

fn is_ctrl(key: KeyEvent, ch: char) -> bool {
	key.code == KeyCode::Char(ch) && key.modifiers.contains(KeyModifiers::CONTROL)
}
