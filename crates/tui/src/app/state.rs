//! Core state container for the terminal front-end.
//!
//! [`App`] bundles the search session with the UI-only state the renderer
//! needs: the text input, the theme, the spinner and the list selection.

use std::time::Duration;

use throbber_widgets_tui::ThrobberState;
use wordscope_core::{AdminAction, Modal, SearchClient, SearchMode};

use super::results::ResultsState;
use crate::input::QueryInput;
use crate::outcome::{ActionRecord, SessionSummary};
use crate::style::Theme;

const PLACEHOLDER: &str = "Type a word and press Enter";

/// The call the UI is waiting on, so its completion can be bookkept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Awaiting {
	Search,
	Admin(AdminAction),
}

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
	pub(crate) client: SearchClient,
	/// Text input widget for the search term.
	pub search_input: QueryInput<'a>,
	pub(crate) theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) results: ResultsState,
	pub(crate) awaiting: Option<Awaiting>,
	pub(crate) searches: usize,
	pub(crate) actions: Vec<ActionRecord>,
}

impl<'a> App<'a> {
	/// Wrap a search session with a fresh UI.
	pub fn new(client: SearchClient) -> Self {
		let theme = Theme::default();
		let mut search_input = QueryInput::new(client.state().query.term.clone());
		search_input.set_placeholder(PLACEHOLDER, theme.empty_style());

		Self {
			client,
			search_input,
			theme,
			throbber_state: ThrobberState::default(),
			results: ResultsState::default(),
			awaiting: None,
			searches: 0,
			actions: Vec::new(),
		}
	}

	/// Prefill the input and mode. Nothing is sent until the session starts.
	#[must_use]
	pub fn with_query(mut self, term: impl Into<String>, mode: SearchMode) -> Self {
		let term = term.into();
		self.search_input = QueryInput::new(term.clone());
		self.search_input
			.set_placeholder(PLACEHOLDER, self.theme.empty_style());
		self.client.set_term(term);
		self.client.set_mode(mode);
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.set_theme(theme);
		self
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
		self.search_input
			.set_placeholder(PLACEHOLDER, theme.empty_style());
	}

	#[must_use]
	pub fn client(&self) -> &SearchClient {
		&self.client
	}

	/// Apply finished calls to the session and the UI state around it.
	pub fn pump(&mut self) -> usize {
		let applied = self.client.pump();
		if applied > 0 {
			self.after_completions();
		}
		applied
	}

	/// Block until the session is idle or `timeout` passes.
	pub fn wait_idle(&mut self, timeout: Duration) -> bool {
		let idle = self.client.wait_idle(timeout);
		self.after_completions();
		idle
	}

	fn after_completions(&mut self) {
		if self.client.is_busy() {
			return;
		}
		match self.awaiting.take() {
			Some(Awaiting::Search) => self.results.reset(self.client.state().results.len()),
			Some(Awaiting::Admin(action)) => {
				if let Some(Modal::Outcome(outcome)) = &self.client.state().modal {
					self.actions.push(ActionRecord::new(action, outcome.clone()));
				}
			}
			None => {}
		}
	}

	/// Submit the search the session starts with, if there is one.
	pub(crate) fn submit_initial_query(&mut self) {
		if !self.client.state().query.is_blank() {
			self.submit();
		}
	}

	/// Snapshot of the session for the caller once the UI exits.
	#[must_use]
	pub fn summary(&self) -> SessionSummary {
		let state = self.client.state();
		SessionSummary {
			query: state.query.term.clone(),
			mode: state.query.mode,
			results: state.results.clone(),
			searches: self.searches,
			actions: self.actions.clone(),
		}
	}
}
