use crate::model::{ClientState, Modal, SearchQuery, SearchResult};

/// Borrowed view model for the rendering layer.
///
/// Derived on demand from a [`ClientState`]; nothing here is cached between
/// state changes.
#[derive(Debug, Clone, Copy)]
pub struct PresentationState<'a> {
	pub query: &'a SearchQuery,
	pub results: &'a [SearchResult],
	pub is_busy: bool,
	pub error_message: Option<&'a str>,
	pub modal: Option<&'a Modal>,
}

impl<'a> PresentationState<'a> {
	#[must_use]
	pub fn derive(state: &'a ClientState) -> Self {
		Self {
			query: &state.query,
			results: &state.results,
			is_busy: state.is_busy,
			error_message: state.error_message.as_deref(),
			modal: state.modal.as_ref(),
		}
	}

	/// Whether the "no results" notice should be shown.
	#[must_use]
	pub fn show_empty_results(&self) -> bool {
		!self.is_busy
			&& self.results.is_empty()
			&& !self.query.term.is_empty()
			&& self.error_message.is_none()
	}

	#[must_use]
	pub fn empty_message(&self) -> String {
		format!("No results found for \"{}\"", self.query.term)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::SearchMode;

	fn state(term: &str) -> ClientState {
		ClientState {
			query: SearchQuery::new(term, SearchMode::Fuzzy),
			..ClientState::default()
		}
	}

	#[test]
	fn empty_notice_needs_a_term_and_an_idle_clean_state() {
		assert!(PresentationState::derive(&state("zzz")).show_empty_results());
		assert!(!PresentationState::derive(&state("")).show_empty_results());

		let mut busy = state("zzz");
		busy.is_busy = true;
		assert!(!PresentationState::derive(&busy).show_empty_results());

		let mut failed = state("zzz");
		failed.error_message = Some("boom".into());
		assert!(!PresentationState::derive(&failed).show_empty_results());

		let mut populated = state("zzz");
		populated.results.push(SearchResult::default());
		assert!(!PresentationState::derive(&populated).show_empty_results());
	}

	#[test]
	fn empty_message_quotes_the_term() {
		let state = state("zzz");
		assert_eq!(
			PresentationState::derive(&state).empty_message(),
			"No results found for \"zzz\""
		);
	}
}
