use tracing::{debug, warn};

use super::{Dispatch, IgnoreReason, RequestId, SEARCH_FAILURE_MESSAGE, SearchClient};
use crate::backend::BackendError;
use crate::model::{SearchMode, SearchQuery, SearchResult};

impl SearchClient {
	/// Look up `term` in `mode`.
	///
	/// Blank terms and calls made while busy leave the state untouched. On
	/// dispatch the query is recorded, `is_busy` is raised and any previous
	/// error is cleared.
	pub fn search(&mut self, term: impl Into<String>, mode: SearchMode) -> Dispatch {
		let query = SearchQuery::new(term, mode);
		if query.is_blank() {
			return Dispatch::Ignored(IgnoreReason::BlankTerm);
		}
		if !query.is_addressable() {
			debug!(term = %query.term, "search skipped for a dot-segment term");
			return Dispatch::Ignored(IgnoreReason::UnaddressableTerm);
		}
		if self.state.is_busy {
			debug!(term = %query.term, "search rejected while another call is in flight");
			return Dispatch::Ignored(IgnoreReason::Busy);
		}

		self.state.query = query.clone();
		self.state.is_busy = true;
		self.state.error_message = None;

		let id = self.runtime.issue_search(query);
		debug!(id, mode = mode.path_segment(), term = %self.state.query.term, "search dispatched");
		Dispatch::Sent(RequestId(id))
	}

	/// Submit the current text and mode; identical to calling [`Self::search`]
	/// with them.
	pub fn submit(&mut self) -> Dispatch {
		let SearchQuery { term, mode } = self.state.query.clone();
		self.search(term, mode)
	}

	pub(super) fn finish_search(&mut self, result: Result<Vec<SearchResult>, BackendError>) {
		self.state.is_busy = false;
		match result {
			Ok(results) => {
				debug!(count = results.len(), "search completed");
				self.state.results = results;
			}
			Err(err) => {
				warn!(error = %err, term = %self.state.query.term, "search failed");
				self.state.error_message = Some(SEARCH_FAILURE_MESSAGE.to_string());
			}
		}
	}
}
