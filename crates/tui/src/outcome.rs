//! What a finished session hands back to the caller.

use serde::Serialize;
use wordscope_core::{AdminAction, OperationOutcome, SearchMode, SearchResult};

/// An admin action that was confirmed and executed during the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionRecord {
	pub action: &'static str,
	#[serde(flatten)]
	pub outcome: OperationOutcome,
}

impl ActionRecord {
	#[must_use]
	pub fn new(action: AdminAction, outcome: OperationOutcome) -> Self {
		Self {
			action: action.label(),
			outcome,
		}
	}
}

/// Final state of an interactive session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
	pub query: String,
	pub mode: SearchMode,
	pub results: Vec<SearchResult>,
	/// Searches actually sent to the backend.
	pub searches: usize,
	pub actions: Vec<ActionRecord>,
}
