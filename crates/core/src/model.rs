//! Data model shared by the controllers, the backend and the rendering layer.
//!
//! Everything here is plain data. State transitions live in
//! [`crate::client`], which is the only place a [`ClientState`] is mutated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::backend::AdminRequest;

/// Selects which backend query endpoint a search is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
	/// Whole-word lookup (`/search/word/...`).
	#[default]
	Exact,
	/// Approximate matching (`/search/fuzzy/...`).
	Fuzzy,
	/// Prefix lookup (`/search/prefix/...`).
	Prefix,
}

impl SearchMode {
	/// Every mode in display order.
	pub const ALL: [SearchMode; 3] = [SearchMode::Exact, SearchMode::Fuzzy, SearchMode::Prefix];

	/// Path segment used by the backend for this mode.
	#[must_use]
	pub const fn path_segment(self) -> &'static str {
		match self {
			SearchMode::Exact => "word",
			SearchMode::Fuzzy => "fuzzy",
			SearchMode::Prefix => "prefix",
		}
	}

	/// Human readable label.
	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			SearchMode::Exact => "Exact",
			SearchMode::Fuzzy => "Fuzzy",
			SearchMode::Prefix => "Prefix",
		}
	}

	/// Position of this mode within [`SearchMode::ALL`].
	#[must_use]
	pub const fn index(self) -> usize {
		match self {
			SearchMode::Exact => 0,
			SearchMode::Fuzzy => 1,
			SearchMode::Prefix => 2,
		}
	}

	#[must_use]
	pub const fn next(self) -> Self {
		match self {
			SearchMode::Exact => SearchMode::Fuzzy,
			SearchMode::Fuzzy => SearchMode::Prefix,
			SearchMode::Prefix => SearchMode::Exact,
		}
	}

	#[must_use]
	pub const fn previous(self) -> Self {
		match self {
			SearchMode::Exact => SearchMode::Prefix,
			SearchMode::Fuzzy => SearchMode::Exact,
			SearchMode::Prefix => SearchMode::Fuzzy,
		}
	}
}

impl fmt::Display for SearchMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// Error returned when a mode name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search mode `{0}` (expected exact, fuzzy or prefix)")]
pub struct UnknownMode(pub String);

impl FromStr for SearchMode {
	type Err = UnknownMode;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"exact" | "word" => Ok(SearchMode::Exact),
			"fuzzy" => Ok(SearchMode::Fuzzy),
			"prefix" => Ok(SearchMode::Prefix),
			_ => Err(UnknownMode(value.to_string())),
		}
	}
}

/// The search text and mode as currently entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SearchQuery {
	pub term: String,
	pub mode: SearchMode,
}

impl SearchQuery {
	#[must_use]
	pub fn new(term: impl Into<String>, mode: SearchMode) -> Self {
		Self {
			term: term.into(),
			mode,
		}
	}

	/// Whether the term is empty once surrounding whitespace is removed.
	#[must_use]
	pub fn is_blank(&self) -> bool {
		self.term.trim().is_empty()
	}

	/// Whether the term can be sent as a path segment (`.` and `..` cannot).
	#[must_use]
	pub fn is_addressable(&self) -> bool {
		crate::backend::is_addressable(&self.term)
	}
}

/// A single record returned by a search.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
	pub word: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub metadata: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub related_words: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Mutating operations against the backing index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminAction {
	Rebuild,
	DeleteEntry,
	DeleteAll,
}

impl AdminAction {
	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			AdminAction::Rebuild => "Rebuild index",
			AdminAction::DeleteEntry => "Delete entry",
			AdminAction::DeleteAll => "Delete index",
		}
	}

	/// Message shown when the backend reports success without any text.
	#[must_use]
	pub const fn success_fallback(self) -> &'static str {
		match self {
			AdminAction::Rebuild => "Index rebuilt.",
			AdminAction::DeleteEntry => "Entry deleted.",
			AdminAction::DeleteAll => "Index deleted.",
		}
	}
}

/// A destructive action waiting for the user to confirm or cancel it.
///
/// Only constructed through [`PendingConfirmation::stage`], which guarantees a
/// delete-entry confirmation always names a non-blank term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConfirmation {
	request: AdminRequest,
	prompt: String,
}

impl PendingConfirmation {
	/// Stage `action`, reading the target from `term` for
	/// [`AdminAction::DeleteEntry`]. Returns `None` when that term is blank or
	/// a dot segment.
	#[must_use]
	pub fn stage(action: AdminAction, term: &str) -> Option<Self> {
		let (request, prompt) = match action {
			AdminAction::Rebuild => (
				AdminRequest::RebuildIndex,
				"Rebuild the search index? This may take a while.".to_string(),
			),
			AdminAction::DeleteEntry => {
				if term.trim().is_empty() || !crate::backend::is_addressable(term) {
					return None;
				}
				(
					AdminRequest::DeleteEntry {
						term: term.to_string(),
					},
					format!("Delete \"{term}\" from the index?"),
				)
			}
			AdminAction::DeleteAll => (
				AdminRequest::DeleteIndex,
				"Delete every entry in the index? This cannot be undone.".to_string(),
			),
		};
		Some(Self { request, prompt })
	}

	#[must_use]
	pub fn action(&self) -> AdminAction {
		self.request.action()
	}

	#[must_use]
	pub fn prompt(&self) -> &str {
		&self.prompt
	}

	/// The literal term a delete-entry confirmation targets.
	#[must_use]
	pub fn target_term(&self) -> Option<&str> {
		match &self.request {
			AdminRequest::DeleteEntry { term } => Some(term),
			_ => None,
		}
	}

	/// The network call bound to this confirmation.
	#[must_use]
	pub fn request(&self) -> &AdminRequest {
		&self.request
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
	Success,
	Failure,
}

/// Result of an executed admin action, shown until dismissed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationOutcome {
	pub kind: OutcomeKind,
	pub message: String,
}

impl OperationOutcome {
	#[must_use]
	pub fn success(message: impl Into<String>) -> Self {
		Self {
			kind: OutcomeKind::Success,
			message: message.into(),
		}
	}

	#[must_use]
	pub fn failure(message: impl Into<String>) -> Self {
		Self {
			kind: OutcomeKind::Failure,
			message: message.into(),
		}
	}

	#[must_use]
	pub fn is_success(&self) -> bool {
		self.kind == OutcomeKind::Success
	}
}

/// Contents of the single modal slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
	Confirm(PendingConfirmation),
	Outcome(OperationOutcome),
}

impl Modal {
	#[must_use]
	pub fn as_confirmation(&self) -> Option<&PendingConfirmation> {
		match self {
			Modal::Confirm(pending) => Some(pending),
			Modal::Outcome(_) => None,
		}
	}

	#[must_use]
	pub fn as_outcome(&self) -> Option<&OperationOutcome> {
		match self {
			Modal::Outcome(outcome) => Some(outcome),
			Modal::Confirm(_) => None,
		}
	}
}

/// Session state owned by a single [`crate::SearchClient`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientState {
	pub query: SearchQuery,
	pub results: Vec<SearchResult>,
	pub is_busy: bool,
	pub error_message: Option<String>,
	pub modal: Option<Modal>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn modes_cycle_through_every_variant() {
		let mut mode = SearchMode::Exact;
		for expected in [SearchMode::Fuzzy, SearchMode::Prefix, SearchMode::Exact] {
			mode = mode.next();
			assert_eq!(mode, expected);
		}
		assert_eq!(SearchMode::Exact.previous(), SearchMode::Prefix);
		for mode in SearchMode::ALL {
			assert_eq!(SearchMode::ALL[mode.index()], mode);
		}
	}

	#[test]
	fn mode_names_parse_case_insensitively() {
		assert_eq!("Word".parse::<SearchMode>(), Ok(SearchMode::Exact));
		assert_eq!(" FUZZY ".parse::<SearchMode>(), Ok(SearchMode::Fuzzy));
		assert_eq!("prefix".parse::<SearchMode>(), Ok(SearchMode::Prefix));
		assert!("regex".parse::<SearchMode>().is_err());
	}

	#[test]
	fn search_results_accept_camel_case_and_missing_fields() {
		let payload = r#"[
			{"word": "hello", "metadata": "noun", "relatedWords": ["hi", "greeting"]},
			{"word": "bare", "metadata": null}
		]"#;
		let results: Vec<SearchResult> = serde_json::from_str(payload).expect("decode");
		assert_eq!(results[0].related_words, vec!["hi", "greeting"]);
		assert_eq!(results[1].metadata, "");
		assert!(results[1].related_words.is_empty());
	}

	#[test]
	fn delete_entry_confirmation_requires_a_term() {
		assert!(PendingConfirmation::stage(AdminAction::DeleteEntry, "   ").is_none());

		let pending = PendingConfirmation::stage(AdminAction::DeleteEntry, "hello").expect("staged");
		assert_eq!(pending.target_term(), Some("hello"));
		assert!(pending.prompt().contains("\"hello\""));
		assert_eq!(pending.action(), AdminAction::DeleteEntry);
	}

	#[test]
	fn delete_entry_refuses_dot_segment_terms() {
		for term in [".", "..", " .. "] {
			assert!(PendingConfirmation::stage(AdminAction::DeleteEntry, term).is_none());
		}
		let pending = PendingConfirmation::stage(AdminAction::DeleteEntry, "...").expect("staged");
		assert_eq!(pending.target_term(), Some("..."));
		assert!(!SearchQuery::new("..", SearchMode::Exact).is_addressable());
		assert!(SearchQuery::new(".net", SearchMode::Exact).is_addressable());
	}

	#[test]
	fn index_wide_confirmations_have_no_target() {
		for action in [AdminAction::Rebuild, AdminAction::DeleteAll] {
			let pending = PendingConfirmation::stage(action, "").expect("staged");
			assert_eq!(pending.target_term(), None);
			assert_eq!(pending.action(), action);
		}
	}
}
