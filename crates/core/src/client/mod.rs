//! The search client: query and admin controllers over one owned session.
//!
//! [`SearchClient`] is the single owner of a [`ClientState`]. Network calls
//! run on a background worker; their completions are folded back in by
//! [`SearchClient::pump`] on the caller's thread, so every state transition
//! happens on one logical control thread.
//!
//! At most one call is outstanding at a time. `is_busy` is raised before a
//! call is dispatched and lowered only when its completion is applied.

mod admin;
mod presentation;
mod query;

use std::time::{Duration, Instant};

use tracing::trace;

pub use presentation::PresentationState;

use crate::backend::Backend;
use crate::model::{ClientState, SearchMode};
use crate::runtime::RequestRuntime;
use crate::worker::{self, Completion, Reply};

/// Shown instead of backend detail whenever a search fails.
pub const SEARCH_FAILURE_MESSAGE: &str = "Failed to fetch results. Please try again.";

/// Outcome text for a failed admin action that came without a backend message.
pub const ACTION_FAILURE_MESSAGE: &str = "Operation failed. Please try again.";

/// Identifier of a dispatched network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub u64);

/// Why an operation left the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
	/// The term was empty or whitespace.
	BlankTerm,
	/// The term is `.` or `..`, which no request path can carry.
	UnaddressableTerm,
	/// Another call is still in flight.
	Busy,
	/// `confirm` was called without a staged confirmation.
	NothingPending,
	/// The modal slot is occupied, or reserved for an in-flight admin call.
	ModalReserved,
}

/// Result of an operation that may issue a network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
	Sent(RequestId),
	Ignored(IgnoreReason),
}

impl Dispatch {
	#[must_use]
	pub fn is_sent(self) -> bool {
		matches!(self, Dispatch::Sent(_))
	}
}

/// One interactive session against the search service.
pub struct SearchClient {
	state: ClientState,
	runtime: RequestRuntime,
}

impl Drop for SearchClient {
	fn drop(&mut self) {
		self.runtime.shutdown();
	}
}

impl SearchClient {
	/// Start a session backed by `backend`, spawning its request worker.
	pub fn new<B: Backend>(backend: B) -> Self {
		let (tx, rx) = worker::spawn(backend);
		Self {
			state: ClientState::default(),
			runtime: RequestRuntime::new(tx, rx),
		}
	}

	#[must_use]
	pub fn state(&self) -> &ClientState {
		&self.state
	}

	#[must_use]
	pub fn is_busy(&self) -> bool {
		self.state.is_busy
	}

	/// Read-only view for the rendering layer, derived from the current state.
	#[must_use]
	pub fn presentation(&self) -> PresentationState<'_> {
		PresentationState::derive(&self.state)
	}

	/// Replace the search text without issuing a call.
	pub fn set_term(&mut self, term: impl Into<String>) {
		self.state.query.term = term.into();
	}

	/// Switch search mode without issuing a call.
	pub fn set_mode(&mut self, mode: SearchMode) {
		self.state.query.mode = mode;
	}

	pub fn cycle_mode(&mut self) -> SearchMode {
		self.state.query.mode = self.state.query.mode.next();
		self.state.query.mode
	}

	pub fn cycle_mode_back(&mut self) -> SearchMode {
		self.state.query.mode = self.state.query.mode.previous();
		self.state.query.mode
	}

	/// Apply every completion that has arrived. Returns how many were applied.
	pub fn pump(&mut self) -> usize {
		let mut applied = 0;
		while let Some(completion) = self.runtime.try_next() {
			self.apply(completion);
			applied += 1;
		}
		applied
	}

	/// Block until no call is in flight or `timeout` elapses. Returns whether
	/// the client went idle.
	pub fn wait_idle(&mut self, timeout: Duration) -> bool {
		let deadline = Instant::now() + timeout;
		while self.state.is_busy {
			let remaining = deadline.saturating_duration_since(Instant::now());
			if remaining.is_zero() {
				return false;
			}
			if let Some(completion) = self.runtime.next_timeout(remaining) {
				self.apply(completion);
			}
		}
		true
	}

	fn apply(&mut self, completion: Completion) {
		trace!(id = completion.id, "applying completion");
		match completion.reply {
			Reply::Search(result) => self.finish_search(result),
			Reply::Admin { action, result } => self.finish_admin(action, result),
		}
	}
}
