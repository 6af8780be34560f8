//! Dispatch bookkeeping on the controller side of the worker channels.

use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::Duration;

use tracing::{debug, warn};

use crate::backend::{AdminRequest, BackendError};
use crate::model::SearchQuery;
use crate::worker::{Command, Completion, Reply};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CallKind {
	Search,
	Admin(crate::model::AdminAction),
}

#[derive(Debug, Clone, Copy)]
struct InFlight {
	id: u64,
	kind: CallKind,
}

/// Tracks the single outstanding call and filters completions against it.
pub(crate) struct RequestRuntime {
	tx: Sender<Command>,
	rx: Receiver<Completion>,
	next_id: u64,
	in_flight: Option<InFlight>,
}

impl RequestRuntime {
	pub(crate) fn new(tx: Sender<Command>, rx: Receiver<Completion>) -> Self {
		Self {
			tx,
			rx,
			next_id: 0,
			in_flight: None,
		}
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(Command::Shutdown);
	}

	pub(crate) fn issue_search(&mut self, query: SearchQuery) -> u64 {
		let id = self.begin(CallKind::Search);
		if self.tx.send(Command::Search { id, query }).is_err() {
			warn!(id, "request worker is gone; search will resolve as a failure");
		}
		id
	}

	pub(crate) fn issue_admin(&mut self, request: AdminRequest) -> u64 {
		let id = self.begin(CallKind::Admin(request.action()));
		if self.tx.send(Command::Admin { id, request }).is_err() {
			warn!(id, "request worker is gone; admin call will resolve as a failure");
		}
		id
	}

	fn begin(&mut self, kind: CallKind) -> u64 {
		self.next_id = self.next_id.wrapping_add(1);
		let id = self.next_id;
		self.in_flight = Some(InFlight { id, kind });
		id
	}

	pub(crate) fn in_flight_kind(&self) -> Option<CallKind> {
		self.in_flight.map(|call| call.kind)
	}

	/// Next completion for the in-flight call, without blocking.
	pub(crate) fn try_next(&mut self) -> Option<Completion> {
		loop {
			match self.rx.try_recv() {
				Ok(completion) => {
					if let Some(completion) = self.accept(completion) {
						return Some(completion);
					}
				}
				Err(TryRecvError::Empty) => return None,
				Err(TryRecvError::Disconnected) => return self.abandon(),
			}
		}
	}

	/// Like [`Self::try_next`] but waits up to `timeout` for an answer.
	pub(crate) fn next_timeout(&mut self, timeout: Duration) -> Option<Completion> {
		match self.rx.recv_timeout(timeout) {
			Ok(completion) => self.accept(completion),
			Err(RecvTimeoutError::Timeout) => None,
			Err(RecvTimeoutError::Disconnected) => self.abandon(),
		}
	}

	fn accept(&mut self, completion: Completion) -> Option<Completion> {
		match self.in_flight {
			Some(call) if call.id == completion.id => {
				self.in_flight = None;
				Some(completion)
			}
			_ => {
				debug!(id = completion.id, "discarding completion for a call no longer in flight");
				None
			}
		}
	}

	/// Resolve the in-flight call as failed once the worker has vanished.
	fn abandon(&mut self) -> Option<Completion> {
		let call = self.in_flight.take()?;
		warn!(id = call.id, "request worker disconnected mid-call");
		let reply = match call.kind {
			CallKind::Search => Reply::Search(Err(BackendError::WorkerGone)),
			CallKind::Admin(action) => Reply::Admin {
				action,
				result: Err(BackendError::WorkerGone),
			},
		};
		Some(Completion { id: call.id, reply })
	}
}
