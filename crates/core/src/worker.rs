//! Background thread that performs backend calls off the controller thread.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::{debug, trace};

use crate::backend::{AdminRequest, Backend, BackendError};
use crate::model::{AdminAction, SearchQuery, SearchResult};

pub(crate) enum Command {
	Search { id: u64, query: SearchQuery },
	Admin { id: u64, request: AdminRequest },
	Shutdown,
}

#[derive(Debug)]
pub(crate) enum Reply {
	Search(Result<Vec<SearchResult>, BackendError>),
	Admin {
		action: AdminAction,
		result: Result<Option<String>, BackendError>,
	},
}

/// A finished call, tagged with the id it was dispatched under.
#[derive(Debug)]
pub(crate) struct Completion {
	pub(crate) id: u64,
	pub(crate) reply: Reply,
}

/// Launch the worker and return its command and completion channels.
pub(crate) fn spawn<B: Backend>(backend: B) -> (Sender<Command>, Receiver<Completion>) {
	let (command_tx, command_rx) = mpsc::channel();
	let (completion_tx, completion_rx) = mpsc::channel();

	thread::spawn(move || worker_loop(&backend, command_rx, completion_tx));

	(command_tx, completion_rx)
}

fn worker_loop<B: Backend>(
	backend: &B,
	command_rx: Receiver<Command>,
	completion_tx: Sender<Completion>,
) {
	while let Ok(command) = command_rx.recv() {
		let Some(completion) = handle_command(backend, command) else {
			break;
		};
		if completion_tx.send(completion).is_err() {
			debug!("client dropped before the call resolved; discarding result");
			break;
		}
	}
	trace!("request worker exiting");
}

fn handle_command<B: Backend>(backend: &B, command: Command) -> Option<Completion> {
	match command {
		Command::Search { id, query } => Some(Completion {
			id,
			reply: Reply::Search(backend.search(&query)),
		}),
		Command::Admin { id, request } => Some(Completion {
			id,
			reply: Reply::Admin {
				action: request.action(),
				result: backend.execute(&request),
			},
		}),
		Command::Shutdown => None,
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use super::*;

	struct Echo;

	impl Backend for Echo {
		fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, BackendError> {
			Ok(vec![SearchResult {
				word: query.term.clone(),
				..SearchResult::default()
			}])
		}

		fn execute(&self, _request: &AdminRequest) -> Result<Option<String>, BackendError> {
			Ok(None)
		}
	}

	#[test]
	fn completions_carry_the_dispatch_id() {
		let (tx, rx) = spawn(Echo);
		tx.send(Command::Search {
			id: 7,
			query: SearchQuery::new("echo", Default::default()),
		})
		.expect("send");

		let completion = rx.recv_timeout(Duration::from_secs(5)).expect("completion");
		assert_eq!(completion.id, 7);
		match completion.reply {
			Reply::Search(Ok(results)) => assert_eq!(results[0].word, "echo"),
			other => panic!("unexpected reply: {other:?}"),
		}
	}

	#[test]
	fn admin_replies_remember_their_action() {
		let (tx, rx) = spawn(Echo);
		tx.send(Command::Admin {
			id: 1,
			request: AdminRequest::DeleteIndex,
		})
		.expect("send");

		let completion = rx.recv_timeout(Duration::from_secs(5)).expect("completion");
		assert!(matches!(
			completion.reply,
			Reply::Admin {
				action: AdminAction::DeleteAll,
				result: Ok(None)
			}
		));
	}

	#[test]
	fn shutdown_command_stops_worker() {
		let (tx, rx) = spawn(Echo);
		tx.send(Command::Shutdown).expect("send");
		assert!(rx.recv_timeout(Duration::from_secs(5)).is_err());
	}
}
