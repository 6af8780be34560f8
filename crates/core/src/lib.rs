//! Core crate for the `wordscope` search client.
//!
//! The root module re-exports the session controller, the data model and the
//! backend contract so that front ends can drive a search session without
//! digging through the module hierarchy.

pub mod backend;
pub mod client;
pub mod model;
mod runtime;
mod worker;

pub use crate::backend::{AdminRequest, Backend, BackendError, Endpoints, HttpBackend};
pub use crate::client::{
	ACTION_FAILURE_MESSAGE, Dispatch, IgnoreReason, PresentationState, RequestId,
	SEARCH_FAILURE_MESSAGE, SearchClient,
};
pub use crate::model::{
	AdminAction, ClientState, Modal, OperationOutcome, OutcomeKind, PendingConfirmation,
	SearchMode, SearchQuery, SearchResult, UnknownMode,
};
