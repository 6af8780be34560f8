//! Contract with the remote search service and its HTTP implementation.

mod endpoints;
mod error;
mod http;

pub use endpoints::{Endpoints, is_addressable};
pub use error::BackendError;
pub use http::{HttpBackend, extract_message};

use crate::model::{AdminAction, SearchQuery, SearchResult};

/// Mutating call issued after a confirmation is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminRequest {
	RebuildIndex,
	DeleteEntry { term: String },
	DeleteIndex,
}

impl AdminRequest {
	#[must_use]
	pub fn action(&self) -> AdminAction {
		match self {
			AdminRequest::RebuildIndex => AdminAction::Rebuild,
			AdminRequest::DeleteEntry { .. } => AdminAction::DeleteEntry,
			AdminRequest::DeleteIndex => AdminAction::DeleteAll,
		}
	}
}

/// The search service as seen by the client.
///
/// Implementations run on the request worker thread, so calls may block.
pub trait Backend: Send + 'static {
	/// Run a read query and return the records in backend order.
	fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, BackendError>;

	/// Run a mutating call, returning the backend's status message if it sent
	/// one.
	fn execute(&self, request: &AdminRequest) -> Result<Option<String>, BackendError>;
}

impl<B: Backend + ?Sized> Backend for Box<B> {
	fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, BackendError> {
		(**self).search(query)
	}

	fn execute(&self, request: &AdminRequest) -> Result<Option<String>, BackendError> {
		(**self).execute(request)
	}
}
