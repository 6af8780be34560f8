use reqwest::StatusCode;
use thiserror::Error;

/// Failures surfaced by a [`Backend`](super::Backend) call.
#[derive(Debug, Error)]
pub enum BackendError {
	/// The configured base URL cannot address the service.
	#[error("invalid backend URL `{url}`: {reason}")]
	InvalidBaseUrl { url: String, reason: String },

	/// The request never produced a response (connection, timeout, TLS...).
	#[error("request failed: {0}")]
	Transport(#[from] reqwest::Error),

	/// The service answered with a non-2xx status.
	#[error("backend responded with {status}")]
	Status {
		status: StatusCode,
		message: Option<String>,
	},

	/// A search response body was not the expected JSON array.
	#[error("malformed search response: {0}")]
	Decode(#[from] serde_json::Error),

	/// The term would collapse into a dot segment of the request path.
	#[error("term `{0}` cannot be addressed as a path segment")]
	UnaddressableTerm(String),

	/// The request worker stopped before answering.
	#[error("request worker stopped before the call completed")]
	WorkerGone,
}

impl BackendError {
	/// Message text supplied by the service alongside a failure, if any.
	#[must_use]
	pub fn message(&self) -> Option<&str> {
		match self {
			BackendError::Status { message, .. } => message.as_deref(),
			_ => None,
		}
	}
}
