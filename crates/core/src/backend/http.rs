use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::ACCEPT;
use serde_json::Value;
use tracing::{debug, trace};

use super::{AdminRequest, Backend, BackendError, Endpoints, is_addressable};
use crate::model::{SearchQuery, SearchResult};

const USER_AGENT: &str = concat!("wordscope/", env!("CARGO_PKG_VERSION"));

/// [`Backend`] that talks to the search service over HTTP.
///
/// Uses a blocking client because every call already runs on the request
/// worker thread.
#[derive(Debug, Clone)]
pub struct HttpBackend {
	client: Client,
	endpoints: Endpoints,
}

impl HttpBackend {
	/// Build a backend without a request timeout.
	pub fn new(base_url: &str) -> Result<Self, BackendError> {
		Self::with_timeout(base_url, None)
	}

	/// Build a backend whose requests give up after `timeout`. `None` leaves
	/// call duration entirely to the transport and the service.
	pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, BackendError> {
		let endpoints = Endpoints::new(base_url)?;
		let client = Client::builder()
			.user_agent(USER_AGENT)
			.timeout(timeout)
			.build()?;
		Ok(Self { client, endpoints })
	}

	#[must_use]
	pub fn endpoints(&self) -> &Endpoints {
		&self.endpoints
	}
}

impl Backend for HttpBackend {
	fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, BackendError> {
		if !is_addressable(&query.term) {
			return Err(BackendError::UnaddressableTerm(query.term.clone()));
		}
		let url = self.endpoints.search(query);
		debug!(%url, "GET search");

		let response = self
			.client
			.get(&url)
			.header(ACCEPT, "application/json")
			.send()?;
		let body = successful_body(response)?;

		let results: Vec<SearchResult> = serde_json::from_str(&body)?;
		trace!(count = results.len(), "decoded search response");
		Ok(results)
	}

	fn execute(&self, request: &AdminRequest) -> Result<Option<String>, BackendError> {
		if let AdminRequest::DeleteEntry { term } = request
			&& !is_addressable(term)
		{
			return Err(BackendError::UnaddressableTerm(term.clone()));
		}
		let (method, url) = self.endpoints.admin(request);
		debug!(%method, %url, "admin request");

		let response = self
			.client
			.request(method, &url)
			.header(ACCEPT, "application/json, text/plain")
			.send()?;
		let body = successful_body(response)?;
		Ok(extract_message(&body))
	}
}

/// Read the body, turning any non-2xx status into [`BackendError::Status`].
fn successful_body(response: Response) -> Result<String, BackendError> {
	let status = response.status();
	let body = response.text()?;
	if status.is_success() {
		Ok(body)
	} else {
		Err(BackendError::Status {
			status,
			message: extract_message(&body),
		})
	}
}

/// Pull a human readable message out of a mutation response body.
///
/// Accepts a JSON string, a JSON object with a `message` or `error` field, or
/// plain text. Blank bodies yield `None`.
#[must_use]
pub fn extract_message(body: &str) -> Option<String> {
	let trimmed = body.trim();
	if trimmed.is_empty() {
		return None;
	}

	let text = match serde_json::from_str::<Value>(trimmed) {
		Ok(Value::String(text)) => text,
		Ok(Value::Object(map)) => ["message", "error"]
			.iter()
			.find_map(|key| map.get(*key).and_then(Value::as_str))
			.map_or_else(|| trimmed.to_string(), str::to_string),
		_ => trimmed.to_string(),
	};

	let text = text.trim();
	(!text.is_empty()).then(|| text.to_string())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn messages_come_from_text_or_json() {
		assert_eq!(extract_message("Index rebuilt\n"), Some("Index rebuilt".into()));
		assert_eq!(extract_message("\"Deleted\""), Some("Deleted".into()));
		assert_eq!(
			extract_message(r#"{"message": "Deleted hello", "count": 1}"#),
			Some("Deleted hello".into())
		);
		assert_eq!(
			extract_message(r#"{"error": "index locked"}"#),
			Some("index locked".into())
		);
	}

	#[test]
	fn unrecognised_json_falls_back_to_raw_text() {
		assert_eq!(extract_message(r#"{"ok": true}"#), Some(r#"{"ok": true}"#.into()));
		assert_eq!(extract_message("42"), Some("42".into()));
	}

	#[test]
	fn blank_bodies_have_no_message() {
		assert_eq!(extract_message(""), None);
		assert_eq!(extract_message("  \n"), None);
		assert_eq!(extract_message("\"  \""), None);
	}
}
