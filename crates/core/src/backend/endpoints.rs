use reqwest::{Method, Url};

use super::{AdminRequest, BackendError};
use crate::model::SearchQuery;

/// URL builder for the service routes, rooted at one configured base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
	base: String,
}

impl Endpoints {
	/// Validate `base_url` and normalise away any trailing slash.
	pub fn new(base_url: &str) -> Result<Self, BackendError> {
		let trimmed = base_url.trim().trim_end_matches('/');
		let parsed = Url::parse(trimmed).map_err(|err| BackendError::InvalidBaseUrl {
			url: base_url.to_string(),
			reason: err.to_string(),
		})?;

		if !matches!(parsed.scheme(), "http" | "https") {
			return Err(BackendError::InvalidBaseUrl {
				url: base_url.to_string(),
				reason: format!("unsupported scheme `{}`", parsed.scheme()),
			});
		}
		if parsed.query().is_some() || parsed.fragment().is_some() {
			return Err(BackendError::InvalidBaseUrl {
				url: base_url.to_string(),
				reason: "query strings and fragments are not allowed".to_string(),
			});
		}

		Ok(Self {
			base: trimmed.to_string(),
		})
	}

	#[must_use]
	pub fn base(&self) -> &str {
		&self.base
	}

	/// `GET {base}/search/{mode}/{term}`
	#[must_use]
	pub fn search(&self, query: &SearchQuery) -> String {
		format!(
			"{}/search/{}/{}",
			self.base,
			query.mode.path_segment(),
			urlencoding::encode(&query.term)
		)
	}

	/// Method and URL for a mutating call.
	#[must_use]
	pub fn admin(&self, request: &AdminRequest) -> (Method, String) {
		match request {
			AdminRequest::RebuildIndex => {
				(Method::POST, format!("{}/search/rebuild-index", self.base))
			}
			AdminRequest::DeleteEntry { term } => (
				Method::DELETE,
				format!("{}/search/delete/{}", self.base, urlencoding::encode(term)),
			),
			AdminRequest::DeleteIndex => {
				(Method::DELETE, format!("{}/search/delete-index", self.base))
			}
		}
	}
}

/// Whether `term` survives as its own path segment.
///
/// URL parsing folds `.` and `..` segments into the parent path, even when
/// percent-encoded, so those terms can never reach `/search/{mode}/{term}` or
/// `/search/delete/{term}`.
#[must_use]
pub fn is_addressable(term: &str) -> bool {
	!matches!(term.trim(), "." | "..")
}
