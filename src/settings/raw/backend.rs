use serde::Deserialize;

use crate::cli::CliArgs;

/// Service address used when nothing else is configured.
pub(crate) const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Search service connection settings prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct BackendSection {
	pub(super) base_url: Option<String>,
	pub(super) timeout_secs: Option<u64>,
}

impl BackendSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = cli.base_url.clone() {
			self.base_url = Some(url);
		}
		if let Some(timeout) = cli.timeout_secs {
			self.timeout_secs = Some(timeout);
		}
	}

	pub(super) fn finalize(self) -> (String, Option<u64>) {
		let base_url = self
			.base_url
			.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
		(base_url, self.timeout_secs)
	}
}
