use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::CliArgs;

pub(super) const DEFAULT_LOG_LEVEL: &str = "info";

/// Diagnostic log settings prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LogSection {
	pub(super) level: Option<String>,
	pub(super) file: Option<PathBuf>,
}

impl LogSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(level) = cli.log_level.clone() {
			self.level = Some(level);
		}
		if let Some(file) = cli.log_file.clone() {
			self.file = Some(file);
		}
	}

	pub(super) fn finalize(self) -> (String, Option<PathBuf>) {
		let level = self
			.level
			.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
		(level, self.file)
	}
}
