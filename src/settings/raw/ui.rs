use serde::Deserialize;
use wordscope_core::SearchMode;

use super::super::resolved::{ConfigError, ConfigSources};
use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) initial_query: Option<String>,
	pub(super) start_mode: Option<String>,
	pub(super) theme: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) initial_query: String,
	pub(super) start_mode: SearchMode,
	pub(super) theme: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(mode) = cli.mode {
			self.start_mode = Some(mode.as_str().to_string());
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
	}

	pub(super) fn finalize(self, sources: &ConfigSources) -> Result<UiResolution, ConfigError> {
		let start_mode = match self.start_mode {
			Some(name) => name.parse::<SearchMode>().map_err(|err| {
				ConfigError::invalid("ui.start_mode", name.clone(), sources.source_for_start_mode(), err.to_string())
			})?,
			None => SearchMode::default(),
		};

		Ok(UiResolution {
			initial_query: self.initial_query.unwrap_or_default(),
			start_mode,
			theme: self.theme,
		})
	}
}
