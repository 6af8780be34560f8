use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod backend;
mod log;
mod ui;

use backend::BackendSection;
use log::LogSection;
use ui::UiSection;

pub(crate) use backend::DEFAULT_BASE_URL;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    backend: BackendSection,
    ui: UiSection,
    log: LogSection,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        self.backend.apply_cli_overrides(cli);
        self.ui.apply_cli_overrides(cli);
        self.log.apply_cli_overrides(cli);
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating and
    /// filling defaults where required.
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
        let sources = ConfigSources {
            base_url: detect_source(
                cli.base_url.is_some(),
                self.backend.base_url.is_some(),
                "WORDSCOPE__BACKEND__BASE_URL",
                "--base-url",
                "backend.base_url",
            ),
            timeout: detect_source(
                cli.timeout_secs.is_some(),
                self.backend.timeout_secs.is_some(),
                "WORDSCOPE__BACKEND__TIMEOUT_SECS",
                "--timeout",
                "backend.timeout_secs",
            ),
            start_mode: detect_source(
                cli.mode.is_some(),
                self.ui.start_mode.is_some(),
                "WORDSCOPE__UI__START_MODE",
                "--mode",
                "ui.start_mode",
            ),
            theme: detect_source(
                cli.theme.is_some(),
                self.ui.theme.is_some(),
                "WORDSCOPE__UI__THEME",
                "--theme",
                "ui.theme",
            ),
            log_level: detect_source(
                cli.log_level.is_some(),
                self.log.level.is_some(),
                "WORDSCOPE__LOG__LEVEL",
                "--log-level",
                "log.level",
            ),
        };

        let (base_url, timeout_secs) = self.backend.finalize();
        let ui = self.ui.finalize(&sources).map_err(Error::new)?;
        let (log_level, log_file) = self.log.finalize();

        let config = ResolvedConfig {
            base_url,
            timeout_secs,
            initial_query: ui.initial_query,
            start_mode: ui.start_mode,
            theme: ui.theme,
            log_level,
            log_file,
        };

        config.validate(&sources).map_err(Error::new)?;

        Ok(config)
    }
}

fn detect_source(
    cli_present: bool,
    value_present: bool,
    env_var: &'static str,
    cli_flag: &'static str,
    key: &'static str,
) -> Option<SettingSource> {
    if !value_present {
        return None;
    }

    if cli_present {
        return Some(SettingSource::CliFlag(cli_flag));
    }

    if env::var_os(env_var).is_some() {
        return Some(SettingSource::Environment(env_var));
    }

    Some(SettingSource::ConfigKey(key))
}
