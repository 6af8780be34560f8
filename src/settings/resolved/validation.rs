use tracing_subscriber::EnvFilter;
use wordscope_core::Endpoints;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if let Err(err) = Endpoints::new(&config.base_url) {
		return Err(ConfigError::invalid(
			"backend.base_url",
			config.base_url.clone(),
			sources.source_for_base_url(),
			err.to_string(),
		));
	}

	if let Some(timeout) = config.timeout_secs
		&& timeout == 0
	{
		return Err(ConfigError::invalid(
			"backend.timeout_secs",
			timeout.to_string(),
			sources.source_for_timeout(),
			"must be greater than zero",
		));
	}

	if let Some(theme) = &config.theme
		&& wordscope_tui::style::by_name(theme).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			theme.clone(),
			sources.source_for_theme(),
			format!(
				"unknown theme; expected one of {}",
				wordscope_tui::style::names().join(", ")
			),
		));
	}

	if let Err(err) = EnvFilter::try_new(&config.log_level) {
		return Err(ConfigError::invalid(
			"log.level",
			config.log_level.clone(),
			sources.source_for_log_level(),
			err.to_string(),
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use wordscope_core::SearchMode;

	use super::super::SettingSource;
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			base_url: "http://localhost:8080/api".into(),
			timeout_secs: None,
			initial_query: String::new(),
			start_mode: SearchMode::Exact,
			theme: None,
			log_level: "info".into(),
			log_file: None,
		}
	}

	#[test]
	fn validation_accepts_defaults() {
		assert!(validate(&config(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_zero_timeout() {
		let config = ResolvedConfig {
			timeout_secs: Some(0),
			..config()
		};
		let sources = ConfigSources {
			timeout: Some(SettingSource::CliFlag("--timeout")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert!(matches!(err.key, "backend.timeout_secs"));
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("CLI flag"));
	}

	#[test]
	fn validation_rejects_non_http_base_url() {
		let config = ResolvedConfig {
			base_url: "ftp://files.example.com".into(),
			..config()
		};
		let sources = ConfigSources {
			base_url: Some(SettingSource::Environment("WORDSCOPE__BACKEND__BASE_URL")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert!(matches!(err.key, "backend.base_url"));
		assert!(err.to_string().contains("environment variable"));
	}

	#[test]
	fn validation_rejects_unknown_theme() {
		let config = ResolvedConfig {
			theme: Some("neon".into()),
			..config()
		};

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert!(matches!(err.key, "ui.theme"));
		let message = err.to_string();
		assert!(message.contains("configuration key `ui.theme`"));
		assert!(message.contains("slate"));
	}

	#[test]
	fn theme_names_match_case_insensitively() {
		let config = ResolvedConfig {
			theme: Some("Solarized".into()),
			..config()
		};
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_malformed_log_filter() {
		let config = ResolvedConfig {
			log_level: "wordscope=loud".into(),
			..config()
		};

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert!(matches!(err.key, "log.level"));
	}
}
