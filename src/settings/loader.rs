use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;
	use wordscope_core::SearchMode;

	use super::*;

	fn write_config(contents: &str) -> tempfile::NamedTempFile {
		let file = tempfile::Builder::new()
			.suffix(".toml")
			.tempfile()
			.expect("temp file");
		fs::write(file.path(), contents).expect("write config");
		file
	}

	#[test]
	fn config_file_values_are_resolved() {
		let file = write_config(
			r#"
[backend]
base_url = "https://search.example.com/api/"
timeout_secs = 12

[ui]
initial_query = "hello"
start_mode = "prefix"
theme = "light"

[log]
level = "debug"
"#,
		);
		let path = file.path().to_string_lossy().into_owned();
		let cli = CliArgs::parse_from(["wordscope", "--no-config", "-c", &path]);

		let resolved = load(&cli).expect("load");
		assert_eq!(resolved.base_url, "https://search.example.com/api/");
		assert_eq!(resolved.timeout_secs, Some(12));
		assert_eq!(resolved.initial_query, "hello");
		assert_eq!(resolved.start_mode, SearchMode::Prefix);
		assert_eq!(resolved.theme.as_deref(), Some("light"));
		assert_eq!(resolved.log_level, "debug");
	}

	#[test]
	fn cli_flags_override_config_files() {
		let file = write_config(
			r#"
[backend]
base_url = "http://from-file/api"

[ui]
start_mode = "fuzzy"
"#,
		);
		let path = file.path().to_string_lossy().into_owned();
		let cli = CliArgs::parse_from([
			"wordscope",
			"--no-config",
			"-c",
			&path,
			"--base-url",
			"http://from-cli/api",
			"--mode",
			"exact",
		]);

		let resolved = load(&cli).expect("load");
		assert_eq!(resolved.base_url, "http://from-cli/api");
		assert_eq!(resolved.start_mode, SearchMode::Exact);
	}

	#[test]
	fn invalid_file_values_name_their_key() {
		let file = write_config(
			r#"
[backend]
base_url = "ftp://search.example.com"
"#,
		);
		let path = file.path().to_string_lossy().into_owned();
		let cli = CliArgs::parse_from(["wordscope", "--no-config", "-c", &path]);

		let message = load(&cli).expect_err("ftp is rejected").to_string();
		assert!(message.contains("backend.base_url"), "{message}");
		assert!(message.contains("configuration key"), "{message}");
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let cli = CliArgs::parse_from([
			"wordscope",
			"--no-config",
			"-c",
			"/definitely/not/here/wordscope.toml",
		]);
		assert!(load(&cli).is_err());
	}
}
