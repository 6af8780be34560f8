use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File};

use crate::app_dirs;
use crate::cli::CliArgs;

/// Prefix for environment overrides such as `WORDSCOPE__BACKEND__BASE_URL`.
pub(super) const ENV_PREFIX: &str = "WORDSCOPE";

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
    let mut builder = Config::builder();

    if !cli.no_config {
        for path in default_config_files() {
            builder = builder.add_source(File::from(path).required(false));
        }
    }

    for path in &cli.config {
        builder = builder.add_source(File::from(path.clone()).required(true));
    }

    builder = builder.add_source(
        config::Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true),
    );

    builder.build().map_err(|err| match err {
        ConfigError::Frozen => anyhow!("configuration builder is frozen"),
        other => other.into(),
    })
}

/// Discover the default configuration file locations that should be consulted,
/// lowest precedence first.
pub(super) fn default_config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(dir) = app_dirs::get_config_dir() {
        files.push(dir.join("config.toml"));
    }

    if let Ok(current_dir) = env::current_dir() {
        files.push(current_dir.join("wordscope.toml"));
        files.push(current_dir.join(".wordscope.toml"));
    }

    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_files_include_current_directory_variants() {
        let files = default_config_files();
        assert!(files.iter().any(|path| path.ends_with(".wordscope.toml")));
        assert!(files.iter().any(|path| path.ends_with("wordscope.toml")));
    }

    #[test]
    fn dotfile_outranks_plain_file() {
        let files = default_config_files();
        let plain = files.iter().position(|path| path.ends_with("wordscope.toml"));
        let dotfile = files.iter().position(|path| path.ends_with(".wordscope.toml"));
        assert!(plain < dotfile);
    }
}
