//! Diagnostic logging for the interactive session.
//!
//! The terminal belongs to the UI while a session runs, so events go to a log
//! file instead of stderr.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;
use crate::settings::ResolvedConfig;

/// Environment variable holding a full `EnvFilter` directive.
const LOG_ENV: &str = "WORDSCOPE_LOG";
const LOG_FILE_NAME: &str = "wordscope.log";

/// Install the global subscriber and return the file it writes to.
///
/// Failing to open the log file is reported on stderr and leaves logging
/// disabled rather than aborting the session.
pub(crate) fn initialize(config: &ResolvedConfig) -> Option<PathBuf> {
	let path = match log_path(config) {
		Ok(path) => path,
		Err(err) => {
			eprintln!("wordscope: logging disabled: {err:#}");
			return None;
		}
	};

	let file = match open_log_file(&path) {
		Ok(file) => file,
		Err(err) => {
			eprintln!("wordscope: logging disabled: {err:#}");
			return None;
		}
	};

	let installed = tracing_subscriber::fmt()
		.with_env_filter(filter(&config.log_level))
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.with_target(true)
		.try_init();

	match installed {
		Ok(()) => {
			tracing::info!(path = %path.display(), "logging initialised");
			Some(path)
		}
		Err(err) => {
			eprintln!("wordscope: logging disabled: {err}");
			None
		}
	}
}

/// `WORDSCOPE_LOG` wins over the configured level.
fn filter(level: &str) -> EnvFilter {
	EnvFilter::try_from_env(LOG_ENV)
		.or_else(|_| EnvFilter::try_new(level))
		.unwrap_or_else(|_| EnvFilter::new("info"))
}

fn log_path(config: &ResolvedConfig) -> Result<PathBuf> {
	if let Some(file) = &config.log_file {
		return Ok(file.clone());
	}
	Ok(app_dirs::get_data_dir()?.join(LOG_FILE_NAME))
}

fn open_log_file(path: &Path) -> Result<File> {
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create {}", parent.display()))?;
	}
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open {}", path.display()))
}
