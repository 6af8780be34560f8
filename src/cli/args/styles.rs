use std::fmt::Write;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};

use crate::app_dirs;
use crate::settings::DEFAULT_BASE_URL;

/// Produce the full version banner: where the config file is read from, where
/// the diagnostic log goes and which service is contacted by default.
pub(super) fn long_version() -> &'static str {
	Box::leak(version_details().into_boxed_str())
}

fn version_details() -> String {
	let config_file = match app_dirs::get_config_dir() {
		Ok(path) => path.join("config.toml").display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let log_file = match app_dirs::get_data_dir() {
		Ok(path) => path.join("wordscope.log").display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("wordscope {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config file: {config_file}");
	let _ = writeln!(details, "log file: {log_file}");
	let _ = writeln!(details, "default backend: {DEFAULT_BASE_URL}");
	let _ = writeln!(details, "log filter override: WORDSCOPE_LOG");
	details
}

/// Create the clap styles used for custom colour output.
pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn version_details_name_session_locations() {
		let details = version_details();
		assert!(details.starts_with(concat!("wordscope ", env!("CARGO_PKG_VERSION"))));
		assert!(details.contains("config file: "));
		assert!(details.contains("log file: "));
		assert!(details.contains("default backend: http://localhost:8080/api"));
	}
}
