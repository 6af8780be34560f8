use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	print!("{}", format_summary(config));
}

fn format_summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	let _ = writeln!(out, "  Base URL: {}", config.base_url);
	match config.timeout_secs {
		Some(secs) => {
			let _ = writeln!(out, "  Request timeout: {secs}s");
		}
		None => {
			let _ = writeln!(out, "  Request timeout: (client default)");
		}
	}
	let _ = writeln!(out, "  Start mode: {}", config.start_mode);
	let _ = writeln!(
		out,
		"  UI theme: {}",
		config
			.theme
			.as_deref()
			.unwrap_or("(use the library default)")
	);
	if !config.initial_query.is_empty() {
		let _ = writeln!(out, "  Initial query: {}", config.initial_query);
	}
	let _ = writeln!(out, "  Log level: {}", config.log_level);
	if let Some(file) = &config.log_file {
		let _ = writeln!(out, "  Log file: {}", file.display());
	}
	out
}
