use std::fmt::Write;

use anyhow::Result;
use wordscope_tui::SessionSummary;

/// Render a plain-text representation of the session summary.
pub(crate) fn format_plain(summary: &SessionSummary) -> String {
	let mut out = String::new();
	if summary.query.is_empty() {
		let _ = writeln!(out, "No query ({} mode)", mode_name(summary));
	} else {
		let _ = writeln!(
			out,
			"Query: {} ({} mode, {} searches sent)",
			summary.query,
			mode_name(summary),
			summary.searches
		);
	}

	if summary.results.is_empty() {
		let _ = writeln!(out, "No results");
	}
	for result in &summary.results {
		let _ = write!(out, "{}", result.word);
		if !result.metadata.is_empty() {
			let _ = write!(out, "\t{}", result.metadata);
		}
		if !result.related_words.is_empty() {
			let _ = write!(out, "\trelated: {}", result.related_words.join(", "));
		}
		let _ = writeln!(out);
	}

	for record in &summary.actions {
		let status = if record.outcome.is_success() {
			"ok"
		} else {
			"failed"
		};
		let _ = writeln!(
			out,
			"{} [{status}]: {}",
			record.action, record.outcome.message
		);
	}
	out
}

fn mode_name(summary: &SessionSummary) -> String {
	summary.mode.label().to_ascii_lowercase()
}

/// Print a plain-text representation of the session summary.
pub(crate) fn print_plain(summary: &SessionSummary) {
	print!("{}", format_plain(summary));
}

/// Format the session summary as a JSON string.
pub(crate) fn format_summary_json(summary: &SessionSummary) -> Result<String> {
	Ok(serde_json::to_string_pretty(summary)?)
}

/// Print the JSON representation of the session summary.
pub(crate) fn print_json(summary: &SessionSummary) -> Result<()> {
	println!("{}", format_summary_json(summary)?);
	Ok(())
}
