mod app_dirs;
mod cli;
mod logging;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in wordscope_tui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	logging::initialize(&resolved);

	run_session(cli.output, resolved)
}

/// Execute the interactive session and print its summary in the chosen format.
fn run_session(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = SearchWorkflow::from_config(settings)?;
	let summary = workflow.run()?;
	tracing::info!(
		searches = summary.searches,
		actions = summary.actions.len(),
		"session finished"
	);

	match format {
		OutputFormat::Plain => print_plain(&summary),
		OutputFormat::Json => print_json(&summary)?,
	}

	Ok(())
}
