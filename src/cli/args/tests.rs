use clap::{CommandFactory, FromArgMatches, Parser};

use super::options::ModeArg;
use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["wordscope"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.mode.is_none());
	assert!(!parsed.print_config);
}

#[test]
fn session_flags_are_parsed() {
	let parsed = CliArgs::parse_from([
		"wordscope",
		"-b",
		"http://search.local/api",
		"-q",
		"hello",
		"-m",
		"fuzzy",
		"--timeout",
		"5",
		"-o",
		"json",
	]);
	assert_eq!(parsed.base_url.as_deref(), Some("http://search.local/api"));
	assert_eq!(parsed.initial_query.as_deref(), Some("hello"));
	assert_eq!(parsed.mode, Some(ModeArg::Fuzzy));
	assert_eq!(parsed.timeout_secs, Some(5));
	assert_eq!(parsed.output, OutputFormat::Json);
}

#[test]
fn word_is_an_alias_for_exact() {
	let parsed = CliArgs::parse_from(["wordscope", "--mode", "word"]);
	assert_eq!(parsed.mode, Some(ModeArg::Exact));
}

#[test]
fn config_flag_can_repeat() {
	let parsed = CliArgs::parse_from(["wordscope", "-c", "a.toml", "--config", "b.toml"]);
	assert_eq!(parsed.config.len(), 2);
}
