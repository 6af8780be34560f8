use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{ModeArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `wordscope` binary.
#[derive(Parser, Debug)]
#[command(
    name = "wordscope",
    version,
    long_version = long_version(),
    about = "Terminal client for a word/index search service",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "WORDSCOPE_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'b',
        long = "base-url",
        value_name = "URL",
        help = "Base URL of the search service (default: http://localhost:8080/api)"
    )]
    pub(crate) base_url: Option<String>,
    #[arg(
        short = 'q',
        long = "query",
        value_name = "QUERY",
        help = "Search for this term as soon as the UI starts (default: empty)"
    )]
    pub(crate) initial_query: Option<String>,
    #[arg(
        short = 'm',
        long = "mode",
        value_enum,
        help = "Choose the initial search mode (default: exact)"
    )]
    pub(crate) mode: Option<ModeArg>,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: slate)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        long = "timeout",
        value_name = "SECS",
        help = "Give up on a request after this many seconds (default: no limit)"
    )]
    pub(crate) timeout_secs: Option<u64>,
    #[arg(
        long = "log-level",
        value_name = "FILTER",
        help = "Log filter directive such as `debug` or `wordscope_core=trace` (default: info)"
    )]
    pub(crate) log_level: Option<String>,
    #[arg(
        long = "log-file",
        value_name = "FILE",
        help = "Write logs to this file (default: wordscope.log in the data directory)"
    )]
    pub(crate) log_file: Option<PathBuf>,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'l',
        long = "list-themes",
        help = "List supported themes and exit (default: disabled)"
    )]
    pub(crate) list_themes: bool,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Choose how to print the session summary"
    )]
    pub(crate) output: OutputFormat,
}
