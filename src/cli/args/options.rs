use clap::ValueEnum;

/// Search modes accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ModeArg {
    #[value(alias = "word")]
    Exact,
    Fuzzy,
    Prefix,
}

impl ModeArg {
    /// Return the string representation consumed by configuration loading.
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            ModeArg::Exact => "exact",
            ModeArg::Fuzzy => "fuzzy",
            ModeArg::Prefix => "prefix",
        }
    }
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Plain,
    Json,
}
