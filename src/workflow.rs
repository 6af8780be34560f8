use std::time::Duration;

use anyhow::{Context, Result};
use wordscope_core::{HttpBackend, SearchClient};
use wordscope_tui::{App, SessionSummary};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive search session.
pub(crate) struct SearchWorkflow {
    app: App<'static>,
}

impl SearchWorkflow {
    pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
        let ResolvedConfig {
            base_url,
            timeout_secs,
            initial_query,
            start_mode,
            theme,
            ..
        } = config;

        let backend = HttpBackend::with_timeout(&base_url, timeout_secs.map(Duration::from_secs))
            .with_context(|| format!("failed to set up a client for {base_url}"))?;
        tracing::info!(base_url = %backend.endpoints().base(), "starting session");

        let mut app = App::new(SearchClient::new(backend)).with_query(initial_query, start_mode);
        if let Some(theme) = theme.as_deref().and_then(wordscope_tui::style::by_name) {
            app = app.with_theme(theme);
        }

        Ok(Self { app })
    }

    pub(crate) fn run(self) -> Result<SessionSummary> {
        wordscope_tui::run(self.app)
    }
}
