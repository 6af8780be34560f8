use thiserror::Error;

use super::SettingSource;

/// A setting that parsed but cannot drive a session, such as a base URL the
/// search service cannot be reached at or a theme that is not built in.
///
/// The message names the key, the offending value and the layer it came from,
/// so `WORDSCOPE__BACKEND__BASE_URL=ftp://...` points at the environment
/// rather than at a config file.
#[derive(Debug, Error)]
#[error("invalid value for {key} from {origin}: {reason} (value: {value})")]
pub(crate) struct ConfigError {
    pub(crate) key: &'static str,
    pub(crate) value: String,
    pub(crate) origin: SettingSource,
    pub(crate) reason: String,
}

impl ConfigError {
    pub(crate) fn invalid(
        key: &'static str,
        value: impl Into<String>,
        origin: SettingSource,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            key,
            value: value.into(),
            origin,
            reason: reason.into(),
        }
    }
}
