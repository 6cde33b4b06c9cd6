use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Settings for the native HTTP host.
///
/// Every field has a default, so an empty document is a valid config.
///
/// # Examples
///
/// ```
/// use orrery_request::ClientConfig;
///
/// let config = ClientConfig::from_toml_str(r#"
///     user_agent = "orrery/0.1"
///     connect_timeout_secs = 10
/// "#).unwrap();
///
/// assert_eq!(config.user_agent.as_deref(), Some("orrery/0.1"));
/// assert_eq!(config.worker_threads, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Value of the `User-Agent` header. Default: the HTTP client's own.
    pub user_agent: Option<String>,

    /// Connection timeout in seconds. Default: none.
    pub connect_timeout_secs: Option<u64>,

    /// Worker threads of the runtime that performs the transfers.
    ///
    /// Default: 2
    pub worker_threads: usize,

    /// Honour `HTTP_PROXY` and friends from the environment.
    ///
    /// Default: true
    pub system_proxy: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: None,
            connect_timeout_secs: None,
            worker_threads: 2,
            system_proxy: true,
        }
    }
}

impl ClientConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = ClientConfig::from_toml_str("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.connect_timeout(), None);
        assert!(config.system_proxy);
    }

    #[test]
    fn timeout_is_converted_to_duration() {
        let config = ClientConfig::from_toml_str("connect_timeout_secs = 7").unwrap();
        assert_eq!(config.connect_timeout(), Some(Duration::from_secs(7)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ClientConfig::from_toml_str("max_in_flight = 64").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orrery.toml");
        std::fs::write(&path, "worker_threads = 4\n").unwrap();

        let config = ClientConfig::load(&path).unwrap();
        assert_eq!(config.worker_threads, 4);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ClientConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
    }
}
