//! Error types for orrery-request.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::data::STATUS_UNKNOWN_NETWORK_ERROR;

/// Failures of the crate's setup paths.
///
/// Fetch outcomes never surface here; a failed fetch is a finished request
/// carrying a status code (see [`FetchFailure`]).
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read config file '{path}': {source}")]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[cfg(feature = "reqwest")]
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Terminal failure reported by the host fetch primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FetchFailure {
    /// The host supplied an explicit, non-zero code.
    #[error("network error (status {0})")]
    Network(i32),

    /// The host failed without a usable code.
    #[error("network error without status code")]
    UnknownNetwork,
}

impl FetchFailure {
    /// Classify the code handed to an error continuation.
    ///
    /// A missing code and a zero code are both treated as unknown.
    pub fn from_host_code(code: Option<i32>) -> Self {
        match code {
            Some(code) if code != 0 => Self::Network(code),
            _ => Self::UnknownNetwork,
        }
    }

    /// The status code a finished request reports for this failure.
    pub fn status_code(&self) -> i32 {
        match self {
            Self::Network(code) => *code,
            Self::UnknownNetwork => STATUS_UNKNOWN_NETWORK_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_code_is_passed_through() {
        let failure = FetchFailure::from_host_code(Some(404));
        assert_eq!(failure, FetchFailure::Network(404));
        assert_eq!(failure.status_code(), 404);
    }

    #[test]
    fn missing_code_defaults_to_499() {
        assert_eq!(FetchFailure::from_host_code(None).status_code(), 499);
        assert_eq!(FetchFailure::from_host_code(Some(0)).status_code(), 499);
    }

    #[test]
    fn display_mentions_status() {
        assert_eq!(FetchFailure::Network(503).to_string(), "network error (status 503)");
    }
}
