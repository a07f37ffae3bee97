//! Error types for docgate.

use std::fmt;

use thiserror::Error;

/// Top-level result type for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Top-level error type for gateway operations.
///
/// Exactly two failure kinds cross the gateway boundary; both are
/// recoverable and are reported to the caller as values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error(transparent)]
    UnknownSite(#[from] UnknownSiteError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl GatewayError {
    /// Short machine-readable name of the error kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownSite(_) => "unknown_site",
            Self::Fetch(_) => "fetch_failed",
        }
    }
}

/// A site key outside the registered set was supplied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown site '{key}': valid sites are {}", .valid_keys.join(", "))]
pub struct UnknownSiteError {
    pub key: String,
    pub valid_keys: Vec<String>,
}

/// The fetch capability could not retrieve a locator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to fetch {locator}: {failure}")]
pub struct FetchError {
    pub locator: String,
    pub failure: FetchFailure,
}

impl FetchError {
    /// A non-success HTTP status.
    pub fn status(locator: impl Into<String>, code: u16) -> Self {
        Self {
            locator: locator.into(),
            failure: FetchFailure::Status(code),
        }
    }

    /// A network, request-construction, or body-decoding failure.
    pub fn transport(locator: impl Into<String>, cause: impl fmt::Display) -> Self {
        Self {
            locator: locator.into(),
            failure: FetchFailure::Transport(cause.to_string()),
        }
    }
}

/// Why a fetch failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    Status(u16),
    Transport(String),
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(code) => write!(f, "HTTP status {code}"),
            Self::Transport(cause) => f.write_str(cause),
        }
    }
}
