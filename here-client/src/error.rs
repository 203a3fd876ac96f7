//! Error types for the HERE client.
//!
//! Keep [`HereError`] small: every service call returns it, and the
//! workspace enables `clippy::result_large_err`. Large payloads are boxed.

use std::time::Duration;

use here_core::ParamError;
use thiserror::Error;

use crate::ApiError;

/// Errors from [`Client`](crate::Client) construction.
#[derive(Debug, Error)]
pub enum ClientBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Transport-level failures encountered while issuing a request.
///
/// URLs are recorded with the API key redacted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TransportError {
    /// The server answered with a non-success status and no recognisable
    /// error payload.
    #[error("request to {url} failed with status {status}: {message}")]
    Http {
        /// Request URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Leading part of the response body.
        message: String,
    },
    /// The request could not be completed.
    #[error("network error contacting {url}: {message}")]
    Network {
        /// Request URL.
        url: String,
        /// Description reported by the transport.
        message: String,
    },
    /// The request exceeded the configured timeout.
    #[error("request to {url} timed out after {timeout:?}")]
    Timeout {
        /// Request URL.
        url: String,
        /// Configured timeout.
        timeout: Duration,
    },
}

/// Errors returned by the HERE services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HereError {
    /// Caller-supplied input did not fit the endpoint's parameters.
    #[error("invalid request parameters: {0}")]
    InvalidArgument(#[from] ParamError),
    /// The configured base URL could not be parsed.
    #[error("invalid base URL {base_url:?}: {source}")]
    InvalidBaseUrl {
        /// Offending base URL.
        base_url: String,
        /// Parser error.
        #[source]
        source: url::ParseError,
    },
    /// The request failed before a usable response arrived.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The response body was not valid JSON for the expected schema.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        /// Request URL.
        url: String,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },
    /// The service rejected the request with a structured error payload.
    #[error("service rejected request to {url} with status {status}: {error}")]
    Service {
        /// Request URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Decoded error payload.
        error: Box<ApiError>,
    },
    /// A blocking call needed the client's own Tokio runtime and it could
    /// not be built.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

impl HereError {
    /// HTTP status associated with the error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Service { status, .. } | Self::Transport(TransportError::Http { status, .. }) => {
                Some(*status)
            }
            _ => None,
        }
    }
}
