//! HTTP transport seam.
//!
//! [`Transport`] is the only place network I/O happens. [`HttpTransport`]
//! implements it with `reqwest`; tests substitute
//! [`StubTransport`](crate::test_support::StubTransport).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::{ClientBuildError, ClientConfig, TransportError};

/// Query parameter carrying the API key.
pub(crate) const API_KEY_PARAM: &str = "apikey";

const REDACTED: &str = "REDACTED";

/// Status, content type and body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// `Content-Type` header, when present.
    pub content_type: Option<String>,
    /// Response body.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issue GET requests on behalf of the client.
///
/// Implementations return every response that arrives, whatever its status;
/// interpreting error statuses is left to the caller. The returned future is
/// `Send`, so service calls can be spawned onto a multi-threaded runtime.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch `url`.
    async fn get(&self, url: &Url) -> Result<RawResponse, TransportError>;
}

/// `reqwest`-backed [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: HttpClient,
    timeout: Duration,
}

impl HttpTransport {
    /// Build a transport honouring the configured timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`ClientBuildError::HttpClient`] if the HTTP client fails to
    /// build.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientBuildError> {
        let client = HttpClient::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ClientBuildError::HttpClient)?;
        Ok(Self {
            client,
            timeout: config.timeout,
        })
    }

    /// Convert a reqwest error to a `TransportError`.
    ///
    /// The reqwest message would otherwise embed the unredacted URL.
    fn convert_reqwest_error(&self, error: reqwest::Error, url: &Url) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout {
                url: redact(url),
                timeout: self.timeout,
            };
        }

        TransportError::Network {
            url: redact(url),
            message: error.without_url().to_string(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<RawResponse, TransportError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(err, url))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response
            .bytes()
            .await
            .map_err(|err| self.convert_reqwest_error(err, url))?;

        Ok(RawResponse {
            status,
            content_type,
            body: body.to_vec(),
        })
    }
}

/// Render `url` with the API key replaced, for logs and error messages.
pub(crate) fn redact(url: &Url) -> String {
    if !url.query_pairs().any(|(key, _)| key == API_KEY_PARAM) {
        return url.to_string();
    }
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let shown = if key == API_KEY_PARAM {
                REDACTED.to_owned()
            } else {
                value.into_owned()
            };
            (key.into_owned(), shown)
        })
        .collect();
    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
