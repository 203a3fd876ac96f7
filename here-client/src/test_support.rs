//! Test utilities for HERE clients.
//!
//! This module provides [`StubTransport`], a deterministic test double for
//! [`Transport`] that returns a canned response without making HTTP
//! requests and records every URL it is asked to fetch.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use url::Url;

use crate::{RawResponse, Transport, TransportError};

/// Stub `Transport` for testing.
///
/// # Example
///
/// ```
/// use here_client::test_support::StubTransport;
/// use here_client::{Client, ClientConfig};
/// use here_core::{RouteMode, Waypoint};
///
/// let transport = StubTransport::with_json(200, r#"{"response": {"language": "en-us"}}"#);
/// let client = Client::with_transport(ClientConfig::new("key"), transport);
/// let routing = client.routing();
/// let params = routing.create_params(&[Waypoint::new(1.0, 2.0)], &[RouteMode::Fastest])?;
///
/// let response = routing.route(&params)?;
///
/// assert_eq!(response.response.language, "en-us");
/// assert_eq!(client.transport().requests().len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct StubTransport {
    response: Result<RawResponse, TransportError>,
    requests: Mutex<Vec<Url>>,
}

impl StubTransport {
    /// Create a transport answering every request with `response`.
    #[must_use]
    pub const fn new(response: Result<RawResponse, TransportError>) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answer with a JSON body and the given status.
    #[must_use]
    pub fn with_json(status: u16, body: &str) -> Self {
        Self::with_bytes(status, "application/json", body.as_bytes().to_vec())
    }

    /// Answer with raw bytes, a content type and the given status.
    #[must_use]
    pub fn with_bytes(status: u16, content_type: &str, body: Vec<u8>) -> Self {
        Self::new(Ok(RawResponse {
            status,
            content_type: Some(content_type.to_owned()),
            body,
        }))
    }

    /// Fail every request with `error`.
    #[must_use]
    pub const fn with_error(error: TransportError) -> Self {
        Self::new(Err(error))
    }

    /// URLs requested so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<Url> {
        self.recorded().clone()
    }

    /// The most recent requested URL.
    #[must_use]
    pub fn last_request(&self) -> Option<Url> {
        self.recorded().last().cloned()
    }

    fn recorded(&self) -> MutexGuard<'_, Vec<Url>> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn get(&self, url: &Url) -> Result<RawResponse, TransportError> {
        self.recorded().push(url.clone());
        self.response.clone()
    }
}
