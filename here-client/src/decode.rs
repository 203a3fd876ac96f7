//! Response decoding and error mapping.
//!
//! Every endpoint funnels its raw response through [`check_status`] before
//! looking at the body. Non-success statuses become [`HereError::Service`]
//! when the body carries a populated [`ApiError`], and
//! [`TransportError::Http`] otherwise.

use serde::de::DeserializeOwned;

use crate::transport::RawResponse;
use crate::{ApiError, HereError, TransportError};

/// Longest body excerpt copied into an HTTP error message.
const MESSAGE_EXCERPT_CHARS: usize = 256;

/// Reject non-success responses.
pub(crate) fn check_status(url: &str, response: &RawResponse) -> Result<(), HereError> {
    if response.is_success() {
        return Ok(());
    }

    if let Some(error) = decode_api_error(&response.body) {
        log::warn!(
            "HERE request to {url} failed with status {}: {error}",
            response.status
        );
        return Err(HereError::Service {
            url: url.to_owned(),
            status: response.status,
            error: Box::new(error),
        });
    }

    log::warn!(
        "HERE request to {url} failed with status {} and no error payload",
        response.status
    );
    Err(HereError::Transport(TransportError::Http {
        url: url.to_owned(),
        status: response.status,
        message: excerpt(&response.body),
    }))
}

/// Decode a body into `R`.
///
/// The status is not inspected; callers run [`check_status`] first.
pub(crate) fn decode_json<R: DeserializeOwned>(
    url: &str,
    response: &RawResponse,
) -> Result<R, HereError> {
    serde_json::from_slice(&response.body).map_err(|source| HereError::Decode {
        url: url.to_owned(),
        source,
    })
}

fn decode_api_error(body: &[u8]) -> Option<ApiError> {
    serde_json::from_slice::<ApiError>(body)
        .ok()
        .filter(ApiError::is_populated)
}

fn excerpt(body: &[u8]) -> String {
    String::from_utf8_lossy(body)
        .chars()
        .take(MESSAGE_EXCERPT_CHARS)
        .collect::<String>()
        .trim()
        .to_owned()
}
