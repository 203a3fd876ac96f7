//! Map image service backed by the map image `routing` endpoint.
//!
//! The endpoint renders a route between the first and last waypoint and
//! marks the intermediate waypoints as points of interest. The body is an
//! image, returned undecoded.

use here_core::{ImagesParams, QueryParams, Waypoint};

use crate::{Client, HereError, HttpTransport, Transport};

/// Endpoint path relative to the images base URL.
pub const IMAGES_PATH: &str = "routing";

/// Rendered map image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageResponse {
    /// `Content-Type` reported by the service, e.g. `image/png`.
    pub content_type: Option<String>,
    /// Encoded image.
    pub bytes: Vec<u8>,
}

/// Map image calls bound to a [`Client`].
#[derive(Debug)]
pub struct ImagesService<'a, T = HttpTransport> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> ImagesService<'a, T> {
    pub(crate) const fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Build image parameters using the client's API key.
    ///
    /// # Errors
    ///
    /// Returns [`HereError::InvalidArgument`] for fewer than two or more than
    /// [`MAX_IMAGE_WAYPOINTS`](here_core::MAX_IMAGE_WAYPOINTS) waypoints.
    pub fn create_params(&self, waypoints: &[Waypoint]) -> Result<ImagesParams, HereError> {
        Ok(ImagesParams::new(
            waypoints,
            self.client.config().api_key.clone(),
        )?)
    }

    /// Render a route image, blocking until the response arrives.
    ///
    /// # Errors
    ///
    /// See [`routing_async`](Self::routing_async).
    pub fn routing(&self, params: &ImagesParams) -> Result<ImageResponse, HereError> {
        self.client.block_on(self.routing_async(params))
    }

    /// Render a route image.
    ///
    /// # Errors
    ///
    /// Returns [`HereError::InvalidBaseUrl`] for an unusable base URL,
    /// [`HereError::Transport`] when the request fails or the status is an
    /// error without a payload and [`HereError::Service`] when the service
    /// returns an error payload.
    pub async fn routing_async(&self, params: &ImagesParams) -> Result<ImageResponse, HereError> {
        let (_, response) = self
            .client
            .get_raw(
                &self.client.config().images_base_url,
                IMAGES_PATH,
                &params.query_pairs(),
            )
            .await?;
        log::debug!(
            "received {} byte map image ({})",
            response.body.len(),
            response.content_type.as_deref().unwrap_or("unknown type")
        );
        Ok(ImageResponse {
            content_type: response.content_type,
            bytes: response.body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientConfig;
    use crate::test_support::StubTransport;
    use rstest::{fixture, rstest};

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

    #[fixture]
    fn waypoints() -> Vec<Waypoint> {
        vec![
            Waypoint::new(52.5, 13.4),
            Waypoint::new(52.51, 13.41).with_stop_over(60),
            Waypoint::new(52.52, 13.42),
        ]
    }

    fn client(transport: StubTransport) -> Client<StubTransport> {
        let config = ClientConfig::new("secret").with_images_base_url("http://images.test/mia/1.6/");
        Client::with_transport(config, transport)
    }

    #[rstest]
    fn routing_returns_image_bytes(waypoints: Vec<Waypoint>) {
        let client = client(StubTransport::with_bytes(200, "image/png", PNG_MAGIC.to_vec()));
        let images = client.images();
        let params = images.create_params(&waypoints).expect("params should build");

        let image = images.routing(&params).expect("image should render");

        assert_eq!(image.bytes, PNG_MAGIC);
        assert_eq!(image.content_type.as_deref(), Some("image/png"));
        let url = client.transport().last_request().expect("request recorded");
        assert_eq!(url.path(), "/mia/1.6/routing");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("poix0".to_owned(), "52.510000,13.410000;".to_owned())));
        assert!(pairs.contains(&("poithm".to_owned(), "0".to_owned())));
    }

    #[rstest]
    fn routing_maps_error_payload(waypoints: Vec<Waypoint>) {
        let body = r#"{"error": "Forbidden", "error_description": "These credentials do not authorize access"}"#;
        let client = client(StubTransport::with_json(403, body));
        let images = client.images();
        let params = images.create_params(&waypoints).expect("params should build");

        let err = images.routing(&params).expect_err("should fail");

        assert_eq!(err.status(), Some(403));
        assert!(matches!(err, HereError::Service { ref error, .. } if error.error == "Forbidden"));
    }

    #[rstest]
    fn create_params_rejects_single_waypoint() {
        let client = client(StubTransport::with_json(200, "{}"));
        let err = client
            .images()
            .create_params(&[Waypoint::new(0.0, 0.0)])
            .expect_err("should reject one waypoint");
        assert!(matches!(err, HereError::InvalidArgument(_)));
        assert!(client.transport().requests().is_empty());
    }
}
