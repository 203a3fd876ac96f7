//! HTTP client for the HERE Maps routing, map image and waypoint sequence
//! services.
//!
//! A [`Client`] pairs a [`ClientConfig`] with a [`Transport`]. Each service
//! view turns caller input into `here-core` parameters, issues one GET and
//! decodes the response:
//!
//! | Service | Endpoint | Response |
//! |---|---|---|
//! | [`RoutingService`] | `calculateroute.json` | [`RoutingResponse`] |
//! | [`ImagesService`] | `routing` | [`ImageResponse`] |
//! | [`FleetTelematicsService`] | `findsequence.json` | [`FleetTelematicsResponse`] |
//!
//! Every failure is reported as a [`HereError`]. Request URLs are logged
//! through the `log` facade at debug level with the API key redacted.

#![forbid(unsafe_code)]

mod api_error;
mod client;
mod config;
mod decode;
mod error;
pub mod fleet;
pub mod images;
pub mod routing;
mod transport;

#[doc(hidden)]
pub mod test_support;

pub use api_error::{AdditionalData, ApiError};
pub use client::Client;
pub use config::{
    ClientConfig, DEFAULT_FLEET_BASE_URL, DEFAULT_IMAGES_BASE_URL, DEFAULT_ROUTING_BASE_URL,
    DEFAULT_USER_AGENT,
};
pub use error::{ClientBuildError, HereError, TransportError};
pub use fleet::{FleetTelematicsResponse, FleetTelematicsService};
pub use images::{ImageResponse, ImagesService};
pub use routing::{RoutingResponse, RoutingService};
pub use transport::{HttpTransport, RawResponse, Transport};
