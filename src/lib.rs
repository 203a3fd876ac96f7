//! Facade crate for the HERE Maps client.
//!
//! This crate re-exports the request types from `here-core` and the client,
//! services and response types from `here-client`.
//!
//! ```no_run
//! use here_maps::{Client, RouteMode, Waypoint};
//!
//! let client = Client::new("your-api-key")?;
//! let fleet = client.fleet_telematics();
//! let params = fleet.create_params(
//!     &Waypoint::new(-25.643787, -49.158607),
//!     &Waypoint::new(-20.778591, -51.591198),
//!     &[Waypoint::new(-22.98319, -49.903282)],
//!     &[RouteMode::Fastest, RouteMode::Truck],
//! )?;
//! let sequence = fleet.find_sequence(&params)?;
//! println!("{:?}", sequence.best_result().map(|best| &best.distance));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

pub use here_core::{
    FleetTelematicsParams, ImagesParams, MAX_IMAGE_POIS, MAX_IMAGE_WAYPOINTS,
    MAX_ROUTING_WAYPOINTS, MAX_SEQUENCE_DESTINATIONS, ParamError, QueryParams, RouteMode,
    RoutingParams, Waypoint, join_modes,
};

pub use here_client::{
    ApiError, Client, ClientBuildError, ClientConfig, FleetTelematicsResponse,
    FleetTelematicsService, HereError, HttpTransport, ImageResponse, ImagesService, RawResponse,
    RoutingResponse, RoutingService, Transport, TransportError,
};

pub use here_client::{fleet, images, routing};
