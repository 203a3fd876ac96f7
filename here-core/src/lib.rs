//! Core request types for the HERE Maps client.
//!
//! The crate turns caller-supplied [`Waypoint`] values and [`RouteMode`]
//! flags into the flat, positional query parameters the HERE services
//! expect. Builders validate their input up front: the remote APIs address
//! waypoints by numbered field (`waypoint0`, `waypoint1`, ...), so every
//! parameter type has a fixed number of slots and rejects lists that do not
//! fit with a [`ParamError`].
//!
//! Nothing here performs I/O; `here-client` owns the transport.
//!
//! # Examples
//!
//! ```
//! use here_core::{QueryParams, RouteMode, RoutingParams, Waypoint};
//!
//! let waypoints = [
//!     Waypoint::new(52.5160, 13.3779),
//!     Waypoint::new(52.5206, 13.3862).with_stop_over(300),
//! ];
//! let params = RoutingParams::new(&waypoints, "secret", &[RouteMode::Fastest, RouteMode::Car])?;
//!
//! assert_eq!(params.waypoint(0), Some("52.516000,13.377900;"));
//! assert_eq!(params.waypoint(1), Some("stopOver,300!52.520600,13.386200;"));
//! assert_eq!(params.mode, "fastest;car");
//! assert!(params.query_pairs().iter().any(|(key, _)| key == "apikey"));
//! # Ok::<(), here_core::ParamError>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod mode;
pub mod params;
mod waypoint;

pub use error::ParamError;
pub use mode::{RouteMode, join_modes};
pub use params::{
    FleetTelematicsParams, ImagesParams, MAX_IMAGE_POIS, MAX_IMAGE_WAYPOINTS,
    MAX_ROUTING_WAYPOINTS, MAX_SEQUENCE_DESTINATIONS, QueryPairs, QueryParams, RoutingParams,
    Slots,
};
pub use waypoint::Waypoint;
