//! Routing service backed by `calculateroute.json`.
//!
//! ```no_run
//! use here_client::Client;
//! use here_core::{RouteMode, Waypoint};
//!
//! let client = Client::new("your-api-key")?;
//! let routing = client.routing();
//! let params = routing.create_params(
//!     &[
//!         Waypoint::new(-25.643787, -49.158607),
//!         Waypoint::new(-25.644764, -49.158558).with_stop_over(600),
//!         Waypoint::new(-20.778591, -51.591198),
//!     ],
//!     &[RouteMode::Fastest, RouteMode::Truck],
//! )?;
//! let response = routing.route(&params)?;
//! if let Some(route) = response.best_route() {
//!     println!("{} m", route.summary.distance);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod response;

use here_core::{QueryParams, RouteMode, RoutingParams, Waypoint};

use crate::{Client, HereError, HttpTransport, Transport};

pub use response::{
    Leg, Maneuver, MetaInfo, Position, Route, RouteEnvelope, RouteModeInfo, RouteWaypoint,
    RoutingResponse, Summary,
};

/// Endpoint path relative to the routing base URL.
pub const CALCULATE_ROUTE_PATH: &str = "calculateroute.json";

/// Routing calls bound to a [`Client`].
#[derive(Debug)]
pub struct RoutingService<'a, T = HttpTransport> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> RoutingService<'a, T> {
    pub(crate) const fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Build routing parameters using the client's API key.
    ///
    /// # Errors
    ///
    /// Returns [`HereError::InvalidArgument`] when more than
    /// [`MAX_ROUTING_WAYPOINTS`](here_core::MAX_ROUTING_WAYPOINTS) waypoints
    /// are supplied.
    pub fn create_params(
        &self,
        waypoints: &[Waypoint],
        modes: &[RouteMode],
    ) -> Result<RoutingParams, HereError> {
        Ok(RoutingParams::new(
            waypoints,
            self.client.config().api_key.clone(),
            modes,
        )?)
    }

    /// Calculate routes, blocking until the response arrives.
    ///
    /// # Errors
    ///
    /// See [`route_async`](Self::route_async).
    pub fn route(&self, params: &RoutingParams) -> Result<RoutingResponse, HereError> {
        self.client.block_on(self.route_async(params))
    }

    /// Calculate routes.
    ///
    /// # Errors
    ///
    /// Returns [`HereError::InvalidBaseUrl`] for an unusable base URL,
    /// [`HereError::Transport`] when the request fails or the status is an
    /// error without a payload, [`HereError::Service`] when the service
    /// returns an error payload and [`HereError::Decode`] for a malformed
    /// body.
    pub async fn route_async(&self, params: &RoutingParams) -> Result<RoutingResponse, HereError> {
        self.client
            .get_json(
                &self.client.config().routing_base_url,
                CALCULATE_ROUTE_PATH,
                &params.query_pairs(),
            )
            .await
    }
}
