//! Parameters for the `calculateroute` endpoint.

use super::{QueryPairs, QueryParams, Slots, ensure_finite, push_non_empty};
use crate::{ParamError, RouteMode, Waypoint, join_modes};

/// Number of positional waypoint fields (`waypoint0`..`waypoint4`).
pub const MAX_ROUTING_WAYPOINTS: usize = 5;

const ENDPOINT: &str = "routing";
const DEFAULT_DEPARTURE: &str = "now";
const DEFAULT_ALTERNATIVES: u32 = 5;

/// Query parameters for a route calculation.
///
/// # Examples
///
/// ```
/// use here_core::{QueryParams, RouteMode, RoutingParams, Waypoint};
///
/// let waypoints = [Waypoint::new(52.5, 13.4), Waypoint::new(52.6, 13.5)];
/// let params = RoutingParams::new(&waypoints, "key", &[RouteMode::Fastest, RouteMode::Truck])?
///     .with_alternatives(0);
///
/// let keys: Vec<_> = params.query_pairs().into_iter().map(|(key, _)| key).collect();
/// assert_eq!(
///     keys,
///     ["waypoint0", "waypoint1", "apikey", "mode", "departure", "alternatives"],
/// );
/// # Ok::<(), here_core::ParamError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingParams {
    waypoints: Slots<MAX_ROUTING_WAYPOINTS>,
    /// API key sent as `apikey`.
    pub api_key: String,
    /// `;`-joined route modes sent as `mode`.
    pub mode: String,
    /// Departure time sent as `departure`; `now` by default.
    pub departure: String,
    /// Number of alternative routes requested.
    pub alternatives: u32,
}

impl RoutingParams {
    /// Build routing parameters from ordered waypoints.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::TooManyWaypoints`] when more than
    /// [`MAX_ROUTING_WAYPOINTS`] waypoints are supplied and
    /// [`ParamError::NonFiniteCoordinate`] when a coordinate is NaN or
    /// infinite.
    pub fn new(
        waypoints: &[Waypoint],
        api_key: impl Into<String>,
        modes: &[RouteMode],
    ) -> Result<Self, ParamError> {
        let slots = Slots::fill(ENDPOINT, waypoints.iter().map(Waypoint::to_param))?;
        ensure_finite(ENDPOINT, waypoints)?;
        Ok(Self {
            waypoints: slots,
            api_key: api_key.into(),
            mode: join_modes(modes),
            departure: DEFAULT_DEPARTURE.to_owned(),
            alternatives: DEFAULT_ALTERNATIVES,
        })
    }

    /// Override the departure time (an ISO 8601 timestamp or `now`).
    #[must_use]
    pub fn with_departure(mut self, departure: impl Into<String>) -> Self {
        self.departure = departure.into();
        self
    }

    /// Override the number of alternative routes.
    #[must_use]
    pub const fn with_alternatives(mut self, alternatives: u32) -> Self {
        self.alternatives = alternatives;
        self
    }

    /// Encoded waypoint in slot `index`.
    #[must_use]
    pub fn waypoint(&self, index: usize) -> Option<&str> {
        self.waypoints.get(index)
    }

    /// All waypoint slots.
    #[must_use]
    pub const fn waypoints(&self) -> &Slots<MAX_ROUTING_WAYPOINTS> {
        &self.waypoints
    }
}

impl QueryParams for RoutingParams {
    fn query_pairs(&self) -> QueryPairs {
        let mut pairs: QueryPairs = self
            .waypoints
            .pairs("waypoint", 0)
            .map(|(key, value)| (key, value.to_owned()))
            .collect();
        push_non_empty(&mut pairs, "apikey", &self.api_key);
        push_non_empty(&mut pairs, "mode", &self.mode);
        push_non_empty(&mut pairs, "departure", &self.departure);
        pairs.push(("alternatives".to_owned(), self.alternatives.to_string()));
        pairs
    }
}
