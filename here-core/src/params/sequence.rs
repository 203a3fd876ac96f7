//! Parameters for the fleet telematics `findsequence` endpoint.

use super::{QueryPairs, QueryParams, Slots, ensure_finite, push_non_empty};
use crate::{ParamError, RouteMode, Waypoint, join_modes};

/// Number of positional destination fields (`destination1`..`destination10`).
pub const MAX_SEQUENCE_DESTINATIONS: usize = 10;

const ENDPOINT: &str = "fleet telematics";
const DEFAULT_DEPARTURE: &str = "now";

/// Query parameters for an optimal waypoint sequence request.
///
/// The service keeps `start` and `end` fixed and reorders the destinations
/// in between. Destination slots are numbered from one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetTelematicsParams {
    /// Encoded start waypoint, sent as `start`.
    pub start: String,
    destinations: Slots<MAX_SEQUENCE_DESTINATIONS>,
    /// Encoded end waypoint, sent as `end`.
    pub end: String,
    /// API key sent as `apikey`.
    pub api_key: String,
    /// `;`-joined route modes sent as `mode`.
    pub mode: String,
    /// Departure time sent as `departure`; `now` by default.
    pub departure: String,
}

impl FleetTelematicsParams {
    /// Build sequence parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::TooManyWaypoints`] when more than
    /// [`MAX_SEQUENCE_DESTINATIONS`] destinations are supplied and
    /// [`ParamError::NonFiniteCoordinate`] when a coordinate is NaN or
    /// infinite. The reported index counts `start` as zero, then the
    /// destinations, then `end`.
    pub fn new(
        start: &Waypoint,
        end: &Waypoint,
        destinations: &[Waypoint],
        api_key: impl Into<String>,
        modes: &[RouteMode],
    ) -> Result<Self, ParamError> {
        let slots = Slots::fill(ENDPOINT, destinations.iter().map(Waypoint::to_param))?;
        ensure_finite(
            ENDPOINT,
            std::iter::once(start).chain(destinations).chain(std::iter::once(end)),
        )?;
        Ok(Self {
            start: start.to_param(),
            destinations: slots,
            end: end.to_param(),
            api_key: api_key.into(),
            mode: join_modes(modes),
            departure: DEFAULT_DEPARTURE.to_owned(),
        })
    }

    /// Override the departure time.
    #[must_use]
    pub fn with_departure(mut self, departure: impl Into<String>) -> Self {
        self.departure = departure.into();
        self
    }

    /// Encoded destination at zero-based `index` (sent as `destination{index + 1}`).
    #[must_use]
    pub fn destination(&self, index: usize) -> Option<&str> {
        self.destinations.get(index)
    }

    /// All destination slots.
    #[must_use]
    pub const fn destinations(&self) -> &Slots<MAX_SEQUENCE_DESTINATIONS> {
        &self.destinations
    }
}

impl QueryParams for FleetTelematicsParams {
    fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_non_empty(&mut pairs, "start", &self.start);
        pairs.extend(
            self.destinations
                .pairs("destination", 1)
                .map(|(key, value)| (key, value.to_owned())),
        );
        push_non_empty(&mut pairs, "end", &self.end);
        push_non_empty(&mut pairs, "mode", &self.mode);
        push_non_empty(&mut pairs, "departure", &self.departure);
        push_non_empty(&mut pairs, "apikey", &self.api_key);
        pairs
    }
}
