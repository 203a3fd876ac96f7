//! Query parameter builders for each HERE endpoint.
//!
//! HERE addresses waypoints by numbered field name (`waypoint0`, `poix3`,
//! `destination7`, ...). Each builder stores those values in a [`Slots`]
//! array of fixed capacity, indexed numerically, and emits them in a fixed
//! order from [`QueryParams::query_pairs`]. Input that does not fit the
//! available slots is rejected with
//! [`ParamError::TooManyWaypoints`](crate::ParamError::TooManyWaypoints).

mod images;
mod routing;
mod sequence;
mod slots;

pub use images::{ImagesParams, MAX_IMAGE_POIS, MAX_IMAGE_WAYPOINTS};
pub use routing::{MAX_ROUTING_WAYPOINTS, RoutingParams};
pub use sequence::{FleetTelematicsParams, MAX_SEQUENCE_DESTINATIONS};
pub use slots::Slots;

use crate::{ParamError, Waypoint};

/// Ordered `(name, value)` pairs ready for URL encoding.
pub type QueryPairs = Vec<(String, String)>;

/// A parameter set that can be rendered as a query string.
pub trait QueryParams {
    /// Return the populated fields in a fixed order.
    ///
    /// Empty positional slots and unset optional fields are omitted.
    fn query_pairs(&self) -> QueryPairs;
}

/// Reject the first waypoint with a NaN or infinite coordinate.
///
/// `index` in the error is the waypoint's position in `waypoints`.
fn ensure_finite<'a, I>(endpoint: &'static str, waypoints: I) -> Result<(), ParamError>
where
    I: IntoIterator<Item = &'a Waypoint>,
{
    waypoints
        .into_iter()
        .position(|waypoint| !waypoint.is_finite())
        .map_or(Ok(()), |index| {
            Err(ParamError::NonFiniteCoordinate { endpoint, index })
        })
}

/// Push `(name, value)` unless `value` is empty.
fn push_non_empty(pairs: &mut QueryPairs, name: &str, value: &str) {
    if !value.is_empty() {
        pairs.push((name.to_owned(), value.to_owned()));
    }
}

/// Push `(name, value)` when `value` is set.
fn push_optional<T: ToString>(pairs: &mut QueryPairs, name: &str, value: Option<&T>) {
    if let Some(inner) = value {
        pairs.push((name.to_owned(), inner.to_string()));
    }
}
