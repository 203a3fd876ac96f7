//! Errors raised while building request parameters.

use thiserror::Error;

/// Invalid input supplied to a parameter builder.
///
/// These are raised before any request is made; nothing is sent to the
/// service when a builder fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// More waypoints were supplied than the endpoint has positional fields.
    #[error("{endpoint} accepts at most {max} waypoints, got {actual}")]
    TooManyWaypoints {
        /// Endpoint whose parameters were being built.
        endpoint: &'static str,
        /// Number of positional fields available.
        max: usize,
        /// Number of waypoints supplied.
        actual: usize,
    },
    /// Fewer waypoints were supplied than the endpoint requires.
    #[error("{endpoint} requires at least {min} waypoints, got {actual}")]
    NotEnoughWaypoints {
        /// Endpoint whose parameters were being built.
        endpoint: &'static str,
        /// Minimum number of waypoints.
        min: usize,
        /// Number of waypoints supplied.
        actual: usize,
    },
    /// A waypoint's latitude or longitude was NaN or infinite.
    #[error("{endpoint} waypoint {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Endpoint whose parameters were being built.
        endpoint: &'static str,
        /// Position of the offending waypoint in the supplied list.
        index: usize,
    },
    /// A route mode token did not match any known mode.
    #[error("unknown route mode {token:?}")]
    UnknownRouteMode {
        /// The token that failed to parse.
        token: String,
    },
}
