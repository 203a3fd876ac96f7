//! Routing mode flags.

use std::fmt;
use std::str::FromStr;

use crate::ParamError;

/// A routing preference understood by the HERE routing and sequence APIs.
///
/// The service takes a `;`-separated list combining a routing type, a
/// transport mode and optionally a traffic mode. Use [`join_modes`] to build
/// that list.
///
/// # Examples
///
/// ```
/// use here_core::RouteMode;
///
/// let mode: RouteMode = "carHOV".parse()?;
/// assert_eq!(mode, RouteMode::CarHov);
/// assert_eq!(RouteMode::TrafficEnabled.to_string(), "traffic:enabled");
/// # Ok::<(), here_core::ParamError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteMode {
    /// Minimise travel time.
    Fastest,
    /// Minimise distance.
    Shortest,
    /// Trade off travel time against distance.
    Balanced,
    /// Passenger car.
    Car,
    /// Walking.
    Pedestrian,
    /// High-occupancy vehicle.
    CarHov,
    /// Public transport ignoring timetables.
    PublicTransport,
    /// Public transport using timetables.
    PublicTransportTimeTable,
    /// Truck.
    Truck,
    /// Bicycle.
    Bicycle,
    /// Account for live traffic.
    TrafficEnabled,
    /// Ignore traffic.
    TrafficDisabled,
    /// Let the service decide whether to use traffic.
    TrafficDefault,
}

impl RouteMode {
    /// Every mode, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::Fastest,
        Self::Shortest,
        Self::Balanced,
        Self::Car,
        Self::Pedestrian,
        Self::CarHov,
        Self::PublicTransport,
        Self::PublicTransportTimeTable,
        Self::Truck,
        Self::Bicycle,
        Self::TrafficEnabled,
        Self::TrafficDisabled,
        Self::TrafficDefault,
    ];

    /// The token sent on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fastest => "fastest",
            Self::Shortest => "shortest",
            Self::Balanced => "balanced",
            Self::Car => "car",
            Self::Pedestrian => "pedestrian",
            Self::CarHov => "carHOV",
            Self::PublicTransport => "publicTransport",
            Self::PublicTransportTimeTable => "publicTransportTimeTable",
            Self::Truck => "truck",
            Self::Bicycle => "bicycle",
            Self::TrafficEnabled => "traffic:enabled",
            Self::TrafficDisabled => "traffic:disabled",
            Self::TrafficDefault => "traffic:default",
        }
    }
}

impl fmt::Display for RouteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteMode {
    type Err = ParamError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == token)
            .ok_or_else(|| ParamError::UnknownRouteMode {
                token: token.to_owned(),
            })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RouteMode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RouteMode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = <String as serde::Deserialize>::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}

/// Join modes into the `mode` query value, e.g. `fastest;truck`.
///
/// An empty slice yields an empty string.
#[must_use]
pub fn join_modes(modes: &[RouteMode]) -> String {
    modes
        .iter()
        .map(|mode| mode.as_str())
        .collect::<Vec<_>>()
        .join(";")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[RouteMode::Fastest, RouteMode::Truck], "fastest;truck")]
    #[case(&[RouteMode::Shortest], "shortest")]
    #[case(
        &[RouteMode::Fastest, RouteMode::Car, RouteMode::TrafficDisabled],
        "fastest;car;traffic:disabled"
    )]
    #[case(&[], "")]
    fn join_has_no_trailing_separator(#[case] modes: &[RouteMode], #[case] expected: &str) {
        assert_eq!(join_modes(modes), expected);
    }

    #[rstest]
    fn every_token_parses_back() {
        for mode in RouteMode::ALL {
            let parsed: RouteMode = mode.as_str().parse().expect("token should parse");
            assert_eq!(parsed, mode);
        }
    }

    #[rstest]
    fn unknown_token_is_rejected() {
        let err = "hovercraft".parse::<RouteMode>().expect_err("should fail");
        assert_eq!(
            err,
            ParamError::UnknownRouteMode {
                token: "hovercraft".to_owned()
            }
        );
    }

    #[rstest]
    fn tokens_are_case_sensitive() {
        assert!("Fastest".parse::<RouteMode>().is_err());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn serde_uses_wire_tokens() {
        let json = serde_json::to_string(&[RouteMode::CarHov, RouteMode::TrafficDefault])
            .expect("should serialise");
        assert_eq!(json, r#"["carHOV","traffic:default"]"#);

        let modes: Vec<RouteMode> =
            serde_json::from_str(r#"["truck","fastest"]"#).expect("should deserialise");
        assert_eq!(modes, vec![RouteMode::Truck, RouteMode::Fastest]);
    }
}
