//! Geographic waypoints and their query-string encodings.

use geo::Coord;

/// A point along, or at the end of, a route.
///
/// The location follows the `geo` convention: `x` is the longitude and `y`
/// the latitude. HERE expects the opposite order on the wire, which
/// [`Waypoint::to_param`] takes care of.
///
/// # Examples
///
/// ```
/// use here_core::Waypoint;
///
/// let depot = Waypoint::new(-25.643787, -49.158607).with_label("Depot");
/// assert_eq!(depot.to_param(), "-25.643787,-49.158607;");
///
/// let drop = Waypoint::new(-22.98319, -49.903282).with_stop_over(600);
/// assert_eq!(drop.to_param(), "stopOver,600!-22.983190,-49.903282;");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    /// Geospatial position.
    pub location: Coord,
    /// Stop-over duration in seconds. Zero means the route passes through.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stop_over: u32,
    /// Display label.
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: String,
}

impl Waypoint {
    /// Create a pass-through waypoint with an empty label.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            location: Coord {
                x: longitude,
                y: latitude,
            },
            stop_over: 0,
            label: String::new(),
        }
    }

    /// Set the stop-over duration.
    #[must_use]
    pub const fn with_stop_over(mut self, stop_over: u32) -> Self {
        self.stop_over = stop_over;
        self
    }

    /// Set the display label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }

    /// Whether both coordinates are finite.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.location.x.is_finite() && self.location.y.is_finite()
    }

    /// Whether the route pauses at this waypoint.
    #[must_use]
    pub const fn is_stop_over(&self) -> bool {
        self.stop_over > 0
    }

    /// Encode as a routing waypoint: `lat,long;` or `stopOver,<n>!lat,long;`.
    #[must_use]
    pub fn to_param(&self) -> String {
        if self.is_stop_over() {
            format!("stopOver,{}!{}", self.stop_over, self.to_poi_param())
        } else {
            self.to_poi_param()
        }
    }

    /// Encode as a bare coordinate pair, `lat,long;`, ignoring the stop-over.
    #[must_use]
    pub fn to_poi_param(&self) -> String {
        format!("{:.6},{:.6};", self.latitude(), self.longitude())
    }
}
