//! Routing API response types for `calculateroute.json`.
//!
//! The types mirror the routing 7.2 JSON schema. Every field is optional on
//! the wire; missing fields take their default value and unknown fields are
//! ignored.
//!
//! See: <https://developer.here.com/documentation/routing/dev_guide/topics/resource-calculate-route.html>

use serde::Deserialize;

/// Top-level `calculateroute.json` body.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RoutingResponse {
    /// Response envelope.
    pub response: RouteEnvelope,
}

/// The `response` object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RouteEnvelope {
    /// Service and map versions.
    pub meta_info: MetaInfo,
    /// Calculated routes, best first.
    pub route: Vec<Route>,
    /// Language of the maneuver instructions.
    pub language: String,
}

/// Service and map versions used for the calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MetaInfo {
    /// Server timestamp in ISO 8601 form.
    pub timestamp: String,
    /// Map data version.
    pub map_version: String,
    /// Routing module version.
    pub module_version: String,
    /// Interface version.
    pub interface_version: String,
    /// Other map versions the service can route on.
    pub available_map_version: Vec<String>,
}

/// One calculated route.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Route {
    /// Waypoints as matched to the road network.
    pub waypoint: Vec<RouteWaypoint>,
    /// Mode the route was calculated for.
    pub mode: RouteModeInfo,
    /// Legs between consecutive waypoints.
    pub leg: Vec<Leg>,
    /// Route totals.
    pub summary: Summary,
}

/// A waypoint matched to the road network.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RouteWaypoint {
    /// Identifier of the matched link.
    pub link_id: String,
    /// Position on the road network.
    pub mapped_position: Position,
    /// Position as requested.
    pub original_position: Position,
    /// Waypoint kind, `stopOver` or `passThrough`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Relative position along the link, in `[0, 1]`.
    pub spot: f64,
    /// Side of the street, `left`, `right` or `neither`.
    pub side_of_street: String,
    /// Name of the matched road.
    pub mapped_road_name: String,
    /// Display label.
    pub label: String,
    /// Index into the route shape.
    pub shape_index: u32,
    /// Origin of the waypoint, usually `user`.
    pub source: String,
}

/// A WGS84 position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Position {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

/// Mode echoed back for a route.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RouteModeInfo {
    /// Routing type, e.g. `fastest`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Transport modes, e.g. `["truck"]`.
    pub transport_modes: Vec<String>,
    /// Traffic mode, e.g. `enabled`.
    pub traffic_mode: String,
    /// Route feature weightings, passed through undecoded.
    pub feature: Vec<serde_json::Value>,
}

/// Route section between two consecutive waypoints.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Leg {
    /// Leg start.
    pub start: RouteWaypoint,
    /// Leg end.
    pub end: RouteWaypoint,
    /// Length in metres.
    pub length: u64,
    /// Travel time in seconds.
    pub travel_time: u64,
    /// Turn-by-turn instructions.
    pub maneuver: Vec<Maneuver>,
}

/// A single turn-by-turn instruction.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Maneuver {
    /// Where the maneuver starts.
    pub position: Position,
    /// Instruction text, possibly containing HTML markup.
    pub instruction: String,
    /// Travel time in seconds.
    pub travel_time: u64,
    /// Length in metres.
    pub length: u64,
    /// Maneuver identifier.
    pub id: String,
    /// Schema type, e.g. `PrivateTransportManeuverType`.
    #[serde(rename = "_type")]
    pub type_name: String,
}

/// Totals for a route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Summary {
    /// Distance in metres.
    pub distance: u64,
    /// Travel time with traffic, in seconds.
    pub traffic_time: u64,
    /// Travel time without traffic, in seconds.
    pub base_time: u64,
    /// Route flags, e.g. `tollroad`.
    pub flags: Vec<String>,
    /// Human-readable summary.
    pub text: String,
    /// Travel time used for ranking, in seconds.
    pub travel_time: u64,
    /// Schema type, e.g. `RouteSummaryType`.
    #[serde(rename = "_type")]
    pub type_name: String,
}

impl RoutingResponse {
    /// The best route, if any was returned.
    #[must_use]
    pub fn best_route(&self) -> Option<&Route> {
        self.response.route.first()
    }
}

impl Route {
    /// Total number of maneuvers across all legs.
    #[must_use]
    pub fn maneuver_count(&self) -> usize {
        self.leg.iter().map(|leg| leg.maneuver.len()).sum()
    }
}
