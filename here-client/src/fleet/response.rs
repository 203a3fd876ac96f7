//! Waypoint sequence response types for `findsequence.json`.
//!
//! Missing fields take their default value and unknown fields are ignored.
//! Fields the service is known to send as `null` are modelled as `Option`.

use std::time::Duration;

use serde::Deserialize;

/// Top-level `findsequence.json` body.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FleetTelematicsResponse {
    /// Candidate sequences, best first.
    pub results: Vec<SequenceResult>,
    /// Request-level errors.
    pub errors: Vec<serde_json::Value>,
    /// Request-level warnings, passed through undecoded.
    pub warnings: Option<serde_json::Value>,
    /// Server processing time, e.g. `303ms`.
    pub processing_time_desc: String,
    /// Status code echoed in the body, e.g. `200`.
    pub response_code: String,
    /// Request identifier, when the service assigns one.
    pub request_id: Option<String>,
}

/// One optimised visiting order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SequenceResult {
    /// Waypoints in visiting order.
    pub waypoints: Vec<SequencedWaypoint>,
    /// Total distance in metres, as a decimal string.
    pub distance: String,
    /// Total time in seconds, as a decimal string.
    pub time: String,
    /// Hops between consecutive waypoints.
    pub interconnections: Vec<Interconnection>,
    /// Optimisation summary, e.g. `Targeted best time; without traffic`.
    pub description: String,
    /// Split of the total time.
    pub time_breakdown: TimeBreakdown,
}

/// A waypoint with its position in the sequence.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SequencedWaypoint {
    /// Request parameter name, e.g. `start` or `destination3`.
    pub id: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Zero-based position in the visiting order.
    pub sequence: u32,
    /// Estimated arrival, when a departure time was supplied.
    pub estimated_arrival: Option<String>,
    /// Estimated departure, when a departure time was supplied.
    pub estimated_departure: Option<String>,
    /// Constraints satisfied at this waypoint.
    pub fulfilled_constraints: Vec<String>,
}

/// A hop between two sequenced waypoints.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Interconnection {
    /// Id of the departure waypoint.
    pub from_waypoint: String,
    /// Id of the arrival waypoint.
    pub to_waypoint: String,
    /// Distance in metres.
    pub distance: f64,
    /// Time in seconds.
    pub time: f64,
    /// Rest time in seconds.
    pub rest: f64,
    /// Waiting time in seconds.
    pub waiting: f64,
}

/// Split of a sequence's total time, in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TimeBreakdown {
    /// Time spent driving.
    pub driving: u64,
    /// Time spent at waypoints.
    pub service: u64,
    /// Time spent resting.
    pub rest: u64,
    /// Time spent waiting.
    pub waiting: u64,
}

impl FleetTelematicsResponse {
    /// The best sequence, if any was returned.
    #[must_use]
    pub fn best_result(&self) -> Option<&SequenceResult> {
        self.results.first()
    }
}

impl SequenceResult {
    /// Total distance in metres, if `distance` is a whole number.
    #[must_use]
    pub fn distance_metres(&self) -> Option<u64> {
        self.distance.trim().parse().ok()
    }

    /// Total travel time, if `time` is a whole number of seconds.
    #[must_use]
    pub fn travel_time(&self) -> Option<Duration> {
        self.time.trim().parse().ok().map(Duration::from_secs)
    }

    /// Waypoint ids in visiting order.
    pub fn visiting_order(&self) -> impl Iterator<Item = &str> {
        let mut ordered: Vec<&SequencedWaypoint> = self.waypoints.iter().collect();
        ordered.sort_by_key(|waypoint| waypoint.sequence);
        ordered.into_iter().map(|waypoint| waypoint.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SEQUENCE_JSON: &str = r#"{
        "results": [{
            "waypoints": [
                {"id": "start", "lat": -25.643787, "lng": -49.158607, "sequence": 0, "estimatedArrival": null, "estimatedDeparture": null, "fulfilledConstraints": []},
                {"id": "destination2", "lat": -22.98319, "lng": -49.903282, "sequence": 2, "estimatedArrival": null, "estimatedDeparture": null, "fulfilledConstraints": []},
                {"id": "destination1", "lat": -25.644764, "lng": -49.158558, "sequence": 1, "estimatedArrival": null, "estimatedDeparture": null, "fulfilledConstraints": []},
                {"id": "end", "lat": -20.778591, "lng": -51.591198, "sequence": 3, "estimatedArrival": null, "estimatedDeparture": null, "fulfilledConstraints": []}
            ],
            "distance": "764398",
            "time": "31577",
            "interconnections": [
                {"fromWaypoint": "start", "toWaypoint": "destination1", "distance": 160.0, "time": 45.0, "rest": 0.0, "waiting": 0.0}
            ],
            "description": "Targeted best time; without traffic",
            "timeBreakdown": {"driving": 31577, "service": 0, "rest": 0, "waiting": 0}
        }],
        "errors": [],
        "warnings": null,
        "processingTimeDesc": "303ms",
        "responseCode": "200",
        "requestId": null
    }"#;

    #[rstest]
    fn deserialise_sequence() {
        let response: FleetTelematicsResponse =
            serde_json::from_str(SEQUENCE_JSON).expect("should deserialise");

        assert_eq!(response.response_code, "200");
        assert!(response.request_id.is_none());
        let result = response.best_result().expect("should have a result");
        assert_eq!(result.distance_metres(), Some(764_398));
        assert_eq!(result.travel_time(), Some(Duration::from_secs(31_577)));
        assert_eq!(result.time_breakdown.driving, 31_577);
        assert_eq!(result.interconnections.len(), 1);
        assert_eq!(
            result.visiting_order().collect::<Vec<_>>(),
            ["start", "destination1", "destination2", "end"]
        );
    }

    #[rstest]
    #[case("", None)]
    #[case("12.5", None)]
    #[case(" 42 ", Some(42))]
    fn distance_requires_whole_number(#[case] raw: &str, #[case] expected: Option<u64>) {
        let result = SequenceResult {
            distance: raw.to_owned(),
            ..SequenceResult::default()
        };
        assert_eq!(result.distance_metres(), expected);
    }

    #[rstest]
    fn routing_body_decodes_to_empty_sequence() {
        let json = r#"{"response": {"route": [], "language": "en-us"}}"#;
        let response: FleetTelematicsResponse =
            serde_json::from_str(json).expect("should deserialise");
        assert!(response.best_result().is_none());
    }
}
