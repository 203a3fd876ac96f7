//! Behavioural tests for the routing service.
//!
//! These tests use [`StubTransport`] to verify request building and error
//! mapping without contacting the HERE service.

use std::cell::RefCell;

use here_client::test_support::StubTransport;
use here_client::{HereError, RoutingResponse, TransportError};
use here_core::{RouteMode, Waypoint};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use url::Url;

mod support;

use support::{API_KEY, with_stub_client};

/// Result cell holding the outcome of a routing request.
type ResultCell = RefCell<Option<Result<RoutingResponse, HereError>>>;

/// Transport the scenario's client is built on.
#[fixture]
pub fn transport() -> RefCell<Option<StubTransport>> {
    RefCell::new(None)
}

/// Captures the outcome of the routing request.
#[fixture]
pub fn result() -> ResultCell {
    RefCell::new(None)
}

/// URLs the client requested.
#[fixture]
pub fn sent() -> RefCell<Vec<Url>> {
    RefCell::new(Vec::new())
}

fn three_waypoints() -> Vec<Waypoint> {
    vec![
        Waypoint::new(-25.643787, -49.158607),
        Waypoint::new(-22.98319, -49.903282).with_stop_over(900),
        Waypoint::new(-20.778591, -51.591198),
    ]
}

fn request_route(
    waypoints: &[Waypoint],
    transport: &RefCell<Option<StubTransport>>,
    result: &ResultCell,
    sent: &RefCell<Vec<Url>>,
) {
    let stub = transport
        .borrow_mut()
        .take()
        .expect("transport must be initialised");
    let outcome = with_stub_client(stub, sent, |client| {
        let routing = client.routing();
        let params = routing.create_params(waypoints, &[RouteMode::Fastest, RouteMode::Truck])?;
        routing.route(&params)
    });
    *result.borrow_mut() = Some(outcome);
}

// --- Given steps ---

#[given("a routing service returning a truck route")]
fn service_returns_route(#[from(transport)] transport: &RefCell<Option<StubTransport>>) {
    *transport.borrow_mut() = Some(StubTransport::with_json(
        200,
        include_str!("fixtures/routing_response.json"),
    ));
}

#[given("a routing service rejecting the request with no route found")]
fn service_rejects(#[from(transport)] transport: &RefCell<Option<StubTransport>>) {
    *transport.borrow_mut() = Some(StubTransport::with_json(
        400,
        include_str!("fixtures/routing_error.json"),
    ));
}

#[given("a routing service returning a truncated body")]
fn service_truncates(#[from(transport)] transport: &RefCell<Option<StubTransport>>) {
    *transport.borrow_mut() = Some(StubTransport::with_json(200, r#"{"response": {"route": ["#));
}

#[given("a routing service failing with a bare bad gateway")]
fn service_bad_gateway(#[from(transport)] transport: &RefCell<Option<StubTransport>>) {
    *transport.borrow_mut() = Some(StubTransport::with_bytes(
        502,
        "text/html",
        b"<html><body>Bad Gateway</body></html>".to_vec(),
    ));
}

// --- When steps ---

#[when("I request a fastest truck route between three waypoints")]
fn request_three(
    #[from(transport)] transport: &RefCell<Option<StubTransport>>,
    #[from(result)] result: &ResultCell,
    #[from(sent)] sent: &RefCell<Vec<Url>>,
) {
    request_route(&three_waypoints(), transport, result, sent);
}

#[when("I request a route between six waypoints")]
fn request_six(
    #[from(transport)] transport: &RefCell<Option<StubTransport>>,
    #[from(result)] result: &ResultCell,
    #[from(sent)] sent: &RefCell<Vec<Url>>,
) {
    let waypoints = vec![Waypoint::new(51.5, -0.1); 6];
    request_route(&waypoints, transport, result, sent);
}

// --- Then steps ---

#[then("the route summary reports 764398 metres")]
fn summary_distance(#[from(result)] result: &ResultCell) {
    let borrowed = result.borrow();
    let response = match borrowed.as_ref() {
        Some(Ok(response)) => response,
        other => panic!("expected a route, got {other:?}"),
    };
    let route = response.best_route().expect("expected a route");
    assert_eq!(route.summary.distance, 764_398);
    assert_eq!(route.mode.transport_modes, ["truck"]);
    assert_eq!(route.maneuver_count(), 2);
}

#[then("the request carries the waypoints in order")]
fn waypoints_in_order(#[from(sent)] sent: &RefCell<Vec<Url>>) {
    let urls = sent.borrow();
    let url = urls.first().expect("expected one request");
    assert_eq!(url.path(), "/calculateroute.json");
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    let expected_pairs = [
        ("waypoint0", "-25.643787,-49.158607;"),
        ("waypoint1", "stopOver,900!-22.983190,-49.903282;"),
        ("waypoint2", "-20.778591,-51.591198;"),
        ("apikey", API_KEY),
        ("mode", "fastest;truck"),
        ("departure", "now"),
        ("alternatives", "5"),
    ];
    let expected: Vec<(String, String)> = expected_pairs
        .iter()
        .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
        .collect();
    assert_eq!(pairs, expected);
}

#[then("a service error with status 400 and subtype NoRouteFound is returned")]
fn service_error(#[from(result)] result: &ResultCell) {
    let borrowed = result.borrow();
    match borrowed.as_ref() {
        Some(Err(HereError::Service { status, error, url })) => {
            assert_eq!(*status, 400);
            assert_eq!(error.subtype, "NoRouteFound");
            assert!(!url.contains(API_KEY), "API key leaked into {url}");
        }
        other => panic!("expected a service error, got {other:?}"),
    }
}

#[then("a decode error is returned")]
fn decode_error(#[from(result)] result: &ResultCell) {
    let borrowed = result.borrow();
    assert!(
        matches!(borrowed.as_ref(), Some(Err(HereError::Decode { .. }))),
        "expected a decode error, got {borrowed:?}"
    );
}

#[then("an HTTP error with status 502 is returned")]
fn http_error(#[from(result)] result: &ResultCell) {
    let borrowed = result.borrow();
    assert!(
        matches!(
            borrowed.as_ref(),
            Some(Err(HereError::Transport(TransportError::Http { status: 502, .. })))
        ),
        "expected an HTTP error, got {borrowed:?}"
    );
}

#[then("an invalid argument error is returned")]
fn invalid_argument(#[from(result)] result: &ResultCell) {
    let borrowed = result.borrow();
    assert!(
        matches!(borrowed.as_ref(), Some(Err(HereError::InvalidArgument(_)))),
        "expected an invalid argument error, got {borrowed:?}"
    );
}

#[then("no request is sent")]
fn nothing_sent(#[from(sent)] sent: &RefCell<Vec<Url>>) {
    assert!(sent.borrow().is_empty());
}

// --- Scenario registrations ---

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/routing_service.feature", name = $title)]
        fn $fn_name(
            transport: RefCell<Option<StubTransport>>,
            result: ResultCell,
            sent: RefCell<Vec<Url>>,
        ) {
            let _ = (transport, result, sent);
        }
    };
}

register_scenario!(decoding_route, "decoding a calculated route");
register_scenario!(surfacing_error_payload, "surfacing a routing error payload");
register_scenario!(rejecting_malformed_body, "rejecting a malformed route body");
register_scenario!(reporting_gateway_failure, "reporting a gateway failure");
register_scenario!(
    rejecting_overflow,
    "rejecting too many waypoints before sending"
);
