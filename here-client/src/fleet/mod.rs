//! Fleet telematics waypoint sequencing backed by `findsequence.json`.
//!
//! Given a fixed start and end, the service reorders up to
//! [`MAX_SEQUENCE_DESTINATIONS`](here_core::MAX_SEQUENCE_DESTINATIONS)
//! intermediate destinations into the cheapest visiting order.

mod response;

use here_core::{FleetTelematicsParams, QueryParams, RouteMode, Waypoint};

use crate::{Client, HereError, HttpTransport, Transport};

pub use response::{
    FleetTelematicsResponse, Interconnection, SequenceResult, SequencedWaypoint, TimeBreakdown,
};

/// Endpoint path relative to the fleet base URL.
pub const FIND_SEQUENCE_PATH: &str = "findsequence.json";

/// Waypoint sequencing calls bound to a [`Client`].
#[derive(Debug)]
pub struct FleetTelematicsService<'a, T = HttpTransport> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> FleetTelematicsService<'a, T> {
    pub(crate) const fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Build sequence parameters using the client's API key.
    ///
    /// # Errors
    ///
    /// Returns [`HereError::InvalidArgument`] when more than
    /// [`MAX_SEQUENCE_DESTINATIONS`](here_core::MAX_SEQUENCE_DESTINATIONS)
    /// destinations are supplied.
    pub fn create_params(
        &self,
        start: &Waypoint,
        end: &Waypoint,
        destinations: &[Waypoint],
        modes: &[RouteMode],
    ) -> Result<FleetTelematicsParams, HereError> {
        Ok(FleetTelematicsParams::new(
            start,
            end,
            destinations,
            self.client.config().api_key.clone(),
            modes,
        )?)
    }

    /// Find the best visiting order, blocking until the response arrives.
    ///
    /// # Errors
    ///
    /// See [`find_sequence_async`](Self::find_sequence_async).
    pub fn find_sequence(
        &self,
        params: &FleetTelematicsParams,
    ) -> Result<FleetTelematicsResponse, HereError> {
        self.client.block_on(self.find_sequence_async(params))
    }

    /// Find the best visiting order.
    ///
    /// # Errors
    ///
    /// Returns [`HereError::InvalidBaseUrl`] for an unusable base URL,
    /// [`HereError::Transport`] when the request fails or the status is an
    /// error without a payload, [`HereError::Service`] when the service
    /// returns an error payload and [`HereError::Decode`] for a malformed
    /// body.
    pub async fn find_sequence_async(
        &self,
        params: &FleetTelematicsParams,
    ) -> Result<FleetTelematicsResponse, HereError> {
        self.client
            .get_json(
                &self.client.config().fleet_base_url,
                FIND_SEQUENCE_PATH,
                &params.query_pairs(),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientConfig;
    use crate::test_support::StubTransport;
    use rstest::rstest;

    fn client(transport: StubTransport) -> Client<StubTransport> {
        let config = ClientConfig::new("secret").with_fleet_base_url("http://fleet.test/2");
        Client::with_transport(config, transport)
    }

    #[rstest]
    fn find_sequence_requests_named_slots() {
        let client = client(StubTransport::with_json(200, r#"{"responseCode": "200"}"#));
        let fleet = client.fleet_telematics();
        let params = fleet
            .create_params(
                &Waypoint::new(1.0, 2.0).with_label("Start"),
                &Waypoint::new(5.0, 6.0),
                &[Waypoint::new(3.0, 4.0)],
                &[RouteMode::Fastest, RouteMode::Truck],
            )
            .expect("params should build");

        let response = fleet.find_sequence(&params).expect("sequence should succeed");

        assert_eq!(response.response_code, "200");
        let url = client.transport().last_request().expect("request recorded");
        assert_eq!(url.path(), "/2/findsequence.json");
        let keys: Vec<String> = url.query_pairs().map(|(key, _)| key.into_owned()).collect();
        assert_eq!(
            keys,
            ["start", "destination1", "end", "mode", "departure", "apikey"]
        );
    }

    #[rstest]
    fn find_sequence_rejects_eleven_destinations() {
        let client = client(StubTransport::with_json(200, "{}"));
        let destinations = vec![Waypoint::new(0.0, 0.0); 11];
        let err = client
            .fleet_telematics()
            .create_params(
                &Waypoint::new(1.0, 1.0),
                &Waypoint::new(2.0, 2.0),
                &destinations,
                &[RouteMode::Fastest],
            )
            .expect_err("should reject eleven destinations");
        assert!(matches!(err, HereError::InvalidArgument(_)));
    }

    #[rstest]
    fn find_sequence_maps_malformed_body() {
        let client = client(StubTransport::with_json(200, "<html>"));
        let fleet = client.fleet_telematics();
        let params = fleet
            .create_params(&Waypoint::new(1.0, 1.0), &Waypoint::new(2.0, 2.0), &[], &[])
            .expect("params should build");

        let err = fleet.find_sequence(&params).expect_err("should fail");

        assert!(matches!(err, HereError::Decode { ref url, .. } if url.contains("apikey=REDACTED")));
    }
}
