//! Shared helpers for the service behaviour tests.

use std::cell::RefCell;

use here_client::test_support::StubTransport;
use here_client::{Client, ClientConfig};
use url::Url;

/// API key configured on every test client.
pub const API_KEY: &str = "demo-key";

/// Run `call` against a client backed by `transport`, recording the URLs it
/// requested into `sent`.
pub fn with_stub_client<R>(
    transport: StubTransport,
    sent: &RefCell<Vec<Url>>,
    call: impl FnOnce(&Client<StubTransport>) -> R,
) -> R {
    let config = ClientConfig::new(API_KEY).with_base_url("http://here.test/");
    let client = Client::with_transport(config, transport);
    let outcome = call(&client);
    *sent.borrow_mut() = client.transport().requests();
    outcome
}
