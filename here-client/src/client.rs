//! Blocking and async entry point to the HERE services.

use std::future::Future;
use std::sync::OnceLock;

use here_core::QueryPairs;
use tokio::runtime::{Builder, Handle, Runtime, RuntimeFlavor};
use url::Url;

use crate::decode::{check_status, decode_json};
use crate::fleet::FleetTelematicsService;
use crate::images::ImagesService;
use crate::routing::RoutingService;
use crate::transport::{RawResponse, redact};
use crate::{ClientBuildError, ClientConfig, HereError, HttpTransport, Transport};

/// HERE Maps client.
///
/// Owns the transport and the configuration. Service views are obtained
/// with [`routing`](Self::routing), [`images`](Self::images) and
/// [`fleet_telematics`](Self::fleet_telematics).
///
/// # Runtime behaviour
///
/// The `*_async` methods run on the caller's runtime and never touch a
/// runtime of their own. Blocking calls made inside a multi-threaded
/// runtime run on it via [`tokio::task::block_in_place`]. Outside any
/// runtime they use a current-thread runtime that the client builds on
/// first use and shuts down in the background when dropped, so a client
/// may be dropped from async code.
///
/// # Examples
///
/// ```no_run
/// use here_client::Client;
/// use here_core::{RouteMode, Waypoint};
///
/// let client = Client::new("your-api-key")?;
/// let routing = client.routing();
/// let params = routing.create_params(
///     &[Waypoint::new(52.5160, 13.3779), Waypoint::new(52.5206, 13.3862)],
///     &[RouteMode::Fastest, RouteMode::Car],
/// )?;
/// let response = routing.route(&params)?;
/// println!("{} routes", response.response.route.len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Client<T = HttpTransport> {
    transport: T,
    config: ClientConfig,
    runtime: OnceLock<Runtime>,
}

impl Client<HttpTransport> {
    /// Create a client for the public HERE endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`ClientBuildError`] if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ClientBuildError> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Create a client from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientBuildError`] if the HTTP client cannot be built.
    pub fn with_config(config: ClientConfig) -> Result<Self, ClientBuildError> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> Client<T> {
    /// Create a client using a custom transport.
    #[must_use]
    pub const fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            transport,
            config,
            runtime: OnceLock::new(),
        }
    }

    /// Client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Routing (`calculateroute.json`) service.
    #[must_use]
    pub const fn routing(&self) -> RoutingService<'_, T> {
        RoutingService::new(self)
    }

    /// Map image (`routing`) service.
    #[must_use]
    pub const fn images(&self) -> ImagesService<'_, T> {
        ImagesService::new(self)
    }

    /// Waypoint sequence (`findsequence.json`) service.
    #[must_use]
    pub const fn fleet_telematics(&self) -> FleetTelematicsService<'_, T> {
        FleetTelematicsService::new(self)
    }

    /// Run `future` to completion from blocking code.
    ///
    /// # Errors
    ///
    /// Returns the future's error, or [`HereError::Runtime`] when the
    /// fallback runtime cannot be built.
    pub(crate) fn block_on<R, F>(&self, future: F) -> Result<R, HereError>
    where
        F: Future<Output = Result<R, HereError>>,
    {
        // block_in_place panics on a current_thread runtime, so only a
        // multi-threaded caller runtime is borrowed.
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            _ => self.fallback_runtime()?.block_on(future),
        }
    }

    /// The client's own runtime, built on first use.
    fn fallback_runtime(&self) -> Result<&Runtime, HereError> {
        if let Some(runtime) = self.runtime.get() {
            return Ok(runtime);
        }
        let built = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(HereError::Runtime)?;
        log::debug!("built fallback Tokio runtime for blocking calls");
        Ok(self.runtime.get_or_init(|| built))
    }

    /// GET `path` under `base_url`, returning the redacted URL alongside a
    /// response whose status has been checked.
    pub(crate) async fn get_raw(
        &self,
        base_url: &str,
        path: &str,
        pairs: &QueryPairs,
    ) -> Result<(String, RawResponse), HereError> {
        let url = endpoint_url(base_url, path, pairs)?;
        let shown = redact(&url);
        log::debug!("GET {shown}");

        let response = self.transport.get(&url).await?;
        check_status(&shown, &response)?;
        Ok((shown, response))
    }

    /// GET `path` under `base_url` and decode the JSON body.
    pub(crate) async fn get_json<R: serde::de::DeserializeOwned>(
        &self,
        base_url: &str,
        path: &str,
        pairs: &QueryPairs,
    ) -> Result<R, HereError> {
        let (shown, response) = self.get_raw(base_url, path, pairs).await?;
        decode_json(&shown, &response)
    }
}

impl<T> Drop for Client<T> {
    fn drop(&mut self) {
        // Dropping a Runtime inside async code panics; shutting it down in
        // the background does not.
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

/// Join `path` onto `base_url` and append the query pairs.
///
/// A missing trailing slash on the base is tolerated, so
/// `https://host/routing/7.2` and `https://host/routing/7.2/` resolve to
/// the same endpoint.
fn endpoint_url(base_url: &str, path: &str, pairs: &QueryPairs) -> Result<Url, HereError> {
    let invalid = |source| HereError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        source,
    };
    let base = Url::parse(&format!("{}/", base_url.trim_end_matches('/'))).map_err(invalid)?;
    let mut url = base.join(path).map_err(invalid)?;
    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(pairs);
    }
    Ok(url)
}
