//! Client configuration.

use std::fmt;
use std::time::Duration;

/// Default user agent for HERE requests.
pub const DEFAULT_USER_AGENT: &str = "here-maps/0.1";

/// Default base URL of the routing API.
pub const DEFAULT_ROUTING_BASE_URL: &str = "https://route.ls.hereapi.com/routing/7.2/";

/// Default base URL of the map image API.
pub const DEFAULT_IMAGES_BASE_URL: &str = "https://image.maps.ls.hereapi.com/mia/1.6/";

/// Default base URL of the waypoint sequence (fleet telematics) API.
pub const DEFAULT_FLEET_BASE_URL: &str = "https://wse.ls.hereapi.com/2/";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`Client`](crate::Client).
///
/// The API key is passed verbatim as the `apikey` query parameter. It is
/// never written to `Debug` output.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use here_client::ClientConfig;
///
/// let config = ClientConfig::new("secret")
///     .with_routing_base_url("http://localhost:8080/routing/7.2")
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(config.api_key, "secret");
/// assert!(!format!("{config:?}").contains("secret"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Static API key.
    pub api_key: String,
    /// Base URL for `calculateroute.json`.
    pub routing_base_url: String,
    /// Base URL for the image `routing` endpoint.
    pub images_base_url: String,
    /// Base URL for `findsequence.json`.
    pub fleet_base_url: String,
    /// Connect and request timeout.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            routing_base_url: DEFAULT_ROUTING_BASE_URL.to_owned(),
            images_base_url: DEFAULT_IMAGES_BASE_URL.to_owned(),
            fleet_base_url: DEFAULT_FLEET_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("routing_base_url", &self.routing_base_url)
            .field("images_base_url", &self.images_base_url)
            .field("fleet_base_url", &self.fleet_base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    /// Create a configuration using the public HERE endpoints.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Point every endpoint at the same base URL.
    ///
    /// Handy for proxies and local test servers.
    #[must_use]
    pub fn with_base_url(self, base_url: impl Into<String>) -> Self {
        let shared: String = base_url.into();
        self.with_routing_base_url(shared.clone())
            .with_images_base_url(shared.clone())
            .with_fleet_base_url(shared)
    }

    /// Set the routing base URL.
    #[must_use]
    pub fn with_routing_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.routing_base_url = base_url.into();
        self
    }

    /// Set the map image base URL.
    #[must_use]
    pub fn with_images_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.images_base_url = base_url.into();
        self
    }

    /// Set the waypoint sequence base URL.
    #[must_use]
    pub fn with_fleet_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.fleet_base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_target_public_endpoints() {
        let config = ClientConfig::new("key");

        assert_eq!(config.routing_base_url, DEFAULT_ROUTING_BASE_URL);
        assert_eq!(config.images_base_url, DEFAULT_IMAGES_BASE_URL);
        assert_eq!(config.fleet_base_url, DEFAULT_FLEET_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[rstest]
    fn config_builder_pattern() {
        let config = ClientConfig::new("key")
            .with_base_url("http://localhost:9000")
            .with_images_base_url("http://images.local")
            .with_timeout(Duration::from_secs(60))
            .with_user_agent("test-agent/1.0");

        assert_eq!(config.routing_base_url, "http://localhost:9000");
        assert_eq!(config.fleet_base_url, "http://localhost:9000");
        assert_eq!(config.images_base_url, "http://images.local");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.user_agent, "test-agent/1.0");
    }

    #[rstest]
    fn debug_redacts_api_key() {
        let rendered = format!("{:?}", ClientConfig::new("top-secret"));
        assert!(!rendered.contains("top-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
