//! Client configuration

use crate::{ClientResult, NetworkHttpClient, RestaurantClient};

/// Environment variable holding the server base URL
pub const ENV_SERVER_URL: &str = "AARDVARK_SERVER_URL";
/// Environment variable holding the request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "AARDVARK_TIMEOUT_SECS";

/// Default server socket
pub const DEFAULT_SOCKET: &str = "127.0.0.1:8000";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration for connecting to the restaurant server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://127.0.0.1:8000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Configuration for a plain `host:port` socket, e.g. `127.0.0.1:8000`
    pub fn from_socket(socket: &str) -> Self {
        Self::new(format!("http://{}", socket))
    }

    /// Load configuration from the environment
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | AARDVARK_SERVER_URL | http://127.0.0.1:8000 |
    /// | AARDVARK_TIMEOUT_SECS | 30 |
    pub fn from_env() -> Self {
        let base_url = std::env::var(ENV_SERVER_URL)
            .unwrap_or_else(|_| format!("http://{}", DEFAULT_SOCKET));
        let timeout = std::env::var(ENV_TIMEOUT_SECS)
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self::new(base_url).with_timeout(timeout)
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create a network client from this configuration
    pub fn build_client(&self) -> ClientResult<RestaurantClient<NetworkHttpClient>> {
        RestaurantClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_socket(DEFAULT_SOCKET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_server() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.timeout, 30);
    }

    #[test]
    fn test_from_socket() {
        let config = ClientConfig::from_socket("10.0.0.5:9000").with_timeout(5);
        assert_eq!(config.base_url, "http://10.0.0.5:9000");
        assert_eq!(config.timeout, 5);
    }
}
