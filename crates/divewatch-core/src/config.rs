// ── Runtime gateway configuration ──
//
// Describes *how* to reach the gateway and how often the detail view
// polls. Never touches disk: divewatch-config (or a test) builds a
// `GatewayConfig` and hands it in.

use std::time::Duration;

use url::Url;

/// Gateway address used when nothing else is configured.
pub const DEFAULT_GATEWAY_URL: &str = "http://192.168.1.76:1880/";

/// Period of the site-detail poller.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Configuration for talking to a single gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Gateway base URL (e.g., `http://192.168.1.76:1880/`).
    pub url: Url,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// How often an attached site-detail view refreshes.
    pub refresh_interval: Duration,
    /// When `false`, attaching a detail view loads once and never polls.
    pub auto_refresh: bool,
}

impl GatewayConfig {
    /// Transport settings for `divewatch_api::GatewayClient`.
    pub fn transport(&self) -> divewatch_api::TransportConfig {
        divewatch_api::TransportConfig {
            connect_timeout: self.connect_timeout,
            timeout: self.timeout,
        }
    }

    /// Build the HTTP gateway client described by this config.
    pub fn build_client(&self) -> Result<divewatch_api::GatewayClient, crate::CoreError> {
        Ok(divewatch_api::GatewayClient::new(
            self.url.as_str(),
            &self.transport(),
        )?)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            url: Url::parse(DEFAULT_GATEWAY_URL).expect("default gateway URL is valid"),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            auto_refresh: true,
        }
    }
}
