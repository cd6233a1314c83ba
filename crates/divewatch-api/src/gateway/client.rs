// Async HTTP client for the dive-site gateway.
//
// Base path: {base_url}/api/dive/
// Auth: none (the gateway lives on the local network)

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::models::{AlertResponse, ReadingResponse, SiteResponse};
use crate::Error;
use crate::transport::TransportConfig;

/// Window used by [`GatewayClient::history_readings`] callers that don't care.
pub const DEFAULT_HISTORY_HOURS: u32 = 24;

const BODY_PREVIEW_CHARS: usize = 200;

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the gateway's JSON REST endpoints.
///
/// Every method returns the decoded payload on a 2xx response and an
/// [`Error`] otherwise. Nothing is retried or cached here.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    base_url: Url,
}

impl GatewayClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a base URL (e.g. `http://192.168.1.76:1880/`) and a transport config.
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::from_reqwest(base_url, http)
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self { http, base_url })
    }

    /// The gateway base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Append `segments` to the base path, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        Self::handle_response(resp).await
    }

    async fn get_with_params<T: DeserializeOwned>(
        &self,
        url: Url,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        debug!("GET {url} params={params:?}");

        let resp = self.http.get(url).query(params).send().await?;
        Self::handle_response(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        if !status.is_success() {
            let raw = resp.text().await.unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                message: if raw.is_empty() {
                    status.to_string()
                } else {
                    raw
                },
            });
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(BODY_PREVIEW_CHARS).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    // ── Sites ────────────────────────────────────────────────────────

    /// `GET api/dive/sites`
    pub async fn list_sites(&self) -> Result<Vec<SiteResponse>, Error> {
        let url = self.endpoint(&["api", "dive", "sites"])?;
        self.get(url).await
    }

    // ── Readings ─────────────────────────────────────────────────────

    /// `GET api/dive/sites/{site_id}/current`
    pub async fn current_reading(&self, site_id: &str) -> Result<ReadingResponse, Error> {
        let url = self.endpoint(&["api", "dive", "sites", site_id, "current"])?;
        self.get(url).await
    }

    /// `GET api/dive/sites/{site_id}/history?hours={hours}`
    pub async fn history_readings(
        &self,
        site_id: &str,
        hours: u32,
    ) -> Result<Vec<ReadingResponse>, Error> {
        let url = self.endpoint(&["api", "dive", "sites", site_id, "history"])?;
        self.get_with_params(url, &[("hours", hours.to_string())])
            .await
    }

    // ── Alerts ───────────────────────────────────────────────────────

    /// `GET api/dive/alerts/active`
    pub async fn active_alerts(&self) -> Result<Vec<AlertResponse>, Error> {
        let url = self.endpoint(&["api", "dive", "alerts", "active"])?;
        self.get(url).await
    }

    /// `GET api/dive/sites/{site_id}/alerts`
    pub async fn site_alerts(&self, site_id: &str) -> Result<Vec<AlertResponse>, Error> {
        let url = self.endpoint(&["api", "dive", "sites", site_id, "alerts"])?;
        self.get(url).await
    }
}
