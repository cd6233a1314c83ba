// ── Fetch client seam ──
//
// The single external collaborator of both controllers. Controllers are
// handed an implementation at construction; production code uses the
// HTTP `GatewayClient`, tests use a scripted fake.

use std::future::Future;

use divewatch_api::GatewayClient;

use crate::error::CoreError;
use crate::model::{Alert, Reading, Site};

/// Data-fetch operations consumed by the controllers.
///
/// Callers only distinguish success from failure; the error content is
/// used for diagnostics and never inspected for a status code.
pub trait FetchClient: Send + Sync + 'static {
    fn list_sites(&self) -> impl Future<Output = Result<Vec<Site>, CoreError>> + Send;

    fn current_reading(
        &self,
        site_id: &str,
    ) -> impl Future<Output = Result<Reading, CoreError>> + Send;

    fn history_readings(
        &self,
        site_id: &str,
        hours: u32,
    ) -> impl Future<Output = Result<Vec<Reading>, CoreError>> + Send;

    fn active_alerts(&self) -> impl Future<Output = Result<Vec<Alert>, CoreError>> + Send;

    fn site_alerts(&self, site_id: &str)
    -> impl Future<Output = Result<Vec<Alert>, CoreError>> + Send;
}

impl FetchClient for GatewayClient {
    async fn list_sites(&self) -> Result<Vec<Site>, CoreError> {
        let sites = GatewayClient::list_sites(self).await?;
        Ok(sites.into_iter().map(Site::from).collect())
    }

    async fn current_reading(&self, site_id: &str) -> Result<Reading, CoreError> {
        let reading = GatewayClient::current_reading(self, site_id).await?;
        Ok(Reading::from(reading))
    }

    async fn history_readings(&self, site_id: &str, hours: u32) -> Result<Vec<Reading>, CoreError> {
        let history = GatewayClient::history_readings(self, site_id, hours).await?;
        Ok(history.into_iter().map(Reading::from).collect())
    }

    async fn active_alerts(&self) -> Result<Vec<Alert>, CoreError> {
        let alerts = GatewayClient::active_alerts(self).await?;
        Ok(alerts.into_iter().map(Alert::from).collect())
    }

    async fn site_alerts(&self, site_id: &str) -> Result<Vec<Alert>, CoreError> {
        let alerts = GatewayClient::site_alerts(self, site_id).await?;
        Ok(alerts.into_iter().map(Alert::from).collect())
    }
}
