// ── Dashboard controller ──
//
// Aggregate "all sites" view: site list, latest reading per site, and
// active alerts. A failed site list surfaces an error and swaps in the
// offline tables; a failed per-site reading is silently replaced by a
// synthetic one.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tokio::sync::watch;
use tokio::task::{JoinHandle, JoinSet};
use tracing::{debug, info, warn};

use crate::client::FetchClient;
use crate::fallback::{fallback_alerts, fallback_readings, fallback_sites, synthetic_reading};
use crate::model::{Alert, Reading, Site};
use crate::stream::StateStream;

/// Snapshot consumed by the dashboard view.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardState {
    pub loading: bool,
    pub sites: Vec<Site>,
    /// Latest reading per site id, live or synthetic.
    pub readings: BTreeMap<String, Reading>,
    pub alerts: Vec<Alert>,
    pub error: Option<String>,
    /// Derived from the site-list outcome, not probed independently.
    pub mqtt_connected: bool,
    /// Derived from the site-list outcome, not probed independently.
    pub database_connected: bool,
}

/// Owns the dashboard state and its load lifecycle.
///
/// Cheaply cloneable; clones share the same state.
pub struct DashboardController<C: FetchClient> {
    inner: Arc<DashboardInner<C>>,
}

struct DashboardInner<C: FetchClient> {
    client: Arc<C>,
    state: watch::Sender<DashboardState>,
}

impl<C: FetchClient> Clone for DashboardController<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: FetchClient> DashboardController<C> {
    pub fn new(client: Arc<C>) -> Self {
        let (state, _) = watch::channel(DashboardState::default());
        Self {
            inner: Arc::new(DashboardInner { client, state }),
        }
    }

    /// Current state (cloned).
    pub fn snapshot(&self) -> DashboardState {
        self.inner.state.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> StateStream<DashboardState> {
        StateStream::new(self.inner.state.subscribe())
    }

    /// Load sites, per-site readings, and active alerts.
    ///
    /// Returns once the site list, every per-site reading, and the alert
    /// list have settled. Never fails: each failed fetch is replaced by
    /// fallback data, and `loading` is `false` on return.
    pub async fn load(&self) {
        self.inner.state.send_modify(|s| {
            s.loading = true;
            s.error = None;
        });

        tokio::join!(self.load_sites(), self.load_alerts());

        let snap = self.inner.state.borrow();
        debug!(
            sites = snap.sites.len(),
            readings = snap.readings.len(),
            alerts = snap.alerts.len(),
            offline = snap.error.is_some(),
            "dashboard load complete"
        );
    }

    /// Run [`load()`](Self::load) as a detached task.
    pub fn spawn_load(&self) -> JoinHandle<()> {
        let this = self.clone();
        tokio::spawn(async move { this.load().await })
    }

    // ── Sites + readings ─────────────────────────────────────────────

    async fn load_sites(&self) {
        match self.inner.client.list_sites().await {
            Ok(sites) => {
                let site_ids: Vec<String> = sites.iter().map(|s| s.site_id.clone()).collect();
                let listed: HashSet<&str> = site_ids.iter().map(String::as_str).collect();

                self.inner.state.send_modify(|s| {
                    s.readings.retain(|id, _| listed.contains(id.as_str()));
                    s.sites = sites;
                    s.loading = false;
                    s.error = None;
                    s.mqtt_connected = true;
                    s.database_connected = true;
                });

                self.fan_out(site_ids).await;
            }
            Err(e) => {
                warn!(error = %e, "site list unavailable, showing offline data");
                self.inner.state.send_modify(|s| {
                    s.sites = fallback_sites();
                    s.readings = fallback_readings();
                    s.loading = false;
                    s.error = Some(format!("Using offline data - check connection: {e}"));
                    s.mqtt_connected = false;
                    s.database_connected = false;
                });
            }
        }
    }

    /// One task per site; each completion inserts only its own entry.
    async fn fan_out(&self, site_ids: Vec<String>) {
        let mut tasks = JoinSet::new();

        for site_id in site_ids {
            let inner = Arc::clone(&self.inner);
            tasks.spawn(async move {
                let reading = match inner.client.current_reading(&site_id).await {
                    Ok(reading) => reading,
                    Err(e) => {
                        debug!(site_id, error = %e, "reading unavailable, using synthetic data");
                        synthetic_now(&site_id)
                    }
                };
                inner.state.send_modify(|s| {
                    s.readings.insert(site_id, reading);
                });
            });
        }

        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                warn!(error = %e, "reading task did not complete");
            }
        }
    }

    // ── Alerts ───────────────────────────────────────────────────────

    async fn load_alerts(&self) {
        let alerts = match self.inner.client.active_alerts().await {
            Ok(alerts) => alerts,
            Err(e) => {
                info!(error = %e, "active alerts unavailable, showing offline alerts");
                fallback_alerts()
            }
        };
        self.inner.state.send_modify(|s| s.alerts = alerts);
    }
}

fn synthetic_now(site_id: &str) -> Reading {
    synthetic_reading(&mut rand::thread_rng(), site_id, Utc::now())
}
