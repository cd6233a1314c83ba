// ── Site-detail controller ──
//
// Single-site "current conditions" view with an optional background
// poller. At most one poller is alive per controller; it is cancelled
// on detach, on attach to a different site, and on drop.

use std::ops::Range;
use std::sync::{Arc, Weak};
use std::time::Duration;

use chrono::Utc;
use serde::Serialize;
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::client::FetchClient;
use crate::config::{DEFAULT_REFRESH_INTERVAL, GatewayConfig};
use crate::error::CoreError;
use crate::fallback::site_detail_fallback;
use crate::model::Reading;
use crate::stream::StateStream;

/// `last_update` value shown while the detail view runs on fallback data.
pub const OFFLINE_MARKER: &str = "offline";

/// Snapshot consumed by the site-detail view.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SiteDetailState {
    pub loading: bool,
    pub reading: Option<Reading>,
    pub error: Option<String>,
    /// `HH:MM - DD/MM/YYYY` of the live reading, or [`OFFLINE_MARKER`].
    pub last_update: String,
}

/// Reformat an ISO-8601 timestamp as `HH:MM - DD/MM/YYYY`.
///
/// Pure substring extraction, no time zone conversion:
/// `2025-05-30T12:34:56Z` becomes `12:34 - 30/05/2025`.
pub fn format_last_update(timestamp: &str) -> Result<String, CoreError> {
    let part = |range: Range<usize>| {
        timestamp.get(range).ok_or_else(|| CoreError::Format {
            timestamp: timestamp.to_owned(),
            reason: "too short for YYYY-MM-DDTHH:MM".into(),
        })
    };

    let year = part(0..4)?;
    let month = part(5..7)?;
    let day = part(8..10)?;
    let time = part(11..16)?;
    Ok(format!("{time} - {day}/{month}/{year}"))
}

/// Owns one site's detail state and its refresh poller.
pub struct SiteDetailController<C: FetchClient> {
    inner: Arc<SiteDetailInner<C>>,
}

struct SiteDetailInner<C: FetchClient> {
    client: Arc<C>,
    state: watch::Sender<SiteDetailState>,
    refresh_interval: Duration,
    auto_refresh: bool,
    poller: Mutex<Option<Poller>>,
}

struct Poller {
    site_id: String,
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl Poller {
    /// Cancel and wait for the task to finish.
    async fn stop(self) {
        self.cancel.cancel();
        if let Err(e) = self.handle.await {
            if !e.is_cancelled() {
                warn!(site_id = self.site_id, error = %e, "site-detail poller panicked");
            }
        }
    }
}

impl<C: FetchClient> Clone for SiteDetailController<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: FetchClient> SiteDetailController<C> {
    /// Controller polling every [`DEFAULT_REFRESH_INTERVAL`] once attached.
    pub fn new(client: Arc<C>) -> Self {
        Self::with_refresh(client, DEFAULT_REFRESH_INTERVAL, true)
    }

    /// Controller using the poll settings of `config`.
    pub fn from_config(client: Arc<C>, config: &GatewayConfig) -> Self {
        Self::with_refresh(client, config.refresh_interval, config.auto_refresh)
    }

    pub fn with_refresh(client: Arc<C>, refresh_interval: Duration, auto_refresh: bool) -> Self {
        let (state, _) = watch::channel(SiteDetailState::default());
        Self {
            inner: Arc::new(SiteDetailInner {
                client,
                state,
                refresh_interval,
                auto_refresh,
                poller: Mutex::new(None),
            }),
        }
    }

    /// Current state (cloned).
    pub fn snapshot(&self) -> SiteDetailState {
        self.inner.state.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> StateStream<SiteDetailState> {
        StateStream::new(self.inner.state.subscribe())
    }

    /// Fetch the current reading for `site_id`, falling back to mock data.
    pub async fn load(&self, site_id: &str) {
        self.inner.load(site_id).await;
    }

    /// Same as [`load()`](Self::load).
    pub async fn refresh(&self, site_id: &str) {
        self.inner.load(site_id).await;
    }

    /// Site currently being polled, if any.
    pub async fn attached_site(&self) -> Option<String> {
        self.inner.poller.lock().await.as_ref().map(|p| p.site_id.clone())
    }

    /// Start showing `site_id`: load now, then refresh on every interval.
    ///
    /// Re-attaching the already attached site is a no-op while its poller
    /// is running. Attaching a different site stops the previous poller first.
    pub async fn attach(&self, site_id: &str) {
        let mut slot = self.inner.poller.lock().await;

        // A one-shot poller (no auto refresh) has exited; attaching again reloads.
        if slot
            .as_ref()
            .is_some_and(|p| p.site_id == site_id && !p.handle.is_finished())
        {
            debug!(site_id, "site already attached");
            return;
        }
        if let Some(previous) = slot.take() {
            debug!(site_id = previous.site_id, "switching site, stopping previous poller");
            previous.stop().await;
        }

        let cancel = CancellationToken::new();
        let handle = tokio::spawn(poll_task(
            Arc::downgrade(&self.inner),
            site_id.to_owned(),
            cancel.clone(),
        ));
        *slot = Some(Poller {
            site_id: site_id.to_owned(),
            cancel,
            handle,
        });

        info!(
            site_id,
            auto_refresh = self.inner.auto_refresh,
            interval_secs = self.inner.refresh_interval.as_secs(),
            "site detail attached"
        );
    }

    /// Stop polling. A refresh in flight inside the poller is abandoned.
    pub async fn detach(&self) {
        let poller = self.inner.poller.lock().await.take();
        let Some(poller) = poller else {
            return;
        };
        let site_id = poller.site_id.clone();
        poller.stop().await;

        self.inner.state.send_if_modified(|s| {
            let was_loading = s.loading;
            s.loading = false;
            was_loading
        });
        info!(site_id, "site detail detached");
    }
}

impl<C: FetchClient> SiteDetailInner<C> {
    async fn load(&self, site_id: &str) {
        self.state.send_modify(|s| {
            s.loading = true;
            s.error = None;
        });

        let outcome = match self.client.current_reading(site_id).await {
            Ok(reading) => format_last_update(&reading.timestamp).map(|stamp| (reading, stamp)),
            Err(e) => Err(e),
        };

        match outcome {
            Ok((reading, last_update)) => {
                debug!(site_id, last_update, "site reading updated");
                self.state.send_modify(|s| {
                    s.reading = Some(reading);
                    s.last_update = last_update;
                    s.loading = false;
                    s.error = None;
                });
            }
            Err(e) => {
                warn!(site_id, error = %e, "site reading unavailable, showing offline data");
                let reading = fallback_now(site_id);
                self.state.send_modify(|s| {
                    s.reading = Some(reading);
                    s.last_update = OFFLINE_MARKER.to_owned();
                    s.loading = false;
                    s.error = Some(format!("Gateway unreachable - showing offline data: {e}"));
                });
            }
        }
    }
}

impl<C: FetchClient> Drop for SiteDetailInner<C> {
    fn drop(&mut self) {
        if let Some(poller) = self.poller.get_mut().take() {
            poller.cancel.cancel();
        }
    }
}

fn fallback_now(site_id: &str) -> Reading {
    site_detail_fallback(&mut rand::thread_rng(), site_id, Utc::now())
}

/// Initial load, then one refresh per interval until cancelled.
///
/// Holds only a `Weak` between refreshes so the poller never keeps a
/// dropped controller alive.
async fn poll_task<C: FetchClient>(
    inner: Weak<SiteDetailInner<C>>,
    site_id: String,
    cancel: CancellationToken,
) {
    let Some(ctrl) = inner.upgrade() else {
        return;
    };
    let period = ctrl.refresh_interval;
    let auto_refresh = ctrl.auto_refresh;

    tokio::select! {
        biased;
        () = cancel.cancelled() => return,
        () = ctrl.load(&site_id) => {}
    }
    drop(ctrl);

    if !auto_refresh {
        return;
    }

    let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            () = cancel.cancelled() => break,
            _ = interval.tick() => {
                let Some(ctrl) = inner.upgrade() else {
                    break;
                };
                tokio::select! {
                    biased;
                    () = cancel.cancelled() => break,
                    () = ctrl.load(&site_id) => {}
                }
            }
        }
    }

    debug!(site_id, "site-detail poller stopped");
}
