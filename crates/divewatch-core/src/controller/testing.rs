// Scripted `FetchClient` for controller tests.

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::client::FetchClient;
use crate::error::CoreError;
use crate::model::{Alert, DepthCategory, Reading, Site, SiteStatus};

type Scripted<T> = (Result<T, String>, Duration);

fn refused(reason: &str) -> CoreError {
    CoreError::ConnectionFailed {
        url: "http://gateway.test/".into(),
        reason: reason.into(),
    }
}

async fn play<T>(script: Scripted<T>) -> Result<T, CoreError> {
    let (outcome, delay) = script;
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    outcome.map_err(|reason| refused(&reason))
}

pub(crate) fn site(site_id: &str) -> Site {
    Site {
        site_id: site_id.into(),
        name: site_id.replace('_', " "),
        latitude: 38.7,
        longitude: 15.9,
        depth_category: DepthCategory::Shallow,
        status: SiteStatus::Online,
        last_update: "2025-05-30T12:00:00Z".into(),
    }
}

pub(crate) fn reading(site_id: &str, temperature: f64) -> Reading {
    Reading {
        timestamp: "2025-05-30T12:34:56.000Z".into(),
        site_id: site_id.into(),
        sensor_id: format!("{site_id}_sensor_01"),
        depth: DepthCategory::Shallow,
        temperature,
        current_speed: 0.4,
        current_direction: 90,
        visibility: 18.0,
        luminosity: 700.0,
        battery_level: 88.0,
    }
}

/// Every operation answers from a script; unscripted calls fail.
pub(crate) struct FakeClient {
    sites: Mutex<Scripted<Vec<Site>>>,
    readings: Mutex<HashMap<String, Scripted<Reading>>>,
    alerts: Mutex<Scripted<Vec<Alert>>>,
    reading_calls: AtomicUsize,
}

impl Default for FakeClient {
    fn default() -> Self {
        Self {
            sites: Mutex::new((Err("unscripted".into()), Duration::ZERO)),
            readings: Mutex::new(HashMap::new()),
            alerts: Mutex::new((Ok(Vec::new()), Duration::ZERO)),
            reading_calls: AtomicUsize::new(0),
        }
    }
}

impl FakeClient {
    pub(crate) fn with_sites(self, sites: Vec<Site>) -> Self {
        self.set_sites(sites);
        self
    }

    pub(crate) fn with_sites_error(self, reason: &str) -> Self {
        self.set_sites_error(reason);
        self
    }

    pub(crate) fn with_sites_delay(self, delay: Duration) -> Self {
        self.sites.lock().unwrap().1 = delay;
        self
    }

    pub(crate) fn with_reading(self, reading: Reading) -> Self {
        self.set_reading(reading);
        self
    }

    pub(crate) fn with_delayed_reading(self, reading: Reading, delay: Duration) -> Self {
        self.readings
            .lock()
            .unwrap()
            .insert(reading.site_id.clone(), (Ok(reading), delay));
        self
    }

    pub(crate) fn with_reading_error(self, site_id: &str, reason: &str) -> Self {
        self.set_reading_error(site_id, reason);
        self
    }

    pub(crate) fn with_alerts(self, alerts: Vec<Alert>) -> Self {
        *self.alerts.lock().unwrap() = (Ok(alerts), Duration::ZERO);
        self
    }

    pub(crate) fn with_alerts_error(self, reason: &str) -> Self {
        *self.alerts.lock().unwrap() = (Err(reason.into()), Duration::ZERO);
        self
    }

    pub(crate) fn set_sites(&self, sites: Vec<Site>) {
        self.sites.lock().unwrap().0 = Ok(sites);
    }

    pub(crate) fn set_sites_error(&self, reason: &str) {
        self.sites.lock().unwrap().0 = Err(reason.into());
    }

    pub(crate) fn set_reading(&self, reading: Reading) {
        self.set_delayed_reading(reading, Duration::ZERO);
    }

    pub(crate) fn set_delayed_reading(&self, reading: Reading, delay: Duration) {
        self.readings
            .lock()
            .unwrap()
            .insert(reading.site_id.clone(), (Ok(reading), delay));
    }

    pub(crate) fn set_reading_error(&self, site_id: &str, reason: &str) {
        self.readings
            .lock()
            .unwrap()
            .insert(site_id.into(), (Err(reason.into()), Duration::ZERO));
    }

    /// Number of `current_reading` calls served so far.
    pub(crate) fn reading_calls(&self) -> usize {
        self.reading_calls.load(Ordering::SeqCst)
    }
}

impl FetchClient for FakeClient {
    async fn list_sites(&self) -> Result<Vec<Site>, CoreError> {
        let script = self.sites.lock().unwrap().clone();
        play(script).await
    }

    async fn current_reading(&self, site_id: &str) -> Result<Reading, CoreError> {
        self.reading_calls.fetch_add(1, Ordering::SeqCst);
        let script = self.readings.lock().unwrap().get(site_id).cloned();
        match script {
            Some(script) => play(script).await,
            None => Err(CoreError::NotFound {
                identifier: site_id.into(),
            }),
        }
    }

    async fn history_readings(&self, site_id: &str, _hours: u32) -> Result<Vec<Reading>, CoreError> {
        let script = self.readings.lock().unwrap().get(site_id).cloned();
        match script {
            Some(script) => play(script).await.map(|r| vec![r]),
            None => Ok(Vec::new()),
        }
    }

    async fn active_alerts(&self) -> Result<Vec<Alert>, CoreError> {
        let script = self.alerts.lock().unwrap().clone();
        play(script).await
    }

    async fn site_alerts(&self, site_id: &str) -> Result<Vec<Alert>, CoreError> {
        let alerts = self.active_alerts().await?;
        Ok(alerts.into_iter().filter(|a| a.site_id == site_id).collect())
    }
}
