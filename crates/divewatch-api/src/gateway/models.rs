// Gateway wire types
//
// Raw JSON shapes returned by the gateway's `/api/dive/...` endpoints.
// Enumerated fields stay as strings here; `divewatch-core` parses them
// into strong types and tolerates values it does not recognise.

use serde::{Deserialize, Serialize};

/// A monitored dive site from `GET api/dive/sites`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteResponse {
    pub site_id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// `"shallow"`, `"deep"`, or `"surface"`.
    pub depth_category: String,
    /// `"online"`, `"warning"`, or `"critical"`.
    pub status: String,
    /// ISO-8601 timestamp of the last sample received from this site.
    pub last_update: String,
}

/// One sensor sample from `.../current` or `.../history`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingResponse {
    pub timestamp: String,
    pub site_id: String,
    pub sensor_id: String,
    pub depth: String,
    /// Water temperature in °C.
    pub temperature: f64,
    /// Current speed in m/s.
    pub current_speed: f64,
    /// Current heading in degrees.
    pub current_direction: i32,
    /// Visibility in meters.
    pub visibility: f64,
    /// Ambient light in lux.
    pub luminosity: f64,
    /// Sensor battery in percent.
    pub battery_level: f64,
}

/// A threshold-breach notification from `.../alerts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertResponse {
    /// Metric that breached: `"temperature"`, `"current"`, `"visibility"`, `"battery"`.
    #[serde(rename = "type")]
    pub alert_type: String,
    /// `"warning"` or `"critical"`.
    pub level: String,
    pub message: String,
    pub value: f64,
    pub threshold: f64,
    pub site_id: String,
    pub timestamp: String,
}
