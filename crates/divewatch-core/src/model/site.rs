// ── Site domain type ──

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Depth band a site's sensor is deployed in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DepthCategory {
    Surface,
    Shallow,
    Deep,
    Unknown,
}

/// Health reported by the gateway for a site.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SiteStatus {
    Online,
    Warning,
    Critical,
    Unknown,
}

/// A monitored dive location. Replaced wholesale on every refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub site_id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub depth_category: DepthCategory,
    pub status: SiteStatus,
    /// ISO-8601, as sent by the gateway.
    pub last_update: String,
}
