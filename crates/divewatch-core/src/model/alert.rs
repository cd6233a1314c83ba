// ── Alert domain type ──
//
// Alerts are produced by the gateway. The client only displays them or
// substitutes a fixed fallback list; it never evaluates thresholds itself.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Which metric breached its threshold.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AlertKind {
    Temperature,
    Current,
    Visibility,
    Battery,
    Other,
}

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
pub enum AlertLevel {
    Warning,
    Critical,
}

/// A threshold-breach notification tied to a site and a metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub level: AlertLevel,
    pub message: String,
    /// Observed value.
    pub value: f64,
    pub threshold: f64,
    pub site_id: String,
    pub timestamp: String,
}
