// ── Per-metric condition classification ──
//
// Three-band rating used to highlight readings. Pure function of the
// value; it never produces alerts.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

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
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ConditionLevel {
    Good,
    Caution,
    Danger,
}

impl ConditionLevel {
    /// Cold water is the hazard: below 12 °C danger, below 18 °C caution.
    pub fn for_temperature(celsius: f64) -> Self {
        if celsius < 12.0 {
            Self::Danger
        } else if celsius < 18.0 {
            Self::Caution
        } else {
            Self::Good
        }
    }

    /// Above 1.5 m/s danger, above 1.0 m/s caution.
    pub fn for_current_speed(meters_per_sec: f64) -> Self {
        if meters_per_sec > 1.5 {
            Self::Danger
        } else if meters_per_sec > 1.0 {
            Self::Caution
        } else {
            Self::Good
        }
    }

    /// Below 5 m danger, below 10 m caution.
    pub fn for_visibility(meters: f64) -> Self {
        if meters < 5.0 {
            Self::Danger
        } else if meters < 10.0 {
            Self::Caution
        } else {
            Self::Good
        }
    }

    /// Below 20 % danger, below 50 % caution.
    pub fn for_battery(percent: f64) -> Self {
        if percent < 20.0 {
            Self::Danger
        } else if percent < 50.0 {
            Self::Caution
        } else {
            Self::Good
        }
    }
}
