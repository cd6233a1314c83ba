// ── Reading domain type ──

use serde::{Deserialize, Serialize};

use super::condition::ConditionLevel;
use super::site::DepthCategory;

/// One timestamped sensor sample for a site ("current conditions").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// ISO-8601, as sent by the gateway (or generated locally for fallbacks).
    pub timestamp: String,
    pub site_id: String,
    pub sensor_id: String,
    pub depth: DepthCategory,
    /// °C
    pub temperature: f64,
    /// m/s
    pub current_speed: f64,
    /// Degrees, 0–359.
    pub current_direction: u16,
    /// Meters.
    pub visibility: f64,
    /// Lux.
    pub luminosity: f64,
    /// Percent, 0–100.
    pub battery_level: f64,
}

impl Reading {
    pub fn temperature_condition(&self) -> ConditionLevel {
        ConditionLevel::for_temperature(self.temperature)
    }

    pub fn current_condition(&self) -> ConditionLevel {
        ConditionLevel::for_current_speed(self.current_speed)
    }

    pub fn visibility_condition(&self) -> ConditionLevel {
        ConditionLevel::for_visibility(self.visibility)
    }

    pub fn battery_condition(&self) -> ConditionLevel {
        ConditionLevel::for_battery(self.battery_level)
    }

    /// The most severe level across all classified metrics.
    pub fn worst_condition(&self) -> ConditionLevel {
        [
            self.temperature_condition(),
            self.current_condition(),
            self.visibility_condition(),
            self.battery_condition(),
        ]
        .into_iter()
        .max()
        .unwrap_or(ConditionLevel::Good)
    }
}
