// ── API-to-domain type conversions ──
//
// Bridges raw `divewatch_api` response types into canonical
// `divewatch_core::model` domain types. Enumerated strings the gateway
// may add later fall back to `Unknown` / `Other` instead of failing.

use divewatch_api::{AlertResponse, ReadingResponse, SiteResponse};
use tracing::trace;

use crate::model::{Alert, AlertKind, AlertLevel, DepthCategory, Reading, Site, SiteStatus};

// ── Helpers ────────────────────────────────────────────────────────

fn parse_depth(raw: &str) -> DepthCategory {
    raw.parse().unwrap_or_else(|_| {
        trace!(depth = raw, "unrecognised depth category");
        DepthCategory::Unknown
    })
}

fn parse_status(raw: &str) -> SiteStatus {
    raw.parse().unwrap_or_else(|_| {
        trace!(status = raw, "unrecognised site status");
        SiteStatus::Unknown
    })
}

/// Anything that is not explicitly `critical` is shown as a warning.
fn parse_alert_level(raw: &str) -> AlertLevel {
    raw.parse().unwrap_or(AlertLevel::Warning)
}

fn parse_alert_kind(raw: &str) -> AlertKind {
    raw.parse().unwrap_or(AlertKind::Other)
}

/// Fold any integer heading into `0..360`.
fn normalize_direction(degrees: i32) -> u16 {
    u16::try_from(degrees.rem_euclid(360)).unwrap_or(0)
}

// ── Site ───────────────────────────────────────────────────────────

impl From<SiteResponse> for Site {
    fn from(s: SiteResponse) -> Self {
        Site {
            depth_category: parse_depth(&s.depth_category),
            status: parse_status(&s.status),
            site_id: s.site_id,
            name: s.name,
            latitude: s.latitude,
            longitude: s.longitude,
            last_update: s.last_update,
        }
    }
}

// ── Reading ────────────────────────────────────────────────────────

impl From<ReadingResponse> for Reading {
    fn from(r: ReadingResponse) -> Self {
        Reading {
            depth: parse_depth(&r.depth),
            current_direction: normalize_direction(r.current_direction),
            timestamp: r.timestamp,
            site_id: r.site_id,
            sensor_id: r.sensor_id,
            temperature: r.temperature,
            current_speed: r.current_speed,
            visibility: r.visibility,
            luminosity: r.luminosity,
            battery_level: r.battery_level,
        }
    }
}

// ── Alert ──────────────────────────────────────────────────────────

impl From<AlertResponse> for Alert {
    fn from(a: AlertResponse) -> Self {
        Alert {
            kind: parse_alert_kind(&a.alert_type),
            level: parse_alert_level(&a.level),
            message: a.message,
            value: a.value,
            threshold: a.threshold,
            site_id: a.site_id,
            timestamp: a.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site_response(depth: &str, status: &str) -> SiteResponse {
        SiteResponse {
            site_id: "capo_vaticano".into(),
            name: "Capo Vaticano".into(),
            latitude: 38.6878,
            longitude: 15.8742,
            depth_category: depth.into(),
            status: status.into(),
            last_update: "2025-05-30T12:34:56Z".into(),
        }
    }

    #[test]
    fn site_enums_parse_case_insensitively() {
        let site = Site::from(site_response("Deep", "CRITICAL"));
        assert_eq!(site.depth_category, DepthCategory::Deep);
        assert_eq!(site.status, SiteStatus::Critical);
    }

    #[test]
    fn unknown_site_strings_fall_back() {
        let site = Site::from(site_response("mesophotic", "maintenance"));
        assert_eq!(site.depth_category, DepthCategory::Unknown);
        assert_eq!(site.status, SiteStatus::Unknown);
    }

    #[test]
    fn reading_direction_is_normalized() {
        let reading = Reading::from(ReadingResponse {
            timestamp: "2025-05-30T12:34:56Z".into(),
            site_id: "tropea_reef".into(),
            sensor_id: "tropea_reef_sensor_01".into(),
            depth: "deep".into(),
            temperature: 16.5,
            current_speed: 1.2,
            current_direction: -90,
            visibility: 28.0,
            luminosity: 65.0,
            battery_level: 45.0,
        });
        assert_eq!(reading.current_direction, 270);
        assert_eq!(reading.depth, DepthCategory::Deep);
    }

    #[test]
    fn alert_kind_and_level() {
        let alert = Alert::from(AlertResponse {
            alert_type: "luminosity".into(),
            level: "critical".into(),
            message: "Sensor dark".into(),
            value: 0.0,
            threshold: 10.0,
            site_id: "stromboli_east".into(),
            timestamp: "2025-05-30T12:00:00Z".into(),
        });
        assert_eq!(alert.kind, AlertKind::Other);
        assert_eq!(alert.level, AlertLevel::Critical);
    }
}
