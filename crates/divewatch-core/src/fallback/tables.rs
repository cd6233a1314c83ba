// ── Fixed offline tables ──
//
// Substituted wholesale by the dashboard when the site list or the
// active alerts cannot be fetched.

use std::collections::BTreeMap;

use crate::model::{Alert, AlertKind, AlertLevel, DepthCategory, Reading, Site, SiteStatus};

fn site(
    site_id: &str,
    name: &str,
    (latitude, longitude): (f64, f64),
    depth_category: DepthCategory,
    status: SiteStatus,
    last_update: &str,
) -> Site {
    Site {
        site_id: site_id.into(),
        name: name.into(),
        latitude,
        longitude,
        depth_category,
        status,
        last_update: last_update.into(),
    }
}

/// The three sites shown when the gateway's site list is unavailable.
pub fn fallback_sites() -> Vec<Site> {
    vec![
        site(
            "capo_vaticano",
            "Capo Vaticano",
            (38.6878, 15.8742),
            DepthCategory::Shallow,
            SiteStatus::Online,
            "2025-05-30T12:34:56Z",
        ),
        site(
            "tropea_reef",
            "Tropea Reef",
            (38.6767, 15.8989),
            DepthCategory::Deep,
            SiteStatus::Warning,
            "2025-05-30T12:30:15Z",
        ),
        site(
            "stromboli_east",
            "Stromboli East",
            (38.7891, 15.2134),
            DepthCategory::Surface,
            SiteStatus::Online,
            "2025-05-30T12:35:22Z",
        ),
    ]
}

struct Row {
    site_id: &'static str,
    timestamp: &'static str,
    depth: DepthCategory,
    temperature: f64,
    current_speed: f64,
    current_direction: u16,
    visibility: f64,
    luminosity: f64,
    battery_level: f64,
}

const READINGS: [Row; 3] = [
    Row {
        site_id: "capo_vaticano",
        timestamp: "2025-05-30T12:34:56Z",
        depth: DepthCategory::Shallow,
        temperature: 19.2,
        current_speed: 0.8,
        current_direction: 45,
        visibility: 22.0,
        luminosity: 850.0,
        battery_level: 78.0,
    },
    Row {
        site_id: "tropea_reef",
        timestamp: "2025-05-30T12:30:15Z",
        depth: DepthCategory::Deep,
        temperature: 16.5,
        current_speed: 1.2,
        current_direction: 120,
        visibility: 28.0,
        luminosity: 65.0,
        battery_level: 45.0,
    },
    Row {
        site_id: "stromboli_east",
        timestamp: "2025-05-30T12:32:18Z",
        depth: DepthCategory::Surface,
        temperature: 20.1,
        current_speed: 0.3,
        current_direction: 200,
        visibility: 15.0,
        luminosity: 1200.0,
        battery_level: 92.0,
    },
];

/// Fixed readings keyed by fallback site id. Not generated.
pub fn fallback_readings() -> BTreeMap<String, Reading> {
    READINGS
        .iter()
        .map(|row| {
            let reading = Reading {
                timestamp: row.timestamp.into(),
                site_id: row.site_id.into(),
                sensor_id: format!("{}_sensor_01", row.site_id),
                depth: row.depth,
                temperature: row.temperature,
                current_speed: row.current_speed,
                current_direction: row.current_direction,
                visibility: row.visibility,
                luminosity: row.luminosity,
                battery_level: row.battery_level,
            };
            (row.site_id.to_owned(), reading)
        })
        .collect()
}

/// The two alerts shown when the gateway's active alerts are unavailable.
pub fn fallback_alerts() -> Vec<Alert> {
    vec![
        Alert {
            kind: AlertKind::Current,
            level: AlertLevel::Warning,
            message: "Strong current detected".into(),
            value: 1.8,
            threshold: 1.5,
            site_id: "capo_vaticano".into(),
            timestamp: "2025-05-30T12:30:00Z".into(),
        },
        Alert {
            kind: AlertKind::Battery,
            level: AlertLevel::Critical,
            message: "Sensor battery low".into(),
            value: 15.0,
            threshold: 20.0,
            site_id: "tropea_reef".into(),
            timestamp: "2025-05-30T11:45:00Z".into(),
        },
    ]
}
