//! Shared table rows and detail renderers.

use std::fmt::Write as _;

use tabled::Tabled;

use divewatch_core::{Alert, ConditionLevel, Reading, Site};

use crate::output;

// ── Site rows ───────────────────────────────────────────────────────

#[derive(Tabled)]
pub struct SiteRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Depth")]
    depth: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Last Update")]
    last_update: String,
}

impl From<&Site> for SiteRow {
    fn from(s: &Site) -> Self {
        Self {
            id: s.site_id.clone(),
            name: s.name.clone(),
            depth: s.depth_category.to_string(),
            status: s.status.to_string(),
            location: format!("{:.4}, {:.4}", s.latitude, s.longitude),
            last_update: s.last_update.clone(),
        }
    }
}

// ── Reading rows ────────────────────────────────────────────────────

#[derive(Tabled)]
pub struct ReadingRow {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Temp °C")]
    temperature: String,
    #[tabled(rename = "Current m/s")]
    current: String,
    #[tabled(rename = "Dir")]
    direction: String,
    #[tabled(rename = "Vis m")]
    visibility: String,
    #[tabled(rename = "Lux")]
    luminosity: String,
    #[tabled(rename = "Battery %")]
    battery: String,
}

impl From<&Reading> for ReadingRow {
    fn from(r: &Reading) -> Self {
        Self {
            time: r.timestamp.clone(),
            temperature: format!("{:.1}", r.temperature),
            current: format!("{:.2}", r.current_speed),
            direction: format!("{}°", r.current_direction),
            visibility: format!("{:.1}", r.visibility),
            luminosity: format!("{:.0}", r.luminosity),
            battery: format!("{:.0}", r.battery_level),
        }
    }
}

// ── Alert rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
pub struct AlertRow {
    #[tabled(rename = "Level")]
    level: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Site")]
    site: String,
    #[tabled(rename = "Message")]
    message: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Threshold")]
    threshold: String,
}

impl AlertRow {
    pub fn new(a: &Alert, color: bool) -> Self {
        Self {
            level: output::alert_level_label(a.level, color),
            kind: a.kind.to_string(),
            site: a.site_id.clone(),
            message: a.message.clone(),
            value: format!("{}", a.value),
            threshold: format!("{}", a.threshold),
        }
    }
}

// ── Detail view ─────────────────────────────────────────────────────

/// Multi-line "current conditions" block for one reading.
pub fn reading_detail(reading: &Reading, last_update: Option<&str>, color: bool) -> String {
    let metric = |label: &str, value: String, level: Option<ConditionLevel>| {
        let level = level.map_or_else(String::new, |l| output::condition_label(l, color));
        format!("  {label:<12} {value:>10}  {level}\n")
    };

    let mut out = String::new();
    let stamp = last_update.unwrap_or(&reading.timestamp);
    let _ = writeln!(
        out,
        "{}  {}",
        reading.site_id,
        output::dim(&format!("{stamp} · {}", reading.sensor_id), color)
    );
    out.push_str(&metric(
        "Temperature",
        format!("{:.1} °C", reading.temperature),
        Some(reading.temperature_condition()),
    ));
    out.push_str(&metric(
        "Current",
        format!("{:.2} m/s", reading.current_speed),
        Some(reading.current_condition()),
    ));
    out.push_str(&metric("Direction", format!("{}°", reading.current_direction), None));
    out.push_str(&metric(
        "Visibility",
        format!("{:.1} m", reading.visibility),
        Some(reading.visibility_condition()),
    ));
    out.push_str(&metric("Luminosity", format!("{:.0} lux", reading.luminosity), None));
    out.push_str(&metric(
        "Battery",
        format!("{:.0} %", reading.battery_level),
        Some(reading.battery_condition()),
    ));
    out.push_str(&metric("Depth", reading.depth.to_string(), None));
    out.trim_end().to_owned()
}

#[cfg(test)]
mod tests {
    use divewatch_core::DepthCategory;

    use super::*;

    fn tropea() -> Reading {
        Reading {
            timestamp: "2025-05-30T12:34:56Z".into(),
            site_id: "tropea_reef".into(),
            sensor_id: "tropea_reef_sensor_01".into(),
            depth: DepthCategory::Deep,
            temperature: 16.5,
            current_speed: 1.2,
            current_direction: 120,
            visibility: 28.0,
            luminosity: 65.0,
            battery_level: 45.0,
        }
    }

    #[test]
    fn detail_shows_levels_and_last_update() {
        let out = reading_detail(&tropea(), Some("12:34 - 30/05/2025"), false);

        assert!(out.starts_with("tropea_reef  12:34 - 30/05/2025"), "{out}");
        assert!(out.contains("16.5 °C  caution"), "{out}");
        assert!(out.contains("1.20 m/s  caution"), "{out}");
        assert!(out.contains("45 %  caution"), "{out}");
        assert!(out.contains("28.0 m  good"), "{out}");
    }

    #[test]
    fn reading_row_formats_units() {
        let row = ReadingRow::from(&tropea());
        assert_eq!(row.direction, "120°");
        assert_eq!(row.current, "1.20");
    }
}
