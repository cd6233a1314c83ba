//! Dashboard command: one full load of the dashboard controller.

use std::fmt::Write as _;
use std::sync::Arc;

use tabled::Tabled;

use divewatch_core::{DashboardController, DashboardState, GatewayClient, Reading, Site};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

use super::util::AlertRow;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct SiteConditionsRow {
    #[tabled(rename = "Site")]
    site: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Temp °C")]
    temperature: String,
    #[tabled(rename = "Current m/s")]
    current: String,
    #[tabled(rename = "Vis m")]
    visibility: String,
    #[tabled(rename = "Battery %")]
    battery: String,
    #[tabled(rename = "Conditions")]
    conditions: String,
}

impl SiteConditionsRow {
    fn new(site: &Site, reading: Option<&Reading>, color: bool) -> Self {
        let metric = |f: fn(&Reading) -> String| reading.map_or_else(|| "-".into(), f);
        Self {
            site: site.name.clone(),
            status: site.status.to_string(),
            temperature: metric(|r| format!("{:.1}", r.temperature)),
            current: metric(|r| format!("{:.2}", r.current_speed)),
            visibility: metric(|r| format!("{:.1}", r.visibility)),
            battery: metric(|r| format!("{:.0}", r.battery_level)),
            conditions: reading.map_or_else(
                || "-".into(),
                |r| output::condition_label(r.worst_condition(), color),
            ),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(client: Arc<GatewayClient>, global: &GlobalOpts) -> Result<(), CliError> {
    let controller = DashboardController::new(client);
    controller.load().await;
    let state = controller.snapshot();

    if let Some(ref error) = state.error {
        if !global.quiet {
            eprintln!("warning: {error}");
        }
    }

    let color = output::should_color(&global.color);
    let out = match global.output {
        OutputFormat::Table => render_overview(&state, color),
        ref format => output::render_single(
            format,
            &state,
            |_| String::new(),
            |s| {
                s.sites
                    .iter()
                    .map(|site| site.site_id.as_str())
                    .collect::<Vec<_>>()
                    .join("\n")
            },
        ),
    };
    output::print_output(&out, global.quiet);
    Ok(())
}

fn connectivity(connected: bool) -> &'static str {
    if connected { "connected" } else { "offline" }
}

fn render_overview(state: &DashboardState, color: bool) -> String {
    let rows: Vec<SiteConditionsRow> = state
        .sites
        .iter()
        .map(|site| SiteConditionsRow::new(site, state.readings.get(&site.site_id), color))
        .collect();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "MQTT: {}   Database: {}",
        connectivity(state.mqtt_connected),
        connectivity(state.database_connected)
    );
    out.push_str(&output::render_table(&rows));

    if state.alerts.is_empty() {
        out.push_str("\n\nNo active alerts");
    } else {
        let alerts: Vec<AlertRow> = state.alerts.iter().map(|a| AlertRow::new(a, color)).collect();
        let _ = write!(
            out,
            "\n\nActive alerts ({})\n{}",
            state.alerts.len(),
            output::render_table(&alerts)
        );
    }
    out
}
