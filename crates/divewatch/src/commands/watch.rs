//! Watch command: attach a site-detail controller and print each update.

use std::sync::Arc;
use std::time::Duration;

use divewatch_core::{GatewayClient, GatewayConfig, SiteDetailController, SiteDetailState};

use crate::cli::{GlobalOpts, WatchArgs};
use crate::error::CliError;
use crate::output;

use super::util;

pub async fn handle(
    client: Arc<GatewayClient>,
    gateway: &GatewayConfig,
    args: WatchArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let WatchArgs {
        site_id,
        interval,
        no_refresh,
        count,
    } = args;

    let interval = match interval {
        Some(0) => {
            return Err(CliError::Validation {
                field: "interval".into(),
                reason: "must be at least 1 second".into(),
            });
        }
        Some(secs) => Duration::from_secs(secs),
        None => gateway.refresh_interval,
    };
    let auto_refresh = gateway.auto_refresh && !no_refresh;

    let controller = SiteDetailController::with_refresh(client, interval, auto_refresh);
    let mut updates = controller.subscribe();
    controller.attach(&site_id).await;

    let color = output::should_color(&global.color);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let mut printed = 0usize;

    loop {
        tokio::select! {
            _ = &mut ctrl_c => {
                tracing::debug!("interrupted");
                break;
            }
            snapshot = updates.changed() => {
                let Some(state) = snapshot else { break };
                if state.loading {
                    continue;
                }
                print_snapshot(&state, global, color);
                printed += 1;
                if count.is_some_and(|n| printed >= n) {
                    break;
                }
                if !auto_refresh {
                    break;
                }
            }
        }
    }

    controller.detach().await;
    Ok(())
}

fn print_snapshot(state: &SiteDetailState, global: &GlobalOpts, color: bool) {
    if let Some(ref error) = state.error {
        if !global.quiet {
            eprintln!("warning: {error}");
        }
    }
    let Some(ref reading) = state.reading else {
        return;
    };

    let out = output::render_single(
        &global.output,
        state,
        |_| util::reading_detail(reading, Some(state.last_update.as_str()), color),
        |s| s.last_update.clone(),
    );
    output::print_output(&out, global.quiet);
}
