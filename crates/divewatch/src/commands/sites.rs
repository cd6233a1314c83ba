//! Site command handlers. Direct gateway queries: errors surface as-is.

use divewatch_core::{FetchClient, GatewayClient, format_last_update};

use crate::cli::{GlobalOpts, SitesArgs, SitesCommand};
use crate::error::CliError;
use crate::output;

use super::util::{self, ReadingRow, SiteRow};

pub async fn handle(
    client: &GatewayClient,
    args: SitesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        SitesCommand::List => {
            let sites = FetchClient::list_sites(client).await?;
            let out = output::render_list(
                &global.output,
                &sites,
                |s| SiteRow::from(s),
                |s| s.site_id.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        SitesCommand::Current { site_id } => {
            let reading = FetchClient::current_reading(client, &site_id).await?;
            let color = output::should_color(&global.color);
            let out = output::render_single(
                &global.output,
                &reading,
                |r| {
                    let stamp = format_last_update(&r.timestamp).ok();
                    util::reading_detail(r, stamp.as_deref(), color)
                },
                |r| r.timestamp.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        SitesCommand::History { site_id, hours } => {
            if hours == 0 {
                return Err(CliError::Validation {
                    field: "hours".into(),
                    reason: "must be at least 1".into(),
                });
            }
            let readings = FetchClient::history_readings(client, &site_id, hours).await?;
            if readings.is_empty() && !global.quiet {
                eprintln!("No readings for '{site_id}' in the last {hours}h");
            }
            let out = output::render_list(
                &global.output,
                &readings,
                |r| ReadingRow::from(r),
                |r| r.timestamp.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
