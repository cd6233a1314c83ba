//! Alert command handlers.

use divewatch_core::{FetchClient, GatewayClient};

use crate::cli::{AlertsArgs, AlertsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util::AlertRow;

pub async fn handle(
    client: &GatewayClient,
    args: AlertsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        AlertsCommand::List { site } => {
            let alerts = match site {
                Some(ref site_id) => FetchClient::site_alerts(client, site_id).await?,
                None => FetchClient::active_alerts(client).await?,
            };
            let color = output::should_color(&global.color);
            let out = output::render_list(
                &global.output,
                &alerts,
                |a| AlertRow::new(a, color),
                |a| format!("{}\t{}\t{}", a.site_id, a.kind, a.level),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
