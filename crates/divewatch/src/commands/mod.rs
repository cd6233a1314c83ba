//! Command dispatch: bridges CLI args -> core controllers / client -> output.

pub mod alerts;
pub mod config_cmd;
pub mod dashboard;
pub mod sites;
pub mod util;
pub mod watch;

use std::sync::Arc;

use divewatch_core::GatewayConfig;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a gateway-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    gateway: &GatewayConfig,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let client = Arc::new(gateway.build_client()?);

    match cmd {
        Command::Dashboard => dashboard::handle(client, global).await,
        Command::Watch(args) => watch::handle(client, gateway, args, global).await,
        Command::Sites(args) => sites::handle(&client, args, global).await,
        Command::Alerts(args) => alerts::handle(&client, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
