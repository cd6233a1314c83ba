// Gateway REST API (`/api/dive/...`)

mod client;
pub mod models;

pub use client::{DEFAULT_HISTORY_HOURS, GatewayClient};
