// divewatch-core: View-state controllers between divewatch-api and consumers.

pub mod client;
pub mod config;
pub mod controller;
pub mod convert;
pub mod error;
pub mod fallback;
pub mod model;
pub mod stream;

// ── Primary re-exports ──────────────────────────────────────────────
pub use client::FetchClient;
pub use config::GatewayConfig;
pub use divewatch_api::GatewayClient;
pub use controller::{
    DashboardController, DashboardState, SiteDetailController, SiteDetailState, format_last_update,
};
pub use error::CoreError;
pub use stream::StateStream;

// Re-export model types at the crate root for ergonomics.
pub use model::{
    Alert, AlertKind, AlertLevel, ConditionLevel, DepthCategory, Reading, Site, SiteStatus,
};
