// divewatch-api: Async Rust client for the dive-site sensor gateway REST API

pub mod error;
pub mod gateway;
pub mod transport;

pub use error::Error;
pub use gateway::GatewayClient;
pub use gateway::models::{AlertResponse, ReadingResponse, SiteResponse};
pub use transport::TransportConfig;
