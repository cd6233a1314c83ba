// ── Fallback data ──
//
// Everything the controllers substitute when a live fetch fails:
// randomized synthetic readings and fixed offline tables.

pub mod mock;
pub mod tables;

pub use mock::{DEFAULT_PROFILE, FallbackProfile, site_detail_fallback, synthetic_reading};
pub use tables::{fallback_alerts, fallback_readings, fallback_sites};
