// ── Domain model ──
//
// Canonical types consumed by the controllers and their consumers.
// Wire shapes live in `divewatch_api`; `crate::convert` bridges the two.

pub mod alert;
pub mod condition;
pub mod reading;
pub mod site;

pub use alert::{Alert, AlertKind, AlertLevel};
pub use condition::ConditionLevel;
pub use reading::Reading;
pub use site::{DepthCategory, Site, SiteStatus};
