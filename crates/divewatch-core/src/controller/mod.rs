// ── View-state controllers ──
//
// One controller per view. Each owns its state exclusively, publishes
// it through a `watch` channel, and turns every fetch failure into
// fallback data so consumers always have something to render.

mod dashboard;
mod site_detail;

#[cfg(test)]
pub(crate) mod testing;

pub use dashboard::{DashboardController, DashboardState};
pub use site_detail::{OFFLINE_MARKER, SiteDetailController, SiteDetailState, format_last_update};
