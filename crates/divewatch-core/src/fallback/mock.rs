// ── Mock reading generator ──
//
// Synthetic "current conditions" for a site. Value shapes are fixed,
// values are drawn from the supplied RNG so tests can seed it.

use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;

use crate::model::{DepthCategory, Reading};

/// Fixed temperature / current / battery triple used by the site-detail fallback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallbackProfile {
    pub temperature: f64,
    pub current_speed: f64,
    pub battery_level: f64,
}

/// Triple for any site without a named entry.
pub const DEFAULT_PROFILE: FallbackProfile = FallbackProfile {
    temperature: 18.0,
    current_speed: 0.5,
    battery_level: 50.0,
};

impl FallbackProfile {
    /// Named-site entry if one exists, otherwise [`DEFAULT_PROFILE`].
    pub fn for_site(site_id: &str) -> Self {
        match site_id {
            "capo_vaticano" => Self {
                temperature: 19.2,
                current_speed: 0.8,
                battery_level: 78.0,
            },
            "tropea_reef" => Self {
                temperature: 16.5,
                current_speed: 1.2,
                battery_level: 45.0,
            },
            "stromboli_east" => Self {
                temperature: 20.1,
                current_speed: 0.3,
                battery_level: 92.0,
            },
            _ => DEFAULT_PROFILE,
        }
    }
}

/// ISO-8601 with millisecond precision and a `Z` suffix.
pub(crate) fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Fully randomized reading for `site_id`.
///
/// Used by the dashboard when a single site's fetch fails during fan-out.
pub fn synthetic_reading<R: Rng + ?Sized>(
    rng: &mut R,
    site_id: &str,
    now: DateTime<Utc>,
) -> Reading {
    Reading {
        timestamp: iso_timestamp(now),
        site_id: site_id.to_owned(),
        sensor_id: format!("{site_id}_sensor_01"),
        depth: DepthCategory::Shallow,
        temperature: 15.0 + rng.gen_range(0.0..10.0),
        current_speed: rng.gen_range(0.0..2.0),
        current_direction: rng.gen_range(0..360),
        visibility: 10.0 + rng.gen_range(0.0..20.0),
        luminosity: rng.gen_range(0.0..1000.0),
        battery_level: 20.0 + rng.gen_range(0.0..80.0),
    }
}

/// Reading shown by the site-detail view when its fetch fails.
///
/// Temperature, current speed, and battery come from [`FallbackProfile::for_site`];
/// the remaining fields are randomized as in [`synthetic_reading`].
pub fn site_detail_fallback<R: Rng + ?Sized>(
    rng: &mut R,
    site_id: &str,
    now: DateTime<Utc>,
) -> Reading {
    let profile = FallbackProfile::for_site(site_id);
    Reading {
        temperature: profile.temperature,
        current_speed: profile.current_speed,
        battery_level: profile.battery_level,
        ..synthetic_reading(rng, site_id, now)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 30, 12, 34, 56).single().unwrap_or_default()
    }

    #[test]
    fn synthetic_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let r = synthetic_reading(&mut rng, "secca_di_capistello", fixed_now());
            assert!((15.0..25.0).contains(&r.temperature));
            assert!((0.0..2.0).contains(&r.current_speed));
            assert!(r.current_direction < 360);
            assert!((10.0..30.0).contains(&r.visibility));
            assert!((0.0..1000.0).contains(&r.luminosity));
            assert!((20.0..100.0).contains(&r.battery_level));
        }
    }

    #[test]
    fn synthetic_shape_is_fixed() {
        let mut rng = StdRng::seed_from_u64(1);
        let r = synthetic_reading(&mut rng, "scilla", fixed_now());
        assert_eq!(r.site_id, "scilla");
        assert_eq!(r.sensor_id, "scilla_sensor_01");
        assert_eq!(r.depth, DepthCategory::Shallow);
        assert_eq!(r.timestamp, "2025-05-30T12:34:56.000Z");
    }

    #[test]
    fn detail_fallback_uses_named_profile() {
        let mut rng = StdRng::seed_from_u64(3);
        let r = site_detail_fallback(&mut rng, "tropea_reef", fixed_now());
        assert_eq!(r.temperature, 16.5);
        assert_eq!(r.current_speed, 1.2);
        assert_eq!(r.battery_level, 45.0);
        assert_eq!(r.sensor_id, "tropea_reef_sensor_01");
    }

    #[test]
    fn detail_fallback_uses_default_profile_for_unknown_site() {
        let mut rng = StdRng::seed_from_u64(3);
        let r = site_detail_fallback(&mut rng, "unknown_wreck", fixed_now());
        assert_eq!(
            (r.temperature, r.current_speed, r.battery_level),
            (18.0, 0.5, 50.0)
        );
    }

    #[test]
    fn every_named_profile_differs_from_default() {
        for site in ["capo_vaticano", "tropea_reef", "stromboli_east"] {
            assert_ne!(FallbackProfile::for_site(site), DEFAULT_PROFILE, "{site}");
        }
    }
}
