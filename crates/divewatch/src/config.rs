//! CLI-side config resolution: profile selection plus `GlobalOpts`
//! overrides on top of `divewatch_config`.
//!
//! Core never sees these types -- it receives a pre-built `GatewayConfig`.

use std::time::Duration;

use divewatch_config::{
    Config, defaults_to_gateway_config, load_config, parse_gateway_url, profile_to_gateway_config,
};
use divewatch_core::GatewayConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Load the config file and build the `GatewayConfig` for this run.
pub fn build_gateway_config(global: &GlobalOpts) -> Result<GatewayConfig, CliError> {
    let cfg = load_config()?;
    resolve_gateway_config(&cfg, global)
}

/// Precedence: flag / env > profile > defaults > built-in gateway address.
///
/// An explicit `--profile` that does not exist is an error; a missing
/// default profile is not.
pub fn resolve_gateway_config(
    cfg: &Config,
    global: &GlobalOpts,
) -> Result<GatewayConfig, CliError> {
    let profile_name = active_profile_name(global, cfg);

    let mut gateway = match cfg.profiles.get(&profile_name) {
        Some(profile) => profile_to_gateway_config(profile, &cfg.defaults)?,
        None if global.profile.is_some() => {
            return Err(CliError::ProfileNotFound {
                name: profile_name,
                available: available_profiles(cfg),
            });
        }
        None => defaults_to_gateway_config(None, &cfg.defaults)?,
    };

    if let Some(ref url) = global.gateway {
        gateway.url = parse_gateway_url(url)?;
    }

    if let Some(secs) = global.timeout {
        if secs == 0 {
            return Err(CliError::Validation {
                field: "timeout".into(),
                reason: "must be at least 1 second".into(),
            });
        }
        gateway.timeout = Duration::from_secs(secs);
    }

    tracing::debug!(
        profile = profile_name,
        gateway = %gateway.url,
        "resolved gateway config"
    );
    Ok(gateway)
}

fn available_profiles(cfg: &Config) -> String {
    if cfg.profiles.is_empty() {
        "(none)".into()
    } else {
        cfg.profiles.keys().cloned().collect::<Vec<_>>().join(", ")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::Parser;
    use divewatch_config::Profile;

    use super::*;
    use crate::cli::Cli;

    fn global(args: &[&str]) -> GlobalOpts {
        let mut argv = vec!["divewatch"];
        argv.extend_from_slice(args);
        argv.push("dashboard");
        Cli::try_parse_from(argv).unwrap().global
    }

    fn config_with_boat() -> Config {
        let mut cfg = Config::default();
        cfg.profiles.insert(
            "boat".into(),
            Profile {
                timeout: Some(5),
                ..Profile::new("http://10.0.0.2:1880/")
            },
        );
        cfg
    }

    #[test]
    fn no_profile_uses_builtin_gateway() {
        let gw = resolve_gateway_config(&Config::default(), &global(&[])).unwrap();
        assert_eq!(gw, GatewayConfig::default());
    }

    #[test]
    fn named_profile_is_used() {
        let gw = resolve_gateway_config(&config_with_boat(), &global(&["--profile", "boat"]))
            .unwrap();
        assert_eq!(gw.url.as_str(), "http://10.0.0.2:1880/");
        assert_eq!(gw.timeout, Duration::from_secs(5));
    }

    #[test]
    fn flags_override_profile() {
        let gw = resolve_gateway_config(
            &config_with_boat(),
            &global(&["-p", "boat", "--gateway", "http://127.0.0.1:1880", "--timeout", "2"]),
        )
        .unwrap();
        assert_eq!(gw.url.as_str(), "http://127.0.0.1:1880/");
        assert_eq!(gw.timeout, Duration::from_secs(2));
    }

    #[test]
    fn unknown_explicit_profile_is_an_error() {
        let err = resolve_gateway_config(&config_with_boat(), &global(&["-p", "reef"])).unwrap_err();
        match err {
            CliError::ProfileNotFound { name, available } => {
                assert_eq!(name, "reef");
                assert_eq!(available, "boat");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = resolve_gateway_config(&Config::default(), &global(&["--timeout", "0"]))
            .unwrap_err();
        assert!(matches!(err, CliError::Validation { .. }));
    }
}
