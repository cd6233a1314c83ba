//! Shared configuration for divewatch.
//!
//! TOML profiles layered over built-in defaults and `DIVEWATCH_`
//! environment variables, plus translation to `divewatch_core::GatewayConfig`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use divewatch_core::GatewayConfig;
use divewatch_core::config::DEFAULT_GATEWAY_URL;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("profile '{name}' not found")]
    ProfileNotFound { name: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named gateway profiles.
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    /// Whole-request timeout, seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// TCP connect timeout, seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,

    /// Site-detail poll period, seconds.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval: u64,

    #[serde(default = "default_auto_refresh")]
    pub auto_refresh: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            timeout: default_timeout(),
            connect_timeout: default_connect_timeout(),
            refresh_interval: default_refresh_interval(),
            auto_refresh: default_auto_refresh(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}
fn default_connect_timeout() -> u64 {
    10
}
fn default_refresh_interval() -> u64 {
    30
}
fn default_auto_refresh() -> bool {
    true
}

/// A named gateway profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Profile {
    /// Gateway base URL (e.g., "http://192.168.1.76:1880/").
    pub gateway: String,

    /// Override request timeout.
    pub timeout: Option<u64>,

    /// Override connect timeout.
    pub connect_timeout: Option<u64>,

    /// Override site-detail poll period.
    pub refresh_interval: Option<u64>,

    /// Override background refresh.
    pub auto_refresh: Option<bool>,
}

impl Profile {
    /// Profile pointing at `gateway` with no overrides.
    pub fn new(gateway: impl Into<String>) -> Self {
        Self {
            gateway: gateway.into(),
            timeout: None,
            connect_timeout: None,
            refresh_interval: None,
            auto_refresh: None,
        }
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "divewatch", "divewatch").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("divewatch");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load the full Config from `path` + environment.
///
/// A missing file yields the defaults. Nested keys use a double
/// underscore: `DIVEWATCH_DEFAULTS__REFRESH_INTERVAL=10`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("DIVEWATCH_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

/// Serialize config to TOML and write it to `path`.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Translation to core config ──────────────────────────────────────

/// Build a `GatewayConfig` from a profile, falling back to `defaults`
/// for every unset override.
pub fn profile_to_gateway_config(
    profile: &Profile,
    defaults: &Defaults,
) -> Result<GatewayConfig, ConfigError> {
    build_gateway_config(
        &profile.gateway,
        profile.timeout.unwrap_or(defaults.timeout),
        profile.connect_timeout.unwrap_or(defaults.connect_timeout),
        profile.refresh_interval.unwrap_or(defaults.refresh_interval),
        profile.auto_refresh.unwrap_or(defaults.auto_refresh),
    )
}

/// Build a `GatewayConfig` for `gateway` (or the built-in address) using
/// only `defaults`.
pub fn defaults_to_gateway_config(
    gateway: Option<&str>,
    defaults: &Defaults,
) -> Result<GatewayConfig, ConfigError> {
    build_gateway_config(
        gateway.unwrap_or(DEFAULT_GATEWAY_URL),
        defaults.timeout,
        defaults.connect_timeout,
        defaults.refresh_interval,
        defaults.auto_refresh,
    )
}

fn build_gateway_config(
    gateway: &str,
    timeout: u64,
    connect_timeout: u64,
    refresh_interval: u64,
    auto_refresh: bool,
) -> Result<GatewayConfig, ConfigError> {
    let url = parse_gateway_url(gateway)?;

    for (field, value) in [
        ("timeout", timeout),
        ("connect_timeout", connect_timeout),
        ("refresh_interval", refresh_interval),
    ] {
        if value == 0 {
            return Err(ConfigError::Validation {
                field: field.into(),
                reason: "must be at least 1 second".into(),
            });
        }
    }

    Ok(GatewayConfig {
        url,
        timeout: Duration::from_secs(timeout),
        connect_timeout: Duration::from_secs(connect_timeout),
        refresh_interval: Duration::from_secs(refresh_interval),
        auto_refresh,
    })
}

/// Parse and check a gateway base URL (http or https only).
pub fn parse_gateway_url(raw: &str) -> Result<url::Url, ConfigError> {
    let url: url::Url = raw.parse().map_err(|_| ConfigError::Validation {
        field: "gateway".into(),
        reason: format!("invalid URL: {raw}"),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::Validation {
            field: "gateway".into(),
            reason: format!("expected http or https, got '{other}'"),
        }),
    }
}
