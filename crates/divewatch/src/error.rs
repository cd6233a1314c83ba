//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors
//! with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use divewatch_config::ConfigError;
use divewatch_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to gateway at {url}: {reason}")]
    #[diagnostic(
        code(divewatch::connection_failed),
        help(
            "Check that the gateway is running and reachable.\n\
             URL: {url}\n\
             Try: divewatch --gateway http://<host>:1880/ sites list"
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Gateway request timed out")]
    #[diagnostic(
        code(divewatch::timeout),
        help("Increase timeout with --timeout or check gateway responsiveness.")
    )]
    Timeout,

    // ── Resources ────────────────────────────────────────────────────
    #[error("'{identifier}' not found")]
    #[diagnostic(
        code(divewatch::not_found),
        help("Run: divewatch sites list to see available sites")
    )]
    NotFound { identifier: String },

    // ── API ──────────────────────────────────────────────────────────
    #[error("Gateway error: {message}")]
    #[diagnostic(code(divewatch::api_error))]
    ApiError { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(divewatch::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(divewatch::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: divewatch --profile {name} --gateway <url> config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Profile '{name}' already exists")]
    #[diagnostic(
        code(divewatch::profile_exists),
        help("Use --force to replace it.")
    )]
    ProfileExists { name: String },

    #[error("{0}")]
    #[diagnostic(code(divewatch::config))]
    Config(ConfigError),

    // ── IO ───────────────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::ProfileNotFound { .. } | Self::ProfileExists { .. } => {
                exit_code::USAGE
            }
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed { url, reason },
            CoreError::Timeout => CliError::Timeout,
            CoreError::NotFound { identifier } => CliError::NotFound { identifier },
            CoreError::Config { message } => CliError::Validation {
                field: "gateway".into(),
                reason: message,
            },
            other @ (CoreError::Api { .. } | CoreError::Format { .. } | CoreError::Internal(_)) => {
                CliError::ApiError {
                    message: other.to_string(),
                }
            }
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::ProfileNotFound { name } => CliError::ProfileNotFound {
                name,
                available: String::new(),
            },
            ConfigError::Io(e) => CliError::Io(e),
            other => CliError::Config(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_exit_codes() {
        let refused = CliError::from(CoreError::ConnectionFailed {
            url: "http://192.168.1.76:1880/".into(),
            reason: "connection refused".into(),
        });
        assert_eq!(refused.exit_code(), exit_code::CONNECTION);
        assert_eq!(CliError::from(CoreError::Timeout).exit_code(), exit_code::TIMEOUT);

        let missing = CliError::from(CoreError::NotFound {
            identifier: "secca_di_capistello".into(),
        });
        assert_eq!(missing.exit_code(), exit_code::NOT_FOUND);
    }

    #[test]
    fn api_errors_keep_status_text() {
        let err = CliError::from(CoreError::Api {
            message: "HTTP 503: maintenance".into(),
            status: Some(503),
        });
        assert!(err.to_string().contains("503"));
        assert_eq!(err.exit_code(), exit_code::GENERAL);
    }

    #[test]
    fn config_validation_is_a_usage_error() {
        let err = CliError::from(ConfigError::Validation {
            field: "gateway".into(),
            reason: "invalid URL: nope".into(),
        });
        assert_eq!(err.exit_code(), exit_code::USAGE);
    }
}
