//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use deskline_config::ConfigError;
use deskline_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const PERMISSION: i32 = 5;
    pub const CONFLICT: i32 = 6;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the Deskline server")]
    #[diagnostic(
        code(deskline::connection_failed),
        help(
            "Check that the server is running and the profile URL is correct.\n\
             Reason: {reason}"
        )
    )]
    ConnectionFailed { reason: String },

    // ── Authentication ───────────────────────────────────────────────

    #[error("Not signed in")]
    #[diagnostic(
        code(deskline::auth_required),
        help("Sign in first: deskline auth login")
    )]
    AuthRequired,

    #[error("Session expired: {message}")]
    #[diagnostic(
        code(deskline::session_expired),
        help("Sign in again: deskline auth login")
    )]
    SessionExpired { message: String },

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(deskline::no_credentials),
        help(
            "Configure credentials with: deskline config init\n\
             Or set the DESKLINE_EMAIL environment variable and store a\n\
             password with: deskline config set-password"
        )
    )]
    NoCredentials { profile: String },

    #[error("Permission denied: {message}")]
    #[diagnostic(
        code(deskline::permission_denied),
        help("This operation requires the super admin role.")
    )]
    PermissionDenied { message: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("Not found: {message}")]
    #[diagnostic(
        code(deskline::not_found),
        help("Check the ID. The corresponding list command shows available records.")
    )]
    NotFound { message: String },

    #[error("Conflict: {message}")]
    #[diagnostic(
        code(deskline::conflict),
        help("A record with the same unique value already exists.")
    )]
    Conflict { message: String },

    // ── Server ───────────────────────────────────────────────────────

    #[error("Server error: {message}")]
    #[diagnostic(code(deskline::server_error))]
    ServerError { message: String },

    #[error("The server returned a response the CLI could not read")]
    #[diagnostic(
        code(deskline::bad_response),
        help("Detail: {message}\nThe server and CLI versions may be out of sync.")
    )]
    BadResponse { message: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(deskline::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(deskline::profile_not_found),
        help("List profiles with: deskline config profiles")
    )]
    ProfileNotFound { name: String },

    #[error("No server configured")]
    #[diagnostic(
        code(deskline::no_config),
        help(
            "Create a config with: deskline config init\n\
             Or pass --server https://desk.example.com\n\
             Expected config at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(deskline::config))]
    Config { message: String },

    // ── IO ───────────────────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthRequired | Self::SessionExpired { .. } | Self::NoCredentials { .. } => {
                exit_code::AUTH
            }
            Self::PermissionDenied { .. } => exit_code::PERMISSION,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Conflict { .. } => exit_code::CONFLICT,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::AuthenticationRequired => CliError::AuthRequired,

            CoreError::SessionExpired { message } => CliError::SessionExpired { message },

            CoreError::PermissionDenied { message } => CliError::PermissionDenied { message },

            CoreError::NotFound { message } => CliError::NotFound { message },

            CoreError::ValidationFailed { message } => CliError::Validation {
                field: "input".into(),
                reason: message,
            },

            CoreError::Conflict { message } => CliError::Conflict { message },

            // Surface the underlying cause, which carries the taxonomy.
            CoreError::MutationFailed { operation, source } => {
                let mapped = CliError::from(*source);
                match mapped {
                    CliError::Validation { field: _, reason } => CliError::Validation {
                        field: operation,
                        reason,
                    },
                    other => other,
                }
            }

            CoreError::Server { message } => CliError::ServerError { message },

            CoreError::ConnectionFailed { reason } => CliError::ConnectionFailed { reason },

            CoreError::BadResponse { message } => CliError::BadResponse { message },

            CoreError::SessionStore { message } | CoreError::Config { message } => {
                CliError::Config { message }
            }

            CoreError::Internal(message) => CliError::ServerError { message },
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },

            ConfigError::NoSuchProfile { profile } => CliError::ProfileNotFound { name: profile },

            ConfigError::NoCredentials { profile } => CliError::NoCredentials { profile },

            ConfigError::Serialization(e) => CliError::Config {
                message: e.to_string(),
            },

            ConfigError::Figment(e) => CliError::Config {
                message: e.to_string(),
            },

            ConfigError::Io(e) => CliError::Io(e),
        }
    }
}
