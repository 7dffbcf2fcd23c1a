// ── Core error types ──
//
// User-facing errors from deskline-core. These are NOT API-specific --
// consumers never see HTTP status codes or JSON parse failures directly.
// The `From<deskline_api::Error>` impl translates transport-layer errors
// into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Auth errors ──────────────────────────────────────────────────
    /// A guard rejected the call because no session is active.
    #[error("Not signed in -- run login first")]
    AuthenticationRequired,

    /// The server rejected the session (expired or never valid).
    #[error("Session expired: {message}")]
    SessionExpired { message: String },

    /// A guard or the server rejected the call for lack of privileges.
    #[error("Permission denied: {message}")]
    PermissionDenied { message: String },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    // ── Mutation errors ──────────────────────────────────────────────
    /// A mutation failed before its invalidations were applied. The
    /// original cause is retained as the error source.
    #[error("{operation} failed")]
    MutationFailed {
        operation: String,
        #[source]
        source: Box<CoreError>,
    },

    // ── System errors ────────────────────────────────────────────────
    #[error("Server error: {message}")]
    Server { message: String },

    #[error("Cannot reach server: {reason}")]
    ConnectionFailed { reason: String },

    #[error("Malformed server response: {message}")]
    BadResponse { message: String },

    #[error("Session storage error: {message}")]
    SessionStore { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Errors a user can act on; everything else is surfaced generically.
    pub fn is_user_facing(&self) -> bool {
        match self {
            Self::AuthenticationRequired
            | Self::SessionExpired { .. }
            | Self::PermissionDenied { .. }
            | Self::NotFound { .. }
            | Self::ValidationFailed { .. }
            | Self::Conflict { .. } => true,
            Self::MutationFailed { source, .. } => source.is_user_facing(),
            _ => false,
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<deskline_api::Error> for CoreError {
    fn from(err: deskline_api::Error) -> Self {
        match err {
            deskline_api::Error::NotFound { message } => CoreError::NotFound { message },
            deskline_api::Error::Forbidden { message } => CoreError::PermissionDenied { message },
            deskline_api::Error::Unauthorized { message } => CoreError::SessionExpired { message },
            deskline_api::Error::BadRequest { message } => CoreError::ValidationFailed { message },
            deskline_api::Error::Conflict { message } => CoreError::Conflict { message },
            deskline_api::Error::Internal { message, status } => CoreError::Server {
                message: format!("{message} (HTTP {status})"),
            },
            deskline_api::Error::BadResponse { message, body: _ } => {
                CoreError::BadResponse { message }
            }
            deskline_api::Error::Fetch(e) => CoreError::ConnectionFailed {
                reason: e.to_string(),
            },
            deskline_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            deskline_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                reason: format!("TLS error: {msg}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CoreError;

    #[test]
    fn user_facing_follows_the_api_taxonomy() {
        let user_facing: CoreError = deskline_api::Error::NotFound {
            message: "no such ticket".into(),
        }
        .into();
        assert!(user_facing.is_user_facing());

        let system: CoreError = deskline_api::Error::Internal {
            message: "boom".into(),
            status: 500,
        }
        .into();
        assert!(!system.is_user_facing());
    }

    #[test]
    fn mutation_failure_classifies_by_its_cause() {
        let failed = CoreError::MutationFailed {
            operation: "create ticket tag".into(),
            source: Box::new(CoreError::Conflict {
                message: "tag exists".into(),
            }),
        };
        assert!(failed.is_user_facing());

        let failed = CoreError::MutationFailed {
            operation: "create ticket tag".into(),
            source: Box::new(CoreError::Server {
                message: "boom".into(),
            }),
        };
        assert!(!failed.is_user_facing());
    }
}
