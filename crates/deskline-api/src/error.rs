use thiserror::Error;

/// Top-level error type for the `deskline-api` crate.
///
/// Every failure a request can produce is classified into a fixed
/// taxonomy: user-facing outcomes (not found, forbidden, unauthorized,
/// bad request, conflict) and system outcomes (internal server error,
/// malformed response, transport failure). `deskline-core` maps these
/// into its own diagnostics without ever re-inspecting status codes.
#[derive(Debug, Error)]
pub enum Error {
    // ── User-facing (HTTP 4xx) ──────────────────────────────────────
    /// 404 — the requested record does not exist.
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// 403 — the session lacks permission for this operation.
    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    /// 401 — no valid session, or the session has expired.
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// 400 — the server rejected the request payload.
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// 409 — the operation conflicts with current server state.
    #[error("Conflict: {message}")]
    Conflict { message: String },

    // ── System ──────────────────────────────────────────────────────
    /// 5xx — server-side failure.
    #[error("Internal server error (HTTP {status}): {message}")]
    Internal { message: String, status: u16 },

    /// Response body failed envelope or schema decoding, with the raw
    /// body for debugging.
    #[error("Bad response: {message}")]
    BadResponse { message: String, body: String },

    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS configuration or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),
}

impl Error {
    /// Returns `true` for errors a user can act on (not found, forbidden,
    /// unauthorized, bad request, conflict). Everything else is a system
    /// error that callers surface generically.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::Forbidden { .. }
                | Self::Unauthorized { .. }
                | Self::BadRequest { .. }
                | Self::Conflict { .. }
        )
    }

    /// Returns `true` if this error indicates a missing or expired session.
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Fetch(e) => e.is_timeout() || e.is_connect(),
            Self::Internal { .. } => true,
            _ => false,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn user_facing_kinds() {
        let user_facing = [
            Error::NotFound { message: String::new() },
            Error::Forbidden { message: String::new() },
            Error::Unauthorized { message: String::new() },
            Error::BadRequest { message: String::new() },
            Error::Conflict { message: String::new() },
        ];
        for err in user_facing {
            assert!(err.is_user_facing(), "{err:?} should be user-facing");
        }
    }

    #[test]
    fn system_kinds_are_not_user_facing() {
        let system = [
            Error::Internal { message: String::new(), status: 500 },
            Error::BadResponse { message: String::new(), body: String::new() },
            Error::Tls(String::new()),
        ];
        for err in system {
            assert!(!err.is_user_facing(), "{err:?} should be a system error");
        }
    }
}
