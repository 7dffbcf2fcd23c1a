// ── Runtime connection configuration ──
//
// These types describe *how* to reach a helpdesk server. They carry
// credential data and connection tuning, but never touch disk. The CLI
// constructs a `ClientConfig` and hands it in.

use secrecy::SecretString;
use url::Url;

/// Login credentials for a helpdesk admin.
#[derive(Debug, Clone)]
pub struct AuthCredentials {
    pub email: String,
    pub password: SecretString,
}

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(std::path::PathBuf),
    /// Skip verification (self-hosted instances with self-signed certs).
    DangerAcceptInvalid,
}

/// Configuration for connecting to a single helpdesk server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server URL (e.g. `https://desk.example.com`).
    pub url: Url,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Request timeout.
    pub timeout: std::time::Duration,
}

impl ClientConfig {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            tls: TlsVerification::default(),
            timeout: std::time::Duration::from_secs(30),
        }
    }
}

impl From<&TlsVerification> for deskline_api::TlsMode {
    fn from(tls: &TlsVerification) -> Self {
        match tls {
            TlsVerification::SystemDefaults => Self::System,
            TlsVerification::CustomCa(path) => Self::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => Self::DangerAcceptInvalid,
        }
    }
}
