//! Bridges CLI flags and the shared config crate into core types.
//!
//! Profile lookup, flag overrides, and `Desk` construction live here so
//! command handlers only ever see a ready-to-use `Desk`.

use std::time::Duration;

use secrecy::SecretString;

use deskline_config::{Config, Profile};
use deskline_core::{AuthCredentials, ClientConfig, Desk, TlsVerification};

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

/// Build a connected-but-unauthenticated `Desk` from config + flags.
pub fn build_desk(global: &GlobalOpts) -> Result<(Desk, Config, String), CliError> {
    let config = deskline_config::load_config_or_default();
    let profile_name = active_profile_name(global, &config);

    let client_config = resolve_client_config(global, &config, &profile_name)?;
    let desk = Desk::open(client_config)?;
    Ok((desk, config, profile_name))
}

/// Translate a profile + global flags into a `ClientConfig`.
///
/// Flags win over profile values. With no profile at all, `--server`
/// (or `DESKLINE_SERVER`) alone is enough for a connection.
pub fn resolve_client_config(
    global: &GlobalOpts,
    config: &Config,
    profile_name: &str,
) -> Result<ClientConfig, CliError> {
    if let Some(profile) = config.profiles.get(profile_name) {
        let mut client = deskline_config::profile_to_client_config(profile, &config.defaults)?;

        if let Some(ref url_str) = global.server {
            client.url = parse_server_url(url_str)?;
        }
        if global.insecure {
            client.tls = TlsVerification::DangerAcceptInvalid;
        }
        client.timeout = Duration::from_secs(global.timeout);
        return Ok(client);
    }

    // --profile named a profile that doesn't exist.
    if global.profile.is_some() {
        return Err(CliError::ProfileNotFound {
            name: profile_name.into(),
        });
    }

    // No profile: build from flags / env alone.
    let url_str = global.server.as_deref().ok_or_else(|| CliError::NoConfig {
        path: deskline_config::config_path().display().to_string(),
    })?;

    let mut client = ClientConfig::new(parse_server_url(url_str)?);
    if global.insecure {
        client.tls = TlsVerification::DangerAcceptInvalid;
    }
    client.timeout = Duration::from_secs(global.timeout);
    Ok(client)
}

/// Resolve login credentials (flags win over profile/env/keyring).
pub fn resolve_login(
    global: &GlobalOpts,
    config: &Config,
    profile_name: &str,
) -> Result<AuthCredentials, CliError> {
    let profile = config.profiles.get(profile_name);

    let email = global
        .email
        .clone()
        .or_else(|| profile.and_then(|p| p.email.clone()))
        .ok_or_else(|| CliError::NoCredentials {
            profile: profile_name.into(),
        })?;

    let password = resolve_password(profile, profile_name)?;
    Ok(AuthCredentials { email, password })
}

fn resolve_password(
    profile: Option<&Profile>,
    profile_name: &str,
) -> Result<SecretString, CliError> {
    if let Some(profile) = profile {
        return Ok(deskline_config::resolve_password(profile, profile_name)?);
    }

    // Profileless invocation: keyring is still worth a try.
    if let Ok(entry) = keyring::Entry::new("deskline", &format!("{profile_name}/password")) {
        if let Ok(secret) = entry.get_password() {
            return Ok(SecretString::from(secret));
        }
    }

    Err(CliError::NoCredentials {
        profile: profile_name.into(),
    })
}

fn parse_server_url(url_str: &str) -> Result<url::Url, CliError> {
    url_str.parse().map_err(|_| CliError::Validation {
        field: "server".into(),
        reason: format!("invalid URL: {url_str}"),
    })
}
