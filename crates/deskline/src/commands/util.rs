//! Shared helpers for command handlers.

use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;

use deskline_config::Config;
use deskline_core::{CoreError, Desk, EntityId, ListQuery};

use crate::cli::{GlobalOpts, ListArgs};
use crate::error::CliError;
use crate::output;

/// Make sure the desk has a live session, signing in from stored
/// credentials when the persisted session is gone or expired.
pub async fn ensure_session(
    desk: &Desk,
    config: &Config,
    profile_name: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match desk.resume().await {
        Ok(Some(_)) => return Ok(()),
        // No session, or an expired one: fall through to a fresh login.
        Ok(None) | Err(CoreError::SessionExpired { .. }) => {}
        Err(e) => return Err(e.into()),
    }

    let creds = crate::config::resolve_login(global, config, profile_name)?;
    tracing::debug!(email = %creds.email, "no persisted session, signing in");
    desk.login(&creds.email, &creds.password).await?;
    Ok(())
}

/// Parse an identifier argument into an `EntityId`.
pub fn entity_id(raw: &str) -> EntityId {
    EntityId::from(raw.to_owned())
}

/// Translate shared list flags into an API-side filter.
pub fn list_query(args: &ListArgs) -> ListQuery {
    ListQuery {
        search: args.search.clone(),
        is_archived: args.archived.then_some(true),
        page: args.page,
        per_page: args.per_page,
    }
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Print a short status line to stderr, respecting quiet and color modes.
pub fn notify(global: &GlobalOpts, message: &str) {
    if global.quiet {
        return;
    }
    if output::should_color(&global.color) {
        eprintln!("{} {message}", "✓".green());
    } else {
        eprintln!("{message}");
    }
}

/// Render a timestamp for table cells.
pub fn fmt_time(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

/// Render an optional string for table cells.
pub fn fmt_opt(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

/// Render an optional entity ID for table cells.
pub fn fmt_opt_id(value: Option<&EntityId>) -> String {
    value.map_or_else(|| "-".into(), ToString::to_string)
}
