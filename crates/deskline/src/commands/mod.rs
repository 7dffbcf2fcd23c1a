//! Command dispatch: bridges CLI args -> core facades -> output formatting.

pub mod actions;
pub mod admins;
pub mod audit;
pub mod auth;
pub mod channels;
pub mod clients;
pub mod config_cmd;
pub mod tags;
pub mod tickets;
pub mod users;
pub mod util;

use deskline_config::Config;
use deskline_core::Desk;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a server-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    desk: &Desk,
    config: &Config,
    profile_name: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    // Auth commands manage the session themselves.
    if let Command::Auth(args) = cmd {
        return auth::handle(desk, args, config, profile_name, global).await;
    }

    // Everything else needs a signed-in session first.
    util::ensure_session(desk, config, profile_name, global).await?;

    match cmd {
        Command::Tickets(args) => tickets::handle(desk, args, global).await,
        Command::Tags(args) => tags::handle(desk, args, global).await,
        Command::Users(args) => users::handle(desk, args, global).await,
        Command::Admins(args) => admins::handle(desk, args, global).await,
        Command::Channels(args) => channels::handle(desk, args, global).await,
        Command::Clients(args) => clients::handle(desk, args, global).await,
        Command::Actions(args) => actions::handle(desk, args, global).await,
        Command::Audit(args) => audit::handle(desk, args, global).await,
        // Auth handled above; Config and Completions are handled before dispatch
        Command::Auth(_) | Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
