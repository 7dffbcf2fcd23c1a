//! Session command handlers: login, logout, whoami.

use secrecy::SecretString;

use deskline_config::Config;
use deskline_core::{Admin, CoreError, Desk};

use crate::cli::{AuthArgs, AuthCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

fn whoami_detail(a: &Admin) -> String {
    [
        format!("ID:     {}", a.id),
        format!("Name:   {}", a.name),
        format!("Email:  {}", a.email),
        format!("Role:   {}", a.role),
    ]
    .join("\n")
}

pub async fn handle(
    desk: &Desk,
    args: AuthArgs,
    config: &Config,
    profile_name: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        AuthCommand::Login { email } => {
            let email = match email
                .or_else(|| global.email.clone())
                .or_else(|| config.profiles.get(profile_name).and_then(|p| p.email.clone()))
            {
                Some(e) => e,
                None => prompt_text("Email")?,
            };

            // Stored password first, interactive prompt as fallback.
            let password = match crate::config::resolve_login(global, config, profile_name) {
                Ok(creds) if creds.email == email => creds.password,
                _ => SecretString::from(
                    rpassword::prompt_password("Password: ").map_err(CliError::Io)?,
                ),
            };

            let admin = desk.login(&email, &password).await?;
            util::notify(
                global,
                &format!("Signed in as {} ({})", admin.email, admin.role),
            );
            Ok(())
        }

        AuthCommand::Logout => {
            // Without a resumable session there is nothing to tear down
            // server-side; clearing local state is still worth doing.
            match desk.resume().await {
                Ok(Some(_)) => desk.logout().await?,
                Ok(None) | Err(CoreError::SessionExpired { .. }) => {}
                Err(e) => return Err(e.into()),
            }
            util::notify(global, "Signed out");
            Ok(())
        }

        AuthCommand::Whoami => {
            let Some(admin) = desk.resume().await? else {
                return Err(CliError::AuthRequired);
            };
            output::Printer::new(global).single(&admin, whoami_detail, |a| a.id.to_string());
            Ok(())
        }
    }
}

fn prompt_text(label: &str) -> Result<String, CliError> {
    dialoguer::Input::new()
        .with_prompt(label)
        .interact_text()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))
}
