//! Config subcommand handlers.

use dialoguer::{Input, Select};
use tabled::Tabled;

use deskline_config::{Config, Profile};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

// ── Helpers ─────────────────────────────────────────────────────────

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

/// A copy of the config safe to print: plaintext passwords redacted.
fn redacted(config: &Config) -> Config {
    let mut shown = Config {
        default_profile: config.default_profile.clone(),
        defaults: config.defaults.clone(),
        profiles: config.profiles.clone(),
    };
    for profile in shown.profiles.values_mut() {
        if profile.password.is_some() {
            profile.password = Some("<redacted>".into());
        }
    }
    shown
}

#[derive(Tabled)]
struct ProfileRow {
    #[tabled(rename = "Profile")]
    name: String,
    #[tabled(rename = "Server")]
    server: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Default")]
    default: String,
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let config_path = deskline_config::config_path();
            eprintln!("deskline — configuration wizard");
            eprintln!("  Config path: {}\n", config_path.display());

            let profile_name: String = Input::new()
                .with_prompt("Profile name")
                .default("default".into())
                .interact_text()
                .map_err(prompt_err)?;

            let server: String = Input::new()
                .with_prompt("Server URL")
                .default("https://desk.example.com".into())
                .interact_text()
                .map_err(prompt_err)?;

            let email: String = Input::new()
                .with_prompt("Admin email")
                .interact_text()
                .map_err(prompt_err)?;

            let password = rpassword::prompt_password("Password: ").map_err(CliError::Io)?;
            if password.is_empty() {
                return Err(CliError::Validation {
                    field: "password".into(),
                    reason: "password cannot be empty".into(),
                });
            }

            // Offer keyring storage over plaintext.
            let store_choices = &[
                "Store in system keyring (recommended)",
                "Save to config file (plaintext)",
            ];
            let store_selection = Select::new()
                .with_prompt("Where to store the password?")
                .items(store_choices)
                .default(0)
                .interact()
                .map_err(prompt_err)?;

            let password_field = if store_selection == 0 {
                deskline_config::store_password(&profile_name, &password)?;
                eprintln!("  Password stored in system keyring");
                None
            } else {
                Some(password)
            };

            let mut config = deskline_config::load_config_or_default();
            config.profiles.insert(
                profile_name.clone(),
                Profile {
                    server,
                    email: Some(email),
                    password: password_field,
                    password_env: None,
                    ca_cert: None,
                    insecure: None,
                    timeout: None,
                },
            );
            if config.default_profile.is_none() {
                config.default_profile = Some(profile_name.clone());
            }
            deskline_config::save_config(&config)?;

            eprintln!("\nProfile '{profile_name}' saved. Try: deskline auth login");
            Ok(())
        }

        // ── Show: resolved configuration ────────────────────────────
        ConfigCommand::Show => {
            let config = redacted(&deskline_config::load_config_or_default());
            let out = match global.output {
                OutputFormat::Json | OutputFormat::JsonCompact => {
                    output::render_json_pretty(&config)
                }
                _ => toml::to_string_pretty(&config).map_err(|e| CliError::Config {
                    message: e.to_string(),
                })?,
            };
            println!("{out}");
            Ok(())
        }

        // ── Profiles: list ──────────────────────────────────────────
        ConfigCommand::Profiles => {
            let config = deskline_config::load_config_or_default();
            let default = config.default_profile.clone().unwrap_or_default();

            let mut names: Vec<&String> = config.profiles.keys().collect();
            names.sort();

            let rows: Vec<ProfileRow> = names
                .iter()
                .filter_map(|name| config.profiles.get(*name).map(|p| (name, p)))
                .map(|(name, p)| ProfileRow {
                    name: (*name).clone(),
                    server: p.server.clone(),
                    email: p.email.clone().unwrap_or_default(),
                    default: if **name == default { "*" } else { "" }.into(),
                })
                .collect();

            if rows.is_empty() {
                eprintln!("No profiles configured. Run: deskline config init");
                return Ok(());
            }

            let table = tabled::Table::new(&rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            output::Printer::new(global).emit(&table);
            Ok(())
        }

        // ── Use: set default profile ────────────────────────────────
        ConfigCommand::Use { name } => {
            let mut config = deskline_config::load_config_or_default();
            if !config.profiles.contains_key(&name) {
                return Err(CliError::ProfileNotFound { name });
            }
            config.default_profile = Some(name.clone());
            deskline_config::save_config(&config)?;
            eprintln!("Default profile set to '{name}'");
            Ok(())
        }

        // ── SetPassword: keyring storage ────────────────────────────
        ConfigCommand::SetPassword { profile } => {
            let config = deskline_config::load_config_or_default();
            let profile_name = profile
                .or_else(|| global.profile.clone())
                .or_else(|| config.default_profile.clone())
                .unwrap_or_else(|| "default".into());

            let password = rpassword::prompt_password("Password: ").map_err(CliError::Io)?;
            if password.is_empty() {
                return Err(CliError::Validation {
                    field: "password".into(),
                    reason: "password cannot be empty".into(),
                });
            }

            deskline_config::store_password(&profile_name, &password)?;
            eprintln!("Password stored in keyring for profile '{profile_name}'");
            Ok(())
        }
    }
}
