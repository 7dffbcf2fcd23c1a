//! Admin account command handlers.
//!
//! Mutations here are gated on the super admin role before any request
//! goes out.

use tabled::Tabled;

use deskline_core::{Admin, AdminRole, CreateAdmin, Desk, UpdateAdmin};

use crate::cli::{AdminRoleArg, AdminsArgs, AdminsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

impl From<AdminRoleArg> for AdminRole {
    fn from(arg: AdminRoleArg) -> Self {
        match arg {
            AdminRoleArg::SuperAdmin => Self::SuperAdmin,
            AdminRoleArg::Agent => Self::Agent,
        }
    }
}

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct AdminRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Active")]
    active: String,
}

impl From<&Admin> for AdminRow {
    fn from(a: &Admin) -> Self {
        Self {
            id: a.id.to_string(),
            name: a.name.clone(),
            email: a.email.clone(),
            role: a.role.to_string(),
            active: if a.is_active { "yes" } else { "no" }.into(),
        }
    }
}

fn admin_detail(a: &Admin) -> String {
    [
        format!("ID:       {}", a.id),
        format!("Name:     {}", a.name),
        format!("Email:    {}", a.email),
        format!("Role:     {}", a.role),
        format!("Active:   {}", if a.is_active { "yes" } else { "no" }),
        format!("Created:  {}", util::fmt_time(&a.created_at)),
        format!("Updated:  {}", util::fmt_time(&a.updated_at)),
    ]
    .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(desk: &Desk, args: AdminsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let queries = desk.queries();
    let mutations = desk.mutations();

    match args.command {
        AdminsCommand::List(list) => {
            let admins = queries.admins(&util::list_query(&list)).await?;
            output::Printer::new(global).list(admins.as_slice(), |x| AdminRow::from(x), |a| {
                a.id.to_string()
            });
            Ok(())
        }

        AdminsCommand::Get { id } => {
            let admin = queries.admin(&util::entity_id(&id)).await?;
            output::Printer::new(global).single(&*admin, admin_detail, |a| a.id.to_string());
            Ok(())
        }

        AdminsCommand::Create { name, email, role } => {
            desk.require_super_admin()?;
            let admin = mutations
                .create_admin(&CreateAdmin {
                    name,
                    email,
                    role: AdminRole::from(role).into(),
                })
                .await?;
            util::notify(global, &format!("Admin {} created", admin.id));
            Ok(())
        }

        AdminsCommand::Update {
            id,
            name,
            email,
            role,
        } => {
            desk.require_super_admin()?;
            mutations
                .update_admin(
                    &util::entity_id(&id),
                    &UpdateAdmin {
                        name,
                        email,
                        role: role.map(|r| AdminRole::from(r).into()),
                    },
                )
                .await?;
            util::notify(global, "Admin updated");
            Ok(())
        }

        AdminsCommand::Deactivate { id } => {
            desk.require_super_admin()?;
            if !util::confirm(&format!("Deactivate admin {id}?"), global.yes)? {
                return Ok(());
            }
            mutations.deactivate_admin(&util::entity_id(&id)).await?;
            util::notify(global, "Admin deactivated");
            Ok(())
        }

        AdminsCommand::Activate { id } => {
            desk.require_super_admin()?;
            mutations.activate_admin(&util::entity_id(&id)).await?;
            util::notify(global, "Admin reactivated");
            Ok(())
        }
    }
}
