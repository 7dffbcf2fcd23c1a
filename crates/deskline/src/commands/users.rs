//! End user command handlers.

use tabled::Tabled;

use deskline_core::{CreateUser, Desk, UpdateUser, User};

use crate::cli::{GlobalOpts, UsersArgs, UsersCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Archived")]
    archived: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.id.to_string(),
            name: u.name.clone(),
            email: u.email.clone(),
            phone: util::fmt_opt(u.phone.as_deref()),
            archived: if u.is_archived { "yes" } else { "no" }.into(),
        }
    }
}

fn user_detail(u: &User) -> String {
    [
        format!("ID:       {}", u.id),
        format!("Name:     {}", u.name),
        format!("Email:    {}", u.email),
        format!("Phone:    {}", util::fmt_opt(u.phone.as_deref())),
        format!("Archived: {}", if u.is_archived { "yes" } else { "no" }),
        format!("Created:  {}", util::fmt_time(&u.created_at)),
        format!("Updated:  {}", util::fmt_time(&u.updated_at)),
    ]
    .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(desk: &Desk, args: UsersArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let queries = desk.queries();
    let mutations = desk.mutations();

    match args.command {
        UsersCommand::List(list) => {
            let users = queries.users(&util::list_query(&list)).await?;
            output::Printer::new(global).list(users.as_slice(), |x| UserRow::from(x), |u| {
                u.id.to_string()
            });
            Ok(())
        }

        UsersCommand::Get { id } => {
            let user = queries.user(&util::entity_id(&id)).await?;
            output::Printer::new(global).single(&*user, user_detail, |u| u.id.to_string());
            Ok(())
        }

        UsersCommand::Create { name, email, phone } => {
            let user = mutations
                .create_user(&CreateUser { name, email, phone })
                .await?;
            util::notify(global, &format!("User {} created", user.id));
            Ok(())
        }

        UsersCommand::Update {
            id,
            name,
            email,
            phone,
        } => {
            mutations
                .update_user(&util::entity_id(&id), &UpdateUser { name, email, phone })
                .await?;
            util::notify(global, "User updated");
            Ok(())
        }

        UsersCommand::Archive { id } => {
            if !util::confirm(&format!("Archive user {id}?"), global.yes)? {
                return Ok(());
            }
            mutations.archive_user(&util::entity_id(&id)).await?;
            util::notify(global, "User archived");
            Ok(())
        }

        UsersCommand::Restore { id } => {
            mutations.restore_user(&util::entity_id(&id)).await?;
            util::notify(global, "User restored");
            Ok(())
        }
    }
}
