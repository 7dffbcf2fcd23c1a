//! Client organization command handlers.

use tabled::Tabled;

use deskline_core::{Client, CreateClient, Desk, UpdateClient};

use crate::cli::{ClientsArgs, ClientsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct ClientRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Domain")]
    domain: String,
    #[tabled(rename = "Archived")]
    archived: String,
}

impl From<&Client> for ClientRow {
    fn from(c: &Client) -> Self {
        Self {
            id: c.id.to_string(),
            name: c.name.clone(),
            domain: util::fmt_opt(c.domain.as_deref()),
            archived: if c.is_archived { "yes" } else { "no" }.into(),
        }
    }
}

fn client_detail(c: &Client) -> String {
    [
        format!("ID:       {}", c.id),
        format!("Name:     {}", c.name),
        format!("Domain:   {}", util::fmt_opt(c.domain.as_deref())),
        format!("Archived: {}", if c.is_archived { "yes" } else { "no" }),
        format!("Created:  {}", util::fmt_time(&c.created_at)),
        format!("Updated:  {}", util::fmt_time(&c.updated_at)),
    ]
    .join("\n")
}

pub async fn handle(desk: &Desk, args: ClientsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let queries = desk.queries();
    let mutations = desk.mutations();

    match args.command {
        ClientsCommand::List(list) => {
            let clients = queries.clients(&util::list_query(&list)).await?;
            output::Printer::new(global).list(clients.as_slice(), |x| ClientRow::from(x), |c| {
                c.id.to_string()
            });
            Ok(())
        }

        ClientsCommand::Get { id } => {
            let client = queries.client(&util::entity_id(&id)).await?;
            output::Printer::new(global).single(&*client, client_detail, |c| c.id.to_string());
            Ok(())
        }

        ClientsCommand::Create { name, domain } => {
            let client = mutations.create_client(&CreateClient { name, domain }).await?;
            util::notify(global, &format!("Client {} created", client.id));
            Ok(())
        }

        ClientsCommand::Update { id, name, domain } => {
            mutations
                .update_client(&util::entity_id(&id), &UpdateClient { name, domain })
                .await?;
            util::notify(global, "Client updated");
            Ok(())
        }

        ClientsCommand::Archive { id } => {
            if !util::confirm(&format!("Archive client {id}?"), global.yes)? {
                return Ok(());
            }
            mutations.archive_client(&util::entity_id(&id)).await?;
            util::notify(global, "Client archived");
            Ok(())
        }

        ClientsCommand::Restore { id } => {
            mutations.restore_client(&util::entity_id(&id)).await?;
            util::notify(global, "Client restored");
            Ok(())
        }
    }
}
