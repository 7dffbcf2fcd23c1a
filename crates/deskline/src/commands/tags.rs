//! Ticket tag command handlers.

use tabled::Tabled;

use deskline_core::{CreateTicketTag, Desk, TicketTag, UpdateTicketTag};

use crate::cli::{GlobalOpts, TagsArgs, TagsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct TagRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Color")]
    color: String,
    #[tabled(rename = "Archived")]
    archived: String,
}

impl From<&TicketTag> for TagRow {
    fn from(t: &TicketTag) -> Self {
        Self {
            id: t.id.to_string(),
            name: t.name.clone(),
            color: util::fmt_opt(t.color.as_deref()),
            archived: if t.is_archived { "yes" } else { "no" }.into(),
        }
    }
}

fn tag_detail(t: &TicketTag) -> String {
    [
        format!("ID:       {}", t.id),
        format!("Name:     {}", t.name),
        format!("Color:    {}", util::fmt_opt(t.color.as_deref())),
        format!("Archived: {}", if t.is_archived { "yes" } else { "no" }),
        format!("Created:  {}", util::fmt_time(&t.created_at)),
        format!("Updated:  {}", util::fmt_time(&t.updated_at)),
    ]
    .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(desk: &Desk, args: TagsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let queries = desk.queries();
    let mutations = desk.mutations();

    match args.command {
        TagsCommand::List(list) => {
            let tags = queries.ticket_tags(&util::list_query(&list)).await?;
            output::Printer::new(global).list(tags.as_slice(), |x| TagRow::from(x), |t| {
                t.id.to_string()
            });
            Ok(())
        }

        TagsCommand::Get { id } => {
            let tag = queries.ticket_tag(&util::entity_id(&id)).await?;
            output::Printer::new(global).single(&*tag, tag_detail, |t| t.id.to_string());
            Ok(())
        }

        TagsCommand::Create { name, color } => {
            let tag = mutations
                .create_ticket_tag(&CreateTicketTag { name, color })
                .await?;
            util::notify(global, &format!("Tag {} created", tag.id));
            Ok(())
        }

        TagsCommand::Update { id, name, color } => {
            mutations
                .update_ticket_tag(&util::entity_id(&id), &UpdateTicketTag { name, color })
                .await?;
            util::notify(global, "Tag updated");
            Ok(())
        }

        TagsCommand::Archive { id } => {
            if !util::confirm(&format!("Archive tag {id}?"), global.yes)? {
                return Ok(());
            }
            mutations.archive_ticket_tag(&util::entity_id(&id)).await?;
            util::notify(global, "Tag archived");
            Ok(())
        }

        TagsCommand::Restore { id } => {
            mutations.restore_ticket_tag(&util::entity_id(&id)).await?;
            util::notify(global, "Tag restored");
            Ok(())
        }
    }
}
