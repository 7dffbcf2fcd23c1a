//! Ticket command handlers.

use tabled::Tabled;

use deskline_core::{CreateTicket, Desk, Ticket, TicketStatus, UpdateTicket};

use crate::cli::{GlobalOpts, TicketStatusArg, TicketsArgs, TicketsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

impl From<TicketStatusArg> for TicketStatus {
    fn from(arg: TicketStatusArg) -> Self {
        match arg {
            TicketStatusArg::Open => Self::Open,
            TicketStatusArg::Pending => Self::Pending,
            TicketStatusArg::Resolved => Self::Resolved,
            TicketStatusArg::Closed => Self::Closed,
        }
    }
}

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct TicketRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Subject")]
    subject: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "User")]
    user: String,
    #[tabled(rename = "Channel")]
    channel: String,
    #[tabled(rename = "Updated")]
    updated: String,
}

impl From<&Ticket> for TicketRow {
    fn from(t: &Ticket) -> Self {
        Self {
            id: t.id.to_string(),
            subject: t.subject.clone(),
            status: t.status.to_string(),
            user: t.user_id.to_string(),
            channel: util::fmt_opt_id(t.channel_id.as_ref()),
            updated: util::fmt_time(&t.updated_at),
        }
    }
}

#[derive(Tabled)]
struct AssignmentRow {
    #[tabled(rename = "Assignment")]
    id: String,
    #[tabled(rename = "Admin")]
    admin: String,
    #[tabled(rename = "Since")]
    since: String,
}

fn ticket_detail(t: &Ticket) -> String {
    let mut lines = vec![
        format!("ID:          {}", t.id),
        format!("Subject:     {}", t.subject),
        format!("Status:      {}", t.status),
        format!("User:        {}", t.user_id),
        format!("Channel:     {}", util::fmt_opt_id(t.channel_id.as_ref())),
        format!("Archived:    {}", if t.is_archived { "yes" } else { "no" }),
        format!("Created:     {}", util::fmt_time(&t.created_at)),
        format!("Updated:     {}", util::fmt_time(&t.updated_at)),
    ];
    if let Some(ref desc) = t.description {
        lines.push(String::new());
        lines.push(desc.clone());
    }
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

#[allow(clippy::too_many_lines)]
pub async fn handle(desk: &Desk, args: TicketsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let queries = desk.queries();
    let mutations = desk.mutations();

    match args.command {
        TicketsCommand::List(list) => {
            let tickets = queries.tickets(&util::list_query(&list)).await?;
            output::Printer::new(global).list(tickets.as_slice(), |x| TicketRow::from(x), |t| {
                t.id.to_string()
            });
            Ok(())
        }

        TicketsCommand::Export(list) => {
            let tickets = queries.all_tickets(&util::list_query(&list)).await?;
            output::Printer::new(global).list(tickets.as_slice(), |x| TicketRow::from(x), |t| {
                t.id.to_string()
            });
            Ok(())
        }

        TicketsCommand::Get { id } => {
            let ticket = queries.ticket(&util::entity_id(&id)).await?;
            output::Printer::new(global).single(&*ticket, ticket_detail, |t| t.id.to_string());
            Ok(())
        }

        TicketsCommand::Create {
            subject,
            user,
            description,
            channel,
        } => {
            let ticket = mutations
                .create_ticket(&CreateTicket {
                    subject,
                    description,
                    user_id: user,
                    channel_id: channel,
                })
                .await?;
            util::notify(global, &format!("Ticket {} created", ticket.id));
            Ok(())
        }

        TicketsCommand::Update {
            id,
            subject,
            description,
            status,
        } => {
            mutations
                .update_ticket(
                    &util::entity_id(&id),
                    &UpdateTicket {
                        subject,
                        description,
                        status: status.map(|s| TicketStatus::from(s).into()),
                    },
                )
                .await?;
            util::notify(global, "Ticket updated");
            Ok(())
        }

        TicketsCommand::Archive { id } => {
            if !util::confirm(&format!("Archive ticket {id}?"), global.yes)? {
                return Ok(());
            }
            mutations.archive_ticket(&util::entity_id(&id)).await?;
            util::notify(global, "Ticket archived");
            Ok(())
        }

        TicketsCommand::Restore { id } => {
            mutations.restore_ticket(&util::entity_id(&id)).await?;
            util::notify(global, "Ticket restored");
            Ok(())
        }

        TicketsCommand::Assignments { ticket } => {
            let assignments = queries.ticket_assignments(&util::entity_id(&ticket)).await?;
            output::Printer::new(global).list(
                assignments.as_slice(),
                |a| AssignmentRow {
                    id: a.id.to_string(),
                    admin: a.admin_id.to_string(),
                    since: util::fmt_time(&a.created_at),
                },
                |a| a.id.to_string(),
            );
            Ok(())
        }

        TicketsCommand::Assign { ticket, admin } => {
            mutations
                .assign_ticket(&util::entity_id(&ticket), &util::entity_id(&admin))
                .await?;
            util::notify(global, "Admin assigned");
            Ok(())
        }

        TicketsCommand::Unassign { ticket, assignment } => {
            mutations
                .unassign_ticket(&util::entity_id(&ticket), &util::entity_id(&assignment))
                .await?;
            util::notify(global, "Assignment removed");
            Ok(())
        }
    }
}
