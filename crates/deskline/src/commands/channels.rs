//! Intake channel command handlers.

use tabled::Tabled;

use deskline_core::{Channel, CreateChannel, Desk, UpdateChannel};

use crate::cli::{ChannelsArgs, ChannelsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct ChannelRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Archived")]
    archived: String,
}

impl From<&Channel> for ChannelRow {
    fn from(c: &Channel) -> Self {
        Self {
            id: c.id.to_string(),
            name: c.name.clone(),
            archived: if c.is_archived { "yes" } else { "no" }.into(),
        }
    }
}

fn channel_detail(c: &Channel) -> String {
    [
        format!("ID:       {}", c.id),
        format!("Name:     {}", c.name),
        format!("Archived: {}", if c.is_archived { "yes" } else { "no" }),
        format!("Created:  {}", util::fmt_time(&c.created_at)),
        format!("Updated:  {}", util::fmt_time(&c.updated_at)),
    ]
    .join("\n")
}

pub async fn handle(desk: &Desk, args: ChannelsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let queries = desk.queries();
    let mutations = desk.mutations();

    match args.command {
        ChannelsCommand::List(list) => {
            let channels = queries.channels(&util::list_query(&list)).await?;
            output::Printer::new(global).list(channels.as_slice(), |x| ChannelRow::from(x), |c| {
                c.id.to_string()
            });
            Ok(())
        }

        ChannelsCommand::Get { id } => {
            let channel = queries.channel(&util::entity_id(&id)).await?;
            output::Printer::new(global).single(&*channel, channel_detail, |c| c.id.to_string());
            Ok(())
        }

        ChannelsCommand::Create { name } => {
            let channel = mutations.create_channel(&CreateChannel { name }).await?;
            util::notify(global, &format!("Channel {} created", channel.id));
            Ok(())
        }

        ChannelsCommand::Update { id, name } => {
            mutations
                .update_channel(&util::entity_id(&id), &UpdateChannel { name })
                .await?;
            util::notify(global, "Channel updated");
            Ok(())
        }

        ChannelsCommand::Archive { id } => {
            if !util::confirm(&format!("Archive channel {id}?"), global.yes)? {
                return Ok(());
            }
            mutations.archive_channel(&util::entity_id(&id)).await?;
            util::notify(global, "Channel archived");
            Ok(())
        }

        ChannelsCommand::Restore { id } => {
            mutations.restore_channel(&util::entity_id(&id)).await?;
            util::notify(global, "Channel restored");
            Ok(())
        }
    }
}
