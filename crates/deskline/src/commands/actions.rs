//! Automation action command handlers.

use tabled::Tabled;

use deskline_core::{Action, ActionField, CreateAction, CreateActionField, Desk, UpdateAction};

use crate::cli::{ActionsArgs, ActionsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct ActionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Active")]
    active: String,
    #[tabled(rename = "Updated")]
    updated: String,
}

impl From<&Action> for ActionRow {
    fn from(a: &Action) -> Self {
        Self {
            id: a.id.to_string(),
            name: a.name.clone(),
            active: if a.is_active { "yes" } else { "no" }.into(),
            updated: util::fmt_time(&a.updated_at),
        }
    }
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Type")]
    field_type: String,
    #[tabled(rename = "Required")]
    required: String,
    #[tabled(rename = "Position")]
    position: u32,
}

impl From<&ActionField> for FieldRow {
    fn from(f: &ActionField) -> Self {
        Self {
            id: f.id.to_string(),
            label: f.label.clone(),
            field_type: f.field_type.clone(),
            required: if f.is_required { "yes" } else { "no" }.into(),
            position: f.position,
        }
    }
}

fn action_detail(a: &Action) -> String {
    let mut lines = vec![
        format!("ID:       {}", a.id),
        format!("Name:     {}", a.name),
        format!("Active:   {}", if a.is_active { "yes" } else { "no" }),
        format!("Created:  {}", util::fmt_time(&a.created_at)),
        format!("Updated:  {}", util::fmt_time(&a.updated_at)),
    ];
    if let Some(ref desc) = a.description {
        lines.push(format!("About:    {desc}"));
    }
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

#[allow(clippy::too_many_lines)]
pub async fn handle(desk: &Desk, args: ActionsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let queries = desk.queries();
    let mutations = desk.mutations();

    match args.command {
        ActionsCommand::List(list) => {
            let actions = queries.actions(&util::list_query(&list)).await?;
            output::Printer::new(global).list(actions.as_slice(), |x| ActionRow::from(x), |a| {
                a.id.to_string()
            });
            Ok(())
        }

        ActionsCommand::Get { id } => {
            let action = queries.action(&util::entity_id(&id)).await?;
            output::Printer::new(global).single(&*action, action_detail, |a| a.id.to_string());
            Ok(())
        }

        ActionsCommand::Create { name, description } => {
            let action = mutations
                .create_action(&CreateAction { name, description })
                .await?;
            util::notify(global, &format!("Action {} created", action.id));
            Ok(())
        }

        ActionsCommand::Update {
            id,
            name,
            description,
        } => {
            mutations
                .update_action(&util::entity_id(&id), &UpdateAction { name, description })
                .await?;
            util::notify(global, "Action updated");
            Ok(())
        }

        ActionsCommand::Deactivate { id } => {
            if !util::confirm(&format!("Deactivate action {id}?"), global.yes)? {
                return Ok(());
            }
            mutations.deactivate_action(&util::entity_id(&id)).await?;
            util::notify(global, "Action deactivated");
            Ok(())
        }

        ActionsCommand::Activate { id } => {
            mutations.activate_action(&util::entity_id(&id)).await?;
            util::notify(global, "Action reactivated");
            Ok(())
        }

        ActionsCommand::Fields { action } => {
            let fields = queries.action_fields(&util::entity_id(&action)).await?;
            output::Printer::new(global).list(fields.as_slice(), |x| FieldRow::from(x), |f| {
                f.id.to_string()
            });
            Ok(())
        }

        ActionsCommand::AddField {
            action,
            label,
            field_type,
            required,
            position,
        } => {
            let field = mutations
                .create_action_field(
                    &util::entity_id(&action),
                    &CreateActionField {
                        label,
                        field_type,
                        is_required: required,
                        position,
                    },
                )
                .await?;
            util::notify(global, &format!("Field {} added", field.id));
            Ok(())
        }

        ActionsCommand::RemoveField { action, field } => {
            if !util::confirm(&format!("Remove field {field} from action {action}?"), global.yes)? {
                return Ok(());
            }
            mutations
                .delete_action_field(&util::entity_id(&action), &util::entity_id(&field))
                .await?;
            util::notify(global, "Field removed");
            Ok(())
        }
    }
}
