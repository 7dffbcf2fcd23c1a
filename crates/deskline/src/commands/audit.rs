//! Audit log command handlers. Read-only.

use tabled::Tabled;

use deskline_core::{AuditLogHeader, AuditLogValue, Desk};

use crate::cli::{AuditArgs, AuditCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "When")]
    when: String,
    #[tabled(rename = "Actor")]
    actor: String,
    #[tabled(rename = "Event")]
    event: String,
    #[tabled(rename = "Target")]
    target: String,
}

impl From<&AuditLogHeader> for EntryRow {
    fn from(h: &AuditLogHeader) -> Self {
        let target = match (&h.target_type, &h.target_id) {
            (Some(kind), Some(id)) => format!("{kind} {id}"),
            (Some(kind), None) => kind.clone(),
            _ => "-".into(),
        };
        Self {
            id: h.id.to_string(),
            when: util::fmt_time(&h.created_at),
            actor: format!("{} {}", h.actor_type, util::fmt_opt_id(h.actor_id.as_ref())),
            event: h.event.clone(),
            target,
        }
    }
}

#[derive(Tabled)]
struct ValueRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Old")]
    old: String,
    #[tabled(rename = "New")]
    new: String,
}

impl From<&AuditLogValue> for ValueRow {
    fn from(v: &AuditLogValue) -> Self {
        Self {
            field: v.field.clone(),
            old: util::fmt_opt(v.old_value.as_deref()),
            new: util::fmt_opt(v.new_value.as_deref()),
        }
    }
}

pub async fn handle(desk: &Desk, args: AuditArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let queries = desk.queries();

    match args.command {
        AuditCommand::List(list) => {
            let entries = queries.audit_log(&util::list_query(&list)).await?;
            output::Printer::new(global).list(entries.as_slice(), |x| EntryRow::from(x), |e| {
                e.id.to_string()
            });
            Ok(())
        }

        AuditCommand::Values { entry } => {
            let values = queries.audit_log_values(&util::entity_id(&entry)).await?;
            output::Printer::new(global).list(values.as_slice(), |x| ValueRow::from(x), |v| {
                v.id.to_string()
            });
            Ok(())
        }
    }
}
