// ── API-to-domain type conversions ──
//
// Bridges raw `deskline_api` wire records into canonical
// `deskline_core::model` domain types. Each `From` impl parses ids into
// `EntityId` and maps wire enums onto their domain counterparts.

use deskline_api::types;

use crate::model::{
    Action, ActionField, Admin, AdminRole, AuditLogHeader, AuditLogValue, Channel, Client,
    EntityId, Ticket, TicketAssignment, TicketStatus, TicketTag, User,
};

impl From<types::AdminRole> for AdminRole {
    fn from(role: types::AdminRole) -> Self {
        match role {
            types::AdminRole::SuperAdmin => Self::SuperAdmin,
            types::AdminRole::Agent => Self::Agent,
        }
    }
}

impl From<AdminRole> for types::AdminRole {
    fn from(role: AdminRole) -> Self {
        match role {
            AdminRole::SuperAdmin => Self::SuperAdmin,
            AdminRole::Agent => Self::Agent,
        }
    }
}

impl From<types::TicketStatus> for TicketStatus {
    fn from(status: types::TicketStatus) -> Self {
        match status {
            types::TicketStatus::Open => Self::Open,
            types::TicketStatus::Pending => Self::Pending,
            types::TicketStatus::Resolved => Self::Resolved,
            types::TicketStatus::Closed => Self::Closed,
        }
    }
}

impl From<TicketStatus> for types::TicketStatus {
    fn from(status: TicketStatus) -> Self {
        match status {
            TicketStatus::Open => Self::Open,
            TicketStatus::Pending => Self::Pending,
            TicketStatus::Resolved => Self::Resolved,
            TicketStatus::Closed => Self::Closed,
        }
    }
}

impl From<types::AdminRecord> for Admin {
    fn from(r: types::AdminRecord) -> Self {
        Self {
            id: EntityId::from(r.id),
            name: r.name,
            email: r.email,
            role: r.role.into(),
            is_active: r.is_active,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

impl From<types::UserRecord> for User {
    fn from(r: types::UserRecord) -> Self {
        Self {
            id: EntityId::from(r.id),
            name: r.name,
            email: r.email,
            phone: r.phone,
            is_archived: r.is_archived,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

impl From<types::TicketRecord> for Ticket {
    fn from(r: types::TicketRecord) -> Self {
        Self {
            id: EntityId::from(r.id),
            subject: r.subject,
            description: r.description,
            status: r.status.into(),
            user_id: EntityId::from(r.user_id),
            channel_id: r.channel_id.map(EntityId::from),
            is_archived: r.is_archived,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

impl From<types::TicketTagRecord> for TicketTag {
    fn from(r: types::TicketTagRecord) -> Self {
        Self {
            id: EntityId::from(r.id),
            name: r.name,
            color: r.color,
            is_archived: r.is_archived,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

impl From<types::TicketAssignmentRecord> for TicketAssignment {
    fn from(r: types::TicketAssignmentRecord) -> Self {
        Self {
            id: EntityId::from(r.id),
            ticket_id: EntityId::from(r.ticket_id),
            admin_id: EntityId::from(r.admin_id),
            created_at: r.created_at,
        }
    }
}

impl From<types::ChannelRecord> for Channel {
    fn from(r: types::ChannelRecord) -> Self {
        Self {
            id: EntityId::from(r.id),
            name: r.name,
            is_archived: r.is_archived,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

impl From<types::ClientRecord> for Client {
    fn from(r: types::ClientRecord) -> Self {
        Self {
            id: EntityId::from(r.id),
            name: r.name,
            domain: r.domain,
            is_archived: r.is_archived,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

impl From<types::ActionRecord> for Action {
    fn from(r: types::ActionRecord) -> Self {
        Self {
            id: EntityId::from(r.id),
            name: r.name,
            description: r.description,
            is_active: r.is_active,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

impl From<types::ActionFieldRecord> for ActionField {
    fn from(r: types::ActionFieldRecord) -> Self {
        Self {
            id: EntityId::from(r.id),
            action_id: EntityId::from(r.action_id),
            label: r.label,
            field_type: r.field_type,
            is_required: r.is_required,
            position: r.position,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

impl From<types::AuditLogHeaderRecord> for AuditLogHeader {
    fn from(r: types::AuditLogHeaderRecord) -> Self {
        Self {
            id: EntityId::from(r.id),
            actor_id: r.actor_id.map(EntityId::from),
            actor_type: r.actor_type,
            event: r.event,
            target_type: r.target_type,
            target_id: r.target_id.map(EntityId::from),
            created_at: r.created_at,
        }
    }
}

impl From<types::AuditLogValueRecord> for AuditLogValue {
    fn from(r: types::AuditLogValueRecord) -> Self {
        Self {
            id: EntityId::from(r.id),
            header_id: EntityId::from(r.header_id),
            field: r.field,
            old_value: r.old_value,
            new_value: r.new_value,
        }
    }
}
