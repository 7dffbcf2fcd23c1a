// Tickets, their tags, and their admin assignments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::EntityId;

/// Lifecycle state of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    Pending,
    Resolved,
    Closed,
}

impl TicketStatus {
    /// Whether the ticket still needs agent attention.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Open | Self::Pending)
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Pending => write!(f, "pending"),
            Self::Resolved => write!(f, "resolved"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

/// A support ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: EntityId,
    pub subject: String,
    pub description: Option<String>,
    pub status: TicketStatus,
    pub user_id: EntityId,
    pub channel_id: Option<EntityId>,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A label attachable to tickets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketTag {
    pub id: EntityId,
    pub name: String,
    pub color: Option<String>,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Links a ticket to the admin working it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketAssignment {
    pub id: EntityId,
    pub ticket_id: EntityId,
    pub admin_id: EntityId,
    pub created_at: DateTime<Utc>,
}
