// Domain model for the helpdesk. Wire records from deskline-api are
// converted into these types at the crate boundary (see `convert`).

mod action;
mod admin;
mod audit;
mod channel;
mod client;
mod entity_id;
mod ticket;
mod user;

pub use action::{Action, ActionField};
pub use admin::{Admin, AdminRole};
pub use audit::{AuditLogHeader, AuditLogValue};
pub use channel::Channel;
pub use client::Client;
pub use entity_id::EntityId;
pub use ticket::{Ticket, TicketAssignment, TicketStatus, TicketTag};
pub use user::User;
