// deskline-core: Domain data layer between deskline-api and consumers (CLI).

pub mod cache;
pub mod config;
pub mod convert;
pub mod desk;
pub mod error;
pub mod model;
pub mod mutation;
pub mod query;
pub mod session;

// ── Primary re-exports ──────────────────────────────────────────────
pub use cache::{CacheKey, EntityKind, Invalidation, QueryCache, QueryOp};
pub use config::{AuthCredentials, ClientConfig, TlsVerification};
pub use desk::Desk;
pub use error::CoreError;
pub use mutation::Mutations;
pub use query::Queries;
pub use session::{Session, SessionStore, require_authenticated, require_super_admin};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    Action, ActionField, Admin, AdminRole, AuditLogHeader, AuditLogValue, Channel, Client,
    EntityId, Ticket, TicketAssignment, TicketStatus, TicketTag, User,
};

// Filters and mutation payloads travel unchanged from the API crate.
pub use deskline_api::ListQuery;
pub use deskline_api::types::{
    CreateAction, CreateActionField, CreateAdmin, CreateChannel, CreateClient, CreateTicket,
    CreateTicketTag, CreateUser, UpdateAction, UpdateAdmin, UpdateChannel, UpdateClient,
    UpdateTicket, UpdateTicketTag, UpdateUser,
};
