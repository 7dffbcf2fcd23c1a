// ── Write operations with declared invalidation ──
//
// Each mutation names, up front, the cache scopes it makes stale and
// applies them in declaration order after the server confirms the
// write. A failed mutation applies no invalidations and wraps its
// cause in `CoreError::MutationFailed`.

use std::sync::Arc;

use tracing::debug;

use deskline_api::ApiClient;
use deskline_api::types::{
    CreateAction, CreateActionField, CreateAdmin, CreateChannel, CreateClient, CreateTicket,
    CreateTicketTag, CreateUser, UpdateAction, UpdateAdmin, UpdateChannel, UpdateClient,
    UpdateTicket, UpdateTicketTag, UpdateUser,
};

use crate::cache::{CacheKey, EntityKind, Invalidation, QueryCache, QueryOp};
use crate::error::CoreError;
use crate::model::{
    Action, ActionField, Admin, Channel, Client, EntityId, Ticket, TicketAssignment, TicketTag,
    User,
};

/// Write-side facade over the API client and query cache.
#[derive(Clone)]
pub struct Mutations {
    api: Arc<ApiClient>,
    cache: Arc<QueryCache>,
}

impl Mutations {
    pub fn new(api: Arc<ApiClient>, cache: Arc<QueryCache>) -> Self {
        Self { api, cache }
    }

    fn failed(operation: &str, err: deskline_api::Error) -> CoreError {
        CoreError::MutationFailed {
            operation: operation.to_owned(),
            source: Box::new(err.into()),
        }
    }

    fn apply(&self, invalidations: &[Invalidation]) {
        for scope in invalidations {
            debug!("invalidating {scope:?}");
            self.cache.invalidate(scope);
        }
    }

    // ── Admins ───────────────────────────────────────────────────────

    pub async fn create_admin(&self, input: &CreateAdmin) -> Result<Admin, CoreError> {
        let record = self
            .api
            .create_admin(input)
            .await
            .map_err(|e| Self::failed("create admin", e))?;
        self.apply(&[Invalidation::EntityOp(EntityKind::Admin, QueryOp::Index)]);
        Ok(record.into())
    }

    pub async fn update_admin(&self, id: &EntityId, input: &UpdateAdmin) -> Result<Admin, CoreError> {
        let record = self
            .api
            .update_admin(&id.to_string(), input)
            .await
            .map_err(|e| Self::failed("update admin", e))?;
        self.apply(&[
            Invalidation::EntityOp(EntityKind::Admin, QueryOp::Index),
            Invalidation::Key(CacheKey::show(EntityKind::Admin, id)),
        ]);
        Ok(record.into())
    }

    pub async fn deactivate_admin(&self, id: &EntityId) -> Result<(), CoreError> {
        self.api
            .deactivate_admin(&id.to_string())
            .await
            .map_err(|e| Self::failed("deactivate admin", e))?;
        self.apply(&[Invalidation::Entity(EntityKind::Admin)]);
        Ok(())
    }

    pub async fn activate_admin(&self, id: &EntityId) -> Result<Admin, CoreError> {
        let record = self
            .api
            .activate_admin(&id.to_string())
            .await
            .map_err(|e| Self::failed("activate admin", e))?;
        self.apply(&[Invalidation::Entity(EntityKind::Admin)]);
        Ok(record.into())
    }

    // ── Users ────────────────────────────────────────────────────────

    pub async fn create_user(&self, input: &CreateUser) -> Result<User, CoreError> {
        let record = self
            .api
            .create_user(input)
            .await
            .map_err(|e| Self::failed("create user", e))?;
        self.apply(&[Invalidation::EntityOp(EntityKind::User, QueryOp::Index)]);
        Ok(record.into())
    }

    pub async fn update_user(&self, id: &EntityId, input: &UpdateUser) -> Result<User, CoreError> {
        let record = self
            .api
            .update_user(&id.to_string(), input)
            .await
            .map_err(|e| Self::failed("update user", e))?;
        self.apply(&[
            Invalidation::EntityOp(EntityKind::User, QueryOp::Index),
            Invalidation::Key(CacheKey::show(EntityKind::User, id)),
        ]);
        Ok(record.into())
    }

    pub async fn archive_user(&self, id: &EntityId) -> Result<(), CoreError> {
        self.api
            .archive_user(&id.to_string())
            .await
            .map_err(|e| Self::failed("archive user", e))?;
        self.apply(&[Invalidation::Entity(EntityKind::User)]);
        Ok(())
    }

    pub async fn restore_user(&self, id: &EntityId) -> Result<User, CoreError> {
        let record = self
            .api
            .restore_user(&id.to_string())
            .await
            .map_err(|e| Self::failed("restore user", e))?;
        self.apply(&[Invalidation::Entity(EntityKind::User)]);
        Ok(record.into())
    }

    // ── Tickets ──────────────────────────────────────────────────────

    pub async fn create_ticket(&self, input: &CreateTicket) -> Result<Ticket, CoreError> {
        let record = self
            .api
            .create_ticket(input)
            .await
            .map_err(|e| Self::failed("create ticket", e))?;
        self.apply(&[Invalidation::EntityOp(EntityKind::Ticket, QueryOp::Index)]);
        Ok(record.into())
    }

    pub async fn update_ticket(
        &self,
        id: &EntityId,
        input: &UpdateTicket,
    ) -> Result<Ticket, CoreError> {
        let record = self
            .api
            .update_ticket(&id.to_string(), input)
            .await
            .map_err(|e| Self::failed("update ticket", e))?;
        self.apply(&[
            Invalidation::EntityOp(EntityKind::Ticket, QueryOp::Index),
            Invalidation::Key(CacheKey::show(EntityKind::Ticket, id)),
        ]);
        Ok(record.into())
    }

    pub async fn archive_ticket(&self, id: &EntityId) -> Result<(), CoreError> {
        self.api
            .archive_ticket(&id.to_string())
            .await
            .map_err(|e| Self::failed("archive ticket", e))?;
        self.apply(&[Invalidation::Entity(EntityKind::Ticket)]);
        Ok(())
    }

    pub async fn restore_ticket(&self, id: &EntityId) -> Result<Ticket, CoreError> {
        let record = self
            .api
            .restore_ticket(&id.to_string())
            .await
            .map_err(|e| Self::failed("restore ticket", e))?;
        self.apply(&[Invalidation::Entity(EntityKind::Ticket)]);
        Ok(record.into())
    }

    /// Assign a ticket to an admin.
    ///
    /// Invalidates, in order: every ticket listing, that ticket's
    /// lookup, its assignment list, and every cached admin query (the
    /// admin's workload summary changed).
    pub async fn assign_ticket(
        &self,
        ticket_id: &EntityId,
        admin_id: &EntityId,
    ) -> Result<TicketAssignment, CoreError> {
        let record = self
            .api
            .assign_ticket(&ticket_id.to_string(), &admin_id.to_string())
            .await
            .map_err(|e| Self::failed("assign ticket", e))?;
        self.apply(&[
            Invalidation::EntityOp(EntityKind::Ticket, QueryOp::Index),
            Invalidation::Key(CacheKey::show(EntityKind::Ticket, ticket_id)),
            Invalidation::Key(CacheKey::show(EntityKind::TicketAssignment, ticket_id)),
            Invalidation::Entity(EntityKind::Admin),
        ]);
        Ok(record.into())
    }

    pub async fn unassign_ticket(
        &self,
        ticket_id: &EntityId,
        assignment_id: &EntityId,
    ) -> Result<(), CoreError> {
        self.api
            .unassign_ticket(&ticket_id.to_string(), &assignment_id.to_string())
            .await
            .map_err(|e| Self::failed("unassign ticket", e))?;
        self.apply(&[
            Invalidation::EntityOp(EntityKind::Ticket, QueryOp::Index),
            Invalidation::Key(CacheKey::show(EntityKind::Ticket, ticket_id)),
            Invalidation::Key(CacheKey::show(EntityKind::TicketAssignment, ticket_id)),
            Invalidation::Entity(EntityKind::Admin),
        ]);
        Ok(())
    }

    // ── Ticket tags ──────────────────────────────────────────────────

    pub async fn create_ticket_tag(&self, input: &CreateTicketTag) -> Result<TicketTag, CoreError> {
        let record = self
            .api
            .create_ticket_tag(input)
            .await
            .map_err(|e| Self::failed("create ticket tag", e))?;
        self.apply(&[Invalidation::EntityOp(EntityKind::TicketTag, QueryOp::Index)]);
        Ok(record.into())
    }

    pub async fn update_ticket_tag(
        &self,
        id: &EntityId,
        input: &UpdateTicketTag,
    ) -> Result<TicketTag, CoreError> {
        let record = self
            .api
            .update_ticket_tag(&id.to_string(), input)
            .await
            .map_err(|e| Self::failed("update ticket tag", e))?;
        self.apply(&[
            Invalidation::EntityOp(EntityKind::TicketTag, QueryOp::Index),
            Invalidation::Key(CacheKey::show(EntityKind::TicketTag, id)),
        ]);
        Ok(record.into())
    }

    pub async fn archive_ticket_tag(&self, id: &EntityId) -> Result<(), CoreError> {
        self.api
            .archive_ticket_tag(&id.to_string())
            .await
            .map_err(|e| Self::failed("archive ticket tag", e))?;
        self.apply(&[Invalidation::Entity(EntityKind::TicketTag)]);
        Ok(())
    }

    pub async fn restore_ticket_tag(&self, id: &EntityId) -> Result<TicketTag, CoreError> {
        let record = self
            .api
            .restore_ticket_tag(&id.to_string())
            .await
            .map_err(|e| Self::failed("restore ticket tag", e))?;
        self.apply(&[Invalidation::Entity(EntityKind::TicketTag)]);
        Ok(record.into())
    }

    // ── Channels ─────────────────────────────────────────────────────

    pub async fn create_channel(&self, input: &CreateChannel) -> Result<Channel, CoreError> {
        let record = self
            .api
            .create_channel(input)
            .await
            .map_err(|e| Self::failed("create channel", e))?;
        self.apply(&[Invalidation::EntityOp(EntityKind::Channel, QueryOp::Index)]);
        Ok(record.into())
    }

    pub async fn update_channel(
        &self,
        id: &EntityId,
        input: &UpdateChannel,
    ) -> Result<Channel, CoreError> {
        let record = self
            .api
            .update_channel(&id.to_string(), input)
            .await
            .map_err(|e| Self::failed("update channel", e))?;
        self.apply(&[
            Invalidation::EntityOp(EntityKind::Channel, QueryOp::Index),
            Invalidation::Key(CacheKey::show(EntityKind::Channel, id)),
        ]);
        Ok(record.into())
    }

    pub async fn archive_channel(&self, id: &EntityId) -> Result<(), CoreError> {
        self.api
            .archive_channel(&id.to_string())
            .await
            .map_err(|e| Self::failed("archive channel", e))?;
        self.apply(&[Invalidation::Entity(EntityKind::Channel)]);
        Ok(())
    }

    pub async fn restore_channel(&self, id: &EntityId) -> Result<Channel, CoreError> {
        let record = self
            .api
            .restore_channel(&id.to_string())
            .await
            .map_err(|e| Self::failed("restore channel", e))?;
        self.apply(&[Invalidation::Entity(EntityKind::Channel)]);
        Ok(record.into())
    }

    // ── Clients ──────────────────────────────────────────────────────

    pub async fn create_client(&self, input: &CreateClient) -> Result<Client, CoreError> {
        let record = self
            .api
            .create_client(input)
            .await
            .map_err(|e| Self::failed("create client", e))?;
        self.apply(&[Invalidation::EntityOp(EntityKind::Client, QueryOp::Index)]);
        Ok(record.into())
    }

    pub async fn update_client(
        &self,
        id: &EntityId,
        input: &UpdateClient,
    ) -> Result<Client, CoreError> {
        let record = self
            .api
            .update_client(&id.to_string(), input)
            .await
            .map_err(|e| Self::failed("update client", e))?;
        self.apply(&[
            Invalidation::EntityOp(EntityKind::Client, QueryOp::Index),
            Invalidation::Key(CacheKey::show(EntityKind::Client, id)),
        ]);
        Ok(record.into())
    }

    pub async fn archive_client(&self, id: &EntityId) -> Result<(), CoreError> {
        self.api
            .archive_client(&id.to_string())
            .await
            .map_err(|e| Self::failed("archive client", e))?;
        self.apply(&[Invalidation::Entity(EntityKind::Client)]);
        Ok(())
    }

    pub async fn restore_client(&self, id: &EntityId) -> Result<Client, CoreError> {
        let record = self
            .api
            .restore_client(&id.to_string())
            .await
            .map_err(|e| Self::failed("restore client", e))?;
        self.apply(&[Invalidation::Entity(EntityKind::Client)]);
        Ok(record.into())
    }

    // ── Actions ──────────────────────────────────────────────────────

    pub async fn create_action(&self, input: &CreateAction) -> Result<Action, CoreError> {
        let record = self
            .api
            .create_action(input)
            .await
            .map_err(|e| Self::failed("create action", e))?;
        self.apply(&[Invalidation::EntityOp(EntityKind::Action, QueryOp::Index)]);
        Ok(record.into())
    }

    pub async fn update_action(
        &self,
        id: &EntityId,
        input: &UpdateAction,
    ) -> Result<Action, CoreError> {
        let record = self
            .api
            .update_action(&id.to_string(), input)
            .await
            .map_err(|e| Self::failed("update action", e))?;
        self.apply(&[
            Invalidation::EntityOp(EntityKind::Action, QueryOp::Index),
            Invalidation::Key(CacheKey::show(EntityKind::Action, id)),
        ]);
        Ok(record.into())
    }

    pub async fn deactivate_action(&self, id: &EntityId) -> Result<(), CoreError> {
        self.api
            .deactivate_action(&id.to_string())
            .await
            .map_err(|e| Self::failed("deactivate action", e))?;
        self.apply(&[Invalidation::Entity(EntityKind::Action)]);
        Ok(())
    }

    pub async fn activate_action(&self, id: &EntityId) -> Result<Action, CoreError> {
        let record = self
            .api
            .activate_action(&id.to_string())
            .await
            .map_err(|e| Self::failed("activate action", e))?;
        self.apply(&[Invalidation::Entity(EntityKind::Action)]);
        Ok(record.into())
    }

    pub async fn create_action_field(
        &self,
        action_id: &EntityId,
        input: &CreateActionField,
    ) -> Result<ActionField, CoreError> {
        let record = self
            .api
            .create_action_field(&action_id.to_string(), input)
            .await
            .map_err(|e| Self::failed("create action field", e))?;
        self.apply(&[
            Invalidation::Key(CacheKey::show(EntityKind::ActionField, action_id)),
            Invalidation::Key(CacheKey::show(EntityKind::Action, action_id)),
        ]);
        Ok(record.into())
    }

    pub async fn delete_action_field(
        &self,
        action_id: &EntityId,
        field_id: &EntityId,
    ) -> Result<(), CoreError> {
        self.api
            .delete_action_field(&action_id.to_string(), &field_id.to_string())
            .await
            .map_err(|e| Self::failed("delete action field", e))?;
        self.apply(&[
            Invalidation::Key(CacheKey::show(EntityKind::ActionField, action_id)),
            Invalidation::Key(CacheKey::show(EntityKind::Action, action_id)),
        ]);
        Ok(())
    }
}
