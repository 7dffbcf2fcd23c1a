// ── Cached read operations ──
//
// Every read goes through the cache: a fresh entry is returned as-is, a
// miss or stale entry triggers a fetch whose result is stored before it
// is handed back. Results are shared `Arc`s, so repeated reads of the
// same query are free.

use std::future::Future;
use std::sync::Arc;

use tracing::warn;

use deskline_api::{ApiClient, ListQuery};

use crate::cache::{CacheKey, EntityKind, QueryCache};
use crate::error::CoreError;
use crate::model::{
    Action, ActionField, Admin, AuditLogHeader, AuditLogValue, Channel, Client, EntityId, Ticket,
    TicketAssignment, TicketTag, User,
};

/// Read-side facade over the API client and query cache.
#[derive(Clone)]
pub struct Queries {
    api: Arc<ApiClient>,
    cache: Arc<QueryCache>,
}

impl Queries {
    pub fn new(api: Arc<ApiClient>, cache: Arc<QueryCache>) -> Self {
        Self { api, cache }
    }

    /// Cache-through fetch: return the fresh cached value or run `fetch`
    /// and store its result under `key`.
    async fn cached<T, F, Fut>(&self, key: CacheKey, fetch: F) -> Result<Arc<T>, CoreError>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, deskline_api::Error>>,
    {
        if let Some(hit) = self.cache.get::<T>(&key) {
            return Ok(hit);
        }
        let value = fetch().await?;
        Ok(self.cache.insert(key, value))
    }

    /// Warm the cache without surfacing system failures.
    ///
    /// Prefetching is speculative: a server or transport failure is
    /// logged and swallowed, while user-facing errors (expired session,
    /// missing permissions) still propagate so callers can react.
    async fn prefetch<T, F, Fut>(&self, key: CacheKey, fetch: F) -> Result<(), CoreError>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, deskline_api::Error>>,
    {
        match self.cached(key.clone(), fetch).await {
            Ok(_) => Ok(()),
            Err(e) if e.is_user_facing() => Err(e),
            Err(e) => {
                warn!("prefetch of {key} failed: {e}");
                Ok(())
            }
        }
    }

    // ── Admins ───────────────────────────────────────────────────────

    pub async fn admins(&self, query: &ListQuery) -> Result<Arc<Vec<Admin>>, CoreError> {
        self.cached(CacheKey::index(EntityKind::Admin, query), || async {
            let page = self.api.list_admins(query).await?;
            Ok(page.records.into_iter().map(Admin::from).collect())
        })
        .await
    }

    pub async fn prefetch_admins(&self, query: &ListQuery) -> Result<(), CoreError> {
        self.prefetch::<Vec<Admin>, _, _>(CacheKey::index(EntityKind::Admin, query), || async {
            let page = self.api.list_admins(query).await?;
            Ok(page.records.into_iter().map(Admin::from).collect())
        })
        .await
    }

    pub async fn admin(&self, id: &EntityId) -> Result<Arc<Admin>, CoreError> {
        self.cached(CacheKey::show(EntityKind::Admin, id), || async {
            Ok(self.api.get_admin(&id.to_string()).await?.into())
        })
        .await
    }

    // ── Users ────────────────────────────────────────────────────────

    pub async fn users(&self, query: &ListQuery) -> Result<Arc<Vec<User>>, CoreError> {
        self.cached(CacheKey::index(EntityKind::User, query), || async {
            let page = self.api.list_users(query).await?;
            Ok(page.records.into_iter().map(User::from).collect())
        })
        .await
    }

    pub async fn prefetch_users(&self, query: &ListQuery) -> Result<(), CoreError> {
        self.prefetch::<Vec<User>, _, _>(CacheKey::index(EntityKind::User, query), || async {
            let page = self.api.list_users(query).await?;
            Ok(page.records.into_iter().map(User::from).collect())
        })
        .await
    }

    pub async fn user(&self, id: &EntityId) -> Result<Arc<User>, CoreError> {
        self.cached(CacheKey::show(EntityKind::User, id), || async {
            Ok(self.api.get_user(&id.to_string()).await?.into())
        })
        .await
    }

    // ── Tickets ──────────────────────────────────────────────────────

    pub async fn tickets(&self, query: &ListQuery) -> Result<Arc<Vec<Ticket>>, CoreError> {
        self.cached(CacheKey::index(EntityKind::Ticket, query), || async {
            let page = self.api.list_tickets(query).await?;
            Ok(page.records.into_iter().map(Ticket::from).collect())
        })
        .await
    }

    pub async fn ticket(&self, id: &EntityId) -> Result<Arc<Ticket>, CoreError> {
        self.cached(CacheKey::show(EntityKind::Ticket, id), || async {
            Ok(self.api.get_ticket(&id.to_string()).await?.into())
        })
        .await
    }

    /// Every ticket matching the filter, across all pages. Uncached:
    /// full exports should always see current data.
    pub async fn all_tickets(&self, query: &ListQuery) -> Result<Vec<Ticket>, CoreError> {
        let api = Arc::clone(&self.api);
        let records = self
            .api
            .paginate_all(query, |q| {
                let api = Arc::clone(&api);
                async move { api.list_tickets(&q).await }
            })
            .await?;
        Ok(records.into_iter().map(Ticket::from).collect())
    }

    pub async fn ticket_assignments(
        &self,
        ticket_id: &EntityId,
    ) -> Result<Arc<Vec<TicketAssignment>>, CoreError> {
        self.cached(
            CacheKey::show(EntityKind::TicketAssignment, ticket_id),
            || async {
                let page = self.api.list_ticket_assignments(&ticket_id.to_string()).await?;
                Ok(page.records.into_iter().map(TicketAssignment::from).collect())
            },
        )
        .await
    }

    /// Warm the ticket listing for a filter (e.g. ahead of navigation).
    pub async fn prefetch_tickets(&self, query: &ListQuery) -> Result<(), CoreError> {
        self.prefetch::<Vec<Ticket>, _, _>(CacheKey::index(EntityKind::Ticket, query), || async {
            let page = self.api.list_tickets(query).await?;
            Ok(page.records.into_iter().map(Ticket::from).collect())
        })
        .await
    }

    // ── Ticket tags ──────────────────────────────────────────────────

    pub async fn ticket_tags(&self, query: &ListQuery) -> Result<Arc<Vec<TicketTag>>, CoreError> {
        self.cached(CacheKey::index(EntityKind::TicketTag, query), || async {
            let page = self.api.list_ticket_tags(query).await?;
            Ok(page.records.into_iter().map(TicketTag::from).collect())
        })
        .await
    }

    pub async fn prefetch_ticket_tags(&self, query: &ListQuery) -> Result<(), CoreError> {
        self.prefetch::<Vec<TicketTag>, _, _>(
            CacheKey::index(EntityKind::TicketTag, query),
            || async {
                let page = self.api.list_ticket_tags(query).await?;
                Ok(page.records.into_iter().map(TicketTag::from).collect())
            },
        )
        .await
    }

    pub async fn ticket_tag(&self, id: &EntityId) -> Result<Arc<TicketTag>, CoreError> {
        self.cached(CacheKey::show(EntityKind::TicketTag, id), || async {
            Ok(self.api.get_ticket_tag(&id.to_string()).await?.into())
        })
        .await
    }

    // ── Channels ─────────────────────────────────────────────────────

    pub async fn channels(&self, query: &ListQuery) -> Result<Arc<Vec<Channel>>, CoreError> {
        self.cached(CacheKey::index(EntityKind::Channel, query), || async {
            let page = self.api.list_channels(query).await?;
            Ok(page.records.into_iter().map(Channel::from).collect())
        })
        .await
    }

    pub async fn prefetch_channels(&self, query: &ListQuery) -> Result<(), CoreError> {
        self.prefetch::<Vec<Channel>, _, _>(CacheKey::index(EntityKind::Channel, query), || async {
            let page = self.api.list_channels(query).await?;
            Ok(page.records.into_iter().map(Channel::from).collect())
        })
        .await
    }

    pub async fn channel(&self, id: &EntityId) -> Result<Arc<Channel>, CoreError> {
        self.cached(CacheKey::show(EntityKind::Channel, id), || async {
            Ok(self.api.get_channel(&id.to_string()).await?.into())
        })
        .await
    }

    // ── Clients ──────────────────────────────────────────────────────

    pub async fn clients(&self, query: &ListQuery) -> Result<Arc<Vec<Client>>, CoreError> {
        self.cached(CacheKey::index(EntityKind::Client, query), || async {
            let page = self.api.list_clients(query).await?;
            Ok(page.records.into_iter().map(Client::from).collect())
        })
        .await
    }

    pub async fn prefetch_clients(&self, query: &ListQuery) -> Result<(), CoreError> {
        self.prefetch::<Vec<Client>, _, _>(CacheKey::index(EntityKind::Client, query), || async {
            let page = self.api.list_clients(query).await?;
            Ok(page.records.into_iter().map(Client::from).collect())
        })
        .await
    }

    pub async fn client(&self, id: &EntityId) -> Result<Arc<Client>, CoreError> {
        self.cached(CacheKey::show(EntityKind::Client, id), || async {
            Ok(self.api.get_client(&id.to_string()).await?.into())
        })
        .await
    }

    // ── Actions ──────────────────────────────────────────────────────

    pub async fn actions(&self, query: &ListQuery) -> Result<Arc<Vec<Action>>, CoreError> {
        self.cached(CacheKey::index(EntityKind::Action, query), || async {
            let page = self.api.list_actions(query).await?;
            Ok(page.records.into_iter().map(Action::from).collect())
        })
        .await
    }

    pub async fn prefetch_actions(&self, query: &ListQuery) -> Result<(), CoreError> {
        self.prefetch::<Vec<Action>, _, _>(CacheKey::index(EntityKind::Action, query), || async {
            let page = self.api.list_actions(query).await?;
            Ok(page.records.into_iter().map(Action::from).collect())
        })
        .await
    }

    pub async fn action(&self, id: &EntityId) -> Result<Arc<Action>, CoreError> {
        self.cached(CacheKey::show(EntityKind::Action, id), || async {
            Ok(self.api.get_action(&id.to_string()).await?.into())
        })
        .await
    }

    pub async fn action_fields(
        &self,
        action_id: &EntityId,
    ) -> Result<Arc<Vec<ActionField>>, CoreError> {
        self.cached(CacheKey::show(EntityKind::ActionField, action_id), || async {
            let page = self.api.list_action_fields(&action_id.to_string()).await?;
            Ok(page.records.into_iter().map(ActionField::from).collect())
        })
        .await
    }

    // ── Audit log ────────────────────────────────────────────────────

    pub async fn audit_log(&self, query: &ListQuery) -> Result<Arc<Vec<AuditLogHeader>>, CoreError> {
        self.cached(CacheKey::index(EntityKind::AuditLog, query), || async {
            let page = self.api.list_audit_log_headers(query).await?;
            Ok(page.records.into_iter().map(AuditLogHeader::from).collect())
        })
        .await
    }

    pub async fn prefetch_audit_log(&self, query: &ListQuery) -> Result<(), CoreError> {
        self.prefetch::<Vec<AuditLogHeader>, _, _>(
            CacheKey::index(EntityKind::AuditLog, query),
            || async {
                let page = self.api.list_audit_log_headers(query).await?;
                Ok(page.records.into_iter().map(AuditLogHeader::from).collect())
            },
        )
        .await
    }

    pub async fn audit_log_values(
        &self,
        header_id: &EntityId,
    ) -> Result<Arc<Vec<AuditLogValue>>, CoreError> {
        self.cached(CacheKey::show(EntityKind::AuditLog, header_id), || async {
            let page = self.api.list_audit_log_values(&header_id.to_string()).await?;
            Ok(page.records.into_iter().map(AuditLogValue::from).collect())
        })
        .await
    }
}
