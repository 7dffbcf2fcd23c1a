// ── Value-keyed query cache ──
//
// Cached query results keyed by (entity, operation, parameters). Keys
// compare by value: two filters describing the same listing produce the
// same key regardless of how they were constructed, because parameters
// are canonicalized through serde_json (object keys are emitted in
// sorted order).
//
// Invalidation marks entries stale rather than evicting them, so a
// consumer holding a stale snapshot keeps rendering it until the next
// fetch replaces it.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use serde::Serialize;

use crate::model::EntityId;

// ── Keys ────────────────────────────────────────────────────────────

/// The entity a cached query belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Admin,
    User,
    Ticket,
    TicketTag,
    TicketAssignment,
    Channel,
    Client,
    Action,
    ActionField,
    AuditLog,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::Ticket => "ticket",
            Self::TicketTag => "ticket_tag",
            Self::TicketAssignment => "ticket_assignment",
            Self::Channel => "channel",
            Self::Client => "client",
            Self::Action => "action",
            Self::ActionField => "action_field",
            Self::AuditLog => "audit_log",
        };
        write!(f, "{name}")
    }
}

/// The read operation a cached entry answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryOp {
    /// A filtered listing.
    Index,
    /// A single record by id.
    Show,
}

/// Identity of one cached query result.
///
/// `params` is the canonical JSON of the query parameters, so keys are
/// equal whenever the parameters are equal as values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub entity: EntityKind,
    pub op: QueryOp,
    params: String,
}

impl CacheKey {
    /// Key for a filtered listing.
    pub fn index(entity: EntityKind, params: &impl Serialize) -> Self {
        Self {
            entity,
            op: QueryOp::Index,
            params: canonical_params(params),
        }
    }

    /// Key for a single record lookup.
    pub fn show(entity: EntityKind, id: &EntityId) -> Self {
        Self {
            entity,
            op: QueryOp::Show,
            params: id.to_string(),
        }
    }

    pub fn params(&self) -> &str {
        &self.params
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self.op {
            QueryOp::Index => "index",
            QueryOp::Show => "show",
        };
        write!(f, "{}/{op}?{}", self.entity, self.params)
    }
}

/// Canonical JSON for arbitrary parameter values. `serde_json` maps are
/// sorted by key, so structurally equal parameters yield identical text.
fn canonical_params(params: &impl Serialize) -> String {
    serde_json::to_value(params)
        .map(|v| v.to_string())
        .unwrap_or_else(|_| "null".to_owned())
}

// ── Invalidation scopes ─────────────────────────────────────────────

/// What a mutation declares stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invalidation {
    /// One exact cached query.
    Key(CacheKey),
    /// Every cached query for an entity.
    Entity(EntityKind),
    /// Every cached query for an entity and operation (e.g. all ticket
    /// listings, leaving single-ticket lookups intact).
    EntityOp(EntityKind, QueryOp),
}

impl Invalidation {
    fn matches(&self, key: &CacheKey) -> bool {
        match self {
            Self::Key(k) => k == key,
            Self::Entity(entity) => *entity == key.entity,
            Self::EntityOp(entity, op) => *entity == key.entity && *op == key.op,
        }
    }
}

// ── Cache ───────────────────────────────────────────────────────────

struct CacheEntry {
    /// Type-erased `Arc<T>`; the caller downcasts with the type it
    /// stored under this key.
    value: Arc<dyn Any + Send + Sync>,
    stale: bool,
}

/// Lock-free cache for query results of heterogeneous types.
#[derive(Default)]
pub struct QueryCache {
    entries: DashMap<CacheKey, CacheEntry>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a fresh (non-stale) entry. Returns `None` on miss, on a
    /// stale entry, and when the stored type does not match `T`.
    pub fn get<T: Send + Sync + 'static>(&self, key: &CacheKey) -> Option<Arc<T>> {
        let entry = self.entries.get(key)?;
        if entry.stale {
            return None;
        }
        Arc::clone(&entry.value).downcast::<T>().ok()
    }

    /// Store a result, replacing any previous entry (stale or not), and
    /// hand back the shared value.
    pub fn insert<T: Send + Sync + 'static>(&self, key: CacheKey, value: T) -> Arc<T> {
        let value = Arc::new(value);
        self.entries.insert(
            key,
            CacheEntry {
                value: Arc::clone(&value) as Arc<dyn Any + Send + Sync>,
                stale: false,
            },
        );
        value
    }

    /// Mark every entry matched by the scope as stale. Entries stay
    /// resident; the next `get` misses and triggers a refetch.
    pub fn invalidate(&self, scope: &Invalidation) {
        for mut entry in self.entries.iter_mut() {
            if scope.matches(entry.key()) {
                entry.value_mut().stale = true;
            }
        }
    }

    /// Whether the entry exists and is stale.
    pub fn is_stale(&self, key: &CacheKey) -> bool {
        self.entries.get(key).is_some_and(|e| e.stale)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry (used on logout).
    pub fn clear(&self) {
        self.entries.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use deskline_api::ListQuery;

    #[test]
    fn keys_compare_by_parameter_value() {
        // Same filter built two different ways.
        let a = CacheKey::index(EntityKind::Ticket, &ListQuery::search("printer"));
        let b = CacheKey::index(
            EntityKind::Ticket,
            &ListQuery {
                search: Some("printer".to_owned()),
                ..ListQuery::default()
            },
        );
        assert_eq!(a, b);

        // Different filter, different key.
        let c = CacheKey::index(EntityKind::Ticket, &ListQuery::search("printer").with_page(2));
        assert_ne!(a, c);

        // Same filter, different entity.
        let d = CacheKey::index(EntityKind::User, &ListQuery::search("printer"));
        assert_ne!(a, d);
    }

    #[test]
    fn get_returns_what_insert_stored() {
        let cache = QueryCache::new();
        let key = CacheKey::index(EntityKind::Ticket, &ListQuery::default());

        assert!(cache.get::<Vec<String>>(&key).is_none());
        cache.insert(key.clone(), vec!["t-1".to_owned()]);
        assert_eq!(*cache.get::<Vec<String>>(&key).unwrap(), vec!["t-1"]);
    }

    #[test]
    fn get_with_wrong_type_misses() {
        let cache = QueryCache::new();
        let key = CacheKey::index(EntityKind::Ticket, &ListQuery::default());
        cache.insert(key.clone(), 42u32);

        assert!(cache.get::<String>(&key).is_none());
    }

    #[test]
    fn invalidate_by_key_marks_only_that_entry() {
        let cache = QueryCache::new();
        let hit = CacheKey::index(EntityKind::Ticket, &ListQuery::default());
        let untouched = CacheKey::index(EntityKind::Ticket, &ListQuery::search("x"));
        cache.insert(hit.clone(), 1u32);
        cache.insert(untouched.clone(), 2u32);

        cache.invalidate(&Invalidation::Key(hit.clone()));

        assert!(cache.get::<u32>(&hit).is_none());
        assert!(cache.is_stale(&hit));
        assert!(cache.get::<u32>(&untouched).is_some());
    }

    #[test]
    fn invalidate_by_entity_spans_operations() {
        let cache = QueryCache::new();
        let index = CacheKey::index(EntityKind::Admin, &ListQuery::default());
        let show = CacheKey::show(EntityKind::Admin, &"a-1".into());
        let other = CacheKey::index(EntityKind::User, &ListQuery::default());
        cache.insert(index.clone(), 1u32);
        cache.insert(show.clone(), 2u32);
        cache.insert(other.clone(), 3u32);

        cache.invalidate(&Invalidation::Entity(EntityKind::Admin));

        assert!(cache.get::<u32>(&index).is_none());
        assert!(cache.get::<u32>(&show).is_none());
        assert!(cache.get::<u32>(&other).is_some());
    }

    #[test]
    fn invalidate_by_entity_op_spares_other_operation() {
        let cache = QueryCache::new();
        let index = CacheKey::index(EntityKind::Ticket, &ListQuery::default());
        let show = CacheKey::show(EntityKind::Ticket, &"t-1".into());
        cache.insert(index.clone(), 1u32);
        cache.insert(show.clone(), 2u32);

        cache.invalidate(&Invalidation::EntityOp(EntityKind::Ticket, QueryOp::Index));

        assert!(cache.get::<u32>(&index).is_none());
        assert!(cache.get::<u32>(&show).is_some());
    }

    #[test]
    fn reinsert_clears_staleness() {
        let cache = QueryCache::new();
        let key = CacheKey::index(EntityKind::Ticket, &ListQuery::default());
        cache.insert(key.clone(), 1u32);
        cache.invalidate(&Invalidation::Entity(EntityKind::Ticket));
        assert!(cache.is_stale(&key));

        cache.insert(key.clone(), 2u32);
        assert!(!cache.is_stale(&key));
        assert_eq!(*cache.get::<u32>(&key).unwrap(), 2);
    }

    #[test]
    fn clear_empties_the_cache() {
        let cache = QueryCache::new();
        cache.insert(CacheKey::index(EntityKind::Ticket, &ListQuery::default()), 1u32);
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
    }
}
