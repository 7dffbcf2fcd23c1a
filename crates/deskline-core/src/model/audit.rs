// Audit log: who changed what. A header describes the event; values
// hold per-field before/after snapshots for that header.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLogHeader {
    pub id: EntityId,
    pub actor_id: Option<EntityId>,
    pub actor_type: String,
    pub event: String,
    pub target_type: Option<String>,
    pub target_id: Option<EntityId>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLogValue {
    pub id: EntityId,
    pub header_id: EntityId,
    pub field: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}
