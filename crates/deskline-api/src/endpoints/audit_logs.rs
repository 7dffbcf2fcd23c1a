// Audit log endpoints (read-only). Headers record who did what; values
// record per-field before/after snapshots for a header.

use crate::client::ApiClient;
use crate::envelope::Page;
use crate::error::Error;
use crate::filter::ListQuery;
use crate::types::{AuditLogHeaderRecord, AuditLogValueRecord};

impl ApiClient {
    pub async fn list_audit_log_headers(
        &self,
        query: &ListQuery,
    ) -> Result<Page<AuditLogHeaderRecord>, Error> {
        self.get_list("audit-logs", query).await
    }

    pub async fn get_audit_log_header(&self, id: &str) -> Result<AuditLogHeaderRecord, Error> {
        self.get_record(&format!("audit-logs/{id}")).await
    }

    pub async fn list_audit_log_values(
        &self,
        header_id: &str,
    ) -> Result<Page<AuditLogValueRecord>, Error> {
        self.get_list(&format!("audit-logs/{header_id}/values"), &ListQuery::default())
            .await
    }
}
