// Workflow action endpoints. An action is a reusable operation template;
// its fields describe the form an agent fills when applying it.

use crate::client::ApiClient;
use crate::envelope::Page;
use crate::error::Error;
use crate::filter::ListQuery;
use crate::types::{ActionFieldRecord, ActionRecord, CreateAction, CreateActionField, UpdateAction};

impl ApiClient {
    pub async fn list_actions(&self, query: &ListQuery) -> Result<Page<ActionRecord>, Error> {
        self.get_list("actions", query).await
    }

    pub async fn get_action(&self, id: &str) -> Result<ActionRecord, Error> {
        self.get_record(&format!("actions/{id}")).await
    }

    pub async fn create_action(&self, body: &CreateAction) -> Result<ActionRecord, Error> {
        self.post_record("actions", body).await
    }

    pub async fn update_action(&self, id: &str, body: &UpdateAction) -> Result<ActionRecord, Error> {
        self.put_record(&format!("actions/{id}"), body).await
    }

    /// Deactivate an action (soft delete).
    pub async fn deactivate_action(&self, id: &str) -> Result<(), Error> {
        self.delete_record(&format!("actions/{id}")).await
    }

    pub async fn activate_action(&self, id: &str) -> Result<ActionRecord, Error> {
        self.put_action(&format!("actions/{id}/activate")).await
    }

    // ── Fields ───────────────────────────────────────────────────────

    pub async fn list_action_fields(
        &self,
        action_id: &str,
    ) -> Result<Page<ActionFieldRecord>, Error> {
        self.get_list(&format!("actions/{action_id}/fields"), &ListQuery::default())
            .await
    }

    pub async fn create_action_field(
        &self,
        action_id: &str,
        body: &CreateActionField,
    ) -> Result<ActionFieldRecord, Error> {
        self.post_record(&format!("actions/{action_id}/fields"), body)
            .await
    }

    pub async fn delete_action_field(&self, action_id: &str, field_id: &str) -> Result<(), Error> {
        self.delete_record(&format!("actions/{action_id}/fields/{field_id}"))
            .await
    }
}
