// Admin account endpoints. Admin management is restricted to
// super-admins server-side; other roles receive HTTP 403.

use crate::client::ApiClient;
use crate::envelope::Page;
use crate::error::Error;
use crate::filter::ListQuery;
use crate::types::{AdminRecord, CreateAdmin, UpdateAdmin};

impl ApiClient {
    pub async fn list_admins(&self, query: &ListQuery) -> Result<Page<AdminRecord>, Error> {
        self.get_list("admins", query).await
    }

    pub async fn get_admin(&self, id: &str) -> Result<AdminRecord, Error> {
        self.get_record(&format!("admins/{id}")).await
    }

    pub async fn create_admin(&self, body: &CreateAdmin) -> Result<AdminRecord, Error> {
        self.post_record("admins", body).await
    }

    pub async fn update_admin(&self, id: &str, body: &UpdateAdmin) -> Result<AdminRecord, Error> {
        self.put_record(&format!("admins/{id}"), body).await
    }

    /// Deactivate an admin account (soft delete).
    pub async fn deactivate_admin(&self, id: &str) -> Result<(), Error> {
        self.delete_record(&format!("admins/{id}")).await
    }

    /// Reactivate a previously deactivated admin.
    pub async fn activate_admin(&self, id: &str) -> Result<AdminRecord, Error> {
        self.put_action(&format!("admins/{id}/activate")).await
    }
}
