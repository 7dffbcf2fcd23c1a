// End-user (ticket requester) endpoints.

use crate::client::ApiClient;
use crate::envelope::Page;
use crate::error::Error;
use crate::filter::ListQuery;
use crate::types::{CreateUser, UpdateUser, UserRecord};

impl ApiClient {
    pub async fn list_users(&self, query: &ListQuery) -> Result<Page<UserRecord>, Error> {
        self.get_list("users", query).await
    }

    pub async fn get_user(&self, id: &str) -> Result<UserRecord, Error> {
        self.get_record(&format!("users/{id}")).await
    }

    pub async fn create_user(&self, body: &CreateUser) -> Result<UserRecord, Error> {
        self.post_record("users", body).await
    }

    pub async fn update_user(&self, id: &str, body: &UpdateUser) -> Result<UserRecord, Error> {
        self.put_record(&format!("users/{id}"), body).await
    }

    /// Archive a user (soft delete; their tickets remain).
    pub async fn archive_user(&self, id: &str) -> Result<(), Error> {
        self.delete_record(&format!("users/{id}")).await
    }

    pub async fn restore_user(&self, id: &str) -> Result<UserRecord, Error> {
        self.put_action(&format!("users/{id}/restore")).await
    }
}
