// Client (tenant organization) endpoints.

use crate::client::ApiClient;
use crate::envelope::Page;
use crate::error::Error;
use crate::filter::ListQuery;
use crate::types::{ClientRecord, CreateClient, UpdateClient};

impl ApiClient {
    pub async fn list_clients(&self, query: &ListQuery) -> Result<Page<ClientRecord>, Error> {
        self.get_list("clients", query).await
    }

    pub async fn get_client(&self, id: &str) -> Result<ClientRecord, Error> {
        self.get_record(&format!("clients/{id}")).await
    }

    pub async fn create_client(&self, body: &CreateClient) -> Result<ClientRecord, Error> {
        self.post_record("clients", body).await
    }

    pub async fn update_client(&self, id: &str, body: &UpdateClient) -> Result<ClientRecord, Error> {
        self.put_record(&format!("clients/{id}"), body).await
    }

    pub async fn archive_client(&self, id: &str) -> Result<(), Error> {
        self.delete_record(&format!("clients/{id}")).await
    }

    pub async fn restore_client(&self, id: &str) -> Result<ClientRecord, Error> {
        self.put_action(&format!("clients/{id}/restore")).await
    }
}
