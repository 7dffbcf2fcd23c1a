// Intake channel endpoints (email, web form, phone, ...).

use crate::client::ApiClient;
use crate::envelope::Page;
use crate::error::Error;
use crate::filter::ListQuery;
use crate::types::{ChannelRecord, CreateChannel, UpdateChannel};

impl ApiClient {
    pub async fn list_channels(&self, query: &ListQuery) -> Result<Page<ChannelRecord>, Error> {
        self.get_list("channels", query).await
    }

    pub async fn get_channel(&self, id: &str) -> Result<ChannelRecord, Error> {
        self.get_record(&format!("channels/{id}")).await
    }

    pub async fn create_channel(&self, body: &CreateChannel) -> Result<ChannelRecord, Error> {
        self.post_record("channels", body).await
    }

    pub async fn update_channel(
        &self,
        id: &str,
        body: &UpdateChannel,
    ) -> Result<ChannelRecord, Error> {
        self.put_record(&format!("channels/{id}"), body).await
    }

    pub async fn archive_channel(&self, id: &str) -> Result<(), Error> {
        self.delete_record(&format!("channels/{id}")).await
    }

    pub async fn restore_channel(&self, id: &str) -> Result<ChannelRecord, Error> {
        self.put_action(&format!("channels/{id}/restore")).await
    }
}
