// Ticket tag endpoints.

use crate::client::ApiClient;
use crate::envelope::Page;
use crate::error::Error;
use crate::filter::ListQuery;
use crate::types::{CreateTicketTag, TicketTagRecord, UpdateTicketTag};

impl ApiClient {
    pub async fn list_ticket_tags(&self, query: &ListQuery) -> Result<Page<TicketTagRecord>, Error> {
        self.get_list("ticket-tags", query).await
    }

    pub async fn get_ticket_tag(&self, id: &str) -> Result<TicketTagRecord, Error> {
        self.get_record(&format!("ticket-tags/{id}")).await
    }

    pub async fn create_ticket_tag(&self, body: &CreateTicketTag) -> Result<TicketTagRecord, Error> {
        self.post_record("ticket-tags", body).await
    }

    pub async fn update_ticket_tag(
        &self,
        id: &str,
        body: &UpdateTicketTag,
    ) -> Result<TicketTagRecord, Error> {
        self.put_record(&format!("ticket-tags/{id}"), body).await
    }

    /// Archive a tag (soft delete; tagged tickets keep the association).
    pub async fn archive_ticket_tag(&self, id: &str) -> Result<(), Error> {
        self.delete_record(&format!("ticket-tags/{id}")).await
    }

    pub async fn restore_ticket_tag(&self, id: &str) -> Result<TicketTagRecord, Error> {
        self.put_action(&format!("ticket-tags/{id}/restore")).await
    }
}
