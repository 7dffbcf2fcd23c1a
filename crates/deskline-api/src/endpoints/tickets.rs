// Ticket endpoints, including assignment to admins.

use crate::client::ApiClient;
use crate::envelope::Page;
use crate::error::Error;
use crate::filter::ListQuery;
use crate::types::{AssignTicket, CreateTicket, TicketAssignmentRecord, TicketRecord, UpdateTicket};

impl ApiClient {
    pub async fn list_tickets(&self, query: &ListQuery) -> Result<Page<TicketRecord>, Error> {
        self.get_list("tickets", query).await
    }

    pub async fn get_ticket(&self, id: &str) -> Result<TicketRecord, Error> {
        self.get_record(&format!("tickets/{id}")).await
    }

    pub async fn create_ticket(&self, body: &CreateTicket) -> Result<TicketRecord, Error> {
        self.post_record("tickets", body).await
    }

    pub async fn update_ticket(&self, id: &str, body: &UpdateTicket) -> Result<TicketRecord, Error> {
        self.put_record(&format!("tickets/{id}"), body).await
    }

    /// Archive a ticket (soft delete).
    pub async fn archive_ticket(&self, id: &str) -> Result<(), Error> {
        self.delete_record(&format!("tickets/{id}")).await
    }

    pub async fn restore_ticket(&self, id: &str) -> Result<TicketRecord, Error> {
        self.put_action(&format!("tickets/{id}/restore")).await
    }

    // ── Assignments ──────────────────────────────────────────────────

    pub async fn list_ticket_assignments(
        &self,
        ticket_id: &str,
    ) -> Result<Page<TicketAssignmentRecord>, Error> {
        self.get_list(
            &format!("tickets/{ticket_id}/assignments"),
            &ListQuery::default(),
        )
        .await
    }

    /// Assign the ticket to an admin.
    pub async fn assign_ticket(
        &self,
        ticket_id: &str,
        admin_id: &str,
    ) -> Result<TicketAssignmentRecord, Error> {
        self.post_record(
            &format!("tickets/{ticket_id}/assignments"),
            &AssignTicket {
                admin_id: admin_id.to_owned(),
            },
        )
        .await
    }

    /// Remove an assignment.
    pub async fn unassign_ticket(&self, ticket_id: &str, assignment_id: &str) -> Result<(), Error> {
        self.delete_record(&format!("tickets/{ticket_id}/assignments/{assignment_id}"))
            .await
    }
}
