// Endpoint groups, one file per resource. Each file adds inherent
// methods to `ApiClient`.

mod actions;
mod admins;
mod audit_logs;
mod auth;
mod channels;
mod clients;
mod ticket_tags;
mod tickets;
mod users;
