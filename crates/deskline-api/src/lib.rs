// deskline-api: Async Rust client for the helpdesk REST API

pub mod client;
pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod filter;
pub mod transport;
pub mod types;

pub use client::ApiClient;
pub use envelope::{Envelope, Meta, Page, Pagination};
pub use error::Error;
pub use filter::ListQuery;
pub use transport::{TlsMode, TransportConfig};
