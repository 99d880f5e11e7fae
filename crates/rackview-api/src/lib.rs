// rackview-api: Async Rust client for the rackview inventory backend

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::InventoryClient;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
pub use types::{Ack, AuditLogResponse, LoginResponse, ServerCreateRequest, ServerResponse};
