// ── Domain model ──

pub mod audit;
pub mod server;
pub mod session;

pub use audit::AuditLogEntry;
pub use server::{Environment, ServerRecord, ServerType};
pub use session::{Role, Session};
