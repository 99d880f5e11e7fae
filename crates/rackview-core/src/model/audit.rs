// ── Audit log domain type ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded security/administrative event.
///
/// Read-only and append-only from the client's point of view: the
/// snapshot is replaced wholesale on every fetch, never merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub timestamp: DateTime<Utc>,
    pub user: String,
    /// Backend action tag, e.g. `SERVER_CREATED`, `LOGIN_FAILED`.
    pub action: String,
    /// The resource the action touched, e.g. `server:db-01`.
    pub resource: String,
    pub details: Option<String>,
    pub ip_address: Option<String>,
}
