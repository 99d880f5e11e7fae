// Wire types for the inventory backend's JSON contract.
//
// These mirror the backend payloads exactly (snake_case keys, nullable
// columns as Option). Domain conversion -- enum parsing, timestamp
// handling -- happens in rackview-core, not here.

use serde::{Deserialize, Serialize};

/// Error body shape: `{"error": "<message>"}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}

/// Successful `POST /api/login` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub username: String,
    pub role: String,
}

/// One server row from `GET /api/servers`.
///
/// `created_at` / `created_by` are backend bookkeeping columns; they
/// ride along for detail output but the dashboard table ignores them.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerResponse {
    pub id: i64,
    pub hostname: String,
    pub os_type: String,
    pub os_version: String,
    pub server_type: String,
    pub private_ip: String,
    #[serde(default)]
    pub public_ip: Option<String>,
    pub primary_owner: String,
    #[serde(default)]
    pub secondary_owner: Option<String>,
    pub datacenter: String,
    pub environment: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
}

/// One audit row from `GET /api/logs`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuditLogResponse {
    #[serde(default)]
    pub id: Option<i64>,
    pub user: String,
    pub action: String,
    pub resource: String,
    #[serde(default)]
    pub details: Option<String>,
    pub timestamp: String,
    #[serde(default)]
    pub ip_address: Option<String>,
}

/// Body for `POST /api/servers`.
///
/// Every field is optional at the wire level: the caller omits fields
/// it has no value for, and the backend enforces which are required.
/// Absent fields are not serialized at all.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ServerCreateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datacenter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
}

/// Acknowledgement from create/delete: `{"message": "...", "id": N}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
}
