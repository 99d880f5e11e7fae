// ── Wire → domain conversion ──
//
// All parsing of backend payloads into canonical domain types happens
// here, at the api/core seam. String enums fail open to Unknown;
// timestamps fail open to None (servers) or the epoch (logs) so one
// odd row never poisons a whole snapshot.

use chrono::{DateTime, NaiveDateTime, Utc};

use rackview_api::{AuditLogResponse, ServerResponse};

use crate::model::{AuditLogEntry, Environment, ServerRecord, ServerType};

/// Parse a backend timestamp.
///
/// The backend emits naive ISO-8601 (`2024-06-15T10:30:00.123456`,
/// implicitly UTC); RFC 3339 with an offset is accepted too.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

impl From<ServerResponse> for ServerRecord {
    fn from(raw: ServerResponse) -> Self {
        Self {
            id: raw.id,
            hostname: raw.hostname,
            os_type: raw.os_type,
            os_version: raw.os_version,
            server_type: ServerType::parse(&raw.server_type),
            private_ip: raw.private_ip,
            public_ip: raw.public_ip,
            primary_owner: raw.primary_owner,
            secondary_owner: raw.secondary_owner,
            datacenter: raw.datacenter,
            environment: Environment::parse(&raw.environment),
            created_at: raw.created_at.as_deref().and_then(parse_timestamp),
            created_by: raw.created_by,
        }
    }
}

impl From<AuditLogResponse> for AuditLogEntry {
    fn from(raw: AuditLogResponse) -> Self {
        Self {
            timestamp: parse_timestamp(&raw.timestamp).unwrap_or(DateTime::UNIX_EPOCH),
            user: raw.user,
            action: raw.action,
            resource: raw.resource,
            details: raw.details,
            ip_address: raw.ip_address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_server() -> ServerResponse {
        ServerResponse {
            id: 42,
            hostname: "db-01".into(),
            os_type: "Linux".into(),
            os_version: "22.04".into(),
            server_type: "physical".into(),
            private_ip: "10.0.0.5".into(),
            public_ip: None,
            primary_owner: "dba-team".into(),
            secondary_owner: None,
            datacenter: "fra1".into(),
            environment: "production".into(),
            created_at: Some("2024-06-15T10:30:00.123456".into()),
            created_by: Some("admin".into()),
        }
    }

    #[test]
    fn server_conversion_parses_enums_and_timestamp() {
        let record = ServerRecord::from(raw_server());
        assert_eq!(record.server_type, ServerType::Physical);
        assert_eq!(record.environment, Environment::Production);
        assert!(record.created_at.is_some());
    }

    #[test]
    fn unknown_enum_strings_convert_without_error() {
        let mut raw = raw_server();
        raw.server_type = "quantum".into();
        raw.environment = "qa".into();
        let record = ServerRecord::from(raw);
        assert_eq!(record.server_type, ServerType::Unknown);
        assert_eq!(record.environment, Environment::Unknown);
    }

    #[test]
    fn log_conversion_handles_naive_and_rfc3339_timestamps() {
        let raw = AuditLogResponse {
            id: Some(1),
            user: "admin".into(),
            action: "LOGIN".into(),
            resource: "system".into(),
            details: None,
            timestamp: "2024-06-15T10:30:00Z".into(),
            ip_address: None,
        };
        let entry = AuditLogEntry::from(raw.clone());
        assert_eq!(entry.timestamp.to_rfc3339(), "2024-06-15T10:30:00+00:00");

        let naive = AuditLogResponse {
            timestamp: "2024-06-15T10:30:00".into(),
            ..raw
        };
        let entry = AuditLogEntry::from(naive);
        assert_eq!(entry.timestamp.to_rfc3339(), "2024-06-15T10:30:00+00:00");
    }

    #[test]
    fn unparseable_log_timestamp_falls_back_to_epoch() {
        let raw = AuditLogResponse {
            id: None,
            user: "admin".into(),
            action: "LOGIN".into(),
            resource: "system".into(),
            details: None,
            timestamp: "yesterday".into(),
            ip_address: None,
        };
        assert_eq!(AuditLogEntry::from(raw).timestamp, DateTime::UNIX_EPOCH);
    }
}
