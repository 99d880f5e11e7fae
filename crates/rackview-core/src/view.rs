// ── View renderer ──
//
// Pure projection of permission set + snapshots into display-ready
// view models. No I/O, no session access, no re-derivation of
// permissions downstream: the presentation layer renders exactly what
// this module hands it.

use chrono::{DateTime, Utc};

use crate::model::{AuditLogEntry, ServerRecord};
use crate::policy::PermissionSet;

/// Placeholder for absent optional fields.
pub const PLACEHOLDER: &str = "N/A";

/// Display tone for a rendered value. The presentation layer maps
/// tones to colors or style markup; the renderer only classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Danger,
    Info,
    Warning,
    Neutral,
}

/// The per-row affordance for a server entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    /// The viewer may delete this row. Carries what a confirmation
    /// prompt needs to name the target.
    Delete { id: i64, hostname: String },
    ReadOnly,
}

/// One display-ready inventory row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerRow {
    pub id: i64,
    pub hostname: String,
    pub os: String,
    pub server_type: String,
    pub private_ip: String,
    pub public_ip: String,
    pub primary_owner: String,
    pub secondary_owner: String,
    pub datacenter: String,
    pub environment: String,
    pub environment_tone: Tone,
    pub action: RowAction,
}

/// One display-ready audit row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRow {
    pub timestamp: String,
    pub user: String,
    pub action: String,
    pub action_tone: Tone,
    pub resource: String,
    pub details: String,
    pub ip_address: String,
}

/// Everything the presentation layer needs to draw the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub servers: Vec<ServerRow>,
    /// `None` when the viewer may not see the audit log at all, as
    /// opposed to `Some(vec![])` for an admin with an empty log.
    pub logs: Option<Vec<LogRow>>,
    pub show_add_control: bool,
}

impl DashboardView {
    /// Project the current snapshots through the permission set.
    pub fn build(
        perms: PermissionSet,
        servers: &[ServerRecord],
        logs: &[AuditLogEntry],
    ) -> Self {
        Self {
            servers: servers.iter().map(|s| server_row(perms, s)).collect(),
            logs: perms
                .can_view_logs
                .then(|| logs.iter().map(log_row).collect()),
            show_add_control: perms.can_mutate_servers,
        }
    }
}

fn optional(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => PLACEHOLDER.to_owned(),
    }
}

fn server_row(perms: PermissionSet, record: &ServerRecord) -> ServerRow {
    let action = if perms.can_mutate_servers {
        RowAction::Delete {
            id: record.id,
            hostname: record.hostname.clone(),
        }
    } else {
        RowAction::ReadOnly
    };
    ServerRow {
        id: record.id,
        hostname: record.hostname.clone(),
        os: format!("{} {}", record.os_type, record.os_version),
        server_type: record.server_type.label().to_owned(),
        private_ip: record.private_ip.clone(),
        public_ip: optional(record.public_ip.as_deref()),
        primary_owner: record.primary_owner.clone(),
        secondary_owner: optional(record.secondary_owner.as_deref()),
        datacenter: record.datacenter.clone(),
        environment: record.environment.label().to_owned(),
        environment_tone: environment_tone(record),
        action,
    }
}

fn environment_tone(record: &ServerRecord) -> Tone {
    use crate::model::Environment;
    match record.environment {
        Environment::Production => Tone::Danger,
        Environment::Staging => Tone::Warning,
        Environment::Development => Tone::Info,
        Environment::Testing | Environment::Unknown => Tone::Neutral,
    }
}

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

fn log_row(entry: &AuditLogEntry) -> LogRow {
    LogRow {
        timestamp: format_timestamp(entry.timestamp),
        user: entry.user.clone(),
        action: entry.action.clone(),
        action_tone: classify_action(&entry.action),
        resource: entry.resource.clone(),
        details: optional(entry.details.as_deref()),
        ip_address: optional(entry.ip_address.as_deref()),
    }
}

/// Tone of an audit action tag, by substring. Checked in priority
/// order; the first match wins, so `LOGIN_FAILED` reads as a login
/// event, not a failure.
pub fn classify_action(action: &str) -> Tone {
    if action.contains("CREATE") {
        Tone::Success
    } else if action.contains("DELETE") {
        Tone::Danger
    } else if action.contains("LOGIN") {
        Tone::Info
    } else if action.contains("FAILED") {
        Tone::Warning
    } else {
        Tone::Neutral
    }
}
