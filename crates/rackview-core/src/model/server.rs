// ── Server record domain type ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a server is provisioned.
///
/// Backend values outside the known set parse to [`Unknown`](Self::Unknown)
/// rather than failing the whole fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerType {
    Physical,
    Virtual,
    Cloud,
    #[serde(other)]
    Unknown,
}

impl ServerType {
    /// Lenient parse from the backend's string column.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "physical" => Self::Physical,
            "virtual" => Self::Virtual,
            "cloud" => Self::Cloud,
            _ => Self::Unknown,
        }
    }

    /// Fixed display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Physical => "physical",
            Self::Virtual => "virtual",
            Self::Cloud => "cloud",
            Self::Unknown => "unknown",
        }
    }
}

/// Deployment environment of a server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    Staging,
    Development,
    Testing,
    #[serde(other)]
    Unknown,
}

impl Environment {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "production" => Self::Production,
            "staging" => Self::Staging,
            "development" => Self::Development,
            "testing" => Self::Testing,
            _ => Self::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Staging => "staging",
            Self::Development => "development",
            Self::Testing => "testing",
            Self::Unknown => "unknown",
        }
    }
}

/// One inventoried machine, as last fetched from the backend.
///
/// Immutable from the controller's perspective: mutations go through
/// create/delete followed by a full re-fetch, never in-place edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerRecord {
    /// Backend-assigned unique id. The only identity the record carries.
    pub id: i64,
    pub hostname: String,
    pub os_type: String,
    pub os_version: String,
    pub server_type: ServerType,
    pub private_ip: String,
    pub public_ip: Option<String>,
    pub primary_owner: String,
    pub secondary_owner: Option<String>,
    pub datacenter: String,
    pub environment: Environment,
    /// Backend bookkeeping; shown in detail views only.
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_type_parses_known_values() {
        assert_eq!(ServerType::parse("physical"), ServerType::Physical);
        assert_eq!(ServerType::parse("virtual"), ServerType::Virtual);
        assert_eq!(ServerType::parse("cloud"), ServerType::Cloud);
    }

    #[test]
    fn server_type_falls_back_to_unknown() {
        assert_eq!(ServerType::parse("mainframe"), ServerType::Unknown);
        assert_eq!(ServerType::parse(""), ServerType::Unknown);
        assert_eq!(ServerType::Unknown.label(), "unknown");
    }

    #[test]
    fn environment_falls_back_to_unknown() {
        assert_eq!(Environment::parse("production"), Environment::Production);
        assert_eq!(Environment::parse("qa"), Environment::Unknown);
    }
}
