// ── Session and role types ──

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// The role the backend declared for the authenticated user.
///
/// Unrecognized role strings parse to [`Unknown`](Self::Unknown); they
/// never fail, and the role policy treats them as least-privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Standard,
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Lenient, case-insensitive parse of the backend's role string.
    ///
    /// The backend calls non-admins `"user"`; `"standard"` is accepted
    /// as a synonym so persisted sessions round-trip either spelling.
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "admin" => Self::Admin,
            "user" | "standard" => Self::Standard,
            _ => Self::Unknown,
        }
    }

    /// Canonical string, used for persistence and display.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Standard => "standard",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated identity currently active in the client.
///
/// Exactly one session is active at a time, or none. Owned by the
/// dashboard controller; the session store is a durable mirror.
#[derive(Debug, Clone)]
pub struct Session {
    pub username: String,
    pub role: Role,
    /// Opaque bearer token. Never logged; exposed only when persisting
    /// or when building the Authorization header.
    pub token: SecretString,
}
