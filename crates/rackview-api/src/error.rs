use thiserror::Error;

/// Top-level error type for the `rackview-api` crate.
///
/// Classifies every failure mode of the backend HTTP contract.
/// `rackview-core` maps these into user-facing diagnostics -- consumers
/// of the core never see raw status codes.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Login rejected (wrong credentials). Carries the backend's
    /// own message, suitable for inline display near the login form.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// A bearer call was rejected with 401: the token has expired or
    /// been revoked server-side. Distinct from `Authentication` so the
    /// caller can wipe the persisted session instead of re-prompting.
    #[error("Session invalid -- re-authentication required")]
    SessionInvalid,

    /// The backend refused the operation for this role (HTTP 403).
    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    // ── Request rejection ───────────────────────────────────────────
    /// The backend rejected the payload (HTTP 400). The message is
    /// passed through verbatim.
    #[error("{message}")]
    Validation { message: String },

    /// The target resource does not exist (HTTP 404).
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// Any other non-success status the contract doesn't name.
    #[error("Backend error (HTTP {status}): {message}")]
    Backend { status: u16, message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if the session token is no longer accepted
    /// and the persisted session must be wiped.
    pub fn is_session_invalid(&self) -> bool {
        matches!(self, Self::SessionInvalid)
    }

    /// Returns `true` for network-unreachable conditions: the backend
    /// never answered, so no structured error message exists.
    pub fn is_connectivity(&self) -> bool {
        match self {
            Self::Transport(e) => !e.is_status(),
            Self::Tls(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
