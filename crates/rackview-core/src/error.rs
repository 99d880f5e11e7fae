// ── Core error types ──
//
// User-facing errors from rackview-core. These are NOT API-specific --
// consumers never see HTTP status codes or JSON parse failures
// directly. The `From<rackview_api::Error>` impl translates transport
// errors into domain-appropriate variants.

use thiserror::Error;

/// Unified error taxonomy for the dashboard controller.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connectivity ─────────────────────────────────────────────────
    /// The backend never answered. Transient by definition; the user
    /// re-triggers the action, nothing is retried automatically.
    #[error("Connection error. Please try again.")]
    Connectivity,

    // ── Authentication / authorization ───────────────────────────────
    /// Login rejected -- shown inline near the login form.
    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    /// A previously accepted credential was rejected by the backend.
    /// The controller has already cleared the session when this is
    /// surfaced.
    #[error("Session expired -- please sign in again")]
    SessionExpired,

    /// The backend refused the operation for this role.
    #[error("Permission denied: {message}")]
    Forbidden { message: String },

    /// An operation was invoked while no session is active.
    #[error("Not signed in")]
    NotAuthenticated,

    // ── Operation errors ─────────────────────────────────────────────
    /// The backend rejected a create/delete payload. The message is
    /// the backend's, verbatim; local state is unchanged.
    #[error("{message}")]
    ValidationFailed { message: String },

    /// The target resource vanished server-side. Display-wise this is
    /// a validation failure, but the caller has already scheduled a
    /// refresh so the stale row disappears.
    #[error("{message}")]
    NotFound { message: String },

    // ── Data errors ──────────────────────────────────────────────────
    /// The backend answered with something we could not parse. Failing
    /// closed: nothing malformed reaches the renderer.
    #[error("Unexpected response from backend: {message}")]
    MalformedResponse { message: String },

    // ── Internal ─────────────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<crate::session_store::StoreError> for CoreError {
    fn from(err: crate::session_store::StoreError) -> Self {
        Self::Internal(format!("session store failure: {err}"))
    }
}

impl From<rackview_api::Error> for CoreError {
    fn from(err: rackview_api::Error) -> Self {
        match err {
            rackview_api::Error::Authentication { message } => {
                Self::AuthenticationFailed { message }
            }
            rackview_api::Error::SessionInvalid => Self::SessionExpired,
            rackview_api::Error::Forbidden { message } => Self::Forbidden { message },
            rackview_api::Error::Validation { message } => Self::ValidationFailed { message },
            rackview_api::Error::NotFound { message } => Self::NotFound { message },
            rackview_api::Error::Backend { status, message } => Self::Internal(format!(
                "backend returned HTTP {status}: {message}"
            )),
            rackview_api::Error::Transport(e) => {
                if e.is_status() {
                    Self::Internal(format!("unexpected HTTP failure: {e}"))
                } else {
                    Self::Connectivity
                }
            }
            rackview_api::Error::Tls(_) => Self::Connectivity,
            rackview_api::Error::InvalidUrl(e) => Self::Internal(format!("invalid URL: {e}")),
            rackview_api::Error::Deserialization { message, .. } => {
                Self::MalformedResponse { message }
            }
        }
    }
}
