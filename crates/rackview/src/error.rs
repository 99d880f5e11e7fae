//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable
//! help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use rackview_core::CoreError;

/// Exit codes per the CLI contract.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const PERMISSION: i32 = 5;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to the backend")]
    #[diagnostic(
        code(rackview::connection_failed),
        help(
            "Check that the backend is running and reachable.\n\
             Override the URL with --backend (-b) or RACKVIEW_BACKEND."
        )
    )]
    Connection,

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(rackview::auth_failed),
        help("Verify your username and password, then run: rackview login")
    )]
    AuthFailed { message: String },

    #[error("Session expired")]
    #[diagnostic(
        code(rackview::session_expired),
        help("Your saved session was rejected by the backend. Run: rackview login")
    )]
    SessionExpired,

    #[error("Not signed in")]
    #[diagnostic(code(rackview::not_signed_in), help("Run: rackview login"))]
    NotSignedIn,

    // ── Authorization ────────────────────────────────────────────────
    #[error("Permission denied: {message}")]
    #[diagnostic(
        code(rackview::permission_denied),
        help("This operation requires the admin role.")
    )]
    PermissionDenied { message: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(
        code(rackview::not_found),
        help("Run: rackview servers list to see current ids")
    )]
    NotFound { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(code(rackview::validation))]
    Validation { message: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(code(rackview::config))]
    Config(#[from] rackview_config::ConfigError),

    // ── Backend / internal ───────────────────────────────────────────
    #[error("Backend error: {message}")]
    #[diagnostic(code(rackview::backend))]
    Backend { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Connection => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::SessionExpired | Self::NotSignedIn => exit_code::AUTH,
            Self::PermissionDenied { .. } => exit_code::PERMISSION,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::Config(_) => exit_code::USAGE,
            Self::Backend { .. } | Self::Io(_) => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Connectivity => Self::Connection,
            CoreError::AuthenticationFailed { message } => Self::AuthFailed { message },
            CoreError::SessionExpired => Self::SessionExpired,
            CoreError::NotAuthenticated => Self::NotSignedIn,
            CoreError::Forbidden { message } => Self::PermissionDenied { message },
            CoreError::NotFound { message } => Self::NotFound { message },
            CoreError::ValidationFailed { message } => Self::Validation { message },
            CoreError::MalformedResponse { message } | CoreError::Internal(message) => {
                Self::Backend { message }
            }
        }
    }
}

impl From<rackview_core::StoreError> for CliError {
    fn from(err: rackview_core::StoreError) -> Self {
        Self::Backend {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_stable() {
        assert_eq!(CliError::Connection.exit_code(), 7);
        assert_eq!(CliError::SessionExpired.exit_code(), 3);
        assert_eq!(CliError::NotSignedIn.exit_code(), 3);
        assert_eq!(
            CliError::PermissionDenied {
                message: "Admin access required".into()
            }
            .exit_code(),
            5
        );
        assert_eq!(
            CliError::NotFound {
                message: "Server not found".into()
            }
            .exit_code(),
            4
        );
        assert_eq!(
            CliError::Validation {
                message: "Missing required field: hostname".into()
            }
            .exit_code(),
            2
        );
    }

    #[test]
    fn core_errors_map_to_the_documented_variants() {
        assert!(matches!(
            CliError::from(CoreError::Connectivity),
            CliError::Connection
        ));
        assert!(matches!(
            CliError::from(CoreError::SessionExpired),
            CliError::SessionExpired
        ));
        assert!(matches!(
            CliError::from(CoreError::Forbidden {
                message: "Admin access required".into()
            }),
            CliError::PermissionDenied { .. }
        ));
    }
}
