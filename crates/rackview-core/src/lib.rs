//! Core logic for the rackview inventory dashboard.
//!
//! This crate owns everything between the HTTP client and the
//! presentation layer:
//!
//! - [`DashboardController`] — session lifecycle state machine and
//!   owner of the server/log snapshots.
//! - [`SessionStore`] — durable session persistence, with a
//!   file-backed production implementation and an in-memory fake.
//! - [`policy`] — pure role to permission-set mapping.
//! - [`view`] — pure projection of snapshots into display-ready view
//!   models.
//! - [`model`] — canonical domain types; wire payloads convert into
//!   these at the crate boundary.
//!
//! Presentation layers hold a controller, drive its operations, and
//! render [`view::DashboardView`]. They never talk to the backend or
//! inspect roles directly.

pub mod controller;
pub mod convert;
pub mod error;
pub mod model;
pub mod policy;
pub mod session_store;
pub mod view;

pub use controller::{Confirmation, DashboardController, ServerDraft, SessionState};
pub use error::CoreError;
pub use model::{AuditLogEntry, Environment, Role, ServerRecord, ServerType, Session};
pub use policy::{permissions_for, PermissionSet};
pub use session_store::{FileSessionStore, MemorySessionStore, SessionStore, StoreError};
pub use view::{DashboardView, LogRow, RowAction, ServerRow, Tone};
