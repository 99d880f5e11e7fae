// ── Dashboard controller ──
//
// Single-owner state machine driving the session lifecycle and the
// data snapshots. All network I/O goes through the api client; all
// persistence goes through the session store. Presentation layers
// consume the snapshots via the pure view renderer and never talk to
// the backend themselves.

use secrecy::SecretString;
use tracing::{debug, info, warn};

use rackview_api::{InventoryClient, ServerCreateRequest};

use crate::error::CoreError;
use crate::model::{AuditLogEntry, Role, ServerRecord, Session};
use crate::policy::{permissions_for, PermissionSet};
use crate::session_store::SessionStore;

/// Where the client is in the session lifecycle.
///
/// Exactly one state at a time. `Authenticating` exists so renderers
/// can disable the login affordance while a login round trip is in
/// flight.
#[derive(Debug)]
pub enum SessionState {
    Unauthenticated,
    Authenticating,
    Authenticated(Session),
}

/// Explicit confirmation token for destructive operations.
///
/// The caller (a prompt, a `--yes` flag) decides; the controller only
/// honors the decision. `Declined` short-circuits before any network
/// call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

/// User-entered fields for a new server record.
///
/// Every field is optional at this layer; [`DashboardController::create_server`]
/// trims whitespace and drops fields that trim to empty, so the
/// backend sees only meaningful values and does its own required-field
/// validation.
#[derive(Debug, Clone, Default)]
pub struct ServerDraft {
    pub hostname: Option<String>,
    pub os_type: Option<String>,
    pub os_version: Option<String>,
    pub server_type: Option<String>,
    pub private_ip: Option<String>,
    pub public_ip: Option<String>,
    pub primary_owner: Option<String>,
    pub secondary_owner: Option<String>,
    pub datacenter: Option<String>,
    pub environment: Option<String>,
}

fn normalize(field: Option<String>) -> Option<String> {
    field
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

impl ServerDraft {
    fn into_request(self) -> ServerCreateRequest {
        ServerCreateRequest {
            hostname: normalize(self.hostname),
            os_type: normalize(self.os_type),
            os_version: normalize(self.os_version),
            server_type: normalize(self.server_type),
            private_ip: normalize(self.private_ip),
            public_ip: normalize(self.public_ip),
            primary_owner: normalize(self.primary_owner),
            secondary_owner: normalize(self.secondary_owner),
            datacenter: normalize(self.datacenter),
            environment: normalize(self.environment),
        }
    }
}

/// Session lifecycle and snapshot owner.
pub struct DashboardController {
    client: InventoryClient,
    store: Box<dyn SessionStore>,
    state: SessionState,
    servers: Vec<ServerRecord>,
    logs: Vec<AuditLogEntry>,
    /// Bumped on logout/expiry. Captured before every await and
    /// re-checked after, so a completion from a dead session can never
    /// touch the snapshots.
    epoch: u64,
}

impl DashboardController {
    /// Build the controller and restore any persisted session.
    ///
    /// The restored token is trusted until the backend rejects it; no
    /// validation round trip happens here.
    pub fn new(
        client: InventoryClient,
        store: Box<dyn SessionStore>,
    ) -> Result<Self, CoreError> {
        let state = match store.load()? {
            Some(session) => {
                info!(username = %session.username, role = %session.role, "session restored");
                SessionState::Authenticated(session)
            }
            None => SessionState::Unauthenticated,
        };
        Ok(Self {
            client,
            store,
            state,
            servers: Vec::new(),
            logs: Vec::new(),
            epoch: 0,
        })
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.state {
            SessionState::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }

    /// Permission set for the active session; least-privileged when no
    /// session is active.
    pub fn permissions(&self) -> PermissionSet {
        self.session()
            .map_or(PermissionSet::READ_ONLY, |s| permissions_for(s.role))
    }

    pub fn servers(&self) -> &[ServerRecord] {
        &self.servers
    }

    pub fn logs(&self) -> &[AuditLogEntry] {
        &self.logs
    }

    // ── Session lifecycle ────────────────────────────────────────────

    /// Authenticate against the backend and persist the session.
    ///
    /// On success the snapshots are refreshed immediately (logs only
    /// when the role permits). On failure the state returns to
    /// `Unauthenticated` and nothing is persisted.
    pub async fn login(
        &mut self,
        username: &str,
        password: &SecretString,
    ) -> Result<(), CoreError> {
        self.state = SessionState::Authenticating;
        let epoch = self.epoch;

        let response = match self.client.login(username, password).await {
            Ok(r) => r,
            Err(e) => {
                self.state = SessionState::Unauthenticated;
                return Err(e.into());
            }
        };

        if self.epoch != epoch {
            debug!("login completion discarded, session epoch moved on");
            return Ok(());
        }

        let session = Session {
            username: response.username,
            role: Role::parse(&response.role),
            token: SecretString::from(response.access_token),
        };
        info!(username = %session.username, role = %session.role, "signed in");

        self.store.save(&session)?;
        self.state = SessionState::Authenticated(session);

        self.refresh_servers().await?;
        self.refresh_logs().await?;
        Ok(())
    }

    /// Drop the session locally. Purely client-side; the backend holds
    /// no session state to invalidate.
    pub fn logout(&mut self) -> Result<(), CoreError> {
        if let Some(session) = self.session() {
            info!(username = %session.username, "signed out");
        }
        self.expire()
    }

    /// Wipe all session traces: store, snapshots, state. Used by
    /// `logout` and whenever the backend rejects the bearer token.
    fn expire(&mut self) -> Result<(), CoreError> {
        self.epoch += 1;
        self.state = SessionState::Unauthenticated;
        self.servers.clear();
        self.logs.clear();
        self.store.clear()?;
        Ok(())
    }

    /// Map an api error to a core error, expiring the session when the
    /// backend rejected the bearer token.
    fn fail(&mut self, err: rackview_api::Error) -> CoreError {
        if err.is_session_invalid() {
            warn!("backend rejected the session token, clearing session");
            if let Err(store_err) = self.expire() {
                warn!(error = %store_err, "failed to clear persisted session");
            }
        }
        err.into()
    }

    fn token(&self) -> Result<SecretString, CoreError> {
        self.session()
            .map(|s| s.token.clone())
            .ok_or(CoreError::NotAuthenticated)
    }

    // ── Data operations ──────────────────────────────────────────────

    /// Replace the server snapshot with a fresh fetch.
    pub async fn refresh_servers(&mut self) -> Result<(), CoreError> {
        let token = self.token()?;
        let epoch = self.epoch;

        let raw = match self.client.list_servers(&token).await {
            Ok(r) => r,
            Err(e) => return Err(self.fail(e)),
        };
        if self.epoch != epoch {
            debug!("server refresh discarded, session epoch moved on");
            return Ok(());
        }

        self.servers = raw.into_iter().map(ServerRecord::from).collect();
        debug!(count = self.servers.len(), "server snapshot refreshed");
        Ok(())
    }

    /// Replace the audit-log snapshot with a fresh fetch.
    ///
    /// A no-op for roles without log access: the backend would answer
    /// 403, so the call is never made and the snapshot stays empty.
    pub async fn refresh_logs(&mut self) -> Result<(), CoreError> {
        let token = self.token()?;
        if !self.permissions().can_view_logs {
            return Ok(());
        }
        let epoch = self.epoch;

        let raw = match self.client.list_logs(&token).await {
            Ok(r) => r,
            Err(e) => return Err(self.fail(e)),
        };
        if self.epoch != epoch {
            debug!("log refresh discarded, session epoch moved on");
            return Ok(());
        }

        self.logs = raw.into_iter().map(AuditLogEntry::from).collect();
        debug!(count = self.logs.len(), "log snapshot refreshed");
        Ok(())
    }

    /// Submit a new server record and refresh the server snapshot on
    /// success. Validation failures surface the backend's message
    /// verbatim and leave local state untouched.
    pub async fn create_server(&mut self, draft: ServerDraft) -> Result<i64, CoreError> {
        let token = self.token()?;

        let ack = match self.client.create_server(&token, &draft.into_request()).await {
            Ok(a) => a,
            Err(e) => return Err(self.fail(e)),
        };
        info!(id = ?ack.id, "server record created");

        self.refresh_servers().await?;
        Ok(ack.id.unwrap_or_default())
    }

    /// Delete a server record after explicit confirmation.
    ///
    /// `Declined` returns immediately without touching the network.
    /// Success refreshes both snapshots, since the deletion itself is
    /// audited. A not-found failure still refreshes the server
    /// snapshot so a stale row disappears, then surfaces the error.
    pub async fn delete_server(
        &mut self,
        id: i64,
        confirmation: Confirmation,
    ) -> Result<(), CoreError> {
        if confirmation == Confirmation::Declined {
            debug!(id, "delete declined by user");
            return Ok(());
        }
        let token = self.token()?;

        match self.client.delete_server(&token, id).await {
            Ok(_) => {
                info!(id, "server record deleted");
                self.refresh_servers().await?;
                self.refresh_logs().await?;
                Ok(())
            }
            Err(e) if e.is_not_found() => {
                let err = self.fail(e);
                self.refresh_servers().await?;
                Err(err)
            }
            Err(e) => Err(self.fail(e)),
        }
    }
}
