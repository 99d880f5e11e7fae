// ── Durable session persistence ──
//
// The controller owns the live Session; the store is a durable mirror
// that survives process restarts. Exactly three entries are persisted
// (token, username, role) and they live or die together: a partial
// record never loads as a valid session.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::model::{Role, Session};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session store I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("session store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Durable key-value persistence for the active session.
///
/// Implementations must guarantee that `clear()` removes every entry:
/// no stale credential may bleed into a later `load()`.
pub trait SessionStore: Send + Sync {
    /// Persist the session's three entries.
    fn save(&self, session: &Session) -> Result<(), StoreError>;

    /// Restore the session, or `None` when any entry is missing or
    /// empty. Does not validate the token -- the backend does that on
    /// first use.
    fn load(&self) -> Result<Option<Session>, StoreError>;

    /// Remove all entries.
    fn clear(&self) -> Result<(), StoreError>;
}

impl<S: SessionStore + ?Sized> SessionStore for std::sync::Arc<S> {
    fn save(&self, session: &Session) -> Result<(), StoreError> {
        (**self).save(session)
    }

    fn load(&self) -> Result<Option<Session>, StoreError> {
        (**self).load()
    }

    fn clear(&self) -> Result<(), StoreError> {
        (**self).clear()
    }
}

// ── On-disk layout ──────────────────────────────────────────────────

/// The three persisted entries, keyed by fixed names.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    auth_token: String,
    username: String,
    role: String,
}

// ── File-backed store ───────────────────────────────────────────────

/// Stores the session as a single JSON document in the platform data
/// directory, written atomically (write-then-rename) with owner-only
/// permissions on unix.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform default: `<data_dir>/rackview/session.json`.
    pub fn default_location() -> Result<Self, StoreError> {
        let dirs = directories::ProjectDirs::from("", "", "rackview").ok_or_else(|| {
            StoreError::Io(io::Error::other("could not determine platform data directory"))
        })?;
        Ok(Self::new(dirs.data_dir().join("session.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_atomic(&self, contents: &[u8]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp, fs::Permissions::from_mode(0o600))?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, session: &Session) -> Result<(), StoreError> {
        let persisted = PersistedSession {
            auth_token: session.token.expose_secret().to_owned(),
            username: session.username.clone(),
            role: session.role.as_str().to_owned(),
        };
        self.write_atomic(&serde_json::to_vec_pretty(&persisted)?)?;
        debug!(path = %self.path.display(), "session persisted");
        Ok(())
    }

    fn load(&self) -> Result<Option<Session>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        // A corrupt or truncated file is "no session", not a hard error.
        let persisted: PersistedSession = match serde_json::from_str(&contents) {
            Ok(p) => p,
            Err(e) => {
                warn!(error = %e, "session file unreadable -- treating as no session");
                return Ok(None);
            }
        };

        if persisted.auth_token.is_empty()
            || persisted.username.is_empty()
            || persisted.role.is_empty()
        {
            return Ok(None);
        }

        Ok(Some(Session {
            username: persisted.username,
            role: Role::parse(&persisted.role),
            token: SecretString::from(persisted.auth_token),
        }))
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// ── In-memory fake ──────────────────────────────────────────────────

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemorySessionStore {
    inner: std::sync::Mutex<Option<(String, String, String)>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, session: &Session) -> Result<(), StoreError> {
        *self.inner.lock().map_err(|_| poisoned())? = Some((
            session.token.expose_secret().to_owned(),
            session.username.clone(),
            session.role.as_str().to_owned(),
        ));
        Ok(())
    }

    fn load(&self) -> Result<Option<Session>, StoreError> {
        let guard = self.inner.lock().map_err(|_| poisoned())?;
        Ok(guard.as_ref().and_then(|(token, username, role)| {
            if token.is_empty() || username.is_empty() || role.is_empty() {
                return None;
            }
            Some(Session {
                username: username.clone(),
                role: Role::parse(role),
                token: SecretString::from(token.clone()),
            })
        }))
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.inner.lock().map_err(|_| poisoned())? = None;
        Ok(())
    }
}

fn poisoned() -> StoreError {
    StoreError::Io(io::Error::other("session store lock poisoned"))
}
