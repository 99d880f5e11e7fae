// Hand-crafted async HTTP client for the inventory backend.
//
// Base path: /api/
// Auth: Bearer token on everything except /login

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;
use url::Url;

use crate::Error;
use crate::transport::TransportConfig;
use crate::types::{Ack, AuditLogResponse, ErrorResponse, LoginResponse, ServerCreateRequest, ServerResponse};

/// Async client for the inventory backend's `/api` surface.
///
/// Holds no credential state of its own: the bearer token is passed
/// into each authenticated call by the owner of the session. A 401 on
/// a bearer call always surfaces as [`Error::SessionInvalid`], never
/// as a generic backend error.
pub struct InventoryClient {
    http: reqwest::Client,
    base_url: Url,
}

impl InventoryClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a backend root URL and transport config.
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Wrap an existing `reqwest::Client` (used by tests).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Build the base URL ending in `/api/` so relative joins work.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        if path.ends_with("/api") {
            url.set_path(&format!("{path}/"));
        } else {
            url.set_path(&format!("{path}/api/"));
        }
        Ok(url)
    }

    /// The backend root this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path (e.g. `"servers"`) onto the base URL.
    fn url(&self, path: &str) -> Result<Url, Error> {
        // base_url always ends with `/api/`, so joining `servers` works.
        Ok(self.base_url.join(path)?)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, path: &str, token: &SecretString) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let resp = self
            .http
            .get(url)
            .bearer_auth(token.expose_secret())
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        token: &SecretString,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("POST {url}");

        let resp = self
            .http
            .post(url)
            .bearer_auth(token.expose_secret())
            .json(body)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &SecretString,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("DELETE {url}");

        let resp = self
            .http
            .delete(url)
            .bearer_auth(token.expose_secret())
            .send()
            .await?;
        self.handle_response(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Self::parse_success(body)
        } else {
            Err(Self::classify_error(status, resp, true).await)
        }
    }

    /// Parse a success body, failing closed with a truncated preview.
    fn parse_success<T: DeserializeOwned>(body: String) -> Result<T, Error> {
        serde_json::from_str(&body).map_err(|e| {
            // char-based truncation; a byte index could split a
            // multibyte character and panic
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    }

    /// Map a non-success response to the error taxonomy.
    ///
    /// `bearer` distinguishes 401 semantics: on authenticated calls it
    /// means the session died; on `/login` it means bad credentials.
    async fn classify_error(status: StatusCode, resp: reqwest::Response, bearer: bool) -> Error {
        if bearer && status == StatusCode::UNAUTHORIZED {
            return Error::SessionInvalid;
        }

        let raw = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&raw)
            .ok()
            .and_then(|e| e.error)
            .unwrap_or_else(|| {
                if raw.is_empty() {
                    status.to_string()
                } else {
                    raw.chars().take(200).collect()
                }
            });

        match status {
            StatusCode::UNAUTHORIZED => Error::Authentication { message },
            StatusCode::FORBIDDEN => Error::Forbidden { message },
            StatusCode::BAD_REQUEST => Error::Validation { message },
            StatusCode::NOT_FOUND => Error::NotFound { message },
            _ => Error::Backend {
                status: status.as_u16(),
                message,
            },
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    // ── Authentication ───────────────────────────────────────────────

    /// Exchange credentials for a bearer token.
    ///
    /// A 401 here is [`Error::Authentication`] carrying the backend's
    /// message -- never [`Error::SessionInvalid`], since no session
    /// exists yet.
    pub async fn login(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<LoginResponse, Error> {
        let url = self.url("login")?;
        debug!("POST {url}");

        let body = json!({
            "username": username,
            "password": password.expose_secret(),
        });

        let resp = self.http.post(url).json(&body).send().await?;
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Self::parse_success(body)
        } else {
            Err(Self::classify_error(status, resp, false).await)
        }
    }

    // ── Servers ──────────────────────────────────────────────────────

    /// Fetch the full server inventory, in backend order.
    pub async fn list_servers(&self, token: &SecretString) -> Result<Vec<ServerResponse>, Error> {
        self.get("servers", token).await
    }

    /// Submit a new server record.
    pub async fn create_server(
        &self,
        token: &SecretString,
        body: &ServerCreateRequest,
    ) -> Result<Ack, Error> {
        self.post("servers", token, body).await
    }

    /// Delete a server by id.
    pub async fn delete_server(&self, token: &SecretString, id: i64) -> Result<Ack, Error> {
        self.delete(&format!("servers/{id}"), token).await
    }

    // ── Audit logs ───────────────────────────────────────────────────

    /// Fetch the audit log snapshot (newest first, backend-capped).
    ///
    /// Callers are expected to gate this on the session's permissions;
    /// the backend enforces it regardless (403 for non-admins).
    pub async fn list_logs(&self, token: &SecretString) -> Result<Vec<AuditLogResponse>, Error> {
        self.get("logs", token).await
    }
}
