//! Configuration for the rackview CLI.
//!
//! TOML config file + `RACKVIEW_*` environment overrides, resolved
//! through figment, and translation of the result into the transport
//! settings the api client consumes. Flag-level overrides happen in
//! the CLI crate; this crate only knows about file and environment.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use rackview_api::{TlsMode, TransportConfig};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no backend URL configured (set `backend` in {path} or RACKVIEW_BACKEND)")]
    NoBackend { path: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Backend root URL (e.g., "http://inventory.internal:5000").
    pub backend: Option<String>,

    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    /// Skip TLS certificate verification.
    #[serde(default)]
    pub insecure: bool,

    /// Path to a custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            insecure: false,
            ca_cert: None,
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}

// ── Paths ───────────────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("", "", "rackview").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("rackview");
    p
}

// ── Loading ─────────────────────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_from(&config_path())
}

/// Load from an explicit file path, still applying env overrides.
pub fn load_from(path: &std::path::Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("RACKVIEW_").split("_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning defaults if the file doesn't exist or fails
/// to parse.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Translation to transport settings ───────────────────────────────

impl Config {
    /// The backend URL, validated. `override_url` (a CLI flag) wins
    /// over the configured value.
    pub fn resolve_backend(&self, override_url: Option<&str>) -> Result<url::Url, ConfigError> {
        let raw = override_url
            .map(str::to_owned)
            .or_else(|| self.backend.clone())
            .ok_or_else(|| ConfigError::NoBackend {
                path: config_path().display().to_string(),
            })?;
        raw.parse().map_err(|_| ConfigError::Validation {
            field: "backend".into(),
            reason: format!("invalid URL: {raw}"),
        })
    }

    /// Transport settings for the api client. `insecure` (a CLI flag)
    /// is OR-ed with the configured value.
    pub fn transport(&self, insecure: bool, timeout_override: Option<u64>) -> TransportConfig {
        let tls = if insecure || self.defaults.insecure {
            TlsMode::DangerAcceptInvalid
        } else if let Some(ref ca_path) = self.defaults.ca_cert {
            TlsMode::CustomCa(ca_path.clone())
        } else {
            TlsMode::System
        };
        TransportConfig {
            tls,
            timeout: Duration::from_secs(timeout_override.unwrap_or(self.defaults.timeout)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_from(&dir.path().join("nope.toml")).unwrap();
        assert!(cfg.backend.is_none());
        assert_eq!(cfg.defaults.output, "table");
        assert_eq!(cfg.defaults.timeout, 30);
    }

    #[test]
    fn toml_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "backend = \"http://inventory.internal:5000\"\n\n[defaults]\ntimeout = 5\n",
        )
        .unwrap();

        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg.backend.as_deref(), Some("http://inventory.internal:5000"));
        assert_eq!(cfg.defaults.timeout, 5);
        assert_eq!(cfg.defaults.output, "table");
    }

    #[test]
    fn flag_override_beats_configured_backend() {
        let cfg = Config {
            backend: Some("http://configured:5000".into()),
            defaults: Defaults::default(),
        };
        let url = cfg.resolve_backend(Some("http://flagged:5000")).unwrap();
        assert_eq!(url.as_str(), "http://flagged:5000/");
    }

    #[test]
    fn no_backend_anywhere_is_an_error() {
        let cfg = Config::default();
        assert!(matches!(
            cfg.resolve_backend(None),
            Err(ConfigError::NoBackend { .. })
        ));
    }

    #[test]
    fn insecure_flag_forces_danger_tls() {
        let cfg = Config::default();
        let transport = cfg.transport(true, Some(10));
        assert!(matches!(transport.tls, TlsMode::DangerAcceptInvalid));
        assert_eq!(transport.timeout, Duration::from_secs(10));
    }
}
