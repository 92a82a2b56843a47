//! Configuration for the hosted backend connection.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{BackendError, BackendResult};

/// Project URL of the hosted backend
pub const URL_ENV: &str = "SUPABASE_URL";
/// Anonymous (publishable) API key
pub const ANON_KEY_ENV: &str = "SUPABASE_ANON_KEY";
/// Optional user access token; sent as bearer instead of the anon key
pub const ACCESS_TOKEN_ENV: &str = "SUPABASE_ACCESS_TOKEN";
/// Optional fixed tenant; skips the tenant RPC when set
pub const TENANT_ENV: &str = "COUNSELFLOW_TENANT_ID";
/// Optional request timeout in seconds
pub const TIMEOUT_ENV: &str = "COUNSELFLOW_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Connection settings for the hosted backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Project URL (e.g., "https://xyz.supabase.co")
    pub url: String,
    /// Anonymous API key
    pub anon_key: String,
    /// User access token, if signed in
    #[serde(default)]
    pub access_token: Option<String>,
    /// Fixed tenant ID
    #[serde(default)]
    pub tenant_id: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl BackendConfig {
    /// Create a config from the two required values.
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
            access_token: None,
            tenant_id: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load from process environment.
    ///
    /// Fails with [`BackendError::MissingEnv`] when `SUPABASE_URL` or
    /// `SUPABASE_ANON_KEY` is absent or empty.
    pub fn from_env() -> BackendResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> BackendResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let url = get(URL_ENV).ok_or(BackendError::MissingEnv(URL_ENV))?;
        let anon_key = get(ANON_KEY_ENV).ok_or(BackendError::MissingEnv(ANON_KEY_ENV))?;

        let timeout_secs = match get(TIMEOUT_ENV) {
            Some(raw) => raw.trim().parse().map_err(|_| {
                BackendError::Config(format!("{} must be a whole number, got {:?}", TIMEOUT_ENV, raw))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let config = Self {
            url,
            anon_key,
            access_token: get(ACCESS_TOKEN_ENV),
            tenant_id: get(TENANT_ENV),
            timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load config from YAML text.
    pub fn from_yaml(yaml: &str) -> BackendResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a YAML file.
    pub fn load(path: &Path) -> BackendResult<Self> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| BackendError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&yaml)
    }

    /// Set a fixed tenant.
    pub fn with_tenant(mut self, tenant_id: impl Into<String>) -> Self {
        self.tenant_id = Some(tenant_id.into());
        self
    }

    /// Set the user access token.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Check that required values are usable.
    pub fn validate(&self) -> BackendResult<()> {
        if self.url.trim().is_empty() {
            return Err(BackendError::MissingEnv(URL_ENV));
        }
        if self.anon_key.trim().is_empty() {
            return Err(BackendError::MissingEnv(ANON_KEY_ENV));
        }
        let parsed = url::Url::parse(&self.url)
            .map_err(|e| BackendError::Config(format!("invalid backend URL {:?}: {}", self.url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(BackendError::Config(format!(
                "backend URL must be http(s), got {:?}",
                parsed.scheme()
            )));
        }
        Ok(())
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// PostgREST root.
    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.base_url())
    }

    /// Auth service root.
    pub fn auth_url(&self) -> String {
        format!("{}/auth/v1", self.base_url())
    }

    /// Bearer credential: the user token when present, else the anon key.
    pub fn bearer(&self) -> &str {
        self.access_token.as_deref().unwrap_or(&self.anon_key)
    }
}
