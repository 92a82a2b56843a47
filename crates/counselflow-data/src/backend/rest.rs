//! PostgREST-compatible hosted backend.
//!
//! Works with any PostgREST deployment, including:
//! - Supabase projects (`/rest/v1`, `/auth/v1`)
//! - Self-hosted PostgREST behind the same path layout

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::traits::*;
use crate::config::BackendConfig;
use crate::error::{BackendError, BackendResult};
use crate::query::SelectQuery;

/// HTTP client for a PostgREST-compatible hosted backend.
///
/// # Example
///
/// ```rust,no_run
/// use counselflow_data::{BackendConfig, DataBackend, RestBackend, SelectQuery};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let backend = RestBackend::new(BackendConfig::new("https://xyz.supabase.co", "anon-key"))?;
/// let rows = backend.select(&SelectQuery::new("deals")).await?;
/// # Ok(())
/// # }
/// ```
pub struct RestBackend {
    config: BackendConfig,
    client: Client,
}

/// PostgREST error body.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    msg: Option<String>,
    error_description: Option<String>,
}

/// Auth user body; only the ID is read.
#[derive(Debug, Deserialize)]
struct AuthUser {
    id: String,
}

impl RestBackend {
    /// Create a new backend client.
    pub fn new(config: BackendConfig) -> BackendResult<Self> {
        config.validate()?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            "apikey",
            header::HeaderValue::from_str(&config.anon_key)
                .map_err(|e| BackendError::Config(format!("invalid anon key: {}", e)))?,
        );
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", config.bearer()))
                .map_err(|e| BackendError::Config(format!("invalid bearer token: {}", e)))?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    /// Connection settings.
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.config.rest_url(), urlencoding::encode(table))
    }

    fn rpc_url(&self, function: &str) -> String {
        format!("{}/rpc/{}", self.config.rest_url(), urlencoding::encode(function))
    }

    /// Turn a non-success response into a `Server` error.
    async fn error_from(response: reqwest::Response) -> BackendError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|b| b.message.or(b.msg).or(b.error_description))
            .unwrap_or(body);

        BackendError::Server { status, message }
    }
}

/// Total from a `Content-Range` header (`0-24/3573` or `*/0`).
pub(crate) fn parse_content_range_total(value: &str) -> Option<u64> {
    value.rsplit_once('/')?.1.trim().parse().ok()
}

#[async_trait]
impl DataBackend for RestBackend {
    fn id(&self) -> &str {
        self.config.base_url()
    }

    async fn select(&self, query: &SelectQuery) -> BackendResult<Option<Vec<Row>>> {
        debug!(table = %query.table, filters = query.filters.len(), "select");

        let response = self
            .client
            .get(self.table_url(&query.table))
            .query(&query.to_query_pairs())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        Ok(serde_json::from_str::<Option<Vec<Row>>>(&body)?)
    }

    async fn count(&self, query: &SelectQuery) -> BackendResult<u64> {
        debug!(table = %query.table, "count");

        let pairs: Vec<(String, String)> = query
            .to_query_pairs()
            .into_iter()
            .filter(|(k, _)| k != "order" && k != "limit")
            .collect();

        let response = self
            .client
            .head(self.table_url(&query.table))
            .header("Prefer", "count=exact")
            .query(&pairs)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let range = response
            .headers()
            .get(header::CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| BackendError::InvalidResponse("missing Content-Range header".into()))?;

        parse_content_range_total(range).ok_or_else(|| {
            BackendError::InvalidResponse(format!("unparseable Content-Range: {}", range))
        })
    }

    async fn insert(&self, table: &str, row: Row) -> BackendResult<Row> {
        debug!(table = %table, "insert");

        let response = self
            .client
            .post(self.table_url(table))
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let rows: Vec<Row> = response.json().await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| BackendError::InvalidResponse(format!("insert into {} returned no rows", table)))
    }

    async fn rpc(&self, function: &str, args: serde_json::Value) -> BackendResult<serde_json::Value> {
        debug!(function = %function, "rpc");

        let response = self
            .client
            .post(self.rpc_url(function))
            .json(&args)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        Ok(response.json().await?)
    }

    async fn current_user_id(&self) -> BackendResult<Option<String>> {
        if self.config.access_token.is_none() {
            return Ok(None);
        }

        let response = self
            .client
            .get(format!("{}/user", self.config.auth_url()))
            .send()
            .await?;

        if matches!(response.status(), StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let user: AuthUser = response.json().await?;
        Ok(Some(user.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_range_total() {
        assert_eq!(parse_content_range_total("0-24/3573"), Some(3573));
        assert_eq!(parse_content_range_total("*/0"), Some(0));
        assert_eq!(parse_content_range_total("0-24/*"), None);
        assert_eq!(parse_content_range_total("garbage"), None);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let result = RestBackend::new(BackendConfig::new("", "anon"));
        assert!(matches!(result, Err(BackendError::MissingEnv(_))));
    }

    #[test]
    fn test_urls() {
        let backend = RestBackend::new(BackendConfig::new("https://x.supabase.co/", "anon")).unwrap();
        assert_eq!(backend.id(), "https://x.supabase.co");
        assert_eq!(backend.table_url("deals"), "https://x.supabase.co/rest/v1/deals");
        assert_eq!(
            backend.rpc_url(CURRENT_TENANT_RPC),
            "https://x.supabase.co/rest/v1/rpc/get_current_tenant_id"
        );
    }
}
