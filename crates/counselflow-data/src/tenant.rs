//! Tenant resolution.

use std::sync::Arc;

use crate::backend::{DataBackend, CURRENT_TENANT_RPC};
use crate::error::{BackendError, BackendResult};

/// Resolves the caller's tenant for every scoped read.
///
/// Either pinned to a fixed tenant (config or CLI) or asked of the backend
/// through the tenant RPC on every call. Nothing is cached.
#[derive(Clone)]
pub struct TenantResolver {
    backend: Arc<dyn DataBackend>,
    fixed: Option<String>,
}

impl TenantResolver {
    /// Resolve through the backend RPC.
    pub fn from_backend(backend: Arc<dyn DataBackend>) -> Self {
        Self {
            backend,
            fixed: None,
        }
    }

    /// Always answer with `tenant_id`.
    pub fn fixed(backend: Arc<dyn DataBackend>, tenant_id: impl Into<String>) -> Self {
        Self {
            backend,
            fixed: Some(tenant_id.into()),
        }
    }

    /// The pinned tenant, if any.
    pub fn fixed_tenant(&self) -> Option<&str> {
        self.fixed.as_deref()
    }

    /// Current tenant ID.
    pub async fn current_tenant_id(&self) -> BackendResult<String> {
        if let Some(tenant) = &self.fixed {
            return Ok(tenant.clone());
        }

        let value = self
            .backend
            .rpc(CURRENT_TENANT_RPC, serde_json::json!({}))
            .await
            .map_err(|e| BackendError::InvalidResponse(format!("Failed to get tenant ID: {}", e)))?;

        match value {
            serde_json::Value::String(tenant) if !tenant.is_empty() => Ok(tenant),
            other => Err(BackendError::InvalidResponse(format!(
                "Failed to get tenant ID: unexpected value {}",
                other
            ))),
        }
    }
}

impl std::fmt::Debug for TenantResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TenantResolver")
            .field("backend", &self.backend.id())
            .field("fixed", &self.fixed)
            .finish()
    }
}
