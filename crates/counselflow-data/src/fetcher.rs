//! Generic tenant-scoped reads and writes.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error};

use crate::backend::DataBackend;
use crate::error::{BackendError, BackendResult, Result, ServiceError};
use crate::models::decode_row;
use crate::query::{Filter, SelectQuery};
use crate::resource::{Record, TENANT_COLUMN};
use crate::tenant::TenantResolver;

/// Turns a [`Record`]'s table descriptor into a backend read.
///
/// Every entity service delegates here. A read resolves the tenant, issues
/// one filtered and ordered select, treats a `null` result as no rows and
/// decodes each row into the record type. Any failure along the way is
/// logged and surfaced as a [`ServiceError`] carrying the operation label.
#[derive(Clone)]
pub struct ResourceFetcher {
    backend: Arc<dyn DataBackend>,
    tenant: TenantResolver,
}

impl ResourceFetcher {
    /// Fetcher resolving the tenant through the backend.
    pub fn new(backend: Arc<dyn DataBackend>) -> Self {
        let tenant = TenantResolver::from_backend(backend.clone());
        Self { backend, tenant }
    }

    /// Fetcher with an explicit tenant resolver.
    pub fn with_tenant_resolver(backend: Arc<dyn DataBackend>, tenant: TenantResolver) -> Self {
        Self { backend, tenant }
    }

    pub fn backend(&self) -> &Arc<dyn DataBackend> {
        &self.backend
    }

    pub fn tenant(&self) -> &TenantResolver {
        &self.tenant
    }

    /// All rows of `R` in the current tenant, in the descriptor's order.
    pub async fn fetch_all<R: Record>(&self) -> Result<Vec<R>> {
        self.fetch_filtered(Vec::new()).await
    }

    /// Like [`fetch_all`](Self::fetch_all) with extra filters ANDed in.
    pub async fn fetch_filtered<R: Record>(&self, filters: Vec<Filter>) -> Result<Vec<R>> {
        let operation = R::RESOURCE.read_operation();
        self.read_rows::<R>(filters, None)
            .await
            .map_err(|e| fail(&operation, e))
    }

    /// Insert `input` into `R`'s table, stamped with the tenant and creator.
    pub async fn create<R, I>(&self, operation: &str, input: &I) -> Result<R>
    where
        R: Record,
        I: Serialize + Sync,
    {
        self.insert_stamped::<R, I>(input)
            .await
            .map_err(|e| fail(operation, e))
    }

    /// Number of `R` rows in the current tenant.
    pub async fn count<R: Record>(&self, operation: &str) -> Result<u64> {
        self.count_rows::<R>().await.map_err(|e| fail(operation, e))
    }

    /// Scoped select returning backend errors unwrapped.
    pub(crate) async fn read_rows<R: Record>(
        &self,
        filters: Vec<Filter>,
        limit: Option<u32>,
    ) -> BackendResult<Vec<R>> {
        let mut query = self.scoped_query::<R>().await?.with_filters(filters);
        if let Some(limit) = limit {
            query = query.with_limit(limit);
        }

        let rows = self.backend.select(&query).await?.unwrap_or_default();
        debug!(table = %query.table, rows = rows.len(), "fetched");

        rows.into_iter()
            .map(|row| decode_row(row).map_err(BackendError::from))
            .collect()
    }

    pub(crate) async fn count_rows<R: Record>(&self) -> BackendResult<u64> {
        let query = self.scoped_query::<R>().await?;
        self.backend.count(&query).await
    }

    async fn scoped_query<R: Record>(&self) -> BackendResult<SelectQuery> {
        let resource = R::RESOURCE;
        let query = SelectQuery::for_resource(&resource);
        if !resource.tenant_scoped {
            return Ok(query);
        }
        let tenant = self.tenant.current_tenant_id().await?;
        Ok(query.with_filter(Filter::eq(TENANT_COLUMN, tenant)))
    }

    async fn insert_stamped<R, I>(&self, input: &I) -> BackendResult<R>
    where
        R: Record,
        I: Serialize + Sync,
    {
        let tenant = self.tenant.current_tenant_id().await?;
        let user = self.backend.current_user_id().await?;

        let mut row = serde_json::to_value(input)?;
        let object = row
            .as_object_mut()
            .ok_or_else(|| BackendError::InvalidResponse("input must serialize to an object".into()))?;
        object.insert(TENANT_COLUMN.to_string(), serde_json::Value::String(tenant));
        object.insert(
            "created_by".to_string(),
            user.map(serde_json::Value::String)
                .unwrap_or(serde_json::Value::Null),
        );

        let created = self.backend.insert(R::RESOURCE.table, row).await?;
        Ok(decode_row(created)?)
    }
}

impl std::fmt::Debug for ResourceFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceFetcher")
            .field("backend", &self.backend.id())
            .field("tenant", &self.tenant)
            .finish()
    }
}

/// Log a failed operation and flatten it into the service error.
pub(crate) fn fail(operation: &str, err: impl std::fmt::Display) -> ServiceError {
    let message = err.to_string();
    error!(operation = %operation, error = %message, "operation failed");
    ServiceError::new(operation, message)
}
