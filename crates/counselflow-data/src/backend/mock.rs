//! In-memory backend for tests and demo mode.

use async_trait::async_trait;
use dashmap::{DashMap, DashSet};
use std::cmp::Ordering as CmpOrdering;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;

use super::traits::*;
use crate::error::{BackendError, BackendResult};
use crate::query::{Filter, SelectQuery};

/// Mock backend for testing.
///
/// Holds tables as JSON rows and answers selects with the same filter and
/// ordering semantics as the hosted backend. Failures and null responses
/// can be injected per table.
pub struct MockBackend {
    backend_id: String,
    tables: DashMap<String, Vec<Row>>,
    failures: DashMap<String, String>,
    null_tables: DashSet<String>,
    tenant_id: Option<String>,
    user_id: Option<String>,
    rpc_failure: Option<String>,
    available: AtomicBool,
    call_count: AtomicU32,
    last_query: Mutex<Option<SelectQuery>>,
}

impl MockBackend {
    /// Create a new, empty mock backend.
    pub fn new(backend_id: impl Into<String>) -> Self {
        Self {
            backend_id: backend_id.into(),
            tables: DashMap::new(),
            failures: DashMap::new(),
            null_tables: DashSet::new(),
            tenant_id: None,
            user_id: None,
            rpc_failure: None,
            available: AtomicBool::new(true),
            call_count: AtomicU32::new(0),
            last_query: Mutex::new(None),
        }
    }

    /// Tenant returned by the tenant RPC.
    pub fn with_tenant(mut self, tenant_id: impl Into<String>) -> Self {
        self.tenant_id = Some(tenant_id.into());
        self
    }

    /// Signed-in user.
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Seed a table.
    pub fn with_rows(self, table: impl Into<String>, rows: Vec<Row>) -> Self {
        self.tables.entry(table.into()).or_default().extend(rows);
        self
    }

    /// Make every call touching `table` fail with `message`.
    pub fn with_failure(self, table: impl Into<String>, message: impl Into<String>) -> Self {
        self.failures.insert(table.into(), message.into());
        self
    }

    /// Make selects on `table` answer with a null body.
    pub fn with_null_response(self, table: impl Into<String>) -> Self {
        self.null_tables.insert(table.into());
        self
    }

    /// Make every RPC fail with `message`.
    pub fn with_rpc_failure(mut self, message: impl Into<String>) -> Self {
        self.rpc_failure = Some(message.into());
        self
    }

    /// Set availability.
    pub fn with_available(self, available: bool) -> Self {
        self.available.store(available, Ordering::SeqCst);
        self
    }

    /// Append rows to a table after construction.
    pub fn insert_rows(&self, table: &str, rows: Vec<Row>) {
        self.tables.entry(table.to_string()).or_default().extend(rows);
    }

    /// Snapshot of a table.
    pub fn rows(&self, table: &str) -> Vec<Row> {
        self.tables.get(table).map(|t| t.clone()).unwrap_or_default()
    }

    /// Clear an injected failure.
    pub fn clear_failure(&self, table: &str) {
        self.failures.remove(table);
    }

    /// Number of backend calls made so far.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Reset the call count.
    pub fn reset_call_count(&self) {
        self.call_count.store(0, Ordering::SeqCst);
    }

    /// The most recent select or count query.
    pub fn last_query(&self) -> Option<SelectQuery> {
        self.last_query.lock().ok().and_then(|q| q.clone())
    }

    fn begin(&self, table: Option<&str>) -> BackendResult<()> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if !self.available.load(Ordering::SeqCst) {
            return Err(BackendError::Unavailable("Mock backend disabled".to_string()));
        }
        if let Some(message) = table.and_then(|t| self.failures.get(t)) {
            return Err(BackendError::Server {
                status: 500,
                message: message.clone(),
            });
        }
        Ok(())
    }

    fn record_query(&self, query: &SelectQuery) {
        if let Ok(mut last) = self.last_query.lock() {
            *last = Some(query.clone());
        }
    }

    fn matching_rows(&self, query: &SelectQuery) -> Vec<Row> {
        self.rows(&query.table)
            .into_iter()
            .filter(|row| query.filters.iter().all(|f| matches_filter(row, f)))
            .collect()
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new("mock-backend")
    }
}

/// Compare a JSON cell to a filter operand, numerically when both are numbers.
fn compare_cell(cell: &serde_json::Value, operand: &str) -> Option<CmpOrdering> {
    match cell {
        serde_json::Value::Null => None,
        serde_json::Value::Number(n) => {
            let left = n.as_f64()?;
            let right: f64 = operand.parse().ok()?;
            left.partial_cmp(&right)
        }
        serde_json::Value::String(s) => Some(s.as_str().cmp(operand)),
        serde_json::Value::Bool(b) => Some(b.to_string().as_str().cmp(operand)),
        _ => None,
    }
}

fn matches_filter(row: &Row, filter: &Filter) -> bool {
    let cell = row.get(filter.column()).unwrap_or(&serde_json::Value::Null);
    let ordering = compare_cell(cell, filter.value());
    match filter {
        Filter::Eq { .. } => ordering == Some(CmpOrdering::Equal),
        Filter::Gte { .. } => matches!(ordering, Some(CmpOrdering::Greater | CmpOrdering::Equal)),
        Filter::Lte { .. } => matches!(ordering, Some(CmpOrdering::Less | CmpOrdering::Equal)),
    }
}

/// Order two cells; nulls sort last.
fn compare_cells(a: &serde_json::Value, b: &serde_json::Value) -> CmpOrdering {
    use serde_json::Value;
    match (a, b) {
        (Value::Null, Value::Null) => CmpOrdering::Equal,
        (Value::Null, _) => CmpOrdering::Greater,
        (_, Value::Null) => CmpOrdering::Less,
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(CmpOrdering::Equal),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => a.to_string().cmp(&b.to_string()),
    }
}

#[async_trait]
impl DataBackend for MockBackend {
    fn id(&self) -> &str {
        &self.backend_id
    }

    async fn select(&self, query: &SelectQuery) -> BackendResult<Option<Vec<Row>>> {
        self.begin(Some(&query.table))?;
        self.record_query(query);

        if self.null_tables.contains(&query.table) {
            return Ok(None);
        }

        let mut rows = self.matching_rows(query);

        if let Some(order) = &query.order {
            let null = serde_json::Value::Null;
            rows.sort_by(|a, b| {
                let left = a.get(order.column).unwrap_or(&null);
                let right = b.get(order.column).unwrap_or(&null);
                let ordering = compare_cells(left, right);
                if order.ascending {
                    ordering
                } else {
                    ordering.reverse()
                }
            });
        }

        if let Some(limit) = query.limit {
            rows.truncate(limit as usize);
        }

        Ok(Some(rows))
    }

    async fn count(&self, query: &SelectQuery) -> BackendResult<u64> {
        self.begin(Some(&query.table))?;
        self.record_query(query);
        Ok(self.matching_rows(query).len() as u64)
    }

    async fn insert(&self, table: &str, mut row: Row) -> BackendResult<Row> {
        self.begin(Some(table))?;

        let object = row
            .as_object_mut()
            .ok_or_else(|| BackendError::InvalidResponse("insert expects a JSON object".into()))?;
        object
            .entry("id")
            .or_insert_with(|| serde_json::Value::String(uuid::Uuid::new_v4().to_string()));
        object
            .entry("created_at")
            .or_insert_with(|| serde_json::Value::String(chrono::Utc::now().to_rfc3339()));

        self.tables.entry(table.to_string()).or_default().push(row.clone());
        Ok(row)
    }

    async fn rpc(&self, function: &str, _args: serde_json::Value) -> BackendResult<serde_json::Value> {
        self.begin(None)?;

        if let Some(message) = &self.rpc_failure {
            return Err(BackendError::Server {
                status: 500,
                message: message.clone(),
            });
        }

        match function {
            CURRENT_TENANT_RPC => match &self.tenant_id {
                Some(tenant) => Ok(serde_json::Value::String(tenant.clone())),
                None => Err(BackendError::Server {
                    status: 400,
                    message: "no tenant for current user".to_string(),
                }),
            },
            other => Err(BackendError::Server {
                status: 404,
                message: format!("function {} not found", other),
            }),
        }
    }

    async fn current_user_id(&self) -> BackendResult<Option<String>> {
        Ok(self.user_id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::OrderBy;
    use serde_json::json;

    fn deals() -> MockBackend {
        MockBackend::new("test").with_rows(
            "deals",
            vec![
                json!({"id": "d1", "tenant_id": "t1", "dealSize": 10, "created_at": "2024-01-01"}),
                json!({"id": "d2", "tenant_id": "t2", "dealSize": 20, "created_at": "2024-02-01"}),
                json!({"id": "d3", "tenant_id": "t1", "dealSize": 15, "created_at": "2024-03-01"}),
            ],
        )
    }

    #[tokio::test]
    async fn test_select_filters_and_orders() {
        let backend = deals();
        let query = SelectQuery::new("deals")
            .with_filter(Filter::eq("tenant_id", "t1"))
            .with_order(OrderBy::desc("created_at"));

        let rows = backend.select(&query).await.unwrap().unwrap();
        let ids: Vec<_> = rows.iter().map(|r| r["id"].as_str().unwrap()).collect();
        assert_eq!(ids, vec!["d3", "d1"]);
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn test_numeric_range_filter_and_limit() {
        let backend = deals();
        let query = SelectQuery::new("deals")
            .with_filter(Filter::gte("dealSize", "12"))
            .with_order(OrderBy::asc("dealSize"))
            .with_limit(1);

        let rows = backend.select(&query).await.unwrap().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["id"], "d3");
    }

    #[tokio::test]
    async fn test_count_ignores_limit() {
        let backend = deals();
        let query = SelectQuery::new("deals").with_filter(Filter::eq("tenant_id", "t1")).with_limit(1);
        assert_eq!(backend.count(&query).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_unknown_table_is_empty_not_null() {
        let backend = MockBackend::default();
        let rows = backend.select(&SelectQuery::new("nothing")).await.unwrap();
        assert_eq!(rows, Some(vec![]));
    }

    #[tokio::test]
    async fn test_null_response_and_failure_injection() {
        let backend = deals()
            .with_null_response("deals")
            .with_failure("contracts", "permission denied");

        assert_eq!(backend.select(&SelectQuery::new("deals")).await.unwrap(), None);

        let err = backend.select(&SelectQuery::new("contracts")).await.unwrap_err();
        assert!(err.to_string().contains("permission denied"));

        backend.clear_failure("contracts");
        assert!(backend.select(&SelectQuery::new("contracts")).await.is_ok());
    }

    #[tokio::test]
    async fn test_insert_assigns_id() {
        let backend = MockBackend::default();
        let row = backend.insert("contracts", json!({"title": "NDA"})).await.unwrap();
        assert!(row["id"].is_string());
        assert!(row["created_at"].is_string());
        assert_eq!(backend.rows("contracts").len(), 1);
    }

    #[tokio::test]
    async fn test_tenant_rpc() {
        let backend = MockBackend::default().with_tenant("t1");
        assert_eq!(backend.rpc(CURRENT_TENANT_RPC, json!({})).await.unwrap(), json!("t1"));
        assert!(backend.rpc("other", json!({})).await.is_err());

        let tenantless = MockBackend::default();
        assert!(tenantless.rpc(CURRENT_TENANT_RPC, json!({})).await.is_err());
    }

    #[tokio::test]
    async fn test_unavailable() {
        let backend = MockBackend::default().with_available(false);
        let result = backend.select(&SelectQuery::new("deals")).await;
        assert!(matches!(result, Err(BackendError::Unavailable(_))));
    }
}
