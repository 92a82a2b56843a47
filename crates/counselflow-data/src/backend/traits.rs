//! Core trait for data backends.
//!
//! This module defines the `DataBackend` trait - the primary abstraction
//! over the hosted relational store.

use async_trait::async_trait;

use crate::error::BackendResult;
use crate::query::SelectQuery;

/// One untyped row as returned by the backend.
pub type Row = serde_json::Value;

/// RPC that returns the caller's tenant ID.
pub const CURRENT_TENANT_RPC: &str = "get_current_tenant_id";

/// Core trait for data backends.
///
/// Every method performs exactly one round trip. Implementations do not
/// retry and do not cache.
#[async_trait]
pub trait DataBackend: Send + Sync {
    /// Backend identifier (for logging).
    fn id(&self) -> &str;

    /// Run a select.
    ///
    /// `Ok(None)` means the backend answered without a row set (a null
    /// body); callers normalize it to an empty list.
    async fn select(&self, query: &SelectQuery) -> BackendResult<Option<Vec<Row>>>;

    /// Count the rows a select would return, ignoring order and limit.
    async fn count(&self, query: &SelectQuery) -> BackendResult<u64>;

    /// Insert one row and return it as stored.
    async fn insert(&self, table: &str, row: Row) -> BackendResult<Row>;

    /// Call a stored procedure.
    async fn rpc(&self, function: &str, args: serde_json::Value) -> BackendResult<serde_json::Value>;

    /// ID of the signed-in user, if any.
    async fn current_user_id(&self) -> BackendResult<Option<String>>;
}
