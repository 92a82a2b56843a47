//! Resource descriptors.
//!
//! Every entity table is described once here instead of being spelled out in
//! a hand-written service method. The [`ResourceFetcher`](crate::ResourceFetcher)
//! turns a descriptor into a tenant-scoped select.

use serde::{de::DeserializeOwned, Serialize};

/// Sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub column: &'static str,
    pub ascending: bool,
}

impl OrderBy {
    pub const fn asc(column: &'static str) -> Self {
        Self {
            column,
            ascending: true,
        }
    }

    pub const fn desc(column: &'static str) -> Self {
        Self {
            column,
            ascending: false,
        }
    }
}

/// Static description of one readable table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    /// Hosted table name
    pub table: &'static str,
    /// Select list (PostgREST syntax)
    pub columns: &'static str,
    /// Default ordering
    pub order: Option<OrderBy>,
    /// Whether reads are filtered by `tenant_id`
    pub tenant_scoped: bool,
    /// Human label used in operation names ("Get <label>")
    pub label: &'static str,
}

impl Resource {
    /// Tenant-scoped `SELECT *` with the given ordering.
    pub const fn scoped(table: &'static str, label: &'static str, order: OrderBy) -> Self {
        Self {
            table,
            columns: "*",
            order: Some(order),
            tenant_scoped: true,
            label,
        }
    }

    /// Replace the select list.
    pub const fn with_columns(mut self, columns: &'static str) -> Self {
        self.columns = columns;
        self
    }

    /// Drop the default ordering.
    pub const fn unordered(mut self) -> Self {
        self.order = None;
        self
    }

    /// Operation label for reads, e.g. "Get contracts".
    pub fn read_operation(&self) -> String {
        format!("Get {}", self.label)
    }
}

/// A typed row of a hosted table.
///
/// Implement this for a serde record to make it fetchable through the
/// generic [`ResourceFetcher`](crate::ResourceFetcher).
pub trait Record: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Table descriptor
    const RESOURCE: Resource;
}

/// Column stamped with the tenant on every row.
pub const TENANT_COLUMN: &str = "tenant_id";
