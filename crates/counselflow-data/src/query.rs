//! Select queries understood by every backend.

use serde::{Deserialize, Serialize};

use crate::resource::{OrderBy, Resource};

/// A single row filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Filter {
    /// `column = value`
    Eq { column: String, value: String },
    /// `column >= value`
    Gte { column: String, value: String },
    /// `column <= value`
    Lte { column: String, value: String },
}

impl Filter {
    pub fn eq(column: impl Into<String>, value: impl Into<String>) -> Self {
        Filter::Eq {
            column: column.into(),
            value: value.into(),
        }
    }

    pub fn gte(column: impl Into<String>, value: impl Into<String>) -> Self {
        Filter::Gte {
            column: column.into(),
            value: value.into(),
        }
    }

    pub fn lte(column: impl Into<String>, value: impl Into<String>) -> Self {
        Filter::Lte {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Column this filter applies to.
    pub fn column(&self) -> &str {
        match self {
            Filter::Eq { column, .. } | Filter::Gte { column, .. } | Filter::Lte { column, .. } => {
                column
            }
        }
    }

    /// Value this filter compares against.
    pub fn value(&self) -> &str {
        match self {
            Filter::Eq { value, .. } | Filter::Gte { value, .. } | Filter::Lte { value, .. } => {
                value
            }
        }
    }

    /// PostgREST operator token.
    pub fn operator(&self) -> &'static str {
        match self {
            Filter::Eq { .. } => "eq",
            Filter::Gte { .. } => "gte",
            Filter::Lte { .. } => "lte",
        }
    }
}

/// `SELECT <columns> FROM <table> WHERE <filters> ORDER BY <order> LIMIT <limit>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectQuery {
    /// Table name
    pub table: String,
    /// Column list in PostgREST select syntax (may embed relations)
    pub columns: String,
    /// Filters, all of which must hold
    pub filters: Vec<Filter>,
    /// Sort order
    pub order: Option<OrderBy>,
    /// Row limit
    pub limit: Option<u32>,
}

impl SelectQuery {
    /// Select every column of a table.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: "*".to_string(),
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    /// Build the base query for a resource descriptor.
    pub fn for_resource(resource: &Resource) -> Self {
        Self {
            table: resource.table.to_string(),
            columns: resource.columns.to_string(),
            filters: Vec::new(),
            order: resource.order,
            limit: None,
        }
    }

    pub fn with_columns(mut self, columns: impl Into<String>) -> Self {
        self.columns = columns.into();
        self
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn with_filters(mut self, filters: impl IntoIterator<Item = Filter>) -> Self {
        self.filters.extend(filters);
        self
    }

    pub fn with_order(mut self, order: OrderBy) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Encode as PostgREST query parameters (unencoded key/value pairs).
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("select".to_string(), compact_columns(&self.columns))];

        for filter in &self.filters {
            pairs.push((
                filter.column().to_string(),
                format!("{}.{}", filter.operator(), filter.value()),
            ));
        }

        if let Some(order) = &self.order {
            let direction = if order.ascending { "asc" } else { "desc" };
            pairs.push(("order".to_string(), format!("{}.{}", order.column, direction)));
        }

        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }

        pairs
    }

    /// Encode as a URL query string.
    pub fn to_query_string(&self) -> String {
        self.to_query_pairs()
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// PostgREST rejects whitespace inside select lists.
fn compact_columns(columns: &str) -> String {
    columns.chars().filter(|c| !c.is_whitespace()).collect()
}
