//! Policy library records.

use serde::{Deserialize, Serialize};

use crate::resource::{OrderBy, Record, Resource};

#[cfg(feature = "typescript")]
use ts_rs::TS;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(default)]
pub struct Policy {
    pub id: String,
    pub tenant_id: Option<String>,
    pub title: String,
    pub category: String,
    pub status: String,
    pub owner: String,
    pub version: Option<String>,
    pub effective_date: Option<String>,
    pub review_date: Option<String>,
    pub updated_at: Option<String>,
}

// Policies are read in backend order.
impl Record for Policy {
    const RESOURCE: Resource =
        Resource::scoped("policies", "policies", OrderBy::desc("updated_at")).unordered();
}
