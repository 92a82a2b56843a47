//! Dispute records.

use serde::{Deserialize, Serialize};

use crate::resource::{OrderBy, Record, Resource};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// A dispute row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(default)]
pub struct Dispute {
    pub id: String,
    pub tenant_id: Option<String>,
    pub title: String,
    #[serde(rename = "type")]
    pub dispute_type: String,
    pub status: String,
    pub priority: Option<String>,
    pub filed_date: Option<String>,
    pub jurisdiction: String,
    /// Name of the entity party to the dispute
    pub entity: String,
    pub description: String,
    pub estimated_value: Option<f64>,
    #[serde(rename = "lastUpdated")]
    pub last_updated: Option<String>,
}

impl Record for Dispute {
    const RESOURCE: Resource = Resource::scoped("disputes", "disputes", OrderBy::desc("filed_date"));
}
