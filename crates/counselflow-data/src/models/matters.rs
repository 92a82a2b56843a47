//! Matter records.

use serde::{Deserialize, Serialize};

use crate::resource::{OrderBy, Record, Resource};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// A legal matter handled in-house or by outside counsel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(default)]
pub struct Matter {
    pub id: String,
    pub tenant_id: Option<String>,
    pub title: String,
    pub client: String,
    pub matter_type: String,
    pub lead_attorney: String,
    pub status: String,
    pub budget: f64,
    pub actual_spend: f64,
    pub start_date: Option<String>,
    pub target_close_date: Option<String>,
    /// 0-100
    pub risk_score: Option<f64>,
    pub description: String,
    pub created_at: Option<String>,
}

impl Matter {
    pub fn is_active(&self) -> bool {
        self.status == "Active"
    }
}

impl Record for Matter {
    const RESOURCE: Resource = Resource::scoped("matters", "matters", OrderBy::desc("created_at"));
}
