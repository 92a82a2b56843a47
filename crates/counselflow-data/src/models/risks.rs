//! Risk register records.

use serde::{Deserialize, Serialize};

use crate::resource::{OrderBy, Record, Resource};

#[cfg(feature = "typescript")]
use ts_rs::TS;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(default)]
pub struct Risk {
    pub id: String,
    pub tenant_id: Option<String>,
    pub title: String,
    pub category: String,
    pub probability: String,
    pub impact: String,
    /// "Critical", "High", "Medium" or "Low"
    pub overall_level: String,
    pub description: String,
    pub mitigation: String,
    pub owner: String,
    pub status: String,
    pub review_date: Option<String>,
    pub probability_score: u32,
    pub impact_score: u32,
    pub residual_risk: f64,
    pub created_at: Option<String>,
}

impl Record for Risk {
    const RESOURCE: Resource = Resource::scoped("risks", "risks", OrderBy::desc("created_at"));
}
