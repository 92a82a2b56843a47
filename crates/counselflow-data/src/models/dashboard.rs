//! Dashboard stat cards.

use serde::{Deserialize, Serialize};

use crate::resource::{OrderBy, Record, Resource};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Direction of a stat's change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// Accent color of a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum StatColor {
    Blue,
    Green,
    Red,
    Purple,
}

/// A card value is either a count or preformatted text ("87%", "N/A").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(untagged)]
pub enum StatValue {
    Count(u64),
    Text(String),
}

impl std::fmt::Display for StatValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatValue::Count(n) => write!(f, "{}", n),
            StatValue::Text(s) => f.write_str(s),
        }
    }
}

/// One dashboard card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct DashboardStat {
    pub label: String,
    pub value: StatValue,
    /// Period-over-period change, e.g. "+12%"
    pub change: String,
    pub trend: Trend,
    pub color: StatColor,
}

impl DashboardStat {
    pub fn new(
        label: impl Into<String>,
        value: StatValue,
        change: impl Into<String>,
        trend: Trend,
        color: StatColor,
    ) -> Self {
        Self {
            label: label.into(),
            value,
            change: change.into(),
            trend,
            color,
        }
    }
}

/// Tenant compliance score row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(default)]
pub struct ComplianceScore {
    pub tenant_id: Option<String>,
    pub score: Option<f64>,
    pub updated_at: Option<String>,
}

impl ComplianceScore {
    /// Card text: `"<score>%"`, or `"N/A"` when no usable score exists.
    pub fn display(score: Option<&ComplianceScore>) -> String {
        match score.and_then(|s| s.score) {
            Some(value) if value > 0.0 && value.is_finite() => format!("{}%", value),
            _ => "N/A".to_string(),
        }
    }
}

impl Record for ComplianceScore {
    const RESOURCE: Resource =
        Resource::scoped("compliance", "compliance score", OrderBy::desc("updated_at"))
            .with_columns("score")
            .unordered();
}
