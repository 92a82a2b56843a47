//! Dealflow records.

use serde::{Deserialize, Serialize};

use crate::resource::{OrderBy, Record, Resource};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Pipeline stage of a deal, in pipeline order.
///
/// Stored as free text server-side; unknown labels map to `None` in
/// [`DealStage::from_label`] and are left out of stage counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub enum DealStage {
    Sourced,
    #[serde(rename = "Under Consideration")]
    UnderConsideration,
    #[serde(rename = "Due Diligence")]
    DueDiligence,
    Negotiation,
    Completed,
    Dropped,
}

impl DealStage {
    /// All stages in pipeline order.
    pub const ALL: [DealStage; 6] = [
        DealStage::Sourced,
        DealStage::UnderConsideration,
        DealStage::DueDiligence,
        DealStage::Negotiation,
        DealStage::Completed,
        DealStage::Dropped,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DealStage::Sourced => "Sourced",
            DealStage::UnderConsideration => "Under Consideration",
            DealStage::DueDiligence => "Due Diligence",
            DealStage::Negotiation => "Negotiation",
            DealStage::Completed => "Completed",
            DealStage::Dropped => "Dropped",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    /// Closed stages are out of the live pipeline.
    pub fn is_closed(&self) -> bool {
        matches!(self, DealStage::Completed | DealStage::Dropped)
    }
}

/// A deal in the private equity pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(default)]
pub struct Deal {
    pub id: String,
    pub tenant_id: Option<String>,
    pub name: String,
    pub status: String,
    pub priority: String,
    pub sector: String,
    /// Deal size in millions
    #[serde(rename = "dealSize")]
    pub deal_size: f64,
    pub geography: String,
    pub timeline: String,
    /// Close probability, 0-100
    pub probability: f64,
    #[serde(rename = "riskLevel")]
    pub risk_level: String,
    pub owner: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Deal {
    pub fn stage(&self) -> Option<DealStage> {
        DealStage::from_label(&self.status)
    }

    /// Live in the pipeline: anything not Completed or Dropped.
    pub fn is_active(&self) -> bool {
        self.status != DealStage::Completed.label() && self.status != DealStage::Dropped.label()
    }
}

impl Record for Deal {
    const RESOURCE: Resource = Resource::scoped("deals", "deals", OrderBy::desc("created_at"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_labels_round_trip() {
        for stage in DealStage::ALL {
            assert_eq!(DealStage::from_label(stage.label()), Some(stage));
        }
        assert_eq!(DealStage::from_label("Closed Won"), None);
    }

    #[test]
    fn test_unknown_status_counts_as_active() {
        let deal = Deal {
            status: "On Hold".into(),
            ..Default::default()
        };
        assert!(deal.is_active());
        assert!(deal.stage().is_none());
    }

    #[test]
    fn test_deal_columns() {
        let deal: Deal =
            serde_json::from_value(serde_json::json!({"status": "Sourced", "dealSize": 10})).unwrap();
        assert_eq!(deal.deal_size, 10.0);
        assert_eq!(deal.stage(), Some(DealStage::Sourced));
    }
}
