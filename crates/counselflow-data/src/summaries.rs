//! Dashboard aggregates computed over fetched records.
//!
//! Pure functions of their input rows (and a caller-supplied `now` where time
//! matters), so the same numbers come out of hosted and demo data.

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::models::{parse_timestamp, Clause, Deal, DealStage, IpAsset, KnowledgeEntry, Matter, Risk, Template};

const RENEWAL_WINDOW_DAYS: i64 = 30;
const RECENT_ACTIVITY_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageCount {
    pub stage: DealStage,
    pub count: usize,
}

/// Deal pipeline headline figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DealPipelineSummary {
    pub total: usize,
    /// Deals not Completed or Dropped
    pub active: usize,
    /// Sum of `dealSize` over active deals, in millions
    pub active_value: f64,
    /// Mean probability over all deals, rounded; `None` without deals
    pub average_probability: Option<i64>,
    /// One entry per stage, in pipeline order
    pub by_stage: Vec<StageCount>,
}

impl DealPipelineSummary {
    pub fn from_deals(deals: &[Deal]) -> Self {
        let active: Vec<&Deal> = deals.iter().filter(|d| d.is_active()).collect();
        let average_probability = (!deals.is_empty()).then(|| {
            let sum: f64 = deals.iter().map(|d| d.probability).sum();
            (sum / deals.len() as f64).round() as i64
        });
        let by_stage = DealStage::ALL
            .into_iter()
            .map(|stage| StageCount {
                stage,
                count: deals.iter().filter(|d| d.stage() == Some(stage)).count(),
            })
            .collect();

        Self {
            total: deals.len(),
            active: active.len(),
            active_value: active.iter().map(|d| d.deal_size).sum(),
            average_probability,
            by_stage,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IpPortfolioSummary {
    pub total: usize,
    /// Patents with status `registered`
    pub active_patents: usize,
    /// Assets expiring before `now + 30 days`, lapsed ones included
    pub renewals_due: usize,
    pub estimated_value: f64,
}

impl IpPortfolioSummary {
    pub fn from_assets(assets: &[IpAsset], now: DateTime<Utc>) -> Self {
        let horizon = now + Duration::days(RENEWAL_WINDOW_DAYS);
        Self {
            total: assets.len(),
            active_patents: assets
                .iter()
                .filter(|a| a.asset_type == "Patent" && a.status == "registered")
                .count(),
            renewals_due: assets
                .iter()
                .filter(|a| a.expires_at().is_some_and(|expiry| expiry < horizon))
                .count(),
            estimated_value: assets.iter().filter_map(|a| a.estimated_value).sum(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KnowledgeSummary {
    pub total: usize,
    pub published: usize,
    /// Rounded share of published entries, 0 when empty
    pub published_percent: u32,
    pub authors: usize,
    /// Updated within the last 7 days
    pub recently_updated: usize,
}

impl KnowledgeSummary {
    pub fn from_entries(entries: &[KnowledgeEntry], now: DateTime<Utc>) -> Self {
        let published = entries.iter().filter(|e| e.status == "Published").count();
        let published_percent = if entries.is_empty() {
            0
        } else {
            ((published as f64 / entries.len() as f64) * 100.0).round() as u32
        };
        let authors: BTreeSet<&str> = entries.iter().map(|e| e.author.as_str()).collect();
        let week_ago = now - Duration::days(RECENT_ACTIVITY_DAYS);

        Self {
            total: entries.len(),
            published,
            published_percent,
            authors: authors.len(),
            recently_updated: entries
                .iter()
                .filter(|e| {
                    e.last_updated
                        .as_deref()
                        .and_then(parse_timestamp)
                        .is_some_and(|updated| updated > week_ago)
                })
                .count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClauseSummary {
    pub total: usize,
    pub high_risk: usize,
}

impl ClauseSummary {
    pub fn from_clauses(clauses: &[Clause]) -> Self {
        Self {
            total: clauses.len(),
            high_risk: clauses.iter().filter(|c| c.risk == "High").count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateSummary {
    pub total: usize,
    pub active: usize,
}

impl TemplateSummary {
    pub fn from_templates(templates: &[Template]) -> Self {
        Self {
            total: templates.len(),
            active: templates.iter().filter(|t| t.status == "Active").count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskSummary {
    pub total: usize,
    pub critical: usize,
    pub open: usize,
    /// Mean residual risk; `None` without risks
    pub average_residual: Option<f64>,
}

impl RiskSummary {
    pub fn from_risks(risks: &[Risk]) -> Self {
        let average_residual = (!risks.is_empty())
            .then(|| risks.iter().map(|r| r.residual_risk).sum::<f64>() / risks.len() as f64);
        Self {
            total: risks.len(),
            critical: risks.iter().filter(|r| r.overall_level == "Critical").count(),
            open: risks.iter().filter(|r| r.status == "Open").count(),
            average_residual,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatterSummary {
    pub total: usize,
    pub active: usize,
    pub total_budget: f64,
    pub actual_spend: f64,
    /// `actual_spend / total_budget`; `None` when nothing is budgeted
    pub budget_used: Option<f64>,
}

impl MatterSummary {
    pub fn from_matters(matters: &[Matter]) -> Self {
        let total_budget: f64 = matters.iter().map(|m| m.budget).sum();
        let actual_spend: f64 = matters.iter().map(|m| m.actual_spend).sum();
        Self {
            total: matters.len(),
            active: matters.iter().filter(|m| m.is_active()).count(),
            total_budget,
            actual_spend,
            budget_used: (total_budget > 0.0).then(|| actual_spend / total_budget),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn deal(status: &str, size: f64, probability: f64) -> Deal {
        Deal {
            status: status.into(),
            deal_size: size,
            probability,
            ..Default::default()
        }
    }

    #[test]
    fn test_pipeline_active_value() {
        let deals = vec![
            deal("Sourced", 10.0, 40.0),
            deal("Completed", 20.0, 100.0),
            deal("Due Diligence", 15.0, 65.0),
        ];
        let summary = DealPipelineSummary::from_deals(&deals);

        assert_eq!(summary.total, 3);
        assert_eq!(summary.active, 2);
        assert_eq!(summary.active_value, 25.0);
        // (40 + 100 + 65) / 3 = 68.33
        assert_eq!(summary.average_probability, Some(68));

        let counts: Vec<usize> = summary.by_stage.iter().map(|s| s.count).collect();
        assert_eq!(counts, vec![1, 0, 1, 0, 1, 0]);
        assert_eq!(summary.by_stage[0].stage, DealStage::Sourced);
    }

    #[test]
    fn test_pipeline_empty() {
        let summary = DealPipelineSummary::from_deals(&[]);
        assert_eq!(summary.active, 0);
        assert_eq!(summary.active_value, 0.0);
        assert_eq!(summary.average_probability, None);
    }

    #[test]
    fn test_ip_renewals_window() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let asset = |asset_type: &str, status: &str, expiry: Option<&str>, value: Option<f64>| IpAsset {
            asset_type: asset_type.into(),
            status: status.into(),
            expiry_date: expiry.map(String::from),
            estimated_value: value,
            ..Default::default()
        };
        let assets = vec![
            asset("Patent", "registered", Some("2024-06-20"), Some(100.0)),
            asset("Patent", "pending", Some("2025-01-01"), None),
            asset("Trademark", "registered", Some("2024-05-01"), Some(50.0)),
            asset("Patent", "registered", None, None),
        ];

        let summary = IpPortfolioSummary::from_assets(&assets, now);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.active_patents, 2);
        assert_eq!(summary.renewals_due, 2);
        assert_eq!(summary.estimated_value, 150.0);
    }

    #[test]
    fn test_knowledge_summary() {
        let now = Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap();
        let entry = |status: &str, author: &str, updated: &str| KnowledgeEntry {
            status: status.into(),
            author: author.into(),
            last_updated: Some(updated.into()),
            ..Default::default()
        };
        let entries = vec![
            entry("Published", "Sarah Johnson", "2024-06-09"),
            entry("Draft", "Sarah Johnson", "2024-05-01"),
            entry("Published", "Michael Chen", "2024-06-05T08:00:00Z"),
        ];

        let summary = KnowledgeSummary::from_entries(&entries, now);
        assert_eq!(summary.published, 2);
        assert_eq!(summary.published_percent, 67);
        assert_eq!(summary.authors, 2);
        assert_eq!(summary.recently_updated, 2);

        assert_eq!(KnowledgeSummary::from_entries(&[], now).published_percent, 0);
    }

    #[test]
    fn test_clause_template_counts() {
        let clauses = vec![
            Clause {
                risk: "High".into(),
                ..Default::default()
            },
            Clause {
                risk: "Low".into(),
                ..Default::default()
            },
        ];
        assert_eq!(ClauseSummary::from_clauses(&clauses).high_risk, 1);

        let templates = vec![Template {
            status: "Archived".into(),
            ..Default::default()
        }];
        assert_eq!(TemplateSummary::from_templates(&templates).active, 0);
    }

    #[test]
    fn test_risk_and_matter_summaries() {
        let risks = crate::demo::risks();
        let summary = RiskSummary::from_risks(&risks);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.critical, 1);
        assert_eq!(summary.open, 5);
        assert_eq!(summary.average_residual, Some(43.0));

        let matters = MatterSummary::from_matters(&crate::demo::matters());
        assert_eq!(matters.active, 4);
        assert_eq!(matters.total_budget, 1_030_000.0);
        assert_eq!(matters.actual_spend, 318_750.0);
        assert!(MatterSummary::from_matters(&[]).budget_used.is_none());
    }
}
