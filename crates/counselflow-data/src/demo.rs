//! Built-in sample data.
//!
//! The same disputes, risks, matters and deals the back-office screens show
//! when no hosted backend is configured. [`MockBackend::with_demo_data`]
//! serves them through the regular service path, so a demo run and a hosted
//! run differ only in where rows come from.

use crate::backend::{MockBackend, Row};
use crate::models::{Deal, Dispute, Matter, Risk};
use crate::resource::{Record, TENANT_COLUMN};

pub fn disputes() -> Vec<Dispute> {
    vec![
        Dispute {
            id: "DIS-2024-001".into(),
            title: "TechCorp vs. DataFlow - Patent Infringement".into(),
            dispute_type: "IP".into(),
            status: "Litigation".into(),
            priority: Some("High".into()),
            filed_date: Some("2024-02-15".into()),
            jurisdiction: "Federal - Northern District of California".into(),
            entity: "TechCorp Solutions Inc.".into(),
            description: "Patent infringement claim regarding data processing algorithms".into(),
            estimated_value: Some(2_500_000.0),
            ..Default::default()
        },
        Dispute {
            id: "DIS-2024-002".into(),
            title: "Employment Discrimination Claim - Johnson vs. Nexus".into(),
            dispute_type: "Employment".into(),
            status: "Mediation".into(),
            priority: Some("Medium".into()),
            filed_date: Some("2024-04-10".into()),
            jurisdiction: "State - California".into(),
            entity: "Nexus Global Inc.".into(),
            description: "Age discrimination and wrongful termination claim".into(),
            estimated_value: Some(450_000.0),
            ..Default::default()
        },
        Dispute {
            id: "DIS-2024-003".into(),
            title: "Regulatory Investigation - Data Privacy Violations".into(),
            dispute_type: "Regulatory".into(),
            status: "Investigation".into(),
            priority: Some("Critical".into()),
            filed_date: Some("2024-01-08".into()),
            jurisdiction: "State - California".into(),
            entity: "Nexus Global Inc.".into(),
            description: "State investigation into data handling practices and CCPA compliance".into(),
            estimated_value: Some(850_000.0),
            ..Default::default()
        },
        Dispute {
            id: "DIS-2024-004".into(),
            title: "Contract Dispute - Vendor Services Agreement".into(),
            dispute_type: "Contract".into(),
            status: "Arbitration".into(),
            priority: Some("Medium".into()),
            filed_date: Some("2024-03-22".into()),
            jurisdiction: "AAA Commercial Arbitration".into(),
            entity: "Nexus Global Inc.".into(),
            description: "Breach of service level commitments".into(),
            estimated_value: Some(320_000.0),
            ..Default::default()
        },
    ]
}

fn risk(
    id: &str,
    title: &str,
    category: &str,
    (probability, impact, overall_level): (&str, &str, &str),
    owner: &str,
    review_date: &str,
    (probability_score, impact_score, residual_risk): (u32, u32, f64),
) -> Risk {
    Risk {
        id: id.into(),
        title: title.into(),
        category: category.into(),
        probability: probability.into(),
        impact: impact.into(),
        overall_level: overall_level.into(),
        owner: owner.into(),
        status: "Open".into(),
        review_date: Some(review_date.into()),
        probability_score,
        impact_score,
        residual_risk,
        ..Default::default()
    }
}

pub fn risks() -> Vec<Risk> {
    vec![
        Risk {
            description: "Over-reliance on single cloud provider".into(),
            mitigation: "Negotiate multi-vendor agreements, develop contingency plans".into(),
            ..risk(
                "RSK-2024-012",
                "Major Vendor Dependency",
                "Contractual",
                ("High", "High", "Critical"),
                "Sarah Johnson",
                "2024-08-15",
                (8, 9, 72.0),
            )
        },
        Risk {
            description: "Potential non-compliance with EU data protection rules".into(),
            mitigation: "Implement privacy by design, conduct regular audits".into(),
            ..risk(
                "RSK-2024-007",
                "GDPR Compliance",
                "Regulatory",
                ("Medium", "High", "High"),
                "Michael Chen",
                "2024-07-30",
                (6, 8, 48.0),
            )
        },
        risk(
            "RSK-2024-019",
            "Class Action Exposure",
            "Litigation",
            ("Low", "Very High", "Medium"),
            "Lisa Park",
            "2024-09-01",
            (3, 10, 30.0),
        ),
        risk(
            "RSK-2024-004",
            "Patent Portfolio Gaps",
            "IP",
            ("Medium", "Medium", "Medium"),
            "Robert Kim",
            "2024-08-10",
            (5, 6, 30.0),
        ),
        risk(
            "RSK-2024-025",
            "Regulatory Change Impact",
            "Regulatory",
            ("High", "Medium", "High"),
            "Sarah Johnson",
            "2024-09-30",
            (7, 5, 35.0),
        ),
    ]
}

fn matter(
    id: &str,
    title: &str,
    matter_type: &str,
    lead_attorney: &str,
    (budget, actual_spend): (f64, f64),
    start_date: &str,
    risk_score: f64,
) -> Matter {
    Matter {
        id: id.into(),
        title: title.into(),
        client: "Nexus Global Inc.".into(),
        matter_type: matter_type.into(),
        lead_attorney: lead_attorney.into(),
        status: "Active".into(),
        budget,
        actual_spend,
        start_date: Some(start_date.into()),
        risk_score: Some(risk_score),
        created_at: Some(format!("{}T09:00:00Z", start_date)),
        ..Default::default()
    }
}

pub fn matters() -> Vec<Matter> {
    vec![
        Matter {
            client: "Nexus Technologies LLC".into(),
            target_close_date: Some("2024-12-15".into()),
            ..matter(
                "MAT-2024-008",
                "Patent Infringement Defense - TechPatent LLC",
                "IP",
                "Michael Chen",
                (450_000.0, 127_500.0),
                "2024-01-12",
                75.0,
            )
        },
        Matter {
            target_close_date: Some("2024-09-30".into()),
            ..matter(
                "MAT-2024-015",
                "M&A Transaction - Acquisition of DataFlow Systems",
                "M&A",
                "Sarah Johnson",
                (275_000.0, 89_200.0),
                "2024-03-01",
                60.0,
            )
        },
        matter(
            "MAT-2024-021",
            "Employment Dispute - Wrongful Termination",
            "Employment",
            "Lisa Park",
            (125_000.0, 34_750.0),
            "2024-04-15",
            45.0,
        ),
        matter(
            "MAT-2024-003",
            "Regulatory Investigation - Data Privacy",
            "Regulatory",
            "Robert Kim",
            (180_000.0, 67_300.0),
            "2024-01-08",
            80.0,
        ),
    ]
}

fn deal(id: &str, name: &str, status: &str, deal_size: f64, probability: f64, owner: &str) -> Deal {
    Deal {
        id: id.into(),
        name: name.into(),
        status: status.into(),
        deal_size,
        probability,
        owner: owner.into(),
        priority: "High".into(),
        ..Default::default()
    }
}

pub fn deals() -> Vec<Deal> {
    vec![
        Deal {
            sector: "Technology".into(),
            risk_level: "Low".into(),
            ..deal("DEAL-001", "TechCorp Acquisition", "Due Diligence", 12.4, 96.7, "Sarah Johnson")
        },
        Deal {
            sector: "Technology".into(),
            risk_level: "Low".into(),
            ..deal("DEAL-002", "StartupX Investment", "Negotiation", 8.7, 89.4, "Michael Chen")
        },
        Deal {
            sector: "Financial Services".into(),
            risk_level: "Very Low".into(),
            ..deal("DEAL-003", "FinancePartners JV", "Under Consideration", 15.8, 97.1, "Emily Davis")
        },
        Deal {
            sector: "Retail".into(),
            risk_level: "Medium".into(),
            priority: "Medium".into(),
            ..deal("DEAL-004", "RetailCo Asset Deal", "Sourced", 6.9, 82.8, "Robert Wilson")
        },
        Deal {
            sector: "Healthcare".into(),
            risk_level: "Low".into(),
            ..deal("DEAL-005", "MedDevice Carve-out", "Completed", 21.0, 100.0, "Sarah Johnson")
        },
    ]
}

/// Serialize records as rows stamped with `tenant_id`.
fn stamped<R: Record>(records: Vec<R>, tenant_id: &str) -> Vec<Row> {
    records
        .into_iter()
        .filter_map(|record| serde_json::to_value(record).ok())
        .map(|mut row| {
            if let Some(object) = row.as_object_mut() {
                object.insert(TENANT_COLUMN.to_string(), serde_json::Value::String(tenant_id.to_string()));
            }
            row
        })
        .collect()
}

impl MockBackend {
    /// Seed the sample disputes, risks, matters and deals for `tenant_id`,
    /// and answer the tenant RPC with it.
    pub fn with_demo_data(self, tenant_id: &str) -> Self {
        self.with_tenant(tenant_id)
            .with_rows(Dispute::RESOURCE.table, stamped(disputes(), tenant_id))
            .with_rows(Risk::RESOURCE.table, stamped(risks(), tenant_id))
            .with_rows(Matter::RESOURCE.table, stamped(matters(), tenant_id))
            .with_rows(Deal::RESOURCE.table, stamped(deals(), tenant_id))
    }
}
