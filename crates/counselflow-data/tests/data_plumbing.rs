//! Services, handles and dashboard stats against the in-memory backend.

use std::sync::Arc;

use counselflow_data::models::{NewContract, StatValue};
use counselflow_data::summaries::DealPipelineSummary;
use counselflow_data::{DataBackend, MockBackend, ResourceFetcher, ResourceState, Services};
use serde_json::json;

const TABLES: &[&str] = &[
    "contracts",
    "disputes",
    "ip_assets",
    "entities",
    "people",
    "board_packs",
    "board_meetings",
    "calendar_events",
    "deals",
    "knowledge_entries",
    "trending_topics",
    "search_suggestions",
    "knowledge_insights",
    "clauses",
    "templates",
    "matters",
    "risks",
    "policies",
];

fn services(backend: MockBackend) -> (Arc<MockBackend>, Services) {
    let backend = Arc::new(backend);
    let services = Services::new(ResourceFetcher::new(backend.clone() as Arc<dyn DataBackend>));
    (backend, services)
}

/// Run every read once, reporting `(operation, Ok(row count) | Err(message))`.
async fn read_everything(services: &Services) -> Vec<(&'static str, Result<usize, String>)> {
    fn outcome<T>(r: counselflow_data::error::Result<Vec<T>>) -> Result<usize, String> {
        r.map(|rows| rows.len()).map_err(|e| e.to_string())
    }

    vec![
        ("Get contracts", outcome(services.contracts.get_contracts().await)),
        ("Get disputes", outcome(services.disputes.get_disputes().await)),
        ("Get IP assets", outcome(services.ip_assets.get_ip_assets().await)),
        ("Get entities", outcome(services.entities.get_entities().await)),
        ("Get entities", outcome(services.company_secretarial.get_entities().await)),
        ("Get people", outcome(services.company_secretarial.get_people().await)),
        ("Get board packs", outcome(services.board_packs.get_board_packs().await)),
        ("Get board meetings", outcome(services.board_packs.get_board_meetings().await)),
        (
            "Get calendar events",
            outcome(
                services
                    .calendar_events
                    .get_calendar_events("2024-01-01", "2024-12-31")
                    .await,
            ),
        ),
        ("Get deals", outcome(services.dealflow.get_deals().await)),
        ("Get knowledge entries", outcome(services.knowledge.get_knowledge_entries().await)),
        ("Get trending topics", outcome(services.knowledge.get_trending_topics().await)),
        ("Get search suggestions", outcome(services.knowledge.get_search_suggestions().await)),
        ("Get knowledge insights", outcome(services.knowledge.get_knowledge_insights().await)),
        ("Get clauses", outcome(services.clauses.get_clauses().await)),
        ("Get templates", outcome(services.templates.get_templates().await)),
        ("Get matters", outcome(services.matters.get_matters().await)),
        ("Get risks", outcome(services.risks.get_risks().await)),
        ("Get policies", outcome(services.policies.get_policies().await)),
    ]
}

#[tokio::test]
async fn test_empty_tables_yield_empty_lists() {
    let (_, services) = services(MockBackend::default().with_tenant("t1"));
    for (operation, result) in read_everything(&services).await {
        assert_eq!(result, Ok(0), "{} should return []", operation);
    }
}

#[tokio::test]
async fn test_null_responses_yield_empty_lists() {
    let backend = TABLES
        .iter()
        .fold(MockBackend::default().with_tenant("t1"), |b, t| b.with_null_response(*t));
    let (_, services) = services(backend);
    for (operation, result) in read_everything(&services).await {
        assert_eq!(result, Ok(0), "{} should map null to []", operation);
    }
}

#[tokio::test]
async fn test_null_columns_and_unknown_labels_decode() {
    // One row per table with every column the records read set to null,
    // plus labels no enum lists.
    let row = json!({
        "id": "r1",
        "tenant_id": "t1",
        "title": null,
        "name": null,
        "status": null,
        "type": "picnic",
        "description": null,
        "date": "2024-06-01",
        "created_at": null,
        "lastUpdated": null,
        "dealSize": null,
        "probability": null,
        "budget": null,
        "actual_spend": null,
        "risk_score": null,
        "probability_score": null,
        "impact_score": null,
        "residual_risk": null,
        "estimated_value": null,
        "views": null,
        "mentions": null,
        "files": null,
        "attendeeCount": null,
        "isVirtual": null,
        "entity": null,
        "counterparty": null,
        "value": null
    });
    let backend = TABLES.iter().fold(MockBackend::default().with_tenant("t1"), |b, t| {
        let mut row = row.clone();
        if *t == "calendar_events" {
            row["status"] = json!("postponed");
        }
        b.with_rows(*t, vec![row])
    });
    let (_, services) = services(backend);

    for (operation, result) in read_everything(&services).await {
        assert_eq!(result, Ok(1), "{} should decode a row with null columns", operation);
    }

    let deals = services.dealflow.get_deals().await.unwrap();
    assert_eq!(deals[0].deal_size, 0.0);
    assert!(deals[0].is_active());
}

#[tokio::test]
async fn test_backend_errors_name_the_operation() {
    let backend = TABLES
        .iter()
        .fold(MockBackend::default().with_tenant("t1"), |b, t| {
            b.with_failure(*t, "permission denied for table")
        });
    let (_, services) = services(backend);

    for (operation, result) in read_everything(&services).await {
        let message = result.expect_err(operation);
        assert!(
            message.starts_with(&format!("{} failed: ", operation)),
            "unexpected message: {}",
            message
        );
        assert!(message.contains("permission denied for table"));
    }
}

#[tokio::test]
async fn test_tenant_isolation() {
    let (_, services) = services(
        MockBackend::default()
            .with_tenant("t1")
            .with_rows("matters", vec![json!({"id": "m1", "tenant_id": "t1"})])
            .with_rows("matters", vec![json!({"id": "m2", "tenant_id": "t2"})]),
    );
    let matters = services.matters.get_matters().await.unwrap();
    assert_eq!(matters.len(), 1);
    assert_eq!(matters[0].id, "m1");
}

#[tokio::test]
async fn test_calendar_range_is_inclusive_and_ascending() {
    let (backend, services) = services(MockBackend::default().with_tenant("t1").with_rows(
        "calendar_events",
        vec![
            json!({"id": "late", "tenant_id": "t1", "date": "2024-03-31"}),
            json!({"id": "outside", "tenant_id": "t1", "date": "2024-04-01"}),
            json!({"id": "early", "tenant_id": "t1", "date": "2024-03-01"}),
            json!({"id": "before", "tenant_id": "t1", "date": "2024-02-29"}),
        ],
    ));

    let events = services
        .calendar_events
        .get_calendar_events("2024-03-01", "2024-03-31")
        .await
        .unwrap();
    let ids: Vec<_> = events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["early", "late"]);

    let query = backend.last_query().unwrap();
    assert!(query.order.unwrap().ascending);
    assert_eq!(query.filters.len(), 3);
}

#[tokio::test]
async fn test_create_contract_round_trip() {
    let (backend, services) = services(MockBackend::default().with_tenant("t1").with_user("u1"));

    let created = services
        .contracts
        .create_contract(NewContract::new("Supply Agreement").with_status("Draft").with_value(50_000.0))
        .await
        .unwrap();
    assert_eq!(created.tenant_id.as_deref(), Some("t1"));
    assert_eq!(created.created_by.as_deref(), Some("u1"));

    let stored = backend.rows("contracts");
    assert_eq!(stored[0]["tenant_id"], "t1");
    assert_eq!(stored[0]["status"], "Draft");

    let listed = services.contracts.get_contracts().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Supply Agreement");
}

#[tokio::test]
async fn test_create_contract_rejects_invalid_input() {
    let (backend, services) = services(MockBackend::default().with_tenant("t1"));
    let err = services
        .contracts
        .create_contract(NewContract::new(""))
        .await
        .unwrap_err();
    assert_eq!(err.operation, "Create contract");
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn test_dashboard_stats() {
    let (_, services) = services(
        MockBackend::default()
            .with_tenant("t1")
            .with_rows("contracts", vec![json!({"tenant_id": "t1"}), json!({"tenant_id": "t1"})])
            .with_rows("matters", vec![json!({"tenant_id": "t1"}), json!({"tenant_id": "t2"})])
            .with_rows("compliance", vec![json!({"tenant_id": "t1", "score": 92})]),
    );

    let stats = services.dashboard.get_dashboard_stats().await.unwrap();
    let labels: Vec<_> = stats.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Active Contracts", "Open Matters", "Risk Alerts", "Compliance Score"]
    );
    assert_eq!(stats[0].value, StatValue::Count(2));
    assert_eq!(stats[1].value, StatValue::Count(1));
    assert_eq!(stats[2].value, StatValue::Count(0));
    assert_eq!(stats[3].value, StatValue::Text("92%".into()));
}

#[tokio::test]
async fn test_dashboard_without_compliance_row() {
    let (_, services) = services(MockBackend::default().with_tenant("t1"));
    let stats = services.dashboard.get_dashboard_stats().await.unwrap();
    assert_eq!(stats[3].value, StatValue::Text("N/A".into()));
}

#[tokio::test]
async fn test_dashboard_failure() {
    let (_, services) = services(MockBackend::default().with_tenant("t1").with_failure("risks", "timeout"));
    let err = services.dashboard.get_dashboard_stats().await.unwrap_err();
    assert!(err.to_string().starts_with("Get dashboard stats failed: "));
}

#[tokio::test]
async fn test_handle_success_state() {
    let (_, services) = services(
        MockBackend::default()
            .with_tenant("t1")
            .with_rows("deals", vec![json!({"id": "d1", "tenant_id": "t1", "status": "Sourced"})]),
    );

    let handle = services.watch_deals();
    let state = handle.settled().await;
    assert!(!state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.data.len(), 1);
}

#[tokio::test]
async fn test_handle_failure_state() {
    let (_, services) = services(MockBackend::default().with_tenant("t1").with_failure("policies", "boom"));

    let state = services.watch_policies().settled().await;
    assert!(!state.loading);
    assert!(state.data.is_empty());
    let error = state.error.unwrap();
    assert!(!error.is_empty());
    assert!(error.contains("Get policies failed"));
}

#[tokio::test]
async fn test_handle_refresh_picks_up_new_rows() {
    let (backend, services) = services(MockBackend::default().with_tenant("t1").with_failure("risks", "down"));

    let handle = services.watch_risks();
    assert!(handle.settled().await.error.is_some());

    backend.clear_failure("risks");
    backend.insert_rows("risks", vec![json!({"id": "r1", "tenant_id": "t1"})]);
    handle.refresh();
    assert!(handle.state().loading);

    let mut updates = handle.subscribe();
    let state: ResourceState<_> = updates.wait_for(|s| !s.loading).await.unwrap().clone();
    assert_eq!(state.error, None);
    assert_eq!(state.data.len(), 1);
}

#[tokio::test]
async fn test_every_handle_settles() {
    let (_, services) = services(MockBackend::default().with_tenant("t1"));

    assert!(services.watch_contracts().settled().await.is_ready());
    assert!(services.watch_disputes().settled().await.is_ready());
    assert!(services.watch_ip_assets().settled().await.is_ready());
    assert!(services.watch_entities().settled().await.is_ready());
    assert!(services.watch_people().settled().await.is_ready());
    assert!(services.watch_board_packs().settled().await.is_ready());
    assert!(services.watch_board_meetings().settled().await.is_ready());
    assert!(services
        .watch_calendar_events("2024-01-01", "2024-01-31")
        .settled()
        .await
        .is_ready());
    assert!(services.watch_knowledge_entries().settled().await.is_ready());
    assert!(services.watch_trending_topics().settled().await.is_ready());
    assert!(services.watch_search_suggestions().settled().await.is_ready());
    assert!(services.watch_knowledge_insights().settled().await.is_ready());
    assert!(services.watch_clauses().settled().await.is_ready());
    assert!(services.watch_templates().settled().await.is_ready());
    assert!(services.watch_matters().settled().await.is_ready());
    assert!(services.watch_deals().settled().await.is_ready());
    assert!(services.watch_risks().settled().await.is_ready());
    assert!(services.watch_policies().settled().await.is_ready());

    let stats = services.watch_dashboard_stats().settled().await;
    assert_eq!(stats.data.len(), 4);
}

#[tokio::test]
async fn test_each_handle_fetches_independently() {
    let (backend, services) = services(MockBackend::default().with_tenant("t1"));
    let first = services.watch_templates();
    let second = services.watch_templates();
    first.settled().await;
    second.settled().await;
    // Tenant RPC plus select, once per handle.
    assert_eq!(backend.call_count(), 4);
}

#[tokio::test]
async fn test_fixed_tenant_skips_rpc() {
    let backend = Arc::new(MockBackend::default().with_rows(
        "clauses",
        vec![json!({"id": "c1", "tenant_id": "pinned", "risk": "High"})],
    ));
    let services = Services::with_backend(backend.clone(), Some("pinned".into()));

    let clauses = services.clauses.get_clauses().await.unwrap();
    assert_eq!(clauses.len(), 1);
    assert_eq!(backend.call_count(), 1);
}

#[tokio::test]
async fn test_demo_pipeline_summary() {
    let services = Services::demo("demo");
    let deals = services.dealflow.get_deals().await.unwrap();
    let summary = DealPipelineSummary::from_deals(&deals);

    let manual: f64 = deals.iter().filter(|d| d.is_active()).map(|d| d.deal_size).sum();
    assert_eq!(summary.active, 4);
    assert!((summary.active_value - manual).abs() < 1e-9);
}
