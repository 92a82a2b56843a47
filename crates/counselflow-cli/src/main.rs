//! CounselFlow CLI
//!
//! Prints tenant-scoped legal operations data as JSON. Logs go to stderr so
//! stdout can be piped straight into other tools.

mod args;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use counselflow_data::summaries::{
    ClauseSummary, DealPipelineSummary, IpPortfolioSummary, KnowledgeSummary, MatterSummary, RiskSummary,
    TemplateSummary,
};
use counselflow_data::{BackendConfig, Services};

use args::{Args, Command, ResourceKind, SummaryKind};

const DEMO_TENANT: &str = "demo-tenant";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    let log_level = args.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("counselflow={},info", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let services = build_services(&args)?;
    run(&services, args.command).await
}

fn build_services(args: &Args) -> anyhow::Result<Services> {
    if args.demo {
        let tenant = args.tenant.clone().unwrap_or_else(|| DEMO_TENANT.to_string());
        info!(tenant = %tenant, "using built-in sample data");
        return Ok(Services::demo(tenant));
    }

    let mut config = match &args.config {
        Some(path) => BackendConfig::load(path)
            .with_context(|| format!("loading backend config from {}", path.display()))?,
        None => BackendConfig::from_env().context("reading backend config from the environment")?,
    };
    if let Some(tenant) = &args.tenant {
        config = config.with_tenant(tenant.clone());
    }

    info!(url = %config.base_url(), "connecting to hosted backend");
    Ok(Services::connect(config)?)
}

async fn run(services: &Services, command: Command) -> anyhow::Result<()> {
    match command {
        Command::List { resource } => list(services, resource).await,
        Command::Calendar { from, to } => {
            print_json(&services.calendar_events.get_calendar_events(from, to).await?)
        }
        Command::Stats => print_json(&services.dashboard.get_dashboard_stats().await?),
        Command::Summary { kind } => summary(services, kind).await,
        Command::CreateContract(create) => {
            let created = services.contracts.create_contract(create.into()).await?;
            info!(id = %created.id, "contract created");
            print_json(&created)
        }
    }
}

async fn list(services: &Services, resource: ResourceKind) -> anyhow::Result<()> {
    debug!(?resource, "listing");
    match resource {
        ResourceKind::Contracts => print_json(&services.contracts.get_contracts().await?),
        ResourceKind::Disputes => print_json(&services.disputes.get_disputes().await?),
        ResourceKind::IpAssets => print_json(&services.ip_assets.get_ip_assets().await?),
        ResourceKind::Entities => print_json(&services.entities.get_entities().await?),
        ResourceKind::People => print_json(&services.company_secretarial.get_people().await?),
        ResourceKind::BoardPacks => print_json(&services.board_packs.get_board_packs().await?),
        ResourceKind::BoardMeetings => print_json(&services.board_packs.get_board_meetings().await?),
        ResourceKind::Deals => print_json(&services.dealflow.get_deals().await?),
        ResourceKind::KnowledgeEntries => print_json(&services.knowledge.get_knowledge_entries().await?),
        ResourceKind::TrendingTopics => print_json(&services.knowledge.get_trending_topics().await?),
        ResourceKind::SearchSuggestions => print_json(&services.knowledge.get_search_suggestions().await?),
        ResourceKind::KnowledgeInsights => print_json(&services.knowledge.get_knowledge_insights().await?),
        ResourceKind::Clauses => print_json(&services.clauses.get_clauses().await?),
        ResourceKind::Templates => print_json(&services.templates.get_templates().await?),
        ResourceKind::Matters => print_json(&services.matters.get_matters().await?),
        ResourceKind::Risks => print_json(&services.risks.get_risks().await?),
        ResourceKind::Policies => print_json(&services.policies.get_policies().await?),
    }
}

async fn summary(services: &Services, kind: SummaryKind) -> anyhow::Result<()> {
    let now = chrono::Utc::now();
    match kind {
        SummaryKind::Pipeline => {
            print_json(&DealPipelineSummary::from_deals(&services.dealflow.get_deals().await?))
        }
        SummaryKind::Ip => print_json(&IpPortfolioSummary::from_assets(
            &services.ip_assets.get_ip_assets().await?,
            now,
        )),
        SummaryKind::Knowledge => print_json(&KnowledgeSummary::from_entries(
            &services.knowledge.get_knowledge_entries().await?,
            now,
        )),
        SummaryKind::Clauses => print_json(&ClauseSummary::from_clauses(&services.clauses.get_clauses().await?)),
        SummaryKind::Templates => {
            print_json(&TemplateSummary::from_templates(&services.templates.get_templates().await?))
        }
        SummaryKind::Risks => print_json(&RiskSummary::from_risks(&services.risks.get_risks().await?)),
        SummaryKind::Matters => print_json(&MatterSummary::from_matters(&services.matters.get_matters().await?)),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
