//! Per-entity services and the bundle that wires them to one backend.
//!
//! Each service is a cheap, cloneable wrapper over a shared
//! [`ResourceFetcher`]; cloning a service never opens another connection.

mod company_secretarial;
mod contracts;
mod dashboard;
mod knowledge;
mod simple;

pub use company_secretarial::{BoardPackService, CalendarEventService, CompanySecretarialService};
pub use contracts::ContractService;
pub use dashboard::DashboardService;
pub use knowledge::KnowledgeService;
pub use simple::{
    ClauseService, DealflowService, DisputeService, EntityService, IpAssetService, MatterService,
    PolicyService, RiskService, TemplateService,
};

use std::sync::Arc;

use futures::FutureExt;

use crate::backend::{DataBackend, MockBackend, RestBackend};
use crate::config::BackendConfig;
use crate::error::BackendResult;
use crate::fetcher::ResourceFetcher;
use crate::handle::ResourceHandle;
use crate::models::{
    BoardMeeting, BoardPack, CalendarEvent, Clause, Contract, DashboardStat, Deal, Dispute, Entity,
    IpAsset, KnowledgeEntry, KnowledgeInsight, Matter, Person, Policy, Risk, SearchSuggestion,
    Template, TrendingTopic,
};
use crate::tenant::TenantResolver;

/// One instance of every service, sharing a backend and tenant resolver.
#[derive(Clone, Debug)]
pub struct Services {
    pub contracts: ContractService,
    pub disputes: DisputeService,
    pub ip_assets: IpAssetService,
    pub entities: EntityService,
    pub company_secretarial: CompanySecretarialService,
    pub board_packs: BoardPackService,
    pub calendar_events: CalendarEventService,
    pub dealflow: DealflowService,
    pub knowledge: KnowledgeService,
    pub clauses: ClauseService,
    pub templates: TemplateService,
    pub matters: MatterService,
    pub risks: RiskService,
    pub policies: PolicyService,
    pub dashboard: DashboardService,
}

macro_rules! watch {
    ($(#[$meta:meta])* $name:ident, $service:ident . $method:ident, $record:ty, $label:literal) => {
        $(#[$meta])*
        pub fn $name(&self) -> ResourceHandle<$record> {
            let service = self.$service.clone();
            ResourceHandle::spawn($label, move || {
                let service = service.clone();
                async move { service.$method().await }.boxed()
            })
        }
    };
}

impl Services {
    pub fn new(fetcher: ResourceFetcher) -> Self {
        Self {
            contracts: ContractService::new(fetcher.clone()),
            disputes: DisputeService::new(fetcher.clone()),
            ip_assets: IpAssetService::new(fetcher.clone()),
            entities: EntityService::new(fetcher.clone()),
            company_secretarial: CompanySecretarialService::new(fetcher.clone()),
            board_packs: BoardPackService::new(fetcher.clone()),
            calendar_events: CalendarEventService::new(fetcher.clone()),
            dealflow: DealflowService::new(fetcher.clone()),
            knowledge: KnowledgeService::new(fetcher.clone()),
            clauses: ClauseService::new(fetcher.clone()),
            templates: TemplateService::new(fetcher.clone()),
            matters: MatterService::new(fetcher.clone()),
            risks: RiskService::new(fetcher.clone()),
            policies: PolicyService::new(fetcher.clone()),
            dashboard: DashboardService::new(fetcher),
        }
    }

    /// Services over an arbitrary backend. A configured tenant pins every
    /// read; otherwise the backend is asked on each call.
    pub fn with_backend(backend: Arc<dyn DataBackend>, tenant_id: Option<String>) -> Self {
        let tenant = match tenant_id {
            Some(tenant) => TenantResolver::fixed(backend.clone(), tenant),
            None => TenantResolver::from_backend(backend.clone()),
        };
        Self::new(ResourceFetcher::with_tenant_resolver(backend, tenant))
    }

    /// Services over the hosted backend.
    pub fn connect(config: BackendConfig) -> BackendResult<Self> {
        let tenant_id = config.tenant_id.clone();
        let backend = RestBackend::new(config)?;
        Ok(Self::with_backend(Arc::new(backend), tenant_id))
    }

    /// Services over the built-in sample data for `tenant_id`.
    pub fn demo(tenant_id: impl Into<String>) -> Self {
        let tenant_id = tenant_id.into();
        let backend = MockBackend::new("demo").with_demo_data(&tenant_id);
        Self::with_backend(Arc::new(backend), Some(tenant_id))
    }

    watch!(watch_contracts, contracts.get_contracts, Contract, "contracts");
    watch!(watch_disputes, disputes.get_disputes, Dispute, "disputes");
    watch!(watch_ip_assets, ip_assets.get_ip_assets, IpAsset, "IP assets");
    watch!(watch_entities, entities.get_entities, Entity, "entities");
    watch!(watch_people, company_secretarial.get_people, Person, "people");
    watch!(watch_board_packs, board_packs.get_board_packs, BoardPack, "board packs");
    watch!(watch_board_meetings, board_packs.get_board_meetings, BoardMeeting, "board meetings");
    watch!(watch_deals, dealflow.get_deals, Deal, "deals");
    watch!(watch_knowledge_entries, knowledge.get_knowledge_entries, KnowledgeEntry, "knowledge entries");
    watch!(watch_trending_topics, knowledge.get_trending_topics, TrendingTopic, "trending topics");
    watch!(watch_search_suggestions, knowledge.get_search_suggestions, SearchSuggestion, "search suggestions");
    watch!(watch_knowledge_insights, knowledge.get_knowledge_insights, KnowledgeInsight, "knowledge insights");
    watch!(watch_clauses, clauses.get_clauses, Clause, "clauses");
    watch!(watch_templates, templates.get_templates, Template, "templates");
    watch!(watch_matters, matters.get_matters, Matter, "matters");
    watch!(watch_risks, risks.get_risks, Risk, "risks");
    watch!(watch_policies, policies.get_policies, Policy, "policies");
    watch!(
        /// Stat cards as a handle; `data` holds the four cards once loaded.
        watch_dashboard_stats, dashboard.get_dashboard_stats, DashboardStat, "dashboard stats"
    );

    /// Calendar events in `[start, end]`. Changing the range means creating a
    /// new handle.
    pub fn watch_calendar_events(
        &self,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> ResourceHandle<CalendarEvent> {
        let service = self.calendar_events.clone();
        let (start, end) = (start.into(), end.into());
        ResourceHandle::spawn("calendar events", move || {
            let service = service.clone();
            let (start, end) = (start.clone(), end.clone());
            async move { service.get_calendar_events(start, end).await }.boxed()
        })
    }
}
