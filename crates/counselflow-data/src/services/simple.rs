//! Single-table services.

use crate::error::Result;
use crate::fetcher::ResourceFetcher;
use crate::models::{Clause, Deal, Dispute, Entity, IpAsset, Matter, Policy, Risk, Template};

macro_rules! table_service {
    ($(#[$meta:meta])* $name:ident, $method:ident, $record:ty) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub struct $name {
            fetcher: ResourceFetcher,
        }

        impl $name {
            pub fn new(fetcher: ResourceFetcher) -> Self {
                Self { fetcher }
            }

            pub async fn $method(&self) -> Result<Vec<$record>> {
                self.fetcher.fetch_all().await
            }
        }
    };
}

table_service!(
    /// Disputes, most recently filed first.
    DisputeService, get_disputes, Dispute
);
table_service!(
    /// IP portfolio, most recently updated first.
    IpAssetService, get_ip_assets, IpAsset
);
table_service!(EntityService, get_entities, Entity);
table_service!(
    /// Private equity deal pipeline.
    DealflowService, get_deals, Deal
);
table_service!(ClauseService, get_clauses, Clause);
table_service!(TemplateService, get_templates, Template);
table_service!(MatterService, get_matters, Matter);
table_service!(RiskService, get_risks, Risk);
table_service!(
    /// Policies, in backend order.
    PolicyService, get_policies, Policy
);
