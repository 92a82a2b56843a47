use crate::error::{BackendResult, Result};
use crate::fetcher::{fail, ResourceFetcher};
use crate::models::{ComplianceScore, Contract, DashboardStat, Matter, Risk, StatColor, StatValue, Trend};

const GET_DASHBOARD_STATS: &str = "Get dashboard stats";

/// Headline counts for the landing dashboard.
#[derive(Clone, Debug)]
pub struct DashboardService {
    fetcher: ResourceFetcher,
}

impl DashboardService {
    pub fn new(fetcher: ResourceFetcher) -> Self {
        Self { fetcher }
    }

    /// Four stat cards: contracts, matters and risks counted in the current
    /// tenant, plus the compliance score.
    ///
    /// The change and trend figures are fixed placeholders; no history is
    /// kept to compute them from.
    pub async fn get_dashboard_stats(&self) -> Result<Vec<DashboardStat>> {
        self.load().await.map_err(|e| fail(GET_DASHBOARD_STATS, e))
    }

    async fn load(&self) -> BackendResult<Vec<DashboardStat>> {
        let (contracts, matters, risks, compliance) = futures::try_join!(
            self.fetcher.count_rows::<Contract>(),
            self.fetcher.count_rows::<Matter>(),
            self.fetcher.count_rows::<Risk>(),
            self.fetcher.read_rows::<ComplianceScore>(Vec::new(), Some(1)),
        )?;

        Ok(vec![
            DashboardStat::new(
                "Active Contracts",
                StatValue::Count(contracts),
                "+12%",
                Trend::Up,
                StatColor::Blue,
            ),
            DashboardStat::new(
                "Open Matters",
                StatValue::Count(matters),
                "-5%",
                Trend::Down,
                StatColor::Green,
            ),
            DashboardStat::new(
                "Risk Alerts",
                StatValue::Count(risks),
                "+8%",
                Trend::Up,
                StatColor::Red,
            ),
            DashboardStat::new(
                "Compliance Score",
                StatValue::Text(ComplianceScore::display(compliance.first())),
                "+2%",
                Trend::Up,
                StatColor::Purple,
            ),
        ])
    }
}
