use crate::error::Result;
use crate::fetcher::{fail, ResourceFetcher};
use crate::models::{Contract, NewContract};

const CREATE_CONTRACT: &str = "Create contract";

/// Contract reads and creation.
#[derive(Clone, Debug)]
pub struct ContractService {
    fetcher: ResourceFetcher,
}

impl ContractService {
    pub fn new(fetcher: ResourceFetcher) -> Self {
        Self { fetcher }
    }

    /// Contracts with embedded entity and counterparty, newest first.
    pub async fn get_contracts(&self) -> Result<Vec<Contract>> {
        self.fetcher.fetch_all().await
    }

    /// Create a contract in the current tenant, attributed to the signed-in
    /// user when there is one.
    pub async fn create_contract(&self, contract: NewContract) -> Result<Contract> {
        contract
            .validate()
            .map_err(|message| fail(CREATE_CONTRACT, message))?;
        self.fetcher
            .create::<Contract, _>(CREATE_CONTRACT, &contract)
            .await
    }
}
