//! CounselFlow Data - tenant-scoped data access
//!
//! Provides the data plumbing behind the CounselFlow legal operations
//! back office (dealflow, disputes, IP, matters, company secretarial,
//! knowledge and risk):
//! - Trait-based data backends (hosted PostgREST, in-memory mock)
//! - One generic resource fetcher driven by per-table descriptors
//! - Thin per-entity services returning typed records
//! - Resource handles exposing `{data, loading, error}` snapshots
//! - Dashboard summaries computed over fetched rows
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │   ResourceHandle<T>  /  summaries       │
//! └────────────────┬────────────────────────┘
//!                  │
//! ┌────────────────▼────────────────────────┐
//! │   Services (ContractService, ...)       │
//! └────────────────┬────────────────────────┘
//!                  │
//! ┌────────────────▼────────────────────────┐
//! │   ResourceFetcher + TenantResolver      │
//! └────────────────┬────────────────────────┘
//!                  │
//!      ┌───────────┴───────────┐
//!      ▼                       ▼
//! ┌─────────────┐       ┌─────────────┐
//! │ RestBackend │       │ MockBackend │
//! │ (PostgREST) │       │ (in-memory) │
//! └─────────────┘       └─────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use counselflow_data::{BackendConfig, Services};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let services = Services::connect(BackendConfig::from_env()?)?;
//!
//! let deals = services.dealflow.get_deals().await?;
//! println!("{} deals in pipeline", deals.len());
//!
//! let handle = services.watch_contracts();
//! let state = handle.settled().await;
//! assert!(!state.loading);
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod config;
pub mod demo;
pub mod error;
pub mod fetcher;
pub mod handle;
pub mod models;
pub mod query;
pub mod resource;
pub mod services;
pub mod summaries;
pub mod tenant;

// Re-export main types for convenience
pub use backend::{DataBackend, MockBackend, RestBackend};
pub use config::BackendConfig;
pub use error::{BackendError, ServiceError};
pub use fetcher::ResourceFetcher;
pub use handle::{ResourceHandle, ResourceState};
pub use query::{Filter, SelectQuery};
pub use resource::{OrderBy, Record, Resource};
pub use services::Services;
pub use tenant::TenantResolver;
