//! Data backend abstraction layer.
//!
//! Provides a trait-based interface over the hosted relational backend:
//! - PostgREST-compatible hosted backend (Supabase)
//! - In-memory mock backend for tests and demo mode

pub mod mock;
pub mod rest;
pub mod traits;

pub use mock::MockBackend;
pub use rest::RestBackend;
pub use traits::{DataBackend, Row, CURRENT_TENANT_RPC};
