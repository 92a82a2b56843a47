//! Contract records.

use serde::{Deserialize, Serialize};

use crate::resource::{OrderBy, Record, Resource};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// `{id, name}` pair embedded by a relation select.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(default)]
pub struct NamedRef {
    pub id: String,
    pub name: String,
}

/// A contract row, with its entity and counterparty embedded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(default)]
pub struct Contract {
    pub id: String,
    pub tenant_id: Option<String>,
    pub title: String,
    #[serde(alias = "type")]
    pub contract_type: Option<String>,
    pub status: String,
    pub value: Option<f64>,
    pub currency: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub entity_id: Option<String>,
    pub counterparty_id: Option<String>,
    pub created_by: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub entity: Option<NamedRef>,
    pub counterparty: Option<NamedRef>,
}

impl Record for Contract {
    const RESOURCE: Resource = Resource::scoped("contracts", "contracts", OrderBy::desc("created_at"))
        .with_columns("*, entity:entities(id, name), counterparty:counterparties(id, name)");
}

/// Fields a caller supplies when creating a contract.
///
/// `tenant_id` and `created_by` are stamped by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct NewContract {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterparty_id: Option<String>,
}

impl NewContract {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_type(mut self, contract_type: impl Into<String>) -> Self {
        self.contract_type = Some(contract_type.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    /// Reject obviously unusable input before it reaches the backend.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title is required".to_string());
        }
        if matches!(self.value, Some(v) if !v.is_finite() || v < 0.0) {
            return Err("value must be a non-negative number".to_string());
        }
        Ok(())
    }
}
