//! Intellectual property records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::parse_timestamp;
use crate::resource::{OrderBy, Record, Resource};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// An IP asset row (patent, trademark, copyright, design).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(default)]
pub struct IpAsset {
    pub id: String,
    pub tenant_id: Option<String>,
    pub title: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub jurisdiction: String,
    pub entity: String,
    pub status: String,
    #[serde(rename = "registrationNumber")]
    pub registration_number: String,
    #[serde(rename = "expiryDate", alias = "expiration_date")]
    pub expiry_date: Option<String>,
    pub owner: String,
    pub estimated_value: Option<f64>,
    #[serde(rename = "lastUpdated")]
    pub last_updated: Option<String>,
}

impl IpAsset {
    /// Parsed expiry, if present and well-formed.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expiry_date.as_deref().and_then(parse_timestamp)
    }
}

impl Record for IpAsset {
    const RESOURCE: Resource = Resource::scoped("ip_assets", "IP assets", OrderBy::desc("lastUpdated"));
}
