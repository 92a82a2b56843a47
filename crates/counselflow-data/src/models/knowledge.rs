//! Knowledge management records: library entries, clauses, templates and
//! the search hub feeds.

use serde::{Deserialize, Serialize};

use crate::resource::{OrderBy, Record, Resource};

#[cfg(feature = "typescript")]
use ts_rs::TS;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(default)]
pub struct KnowledgeEntry {
    pub id: String,
    pub tenant_id: Option<String>,
    pub title: String,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub author: String,
    pub jurisdiction: String,
    pub entity: String,
    pub status: String,
    #[serde(rename = "accessLevel")]
    pub access_level: String,
    pub views: u64,
    #[serde(rename = "lastUpdated")]
    pub last_updated: Option<String>,
}

impl Record for KnowledgeEntry {
    const RESOURCE: Resource =
        Resource::scoped("knowledge_entries", "knowledge entries", OrderBy::desc("lastUpdated"));
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(default)]
pub struct TrendingTopic {
    pub id: String,
    pub tenant_id: Option<String>,
    pub topic: String,
    pub mentions: u64,
    pub trend: Option<String>,
    pub updated_at: Option<String>,
}

impl Record for TrendingTopic {
    const RESOURCE: Resource =
        Resource::scoped("trending_topics", "trending topics", OrderBy::desc("updated_at"));
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(default)]
pub struct SearchSuggestion {
    pub id: String,
    pub tenant_id: Option<String>,
    pub query: String,
    pub category: Option<String>,
    pub created_at: Option<String>,
}

impl Record for SearchSuggestion {
    const RESOURCE: Resource =
        Resource::scoped("search_suggestions", "search suggestions", OrderBy::desc("created_at"));
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(default)]
pub struct KnowledgeInsight {
    pub id: String,
    pub tenant_id: Option<String>,
    pub title: String,
    pub summary: String,
    pub category: Option<String>,
    pub created_at: Option<String>,
}

impl Record for KnowledgeInsight {
    const RESOURCE: Resource =
        Resource::scoped("knowledge_insights", "knowledge insights", OrderBy::desc("created_at"));
}

/// A clause in the clause library.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(default)]
pub struct Clause {
    pub id: String,
    pub tenant_id: Option<String>,
    pub title: String,
    #[serde(rename = "type")]
    pub clause_type: String,
    /// Risk rating label ("High", "Medium", "Low")
    pub risk: String,
    pub jurisdiction: String,
    pub entity: String,
    pub status: String,
    #[serde(rename = "accessLevel")]
    pub access_level: String,
    #[serde(rename = "lastUpdated")]
    pub last_updated: Option<String>,
    pub author: String,
    pub content: String,
}

impl Record for Clause {
    const RESOURCE: Resource = Resource::scoped("clauses", "clauses", OrderBy::desc("lastUpdated"));
}

/// A document template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(default)]
pub struct Template {
    pub id: String,
    pub tenant_id: Option<String>,
    pub title: String,
    #[serde(rename = "type")]
    pub template_type: String,
    pub jurisdiction: String,
    pub entity: String,
    pub status: String,
    #[serde(rename = "accessLevel")]
    pub access_level: String,
    #[serde(rename = "lastUpdated")]
    pub last_updated: Option<String>,
    pub author: String,
    pub content: String,
}

impl Record for Template {
    const RESOURCE: Resource = Resource::scoped("templates", "templates", OrderBy::desc("lastUpdated"));
}
