use crate::error::Result;
use crate::fetcher::ResourceFetcher;
use crate::models::{KnowledgeEntry, KnowledgeInsight, SearchSuggestion, TrendingTopic};

/// Knowledge library and search hub feeds.
#[derive(Clone, Debug)]
pub struct KnowledgeService {
    fetcher: ResourceFetcher,
}

impl KnowledgeService {
    pub fn new(fetcher: ResourceFetcher) -> Self {
        Self { fetcher }
    }

    pub async fn get_knowledge_entries(&self) -> Result<Vec<KnowledgeEntry>> {
        self.fetcher.fetch_all().await
    }

    pub async fn get_trending_topics(&self) -> Result<Vec<TrendingTopic>> {
        self.fetcher.fetch_all().await
    }

    pub async fn get_search_suggestions(&self) -> Result<Vec<SearchSuggestion>> {
        self.fetcher.fetch_all().await
    }

    pub async fn get_knowledge_insights(&self) -> Result<Vec<KnowledgeInsight>> {
        self.fetcher.fetch_all().await
    }
}
