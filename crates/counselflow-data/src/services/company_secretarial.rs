use crate::error::Result;
use crate::fetcher::ResourceFetcher;
use crate::models::{BoardMeeting, BoardPack, CalendarEvent, Entity, Person};
use crate::query::Filter;

/// Entities and the people who sit on them.
#[derive(Clone, Debug)]
pub struct CompanySecretarialService {
    fetcher: ResourceFetcher,
}

impl CompanySecretarialService {
    pub fn new(fetcher: ResourceFetcher) -> Self {
        Self { fetcher }
    }

    pub async fn get_entities(&self) -> Result<Vec<Entity>> {
        self.fetcher.fetch_all().await
    }

    pub async fn get_people(&self) -> Result<Vec<Person>> {
        self.fetcher.fetch_all().await
    }
}

#[derive(Clone, Debug)]
pub struct BoardPackService {
    fetcher: ResourceFetcher,
}

impl BoardPackService {
    pub fn new(fetcher: ResourceFetcher) -> Self {
        Self { fetcher }
    }

    pub async fn get_board_packs(&self) -> Result<Vec<BoardPack>> {
        self.fetcher.fetch_all().await
    }

    /// Meetings, latest date first.
    pub async fn get_board_meetings(&self) -> Result<Vec<BoardMeeting>> {
        self.fetcher.fetch_all().await
    }
}

#[derive(Clone, Debug)]
pub struct CalendarEventService {
    fetcher: ResourceFetcher,
}

impl CalendarEventService {
    pub fn new(fetcher: ResourceFetcher) -> Self {
        Self { fetcher }
    }

    /// Events dated within `[start, end]`, both inclusive, earliest first.
    ///
    /// Dates are compared as the backend stores them (`YYYY-MM-DD`).
    pub async fn get_calendar_events(
        &self,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Result<Vec<CalendarEvent>> {
        self.fetcher
            .fetch_filtered(vec![Filter::gte("date", start), Filter::lte("date", end)])
            .await
    }
}
