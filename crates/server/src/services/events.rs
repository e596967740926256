//! Event operations.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::EventDto;
use crate::error::AppResult;
use crate::models::Event;
use crate::query::browse::BrowseQuery;
use crate::query::filter::EventFilter;
use crate::query::page::{Page, PageRequest};

/// Event browse, lookup, and calendar operations.
#[derive(Clone)]
pub struct EventService {
    db: PgPool,
}

impl EventService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Browse events; pagination delegated to the database.
    pub async fn browse(
        &self,
        filter: &EventFilter,
        page: &PageRequest,
    ) -> AppResult<Page<EventDto>> {
        let (page_sql, count_sql) = {
            let query = BrowseQuery::new("events", filter.condition(), page.sort_column);
            (query.build(page.page, page.size), query.build_count())
        };

        let rows: Vec<Event> = sqlx::query_as(&page_sql)
            .fetch_all(&self.db)
            .await?;
        let total: i64 = sqlx::query_scalar(&count_sql)
            .fetch_one(&self.db)
            .await?;

        Ok(Page::new(
            rows.iter().map(EventDto::from).collect(),
            page.page,
            page.size,
            total,
        ))
    }

    /// The next `limit` active events starting today or later.
    pub async fn find_upcoming(&self, limit: i64) -> AppResult<Vec<EventDto>> {
        let today = Utc::now().date_naive();
        let rows = Event::find_upcoming(&self.db, today, limit).await?;
        Ok(rows.iter().map(EventDto::from).collect())
    }

    /// Active events touching a calendar month, for the calendar view.
    pub async fn find_by_month(&self, year: i32, month: i32) -> AppResult<Vec<EventDto>> {
        let rows = Event::find_by_month(&self.db, year, month).await?;
        Ok(rows.iter().map(EventDto::from).collect())
    }

    /// Active events in a state.
    pub async fn find_by_state(&self, state: &str) -> AppResult<Vec<EventDto>> {
        let rows = Event::find_by_state(&self.db, state).await?;
        Ok(rows.iter().map(EventDto::from).collect())
    }

    /// Look up an event by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<EventDto>> {
        let event = Event::find_by_id(&self.db, id).await?;
        Ok(event.as_ref().map(EventDto::from))
    }

    /// Look up an event by slug.
    pub async fn find_by_slug(&self, slug: &str) -> AppResult<Option<EventDto>> {
        let event = Event::find_by_slug(&self.db, slug).await?;
        Ok(event.as_ref().map(EventDto::from))
    }

    /// Total event count.
    pub async fn count(&self) -> AppResult<i64> {
        Ok(Event::count_all(&self.db).await?)
    }
}
