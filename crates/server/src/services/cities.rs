//! City landing page operations.

use sqlx::PgPool;

use crate::dto::{CityContentDto, EventDto, LocalSourceDto};
use crate::error::AppResult;
use crate::models::CityContent;
use crate::query::page::Page;
use crate::services::{EventService, SourceService};

/// Default radius for a city page's nearby-source lookups, in miles.
const CITY_RADIUS_MILES: f64 = 50.0;

/// City content plus its nearby-source and event enrichment.
#[derive(Clone)]
pub struct CityService {
    db: PgPool,
    sources: SourceService,
    events: EventService,
}

impl CityService {
    pub fn new(db: PgPool, sources: SourceService, events: EventService) -> Self {
        Self {
            db,
            sources,
            events,
        }
    }

    /// Every validated city as a summary, ordered by city name.
    pub async fn list(&self) -> AppResult<Vec<CityContentDto>> {
        let cities = CityContent::list_validated(&self.db).await?;
        Ok(cities.iter().map(CityContentDto::summary).collect())
    }

    /// Full city content by slug, enriched with the number of sources
    /// within 50 miles and of active events in the city's state. The
    /// counts stay zero when the city has no coordinates.
    pub async fn find_by_slug(&self, slug: &str) -> AppResult<Option<CityContentDto>> {
        let Some(city) = CityContent::find_by_slug(&self.db, slug).await? else {
            return Ok(None);
        };

        let mut nearby_sources_count = 0;
        let mut upcoming_events_count = 0;

        if let (Some(lat), Some(lng)) = (city.latitude, city.longitude) {
            // A size-1 page is enough: only the total is wanted here.
            let nearby = self
                .sources
                .find_nearby(lat, lng, CITY_RADIUS_MILES, Vec::new(), 0, 1)
                .await?;
            nearby_sources_count = nearby.total_elements;
            upcoming_events_count = self.events.find_by_state(&city.state).await?.len() as i64;
        }

        Ok(Some(CityContentDto::full(
            &city,
            nearby_sources_count,
            upcoming_events_count,
        )))
    }

    /// One page of sources near a city. `None` when the slug is unknown or
    /// the city has no coordinates.
    pub async fn nearby_sources(
        &self,
        slug: &str,
        radius_miles: f64,
        page: u32,
        size: u32,
    ) -> AppResult<Option<Page<LocalSourceDto>>> {
        let Some(city) = CityContent::find_by_slug(&self.db, slug).await? else {
            return Ok(None);
        };
        let (Some(lat), Some(lng)) = (city.latitude, city.longitude) else {
            return Ok(None);
        };

        let sources = self
            .sources
            .find_nearby(lat, lng, radius_miles, Vec::new(), page, size)
            .await?;
        Ok(Some(sources))
    }

    /// Active events in a city's state. `None` when the slug is unknown.
    pub async fn events_for(&self, slug: &str) -> AppResult<Option<Vec<EventDto>>> {
        let Some(city) = CityContent::find_by_slug(&self.db, slug).await? else {
            return Ok(None);
        };

        let events = self.events.find_by_state(&city.state).await?;
        Ok(Some(events))
    }

    /// Count of validated cities.
    pub async fn count(&self) -> AppResult<i64> {
        Ok(CityContent::count_validated(&self.db).await?)
    }
}
