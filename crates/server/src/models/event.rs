//! Honey-related event records.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::SitemapEntry;

/// Honey-related event (festival, market, class, ...).
///
/// The local-source reference is weak: an optional id plus a denormalized
/// cached name, never an owning relation. Absence is valid and common.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub event_type: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub address: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub image_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub link: Option<String>,
    pub local_source_id: Option<Uuid>,
    pub local_source_name: Option<String>,
    pub slug: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Active events starting today or later, soonest first.
    pub async fn find_upcoming(pool: &PgPool, today: NaiveDate, limit: i64) -> Result<Vec<Self>> {
        let events = sqlx::query_as::<_, Event>(
            "SELECT * FROM events WHERE is_active = TRUE AND start_date >= $1 ORDER BY start_date, id LIMIT $2",
        )
        .bind(today)
        .bind(limit)
        .fetch_all(pool)
        .await
        .context("failed to fetch upcoming events")?;

        Ok(events)
    }

    /// Active events whose start or end date falls inside a calendar month.
    pub async fn find_by_month(pool: &PgPool, year: i32, month: i32) -> Result<Vec<Self>> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT * FROM events
            WHERE is_active = TRUE
              AND (
                (EXTRACT(YEAR FROM start_date) = $1 AND EXTRACT(MONTH FROM start_date) = $2)
                OR (end_date IS NOT NULL
                    AND EXTRACT(YEAR FROM end_date) = $1
                    AND EXTRACT(MONTH FROM end_date) = $2)
              )
            ORDER BY start_date, id
            "#,
        )
        .bind(year)
        .bind(month)
        .fetch_all(pool)
        .await
        .context("failed to fetch events by month")?;

        Ok(events)
    }

    /// Active events in a state, soonest first.
    pub async fn find_by_state(pool: &PgPool, state: &str) -> Result<Vec<Self>> {
        let events = sqlx::query_as::<_, Event>(
            "SELECT * FROM events WHERE is_active = TRUE AND state = $1 ORDER BY start_date, id",
        )
        .bind(state)
        .fetch_all(pool)
        .await
        .context("failed to fetch events by state")?;

        Ok(events)
    }

    /// Find an event by ID.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>> {
        let event = sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .context("failed to fetch event by id")?;

        Ok(event)
    }

    /// Find an event by its slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Self>> {
        let event = sqlx::query_as::<_, Event>("SELECT * FROM events WHERE slug = $1")
            .bind(slug)
            .fetch_optional(pool)
            .await
            .context("failed to fetch event by slug")?;

        Ok(event)
    }

    /// Count all events.
    pub async fn count_all(pool: &PgPool) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events")
            .fetch_one(pool)
            .await
            .context("failed to count events")?;

        Ok(count)
    }

    /// Slugs and last-modified timestamps for the sitemap.
    pub async fn sitemap_entries(pool: &PgPool) -> Result<Vec<SitemapEntry>> {
        let entries = sqlx::query_as::<_, SitemapEntry>(
            "SELECT slug, updated_at FROM events WHERE slug <> '' ORDER BY slug",
        )
        .fetch_all(pool)
        .await
        .context("failed to fetch event sitemap entries")?;

        Ok(entries)
    }
}
