//! City landing page content records.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::SitemapEntry;

/// City-specific content for local SEO landing pages.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CityContent {
    pub id: Uuid,
    pub city: String,
    pub state: String,
    pub slug: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub intro_text: Option<String>,
    pub honey_facts: Option<String>,
    pub buying_tips: Option<String>,
    pub best_seasons: Option<String>,
    pub faq_json: Option<String>,
    pub validated: bool,
    pub validation_score: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CityContent {
    /// All validated cities, ordered by city name.
    pub async fn list_validated(pool: &PgPool) -> Result<Vec<Self>> {
        let cities = sqlx::query_as::<_, CityContent>(
            "SELECT * FROM city_content WHERE validated = TRUE ORDER BY city, id",
        )
        .fetch_all(pool)
        .await
        .context("failed to list validated cities")?;

        Ok(cities)
    }

    /// Find city content by slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Self>> {
        let city = sqlx::query_as::<_, CityContent>("SELECT * FROM city_content WHERE slug = $1")
            .bind(slug)
            .fetch_optional(pool)
            .await
            .context("failed to fetch city content by slug")?;

        Ok(city)
    }

    /// Count validated cities.
    pub async fn count_validated(pool: &PgPool) -> Result<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM city_content WHERE validated = TRUE")
                .fetch_one(pool)
                .await
                .context("failed to count validated cities")?;

        Ok(count)
    }

    /// Slugs and last-modified timestamps of validated cities for the sitemap.
    pub async fn sitemap_entries(pool: &PgPool) -> Result<Vec<SitemapEntry>> {
        let entries = sqlx::query_as::<_, SitemapEntry>(
            "SELECT slug, updated_at FROM city_content WHERE validated = TRUE ORDER BY slug",
        )
        .fetch_all(pool)
        .await
        .context("failed to fetch city sitemap entries")?;

        Ok(entries)
    }
}
