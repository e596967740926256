//! Local honey source records.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::SitemapEntry;

/// Local honey source (beekeeper, farm, market, ...).
///
/// Coordinates are required — a source is either fully geocoded or not
/// stored at all, so the proximity path never has to skip candidates.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LocalSource {
    pub id: Uuid,
    pub name: String,
    pub source_type: String,
    pub description: Option<String>,
    pub address: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub hours_json: Option<String>,
    pub hero_image_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub instagram_handle: Option<String>,
    pub facebook_url: Option<String>,
    pub is_active: bool,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LocalSource {
    /// Find a local source by ID.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>> {
        let source = sqlx::query_as::<_, LocalSource>("SELECT * FROM local_sources WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .context("failed to fetch local source by id")?;

        Ok(source)
    }

    /// Find a local source by its slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Self>> {
        let source =
            sqlx::query_as::<_, LocalSource>("SELECT * FROM local_sources WHERE slug = $1")
                .bind(slug)
                .fetch_optional(pool)
                .await
                .context("failed to fetch local source by slug")?;

        Ok(source)
    }

    /// Count all local sources.
    pub async fn count_all(pool: &PgPool) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM local_sources")
            .fetch_one(pool)
            .await
            .context("failed to count local sources")?;

        Ok(count)
    }

    /// Slugs and last-modified timestamps of active sources for the sitemap.
    pub async fn sitemap_entries(pool: &PgPool) -> Result<Vec<SitemapEntry>> {
        let entries = sqlx::query_as::<_, SitemapEntry>(
            "SELECT slug, updated_at FROM local_sources WHERE is_active = TRUE AND slug <> '' ORDER BY slug",
        )
        .fetch_all(pool)
        .await
        .context("failed to fetch local source sitemap entries")?;

        Ok(entries)
    }
}
