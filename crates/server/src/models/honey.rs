//! Honey variety records.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::SitemapEntry;

/// Honey variety record.
///
/// Vocabulary fields hold the stable machine codes; display labels are
/// attached at DTO mapping time. `flavor_profiles` and `certifications`
/// are comma-separated code lists, and the first flavor token is the
/// primary flavor used for similarity matching.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Honey {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub floral_source: String,
    pub honey_type: String,
    pub origin: String,
    pub region: Option<String>,
    pub flavor_profiles: Option<String>,
    pub image_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub brand: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub certifications: Option<String>,
    pub umf_rating: Option<i32>,
    pub mgo_rating: Option<i32>,
    pub slug: String,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Honey {
    /// First comma-separated flavor token, if any.
    pub fn primary_flavor(&self) -> Option<&str> {
        self.flavor_profiles
            .as_deref()
            .and_then(|profiles| profiles.split(',').next())
            .map(str::trim)
            .filter(|flavor| !flavor.is_empty())
    }

    /// Find a honey by its slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Self>> {
        let honey = sqlx::query_as::<_, Honey>("SELECT * FROM honeys WHERE slug = $1")
            .bind(slug)
            .fetch_optional(pool)
            .await
            .context("failed to fetch honey by slug")?;

        Ok(honey)
    }

    /// All featured honeys for the homepage carousel, in stable order.
    pub async fn find_featured(pool: &PgPool) -> Result<Vec<Self>> {
        let honeys = sqlx::query_as::<_, Honey>(
            "SELECT * FROM honeys WHERE featured = TRUE ORDER BY name, id",
        )
        .fetch_all(pool)
        .await
        .context("failed to fetch featured honeys")?;

        Ok(honeys)
    }

    /// Honeys sharing a floral source and a flavor token, excluding one record.
    ///
    /// An empty flavor matches on floral source alone.
    pub async fn find_similar(
        pool: &PgPool,
        exclude_id: Uuid,
        floral_source: &str,
        primary_flavor: Option<&str>,
        limit: i64,
    ) -> Result<Vec<Self>> {
        let honeys = sqlx::query_as::<_, Honey>(
            r#"
            SELECT * FROM honeys
            WHERE floral_source = $1
              AND id <> $2
              AND ($3::text IS NULL OR flavor_profiles LIKE '%' || $3 || '%')
            ORDER BY name, id
            LIMIT $4
            "#,
        )
        .bind(floral_source)
        .bind(exclude_id)
        .bind(primary_flavor)
        .bind(limit)
        .fetch_all(pool)
        .await
        .context("failed to fetch similar honeys")?;

        Ok(honeys)
    }

    /// Count all honeys.
    pub async fn count_all(pool: &PgPool) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM honeys")
            .fetch_one(pool)
            .await
            .context("failed to count honeys")?;

        Ok(count)
    }

    /// Slugs and last-modified timestamps for the sitemap.
    pub async fn sitemap_entries(pool: &PgPool) -> Result<Vec<SitemapEntry>> {
        let entries = sqlx::query_as::<_, SitemapEntry>(
            "SELECT slug, updated_at FROM honeys WHERE slug <> '' ORDER BY slug",
        )
        .fetch_all(pool)
        .await
        .context("failed to fetch honey sitemap entries")?;

        Ok(entries)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn honey_with_flavors(flavor_profiles: Option<&str>) -> Honey {
        Honey {
            id: Uuid::nil(),
            name: "Test".to_string(),
            description: None,
            floral_source: "CLOVER".to_string(),
            honey_type: "RAW".to_string(),
            origin: "USA".to_string(),
            region: None,
            flavor_profiles: flavor_profiles.map(str::to_string),
            image_url: None,
            thumbnail_url: None,
            brand: None,
            price_min: None,
            price_max: None,
            certifications: None,
            umf_rating: None,
            mgo_rating: None,
            slug: "test".to_string(),
            featured: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn primary_flavor_is_the_first_token() {
        let honey = honey_with_flavors(Some("SWEET,FLORAL,MILD"));
        assert_eq!(honey.primary_flavor(), Some("SWEET"));
    }

    #[test]
    fn primary_flavor_trims_whitespace() {
        let honey = honey_with_flavors(Some(" BOLD , EARTHY"));
        assert_eq!(honey.primary_flavor(), Some("BOLD"));
    }

    #[test]
    fn missing_or_blank_flavors_give_none() {
        assert_eq!(honey_with_flavors(None).primary_flavor(), None);
        assert_eq!(honey_with_flavors(Some("")).primary_flavor(), None);
        assert_eq!(honey_with_flavors(Some("  ,SWEET")).primary_flavor(), None);
    }
}
