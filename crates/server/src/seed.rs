//! Startup seeding from JSON files.
//!
//! Reads `honeys.json`, `local-sources.json`, and `events.json` from the
//! configured seed directory and inserts them into empty tables. Tables
//! that already hold data are skipped, so seeding is safe to leave enabled
//! across restarts. Vocabulary codes in seed data are validated up front;
//! a bad code fails the seed rather than planting an unfilterable record.

use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use serde::Deserialize;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{Event, Honey, LocalSource};
use crate::vocab::{
    Certification, EventType, FlavorProfile, FloralSource, HoneyOrigin, HoneyType, SourceType,
    Vocabulary,
};

/// Convert text into a URL-safe slug.
///
/// Transforms to lowercase, replaces non-alphanumeric characters with
/// hyphens, collapses consecutive hyphens, and trims leading/trailing
/// hyphens.
pub fn slugify(text: &str) -> String {
    let mapped: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();

    let mut result = String::with_capacity(mapped.len());
    let mut prev_was_hyphen = true; // Start true to skip leading hyphens
    for c in mapped.chars() {
        if c == '-' {
            if !prev_was_hyphen {
                result.push('-');
            }
            prev_was_hyphen = true;
        } else {
            result.push(c);
            prev_was_hyphen = false;
        }
    }

    while result.ends_with('-') {
        result.pop();
    }

    result
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HoneySeed {
    name: String,
    description: Option<String>,
    floral_source: String,
    #[serde(rename = "type")]
    honey_type: String,
    origin: String,
    region: Option<String>,
    flavor_profiles: Option<String>,
    image_url: Option<String>,
    thumbnail_url: Option<String>,
    brand: Option<String>,
    price_min: Option<f64>,
    price_max: Option<f64>,
    certifications: Option<String>,
    umf_rating: Option<i32>,
    mgo_rating: Option<i32>,
    slug: Option<String>,
    #[serde(default)]
    featured: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LocalSourceSeed {
    name: String,
    source_type: String,
    description: Option<String>,
    address: String,
    city: Option<String>,
    state: Option<String>,
    zip_code: Option<String>,
    latitude: f64,
    longitude: f64,
    phone: Option<String>,
    email: Option<String>,
    website: Option<String>,
    hours_json: Option<String>,
    hero_image_url: Option<String>,
    thumbnail_url: Option<String>,
    instagram_handle: Option<String>,
    facebook_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventSeed {
    name: String,
    description: Option<String>,
    event_type: String,
    start_date: chrono::NaiveDate,
    end_date: Option<chrono::NaiveDate>,
    address: String,
    city: Option<String>,
    state: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    image_url: Option<String>,
    thumbnail_url: Option<String>,
    link: Option<String>,
}

/// Check a single-valued vocabulary code.
fn require_code<V: Vocabulary>(field: &str, code: &str) -> Result<()> {
    if V::parse(code).is_none() {
        bail!("unknown {field} code in seed data: {code}");
    }
    Ok(())
}

/// Check every token of a comma-separated code list.
fn require_code_list<V: Vocabulary>(field: &str, list: Option<&str>) -> Result<()> {
    for code in list.unwrap_or_default().split(',') {
        let code = code.trim();
        if !code.is_empty() {
            require_code::<V>(field, code)?;
        }
    }
    Ok(())
}

fn read_seed_file<T: serde::de::DeserializeOwned>(dir: &Path, name: &str) -> Result<Option<Vec<T>>> {
    let path = dir.join(name);
    if !path.exists() {
        warn!(file = %path.display(), "seed file not found, skipping");
        return Ok(None);
    }
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    let records = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse seed file {}", path.display()))?;
    Ok(Some(records))
}

async fn seed_honeys(pool: &PgPool, dir: &Path) -> Result<usize> {
    if Honey::count_all(pool).await? > 0 {
        info!("honeys table already has data, skipping seeding");
        return Ok(0);
    }
    let Some(records) = read_seed_file::<HoneySeed>(dir, "honeys.json")? else {
        return Ok(0);
    };

    let mut count = 0;
    for record in records {
        require_code::<FloralSource>("floralSource", &record.floral_source)?;
        require_code::<HoneyType>("type", &record.honey_type)?;
        require_code::<HoneyOrigin>("origin", &record.origin)?;
        require_code_list::<FlavorProfile>("flavorProfiles", record.flavor_profiles.as_deref())?;
        require_code_list::<Certification>("certifications", record.certifications.as_deref())?;

        let slug = record.slug.unwrap_or_else(|| slugify(&record.name));
        let now = Utc::now();
        sqlx::query(
            r#"
            INSERT INTO honeys (id, name, description, floral_source, honey_type, origin, region,
                flavor_profiles, image_url, thumbnail_url, brand, price_min, price_max,
                certifications, umf_rating, mgo_rating, slug, featured, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19, $20)
            ON CONFLICT (slug) DO NOTHING
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&record.name)
        .bind(&record.description)
        .bind(&record.floral_source)
        .bind(&record.honey_type)
        .bind(&record.origin)
        .bind(&record.region)
        .bind(&record.flavor_profiles)
        .bind(&record.image_url)
        .bind(&record.thumbnail_url)
        .bind(&record.brand)
        .bind(record.price_min)
        .bind(record.price_max)
        .bind(&record.certifications)
        .bind(record.umf_rating)
        .bind(record.mgo_rating)
        .bind(&slug)
        .bind(record.featured)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await
        .context("failed to insert honey seed record")?;
        count += 1;
    }

    info!(count, "seeded honeys");
    Ok(count)
}

async fn seed_local_sources(pool: &PgPool, dir: &Path) -> Result<usize> {
    if LocalSource::count_all(pool).await? > 0 {
        info!("local_sources table already has data, skipping seeding");
        return Ok(0);
    }
    let Some(records) = read_seed_file::<LocalSourceSeed>(dir, "local-sources.json")? else {
        return Ok(0);
    };

    let mut count = 0;
    for record in records {
        require_code::<SourceType>("sourceType", &record.source_type)?;

        let slug = slugify(&record.name);
        let now = Utc::now();
        sqlx::query(
            r#"
            INSERT INTO local_sources (id, name, source_type, description, address, city, state,
                zip_code, latitude, longitude, phone, email, website, hours_json, hero_image_url,
                thumbnail_url, instagram_handle, facebook_url, is_active, slug, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18,
                TRUE, $19, $20, $21)
            ON CONFLICT (slug) DO NOTHING
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&record.name)
        .bind(&record.source_type)
        .bind(&record.description)
        .bind(&record.address)
        .bind(&record.city)
        .bind(&record.state)
        .bind(&record.zip_code)
        .bind(record.latitude)
        .bind(record.longitude)
        .bind(&record.phone)
        .bind(&record.email)
        .bind(&record.website)
        .bind(&record.hours_json)
        .bind(&record.hero_image_url)
        .bind(&record.thumbnail_url)
        .bind(&record.instagram_handle)
        .bind(&record.facebook_url)
        .bind(&slug)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await
        .context("failed to insert local source seed record")?;
        count += 1;
    }

    info!(count, "seeded local sources");
    Ok(count)
}

async fn seed_events(pool: &PgPool, dir: &Path) -> Result<usize> {
    if Event::count_all(pool).await? > 0 {
        info!("events table already has data, skipping seeding");
        return Ok(0);
    }
    let Some(records) = read_seed_file::<EventSeed>(dir, "events.json")? else {
        return Ok(0);
    };

    let mut count = 0;
    for record in records {
        require_code::<EventType>("eventType", &record.event_type)?;

        let slug = slugify(&record.name);
        let now = Utc::now();
        sqlx::query(
            r#"
            INSERT INTO events (id, name, description, event_type, start_date, end_date, address,
                city, state, latitude, longitude, image_url, thumbnail_url, link,
                local_source_id, local_source_name, slug, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                NULL, NULL, $15, TRUE, $16, $17)
            ON CONFLICT (slug) DO NOTHING
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&record.name)
        .bind(&record.description)
        .bind(&record.event_type)
        .bind(record.start_date)
        .bind(record.end_date)
        .bind(&record.address)
        .bind(&record.city)
        .bind(&record.state)
        .bind(record.latitude)
        .bind(record.longitude)
        .bind(&record.image_url)
        .bind(&record.thumbnail_url)
        .bind(&record.link)
        .bind(&slug)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await
        .context("failed to insert event seed record")?;
        count += 1;
    }

    info!(count, "seeded events");
    Ok(count)
}

/// Seed every entity with a file in the seed directory.
pub async fn run(pool: &PgPool, dir: &Path) -> Result<()> {
    info!(dir = %dir.display(), "starting database seeding");

    let honeys = seed_honeys(pool, dir).await?;
    let sources = seed_local_sources(pool, dir).await?;
    let events = seed_events(pool, dir).await?;

    info!(honeys, sources, events, "database seeding complete");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Hill Country Apiary"), "hill-country-apiary");
        assert_eq!(slugify("Austin Honey Festival 2026"), "austin-honey-festival-2026");
    }

    #[test]
    fn slugify_collapses_and_trims_hyphens() {
        assert_eq!(slugify("  A -- B!  "), "a-b");
        assert_eq!(slugify("--leading--"), "leading");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn honey_seed_parses_wire_field_names() {
        let json = r#"{
            "name": "Clover Classic",
            "floralSource": "CLOVER",
            "type": "RAW",
            "origin": "USA",
            "priceMin": 8.99,
            "priceMax": 14.99,
            "flavorProfiles": "SWEET,MILD"
        }"#;
        let seed: HoneySeed = serde_json::from_str(json).unwrap();
        assert_eq!(seed.floral_source, "CLOVER");
        assert_eq!(seed.honey_type, "RAW");
        assert_eq!(seed.price_min, Some(8.99));
        assert!(!seed.featured);
        assert!(seed.slug.is_none());
    }

    #[test]
    fn code_validation_rejects_unknown_codes() {
        assert!(require_code::<FloralSource>("floralSource", "CLOVER").is_ok());
        assert!(require_code::<FloralSource>("floralSource", "DAISY").is_err());

        assert!(require_code_list::<FlavorProfile>("flavorProfiles", Some("SWEET, MILD")).is_ok());
        assert!(require_code_list::<FlavorProfile>("flavorProfiles", Some("SWEET,SOUR")).is_err());
        assert!(require_code_list::<FlavorProfile>("flavorProfiles", None).is_ok());
    }
}
