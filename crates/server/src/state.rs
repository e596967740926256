//! Application state shared across all handlers.

use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::config::Config;
use crate::db;
use crate::services::{CityService, EventService, HoneyService, NewsletterService, SourceService};

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// PostgreSQL connection pool.
    db: PgPool,

    /// Public site URL for sitemap links.
    site_url: String,

    honeys: HoneyService,
    sources: SourceService,
    events: EventService,
    cities: CityService,
    newsletter: NewsletterService,
}

impl AppState {
    /// Connect to the database, run migrations, and wire up services.
    pub async fn new(config: &Config) -> Result<Self> {
        let pool = db::create_pool(config)
            .await
            .context("failed to create database pool")?;
        db::run_migrations(&pool).await?;

        Ok(Self::with_pool(pool, config.site_url.clone()))
    }

    /// Build state over an existing pool (used by integration tests).
    pub fn with_pool(db: PgPool, site_url: String) -> Self {
        let sources = SourceService::new(db.clone());
        let events = EventService::new(db.clone());
        let cities = CityService::new(db.clone(), sources.clone(), events.clone());

        Self {
            inner: Arc::new(AppStateInner {
                honeys: HoneyService::new(db.clone()),
                sources,
                events,
                cities,
                newsletter: NewsletterService::new(db.clone()),
                site_url,
                db,
            }),
        }
    }

    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    pub fn site_url(&self) -> &str {
        &self.inner.site_url
    }

    pub fn honeys(&self) -> &HoneyService {
        &self.inner.honeys
    }

    pub fn sources(&self) -> &SourceService {
        &self.inner.sources
    }

    pub fn events(&self) -> &EventService {
        &self.inner.events
    }

    pub fn cities(&self) -> &CityService {
        &self.inner.cities
    }

    pub fn newsletter(&self) -> &NewsletterService {
        &self.inner.newsletter
    }

    /// Whether PostgreSQL answers a probe query.
    pub async fn postgres_healthy(&self) -> bool {
        db::check_health(&self.inner.db).await
    }
}
