//! City landing page endpoints.

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::dto::{CityContentDto, EventDto, LocalSourceDto};
use crate::error::{AppError, AppResult};
use crate::query::page::{DEFAULT_CITY_SOURCES_SIZE, Page};
use crate::query::params::RawParams;
use crate::state::AppState;

/// Default radius for a city's nearby-source listing, in miles.
const DEFAULT_RADIUS_MILES: f64 = 50.0;

/// Create the city router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/cities", get(list))
        .route("/api/cities/count", get(count))
        .route("/api/cities/{slug}", get(by_slug))
        .route("/api/cities/{slug}/sources", get(nearby_sources))
        .route("/api/cities/{slug}/events", get(city_events))
}

/// All validated city landing pages.
async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CityContentDto>>> {
    Ok(Json(state.cities().list().await?))
}

/// Count of validated cities.
async fn count(State(state): State<AppState>) -> AppResult<Json<i64>> {
    Ok(Json(state.cities().count().await?))
}

/// Full city content with nearby-source and event counts.
async fn by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<CityContentDto>> {
    state
        .cities()
        .find_by_slug(&slug)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}

/// Paged local sources near a city.
async fn nearby_sources(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<Page<LocalSourceDto>>> {
    let params = RawParams::from(pairs);
    let radius = params.float_or("radius", DEFAULT_RADIUS_MILES)?;
    let (page, size) = params.page_size(DEFAULT_CITY_SOURCES_SIZE)?;

    state
        .cities()
        .nearby_sources(&slug, radius, page, size)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}

/// Active events in a city's state.
async fn city_events(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Vec<EventDto>>> {
    state
        .cities()
        .events_for(&slug)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}
