//! Local source endpoints.

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

use crate::dto::LocalSourceDto;
use crate::error::{AppError, AppResult};
use crate::query::filter::{SourceFilter, parse_codes};
use crate::query::page::{DEFAULT_BROWSE_SIZE, Page, SOURCE_SORTS};
use crate::query::params::RawParams;
use crate::state::AppState;
use crate::vocab::SourceType;

/// Default nearby-search radius in miles.
const DEFAULT_RADIUS_MILES: f64 = 50.0;

/// Create the local source router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/local-sources", get(browse))
        .route("/api/local-sources/map", get(map))
        .route("/api/local-sources/nearby", get(nearby))
        .route("/api/local-sources/count", get(count))
        .route("/api/local-sources/slug/{slug}", get(by_slug))
        .route("/api/local-sources/{id}", get(by_id))
}

/// Browse local sources with pagination, search, and filtering.
async fn browse(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<Page<LocalSourceDto>>> {
    let params = RawParams::from(pairs);

    let filter = SourceFilter::from_params(
        params.text("search"),
        &params.list("sourceType"),
        &params.list("state"),
        params.bool_or("activeOnly", true)?,
    )?;
    let page = params.page_request(DEFAULT_BROWSE_SIZE, "name", SOURCE_SORTS)?;

    Ok(Json(state.sources().browse(&filter, &page).await?))
}

/// All local sources for map display, unpaginated.
async fn map(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<Vec<LocalSourceDto>>> {
    let params = RawParams::from(pairs);
    let source_types: Vec<SourceType> = parse_codes("sourceType", &params.list("sourceType"))?;
    let active_only = params.bool_or("activeOnly", true)?;

    Ok(Json(
        state
            .sources()
            .find_all_for_map(source_types, active_only)
            .await?,
    ))
}

/// Local sources near a point, closest first, with computed distances.
async fn nearby(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<Page<LocalSourceDto>>> {
    let params = RawParams::from(pairs);

    let lat = params.float_required("lat")?;
    let lng = params.float_required("lng")?;
    let radius = params.float_or("radius", DEFAULT_RADIUS_MILES)?;
    let source_types: Vec<SourceType> = parse_codes("sourceType", &params.list("sourceType"))?;
    let (page, size) = params.page_size(DEFAULT_BROWSE_SIZE)?;

    Ok(Json(
        state
            .sources()
            .find_nearby(lat, lng, radius, source_types, page, size)
            .await?,
    ))
}

/// Total local source count.
async fn count(State(state): State<AppState>) -> AppResult<Json<i64>> {
    Ok(Json(state.sources().count().await?))
}

/// Get a local source by slug.
async fn by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<LocalSourceDto>> {
    state
        .sources()
        .find_by_slug(&slug)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}

/// Get a local source by ID.
async fn by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<LocalSourceDto>> {
    state
        .sources()
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}
