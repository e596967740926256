//! Honey catalog endpoints.

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::dto::HoneyDto;
use crate::error::{AppError, AppResult};
use crate::query::filter::HoneyFilter;
use crate::query::page::{DEFAULT_BROWSE_SIZE, DEFAULT_SIMILAR_LIMIT, HONEY_SORTS, Page};
use crate::query::params::RawParams;
use crate::state::AppState;

/// Create the honey router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/honeys", get(browse))
        .route("/api/honeys/featured", get(featured))
        .route("/api/honeys/count", get(count))
        .route("/api/honeys/{slug}", get(by_slug))
        .route("/api/honeys/{slug}/similar", get(similar))
}

/// Browse honeys with pagination, search, and filtering.
async fn browse(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<Page<HoneyDto>>> {
    let params = RawParams::from(pairs);

    let filter = HoneyFilter::from_params(
        params.text("search"),
        &params.list("origin"),
        &params.list("floralSource"),
        &params.list("type"),
        params.float_opt("priceMin")?,
        params.float_opt("priceMax")?,
    )?;
    let page = params.page_request(DEFAULT_BROWSE_SIZE, "name", HONEY_SORTS)?;

    Ok(Json(state.honeys().browse(&filter, &page).await?))
}

/// Featured honeys for the homepage.
async fn featured(State(state): State<AppState>) -> AppResult<Json<Vec<HoneyDto>>> {
    Ok(Json(state.honeys().find_featured().await?))
}

/// Total honey count.
async fn count(State(state): State<AppState>) -> AppResult<Json<i64>> {
    Ok(Json(state.honeys().count().await?))
}

/// Get a honey by slug.
async fn by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<HoneyDto>> {
    state
        .honeys()
        .find_by_slug(&slug)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}

/// Similar honeys based on floral source and primary flavor.
async fn similar(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<Vec<HoneyDto>>> {
    let params = RawParams::from(pairs);
    let limit = params.int_or("limit", DEFAULT_SIMILAR_LIMIT)?;
    if limit < 0 {
        return Err(AppError::BadRequest("limit must be >= 0".to_string()));
    }

    Ok(Json(state.honeys().find_similar(&slug, limit).await?))
}
