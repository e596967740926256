//! Event endpoints.

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

use crate::dto::EventDto;
use crate::error::{AppError, AppResult};
use crate::query::filter::EventFilter;
use crate::query::page::{DEFAULT_BROWSE_SIZE, DEFAULT_UPCOMING_LIMIT, EVENT_SORTS, Page};
use crate::query::params::RawParams;
use crate::state::AppState;

/// Create the event router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/events", get(browse))
        .route("/api/events/upcoming", get(upcoming))
        .route("/api/events/calendar", get(calendar))
        .route("/api/events/count", get(count))
        .route("/api/events/slug/{slug}", get(by_slug))
        .route("/api/events/{id}", get(by_id))
}

/// Browse events with pagination, search, and filtering.
async fn browse(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<Page<EventDto>>> {
    let params = RawParams::from(pairs);

    let filter = EventFilter::from_params(
        params.text("search"),
        &params.list("eventType"),
        &params.list("state"),
        params.date_opt("fromDate")?,
        params.date_opt("toDate")?,
        params.bool_or("activeOnly", true)?,
    )?;
    let page = params.page_request(DEFAULT_BROWSE_SIZE, "startDate", EVENT_SORTS)?;

    Ok(Json(state.events().browse(&filter, &page).await?))
}

/// Upcoming events teaser.
async fn upcoming(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<Vec<EventDto>>> {
    let params = RawParams::from(pairs);
    let limit = params.int_or("limit", DEFAULT_UPCOMING_LIMIT)?;
    if limit < 0 {
        return Err(AppError::BadRequest("limit must be >= 0".to_string()));
    }

    Ok(Json(state.events().find_upcoming(limit).await?))
}

/// Events for a calendar month.
async fn calendar(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<Vec<EventDto>>> {
    let params = RawParams::from(pairs);
    let year = params.int_required("year")?;
    let month = params.int_required("month")?;
    if !(1..=12).contains(&month) {
        return Err(AppError::BadRequest(
            "month must be between 1 and 12".to_string(),
        ));
    }

    Ok(Json(
        state.events().find_by_month(year as i32, month as i32).await?,
    ))
}

/// Total event count.
async fn count(State(state): State<AppState>) -> AppResult<Json<i64>> {
    Ok(Json(state.events().count().await?))
}

/// Get an event by slug.
async fn by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<EventDto>> {
    state
        .events()
        .find_by_slug(&slug)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}

/// Get an event by ID.
async fn by_id(State(state): State<AppState>, Path(id): Path<Uuid>) -> AppResult<Json<EventDto>> {
    state
        .events()
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}
