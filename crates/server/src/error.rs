//! Application error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("not found")]
    NotFound,

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("unknown {field} value: {value}")]
    InvalidFilterValue { field: &'static str, value: String },

    #[error("invalid page request: {0}")]
    InvalidPageRequest(String),

    #[error("unknown sort field: {field}")]
    InvalidSortField { field: String },

    #[error("database error")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Internal(_) | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_)
            | AppError::InvalidFilterValue { .. }
            | AppError::InvalidPageRequest(_)
            | AppError::InvalidSortField { .. } => StatusCode::BAD_REQUEST,
        };

        // Log the detail for 5xx responses; the body stays vague.
        let body = match &self {
            AppError::Internal(e) => {
                tracing::error!(error = %e, "internal server error");
                "internal server error".to_string()
            }
            AppError::Database(e) => {
                tracing::error!(error = %e, "database error");
                "internal server error".to_string()
            }
            _ => self.to_string(),
        };

        (status, body).into_response()
    }
}

/// Result type alias using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_400() {
        let cases: Vec<AppError> = vec![
            AppError::BadRequest("lat is required".into()),
            AppError::InvalidFilterValue {
                field: "floralSource",
                value: "DANDELION".into(),
            },
            AppError::InvalidPageRequest("page must be >= 0".into()),
            AppError::InvalidSortField {
                field: "popularity".into(),
            },
        ];
        for err in cases {
            assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(
            AppError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn invalid_filter_value_names_field_and_code() {
        let err = AppError::InvalidFilterValue {
            field: "origin",
            value: "ATLANTIS".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("origin"));
        assert!(msg.contains("ATLANTIS"));
    }
}
