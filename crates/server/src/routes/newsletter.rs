//! Newsletter endpoints.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Subscription request body.
#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
}

/// Subscription outcome.
#[derive(Debug, Serialize)]
pub struct SubscribeResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// Minimal structural check: something@domain.tld, no whitespace.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
}

/// Subscribe to the newsletter.
async fn subscribe(
    State(state): State<AppState>,
    Json(request): Json<SubscribeRequest>,
) -> AppResult<Json<SubscribeResponse>> {
    let email = request.email.trim();
    if email.is_empty() {
        return Err(AppError::BadRequest("email is required".to_string()));
    }
    if !is_valid_email(email) {
        return Err(AppError::BadRequest(
            "email must be a valid address".to_string(),
        ));
    }

    let newly_subscribed = state.newsletter().subscribe(email).await?;

    let response = if newly_subscribed {
        SubscribeResponse {
            status: "success",
            message: "Successfully subscribed! You'll receive honey tips and updates.",
        }
    } else {
        SubscribeResponse {
            status: "exists",
            message: "You're already subscribed! Check your inbox for our latest updates.",
        }
    };

    Ok(Json(response))
}

/// Create the newsletter router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/newsletter/subscribe", post(subscribe))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn plausible_addresses_pass() {
        assert!(is_valid_email("bee@example.com"));
        assert!(is_valid_email("first.last@mail.example.co.uk"));
    }

    #[test]
    fn malformed_addresses_fail() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("bee@"));
        assert!(!is_valid_email("bee@localhost"));
        assert!(!is_valid_email("bee@.com"));
        assert!(!is_valid_email("bee hive@example.com"));
    }
}
