//! Newsletter subscription operations.

use sqlx::PgPool;

use crate::error::AppResult;
use crate::models::NewsletterSubscription;

/// Newsletter signup.
#[derive(Clone)]
pub struct NewsletterService {
    db: PgPool,
}

impl NewsletterService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Subscribe an email. Returns true when newly subscribed, false when
    /// the address was already on the list.
    pub async fn subscribe(&self, email: &str) -> AppResult<bool> {
        let normalized = email.trim().to_lowercase();

        if NewsletterSubscription::exists_by_email(&self.db, &normalized).await? {
            return Ok(false);
        }

        NewsletterSubscription::create(&self.db, &normalized).await?;
        Ok(true)
    }

    /// Total subscriber count.
    pub async fn count(&self) -> AppResult<i64> {
        Ok(NewsletterSubscription::count_all(&self.db).await?)
    }
}
