//! Newsletter subscription records.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Newsletter subscription.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct NewsletterSubscription {
    pub id: Uuid,
    pub email: String,
    pub confirmed: bool,
    pub subscribed_at: DateTime<Utc>,
}

impl NewsletterSubscription {
    /// Whether an email is already subscribed.
    pub async fn exists_by_email(pool: &PgPool, email: &str) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM newsletter_subscriptions WHERE email = $1)",
        )
        .bind(email)
        .fetch_one(pool)
        .await
        .context("failed to check newsletter subscription")?;

        Ok(exists)
    }

    /// Insert a new unconfirmed subscription.
    pub async fn create(pool: &PgPool, email: &str) -> Result<()> {
        sqlx::query(
            "INSERT INTO newsletter_subscriptions (id, email, confirmed, subscribed_at) VALUES ($1, $2, FALSE, $3)",
        )
        .bind(Uuid::now_v7())
        .bind(email)
        .bind(Utc::now())
        .execute(pool)
        .await
        .context("failed to insert newsletter subscription")?;

        Ok(())
    }

    /// Count all subscriptions.
    pub async fn count_all(pool: &PgPool) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM newsletter_subscriptions")
            .fetch_one(pool)
            .await
            .context("failed to count newsletter subscriptions")?;

        Ok(count)
    }
}
