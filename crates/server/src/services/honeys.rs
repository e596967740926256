//! Honey catalog operations.

use sqlx::PgPool;

use crate::dto::HoneyDto;
use crate::error::AppResult;
use crate::models::Honey;
use crate::query::browse::BrowseQuery;
use crate::query::filter::HoneyFilter;
use crate::query::page::{Page, PageRequest};

/// Honey browse, lookup, and similarity operations.
#[derive(Clone)]
pub struct HoneyService {
    db: PgPool,
}

impl HoneyService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Browse honeys with search and filters; pagination is delegated to
    /// the database, with a COUNT over identical predicates for the total.
    pub async fn browse(
        &self,
        filter: &HoneyFilter,
        page: &PageRequest,
    ) -> AppResult<Page<HoneyDto>> {
        let (page_sql, count_sql) = {
            let query = BrowseQuery::new("honeys", filter.condition(), page.sort_column);
            (query.build(page.page, page.size), query.build_count())
        };

        let rows: Vec<Honey> = sqlx::query_as(&page_sql)
            .fetch_all(&self.db)
            .await?;
        let total: i64 = sqlx::query_scalar(&count_sql)
            .fetch_one(&self.db)
            .await?;

        Ok(Page::new(
            rows.iter().map(HoneyDto::from).collect(),
            page.page,
            page.size,
            total,
        ))
    }

    /// Featured honeys for the homepage carousel, unpaginated.
    pub async fn find_featured(&self) -> AppResult<Vec<HoneyDto>> {
        let rows = Honey::find_featured(&self.db).await?;
        Ok(rows.iter().map(HoneyDto::from).collect())
    }

    /// Look up a honey by slug.
    pub async fn find_by_slug(&self, slug: &str) -> AppResult<Option<HoneyDto>> {
        let honey = Honey::find_by_slug(&self.db, slug).await?;
        Ok(honey.as_ref().map(HoneyDto::from))
    }

    /// Honeys similar to the one behind `slug`: same floral source plus the
    /// anchor's primary (first) flavor token, anchor excluded.
    ///
    /// An unknown slug yields an empty list, not an error — "show nothing"
    /// is the intended fallback for the suggestions strip.
    pub async fn find_similar(&self, slug: &str, limit: i64) -> AppResult<Vec<HoneyDto>> {
        let Some(anchor) = Honey::find_by_slug(&self.db, slug).await? else {
            return Ok(Vec::new());
        };

        let rows = Honey::find_similar(
            &self.db,
            anchor.id,
            &anchor.floral_source,
            anchor.primary_flavor(),
            limit,
        )
        .await?;

        Ok(rows.iter().map(HoneyDto::from).collect())
    }

    /// Total honey count.
    pub async fn count(&self) -> AppResult<i64> {
        Ok(Honey::count_all(&self.db).await?)
    }
}
