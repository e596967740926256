//! Local source operations, including proximity search.

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::LocalSourceDto;
use crate::error::AppResult;
use crate::models::LocalSource;
use crate::query::browse::BrowseQuery;
use crate::query::filter::SourceFilter;
use crate::query::geo::{distances_within, paginate};
use crate::query::page::{Page, PageRequest};
use crate::vocab::SourceType;

/// Local source browse, lookup, map, and nearby operations.
#[derive(Clone)]
pub struct SourceService {
    db: PgPool,
}

impl SourceService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Browse local sources; pagination delegated to the database.
    pub async fn browse(
        &self,
        filter: &SourceFilter,
        page: &PageRequest,
    ) -> AppResult<Page<LocalSourceDto>> {
        let (page_sql, count_sql) = {
            let query = BrowseQuery::new("local_sources", filter.condition(), page.sort_column);
            (query.build(page.page, page.size), query.build_count())
        };

        let rows: Vec<LocalSource> = sqlx::query_as(&page_sql)
            .fetch_all(&self.db)
            .await?;
        let total: i64 = sqlx::query_scalar(&count_sql)
            .fetch_one(&self.db)
            .await?;

        Ok(Page::new(
            rows.iter().map(LocalSourceDto::from).collect(),
            page.page,
            page.size,
            total,
        ))
    }

    /// Sources within `radius_miles` of a point, closest first.
    ///
    /// The distance key is derived per query, so this path reads every
    /// active candidate, computes Haversine distances in memory, and
    /// paginates the filtered ordering manually — deliberately separate
    /// from the storage-paginated browse path. The scan is bounded by
    /// catalog size, which is assumed to fit in memory per request.
    pub async fn find_nearby(
        &self,
        lat: f64,
        lng: f64,
        radius_miles: f64,
        source_types: Vec<SourceType>,
        page: u32,
        size: u32,
    ) -> AppResult<Page<LocalSourceDto>> {
        let filter = SourceFilter::active_of_types(source_types);
        let sql = BrowseQuery::new("local_sources", filter.condition(), "name").build_unpaged();
        let candidates: Vec<LocalSource> = sqlx::query_as(&sql).fetch_all(&self.db).await?;

        let hits = distances_within(&candidates, lat, lng, radius_miles, |source| {
            (source.latitude, source.longitude)
        });

        let ordered: Vec<LocalSourceDto> = hits
            .into_iter()
            .map(|(distance, source)| LocalSourceDto::with_distance(source, distance))
            .collect();
        let (content, total) = paginate(ordered, page, size);

        Ok(Page::new(content, page, size, total))
    }

    /// Every matching source for map display, unpaginated.
    pub async fn find_all_for_map(
        &self,
        source_types: Vec<SourceType>,
        active_only: bool,
    ) -> AppResult<Vec<LocalSourceDto>> {
        let filter = SourceFilter {
            source_types,
            active_only,
            ..SourceFilter::default()
        };
        let sql = BrowseQuery::new("local_sources", filter.condition(), "name").build_unpaged();
        let rows: Vec<LocalSource> = sqlx::query_as(&sql).fetch_all(&self.db).await?;

        Ok(rows.iter().map(LocalSourceDto::from).collect())
    }

    /// Look up a source by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<LocalSourceDto>> {
        let source = LocalSource::find_by_id(&self.db, id).await?;
        Ok(source.as_ref().map(LocalSourceDto::from))
    }

    /// Look up a source by slug.
    pub async fn find_by_slug(&self, slug: &str) -> AppResult<Option<LocalSourceDto>> {
        let source = LocalSource::find_by_slug(&self.db, slug).await?;
        Ok(source.as_ref().map(LocalSourceDto::from))
    }

    /// Total source count.
    pub async fn count(&self) -> AppResult<i64> {
        Ok(LocalSource::count_all(&self.db).await?)
    }
}
