//! Browse query rendering.
//!
//! Renders the storage-paginated SELECT, its unpaginated variant (used as
//! the candidate read for proximity search and the map), and a COUNT over
//! identical predicates. Every ordered query gets an identity tie-break so
//! repeated calls return the same rows in the same order even when the sort
//! key ties.

use sea_query::{Alias, Asterisk, Condition, Expr, ExprTrait, Order, PostgresQueryBuilder, Query,
    SelectStatement};

/// A filtered, sorted query over one entity table.
pub struct BrowseQuery {
    table: &'static str,
    cond: Condition,
    sort_column: &'static str,
}

impl BrowseQuery {
    pub fn new(table: &'static str, cond: Condition, sort_column: &'static str) -> Self {
        Self {
            table,
            cond,
            sort_column,
        }
    }

    fn select(&self) -> SelectStatement {
        let mut query = Query::select();
        query
            .column(Asterisk)
            .from(Alias::new(self.table))
            .cond_where(self.cond.clone());
        query
    }

    fn add_order(&self, query: &mut SelectStatement) {
        query.order_by(Alias::new(self.sort_column), Order::Asc);
        if self.sort_column != "id" {
            query.order_by(Alias::new("id"), Order::Asc);
        }
    }

    /// One page, delegated to the database via LIMIT/OFFSET.
    pub fn build(&self, page: u32, size: u32) -> String {
        let mut query = self.select();
        self.add_order(&mut query);
        query.limit(u64::from(size));
        query.offset(u64::from(page) * u64::from(size));
        query.to_string(PostgresQueryBuilder)
    }

    /// All matching rows, ordered but unpaginated.
    pub fn build_unpaged(&self) -> String {
        let mut query = self.select();
        self.add_order(&mut query);
        query.to_string(PostgresQueryBuilder)
    }

    /// Total count over the same predicates.
    pub fn build_count(&self) -> String {
        let mut query = Query::select();
        query
            .expr(Expr::col(Asterisk).count())
            .from(Alias::new(self.table))
            .cond_where(self.cond.clone());
        query.to_string(PostgresQueryBuilder)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::query::filter::HoneyFilter;
    use sea_query::Cond;

    #[test]
    fn paged_query_has_limit_offset_and_tie_break() {
        let query = BrowseQuery::new("honeys", HoneyFilter::default().condition(), "name");
        let sql = query.build(2, 24);

        assert!(sql.contains("FROM \"honeys\""));
        assert!(sql.contains("LIMIT 24"));
        assert!(sql.contains("OFFSET 48"));
        assert!(
            sql.contains("ORDER BY \"name\" ASC, \"id\" ASC"),
            "missing identity tie-break: {sql}"
        );
    }

    #[test]
    fn count_query_shares_predicates_but_not_pagination() {
        let filter = HoneyFilter {
            price_min: Some(5.0),
            ..HoneyFilter::default()
        };
        let query = BrowseQuery::new("honeys", filter.condition(), "name");
        let sql = query.build_count();

        assert!(sql.contains("COUNT(*)"));
        assert!(sql.contains("\"price_min\" >= 5"));
        assert!(!sql.contains("LIMIT"));
        assert!(!sql.contains("ORDER BY"));
    }

    #[test]
    fn unpaged_query_is_ordered_without_limit() {
        let query = BrowseQuery::new("local_sources", Cond::all(), "name");
        let sql = query.build_unpaged();

        assert!(sql.contains("ORDER BY"));
        assert!(!sql.contains("LIMIT"));
        assert!(!sql.contains("OFFSET"));
    }

    #[test]
    fn page_zero_starts_at_offset_zero() {
        let query = BrowseQuery::new("honeys", Cond::all(), "name");
        let sql = query.build(0, 24);
        assert!(sql.contains("OFFSET 0"));
    }

    #[test]
    fn id_sort_is_not_tie_broken_twice() {
        let query = BrowseQuery::new("honeys", Cond::all(), "id");
        let sql = query.build(0, 10);
        assert_eq!(sql.matches("\"id\" ASC").count(), 1, "got: {sql}");
    }
}
