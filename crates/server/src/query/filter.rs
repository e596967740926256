//! Filter predicate builders.
//!
//! Each builder turns a set of optional, typed parameters into a
//! `sea_query::Condition` with AND semantics across dimensions and OR semantics
//! inside free-text search. Absence of a parameter adds no clause; a filter
//! with nothing set renders no WHERE at all. Enum codes are resolved against
//! their vocabulary up front, so an unknown code fails before any SQL runs.

use chrono::NaiveDate;
use sea_query::{Alias, Cond, Condition, Expr, ExprTrait, Func, SimpleExpr};

use crate::error::AppError;
use crate::vocab::{EventType, FloralSource, HoneyOrigin, HoneyType, SourceType, Vocabulary};

/// Resolve a list of external codes against a vocabulary.
pub fn parse_codes<V: Vocabulary>(
    field: &'static str,
    codes: &[String],
) -> Result<Vec<V>, AppError> {
    codes
        .iter()
        .map(|code| {
            V::parse(code).ok_or_else(|| AppError::InvalidFilterValue {
                field,
                value: code.clone(),
            })
        })
        .collect()
}

/// Escape SQL LIKE wildcard characters (`%`, `_`, `\`) in a value.
fn escape_like_wildcards(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Case-insensitive substring match on a column.
fn contains(column: &'static str, needle: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like_wildcards(&needle.to_lowercase()));
    Expr::expr(Func::lower(Expr::col(Alias::new(column)))).like(pattern)
}

/// `column IN (codes)` over resolved vocabulary values.
fn codes_in<V: Vocabulary>(column: &'static str, values: &[V]) -> SimpleExpr {
    Expr::col(Alias::new(column)).is_in(values.iter().map(|v| v.code()))
}

/// Free-text OR across a fixed column set, skipped entirely when blank.
fn text_search(columns: &'static [&'static str], search: Option<&str>) -> Option<Condition> {
    let needle = search?.trim();
    if needle.is_empty() {
        return None;
    }
    let mut any = Cond::any();
    for column in columns {
        any = any.add(contains(column, needle));
    }
    Some(any)
}

/// Honey browse filters.
#[derive(Debug, Clone, Default)]
pub struct HoneyFilter {
    pub search: Option<String>,
    pub origins: Vec<HoneyOrigin>,
    pub floral_sources: Vec<FloralSource>,
    pub types: Vec<HoneyType>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
}

impl HoneyFilter {
    /// Build from raw request parameters, resolving enum codes.
    pub fn from_params(
        search: Option<String>,
        origins: &[String],
        floral_sources: &[String],
        types: &[String],
        price_min: Option<f64>,
        price_max: Option<f64>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            search,
            origins: parse_codes("origin", origins)?,
            floral_sources: parse_codes("floralSource", floral_sources)?,
            types: parse_codes("type", types)?,
            // Range params are shape-checked only; min > max passes through.
            price_min,
            price_max,
        })
    }

    pub fn condition(&self) -> Condition {
        let mut cond = Cond::all();
        if let Some(search) = text_search(&["name", "description", "brand"], self.search.as_deref())
        {
            cond = cond.add(search);
        }
        if !self.origins.is_empty() {
            cond = cond.add(codes_in("origin", &self.origins));
        }
        if !self.floral_sources.is_empty() {
            cond = cond.add(codes_in("floral_source", &self.floral_sources));
        }
        if !self.types.is_empty() {
            cond = cond.add(codes_in("honey_type", &self.types));
        }
        if let Some(min) = self.price_min {
            cond = cond.add(Expr::col(Alias::new("price_min")).gte(min));
        }
        if let Some(max) = self.price_max {
            cond = cond.add(Expr::col(Alias::new("price_max")).lte(max));
        }
        cond
    }
}

/// Local source browse filters.
#[derive(Debug, Clone, Default)]
pub struct SourceFilter {
    pub search: Option<String>,
    pub source_types: Vec<SourceType>,
    pub states: Vec<String>,
    pub active_only: bool,
}

impl SourceFilter {
    pub fn from_params(
        search: Option<String>,
        source_types: &[String],
        states: &[String],
        active_only: bool,
    ) -> Result<Self, AppError> {
        Ok(Self {
            search,
            source_types: parse_codes("sourceType", source_types)?,
            states: states.to_vec(),
            active_only,
        })
    }

    /// Type filter plus active-only, as used by proximity search and the map.
    pub fn active_of_types(source_types: Vec<SourceType>) -> Self {
        Self {
            source_types,
            active_only: true,
            ..Self::default()
        }
    }

    pub fn condition(&self) -> Condition {
        let mut cond = Cond::all();
        if let Some(search) = text_search(
            &["name", "description", "city", "state", "zip_code"],
            self.search.as_deref(),
        ) {
            cond = cond.add(search);
        }
        if !self.source_types.is_empty() {
            cond = cond.add(codes_in("source_type", &self.source_types));
        }
        if !self.states.is_empty() {
            cond = cond.add(Expr::col(Alias::new("state")).is_in(self.states.clone()));
        }
        // active_only=false means "no restriction", never "inactive only".
        if self.active_only {
            cond = cond.add(Expr::col(Alias::new("is_active")).eq(true));
        }
        cond
    }
}

/// Event browse filters.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub search: Option<String>,
    pub event_types: Vec<EventType>,
    pub states: Vec<String>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub active_only: bool,
}

impl EventFilter {
    pub fn from_params(
        search: Option<String>,
        event_types: &[String],
        states: &[String],
        from_date: Option<NaiveDate>,
        to_date: Option<NaiveDate>,
        active_only: bool,
    ) -> Result<Self, AppError> {
        Ok(Self {
            search,
            event_types: parse_codes("eventType", event_types)?,
            states: states.to_vec(),
            from_date,
            to_date,
            active_only,
        })
    }

    pub fn condition(&self) -> Condition {
        let mut cond = Cond::all();
        if let Some(search) = text_search(&["name", "description", "city"], self.search.as_deref())
        {
            cond = cond.add(search);
        }
        if !self.event_types.is_empty() {
            cond = cond.add(codes_in("event_type", &self.event_types));
        }
        if !self.states.is_empty() {
            cond = cond.add(Expr::col(Alias::new("state")).is_in(self.states.clone()));
        }
        if let Some(from) = self.from_date {
            cond = cond.add(Expr::col(Alias::new("start_date")).gte(from));
        }
        if let Some(to) = self.to_date {
            cond = cond.add(Expr::col(Alias::new("start_date")).lte(to));
        }
        if self.active_only {
            cond = cond.add(Expr::col(Alias::new("is_active")).eq(true));
        }
        cond
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use sea_query::{Alias, PostgresQueryBuilder, Query};

    fn render(cond: Condition) -> String {
        Query::select()
            .column(sea_query::Asterisk)
            .from(Alias::new("t"))
            .cond_where(cond)
            .to_string(PostgresQueryBuilder)
    }

    #[test]
    fn empty_filter_renders_no_where_clause() {
        let sql = render(HoneyFilter::default().condition());
        assert!(!sql.contains("WHERE"), "unexpected WHERE in: {sql}");
    }

    #[test]
    fn blank_search_adds_no_predicate() {
        let filter = HoneyFilter {
            search: Some("   ".to_string()),
            ..HoneyFilter::default()
        };
        let sql = render(filter.condition());
        assert!(!sql.contains("WHERE"), "unexpected WHERE in: {sql}");
    }

    #[test]
    fn search_ors_across_text_columns_case_insensitively() {
        let filter = HoneyFilter {
            search: Some("Manuka".to_string()),
            ..HoneyFilter::default()
        };
        let sql = render(filter.condition());
        assert!(sql.contains("LOWER"), "missing LOWER in: {sql}");
        assert!(sql.contains("%manuka%"), "missing lowered pattern in: {sql}");
        assert!(sql.contains("OR"), "missing OR in: {sql}");
        for column in ["name", "description", "brand"] {
            assert!(sql.contains(column), "missing {column} in: {sql}");
        }
    }

    #[test]
    fn enum_codes_render_as_in_list() {
        let filter = HoneyFilter::from_params(
            None,
            &[],
            &["CLOVER".to_string(), "MANUKA".to_string()],
            &[],
            None,
            None,
        )
        .unwrap();
        let sql = render(filter.condition());
        assert!(sql.contains("\"floral_source\" IN"), "missing IN in: {sql}");
        assert!(sql.contains("'CLOVER'"));
        assert!(sql.contains("'MANUKA'"));
    }

    #[test]
    fn unknown_enum_code_fails_naming_field_and_code() {
        let err = HoneyFilter::from_params(
            None,
            &["ATLANTIS".to_string()],
            &[],
            &[],
            None,
            None,
        )
        .unwrap_err();
        match err {
            AppError::InvalidFilterValue { field, value } => {
                assert_eq!(field, "origin");
                assert_eq!(value, "ATLANTIS");
            }
            other => panic!("expected InvalidFilterValue, got {other:?}"),
        }
    }

    #[test]
    fn price_bounds_are_independent() {
        let filter = HoneyFilter {
            price_min: Some(10.0),
            ..HoneyFilter::default()
        };
        let sql = render(filter.condition());
        assert!(sql.contains("\"price_min\" >= 10"), "got: {sql}");
        assert!(!sql.contains("price_max"), "got: {sql}");

        // Inverted bounds pass through unvalidated.
        let filter = HoneyFilter {
            price_min: Some(50.0),
            price_max: Some(10.0),
            ..HoneyFilter::default()
        };
        let sql = render(filter.condition());
        assert!(sql.contains(">= 50"));
        assert!(sql.contains("<= 10"));
    }

    #[test]
    fn dimensions_combine_with_and() {
        let filter = HoneyFilter::from_params(
            Some("raw".to_string()),
            &["USA".to_string()],
            &[],
            &["RAW".to_string()],
            None,
            Some(30.0),
        )
        .unwrap();
        let sql = render(filter.condition());
        assert!(sql.contains("AND"), "got: {sql}");
        assert!(sql.contains("\"origin\" IN ('USA')"));
        assert!(sql.contains("\"honey_type\" IN ('RAW')"));
        assert!(sql.contains("\"price_max\" <= 30"));
    }

    #[test]
    fn like_wildcards_in_search_are_literal() {
        let filter = SourceFilter {
            search: Some("100%_raw".to_string()),
            ..SourceFilter::default()
        };
        let sql = render(filter.condition());
        assert!(
            !sql.contains("%100%_raw%"),
            "wildcards must not pass through unescaped: {sql}"
        );
    }

    #[test]
    fn active_only_false_adds_no_clause() {
        let filter = SourceFilter::default();
        let sql = render(filter.condition());
        assert!(!sql.contains("is_active"), "got: {sql}");

        let filter = SourceFilter {
            active_only: true,
            ..SourceFilter::default()
        };
        let sql = render(filter.condition());
        assert!(sql.contains("\"is_active\" = TRUE"), "got: {sql}");
    }

    #[test]
    fn source_search_covers_address_columns() {
        let filter = SourceFilter {
            search: Some("austin".to_string()),
            ..SourceFilter::default()
        };
        let sql = render(filter.condition());
        for column in ["name", "description", "city", "state", "zip_code"] {
            assert!(sql.contains(column), "missing {column} in: {sql}");
        }
    }

    #[test]
    fn event_date_range_bounds_start_date() {
        let filter = EventFilter {
            from_date: NaiveDate::from_ymd_opt(2026, 6, 1),
            to_date: NaiveDate::from_ymd_opt(2026, 6, 30),
            ..EventFilter::default()
        };
        let sql = render(filter.condition());
        assert!(sql.contains("\"start_date\" >="), "got: {sql}");
        assert!(sql.contains("\"start_date\" <="), "got: {sql}");
        assert!(sql.contains("2026-06-01"));
        assert!(sql.contains("2026-06-30"));
    }

    #[test]
    fn state_filter_is_a_plain_string_in_list() {
        let filter = EventFilter {
            states: vec!["TX".to_string(), "NY".to_string()],
            ..EventFilter::default()
        };
        let sql = render(filter.condition());
        assert!(sql.contains("\"state\" IN ('TX', 'NY')"), "got: {sql}");
    }
}
