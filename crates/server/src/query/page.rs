//! Pagination and sort normalization.

use serde::Serialize;

use crate::error::AppError;

/// Default page size for browse lists.
pub const DEFAULT_BROWSE_SIZE: i64 = 24;

/// Default page size for a city page's embedded nearby-source list.
pub const DEFAULT_CITY_SOURCES_SIZE: i64 = 12;

/// Default limit for the upcoming-events homepage teaser.
pub const DEFAULT_UPCOMING_LIMIT: i64 = 6;

/// Default limit for similar-item suggestions.
pub const DEFAULT_SIMILAR_LIMIT: i64 = 4;

/// Sort allow-list for an entity: (wire name, column name) pairs.
pub type SortFields = &'static [(&'static str, &'static str)];

/// Sortable honey fields.
pub const HONEY_SORTS: SortFields = &[
    ("name", "name"),
    ("brand", "brand"),
    ("priceMin", "price_min"),
    ("priceMax", "price_max"),
    ("origin", "origin"),
    ("createdAt", "created_at"),
];

/// Sortable local-source fields.
pub const SOURCE_SORTS: SortFields = &[
    ("name", "name"),
    ("city", "city"),
    ("state", "state"),
    ("createdAt", "created_at"),
];

/// Sortable event fields.
pub const EVENT_SORTS: SortFields = &[
    ("startDate", "start_date"),
    ("name", "name"),
    ("city", "city"),
    ("createdAt", "created_at"),
];

/// A validated pagination/sort request.
///
/// Sort direction is ascending only; the sort field has already been
/// resolved to a column through the entity's allow-list so a bad field
/// fails here instead of surfacing as a storage error.
#[derive(Debug, Clone)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort_column: &'static str,
}

impl PageRequest {
    /// Validate raw pagination input against an entity's sort allow-list.
    pub fn new(page: i64, size: i64, sort: &str, allowed: SortFields) -> Result<Self, AppError> {
        if page < 0 {
            return Err(AppError::InvalidPageRequest(format!(
                "page must be >= 0, got {page}"
            )));
        }
        if size < 1 {
            return Err(AppError::InvalidPageRequest(format!(
                "size must be >= 1, got {size}"
            )));
        }
        let sort_column = allowed
            .iter()
            .find(|(wire, _)| *wire == sort)
            .map(|(_, column)| *column)
            .ok_or_else(|| AppError::InvalidSortField {
                field: sort.to_string(),
            })?;

        Ok(Self {
            page: page as u32,
            size: size as u32,
            sort_column,
        })
    }
}

/// One page of results plus the metadata a pagination UI needs.
///
/// `total_elements` counts every matching record, not just this page, and
/// is invariant across pages of the same query.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: i64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, page: u32, size: u32, total_elements: i64) -> Self {
        Self {
            content,
            page,
            size,
            total_elements,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_to_columns() {
        let req = PageRequest::new(0, 24, "name", HONEY_SORTS).unwrap();
        assert_eq!(req.page, 0);
        assert_eq!(req.size, 24);
        assert_eq!(req.sort_column, "name");

        let req = PageRequest::new(2, 24, "startDate", EVENT_SORTS).unwrap();
        assert_eq!(req.sort_column, "start_date");
    }

    #[test]
    fn camel_case_wire_names_map_to_snake_case_columns() {
        let req = PageRequest::new(0, 10, "priceMin", HONEY_SORTS).unwrap();
        assert_eq!(req.sort_column, "price_min");
    }

    #[test]
    fn negative_page_is_rejected() {
        let err = PageRequest::new(-1, 24, "name", HONEY_SORTS).unwrap_err();
        assert!(matches!(err, AppError::InvalidPageRequest(_)));
    }

    #[test]
    fn zero_size_is_rejected() {
        let err = PageRequest::new(0, 0, "name", HONEY_SORTS).unwrap_err();
        assert!(matches!(err, AppError::InvalidPageRequest(_)));
    }

    #[test]
    fn unknown_sort_field_is_rejected() {
        let err = PageRequest::new(0, 24, "popularity", HONEY_SORTS).unwrap_err();
        match err {
            AppError::InvalidSortField { field } => assert_eq!(field, "popularity"),
            other => panic!("expected InvalidSortField, got {other:?}"),
        }
    }

    #[test]
    fn sort_fields_are_entity_specific() {
        assert!(PageRequest::new(0, 24, "startDate", HONEY_SORTS).is_err());
        assert!(PageRequest::new(0, 24, "priceMin", SOURCE_SORTS).is_err());
    }
}
