//! Raw query-parameter access.
//!
//! The browse endpoints accept repeated multi-value filter parameters
//! (`?origin=USA&origin=CANADA`), which a typed `Query<T>` extractor would
//! collapse to the last occurrence. Handlers instead extract the raw pairs
//! (`Query<Vec<(String, String)>>`) and read them through this helper, which
//! also accepts comma-separated lists in a single occurrence.

use chrono::NaiveDate;

use crate::error::AppError;
use crate::query::page::{PageRequest, SortFields};

/// Raw query pairs in request order.
#[derive(Debug, Default)]
pub struct RawParams(Vec<(String, String)>);

impl From<Vec<(String, String)>> for RawParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }
}

impl RawParams {
    /// First occurrence of a key.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value for a key, splitting comma-separated occurrences.
    pub fn list(&self, key: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .flat_map(|(_, v)| v.split(','))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Optional free-text value, as-is.
    pub fn text(&self, key: &str) -> Option<String> {
        self.first(key).map(str::to_string)
    }

    /// Integer with a default; unparseable input is a client error.
    pub fn int_or(&self, key: &str, default: i64) -> Result<i64, AppError> {
        match self.first(key) {
            None => Ok(default),
            Some(raw) => raw
                .parse()
                .map_err(|_| AppError::BadRequest(format!("{key} must be an integer"))),
        }
    }

    /// Required integer.
    pub fn int_required(&self, key: &str) -> Result<i64, AppError> {
        let raw = self
            .first(key)
            .ok_or_else(|| AppError::BadRequest(format!("{key} is required")))?;
        raw.parse()
            .map_err(|_| AppError::BadRequest(format!("{key} must be an integer")))
    }

    /// Optional float.
    pub fn float_opt(&self, key: &str) -> Result<Option<f64>, AppError> {
        match self.first(key) {
            None => Ok(None),
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| AppError::BadRequest(format!("{key} must be a number"))),
        }
    }

    /// Float with a default.
    pub fn float_or(&self, key: &str, default: f64) -> Result<f64, AppError> {
        Ok(self.float_opt(key)?.unwrap_or(default))
    }

    /// Required float.
    pub fn float_required(&self, key: &str) -> Result<f64, AppError> {
        self.float_opt(key)?
            .ok_or_else(|| AppError::BadRequest(format!("{key} is required")))
    }

    /// Boolean with a default; accepts `true`/`false`.
    pub fn bool_or(&self, key: &str, default: bool) -> Result<bool, AppError> {
        match self.first(key) {
            None => Ok(default),
            Some("true") => Ok(true),
            Some("false") => Ok(false),
            Some(_) => Err(AppError::BadRequest(format!(
                "{key} must be true or false"
            ))),
        }
    }

    /// Optional ISO date (`YYYY-MM-DD`).
    pub fn date_opt(&self, key: &str) -> Result<Option<NaiveDate>, AppError> {
        match self.first(key) {
            None => Ok(None),
            Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map(Some)
                .map_err(|_| AppError::BadRequest(format!("{key} must be an ISO date"))),
        }
    }

    /// Validated `page`/`size` pair for the manual-pagination path.
    pub fn page_size(&self, default_size: i64) -> Result<(u32, u32), AppError> {
        let page = self.page_value("page")?;
        let size = self.page_value_or("size", default_size)?;
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
        Ok((page as u32, size as u32))
    }

    /// Full `page`/`size`/`sort` normalization for the browse path.
    pub fn page_request(
        &self,
        default_size: i64,
        default_sort: &str,
        allowed: SortFields,
    ) -> Result<PageRequest, AppError> {
        let page = self.page_value("page")?;
        let size = self.page_value_or("size", default_size)?;
        let sort = self.first("sort").unwrap_or(default_sort);
        PageRequest::new(page, size, sort, allowed)
    }

    fn page_value(&self, key: &str) -> Result<i64, AppError> {
        self.page_value_or(key, 0)
    }

    fn page_value_or(&self, key: &str, default: i64) -> Result<i64, AppError> {
        match self.first(key) {
            None => Ok(default),
            Some(raw) => raw
                .parse()
                .map_err(|_| AppError::InvalidPageRequest(format!("{key} must be an integer"))),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::query::page::HONEY_SORTS;

    fn params(pairs: &[(&str, &str)]) -> RawParams {
        RawParams::from(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn repeated_keys_collect_in_order() {
        let p = params(&[("origin", "USA"), ("page", "0"), ("origin", "CANADA")]);
        assert_eq!(p.list("origin"), vec!["USA", "CANADA"]);
    }

    #[test]
    fn comma_separated_values_split() {
        let p = params(&[("type", "RAW,CREAMED"), ("type", "COMB")]);
        assert_eq!(p.list("type"), vec!["RAW", "CREAMED", "COMB"]);
    }

    #[test]
    fn blank_list_entries_are_dropped() {
        let p = params(&[("state", "TX,, NY ")]);
        assert_eq!(p.list("state"), vec!["TX", "NY"]);
    }

    #[test]
    fn missing_key_gives_empty_list() {
        let p = params(&[]);
        assert!(p.list("origin").is_empty());
    }

    #[test]
    fn page_request_applies_defaults() {
        let p = params(&[]);
        let req = p.page_request(24, "name", HONEY_SORTS).unwrap();
        assert_eq!(req.page, 0);
        assert_eq!(req.size, 24);
        assert_eq!(req.sort_column, "name");
    }

    #[test]
    fn unparseable_page_is_an_invalid_page_request() {
        let p = params(&[("page", "two")]);
        let err = p.page_request(24, "name", HONEY_SORTS).unwrap_err();
        assert!(matches!(err, AppError::InvalidPageRequest(_)));
    }

    #[test]
    fn negative_page_is_rejected_on_the_manual_path_too() {
        let p = params(&[("page", "-1")]);
        let err = p.page_size(24).unwrap_err();
        assert!(matches!(err, AppError::InvalidPageRequest(_)));
    }

    #[test]
    fn floats_and_bools_parse_with_defaults() {
        let p = params(&[("lat", "30.27"), ("activeOnly", "false")]);
        assert_eq!(p.float_required("lat").unwrap(), 30.27);
        assert_eq!(p.float_or("radius", 50.0).unwrap(), 50.0);
        assert!(!p.bool_or("activeOnly", true).unwrap());
        assert!(p.bool_or("missing", true).unwrap());
    }

    #[test]
    fn missing_required_float_is_a_bad_request() {
        let p = params(&[]);
        let err = p.float_required("lat").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn dates_parse_iso_only() {
        let p = params(&[("fromDate", "2026-08-01")]);
        assert_eq!(
            p.date_opt("fromDate").unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 1)
        );

        let p = params(&[("fromDate", "08/01/2026")]);
        assert!(p.date_opt("fromDate").is_err());
    }
}
