//! Filter options endpoint for the faceted search UI.

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;
use crate::vocab::{
    Certification, EnumOption, FlavorProfile, FloralSource, HoneyOrigin, HoneyType, SourceType,
    options,
};

/// Every controlled vocabulary projected into selectable filter options.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptionsResponse {
    pub floral_sources: Vec<EnumOption>,
    pub origins: Vec<EnumOption>,
    pub types: Vec<EnumOption>,
    pub flavor_profiles: Vec<EnumOption>,
    pub source_types: Vec<EnumOption>,
    pub certifications: Vec<EnumOption>,
}

/// All available filter options with display names.
///
/// Counts are 0 until per-facet aggregation lands.
async fn filter_options() -> Json<FilterOptionsResponse> {
    Json(FilterOptionsResponse {
        floral_sources: options::<FloralSource>(),
        origins: options::<HoneyOrigin>(),
        types: options::<HoneyType>(),
        flavor_profiles: options::<FlavorProfile>(),
        source_types: options::<SourceType>(),
        certifications: options::<Certification>(),
    })
}

/// Create the filter options router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/filters/options", get(filter_options))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::vocab::Vocabulary;

    #[tokio::test]
    async fn every_category_matches_its_vocabulary_size() {
        let Json(response) = filter_options().await;

        assert_eq!(response.floral_sources.len(), FloralSource::all().len());
        assert_eq!(response.origins.len(), HoneyOrigin::all().len());
        assert_eq!(response.types.len(), HoneyType::all().len());
        assert_eq!(response.flavor_profiles.len(), FlavorProfile::all().len());
        assert_eq!(response.source_types.len(), SourceType::all().len());
        assert_eq!(response.certifications.len(), Certification::all().len());
    }

    #[tokio::test]
    async fn options_carry_codes_labels_and_zero_counts() {
        let Json(response) = filter_options().await;

        let clover = response
            .floral_sources
            .iter()
            .find(|o| o.value == "CLOVER")
            .unwrap();
        assert_eq!(clover.display_name, "Clover");
        assert_eq!(clover.count, 0);

        assert!(response.origins.iter().any(|o| o.value == "NEW_ZEALAND"));
        assert!(
            response
                .origins
                .iter()
                .any(|o| o.display_name == "New Zealand")
        );
        assert!(
            response
                .source_types
                .iter()
                .any(|o| o.display_name == "Beekeeper")
        );

        let all = response
            .floral_sources
            .iter()
            .chain(&response.origins)
            .chain(&response.types)
            .chain(&response.flavor_profiles)
            .chain(&response.source_types)
            .chain(&response.certifications);
        for option in all {
            assert!(!option.value.is_empty());
            assert!(!option.display_name.is_empty());
            assert_eq!(option.count, 0);
        }
    }

    #[tokio::test]
    async fn response_serializes_with_camel_case_categories() {
        let Json(response) = filter_options().await;
        let json = serde_json::to_value(&response).unwrap();

        for key in [
            "floralSources",
            "origins",
            "types",
            "flavorProfiles",
            "sourceTypes",
            "certifications",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(
            json["floralSources"][0]["count"],
            serde_json::Value::from(0)
        );
        assert!(json["floralSources"][0].get("displayName").is_some());
    }
}
