//! Wire DTOs for API responses.
//!
//! Every vocabulary value is exposed twice: the stable machine code (used
//! for filter round-trips) and a separate human display label. Labels come
//! from the vocabulary tables; for stored codes that no longer parse, the
//! underscore-to-space fallback in [`crate::vocab::display_label`] keeps the
//! response shape intact.

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::models::{CityContent, Event, Honey, LocalSource};
use crate::vocab::{self, EventType, FloralSource, HoneyOrigin, HoneyType, SourceType};

/// Honey variety as served to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoneyDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub floral_source: String,
    pub floral_source_display: String,
    #[serde(rename = "type")]
    pub honey_type: String,
    pub type_display: String,
    pub origin: String,
    pub origin_display: String,
    pub region: Option<String>,
    pub flavor_profiles: Option<String>,
    pub image_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub brand: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub certifications: Option<String>,
    pub umf_rating: Option<i32>,
    pub mgo_rating: Option<i32>,
    pub slug: String,
    pub featured: bool,
}

impl From<&Honey> for HoneyDto {
    fn from(honey: &Honey) -> Self {
        Self {
            id: honey.id,
            name: honey.name.clone(),
            description: honey.description.clone(),
            floral_source: honey.floral_source.clone(),
            floral_source_display: vocab::display_label::<FloralSource>(&honey.floral_source),
            honey_type: honey.honey_type.clone(),
            type_display: vocab::display_label::<HoneyType>(&honey.honey_type),
            origin: honey.origin.clone(),
            origin_display: vocab::display_label::<HoneyOrigin>(&honey.origin),
            region: honey.region.clone(),
            flavor_profiles: honey.flavor_profiles.clone(),
            image_url: honey.image_url.clone(),
            thumbnail_url: honey.thumbnail_url.clone(),
            brand: honey.brand.clone(),
            price_min: honey.price_min,
            price_max: honey.price_max,
            certifications: honey.certifications.clone(),
            umf_rating: honey.umf_rating,
            mgo_rating: honey.mgo_rating,
            slug: honey.slug.clone(),
            featured: honey.featured,
        }
    }
}

/// Local source as served to clients.
///
/// `distance` is present only on proximity-search results.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalSourceDto {
    pub id: Uuid,
    pub name: String,
    pub source_type: String,
    pub source_type_display: String,
    pub description: Option<String>,
    pub address: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub hours_json: Option<String>,
    pub hero_image_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub instagram_handle: Option<String>,
    pub facebook_url: Option<String>,
    pub is_active: bool,
    pub slug: String,
    pub distance: Option<f64>,
}

impl LocalSourceDto {
    /// Map a source with a computed distance attached.
    pub fn with_distance(source: &LocalSource, distance: f64) -> Self {
        let mut dto = Self::from(source);
        dto.distance = Some(distance);
        dto
    }
}

impl From<&LocalSource> for LocalSourceDto {
    fn from(source: &LocalSource) -> Self {
        Self {
            id: source.id,
            name: source.name.clone(),
            source_type: source.source_type.clone(),
            source_type_display: vocab::display_label::<SourceType>(&source.source_type),
            description: source.description.clone(),
            address: source.address.clone(),
            city: source.city.clone(),
            state: source.state.clone(),
            zip_code: source.zip_code.clone(),
            latitude: source.latitude,
            longitude: source.longitude,
            phone: source.phone.clone(),
            email: source.email.clone(),
            website: source.website.clone(),
            hours_json: source.hours_json.clone(),
            hero_image_url: source.hero_image_url.clone(),
            thumbnail_url: source.thumbnail_url.clone(),
            instagram_handle: source.instagram_handle.clone(),
            facebook_url: source.facebook_url.clone(),
            is_active: source.is_active,
            slug: source.slug.clone(),
            distance: None,
        }
    }
}

/// Event as served to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub event_type: String,
    pub event_type_display: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub address: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub image_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub link: Option<String>,
    pub local_source_id: Option<Uuid>,
    pub local_source_name: Option<String>,
    pub slug: String,
    pub is_active: bool,
}

impl From<&Event> for EventDto {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id,
            name: event.name.clone(),
            description: event.description.clone(),
            event_type: event.event_type.clone(),
            event_type_display: vocab::display_label::<EventType>(&event.event_type),
            start_date: event.start_date,
            end_date: event.end_date,
            address: event.address.clone(),
            city: event.city.clone(),
            state: event.state.clone(),
            latitude: event.latitude,
            longitude: event.longitude,
            image_url: event.image_url.clone(),
            thumbnail_url: event.thumbnail_url.clone(),
            link: event.link.clone(),
            local_source_id: event.local_source_id,
            local_source_name: event.local_source_name.clone(),
            slug: event.slug.clone(),
            is_active: event.is_active,
        }
    }
}

/// City landing page content as served to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityContentDto {
    pub id: Uuid,
    pub city: String,
    pub state: String,
    pub slug: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub intro_text: Option<String>,
    pub honey_facts: Option<String>,
    pub buying_tips: Option<String>,
    pub best_seasons: Option<String>,
    pub faq_json: Option<String>,
    pub validated: bool,
    pub validation_score: Option<i32>,
    pub nearby_sources_count: i64,
    pub upcoming_events_count: i64,
}

impl CityContentDto {
    /// Full content plus the computed nearby/upcoming counts.
    pub fn full(city: &CityContent, nearby_sources_count: i64, upcoming_events_count: i64) -> Self {
        Self {
            id: city.id,
            city: city.city.clone(),
            state: city.state.clone(),
            slug: city.slug.clone(),
            latitude: city.latitude,
            longitude: city.longitude,
            intro_text: city.intro_text.clone(),
            honey_facts: city.honey_facts.clone(),
            buying_tips: city.buying_tips.clone(),
            best_seasons: city.best_seasons.clone(),
            faq_json: city.faq_json.clone(),
            validated: city.validated,
            validation_score: city.validation_score,
            nearby_sources_count,
            upcoming_events_count,
        }
    }

    /// List-view projection: long-form fields omitted.
    pub fn summary(city: &CityContent) -> Self {
        Self {
            intro_text: None,
            honey_facts: None,
            buying_tips: None,
            best_seasons: None,
            faq_json: None,
            ..Self::full(city, 0, 0)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn honey() -> Honey {
        Honey {
            id: Uuid::nil(),
            name: "Manuka UMF 15+".to_string(),
            description: Some("Dark and complex".to_string()),
            floral_source: "MANUKA".to_string(),
            honey_type: "RAW".to_string(),
            origin: "NEW_ZEALAND".to_string(),
            region: None,
            flavor_profiles: Some("BOLD,EARTHY".to_string()),
            image_url: None,
            thumbnail_url: None,
            brand: Some("Comvita".to_string()),
            price_min: Some(24.99),
            price_max: Some(59.99),
            certifications: Some("UMF_15_PLUS".to_string()),
            umf_rating: Some(15),
            mgo_rating: Some(514),
            slug: "manuka-umf-15-new-zealand".to_string(),
            featured: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn honey_dto_carries_code_and_label_pairs() {
        let dto = HoneyDto::from(&honey());
        assert_eq!(dto.floral_source, "MANUKA");
        assert_eq!(dto.floral_source_display, "Manuka");
        assert_eq!(dto.honey_type, "RAW");
        assert_eq!(dto.type_display, "Raw");
        assert_eq!(dto.origin, "NEW_ZEALAND");
        assert_eq!(dto.origin_display, "New Zealand");
    }

    #[test]
    fn honey_dto_wire_names_match_the_original_api() {
        let dto = HoneyDto::from(&honey());
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("floralSourceDisplay").is_some());
        assert!(json.get("type").is_some());
        assert!(json.get("typeDisplay").is_some());
        assert!(json.get("priceMin").is_some());
        assert!(json.get("honey_type").is_none());
    }

    #[test]
    fn unknown_stored_code_falls_back_instead_of_failing() {
        let mut record = honey();
        record.floral_source = "RETIRED_CODE".to_string();
        let dto = HoneyDto::from(&record);
        assert_eq!(dto.floral_source, "RETIRED_CODE");
        assert_eq!(dto.floral_source_display, "RETIRED CODE");
    }

    #[test]
    fn source_dto_distance_defaults_to_none() {
        let source = LocalSource {
            id: Uuid::nil(),
            name: "Hill Country Apiary".to_string(),
            source_type: "APIARY".to_string(),
            description: None,
            address: "1 Bee Way".to_string(),
            city: Some("Austin".to_string()),
            state: Some("TX".to_string()),
            zip_code: Some("78701".to_string()),
            latitude: 30.2672,
            longitude: -97.7431,
            phone: None,
            email: None,
            website: None,
            hours_json: None,
            hero_image_url: None,
            thumbnail_url: None,
            instagram_handle: None,
            facebook_url: None,
            is_active: true,
            slug: "hill-country-apiary".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let dto = LocalSourceDto::from(&source);
        assert_eq!(dto.distance, None);
        assert_eq!(dto.source_type_display, "Apiary");

        let dto = LocalSourceDto::with_distance(&source, 12.5);
        assert_eq!(dto.distance, Some(12.5));
    }

    #[test]
    fn city_summary_omits_long_form_fields() {
        let city = CityContent {
            id: Uuid::nil(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            slug: "austin-tx".to_string(),
            latitude: Some(30.2672),
            longitude: Some(-97.7431),
            intro_text: Some("Austin is known for...".to_string()),
            honey_facts: Some("Mesquite honey...".to_string()),
            buying_tips: Some("Ask for raw...".to_string()),
            best_seasons: Some("Spring".to_string()),
            faq_json: Some("[]".to_string()),
            validated: true,
            validation_score: Some(9),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let summary = CityContentDto::summary(&city);
        assert_eq!(summary.slug, "austin-tx");
        assert!(summary.intro_text.is_none());
        assert!(summary.faq_json.is_none());
        assert_eq!(summary.nearby_sources_count, 0);

        let full = CityContentDto::full(&city, 7, 3);
        assert!(full.intro_text.is_some());
        assert_eq!(full.nearby_sources_count, 7);
        assert_eq!(full.upcoming_events_count, 3);
    }
}
