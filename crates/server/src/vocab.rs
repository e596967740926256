//! Controlled vocabularies for catalog fields.
//!
//! Each vocabulary is a closed enum whose variants carry a stable machine
//! code (the wire value used for filter round-trips) and a human display
//! label. Parsing from an external code string is partial: unknown codes
//! are rejected at the filter boundary, never silently widened.

use serde::Serialize;

/// A closed set of codes with display labels.
pub trait Vocabulary: Copy + Sized + 'static {
    /// Every variant in declaration order.
    fn all() -> &'static [Self];

    /// Stable machine code (e.g. `ORANGE_BLOSSOM`).
    fn code(self) -> &'static str;

    /// Human display label (e.g. `Orange Blossom`).
    fn label(self) -> &'static str;

    /// Resolve an external code string. Unknown codes return `None`.
    fn parse(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.code() == code)
    }
}

/// One selectable value of a vocabulary, as exposed to the filter UI.
///
/// `count` is a placeholder for per-facet aggregation and is always 0.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumOption {
    pub value: &'static str,
    pub display_name: &'static str,
    pub count: i64,
}

/// Project a whole vocabulary into filter options.
pub fn options<V: Vocabulary>() -> Vec<EnumOption> {
    V::all()
        .iter()
        .map(|v| EnumOption {
            value: v.code(),
            display_name: v.label(),
            count: 0,
        })
        .collect()
}

/// Floral sources, based on the UC Davis honey flavor wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloralSource {
    Clover,
    Wildflower,
    Manuka,
    OrangeBlossom,
    Buckwheat,
    Acacia,
    Lavender,
    Tupelo,
    Sage,
    Sourwood,
    Eucalyptus,
    Blueberry,
    Avocado,
    Linden,
    Chestnut,
    Heather,
    Other,
}

impl Vocabulary for FloralSource {
    fn all() -> &'static [Self] {
        &[
            Self::Clover,
            Self::Wildflower,
            Self::Manuka,
            Self::OrangeBlossom,
            Self::Buckwheat,
            Self::Acacia,
            Self::Lavender,
            Self::Tupelo,
            Self::Sage,
            Self::Sourwood,
            Self::Eucalyptus,
            Self::Blueberry,
            Self::Avocado,
            Self::Linden,
            Self::Chestnut,
            Self::Heather,
            Self::Other,
        ]
    }

    fn code(self) -> &'static str {
        match self {
            Self::Clover => "CLOVER",
            Self::Wildflower => "WILDFLOWER",
            Self::Manuka => "MANUKA",
            Self::OrangeBlossom => "ORANGE_BLOSSOM",
            Self::Buckwheat => "BUCKWHEAT",
            Self::Acacia => "ACACIA",
            Self::Lavender => "LAVENDER",
            Self::Tupelo => "TUPELO",
            Self::Sage => "SAGE",
            Self::Sourwood => "SOURWOOD",
            Self::Eucalyptus => "EUCALYPTUS",
            Self::Blueberry => "BLUEBERRY",
            Self::Avocado => "AVOCADO",
            Self::Linden => "LINDEN",
            Self::Chestnut => "CHESTNUT",
            Self::Heather => "HEATHER",
            Self::Other => "OTHER",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Clover => "Clover",
            Self::Wildflower => "Wildflower",
            Self::Manuka => "Manuka",
            Self::OrangeBlossom => "Orange Blossom",
            Self::Buckwheat => "Buckwheat",
            Self::Acacia => "Acacia",
            Self::Lavender => "Lavender",
            Self::Tupelo => "Tupelo",
            Self::Sage => "Sage",
            Self::Sourwood => "Sourwood",
            Self::Eucalyptus => "Eucalyptus",
            Self::Blueberry => "Blueberry",
            Self::Avocado => "Avocado",
            Self::Linden => "Linden",
            Self::Chestnut => "Chestnut",
            Self::Heather => "Heather",
            Self::Other => "Other",
        }
    }
}

/// Country or region of origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoneyOrigin {
    Usa,
    NewZealand,
    Australia,
    Argentina,
    Mexico,
    Canada,
    Brazil,
    Greece,
    Turkey,
    Spain,
    France,
    Italy,
    Hungary,
    Germany,
    Uk,
    Other,
}

impl Vocabulary for HoneyOrigin {
    fn all() -> &'static [Self] {
        &[
            Self::Usa,
            Self::NewZealand,
            Self::Australia,
            Self::Argentina,
            Self::Mexico,
            Self::Canada,
            Self::Brazil,
            Self::Greece,
            Self::Turkey,
            Self::Spain,
            Self::France,
            Self::Italy,
            Self::Hungary,
            Self::Germany,
            Self::Uk,
            Self::Other,
        ]
    }

    fn code(self) -> &'static str {
        match self {
            Self::Usa => "USA",
            Self::NewZealand => "NEW_ZEALAND",
            Self::Australia => "AUSTRALIA",
            Self::Argentina => "ARGENTINA",
            Self::Mexico => "MEXICO",
            Self::Canada => "CANADA",
            Self::Brazil => "BRAZIL",
            Self::Greece => "GREECE",
            Self::Turkey => "TURKEY",
            Self::Spain => "SPAIN",
            Self::France => "FRANCE",
            Self::Italy => "ITALY",
            Self::Hungary => "HUNGARY",
            Self::Germany => "GERMANY",
            Self::Uk => "UK",
            Self::Other => "OTHER",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Usa => "USA",
            Self::NewZealand => "New Zealand",
            Self::Australia => "Australia",
            Self::Argentina => "Argentina",
            Self::Mexico => "Mexico",
            Self::Canada => "Canada",
            Self::Brazil => "Brazil",
            Self::Greece => "Greece",
            Self::Turkey => "Turkey",
            Self::Spain => "Spain",
            Self::France => "France",
            Self::Italy => "Italy",
            Self::Hungary => "Hungary",
            Self::Germany => "Germany",
            Self::Uk => "United Kingdom",
            Self::Other => "Other",
        }
    }
}

/// Processing types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoneyType {
    Raw,
    Filtered,
    Pasteurized,
    Creamed,
    Comb,
    Infused,
    Organic,
}

impl Vocabulary for HoneyType {
    fn all() -> &'static [Self] {
        &[
            Self::Raw,
            Self::Filtered,
            Self::Pasteurized,
            Self::Creamed,
            Self::Comb,
            Self::Infused,
            Self::Organic,
        ]
    }

    fn code(self) -> &'static str {
        match self {
            Self::Raw => "RAW",
            Self::Filtered => "FILTERED",
            Self::Pasteurized => "PASTEURIZED",
            Self::Creamed => "CREAMED",
            Self::Comb => "COMB",
            Self::Infused => "INFUSED",
            Self::Organic => "ORGANIC",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Raw => "Raw",
            Self::Filtered => "Filtered",
            Self::Pasteurized => "Pasteurized",
            Self::Creamed => "Creamed",
            Self::Comb => "Comb",
            Self::Infused => "Infused",
            Self::Organic => "Organic",
        }
    }
}

/// Simplified flavor profile categories for multi-select filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlavorProfile {
    Sweet,
    Floral,
    Fruity,
    Earthy,
    Bold,
    Spicy,
    Mild,
    Complex,
}

impl Vocabulary for FlavorProfile {
    fn all() -> &'static [Self] {
        &[
            Self::Sweet,
            Self::Floral,
            Self::Fruity,
            Self::Earthy,
            Self::Bold,
            Self::Spicy,
            Self::Mild,
            Self::Complex,
        ]
    }

    fn code(self) -> &'static str {
        match self {
            Self::Sweet => "SWEET",
            Self::Floral => "FLORAL",
            Self::Fruity => "FRUITY",
            Self::Earthy => "EARTHY",
            Self::Bold => "BOLD",
            Self::Spicy => "SPICY",
            Self::Mild => "MILD",
            Self::Complex => "COMPLEX",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Sweet => "Sweet",
            Self::Floral => "Floral",
            Self::Fruity => "Fruity",
            Self::Earthy => "Earthy",
            Self::Bold => "Bold",
            Self::Spicy => "Spicy",
            Self::Mild => "Mild",
            Self::Complex => "Complex",
        }
    }
}

/// Kinds of honey-related events.
///
/// Filterable like the rest, but not part of the filter-options projection;
/// the events page ships its own fixed type list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Festival,
    Market,
    Class,
    Tasting,
    Tour,
    Fair,
    Expo,
    Conference,
}

impl Vocabulary for EventType {
    fn all() -> &'static [Self] {
        &[
            Self::Festival,
            Self::Market,
            Self::Class,
            Self::Tasting,
            Self::Tour,
            Self::Fair,
            Self::Expo,
            Self::Conference,
        ]
    }

    fn code(self) -> &'static str {
        match self {
            Self::Festival => "FESTIVAL",
            Self::Market => "MARKET",
            Self::Class => "CLASS",
            Self::Tasting => "TASTING",
            Self::Tour => "TOUR",
            Self::Fair => "FAIR",
            Self::Expo => "EXPO",
            Self::Conference => "CONFERENCE",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Festival => "Festival",
            Self::Market => "Market",
            Self::Class => "Class",
            Self::Tasting => "Tasting",
            Self::Tour => "Tour",
            Self::Fair => "Fair",
            Self::Expo => "Expo",
            Self::Conference => "Conference",
        }
    }
}

/// Kinds of local honey sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceType {
    Beekeeper,
    Farm,
    FarmersMarket,
    Store,
    Apiary,
    Cooperative,
}

impl Vocabulary for SourceType {
    fn all() -> &'static [Self] {
        &[
            Self::Beekeeper,
            Self::Farm,
            Self::FarmersMarket,
            Self::Store,
            Self::Apiary,
            Self::Cooperative,
        ]
    }

    fn code(self) -> &'static str {
        match self {
            Self::Beekeeper => "BEEKEEPER",
            Self::Farm => "FARM",
            Self::FarmersMarket => "FARMERS_MARKET",
            Self::Store => "STORE",
            Self::Apiary => "APIARY",
            Self::Cooperative => "COOPERATIVE",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Beekeeper => "Beekeeper",
            Self::Farm => "Farm",
            Self::FarmersMarket => "Farmers Market",
            Self::Store => "Store",
            Self::Apiary => "Apiary",
            Self::Cooperative => "Cooperative",
        }
    }
}

/// Quality certifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Certification {
    Umf5Plus,
    Umf10Plus,
    Umf15Plus,
    Umf20Plus,
    UsdaGradeA,
    UsdaOrganic,
    TrueSource,
    NonGmo,
}

impl Vocabulary for Certification {
    fn all() -> &'static [Self] {
        &[
            Self::Umf5Plus,
            Self::Umf10Plus,
            Self::Umf15Plus,
            Self::Umf20Plus,
            Self::UsdaGradeA,
            Self::UsdaOrganic,
            Self::TrueSource,
            Self::NonGmo,
        ]
    }

    fn code(self) -> &'static str {
        match self {
            Self::Umf5Plus => "UMF_5_PLUS",
            Self::Umf10Plus => "UMF_10_PLUS",
            Self::Umf15Plus => "UMF_15_PLUS",
            Self::Umf20Plus => "UMF_20_PLUS",
            Self::UsdaGradeA => "USDA_GRADE_A",
            Self::UsdaOrganic => "USDA_ORGANIC",
            Self::TrueSource => "TRUE_SOURCE",
            Self::NonGmo => "NON_GMO",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Umf5Plus => "UMF 5+",
            Self::Umf10Plus => "UMF 10+",
            Self::Umf15Plus => "UMF 15+",
            Self::Umf20Plus => "UMF 20+",
            Self::UsdaGradeA => "USDA Grade A",
            Self::UsdaOrganic => "USDA Organic",
            Self::TrueSource => "True Source",
            Self::NonGmo => "Non-GMO",
        }
    }
}

/// Resolve a stored code to its display label.
///
/// Falls back to underscore-to-space on codes that no longer parse; the
/// fallback is defensive only and should not be relied on for correctness.
pub fn display_label<V: Vocabulary>(code: &str) -> String {
    match V::parse(code) {
        Some(v) => v.label().to_string(),
        None => code.replace('_', " "),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn code_round_trips_every_variant() {
        fn check<V: Vocabulary + PartialEq + std::fmt::Debug>() {
            for v in V::all() {
                assert_eq!(V::parse(v.code()), Some(*v));
            }
        }
        check::<FloralSource>();
        check::<HoneyOrigin>();
        check::<HoneyType>();
        check::<FlavorProfile>();
        check::<EventType>();
        check::<SourceType>();
        check::<Certification>();
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert_eq!(FloralSource::parse("DANDELION"), None);
        assert_eq!(HoneyOrigin::parse("usa"), None); // codes are case-sensitive
        assert_eq!(SourceType::parse(""), None);
    }

    #[test]
    fn labels_are_human_readable() {
        assert_eq!(FloralSource::OrangeBlossom.label(), "Orange Blossom");
        assert_eq!(HoneyOrigin::NewZealand.label(), "New Zealand");
        assert_eq!(HoneyOrigin::Uk.label(), "United Kingdom");
        assert_eq!(SourceType::FarmersMarket.label(), "Farmers Market");
        assert_eq!(Certification::Umf15Plus.label(), "UMF 15+");
        assert_eq!(Certification::NonGmo.label(), "Non-GMO");
    }

    #[test]
    fn options_cover_whole_vocabulary_with_zero_counts() {
        let opts = options::<FloralSource>();
        assert_eq!(opts.len(), FloralSource::all().len());
        assert!(opts.iter().all(|o| o.count == 0));
        assert!(opts.iter().any(|o| o.value == "CLOVER"));
        assert!(opts.iter().any(|o| o.display_name == "Manuka"));

        assert_eq!(options::<HoneyOrigin>().len(), HoneyOrigin::all().len());
        assert_eq!(options::<HoneyType>().len(), 7);
        assert_eq!(options::<FlavorProfile>().len(), 8);
        assert_eq!(options::<SourceType>().len(), 6);
        assert_eq!(options::<Certification>().len(), 8);
    }

    #[test]
    fn display_label_falls_back_to_underscore_replacement() {
        assert_eq!(display_label::<FloralSource>("CLOVER"), "Clover");
        assert_eq!(display_label::<FloralSource>("RETIRED_CODE"), "RETIRED CODE");
    }
}
