// src/filters/types.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of property a listing describes. Drives which facets are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    Apartment,
    House,
    Villa,
    Office,
    Commercial,
    Land,
}

impl PropertyType {
    pub const ALL: [PropertyType; 6] = [
        PropertyType::Apartment,
        PropertyType::House,
        PropertyType::Villa,
        PropertyType::Office,
        PropertyType::Commercial,
        PropertyType::Land,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::House => "house",
            PropertyType::Villa => "villa",
            PropertyType::Office => "office",
            PropertyType::Commercial => "commercial",
            PropertyType::Land => "land",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

/// Transaction category a search is made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DealType {
    #[default]
    Sale,
    LongTerm,
    ShortTerm,
}

impl DealType {
    pub const ALL: [DealType; 3] = [DealType::Sale, DealType::LongTerm, DealType::ShortTerm];

    pub fn as_str(self) -> &'static str {
        match self {
            DealType::Sale => "sale",
            DealType::LongTerm => "long-term",
            DealType::ShortTerm => "short-term",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

/// Billing period attached to a rental price range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricePeriod {
    Day,
    Week,
    Month,
}

impl PricePeriod {
    pub fn as_str(self) -> &'static str {
        match self {
            PricePeriod::Day => "day",
            PricePeriod::Week => "week",
            PricePeriod::Month => "month",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "day" => Some(PricePeriod::Day),
            "week" => Some(PricePeriod::Week),
            "month" => Some(PricePeriod::Month),
            _ => None,
        }
    }
}

/// Editing semantics of a facet, as declared in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    Range,
    Select,
    Multiselect,
    Toggle,
    Number,
}

/// Identity of every facet the engine knows about.
///
/// `Location` is a pseudo-facet: it is collected and summarised like the
/// others but has no registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterId {
    Location,
    PropertyType,
    Price,
    BedsBaths,
    Area,
    Floor,
    Ceiling,
    Building,
    Guests,
    Availability,
    SpecialCondition,
    Amenities,
    Furnishing,
    Layout,
    View,
    BuildingAmenities,
    Safety,
    Utilities,
    BasicSupplies,
    Furnished,
    ZoningCategory,
}

impl FilterId {
    pub const ALL: [FilterId; 21] = [
        FilterId::Location,
        FilterId::PropertyType,
        FilterId::Price,
        FilterId::BedsBaths,
        FilterId::Area,
        FilterId::Floor,
        FilterId::Ceiling,
        FilterId::Building,
        FilterId::Guests,
        FilterId::Availability,
        FilterId::SpecialCondition,
        FilterId::Amenities,
        FilterId::Furnishing,
        FilterId::Layout,
        FilterId::View,
        FilterId::BuildingAmenities,
        FilterId::Safety,
        FilterId::Utilities,
        FilterId::BasicSupplies,
        FilterId::Furnished,
        FilterId::ZoningCategory,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterId::Location => "location",
            FilterId::PropertyType => "propertyType",
            FilterId::Price => "price",
            FilterId::BedsBaths => "bedsBaths",
            FilterId::Area => "area",
            FilterId::Floor => "floor",
            FilterId::Ceiling => "ceiling",
            FilterId::Building => "building",
            FilterId::Guests => "guests",
            FilterId::Availability => "availability",
            FilterId::SpecialCondition => "specialCondition",
            FilterId::Amenities => "amenities",
            FilterId::Furnishing => "furnishing",
            FilterId::Layout => "layout",
            FilterId::View => "view",
            FilterId::BuildingAmenities => "buildingAmenities",
            FilterId::Safety => "safety",
            FilterId::Utilities => "utilities",
            FilterId::BasicSupplies => "basicSupplies",
            FilterId::Furnished => "furnished",
            FilterId::ZoningCategory => "zoningCategory",
        }
    }

    /// Unknown names yield `None`; callers treat that as an absent facet.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }
}

impl fmt::Display for FilterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_serde_representation() {
        for id in FilterId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.as_str()));
        }
        for t in PropertyType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
        }
        for d in DealType::ALL {
            let json = serde_json::to_string(&d).unwrap();
            assert_eq!(json, format!("\"{}\"", d.as_str()));
        }
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(FilterId::parse("bedsBaths"), Some(FilterId::BedsBaths));
        assert_eq!(FilterId::parse("bedrooms"), None);
        assert_eq!(PropertyType::parse("castle"), None);
        assert_eq!(DealType::parse("long-term"), Some(DealType::LongTerm));
    }
}
