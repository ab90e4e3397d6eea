// src/filters/search_params.rs

use crate::filters::types::{DealType, PricePeriod, PropertyType};
use crate::filters::values::{
    AreaValue, AvailabilityValue, BuildingValue, FilterValues, FloorValue, GuestsValue,
    SpecialConditionValue,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;
use url::form_urlencoded;

/// The shareable-link shape of a search. Field names are part of the URL
/// format and must not change.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deal_type: Option<DealType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_types: Option<Vec<PropertyType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_min: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_max: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_period: Option<PricePeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact_match: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub living_area_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub living_area_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_area_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_area_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_min: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_max: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_floors_min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_floors_max: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ceiling_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ceiling_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building: Option<BuildingValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guests: Option<GuestsValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<AvailabilityValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_condition: Option<SpecialConditionValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub furnishing: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_amenities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utilities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_supplies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub furnished: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoning_category: Option<String>,
}

/// URL shape -> internal shape. Only fields that are set are copied.
pub fn convert_search_params_to_filter_values(params: &SearchParams) -> FilterValues {
    let area = AreaValue {
        living_area_min: params.living_area_min,
        living_area_max: params.living_area_max,
        total_area_min: params.total_area_min,
        total_area_max: params.total_area_max,
    };
    let floor = FloorValue {
        floor_level_min: params.floor_min,
        floor_level_max: params.floor_max,
        total_floors_min: params.total_floors_min,
        total_floors_max: params.total_floors_max,
    };

    FilterValues {
        deal_type: params.deal_type,
        location: params.location_id.clone(),
        property_types: params.property_types.clone(),
        price_min: params.price_min,
        price_max: params.price_max,
        price_period: params.price_period,
        bedrooms: params.bedrooms,
        bathrooms: params.bathrooms,
        exact_match: params.exact_match,
        area: (area != AreaValue::default()).then_some(area),
        floor: (floor != FloorValue::default()).then_some(floor),
        ceiling_min: params.ceiling_min,
        ceiling_max: params.ceiling_max,
        building: params.building.clone(),
        guests: params.guests.clone(),
        availability: params.availability.clone(),
        special_condition: params.special_condition.clone(),
        amenities: params.amenities.clone(),
        furnishing: params.furnishing.clone(),
        layout: params.layout.clone(),
        view: params.view.clone(),
        building_amenities: params.building_amenities.clone(),
        safety: params.safety.clone(),
        utilities: params.utilities.clone(),
        basic_supplies: params.basic_supplies.clone(),
        furnished: params.furnished,
        zoning_category: params.zoning_category.clone(),
    }
}

/// Internal shape -> URL shape; the inverse of [`convert_search_params_to_filter_values`].
pub fn convert_filter_values_to_search_params(values: &FilterValues) -> SearchParams {
    let area = values.area.clone().unwrap_or_default();
    let floor = values.floor.clone().unwrap_or_default();

    SearchParams {
        deal_type: values.deal_type,
        location_id: values.location.clone(),
        property_types: values.property_types.clone(),
        price_min: values.price_min,
        price_max: values.price_max,
        price_period: values.price_period,
        bedrooms: values.bedrooms,
        bathrooms: values.bathrooms,
        exact_match: values.exact_match,
        living_area_min: area.living_area_min,
        living_area_max: area.living_area_max,
        total_area_min: area.total_area_min,
        total_area_max: area.total_area_max,
        floor_min: floor.floor_level_min,
        floor_max: floor.floor_level_max,
        total_floors_min: floor.total_floors_min,
        total_floors_max: floor.total_floors_max,
        ceiling_min: values.ceiling_min,
        ceiling_max: values.ceiling_max,
        building: values.building.clone(),
        guests: values.guests.clone(),
        availability: values.availability.clone(),
        special_condition: values.special_condition.clone(),
        amenities: values.amenities.clone(),
        furnishing: values.furnishing.clone(),
        layout: values.layout.clone(),
        view: values.view.clone(),
        building_amenities: values.building_amenities.clone(),
        safety: values.safety.clone(),
        utilities: values.utilities.clone(),
        basic_supplies: values.basic_supplies.clone(),
        furnished: values.furnished,
        zoning_category: values.zoning_category.clone(),
    }
}

impl SearchParams {
    /// Parses a URL query string. Unknown keys are ignored and values that
    /// do not parse are dropped one by one, so old links keep opening.
    ///
    /// Lists may repeat their key or separate items with literal commas;
    /// composite facets travel as JSON.
    pub fn from_query(query: &str) -> Self {
        let mut params = SearchParams::default();

        let expanded = expand_lists(query.trim_start_matches('?'));
        for (key, raw) in form_urlencoded::parse(expanded.as_bytes()) {
            let (key, raw) = (&*key, &*raw);
            if raw.is_empty() {
                continue;
            }
            match key {
                "dealType" => params.deal_type = parse_with(key, raw, DealType::parse),
                "locationId" => params.location_id = Some(raw.to_string()),
                "propertyTypes" => {
                    let types = params.property_types.get_or_insert_with(Vec::new);
                    types.extend(parse_with(key, raw.trim(), PropertyType::parse));
                }
                "priceMin" => params.price_min = parse_field(key, raw),
                "priceMax" => params.price_max = parse_field(key, raw),
                "pricePeriod" => params.price_period = parse_with(key, raw, PricePeriod::parse),
                "bedrooms" => params.bedrooms = parse_field(key, raw),
                "bathrooms" => params.bathrooms = parse_field(key, raw),
                "exactMatch" => params.exact_match = parse_with(key, raw, parse_bool),
                "livingAreaMin" => params.living_area_min = parse_float(key, raw),
                "livingAreaMax" => params.living_area_max = parse_float(key, raw),
                "totalAreaMin" => params.total_area_min = parse_float(key, raw),
                "totalAreaMax" => params.total_area_max = parse_float(key, raw),
                "floorMin" => params.floor_min = parse_field(key, raw),
                "floorMax" => params.floor_max = parse_field(key, raw),
                "totalFloorsMin" => params.total_floors_min = parse_field(key, raw),
                "totalFloorsMax" => params.total_floors_max = parse_field(key, raw),
                "ceilingMin" => params.ceiling_min = parse_float(key, raw),
                "ceilingMax" => params.ceiling_max = parse_float(key, raw),
                "building" => params.building = parse_json(key, raw),
                "guests" => params.guests = parse_json(key, raw),
                "availability" => params.availability = parse_json(key, raw),
                "specialCondition" => params.special_condition = parse_json(key, raw),
                "amenities" => extend_list(&mut params.amenities, raw),
                "furnishing" => extend_list(&mut params.furnishing, raw),
                "layout" => extend_list(&mut params.layout, raw),
                "view" => extend_list(&mut params.view, raw),
                "buildingAmenities" => extend_list(&mut params.building_amenities, raw),
                "safety" => extend_list(&mut params.safety, raw),
                "utilities" => extend_list(&mut params.utilities, raw),
                "basicSupplies" => extend_list(&mut params.basic_supplies, raw),
                "furnished" => params.furnished = parse_with(key, raw, parse_bool),
                "zoningCategory" => params.zoning_category = Some(raw.to_string()),
                _ => {}
            }
        }

        params
    }

    /// Encodes the set fields as a query string (no leading `?`).
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&'static str, String)> = Vec::new();

        push(&mut pairs, "dealType", self.deal_type.map(|d| d.as_str()));
        push(&mut pairs, "locationId", self.location_id.as_ref());
        if let Some(types) = self.property_types.as_ref().filter(|t| !t.is_empty()) {
            pairs.extend(types.iter().map(|t| ("propertyTypes", t.as_str().to_string())));
        }
        push(&mut pairs, "priceMin", self.price_min);
        push(&mut pairs, "priceMax", self.price_max);
        push(&mut pairs, "pricePeriod", self.price_period.map(|p| p.as_str()));
        push(&mut pairs, "bedrooms", self.bedrooms);
        push(&mut pairs, "bathrooms", self.bathrooms);
        push(&mut pairs, "exactMatch", self.exact_match);
        push(&mut pairs, "livingAreaMin", self.living_area_min);
        push(&mut pairs, "livingAreaMax", self.living_area_max);
        push(&mut pairs, "totalAreaMin", self.total_area_min);
        push(&mut pairs, "totalAreaMax", self.total_area_max);
        push(&mut pairs, "floorMin", self.floor_min);
        push(&mut pairs, "floorMax", self.floor_max);
        push(&mut pairs, "totalFloorsMin", self.total_floors_min);
        push(&mut pairs, "totalFloorsMax", self.total_floors_max);
        push(&mut pairs, "ceilingMin", self.ceiling_min);
        push(&mut pairs, "ceilingMax", self.ceiling_max);
        push_json(&mut pairs, "building", self.building.as_ref());
        push_json(&mut pairs, "guests", self.guests.as_ref());
        push_json(&mut pairs, "availability", self.availability.as_ref());
        push_json(&mut pairs, "specialCondition", self.special_condition.as_ref());
        push_list(&mut pairs, "amenities", self.amenities.as_ref());
        push_list(&mut pairs, "furnishing", self.furnishing.as_ref());
        push_list(&mut pairs, "layout", self.layout.as_ref());
        push_list(&mut pairs, "view", self.view.as_ref());
        push_list(&mut pairs, "buildingAmenities", self.building_amenities.as_ref());
        push_list(&mut pairs, "safety", self.safety.as_ref());
        push_list(&mut pairs, "utilities", self.utilities.as_ref());
        push_list(&mut pairs, "basicSupplies", self.basic_supplies.as_ref());
        push(&mut pairs, "furnished", self.furnished);
        push(&mut pairs, "zoningCategory", self.zoning_category.as_ref());

        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish()
    }
}

fn push<T: ToString>(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<T>) {
    if let Some(v) = value {
        pairs.push((key, v.to_string()));
    }
}

fn push_list(pairs: &mut Vec<(&'static str, String)>, key: &'static str, items: Option<&Vec<String>>) {
    // one pair per item; items may themselves contain commas
    if let Some(items) = items {
        pairs.extend(items.iter().map(|item| (key, item.clone())));
    }
}

fn push_json<T: Serialize>(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<&T>) {
    let Some(value) = value else {
        return;
    };
    match serde_json::to_string(value) {
        Ok(json) => pairs.push((key, json)),
        Err(e) => debug!(key, error = %e, "skipping unencodable query value"),
    }
}

const LIST_KEYS: [&str; 9] = [
    "propertyTypes",
    "amenities",
    "furnishing",
    "layout",
    "view",
    "buildingAmenities",
    "safety",
    "utilities",
    "basicSupplies",
];

/// Rewrites `k=a,b` into `k=a&k=b` for list keys before decoding, so only a
/// literal comma separates items and an encoded one (`%2C`) stays inside its item.
fn expand_lists(query: &str) -> String {
    query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) if LIST_KEYS.contains(&key) => value
                .split(',')
                .map(|item| format!("{key}={item}"))
                .collect::<Vec<_>>()
                .join("&"),
            _ => pair.to_string(),
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn extend_list(slot: &mut Option<Vec<String>>, raw: &str) {
    let items = slot.get_or_insert_with(Vec::new);
    let item = raw.trim();
    if !item.is_empty() {
        items.push(item.to_string());
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

fn parse_with<T>(key: &str, raw: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    let parsed = parse(raw);
    if parsed.is_none() {
        debug!(key, value = raw, "dropping unrecognised query value");
    }
    parsed
}

fn parse_field<T: FromStr>(key: &str, raw: &str) -> Option<T> {
    parse_with(key, raw, |s| s.parse().ok())
}

/// Finite floats only; `NaN` and infinities are dropped.
fn parse_float(key: &str, raw: &str) -> Option<f64> {
    parse_with(key, raw, |s| s.parse::<f64>().ok().filter(|v| v.is_finite()))
}

fn parse_json<T: DeserializeOwned>(key: &str, raw: &str) -> Option<T> {
    parse_with(key, raw, |s| serde_json::from_str(s).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn full_values() -> FilterValues {
        FilterValues {
            deal_type: Some(DealType::LongTerm),
            location: Some("casablanca-maarif".into()),
            property_types: Some(vec![PropertyType::Apartment, PropertyType::Villa]),
            price_min: Some(5000),
            price_max: Some(12000),
            price_period: Some(PricePeriod::Month),
            bedrooms: Some(2),
            bathrooms: Some(1),
            exact_match: Some(true),
            area: Some(AreaValue {
                living_area_min: Some(60.0),
                living_area_max: Some(120.5),
                total_area_min: Some(80.0),
                total_area_max: Some(150.0),
            }),
            floor: Some(FloorValue {
                floor_level_min: Some(-1),
                floor_level_max: Some(8),
                total_floors_min: Some(3),
                total_floors_max: Some(12),
            }),
            ceiling_min: Some(2.7),
            ceiling_max: Some(3.2),
            building: Some(BuildingValue {
                year: Some(2015),
                condition: Some("good".into()),
                renovation: Some("designer".into()),
                property_class: Some("business".into()),
            }),
            guests: Some(GuestsValue {
                max_guests: Some(4),
                disabled_access: Some(true),
                pets_allowed: Some(false),
            }),
            availability: Some(AvailabilityValue {
                move_in_date: NaiveDate::from_ymd_opt(2025, 9, 1),
                show_without_date: Some(true),
            }),
            special_condition: Some(SpecialConditionValue {
                no_commission: Some(true),
                ..SpecialConditionValue::default()
            }),
            amenities: Some(vec!["wifi".into(), "parking".into()]),
            furnishing: Some(vec!["kitchen".into()]),
            layout: Some(vec!["studio".into()]),
            view: Some(vec!["sea".into()]),
            building_amenities: Some(vec!["gym".into()]),
            safety: Some(vec!["smoke-detector".into()]),
            utilities: Some(vec!["water".into()]),
            basic_supplies: Some(vec!["towels".into()]),
            furnished: Some(true),
            zoning_category: Some("residential".into()),
        }
    }

    #[test]
    fn filter_values_survive_the_url_shape() {
        let values = full_values();
        let params = convert_filter_values_to_search_params(&values);
        assert_eq!(params.location_id.as_deref(), Some("casablanca-maarif"));
        assert_eq!(params.floor_min, Some(-1));
        assert_eq!(params.total_area_max, Some(150.0));
        assert_eq!(convert_search_params_to_filter_values(&params), values);
    }

    #[test]
    fn unset_fields_stay_absent() {
        let values = FilterValues {
            price_min: Some(100000),
            area: Some(AreaValue::default()),
            ..FilterValues::default()
        };
        let params = convert_filter_values_to_search_params(&values);
        assert_eq!(
            params,
            SearchParams {
                price_min: Some(100000),
                ..SearchParams::default()
            }
        );
        // an empty composite is the same as no composite
        let back = convert_search_params_to_filter_values(&params);
        assert_eq!(back.area, None);
        assert_eq!(back.price_min, Some(100000));

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json, serde_json::json!({ "priceMin": 100000 }));
    }

    #[test]
    fn query_string_round_trip() {
        let params = convert_filter_values_to_search_params(&full_values());
        let query = params.to_query_string();
        assert!(query.contains("propertyTypes=apartment&propertyTypes=villa"));
        assert!(query.contains("pricePeriod=month"));
        assert_eq!(SearchParams::from_query(&query), params);
    }

    #[test]
    fn query_parsing_is_lenient() {
        let params = SearchParams::from_query(
            "?dealType=short-term&priceMin=abc&priceMax=900&propertyTypes=house,castle&propertyTypes=land&amenities=wifi&amenities=pool,&exactMatch=1&guests=%7Bbroken&unknown=1&bedrooms=",
        );
        assert_eq!(params.deal_type, Some(DealType::ShortTerm));
        assert_eq!(params.price_min, None);
        assert_eq!(params.price_max, Some(900));
        assert_eq!(
            params.property_types,
            Some(vec![PropertyType::House, PropertyType::Land])
        );
        assert_eq!(params.amenities, Some(vec!["wifi".to_string(), "pool".to_string()]));
        assert_eq!(params.exact_match, Some(true));
        assert_eq!(params.guests, None);
        assert_eq!(params.bedrooms, None);
    }

    #[test]
    fn list_items_with_commas_keep_their_shape() {
        let params = SearchParams {
            view: Some(vec!["sea, partial".into(), "city".into()]),
            ..SearchParams::default()
        };
        let query = params.to_query_string();
        assert_eq!(query, "view=sea%2C+partial&view=city");
        assert_eq!(SearchParams::from_query(&query), params);

        // a literal comma still separates items in hand-written links
        let typed = SearchParams::from_query("view=sea,city");
        assert_eq!(typed.view, Some(vec!["sea".to_string(), "city".to_string()]));
    }

    #[test]
    fn non_finite_floats_are_dropped() {
        let params = SearchParams::from_query(
            "ceilingMin=NaN&ceilingMax=inf&livingAreaMin=-infinity&totalAreaMax=80.5",
        );
        assert_eq!(params.ceiling_min, None);
        assert_eq!(params.ceiling_max, None);
        assert_eq!(params.living_area_min, None);
        assert_eq!(params.total_area_max, Some(80.5));
    }

    #[test]
    fn composite_facets_travel_as_json() {
        let params = SearchParams::from_query(
            "building=%7B%22year%22%3A2010%2C%22condition%22%3A%22new%22%7D",
        );
        assert_eq!(
            params.building,
            Some(BuildingValue {
                year: Some(2010),
                condition: Some("new".into()),
                ..BuildingValue::default()
            })
        );
    }
}
