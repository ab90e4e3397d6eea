// src/filters/tips.rs

use crate::filters::collect::CollectedFilter;
use crate::filters::config::{find_config, FilterConfig};
use crate::filters::format::{format_amount, format_range, pluralize};
use crate::filters::types::{FilterId, PricePeriod};
use crate::filters::values::{
    AreaValue, AvailabilityValue, BedsBathsValue, BuildingValue, FilterHandlers, FilterValue,
    FloorValue, GuestsValue, RangeValue, SpecialConditionValue,
};
use serde::Serialize;

const DEFAULT_CURRENCY: &str = "DH";
const AREA_UNIT: &str = "m²";
const CEILING_UNIT: &str = "m";

/// What clicking the chip's cross clears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ClearAction {
    /// The whole facet (`updateFilter(id, undefined)`).
    #[serde(rename_all = "camelCase")]
    Filter { filter_id: FilterId },
    /// One sub-field of a composite facet.
    #[serde(rename_all = "camelCase")]
    Field { filter_id: FilterId, key: &'static str },
    /// One selected item of a multiselect facet.
    #[serde(rename_all = "camelCase")]
    Item { filter_id: FilterId, item: String },
}

impl ClearAction {
    pub fn apply<H: FilterHandlers + ?Sized>(&self, handlers: &mut H) {
        match self {
            ClearAction::Filter { filter_id } => handlers.update_filter(*filter_id, None),
            ClearAction::Field { filter_id, key } => handlers.clear_filter_field(*filter_id, key),
            ClearAction::Item { filter_id, item } => handlers.clear_filter_item(*filter_id, item),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterTipItem {
    pub filter_id: FilterId,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_clear: Option<ClearAction>,
}

/// One display string and the part of the value it came from.
struct TipPart {
    text: String,
    source: PartSource,
}

enum PartSource {
    Field(&'static str),
    Item(String),
}

impl TipPart {
    fn field(key: &'static str, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: PartSource::Field(key),
        }
    }

    fn item(item: &str, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: PartSource::Item(item.to_string()),
        }
    }
}

/// Turns collected filters into chip strings.
///
/// With `clearable` off the tips carry no clear actions (read-only previews
/// of saved searches). Inactive records are skipped.
pub fn generate_filter_tips(
    filters: &[CollectedFilter],
    config: &[FilterConfig],
    clearable: bool,
) -> Vec<FilterTipItem> {
    let mut tips = Vec::new();

    for filter in filters.iter().filter(|f| f.is_active) {
        let Some(value) = filter.value.as_ref() else {
            continue;
        };
        let facet = find_config(config, filter.id);
        let parts = describe(filter.id, value, facet);
        let single = parts.len() == 1;

        for part in parts {
            let on_clear = clearable.then(|| match part.source {
                PartSource::Item(item) => ClearAction::Item {
                    filter_id: filter.id,
                    item,
                },
                PartSource::Field(_) if single => ClearAction::Filter {
                    filter_id: filter.id,
                },
                PartSource::Field(key) => ClearAction::Field {
                    filter_id: filter.id,
                    key,
                },
            });
            tips.push(FilterTipItem {
                filter_id: filter.id,
                text: part.text,
                on_clear,
            });
        }
    }

    tips
}

fn describe(id: FilterId, value: &FilterValue, facet: Option<&FilterConfig>) -> Vec<TipPart> {
    let unit = facet.and_then(|f| f.unit);

    match (id, value) {
        (FilterId::Location, FilterValue::Text(s)) => vec![TipPart::field("location", s.clone())],
        (FilterId::ZoningCategory, FilterValue::Text(s)) => {
            let label = facet.map_or(s.as_str(), |f| f.option_label(s));
            vec![TipPart::field("zoningCategory", label)]
        }
        (FilterId::Furnished, FilterValue::Flag(true)) => {
            vec![TipPart::field("furnished", facet.map_or("Furnished", |f| f.label))]
        }
        (FilterId::Price, FilterValue::Range(r)) => {
            describe_price(r, unit.unwrap_or(DEFAULT_CURRENCY))
        }
        (FilterId::Ceiling, FilterValue::Range(r)) => {
            describe_bounds("Ceiling", r.min, r.max, Some(unit.unwrap_or(CEILING_UNIT)))
                .map(|text| vec![TipPart::field("ceiling", text)])
                .unwrap_or_default()
        }
        (FilterId::Area, FilterValue::Area(a)) => describe_area(a, unit.unwrap_or(AREA_UNIT)),
        (FilterId::Floor, FilterValue::Floor(f)) => describe_floor(f),
        (FilterId::BedsBaths, FilterValue::BedsBaths(b)) => describe_beds_baths(b),
        (FilterId::Guests, FilterValue::Guests(g)) => describe_guests(g),
        (FilterId::Building, FilterValue::Building(b)) => describe_building(b, facet),
        (FilterId::Availability, FilterValue::Availability(a)) => describe_availability(a),
        (FilterId::SpecialCondition, FilterValue::SpecialCondition(s)) => {
            describe_special_condition(s)
        }
        (_, FilterValue::List(items)) => items
            .iter()
            .map(|item| {
                let label = facet.map_or(item.as_str(), |f| f.option_label(item));
                TipPart::item(item, label)
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// A bound pair as one phrase; `None` when neither bound is set.
fn describe_bounds(
    prefix: &str,
    min: Option<f64>,
    max: Option<f64>,
    unit: Option<&str>,
) -> Option<String> {
    let text = match (min, max) {
        (Some(min), Some(max)) => format!("{prefix} {}", format_range(min, max, unit)),
        (Some(min), None) => format!("{prefix} from {}", format_amount(min, unit)),
        (None, Some(max)) => format!("{prefix} up to {}", format_amount(max, unit)),
        (None, None) => return None,
    };
    Some(text)
}

fn describe_price(r: &RangeValue, currency: &str) -> Vec<TipPart> {
    let mut text = match (r.min, r.max) {
        (Some(min), Some(max)) => format_range(min, max, Some(currency)),
        (Some(min), None) => format!("From {}", format_amount(min, Some(currency))),
        (None, Some(max)) => format!("Up to {}", format_amount(max, Some(currency))),
        (None, None) => return Vec::new(),
    };
    if let Some(period) = r.period {
        text.push_str(match period {
            PricePeriod::Day => " / day",
            PricePeriod::Week => " / week",
            PricePeriod::Month => " / month",
        });
    }
    vec![TipPart::field("price", text)]
}

fn describe_area(a: &AreaValue, unit: &str) -> Vec<TipPart> {
    let mut parts = Vec::new();
    if let Some(text) = describe_bounds("Living area", a.living_area_min, a.living_area_max, Some(unit)) {
        parts.push(TipPart::field("livingArea", text));
    }
    if let Some(text) = describe_bounds("Total area", a.total_area_min, a.total_area_max, Some(unit)) {
        parts.push(TipPart::field("totalArea", text));
    }
    parts
}

fn describe_floor(f: &FloorValue) -> Vec<TipPart> {
    let mut parts = Vec::new();
    if let Some(text) = describe_bounds(
        "Floor",
        f.floor_level_min.map(f64::from),
        f.floor_level_max.map(f64::from),
        None,
    ) {
        parts.push(TipPart::field("floorLevel", text));
    }
    let total = match (f.total_floors_min, f.total_floors_max) {
        (Some(min), Some(max)) => Some(format!("{min} - {max} floors in building")),
        (Some(min), None) => Some(format!("From {min} floors in building")),
        (None, Some(max)) => Some(format!("Up to {max} floors in building")),
        (None, None) => None,
    };
    if let Some(text) = total {
        parts.push(TipPart::field("totalFloors", text));
    }
    parts
}

fn describe_beds_baths(b: &BedsBathsValue) -> Vec<TipPart> {
    let mut parts = Vec::new();
    if let Some(n) = b.bedrooms.filter(|n| *n > 0) {
        parts.push(TipPart::field("bedrooms", pluralize(n.into(), "Room", "Rooms")));
    }
    if let Some(n) = b.bathrooms.filter(|n| *n > 0) {
        parts.push(TipPart::field("bathrooms", pluralize(n.into(), "Bath", "Baths")));
    }
    parts
}

fn describe_guests(g: &GuestsValue) -> Vec<TipPart> {
    let mut parts = Vec::new();
    if let Some(n) = g.max_guests.filter(|n| *n > 0) {
        parts.push(TipPart::field("maxGuests", pluralize(n.into(), "guest", "guests")));
    }
    if g.disabled_access == Some(true) {
        parts.push(TipPart::field("disabledAccess", "Wheelchair accessible"));
    }
    if g.pets_allowed == Some(true) {
        parts.push(TipPart::field("petsAllowed", "Pets allowed"));
    }
    parts
}

fn describe_building(b: &BuildingValue, facet: Option<&FilterConfig>) -> Vec<TipPart> {
    let label = |field: &str, raw: &str| -> String {
        facet.map_or(raw, |f| f.field_option_label(field, raw)).to_string()
    };

    let mut parts = Vec::new();
    if let Some(year) = b.year {
        parts.push(TipPart::field("year", format!("Built from {year}")));
    }
    if let Some(condition) = b.condition.as_deref().filter(|s| !s.is_empty()) {
        parts.push(TipPart::field("condition", label("condition", condition)));
    }
    if let Some(renovation) = b.renovation.as_deref().filter(|s| !s.is_empty()) {
        parts.push(TipPart::field("renovation", label("renovation", renovation)));
    }
    if let Some(class) = b.property_class.as_deref().filter(|s| !s.is_empty()) {
        parts.push(TipPart::field("propertyClass", label("propertyClass", class)));
    }
    parts
}

fn describe_availability(a: &AvailabilityValue) -> Vec<TipPart> {
    let mut parts = Vec::new();
    if let Some(date) = a.move_in_date {
        parts.push(TipPart::field(
            "moveInDate",
            format!("Move-in from {}", date.format("%-d %b %Y")),
        ));
    }
    if a.show_without_date == Some(true) {
        parts.push(TipPart::field("showWithoutDate", "Including without date"));
    }
    parts
}

fn describe_special_condition(s: &SpecialConditionValue) -> Vec<TipPart> {
    s.flags()
        .into_iter()
        .filter(|(_, flag)| *flag == Some(true))
        .map(|(key, _)| TipPart::field(key, special_condition_label(key)))
        .collect()
}

fn special_condition_label(key: &str) -> &'static str {
    match key {
        "fromOwner" => "From owner",
        "noCommission" => "No commission",
        "mortgage" => "Mortgage available",
        "installmentPlan" => "Installment plan",
        "tradeIn" => "Trade-in possible",
        "urgentSale" => "Urgent sale",
        "bargaining" => "Bargaining possible",
        _ => "Special condition",
    }
}

/// Short human summary, used to title saved searches.
pub fn summarize(tips: &[FilterTipItem], limit: usize) -> Option<String> {
    if tips.is_empty() {
        return None;
    }
    let mut summary = tips
        .iter()
        .take(limit)
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    if tips.len() > limit {
        summary.push_str(&format!(" +{}", tips.len() - limit));
    }
    Some(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::collect::{collect_all_filters, CollectOptions};
    use crate::filters::config::FILTERS_CONFIG;
    use crate::filters::types::{DealType, PropertyType};
    use crate::filters::values::FilterValues;
    use chrono::NaiveDate;

    fn tips_for(values: &FilterValues) -> Vec<FilterTipItem> {
        let collected = collect_all_filters(
            values,
            &CollectOptions {
                only_active: true,
                check_visibility: false,
                ..CollectOptions::default()
            },
        );
        generate_filter_tips(&collected, FILTERS_CONFIG, true)
    }

    fn texts(tips: &[FilterTipItem]) -> Vec<&str> {
        tips.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn beds_and_baths_get_separate_field_clears() {
        let values = FilterValues {
            bedrooms: Some(2),
            bathrooms: Some(1),
            ..FilterValues::default()
        };
        let tips = tips_for(&values);
        assert_eq!(texts(&tips), vec!["2 Rooms", "1 Bath"]);
        assert_eq!(
            tips[0].on_clear,
            Some(ClearAction::Field {
                filter_id: FilterId::BedsBaths,
                key: "bedrooms"
            })
        );
        assert_eq!(
            tips[1].on_clear,
            Some(ClearAction::Field {
                filter_id: FilterId::BedsBaths,
                key: "bathrooms"
            })
        );
    }

    #[test]
    fn single_string_clears_the_whole_facet() {
        let values = FilterValues {
            bedrooms: Some(3),
            ..FilterValues::default()
        };
        let tips = tips_for(&values);
        assert_eq!(texts(&tips), vec!["3 Rooms"]);
        assert_eq!(
            tips[0].on_clear,
            Some(ClearAction::Filter {
                filter_id: FilterId::BedsBaths
            })
        );
    }

    #[test]
    fn price_forms() {
        let from = FilterValues {
            price_min: Some(1000),
            ..FilterValues::default()
        };
        assert_eq!(texts(&tips_for(&from)), vec!["From 1,000 DH"]);

        let up_to = FilterValues {
            price_max: Some(2_500_000),
            ..FilterValues::default()
        };
        assert_eq!(texts(&tips_for(&up_to)), vec!["Up to 2,500,000 DH"]);

        let both = FilterValues {
            price_min: Some(4000),
            price_max: Some(9000),
            price_period: Some(PricePeriod::Month),
            ..FilterValues::default()
        };
        let tips = tips_for(&both);
        assert_eq!(texts(&tips), vec!["4,000 - 9,000 DH / month"]);
        assert_eq!(
            tips[0].on_clear,
            Some(ClearAction::Filter {
                filter_id: FilterId::Price
            })
        );
    }

    #[test]
    fn list_items_clear_individually_with_labels() {
        let values = FilterValues {
            amenities: Some(vec!["wifi".into(), "sauna".into()]),
            property_types: Some(vec![PropertyType::Apartment]),
            ..FilterValues::default()
        };
        let tips = tips_for(&values);
        assert_eq!(texts(&tips), vec!["Apartment", "Wi-Fi", "sauna"]);
        assert_eq!(
            tips[1].on_clear,
            Some(ClearAction::Item {
                filter_id: FilterId::Amenities,
                item: "wifi".into()
            })
        );
        assert_eq!(
            tips[0].on_clear,
            Some(ClearAction::Item {
                filter_id: FilterId::PropertyType,
                item: "apartment".into()
            })
        );
    }

    #[test]
    fn composite_facets_map_strings_to_their_sub_fields() {
        let values = FilterValues {
            area: Some(AreaValue {
                living_area_min: Some(50.0),
                total_area_max: Some(200.0),
                ..AreaValue::default()
            }),
            building: Some(BuildingValue {
                year: Some(2010),
                condition: Some("needs-renovation".into()),
                ..BuildingValue::default()
            }),
            ..FilterValues::default()
        };
        let tips = tips_for(&values);
        assert_eq!(
            texts(&tips),
            vec![
                "Living area from 50 m²",
                "Total area up to 200 m²",
                "Built from 2010",
                "Needs renovation"
            ]
        );
        let keys: Vec<&str> = tips
            .iter()
            .map(|t| match &t.on_clear {
                Some(ClearAction::Field { key, .. }) => *key,
                other => panic!("unexpected clear action {other:?}"),
            })
            .collect();
        assert_eq!(keys, vec!["livingArea", "totalArea", "year", "condition"]);
    }

    #[test]
    fn remaining_facets_have_readable_text() {
        let values = FilterValues {
            location: Some("Agadir".into()),
            ceiling_min: Some(2.7),
            floor: Some(FloorValue {
                floor_level_min: Some(2),
                floor_level_max: Some(5),
                ..FloorValue::default()
            }),
            guests: Some(GuestsValue {
                max_guests: Some(4),
                pets_allowed: Some(true),
                ..GuestsValue::default()
            }),
            availability: Some(AvailabilityValue {
                move_in_date: NaiveDate::from_ymd_opt(2025, 3, 1),
                show_without_date: None,
            }),
            special_condition: Some(SpecialConditionValue {
                mortgage: Some(true),
                urgent_sale: Some(true),
                ..SpecialConditionValue::default()
            }),
            furnished: Some(true),
            zoning_category: Some("mixed".into()),
            ..FilterValues::default()
        };
        assert_eq!(
            texts(&tips_for(&values)),
            vec![
                "Agadir",
                "4 guests",
                "Pets allowed",
                "Move-in from 1 Mar 2025",
                "Floor 2 - 5",
                "Ceiling from 2.7 m",
                "Mortgage available",
                "Urgent sale",
                "Furnished",
                "Mixed use",
            ]
        );
    }

    #[test]
    fn read_only_tips_have_no_clear_actions() {
        let values = FilterValues {
            bedrooms: Some(2),
            amenities: Some(vec!["wifi".into()]),
            ..FilterValues::default()
        };
        let collected = collect_all_filters(
            &values,
            &CollectOptions {
                only_active: true,
                deal_type: Some(DealType::Sale),
                ..CollectOptions::default()
            },
        );
        let tips = generate_filter_tips(&collected, FILTERS_CONFIG, false);
        assert_eq!(tips.len(), 2);
        assert!(tips.iter().all(|t| t.on_clear.is_none()));
    }

    #[test]
    fn generation_is_repeatable_and_does_not_touch_input() {
        let values = FilterValues {
            price_min: Some(1000),
            safety: Some(vec!["smoke-detector".into()]),
            ..FilterValues::default()
        };
        let collected = collect_all_filters(
            &values,
            &CollectOptions {
                check_visibility: false,
                ..CollectOptions::default()
            },
        );
        let before = collected.clone();
        let first = generate_filter_tips(&collected, FILTERS_CONFIG, true);
        let second = generate_filter_tips(&collected, FILTERS_CONFIG, true);
        assert_eq!(first, second);
        assert_eq!(collected, before);
    }

    #[test]
    fn clear_actions_apply_to_filter_values() {
        let mut values = FilterValues {
            bedrooms: Some(2),
            bathrooms: Some(1),
            amenities: Some(vec!["wifi".into(), "parking".into()]),
            zoning_category: Some("mixed".into()),
            ..FilterValues::default()
        };
        let tips = tips_for(&values);
        for tip in tips.iter().filter(|t| t.text == "2 Rooms" || t.text == "Wi-Fi" || t.text == "Mixed use") {
            tip.on_clear.as_ref().unwrap().apply(&mut values);
        }
        assert_eq!(values.bedrooms, None);
        assert_eq!(values.bathrooms, Some(1));
        assert_eq!(values.amenities, Some(vec!["parking".to_string()]));
        assert_eq!(values.zoning_category, None);
    }

    #[test]
    fn summary_truncates() {
        let values = FilterValues {
            property_types: Some(vec![PropertyType::Apartment]),
            price_min: Some(1000),
            bedrooms: Some(2),
            bathrooms: Some(2),
            ..FilterValues::default()
        };
        let tips = tips_for(&values);
        assert_eq!(
            summarize(&tips, 3).as_deref(),
            Some("Apartment, From 1,000 DH, 2 Rooms +1")
        );
        assert_eq!(summarize(&[], 3), None);
    }
}
