// src/filters/values.rs

use crate::filters::types::{DealType, FilterId, PricePeriod, PropertyType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lower/upper bound pair, optionally tied to a billing period (rent prices).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RangeValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<PricePeriod>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AreaValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub living_area_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub living_area_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_area_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_area_max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FloorValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_level_min: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_level_max: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_floors_min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_floors_max: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BedsBathsValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact_match: Option<bool>,
}

impl BedsBathsValue {
    /// Switching exact matching on drops any zero count, so a previous `0`
    /// becomes indistinguishable from "unset".
    pub fn with_exact_match(mut self, exact: bool) -> Self {
        if exact {
            self.bedrooms = self.bedrooms.filter(|n| *n > 0);
            self.bathrooms = self.bathrooms.filter(|n| *n > 0);
            self.exact_match = Some(true);
        } else {
            self.exact_match = None;
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuestsValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_guests: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pets_allowed: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildingValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renovation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_class: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AvailabilityValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_in_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_without_date: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpecialConditionValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_owner: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_commission: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mortgage: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installment_plan: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_in: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgent_sale: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bargaining: Option<bool>,
}

impl SpecialConditionValue {
    /// Sub-fields in display order, paired with their wire keys.
    pub fn flags(&self) -> [(&'static str, Option<bool>); 7] {
        [
            ("fromOwner", self.from_owner),
            ("noCommission", self.no_commission),
            ("mortgage", self.mortgage),
            ("installmentPlan", self.installment_plan),
            ("tradeIn", self.trade_in),
            ("urgentSale", self.urgent_sale),
            ("bargaining", self.bargaining),
        ]
    }

    fn flag_mut(&mut self, key: &str) -> Option<&mut Option<bool>> {
        match key {
            "fromOwner" => Some(&mut self.from_owner),
            "noCommission" => Some(&mut self.no_commission),
            "mortgage" => Some(&mut self.mortgage),
            "installmentPlan" => Some(&mut self.installment_plan),
            "tradeIn" => Some(&mut self.trade_in),
            "urgentSale" => Some(&mut self.urgent_sale),
            "bargaining" => Some(&mut self.bargaining),
            _ => None,
        }
    }
}

/// The value of a single facet. `None` at the call site means "not set".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FilterValue {
    Text(String),
    Flag(bool),
    List(Vec<String>),
    Range(RangeValue),
    Area(AreaValue),
    Floor(FloorValue),
    BedsBaths(BedsBathsValue),
    Guests(GuestsValue),
    Building(BuildingValue),
    Availability(AvailabilityValue),
    SpecialCondition(SpecialConditionValue),
}

impl FilterValue {
    /// Removes one sub-field. Returns `None` once nothing meaningful is left,
    /// keeping "all sub-fields unset" and "unset" the same state.
    pub fn without_field(self, key: &str) -> Option<FilterValue> {
        let value = match self {
            FilterValue::Range(mut r) => {
                match key {
                    "min" => r.min = None,
                    "max" => r.max = None,
                    "period" => r.period = None,
                    _ => {}
                }
                if r.min.is_none() && r.max.is_none() {
                    return None;
                }
                FilterValue::Range(r)
            }
            FilterValue::Area(mut a) => {
                match key {
                    "livingArea" => {
                        a.living_area_min = None;
                        a.living_area_max = None;
                    }
                    "totalArea" => {
                        a.total_area_min = None;
                        a.total_area_max = None;
                    }
                    "livingAreaMin" => a.living_area_min = None,
                    "livingAreaMax" => a.living_area_max = None,
                    "totalAreaMin" => a.total_area_min = None,
                    "totalAreaMax" => a.total_area_max = None,
                    _ => {}
                }
                if a == AreaValue::default() {
                    return None;
                }
                FilterValue::Area(a)
            }
            FilterValue::Floor(mut f) => {
                match key {
                    "floorLevel" => {
                        f.floor_level_min = None;
                        f.floor_level_max = None;
                    }
                    "totalFloors" => {
                        f.total_floors_min = None;
                        f.total_floors_max = None;
                    }
                    "floorLevelMin" => f.floor_level_min = None,
                    "floorLevelMax" => f.floor_level_max = None,
                    "totalFloorsMin" => f.total_floors_min = None,
                    "totalFloorsMax" => f.total_floors_max = None,
                    _ => {}
                }
                if f == FloorValue::default() {
                    return None;
                }
                FilterValue::Floor(f)
            }
            FilterValue::BedsBaths(mut b) => {
                match key {
                    "bedrooms" => b.bedrooms = None,
                    "bathrooms" => b.bathrooms = None,
                    "exactMatch" => b.exact_match = None,
                    _ => {}
                }
                if b.bedrooms.is_none() && b.bathrooms.is_none() {
                    return None;
                }
                FilterValue::BedsBaths(b)
            }
            FilterValue::Guests(mut g) => {
                match key {
                    "maxGuests" => g.max_guests = None,
                    "disabledAccess" => g.disabled_access = None,
                    "petsAllowed" => g.pets_allowed = None,
                    _ => {}
                }
                if g == GuestsValue::default() {
                    return None;
                }
                FilterValue::Guests(g)
            }
            FilterValue::Building(mut b) => {
                match key {
                    "year" => b.year = None,
                    "condition" => b.condition = None,
                    "renovation" => b.renovation = None,
                    "propertyClass" => b.property_class = None,
                    _ => {}
                }
                if b == BuildingValue::default() {
                    return None;
                }
                FilterValue::Building(b)
            }
            FilterValue::Availability(mut a) => {
                match key {
                    "moveInDate" => a.move_in_date = None,
                    "showWithoutDate" => a.show_without_date = None,
                    _ => {}
                }
                if a == AvailabilityValue::default() {
                    return None;
                }
                FilterValue::Availability(a)
            }
            FilterValue::SpecialCondition(mut s) => {
                if let Some(flag) = s.flag_mut(key) {
                    *flag = None;
                }
                if s == SpecialConditionValue::default() {
                    return None;
                }
                FilterValue::SpecialCondition(s)
            }
            // Scalars and lists have no sub-fields: clearing a field clears the facet.
            _ => return None,
        };
        Some(value)
    }
}

/// State-container side of the clear actions attached to filter tips.
pub trait FilterHandlers {
    fn update_filter(&mut self, id: FilterId, value: Option<FilterValue>);
    fn clear_filter_field(&mut self, id: FilterId, key: &str);
    fn clear_filter_item(&mut self, id: FilterId, item: &str);
}

/// Every facet's current value, flat, one field per facet.
///
/// Owned by whoever holds the search state (URL, form, saved filter); the
/// engine only reads it through [`FilterValues::get`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterValues {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deal_type: Option<DealType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
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
    pub area: Option<AreaValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<FloorValue>,
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

impl FilterValues {
    /// Projects the field(s) backing `id` into a facet value.
    pub fn get(&self, id: FilterId) -> Option<FilterValue> {
        match id {
            FilterId::Location => self.location.clone().map(FilterValue::Text),
            FilterId::PropertyType => self.property_types.as_ref().map(|types| {
                FilterValue::List(types.iter().map(|t| t.as_str().to_string()).collect())
            }),
            FilterId::Price => {
                if self.price_min.is_none() && self.price_max.is_none() && self.price_period.is_none() {
                    return None;
                }
                Some(FilterValue::Range(RangeValue {
                    min: self.price_min.map(|v| v as f64),
                    max: self.price_max.map(|v| v as f64),
                    period: self.price_period,
                }))
            }
            FilterId::BedsBaths => {
                if self.bedrooms.is_none() && self.bathrooms.is_none() && self.exact_match.is_none() {
                    return None;
                }
                Some(FilterValue::BedsBaths(BedsBathsValue {
                    bedrooms: self.bedrooms,
                    bathrooms: self.bathrooms,
                    exact_match: self.exact_match,
                }))
            }
            FilterId::Area => self.area.clone().map(FilterValue::Area),
            FilterId::Floor => self.floor.clone().map(FilterValue::Floor),
            FilterId::Ceiling => {
                if self.ceiling_min.is_none() && self.ceiling_max.is_none() {
                    return None;
                }
                Some(FilterValue::Range(RangeValue {
                    min: self.ceiling_min,
                    max: self.ceiling_max,
                    period: None,
                }))
            }
            FilterId::Building => self.building.clone().map(FilterValue::Building),
            FilterId::Guests => self.guests.clone().map(FilterValue::Guests),
            FilterId::Availability => self.availability.clone().map(FilterValue::Availability),
            FilterId::SpecialCondition => self
                .special_condition
                .clone()
                .map(FilterValue::SpecialCondition),
            FilterId::Furnished => self.furnished.map(FilterValue::Flag),
            FilterId::ZoningCategory => self.zoning_category.clone().map(FilterValue::Text),
            list_id => self.list_slot(list_id).and_then(|slot| slot.clone().map(FilterValue::List)),
        }
    }

    /// Writes a facet value back into its field(s). `None` clears the facet.
    ///
    /// Returns `false` and leaves the record untouched when the value's shape
    /// does not belong to the facet.
    pub fn set(&mut self, id: FilterId, value: Option<FilterValue>) -> bool {
        match (id, value) {
            (FilterId::Location, None) => self.location = None,
            (FilterId::Location, Some(FilterValue::Text(s))) => self.location = Some(s),
            (FilterId::PropertyType, None) => self.property_types = None,
            (FilterId::PropertyType, Some(FilterValue::List(items))) => {
                self.property_types = Some(items.iter().filter_map(|s| PropertyType::parse(s)).collect());
            }
            (FilterId::Price, None) => {
                self.price_min = None;
                self.price_max = None;
                self.price_period = None;
            }
            (FilterId::Price, Some(FilterValue::Range(r))) => {
                self.price_min = r.min.and_then(to_amount);
                self.price_max = r.max.and_then(to_amount);
                self.price_period = r.period;
            }
            (FilterId::BedsBaths, None) => {
                self.bedrooms = None;
                self.bathrooms = None;
                self.exact_match = None;
            }
            (FilterId::BedsBaths, Some(FilterValue::BedsBaths(b))) => {
                self.bedrooms = b.bedrooms;
                self.bathrooms = b.bathrooms;
                self.exact_match = b.exact_match;
            }
            (FilterId::Area, None) => self.area = None,
            (FilterId::Area, Some(FilterValue::Area(a))) => self.area = Some(a),
            (FilterId::Floor, None) => self.floor = None,
            (FilterId::Floor, Some(FilterValue::Floor(f))) => self.floor = Some(f),
            (FilterId::Ceiling, None) => {
                self.ceiling_min = None;
                self.ceiling_max = None;
            }
            (FilterId::Ceiling, Some(FilterValue::Range(r))) => {
                self.ceiling_min = r.min;
                self.ceiling_max = r.max;
            }
            (FilterId::Building, None) => self.building = None,
            (FilterId::Building, Some(FilterValue::Building(b))) => self.building = Some(b),
            (FilterId::Guests, None) => self.guests = None,
            (FilterId::Guests, Some(FilterValue::Guests(g))) => self.guests = Some(g),
            (FilterId::Availability, None) => self.availability = None,
            (FilterId::Availability, Some(FilterValue::Availability(a))) => {
                self.availability = Some(a)
            }
            (FilterId::SpecialCondition, None) => self.special_condition = None,
            (FilterId::SpecialCondition, Some(FilterValue::SpecialCondition(s))) => {
                self.special_condition = Some(s)
            }
            (FilterId::Furnished, None) => self.furnished = None,
            (FilterId::Furnished, Some(FilterValue::Flag(b))) => self.furnished = Some(b),
            (FilterId::ZoningCategory, None) => self.zoning_category = None,
            (FilterId::ZoningCategory, Some(FilterValue::Text(s))) => self.zoning_category = Some(s),
            (list_id, value) => {
                let Some(slot) = self.list_slot_mut(list_id) else {
                    return false;
                };
                match value {
                    None => *slot = None,
                    Some(FilterValue::List(items)) => *slot = Some(items),
                    Some(_) => return false,
                }
            }
        }
        true
    }

    /// Resets every facet, keeping the deal type and location the search is anchored to.
    pub fn clear_all(&mut self) {
        *self = FilterValues {
            deal_type: self.deal_type,
            location: self.location.take(),
            ..FilterValues::default()
        };
    }

    fn list_slot(&self, id: FilterId) -> Option<&Option<Vec<String>>> {
        match id {
            FilterId::Amenities => Some(&self.amenities),
            FilterId::Furnishing => Some(&self.furnishing),
            FilterId::Layout => Some(&self.layout),
            FilterId::View => Some(&self.view),
            FilterId::BuildingAmenities => Some(&self.building_amenities),
            FilterId::Safety => Some(&self.safety),
            FilterId::Utilities => Some(&self.utilities),
            FilterId::BasicSupplies => Some(&self.basic_supplies),
            _ => None,
        }
    }

    fn list_slot_mut(&mut self, id: FilterId) -> Option<&mut Option<Vec<String>>> {
        match id {
            FilterId::Amenities => Some(&mut self.amenities),
            FilterId::Furnishing => Some(&mut self.furnishing),
            FilterId::Layout => Some(&mut self.layout),
            FilterId::View => Some(&mut self.view),
            FilterId::BuildingAmenities => Some(&mut self.building_amenities),
            FilterId::Safety => Some(&mut self.safety),
            FilterId::Utilities => Some(&mut self.utilities),
            FilterId::BasicSupplies => Some(&mut self.basic_supplies),
            _ => None,
        }
    }
}

/// Negative or non-finite bounds are no bound at all.
fn to_amount(v: f64) -> Option<u64> {
    (v.is_finite() && v >= 0.0).then(|| v.round() as u64)
}

impl FilterHandlers for FilterValues {
    fn update_filter(&mut self, id: FilterId, value: Option<FilterValue>) {
        self.set(id, value);
    }

    fn clear_filter_field(&mut self, id: FilterId, key: &str) {
        if let Some(value) = self.get(id) {
            self.set(id, value.without_field(key));
        }
    }

    fn clear_filter_item(&mut self, id: FilterId, item: &str) {
        if let Some(FilterValue::List(mut items)) = self.get(id) {
            items.retain(|i| i != item);
            let next = if items.is_empty() {
                None
            } else {
                Some(FilterValue::List(items))
            };
            self.set(id, next);
        }
    }
}
