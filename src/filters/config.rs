// src/filters/config.rs

use crate::filters::types::{DealType, FilterId, FilterKind, PropertyType};
use crate::filters::values::FilterValue;
use serde::Serialize;

use DealType::{LongTerm, Sale, ShortTerm};
use PropertyType::{Apartment, Commercial, House, Land, Office, Villa};

const ALL_TYPES: &[PropertyType] = &[Apartment, House, Villa, Office, Commercial, Land];
const RESIDENTIAL: &[PropertyType] = &[Apartment, House, Villa];
const BUILT: &[PropertyType] = &[Apartment, House, Villa, Office, Commercial];
const ALL_DEALS: &[DealType] = &[Sale, LongTerm, ShortTerm];
const RENTALS: &[DealType] = &[LongTerm, ShortTerm];

/// Which widget edits a facet. The registry stays data-only; a front end
/// dispatches on this tag to pick its rendering strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetKind {
    ChipSelect,
    PriceRange,
    BedsBathsPicker,
    AreaInputs,
    FloorInputs,
    RangeInputs,
    BuildingForm,
    GuestsForm,
    DatePicker,
    CheckboxList,
    Toggle,
    Dropdown,
    BottomSheet,
}

/// Value shape a widget hands back through `onChange`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    Text,
    Flag,
    List,
    Range,
    Area,
    Floor,
    BedsBaths,
    Guests,
    Building,
    Availability,
    SpecialCondition,
}

impl ValueShape {
    pub fn of(value: &FilterValue) -> Self {
        match value {
            FilterValue::Text(_) => ValueShape::Text,
            FilterValue::Flag(_) => ValueShape::Flag,
            FilterValue::List(_) => ValueShape::List,
            FilterValue::Range(_) => ValueShape::Range,
            FilterValue::Area(_) => ValueShape::Area,
            FilterValue::Floor(_) => ValueShape::Floor,
            FilterValue::BedsBaths(_) => ValueShape::BedsBaths,
            FilterValue::Guests(_) => ValueShape::Guests,
            FilterValue::Building(_) => ValueShape::Building,
            FilterValue::Availability(_) => ValueShape::Availability,
            FilterValue::SpecialCondition(_) => ValueShape::SpecialCondition,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Options for one sub-field of a composite facet (e.g. `building.condition`).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldOptions {
    pub field: &'static str,
    pub options: &'static [FilterOption],
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibleFor {
    pub property_types: &'static [PropertyType],
    pub deal_types: &'static [DealType],
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileBar {
    pub show_in_bar: bool,
    pub priority: u8,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FacetWidgets {
    pub desktop: WidgetKind,
    pub mobile: WidgetKind,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterConfig {
    pub id: FilterId,
    pub label: &'static str,
    #[serde(rename = "type")]
    pub kind: FilterKind,
    pub visible_for: VisibleFor,
    pub mobile: MobileBar,
    pub components: FacetWidgets,
    pub options: &'static [FilterOption],
    pub field_options: &'static [FieldOptions],
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    pub unit: Option<&'static str>,
}

impl FilterConfig {
    pub fn applies_to_deal(&self, deal: DealType) -> bool {
        self.visible_for.deal_types.contains(&deal)
    }

    /// An empty selection matches every facet.
    pub fn applies_to_any(&self, property_types: &[PropertyType]) -> bool {
        property_types.is_empty()
            || property_types
                .iter()
                .any(|t| self.visible_for.property_types.contains(t))
    }

    /// The shape this facet's widget emits.
    pub fn value_shape(&self) -> ValueShape {
        match self.id {
            FilterId::Location | FilterId::ZoningCategory => ValueShape::Text,
            FilterId::Furnished => ValueShape::Flag,
            FilterId::Price | FilterId::Ceiling => ValueShape::Range,
            FilterId::Area => ValueShape::Area,
            FilterId::Floor => ValueShape::Floor,
            FilterId::BedsBaths => ValueShape::BedsBaths,
            FilterId::Guests => ValueShape::Guests,
            FilterId::Building => ValueShape::Building,
            FilterId::Availability => ValueShape::Availability,
            FilterId::SpecialCondition => ValueShape::SpecialCondition,
            FilterId::PropertyType
            | FilterId::Amenities
            | FilterId::Furnishing
            | FilterId::Layout
            | FilterId::View
            | FilterId::BuildingAmenities
            | FilterId::Safety
            | FilterId::Utilities
            | FilterId::BasicSupplies => ValueShape::List,
        }
    }

    /// Whether `value` is something this facet's widget could have produced.
    pub fn accepts(&self, value: &FilterValue) -> bool {
        ValueShape::of(value) == self.value_shape()
    }

    /// Human label for a stored option value; falls back to the raw value.
    pub fn option_label<'a>(&self, value: &'a str) -> &'a str {
        lookup_label(self.options, value).unwrap_or(value)
    }

    /// Same as [`FilterConfig::option_label`] for a composite sub-field.
    pub fn field_option_label<'a>(&self, field: &str, value: &'a str) -> &'a str {
        self.field_options
            .iter()
            .find(|f| f.field == field)
            .and_then(|f| lookup_label(f.options, value))
            .unwrap_or(value)
    }
}

fn lookup_label(options: &'static [FilterOption], value: &str) -> Option<&'static str> {
    options.iter().find(|o| o.value == value).map(|o| o.label)
}

pub fn find_config(config: &[FilterConfig], id: FilterId) -> Option<&FilterConfig> {
    config.iter().find(|c| c.id == id)
}

const fn opt(value: &'static str, label: &'static str) -> FilterOption {
    FilterOption { value, label }
}

const BASE: FilterConfig = FilterConfig {
    id: FilterId::Location,
    label: "",
    kind: FilterKind::Multiselect,
    visible_for: VisibleFor {
        property_types: ALL_TYPES,
        deal_types: ALL_DEALS,
    },
    mobile: MobileBar {
        show_in_bar: false,
        priority: 99,
    },
    components: FacetWidgets {
        desktop: WidgetKind::CheckboxList,
        mobile: WidgetKind::BottomSheet,
    },
    options: &[],
    field_options: &[],
    min: None,
    max: None,
    step: None,
    unit: None,
};

pub const PROPERTY_TYPE_OPTIONS: &[FilterOption] = &[
    opt("apartment", "Apartment"),
    opt("house", "House"),
    opt("villa", "Villa"),
    opt("office", "Office"),
    opt("commercial", "Commercial"),
    opt("land", "Land"),
];

const AMENITY_OPTIONS: &[FilterOption] = &[
    opt("wifi", "Wi-Fi"),
    opt("air-conditioning", "Air conditioning"),
    opt("heating", "Heating"),
    opt("parking", "Parking"),
    opt("pool", "Swimming pool"),
    opt("elevator", "Elevator"),
    opt("balcony", "Balcony"),
    opt("terrace", "Terrace"),
    opt("garden", "Garden"),
];

const FURNISHING_OPTIONS: &[FilterOption] = &[
    opt("kitchen", "Kitchen furniture"),
    opt("wardrobe", "Wardrobe"),
    opt("beds", "Beds"),
    opt("appliances", "Home appliances"),
    opt("tv", "TV"),
];

const LAYOUT_OPTIONS: &[FilterOption] = &[
    opt("open-plan", "Open plan"),
    opt("isolated-rooms", "Separate rooms"),
    opt("studio", "Studio"),
    opt("duplex", "Duplex"),
];

const VIEW_OPTIONS: &[FilterOption] = &[
    opt("sea", "Sea view"),
    opt("mountain", "Mountain view"),
    opt("city", "City view"),
    opt("garden", "Garden view"),
    opt("pool", "Pool view"),
];

const BUILDING_AMENITY_OPTIONS: &[FilterOption] = &[
    opt("concierge", "Concierge"),
    opt("security", "24/7 security"),
    opt("gym", "Gym"),
    opt("playground", "Playground"),
    opt("underground-parking", "Underground parking"),
];

const SAFETY_OPTIONS: &[FilterOption] = &[
    opt("smoke-detector", "Smoke detector"),
    opt("first-aid-kit", "First aid kit"),
    opt("fire-extinguisher", "Fire extinguisher"),
    opt("security-cameras", "Security cameras"),
];

const UTILITY_OPTIONS: &[FilterOption] = &[
    opt("electricity", "Electricity"),
    opt("water", "Water"),
    opt("gas", "Gas"),
    opt("sewerage", "Sewerage"),
    opt("internet", "Internet"),
];

const BASIC_SUPPLY_OPTIONS: &[FilterOption] = &[
    opt("towels", "Towels"),
    opt("bed-linen", "Bed linen"),
    opt("toiletries", "Toiletries"),
    opt("kitchenware", "Kitchenware"),
];

const ZONING_OPTIONS: &[FilterOption] = &[
    opt("residential", "Residential"),
    opt("commercial", "Commercial"),
    opt("agricultural", "Agricultural"),
    opt("industrial", "Industrial"),
    opt("mixed", "Mixed use"),
];

const BUILDING_FIELD_OPTIONS: &[FieldOptions] = &[
    FieldOptions {
        field: "condition",
        options: &[
            opt("new", "New"),
            opt("good", "Good condition"),
            opt("needs-renovation", "Needs renovation"),
        ],
    },
    FieldOptions {
        field: "renovation",
        options: &[
            opt("cosmetic", "Cosmetic renovation"),
            opt("designer", "Designer renovation"),
            opt("euro", "Euro renovation"),
            opt("none", "No renovation"),
        ],
    },
    FieldOptions {
        field: "propertyClass",
        options: &[
            opt("economy", "Economy class"),
            opt("comfort", "Comfort class"),
            opt("business", "Business class"),
            opt("premium", "Premium class"),
        ],
    },
];

/// Every selectable facet, in display order. Never mutated at runtime.
pub static FILTERS_CONFIG: &[FilterConfig] = &[
    FilterConfig {
        id: FilterId::PropertyType,
        label: "Property type",
        kind: FilterKind::Multiselect,
        mobile: MobileBar {
            show_in_bar: true,
            priority: 1,
        },
        components: FacetWidgets {
            desktop: WidgetKind::ChipSelect,
            mobile: WidgetKind::ChipSelect,
        },
        options: PROPERTY_TYPE_OPTIONS,
        ..BASE
    },
    FilterConfig {
        id: FilterId::Price,
        label: "Price",
        kind: FilterKind::Range,
        mobile: MobileBar {
            show_in_bar: true,
            priority: 2,
        },
        components: FacetWidgets {
            desktop: WidgetKind::PriceRange,
            mobile: WidgetKind::PriceRange,
        },
        min: Some(0.0),
        step: Some(1000.0),
        unit: Some("DH"),
        ..BASE
    },
    FilterConfig {
        id: FilterId::BedsBaths,
        label: "Beds & Baths",
        kind: FilterKind::Number,
        visible_for: VisibleFor {
            property_types: RESIDENTIAL,
            deal_types: ALL_DEALS,
        },
        mobile: MobileBar {
            show_in_bar: true,
            priority: 3,
        },
        components: FacetWidgets {
            desktop: WidgetKind::BedsBathsPicker,
            mobile: WidgetKind::BedsBathsPicker,
        },
        min: Some(0.0),
        max: Some(10.0),
        step: Some(1.0),
        ..BASE
    },
    FilterConfig {
        id: FilterId::Area,
        label: "Area",
        kind: FilterKind::Range,
        mobile: MobileBar {
            show_in_bar: true,
            priority: 4,
        },
        components: FacetWidgets {
            desktop: WidgetKind::AreaInputs,
            mobile: WidgetKind::AreaInputs,
        },
        min: Some(0.0),
        step: Some(1.0),
        unit: Some("m²"),
        ..BASE
    },
    FilterConfig {
        id: FilterId::Guests,
        label: "Guests",
        kind: FilterKind::Number,
        visible_for: VisibleFor {
            property_types: RESIDENTIAL,
            deal_types: &[ShortTerm],
        },
        mobile: MobileBar {
            show_in_bar: true,
            priority: 5,
        },
        components: FacetWidgets {
            desktop: WidgetKind::GuestsForm,
            mobile: WidgetKind::BottomSheet,
        },
        min: Some(1.0),
        max: Some(16.0),
        step: Some(1.0),
        ..BASE
    },
    FilterConfig {
        id: FilterId::Availability,
        label: "Availability",
        kind: FilterKind::Select,
        visible_for: VisibleFor {
            property_types: BUILT,
            deal_types: RENTALS,
        },
        mobile: MobileBar {
            show_in_bar: true,
            priority: 6,
        },
        components: FacetWidgets {
            desktop: WidgetKind::DatePicker,
            mobile: WidgetKind::BottomSheet,
        },
        ..BASE
    },
    FilterConfig {
        id: FilterId::Amenities,
        label: "Amenities",
        visible_for: VisibleFor {
            property_types: RESIDENTIAL,
            deal_types: ALL_DEALS,
        },
        mobile: MobileBar {
            show_in_bar: true,
            priority: 7,
        },
        options: AMENITY_OPTIONS,
        ..BASE
    },
    FilterConfig {
        id: FilterId::Floor,
        label: "Floor",
        kind: FilterKind::Range,
        visible_for: VisibleFor {
            property_types: &[Apartment, Office, Commercial],
            deal_types: ALL_DEALS,
        },
        components: FacetWidgets {
            desktop: WidgetKind::FloorInputs,
            mobile: WidgetKind::FloorInputs,
        },
        min: Some(-3.0),
        max: Some(100.0),
        step: Some(1.0),
        ..BASE
    },
    FilterConfig {
        id: FilterId::Ceiling,
        label: "Ceiling height",
        kind: FilterKind::Range,
        visible_for: VisibleFor {
            property_types: BUILT,
            deal_types: &[Sale, LongTerm],
        },
        components: FacetWidgets {
            desktop: WidgetKind::RangeInputs,
            mobile: WidgetKind::RangeInputs,
        },
        min: Some(2.0),
        max: Some(6.0),
        step: Some(0.1),
        unit: Some("m"),
        ..BASE
    },
    FilterConfig {
        id: FilterId::Building,
        label: "Building",
        kind: FilterKind::Select,
        visible_for: VisibleFor {
            property_types: BUILT,
            deal_types: &[Sale, LongTerm],
        },
        components: FacetWidgets {
            desktop: WidgetKind::BuildingForm,
            mobile: WidgetKind::BuildingForm,
        },
        field_options: BUILDING_FIELD_OPTIONS,
        min: Some(1900.0),
        max: Some(2030.0),
        ..BASE
    },
    FilterConfig {
        id: FilterId::SpecialCondition,
        label: "Special conditions",
        kind: FilterKind::Toggle,
        visible_for: VisibleFor {
            property_types: ALL_TYPES,
            deal_types: &[Sale],
        },
        ..BASE
    },
    FilterConfig {
        id: FilterId::Furnishing,
        label: "Furnishing",
        visible_for: VisibleFor {
            property_types: RESIDENTIAL,
            deal_types: RENTALS,
        },
        options: FURNISHING_OPTIONS,
        ..BASE
    },
    FilterConfig {
        id: FilterId::Furnished,
        label: "Furnished",
        kind: FilterKind::Toggle,
        visible_for: VisibleFor {
            property_types: &[Office, Commercial],
            deal_types: &[Sale, LongTerm],
        },
        components: FacetWidgets {
            desktop: WidgetKind::Toggle,
            mobile: WidgetKind::Toggle,
        },
        ..BASE
    },
    FilterConfig {
        id: FilterId::Layout,
        label: "Layout",
        visible_for: VisibleFor {
            property_types: RESIDENTIAL,
            deal_types: ALL_DEALS,
        },
        options: LAYOUT_OPTIONS,
        ..BASE
    },
    FilterConfig {
        id: FilterId::View,
        label: "View",
        visible_for: VisibleFor {
            property_types: RESIDENTIAL,
            deal_types: ALL_DEALS,
        },
        options: VIEW_OPTIONS,
        ..BASE
    },
    FilterConfig {
        id: FilterId::BuildingAmenities,
        label: "Building amenities",
        visible_for: VisibleFor {
            property_types: &[Apartment, Office],
            deal_types: ALL_DEALS,
        },
        options: BUILDING_AMENITY_OPTIONS,
        ..BASE
    },
    FilterConfig {
        id: FilterId::Safety,
        label: "Safety",
        visible_for: VisibleFor {
            property_types: RESIDENTIAL,
            deal_types: &[ShortTerm],
        },
        options: SAFETY_OPTIONS,
        ..BASE
    },
    FilterConfig {
        id: FilterId::Utilities,
        label: "Utilities",
        visible_for: VisibleFor {
            property_types: ALL_TYPES,
            deal_types: &[Sale, LongTerm],
        },
        options: UTILITY_OPTIONS,
        ..BASE
    },
    FilterConfig {
        id: FilterId::BasicSupplies,
        label: "Basic supplies",
        visible_for: VisibleFor {
            property_types: RESIDENTIAL,
            deal_types: &[ShortTerm],
        },
        options: BASIC_SUPPLY_OPTIONS,
        ..BASE
    },
    FilterConfig {
        id: FilterId::ZoningCategory,
        label: "Zoning category",
        kind: FilterKind::Select,
        visible_for: VisibleFor {
            property_types: &[Land],
            deal_types: &[Sale],
        },
        components: FacetWidgets {
            desktop: WidgetKind::Dropdown,
            mobile: WidgetKind::BottomSheet,
        },
        options: ZONING_OPTIONS,
        ..BASE
    },
];
