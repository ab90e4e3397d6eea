// src/filters/collect.rs

use crate::filters::active::is_filter_active;
use crate::filters::config::{FilterConfig, FILTERS_CONFIG};
use crate::filters::types::{DealType, FilterId, FilterKind, PropertyType};
use crate::filters::values::{FilterValue, FilterValues};
use crate::filters::visibility::get_visible_filters;
use serde::Serialize;

const LOCATION_LABEL: &str = "Location";

/// One facet's current state, recomputed on every read.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectedFilter {
    pub id: FilterId,
    pub value: Option<FilterValue>,
    pub is_active: bool,
    pub applicable_to: Vec<PropertyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<FilterKind>,
}

#[derive(Debug, Clone)]
pub struct CollectOptions {
    pub only_active: bool,
    pub include_metadata: bool,
    pub property_types: Vec<PropertyType>,
    pub deal_type: Option<DealType>,
    /// When off, every registry entry is collected regardless of the
    /// selection (saved searches may reference facets that are not selectable now).
    pub check_visibility: bool,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            only_active: false,
            include_metadata: false,
            property_types: Vec::new(),
            deal_type: None,
            check_visibility: true,
        }
    }
}

/// Location first, then each applicable registry facet in registry order.
pub fn collect_all_filters(values: &FilterValues, options: &CollectOptions) -> Vec<CollectedFilter> {
    let mut collected = Vec::new();

    let location = values.get(FilterId::Location);
    let location_active = is_filter_active(FilterId::Location, location.as_ref());
    if location_active || !options.only_active {
        collected.push(CollectedFilter {
            id: FilterId::Location,
            value: location,
            is_active: location_active,
            applicable_to: PropertyType::ALL.to_vec(),
            label: options.include_metadata.then_some(LOCATION_LABEL),
            kind: options.include_metadata.then_some(FilterKind::Select),
        });
    }

    let configs: Vec<&FilterConfig> = if options.check_visibility {
        get_visible_filters(&options.property_types, options.deal_type)
    } else {
        FILTERS_CONFIG.iter().collect()
    };

    for config in configs {
        let value = values.get(config.id);
        let is_active = is_filter_active(config.id, value.as_ref());
        if options.only_active && !is_active {
            continue;
        }
        collected.push(CollectedFilter {
            id: config.id,
            value,
            is_active,
            applicable_to: config.visible_for.property_types.to_vec(),
            label: options.include_metadata.then_some(config.label),
            kind: options.include_metadata.then_some(config.kind),
        });
    }

    collected
}
