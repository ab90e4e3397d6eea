// src/filters/visibility.rs

use crate::filters::config::{FilterConfig, FILTERS_CONFIG};
use crate::filters::types::{DealType, FilterId, PropertyType};

/// Facets that get dedicated affordances on small screens instead of a bar slot.
const MOBILE_DEDICATED: [FilterId; 3] = [FilterId::Price, FilterId::BedsBaths, FilterId::PropertyType];

/// Every registry entry applicable to the selection, in registry order.
///
/// No deal type means nothing has been chosen yet, so nothing is shown.
pub fn get_visible_filters(
    property_types: &[PropertyType],
    deal_type: Option<DealType>,
) -> Vec<&'static FilterConfig> {
    let Some(deal) = deal_type else {
        return Vec::new();
    };

    FILTERS_CONFIG
        .iter()
        .filter(|c| c.applies_to_deal(deal) && c.applies_to_any(property_types))
        .collect()
}

/// The inline subset of the visible facets, ordered by bar priority.
pub fn get_filters_for_mobile_bar(
    property_types: &[PropertyType],
    deal_type: Option<DealType>,
    is_mobile: bool,
) -> Vec<&'static FilterConfig> {
    let mut bar: Vec<&'static FilterConfig> = get_visible_filters(property_types, deal_type)
        .into_iter()
        .filter(|c| c.mobile.show_in_bar)
        .filter(|c| !is_mobile || !MOBILE_DEDICATED.contains(&c.id))
        .collect();

    // stable: equal priorities keep registry order
    bar.sort_by_key(|c| c.mobile.priority);
    bar
}

/// Visible facets that did not make it into the bar, in registry order.
pub fn get_filters_for_popup(
    property_types: &[PropertyType],
    deal_type: Option<DealType>,
    is_mobile: bool,
) -> Vec<&'static FilterConfig> {
    let bar = get_filters_for_mobile_bar(property_types, deal_type, is_mobile);

    get_visible_filters(property_types, deal_type)
        .into_iter()
        .filter(|c| !bar.iter().any(|b| b.id == c.id))
        .collect()
}
