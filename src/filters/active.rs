// src/filters/active.rs

use crate::filters::collect::{collect_all_filters, CollectOptions};
use crate::filters::types::{DealType, FilterId, PropertyType};
use crate::filters::values::{FilterValue, FilterValues};

/// Whether `value` differs from the facet's unset state.
///
/// A value whose shape does not belong to the facet is never active.
pub fn is_filter_active(id: FilterId, value: Option<&FilterValue>) -> bool {
    let Some(value) = value else {
        return false;
    };

    match (id, value) {
        (FilterId::Location | FilterId::ZoningCategory, FilterValue::Text(s)) => !s.trim().is_empty(),
        (FilterId::Furnished, FilterValue::Flag(b)) => *b,
        (FilterId::Price | FilterId::Ceiling, FilterValue::Range(r)) => r.min.is_some() || r.max.is_some(),
        (FilterId::Area, FilterValue::Area(a)) => {
            a.living_area_min.is_some()
                || a.living_area_max.is_some()
                || a.total_area_min.is_some()
                || a.total_area_max.is_some()
        }
        (FilterId::Floor, FilterValue::Floor(f)) => {
            f.floor_level_min.is_some()
                || f.floor_level_max.is_some()
                || f.total_floors_min.is_some()
                || f.total_floors_max.is_some()
        }
        // zero rooms is the picker's "any" position
        (FilterId::BedsBaths, FilterValue::BedsBaths(b)) => {
            b.bedrooms.is_some_and(|n| n > 0) || b.bathrooms.is_some_and(|n| n > 0)
        }
        (FilterId::Guests, FilterValue::Guests(g)) => {
            g.max_guests.is_some_and(|n| n > 0)
                || g.disabled_access == Some(true)
                || g.pets_allowed == Some(true)
        }
        (FilterId::Building, FilterValue::Building(b)) => {
            b.year.is_some()
                || non_empty(&b.condition)
                || non_empty(&b.renovation)
                || non_empty(&b.property_class)
        }
        (FilterId::Availability, FilterValue::Availability(a)) => {
            a.move_in_date.is_some() || a.show_without_date == Some(true)
        }
        (FilterId::SpecialCondition, FilterValue::SpecialCondition(s)) => {
            s.flags().iter().any(|(_, flag)| *flag == Some(true))
        }
        (
            FilterId::PropertyType
            | FilterId::Amenities
            | FilterId::Furnishing
            | FilterId::Layout
            | FilterId::View
            | FilterId::BuildingAmenities
            | FilterId::Safety
            | FilterId::Utilities
            | FilterId::BasicSupplies,
            FilterValue::List(items),
        ) => !items.is_empty(),
        _ => false,
    }
}

/// String-keyed entry point; ids the registry does not know are inactive.
pub fn is_filter_active_by_name(id: &str, value: Option<&FilterValue>) -> bool {
    FilterId::parse(id).is_some_and(|id| is_filter_active(id, value))
}

fn non_empty(s: &Option<String>) -> bool {
    s.as_deref().is_some_and(|s| !s.is_empty())
}

/// Badge count for the filter button.
pub fn count_active_filters(
    values: &FilterValues,
    property_types: &[PropertyType],
    deal_type: Option<DealType>,
) -> usize {
    collect_all_filters(
        values,
        &CollectOptions {
            only_active: true,
            property_types: property_types.to_vec(),
            deal_type,
            ..CollectOptions::default()
        },
    )
    .len()
}

pub fn has_active_filters(
    values: &FilterValues,
    property_types: &[PropertyType],
    deal_type: Option<DealType>,
) -> bool {
    count_active_filters(values, property_types, deal_type) > 0
}
