// templates/pages/saved_filters.rs

use crate::saved::SavedFilter;
use crate::templates::{
    components::{badge, card, filter_chips},
    desktop_layout,
};
use maud::{html, Markup};

pub fn saved_filters_page(filters: &[SavedFilter]) -> Markup {
    desktop_layout(
        "Saved searches",
        html! {
            h1 { "Saved searches" }

            @if filters.is_empty() {
                p { "You have no saved searches yet." }
            }

            @for filter in filters {
                (card(&filter.title, html! {
                    @if let Some(count) = filter.new_count {
                        (badge(count))
                    }
                    (filter_chips(&filter.tips()))
                    p class="meta" {
                        (filter.property_count) " properties · updated "
                        (filter.updated_at.format("%-d %b %Y").to_string())
                    }
                    a href={ "/search?" (filter.search_params().to_query_string()) } { "Open search" }
                }))
            }
        },
    )
}
