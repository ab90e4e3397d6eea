use crate::filters::tips::FilterTipItem;
use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Read-only chip list for one search.
pub fn filter_chips(tips: &[FilterTipItem]) -> Markup {
    html! {
        @if tips.is_empty() {
            p class="chips-empty" { "No filters" }
        } @else {
            ul class="chips" {
                @for tip in tips {
                    li class="chip" data-filter=(tip.filter_id.as_str()) { (tip.text) }
                }
            }
        }
    }
}

pub fn badge(count: u32) -> Markup {
    html! {
        span class="badge" { "+" (count) " new" }
    }
}
