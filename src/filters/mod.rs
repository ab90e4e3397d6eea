pub mod active;
pub mod collect;
pub mod config;
pub mod editor;
pub mod format;
pub mod search_params;
pub mod tips;
pub mod types;
pub mod values;
pub mod visibility;

pub use active::count_active_filters;
pub use collect::{collect_all_filters, CollectOptions};
pub use config::{FilterConfig, FILTERS_CONFIG};
pub use search_params::{convert_search_params_to_filter_values, SearchParams};
pub use tips::{generate_filter_tips, FilterTipItem};
pub use types::{FilterId, FilterKind};
pub use visibility::{get_filters_for_mobile_bar, get_filters_for_popup, get_visible_filters};
