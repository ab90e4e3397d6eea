pub mod saved_filters;

pub use saved_filters::saved_filters_page;
