mod facet_tests;
mod page_tests;
mod saved_filter_tests;
