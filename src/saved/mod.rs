pub mod saved_filters;
pub mod store;

pub use saved_filters::{SavedFilter, SavedFilterStore, SavedFilterUpdate, SAVED_FILTERS_KEY};
pub use store::{KeyValueStore, MemoryStore, SqliteStore};
