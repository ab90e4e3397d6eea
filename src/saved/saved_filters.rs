// src/saved/saved_filters.rs

use crate::errors::StorageError;
use crate::filters::collect::{collect_all_filters, CollectOptions};
use crate::filters::config::FILTERS_CONFIG;
use crate::filters::search_params::{
    convert_filter_values_to_search_params, convert_search_params_to_filter_values, SearchParams,
};
use crate::filters::tips::{generate_filter_tips, summarize, FilterTipItem};
use crate::filters::types::DealType;
use crate::filters::values::FilterValues;
use crate::saved::store::KeyValueStore;
use chrono::{DateTime, Utc};
use rand::distributions::Alphanumeric;
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

pub const SAVED_FILTERS_KEY: &str = "savedFilters";

const DEFAULT_TITLE: &str = "All properties";
const TITLE_TIPS: usize = 3;

/// A named search, persisted as one element of the JSON array stored
/// under [`SAVED_FILTERS_KEY`]. There is no schema version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedFilter {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_count: Option<u32>,
    pub deal_type: DealType,
    pub filter_query: FilterValues,
    pub updated_at: DateTime<Utc>,
    pub property_count: u64,
}

impl SavedFilter {
    /// Read-only chips for previews. Facets that no longer apply to the
    /// saved property types still show.
    pub fn tips(&self) -> Vec<FilterTipItem> {
        let options = CollectOptions {
            only_active: true,
            include_metadata: true,
            property_types: self.filter_query.property_types.clone().unwrap_or_default(),
            deal_type: Some(self.deal_type),
            check_visibility: false,
        };
        let collected = collect_all_filters(&self.filter_query, &options);
        generate_filter_tips(&collected, FILTERS_CONFIG, false)
    }

    pub fn search_params(&self) -> SearchParams {
        let mut params = convert_filter_values_to_search_params(&self.filter_query);
        params.deal_type = Some(self.deal_type);
        params
    }
}

/// Partial update; `None` leaves the stored field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavedFilterUpdate {
    pub title: Option<String>,
    pub new_count: Option<u32>,
    pub deal_type: Option<DealType>,
    pub filter_query: Option<FilterValues>,
    pub property_count: Option<u64>,
}

impl SavedFilterUpdate {
    fn merge_into(self, record: &mut SavedFilter) {
        if let Some(title) = self.title {
            record.title = title;
        }
        if let Some(new_count) = self.new_count {
            record.new_count = Some(new_count);
        }
        if let Some(deal_type) = self.deal_type {
            record.deal_type = deal_type;
        }
        if let Some(filter_query) = self.filter_query {
            record.filter_query = filter_query;
        }
        if let Some(property_count) = self.property_count {
            record.property_count = property_count;
        }
    }
}

/// Saved searches over a [`KeyValueStore`]. Every mutation reads the whole
/// list, changes it and writes it back; concurrent writers race and the
/// last write wins.
#[derive(Debug)]
pub struct SavedFilterStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> SavedFilterStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, SAVED_FILTERS_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Missing or unreadable data yields an empty list.
    pub fn get_saved_filters(&self) -> Vec<SavedFilter> {
        self.load().unwrap_or_else(|e| {
            warn!(key = %self.key, error = %e, "could not read saved filters");
            Vec::new()
        })
    }

    /// The stored list for a read-modify-write. Read failures propagate so a
    /// mutation never overwrites data it could not see; a corrupt blob is
    /// treated as an empty list.
    fn load(&self) -> Result<Vec<SavedFilter>, StorageError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(filters) => Ok(filters),
            Err(e) => {
                warn!(key = %self.key, error = %e, "saved filters are corrupt, ignoring");
                Ok(Vec::new())
            }
        }
    }

    pub fn find(&self, id: &str) -> Option<SavedFilter> {
        self.get_saved_filters().into_iter().find(|f| f.id == id)
    }

    pub fn save_filter(
        &self,
        title: &str,
        params: &SearchParams,
        property_count: u64,
    ) -> Result<SavedFilter, StorageError> {
        let filter_query = convert_search_params_to_filter_values(params);
        let mut record = SavedFilter {
            id: generate_filter_id(),
            title: title.trim().to_string(),
            new_count: None,
            deal_type: params.deal_type.unwrap_or_default(),
            filter_query,
            updated_at: Utc::now(),
            property_count,
        };
        if record.title.is_empty() {
            record.title = summarize(&record.tips(), TITLE_TIPS).unwrap_or_else(|| DEFAULT_TITLE.to_string());
        }

        let mut filters = self.load()?;
        filters.push(record.clone());
        self.write_all(&filters)?;

        info!(id = %record.id, total = filters.len(), "saved filter created");
        Ok(record)
    }

    pub fn update_filter(
        &self,
        id: &str,
        updates: SavedFilterUpdate,
    ) -> Result<SavedFilter, StorageError> {
        self.modify(id, |record| updates.merge_into(record))
    }

    /// Clears the "new listings" badge.
    pub fn mark_seen(&self, id: &str) -> Result<SavedFilter, StorageError> {
        self.modify(id, |record| record.new_count = None)
    }

    /// Deleting an unknown id is not an error.
    pub fn delete_filter(&self, id: &str) -> Result<(), StorageError> {
        let mut filters = self.load()?;
        let before = filters.len();
        filters.retain(|f| f.id != id);
        if filters.len() == before {
            debug!(id, "no saved filter to delete");
            return Ok(());
        }
        self.write_all(&filters)?;

        info!(id, removed = before - filters.len(), "saved filter deleted");
        Ok(())
    }

    fn modify<F>(&self, id: &str, change: F) -> Result<SavedFilter, StorageError>
    where
        F: FnOnce(&mut SavedFilter),
    {
        let mut filters = self.load()?;
        let record = filters
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| StorageError::NotFound(id.to_string()))?;
        change(record);
        record.updated_at = Utc::now();
        let updated = record.clone();

        self.write_all(&filters)?;
        info!(id, "saved filter updated");
        Ok(updated)
    }

    fn write_all(&self, filters: &[SavedFilter]) -> Result<(), StorageError> {
        let blob = serde_json::to_string(filters)?;
        self.store.set(&self.key, &blob).map_err(|e| {
            error!(key = %self.key, error = %e, "failed to write saved filters");
            e
        })
    }
}

/// Random v4 UUID, or a timestamp-based id when the OS has no entropy to give.
pub fn generate_filter_id() -> String {
    let mut bytes = [0u8; 16];
    match OsRng.try_fill_bytes(&mut bytes) {
        Ok(()) => uuid::Builder::from_random_bytes(bytes).into_uuid().to_string(),
        Err(e) => {
            warn!(error = %e, "os randomness unavailable, using fallback id");
            let now = Utc::now();
            let seed = now.timestamp_nanos_opt().unwrap_or_default() as u64;
            fallback_filter_id(&mut StdRng::seed_from_u64(seed), now)
        }
    }
}

fn fallback_filter_id<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> String {
    let suffix: String = (0..9)
        .map(|_| char::from(rng.sample(Alphanumeric)).to_ascii_lowercase())
        .collect();
    format!("{}-{}", now.timestamp_millis(), suffix)
}
