// src/filters/editor.rs

use crate::errors::FilterError;
use crate::filters::active::is_filter_active;
use crate::filters::config::FilterConfig;
use crate::filters::types::FilterId;
use crate::filters::values::{BedsBathsValue, FilterValue, FilterValues};

/// When a widget's edits reach the search state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitMode {
    /// Edits stay in the draft until `apply` (popup with an Apply button).
    Apply,
    /// Every edit is committed as it happens (inline selects, toggles).
    Immediate,
}

/// An `onChange` call: `value: None` clears the facet.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterChange {
    pub filter_id: FilterId,
    pub value: Option<FilterValue>,
}

impl FilterChange {
    pub fn apply_to(&self, values: &mut FilterValues) -> bool {
        values.set(self.filter_id, self.value.clone())
    }
}

/// Draft/commit state for one facet widget.
#[derive(Debug, Clone)]
pub struct FacetEditor {
    config: &'static FilterConfig,
    mode: CommitMode,
    committed: Option<FilterValue>,
    draft: Option<FilterValue>,
}

impl FacetEditor {
    pub fn new(config: &'static FilterConfig, current: Option<FilterValue>, mode: CommitMode) -> Self {
        Self {
            config,
            mode,
            draft: current.clone(),
            committed: current,
        }
    }

    pub fn filter_id(&self) -> FilterId {
        self.config.id
    }

    pub fn draft(&self) -> Option<&FilterValue> {
        self.draft.as_ref()
    }

    pub fn committed(&self) -> Option<&FilterValue> {
        self.committed.as_ref()
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.committed
    }

    /// Replaces the draft. In `Immediate` mode the change is committed and returned.
    pub fn edit(&mut self, value: Option<FilterValue>) -> Result<Option<FilterChange>, FilterError> {
        if let Some(v) = &value {
            if !self.config.accepts(v) {
                return Err(FilterError::ValueShape {
                    filter_id: self.config.id,
                });
            }
        }
        self.draft = value;

        match self.mode {
            CommitMode::Immediate => Ok(self.commit()),
            CommitMode::Apply => Ok(None),
        }
    }

    /// Commits the draft. Returns `None` when nothing changed.
    pub fn apply(&mut self) -> Option<FilterChange> {
        self.commit()
    }

    /// Drops uncommitted edits.
    pub fn cancel(&mut self) {
        self.draft = self.committed.clone();
    }

    /// Clears the facet and commits right away, whatever the mode.
    pub fn clear(&mut self) -> FilterChange {
        self.draft = None;
        self.committed = None;
        FilterChange {
            filter_id: self.config.id,
            value: None,
        }
    }

    /// Beds/baths "exact match" switch; only meaningful on that facet.
    pub fn set_exact_match(&mut self, exact: bool) -> Result<Option<FilterChange>, FilterError> {
        let current = match self.draft.take() {
            Some(FilterValue::BedsBaths(b)) => b,
            None => BedsBathsValue::default(),
            Some(other) => {
                self.draft = Some(other);
                return Err(FilterError::ValueShape {
                    filter_id: self.config.id,
                });
            }
        };
        self.edit(Some(FilterValue::BedsBaths(current.with_exact_match(exact))))
    }

    fn commit(&mut self) -> Option<FilterChange> {
        if !self.is_dirty() {
            return None;
        }
        // a draft that is set but inactive is committed as a clear
        let value = self
            .draft
            .clone()
            .filter(|v| is_filter_active(self.config.id, Some(v)));
        self.committed = self.draft.clone();
        Some(FilterChange {
            filter_id: self.config.id,
            value,
        })
    }
}
