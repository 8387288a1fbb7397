//! Metadata row filters.
use std::collections::HashSet;

use super::{Filter, FilterMut};
use crate::sources::cord::MetadataRow;

/// Keeps rows that reference at least one parsed document.
#[derive(Debug, Default, Clone, Copy)]
pub struct HasLocator;

impl Filter<&MetadataRow> for HasLocator {
    fn detect(&self, row: &MetadataRow) -> bool {
        row.pmc_files().next().is_some() || row.pdf_files().next().is_some()
    }
}

/// Identifiers already processed, either by a previous run or by the current one.
///
/// [Filter::detect] only checks, [FilterMut::detect_mut] checks and marks.
#[derive(Debug, Default, Clone)]
pub struct Unseen {
    ids: HashSet<String>,
}

impl Unseen {
    pub fn new(ids: HashSet<String>) -> Self {
        Self { ids }
    }

    /// Number of known identifiers.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Unmark an identifier, so that a later row with the same identifier gets another chance.
    pub fn forget(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }
}

impl Filter<&str> for Unseen {
    fn detect(&self, id: &str) -> bool {
        !self.ids.contains(id)
    }
}

impl FilterMut<&str> for Unseen {
    fn detect_mut(&mut self, id: &str) -> bool {
        if self.ids.contains(id) {
            false
        } else {
            self.ids.insert(id.to_string())
        }
    }
}
