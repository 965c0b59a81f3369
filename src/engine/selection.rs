use std::fmt;

use crate::domain::{RingVariant, VariantCatalog};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The key does not name any configured ring
    InvalidSelection(String),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::InvalidSelection(key) => {
                write!(f, "Invalid selection: no ring variant with key {:?}", key)
            }
        }
    }
}

impl std::error::Error for SelectionError {}

/// Which ring is currently chosen out of the catalog.
///
/// Starts on the first configured ring. Always holds a valid entry: a rejected
/// `select` leaves the previous choice in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    catalog: VariantCatalog,
    index: usize,
}

impl SelectionState {
    pub fn new(catalog: VariantCatalog) -> Self {
        Self { catalog, index: 0 }
    }

    /// Last write wins; selecting the current ring again is fine.
    pub fn select(&mut self, key: &str) -> Result<(), SelectionError> {
        let index = self
            .catalog
            .position(key)
            .ok_or_else(|| SelectionError::InvalidSelection(key.to_string()))?;
        self.index = index;
        Ok(())
    }

    pub fn current(&self) -> &'static RingVariant {
        // index only ever comes from `position`, so it is in range
        self.catalog.at(self.index).unwrap_or_else(|| self.catalog.first())
    }

    pub fn current_key(&self) -> &'static str {
        self.current().key
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.current_key() == key
    }

    pub fn catalog(&self) -> VariantCatalog {
        self.catalog
    }
}
