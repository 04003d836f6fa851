// Dataset trait - unified interface for indexed data sources

use doorhandle_core::{Error, Result};

/// A dataset is an indexed collection of items loaded on demand.
///
/// Implementations must be `Send + Sync` so callers can read independent
/// indices from several threads at once.
pub trait Dataset: Send + Sync {
    /// What `get` produces.
    type Item;

    /// Total number of items in the dataset.
    fn len(&self) -> usize;

    /// Whether the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Retrieve the item at position `index`.
    ///
    /// Fails with [`Error::IndexOutOfRange`] if `index >= self.len()`.
    fn get(&self, index: usize) -> Result<Self::Item>;

    /// Optional human-readable name.
    fn name(&self) -> &str {
        "dataset"
    }
}

/// Return `IndexOutOfRange` unless `index < len`.
pub fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange {
            index: index as i128,
            len,
        })
    }
}
