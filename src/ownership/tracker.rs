//! Release observer for [`OwnedCell`](super::OwnedCell).

use std::sync::{Arc, Mutex, PoisonError};

/// Records every value released by the cells it is attached to.
///
/// Clones share the same record, so a tracker handed to a cell (and inherited by its
/// copies) can be inspected afterwards by the code that created it.
#[derive(Debug, Clone, Default)]
pub struct ReleaseTracker {
    released: Arc<Mutex<Vec<i32>>>,
}

impl ReleaseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&self, value: i32) {
        self.released
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(value);
    }

    /// Number of releases observed so far.
    pub fn count(&self) -> usize {
        self.released.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Values released so far, in release order.
    pub fn released(&self) -> Vec<i32> {
        self.released.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}
