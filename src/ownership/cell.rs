//! The exclusively-owned heap cell.

use super::ReleaseTracker;
use std::fmt;
use tracing::{debug, info};

/// A value that owns exactly one heap-allocated integer.
///
/// # Ownership Note
/// The three operations a hand-managed resource needs are all present, just under
/// their Rust names:
///
/// | Operation        | Rust                         |
/// |------------------|------------------------------|
/// | copy-construct   | [`Clone::clone`]             |
/// | copy-assign      | [`Clone::clone_from`]        |
/// | destroy          | [`Drop::drop`]               |
///
/// `clone` allocates a fresh cell, so two cells never share storage. `clone_from`
/// writes into the destination's existing allocation instead of freeing and
/// reallocating it. `x.clone_from(&x)` does not compile (it would need `&mut x` and
/// `&x` at once), so there is no self-assignment case to guard against at runtime.
pub struct OwnedCell {
    data: Box<i32>,
    tracker: Option<ReleaseTracker>,
}

impl OwnedCell {
    /// Allocates a new cell holding `value`.
    pub fn new(value: i32) -> Self {
        info!(value, "Constructed");
        Self {
            data: Box::new(value),
            tracker: None,
        }
    }

    /// Allocates a new cell whose release is reported to `tracker`.
    ///
    /// Copies made with [`Clone::clone`] report to the same tracker.
    pub fn with_tracker(value: i32, tracker: ReleaseTracker) -> Self {
        let mut cell = Self::new(value);
        cell.tracker = Some(tracker);
        cell
    }

    pub fn get(&self) -> i32 {
        *self.data
    }

    /// Overwrites the owned value. Only this cell observes the change.
    pub fn set(&mut self, value: i32) {
        debug!(from = *self.data, to = value, "Set");
        *self.data = value;
    }

    /// Address of the owned heap cell, for checking that storage is never shared.
    pub fn storage_addr(&self) -> *const i32 {
        &*self.data
    }
}

impl Clone for OwnedCell {
    fn clone(&self) -> Self {
        info!(value = *self.data, "Copy constructed");
        Self {
            data: Box::new(*self.data),
            tracker: self.tracker.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        info!(from = *self.data, to = *source.data, "Assigned");
        *self.data = *source.data;
    }
}

impl Drop for OwnedCell {
    fn drop(&mut self) {
        info!(value = *self.data, "Released");
        if let Some(tracker) = &self.tracker {
            tracker.record(*self.data);
        }
    }
}

impl fmt::Display for OwnedCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value {}", self.data)
    }
}

impl fmt::Debug for OwnedCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedCell")
            .field("value", &*self.data)
            .field("tracked", &self.tracker.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_is_deep() {
        let original = OwnedCell::new(10);
        let mut copy = original.clone();

        assert_ne!(original.storage_addr(), copy.storage_addr());

        copy.set(20);
        assert_eq!(original.get(), 10);
        assert_eq!(copy.get(), 20);
    }

    #[test]
    fn test_clone_from_keeps_own_storage() {
        let source = OwnedCell::new(20);
        let mut target = OwnedCell::new(30);
        let target_addr = target.storage_addr();

        target.clone_from(&source);

        assert_eq!(target.get(), 20);
        assert_eq!(target.storage_addr(), target_addr);
        assert_ne!(target.storage_addr(), source.storage_addr());

        target.set(99);
        assert_eq!(source.get(), 20);
    }

    #[test]
    fn test_display() {
        assert_eq!(OwnedCell::new(7).to_string(), "Value 7");
    }

    #[test]
    fn test_drop_reports_to_tracker_once() {
        let tracker = ReleaseTracker::new();
        {
            let cell = OwnedCell::with_tracker(5, tracker.clone());
            let _copy = cell.clone();
        }
        assert_eq!(tracker.count(), 2);
        assert_eq!(tracker.released(), vec![5, 5]);
    }

    #[test]
    fn test_untracked_cell_drops_quietly() {
        let tracker = ReleaseTracker::new();
        drop(OwnedCell::new(1));
        assert_eq!(tracker.count(), 0);
    }
}
