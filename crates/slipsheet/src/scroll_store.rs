//! Saved scroll offsets across sheet and route lifecycles.

use slipsheet_core::collections;
use slipsheet_core::collections::map::HashMap;
use std::cell::RefCell;
use std::hash::{Hash, Hasher};

/// Stable key for a scroll region, derived from its route or list name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RegionId(u64);

impl RegionId {
    pub fn from_name(name: &str) -> Self {
        let mut hasher = collections::hasher::new();
        name.hash(&mut hasher);
        Self(hasher.finish())
    }
}

/// Scroll offsets remembered across navigation.
///
/// Owned by the host with the host's lifecycle: create one per app surface,
/// drop it to forget everything. Nothing in here is global.
#[derive(Default)]
pub struct ScrollPositionStore {
    offsets: RefCell<HashMap<RegionId, f32>>,
}

impl ScrollPositionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remembers an offset for a region. Non-finite offsets are ignored,
    /// negative ones saved as zero.
    pub fn save(&self, region: RegionId, offset: f32) {
        if offset.is_finite() {
            self.offsets.borrow_mut().insert(region, offset.max(0.0));
        }
    }

    pub fn restore(&self, region: RegionId) -> Option<f32> {
        self.offsets.borrow().get(&region).copied()
    }

    pub fn clear(&self, region: RegionId) {
        self.offsets.borrow_mut().remove(&region);
    }

    pub fn len(&self) -> usize {
        self.offsets.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_offsets_restore_by_region() {
        let store = ScrollPositionStore::new();
        let feed = RegionId::from_name("feed");
        let detail = RegionId::from_name("detail/42");

        store.save(feed, 812.5);
        store.save(detail, 64.0);

        assert_eq!(store.restore(feed), Some(812.5));
        assert_eq!(store.restore(detail), Some(64.0));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn unknown_region_restores_nothing() {
        let store = ScrollPositionStore::new();
        assert_eq!(store.restore(RegionId::from_name("missing")), None);
        assert!(store.is_empty());
    }

    #[test]
    fn clear_forgets_a_single_region() {
        let store = ScrollPositionStore::new();
        let feed = RegionId::from_name("feed");
        let other = RegionId::from_name("other");
        store.save(feed, 10.0);
        store.save(other, 20.0);

        store.clear(feed);
        assert_eq!(store.restore(feed), None);
        assert_eq!(store.restore(other), Some(20.0));
    }

    #[test]
    fn region_ids_are_stable_per_name() {
        assert_eq!(RegionId::from_name("feed"), RegionId::from_name("feed"));
        assert_ne!(RegionId::from_name("feed"), RegionId::from_name("detail"));
    }

    #[test]
    fn bogus_offsets_never_enter_the_store() {
        let store = ScrollPositionStore::new();
        let feed = RegionId::from_name("feed");

        store.save(feed, f32::NAN);
        assert_eq!(store.restore(feed), None);

        store.save(feed, -32.0);
        assert_eq!(store.restore(feed), Some(0.0));
    }
}
