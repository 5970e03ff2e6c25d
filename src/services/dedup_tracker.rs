//! Per-category memory of recently served content hashes
//!
//! Each category owns an insertion-ordered set (an unbounded [`LruCache`]
//! used purely for its ordering). When a set grows past `max_entries` the
//! oldest hashes are dropped until `trim_to` remain, so trimming is
//! deterministic and the newest hashes always survive.

use lru::LruCache;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

use crate::config::DedupConfig;
use crate::models::{Category, ContentHash};

/// Bounded recently-seen sets, one per category
#[derive(Debug)]
pub struct DedupTracker {
    sets: Vec<Mutex<LruCache<ContentHash, ()>>>,
    max_entries: usize,
    trim_to: usize,
}

impl DedupTracker {
    /// Create a tracker; `trim_to` is clamped below `max_entries`
    pub fn new(max_entries: usize, trim_to: usize) -> Self {
        let max_entries = max_entries.max(1);
        Self {
            sets: Category::all()
                .map(|_| Mutex::new(LruCache::unbounded()))
                .collect(),
            max_entries,
            trim_to: trim_to.min(max_entries - 1),
        }
    }

    pub fn from_config(config: &DedupConfig) -> Self {
        Self::new(config.max_entries, config.trim_to)
    }

    /// Whether `hash` was recorded recently for `category`
    pub fn seen(&self, category: Category, hash: &ContentHash) -> bool {
        self.set(category).contains(hash)
    }

    /// Insert `hash`, trimming the oldest entries once the bound is exceeded.
    ///
    /// Re-recording a known hash refreshes it to newest.
    pub fn record(&self, category: Category, hash: ContentHash) {
        let mut set = self.set(category);
        set.put(hash, ());

        if set.len() > self.max_entries {
            let before = set.len();
            while set.len() > self.trim_to {
                if set.pop_lru().is_none() {
                    break;
                }
            }
            debug!(
                "Trimmed dedup set for {} from {} to {} entries",
                category,
                before,
                set.len()
            );
        }
    }

    /// Number of hashes currently remembered for `category`
    pub fn len(&self, category: Category) -> usize {
        self.set(category).len()
    }

    pub fn is_empty(&self, category: Category) -> bool {
        self.len(category) == 0
    }

    fn set(&self, category: Category) -> MutexGuard<'_, LruCache<ContentHash, ()>> {
        // Every mutation completes under the lock, so a poisoned set is still consistent.
        self.sets[category as usize]
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for DedupTracker {
    fn default() -> Self {
        Self::from_config(&DedupConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn hash(i: usize) -> ContentHash {
        ContentHash::of(format!("image-{i}").as_bytes())
    }

    #[test]
    fn test_seen_after_record() {
        let tracker = DedupTracker::default();
        let h = hash(1);
        assert!(!tracker.seen(Category::Happy, &h));
        tracker.record(Category::Happy, h.clone());
        assert!(tracker.seen(Category::Happy, &h));
        assert!(!tracker.seen(Category::Sad, &h));
    }

    #[test]
    fn test_trim_keeps_newest_entries() {
        let tracker = DedupTracker::new(100, 50);
        for i in 0..=100 {
            tracker.record(Category::Neutral, hash(i));
        }

        // The 101st insert crosses the bound and trims to 50.
        assert_eq!(tracker.len(Category::Neutral), 50);
        for i in 0..51 {
            assert!(!tracker.seen(Category::Neutral, &hash(i)), "hash {i} should be trimmed");
        }
        for i in 51..=100 {
            assert!(tracker.seen(Category::Neutral, &hash(i)), "hash {i} should survive");
        }
    }

    #[test]
    fn test_rerecord_refreshes_position() {
        let tracker = DedupTracker::new(3, 2);
        tracker.record(Category::Fear, hash(0));
        tracker.record(Category::Fear, hash(1));
        tracker.record(Category::Fear, hash(2));
        tracker.record(Category::Fear, hash(0));
        tracker.record(Category::Fear, hash(3));

        assert_eq!(tracker.len(Category::Fear), 2);
        assert!(tracker.seen(Category::Fear, &hash(0)));
        assert!(tracker.seen(Category::Fear, &hash(3)));
        assert!(!tracker.seen(Category::Fear, &hash(1)));
        assert!(!tracker.seen(Category::Fear, &hash(2)));
    }

    #[test]
    fn test_duplicate_record_does_not_grow() {
        let tracker = DedupTracker::default();
        tracker.record(Category::Angry, hash(9));
        tracker.record(Category::Angry, hash(9));
        assert_eq!(tracker.len(Category::Angry), 1);
    }

    proptest! {
        #[test]
        fn prop_set_never_exceeds_bound(ids in proptest::collection::vec(0usize..500, 0..400)) {
            let tracker = DedupTracker::new(100, 50);
            for id in &ids {
                tracker.record(Category::Surprise, hash(*id));
                prop_assert!(tracker.len(Category::Surprise) <= 100);
            }
            if let Some(last) = ids.last() {
                prop_assert!(tracker.seen(Category::Surprise, &hash(*last)));
            }
        }
    }
}
