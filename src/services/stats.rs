//! Lock-free counters describing how acquisitions were satisfied

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::models::Tier;

/// Per-tier outcome counters shared by all requests
#[derive(Debug, Default)]
pub struct AcquisitionStats {
    direct: AtomicU64,
    generative: AtomicU64,
    cache: AtomicU64,
    synthesized: AtomicU64,
    duplicate_hits: AtomicU64,
    duplicates_accepted: AtomicU64,
    cache_writes: AtomicU64,
}

/// Point-in-time copy of [`AcquisitionStats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub direct: u64,
    pub generative: u64,
    pub cache: u64,
    pub synthesized: u64,
    /// Direct fetches whose content had been served recently
    pub duplicate_hits: u64,
    /// Acquisitions that served a duplicate after exhausting attempts
    pub duplicates_accepted: u64,
    pub cache_writes: u64,
}

impl StatsSnapshot {
    pub fn total(&self) -> u64 {
        self.direct + self.generative + self.cache + self.synthesized
    }
}

impl AcquisitionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_tier(&self, tier: Tier) {
        let counter = match tier {
            Tier::Direct => &self.direct,
            Tier::Generative => &self.generative,
            Tier::Cache => &self.cache,
            Tier::Synthesized => &self.synthesized,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_duplicate_hit(&self) {
        self.duplicate_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_duplicate_accepted(&self) {
        self.duplicates_accepted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_write(&self) {
        self.cache_writes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            direct: self.direct.load(Ordering::Relaxed),
            generative: self.generative.load(Ordering::Relaxed),
            cache: self.cache.load(Ordering::Relaxed),
            synthesized: self.synthesized.load(Ordering::Relaxed),
            duplicate_hits: self.duplicate_hits.load(Ordering::Relaxed),
            duplicates_accepted: self.duplicates_accepted.load(Ordering::Relaxed),
            cache_writes: self.cache_writes.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_counts() {
        let stats = AcquisitionStats::new();
        stats.record_tier(Tier::Direct);
        stats.record_tier(Tier::Direct);
        stats.record_tier(Tier::Synthesized);
        stats.record_duplicate_hit();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.direct, 2);
        assert_eq!(snapshot.synthesized, 1);
        assert_eq!(snapshot.duplicate_hits, 1);
        assert_eq!(snapshot.total(), 3);
    }

    #[test]
    fn test_snapshot_serializes_flat() {
        let json = serde_json::to_value(AcquisitionStats::new().snapshot()).unwrap();
        assert_eq!(json["cache_writes"], 0);
        assert_eq!(json["generative"], 0);
    }
}
