//! Acquisition services
//!
//! - [`DedupTracker`]: per-category memory of recently served content
//! - [`DiskCache`]: write-once store of network-sourced wallpapers
//! - [`FetchOrchestrator`]: the tiered fallback cascade tying everything together

pub mod dedup_tracker;
pub mod disk_cache;
pub mod fetch_orchestrator;
pub mod stats;

pub use dedup_tracker::DedupTracker;
pub use disk_cache::DiskCache;
pub use fetch_orchestrator::FetchOrchestrator;
pub use stats::{AcquisitionStats, StatsSnapshot};
