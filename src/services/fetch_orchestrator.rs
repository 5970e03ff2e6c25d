//! The four-tier acquisition cascade
//!
//! `acquire` walks direct fetch, generative fallback, cache reuse and
//! procedural synthesis in that order and returns the first result. Every
//! failure inside a tier is logged and turned into a fall-through, so the
//! caller always receives image bytes.
//!
//! Both network tiers share one deadline (`fetch.acquisition_budget`); each
//! request's timeout is the smaller of its tier timeout and what is left.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use crate::catalog::SourceCatalog;
use crate::config::{Config, FetchConfig};
use crate::errors::{AppResult, SourceError, SourceResult};
use crate::models::{Acquisition, Category, ContentHash, Tier};
use crate::services::dedup_tracker::DedupTracker;
use crate::services::disk_cache::DiskCache;
use crate::services::stats::{AcquisitionStats, StatsSnapshot};
use crate::style_engine::{self, StyleEngine};
use crate::utils::{HttpImageFetcher, ImageFetcher, UrlUtils};

/// Drives one acquisition per request through the fallback tiers
pub struct FetchOrchestrator {
    catalog: SourceCatalog,
    dedup: DedupTracker,
    cache: DiskCache,
    styles: StyleEngine,
    fetcher: Arc<dyn ImageFetcher>,
    settings: FetchConfig,
    stats: AcquisitionStats,
}

/// Bytes produced by a network tier together with their digest
struct Fetched {
    bytes: Vec<u8>,
    hash: ContentHash,
}

impl FetchOrchestrator {
    /// Orchestrator with the built-in catalog and default cascade settings
    pub fn new(fetcher: Arc<dyn ImageFetcher>, cache: DiskCache) -> Self {
        Self {
            catalog: SourceCatalog::builtin(),
            dedup: DedupTracker::default(),
            cache,
            styles: StyleEngine::new(),
            fetcher,
            settings: FetchConfig::default(),
            stats: AcquisitionStats::new(),
        }
    }

    /// Wire every component from loaded configuration
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let fetcher = HttpImageFetcher::from_config(&config.fetch)?;
        let catalog = SourceCatalog::from_overrides(&config.sources)?;
        Ok(
            Self::new(Arc::new(fetcher), DiskCache::new(&config.storage.cache_path))
                .with_catalog(catalog)
                .with_dedup(DedupTracker::from_config(&config.dedup))
                .with_settings(config.fetch.clone()),
        )
    }

    pub fn with_catalog(mut self, catalog: SourceCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_dedup(mut self, dedup: DedupTracker) -> Self {
        self.dedup = dedup;
        self
    }

    pub fn with_settings(mut self, settings: FetchConfig) -> Self {
        self.settings = settings;
        self
    }

    pub fn catalog(&self) -> &SourceCatalog {
        &self.catalog
    }

    pub fn dedup(&self) -> &DedupTracker {
        &self.dedup
    }

    pub fn cache(&self) -> &DiskCache {
        &self.cache
    }

    pub fn styles(&self) -> &StyleEngine {
        &self.styles
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Acquire a wallpaper for a free-form mood label.
    ///
    /// Unknown labels are served as the default category.
    pub async fn acquire(&self, label: &str) -> Acquisition {
        let category = Category::normalize(label);
        if !label.trim().eq_ignore_ascii_case(category.as_str()) {
            debug!("Label '{}' normalized to {}", label, category);
        }
        self.acquire_category(category).await
    }

    /// Run the cascade for an already-normalized category
    pub async fn acquire_category(&self, category: Category) -> Acquisition {
        let deadline = Instant::now() + self.settings.acquisition_budget;

        let network = match self.direct_tier(category, deadline).await {
            Some(fetched) => Some((Tier::Direct, fetched)),
            None => self
                .generative_tier(category, deadline)
                .await
                .map(|fetched| (Tier::Generative, fetched)),
        };

        if let Some((tier, fetched)) = network {
            if tier.is_cacheable() {
                self.persist(category, &fetched).await;
            }
            return self.finish(Acquisition {
                category,
                tier,
                bytes: fetched.bytes,
                content_hash: Some(fetched.hash),
            });
        }

        if let Some(bytes) = self.cache_tier(category).await {
            return self.finish(Acquisition {
                category,
                tier: Tier::Cache,
                bytes,
                content_hash: None,
            });
        }

        let bytes = self.synthesis_tier(category).await;
        self.finish(Acquisition {
            category,
            tier: Tier::Synthesized,
            bytes,
            content_hash: None,
        })
    }

    /// Tier 1: round-robin direct sources with bounded duplicate retries
    async fn direct_tier(&self, category: Category, deadline: Instant) -> Option<Fetched> {
        let max_attempts = self.settings.max_direct_attempts.max(1);
        let mut last_duplicate: Option<Fetched> = None;

        for attempt in 1..=max_attempts {
            let Some(timeout) = remaining(deadline, self.settings.direct_timeout) else {
                warn!("Acquisition budget spent during direct tier for {}", category);
                break;
            };

            let url = self.catalog.next_url(category);
            debug!(
                "Direct attempt {}/{} for {}: {}",
                attempt,
                max_attempts,
                category,
                UrlUtils::obfuscate_credentials(url)
            );

            let bytes = match self.fetch(url, timeout).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    warn!("Direct tier failed for {}: {}", category, e);
                    break;
                }
            };

            let hash = ContentHash::of(&bytes);
            if !self.dedup.seen(category, &hash) {
                self.dedup.record(category, hash.clone());
                return Some(Fetched { bytes, hash });
            }

            self.stats.record_duplicate_hit();
            debug!(
                "Duplicate content {} for {} on attempt {}/{}",
                hash, category, attempt, max_attempts
            );
            last_duplicate = Some(Fetched { bytes, hash });
        }

        let duplicate = last_duplicate?;
        info!(
            "Accepting duplicate {} for {} after exhausting direct attempts",
            duplicate.hash, category
        );
        self.stats.record_duplicate_accepted();
        self.dedup.record(category, duplicate.hash.clone());
        Some(duplicate)
    }

    /// Tier 2: one request to the generative endpoint, no dedup
    async fn generative_tier(&self, category: Category, deadline: Instant) -> Option<Fetched> {
        let Some(timeout) = remaining(deadline, self.settings.generation_timeout) else {
            warn!("Acquisition budget spent, skipping generative tier for {}", category);
            return None;
        };

        let prompt = self.catalog.random_prompt(category);
        let url = UrlUtils::generation_url(
            &self.settings.generation_endpoint,
            &prompt.text(),
            self.settings.generation_width,
            self.settings.generation_height,
        );
        debug!(
            "Generative tier for {} via {} with prompt '{}' (seed {})",
            category,
            UrlUtils::host(&url).unwrap_or_default(),
            prompt.term,
            prompt.seed
        );

        match self.fetch(&url, timeout).await {
            Ok(bytes) => {
                let hash = ContentHash::of(&bytes);
                Some(Fetched { bytes, hash })
            }
            Err(e) => {
                warn!("Generative tier failed for {}: {}", category, e);
                None
            }
        }
    }

    /// Tier 3: a random entry previously written by a network tier
    async fn cache_tier(&self, category: Category) -> Option<Vec<u8>> {
        match self.cache.pick_random(category).await {
            Ok(Some(bytes)) => {
                info!("Serving cached wallpaper for {}", category);
                Some(bytes)
            }
            Ok(None) => {
                debug!("Cache empty for {}", category);
                None
            }
            Err(e) => {
                warn!("Cache tier failed for {}: {}", category, e);
                None
            }
        }
    }

    /// Tier 4: unseeded procedural render, never persisted
    async fn synthesis_tier(&self, category: Category) -> Vec<u8> {
        info!("Synthesizing wallpaper for {}", category);
        let styles = self.styles;
        match tokio::task::spawn_blocking(move || render_fallback(styles, category)).await {
            Ok(bytes) => bytes,
            Err(e) => {
                error!("Synthesis task failed for {}: {}; rendering inline", category, e);
                render_fallback(styles, category)
            }
        }
    }

    async fn fetch(&self, url: &str, timeout: Duration) -> SourceResult<Vec<u8>> {
        match tokio::time::timeout(timeout, self.fetcher.fetch(url, timeout)).await {
            Ok(result) => result,
            Err(_) => Err(SourceError::Timeout {
                url: UrlUtils::obfuscate_credentials(url),
            }),
        }
    }

    async fn persist(&self, category: Category, fetched: &Fetched) {
        match self.cache.put(category, &fetched.hash, &fetched.bytes).await {
            Ok(true) => self.stats.record_cache_write(),
            Ok(false) => debug!("Cache already holds {} for {}", fetched.hash, category),
            Err(e) => warn!("Failed to cache {} for {}: {}", fetched.hash, category, e),
        }
    }

    fn finish(&self, acquisition: Acquisition) -> Acquisition {
        self.stats.record_tier(acquisition.tier);
        info!(
            "Acquired {} wallpaper via {} tier ({} bytes)",
            acquisition.category,
            acquisition.tier,
            acquisition.bytes.len()
        );
        acquisition
    }
}

/// Time left before `deadline`, capped at `limit`; `None` once it has passed
fn remaining(deadline: Instant, limit: Duration) -> Option<Duration> {
    let left = deadline.saturating_duration_since(Instant::now());
    if left.is_zero() {
        None
    } else {
        Some(left.min(limit))
    }
}

fn render_fallback(styles: StyleEngine, category: Category) -> Vec<u8> {
    let image = styles.synthesize(category, None);
    match style_engine::encode_jpeg(&image) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("JPEG encoding failed for {}: {}; falling back to PNG", category, e);
            style_engine::encode_png(&image).expect("PNG encoding of an in-memory RGB canvas")
        }
    }
}
