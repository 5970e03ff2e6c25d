//! Immutable per-category source and prompt lists
//!
//! The lists are built once at startup (built-in tables, optionally replaced
//! per category from configuration) and never change afterwards. The only
//! mutable state is one round-robin cursor per category, advanced atomically
//! so concurrent requests never observe a torn or skipped position.

use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::EnumCount;
use tracing::debug;

use crate::config::SourceOverride;
use crate::errors::{AppError, AppResult};
use crate::models::Category;

pub mod tables;

/// Inclusive range of the variation number appended to generation prompts
pub const PROMPT_SEED_RANGE: std::ops::RangeInclusive<u32> = 1..=1000;

/// A prompt picked for the generative fallback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPrompt {
    /// Search term from the category's prompt list
    pub term: String,
    /// Variation number in [`PROMPT_SEED_RANGE`]
    pub seed: u32,
}

impl GenerationPrompt {
    /// Full prompt text sent to the generator
    pub fn text(&self) -> String {
        format!(
            "{}, highly detailed, 8k wallpaper, cinematic lighting, {}",
            self.term, self.seed
        )
    }
}

#[derive(Debug)]
struct CategorySources {
    urls: Vec<String>,
    prompts: Vec<String>,
    cursor: AtomicUsize,
}

impl CategorySources {
    fn builtin(category: Category) -> Self {
        Self {
            urls: tables::direct_urls(category)
                .iter()
                .map(|s| s.to_string())
                .collect(),
            prompts: tables::prompts(category)
                .iter()
                .map(|s| s.to_string())
                .collect(),
            cursor: AtomicUsize::new(0),
        }
    }
}

/// Static source catalog with one shared cursor per category
#[derive(Debug)]
pub struct SourceCatalog {
    /// Indexed by `Category as usize`; always holds every category
    entries: Vec<CategorySources>,
}

impl SourceCatalog {
    /// Catalog backed by the built-in tables
    pub fn builtin() -> Self {
        let entries: Vec<CategorySources> = Category::all().map(CategorySources::builtin).collect();
        debug_assert_eq!(entries.len(), Category::COUNT);
        Self { entries }
    }

    /// Built-in catalog with configured per-category replacements applied
    pub fn from_overrides(overrides: &BTreeMap<Category, SourceOverride>) -> AppResult<Self> {
        let mut catalog = Self::builtin();
        for (category, source) in overrides {
            if let Some(urls) = &source.urls {
                catalog = catalog.with_urls(*category, urls.clone())?;
            }
            if let Some(prompts) = &source.prompts {
                catalog = catalog.with_prompts(*category, prompts.clone())?;
            }
            debug!("Applied source override for category {}", category);
        }
        Ok(catalog)
    }

    /// Replace a category's URL list; the list must not be empty
    pub fn with_urls(mut self, category: Category, urls: Vec<String>) -> AppResult<Self> {
        if urls.is_empty() {
            return Err(AppError::configuration(format!(
                "URL list for category '{category}' must not be empty"
            )));
        }
        let entry = self.entry_mut(category);
        entry.urls = urls;
        entry.cursor = AtomicUsize::new(0);
        Ok(self)
    }

    /// Replace a category's prompt list; the list must not be empty
    pub fn with_prompts(mut self, category: Category, prompts: Vec<String>) -> AppResult<Self> {
        if prompts.is_empty() {
            return Err(AppError::configuration(format!(
                "Prompt list for category '{category}' must not be empty"
            )));
        }
        self.entry_mut(category).prompts = prompts;
        Ok(self)
    }

    /// URL at the category's cursor; advances the cursor by one (mod list length)
    pub fn next_url(&self, category: Category) -> &str {
        let entry = self.entry(category);
        let position = entry.cursor.fetch_add(1, Ordering::Relaxed) % entry.urls.len();
        &entry.urls[position]
    }

    /// Uniformly chosen prompt plus an independent variation number
    pub fn random_prompt(&self, category: Category) -> GenerationPrompt {
        self.random_prompt_with(category, &mut rand::rng())
    }

    /// Same as [`Self::random_prompt`] with a caller-supplied random source
    pub fn random_prompt_with<R: Rng + ?Sized>(
        &self,
        category: Category,
        rng: &mut R,
    ) -> GenerationPrompt {
        let entry = self.entry(category);
        let term = entry
            .prompts
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| category.to_string());
        GenerationPrompt {
            term,
            seed: rng.random_range(PROMPT_SEED_RANGE),
        }
    }

    /// Ordered URL list for a category
    pub fn urls(&self, category: Category) -> &[String] {
        &self.entry(category).urls
    }

    /// Prompt list for a category
    pub fn prompts(&self, category: Category) -> &[String] {
        &self.entry(category).prompts
    }

    /// Position the next `next_url` call will read
    pub fn cursor(&self, category: Category) -> usize {
        let entry = self.entry(category);
        entry.cursor.load(Ordering::Relaxed) % entry.urls.len()
    }

    fn entry(&self, category: Category) -> &CategorySources {
        &self.entries[category as usize]
    }

    fn entry_mut(&mut self, category: Category) -> &mut CategorySources {
        &mut self.entries[category as usize]
    }
}

impl Default for SourceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn urls(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("https://example.com/{i}.jpg")).collect()
    }

    #[test]
    fn test_round_robin_wraps_after_full_cycle() {
        let catalog = SourceCatalog::builtin()
            .with_urls(Category::Happy, urls(3))
            .unwrap();

        assert_eq!(catalog.next_url(Category::Happy), "https://example.com/0.jpg");
        assert_eq!(catalog.next_url(Category::Happy), "https://example.com/1.jpg");
        assert_eq!(catalog.next_url(Category::Happy), "https://example.com/2.jpg");
        assert_eq!(catalog.next_url(Category::Happy), "https://example.com/0.jpg");
    }

    #[test]
    fn test_cursors_are_per_category() {
        let catalog = SourceCatalog::builtin();
        let first_sad = catalog.next_url(Category::Sad).to_string();
        catalog.next_url(Category::Sad);

        assert_eq!(catalog.cursor(Category::Sad), 2);
        assert_eq!(catalog.cursor(Category::Fear), 0);
        assert_eq!(first_sad, tables::direct_urls(Category::Sad)[0]);
        assert_eq!(catalog.next_url(Category::Fear), tables::direct_urls(Category::Fear)[0]);
    }

    #[test]
    fn test_empty_override_rejected() {
        assert!(SourceCatalog::builtin().with_urls(Category::Sad, Vec::new()).is_err());
        assert!(SourceCatalog::builtin().with_prompts(Category::Sad, Vec::new()).is_err());
    }

    #[test]
    fn test_random_prompt_within_list_and_range() {
        let catalog = SourceCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let prompt = catalog.random_prompt_with(Category::Fear, &mut rng);
            assert!(catalog.prompts(Category::Fear).contains(&prompt.term));
            assert!(PROMPT_SEED_RANGE.contains(&prompt.seed));
        }
    }

    #[test]
    fn test_prompt_text_format() {
        let prompt = GenerationPrompt {
            term: "rain window drops".to_string(),
            seed: 42,
        };
        assert_eq!(
            prompt.text(),
            "rain window drops, highly detailed, 8k wallpaper, cinematic lighting, 42"
        );
    }

    #[test]
    fn test_from_overrides() {
        let mut overrides = BTreeMap::new();
        overrides.insert(
            Category::Angry,
            SourceOverride {
                urls: Some(urls(2)),
                prompts: Some(vec!["storm".to_string()]),
            },
        );
        let catalog = SourceCatalog::from_overrides(&overrides).unwrap();
        assert_eq!(catalog.urls(Category::Angry).len(), 2);
        assert_eq!(catalog.prompts(Category::Angry), ["storm".to_string()]);
        assert_eq!(catalog.urls(Category::Happy).len(), 10);
    }
}
