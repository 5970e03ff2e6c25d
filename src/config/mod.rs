use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use crate::errors::{AppError, AppResult};
use crate::models::Category;

pub mod defaults;
pub mod duration_serde;

use defaults::*;
use duration_serde::{duration, parse_default};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub dedup: DedupConfig,
    /// Per-category replacements for the built-in source and prompt tables
    #[serde(default)]
    pub sources: BTreeMap<Category, SourceOverride>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root of the per-category wallpaper cache
    #[serde(default = "default_cache_path")]
    pub cache_path: PathBuf,
}

/// Network tier settings for the fallback cascade
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Timeout for each direct source request
    #[serde(default = "default_direct_timeout", with = "duration")]
    pub direct_timeout: Duration,
    /// Timeout for the generative fallback request
    #[serde(default = "default_generation_timeout", with = "duration")]
    pub generation_timeout: Duration,
    /// Upper bound on time spent in both network tiers of one acquisition
    #[serde(default = "default_acquisition_budget", with = "duration")]
    pub acquisition_budget: Duration,
    /// Direct fetches per acquisition before a duplicate is accepted
    #[serde(default = "default_max_direct_attempts")]
    pub max_direct_attempts: u32,
    /// Template with `{prompt}`, `{width}` and `{height}` placeholders
    #[serde(default = "default_generation_endpoint")]
    pub generation_endpoint: String,
    #[serde(default = "default_generation_width")]
    pub generation_width: u32,
    #[serde(default = "default_generation_height")]
    pub generation_height: u32,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Bounds for the per-category recently-seen hash sets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DedupConfig {
    /// Size above which a category's set is trimmed
    #[serde(default = "default_dedup_max_entries")]
    pub max_entries: usize,
    /// Size the set is trimmed down to
    #[serde(default = "default_dedup_trim_to")]
    pub trim_to: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceOverride {
    pub urls: Option<Vec<String>>,
    pub prompts: Option<Vec<String>>,
}

// Web defaults
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

// Storage defaults
fn default_cache_path() -> PathBuf {
    PathBuf::from(DEFAULT_CACHE_PATH)
}

// Fetch defaults
fn default_direct_timeout() -> Duration {
    parse_default(DEFAULT_DIRECT_TIMEOUT)
}

fn default_generation_timeout() -> Duration {
    parse_default(DEFAULT_GENERATION_TIMEOUT)
}

fn default_acquisition_budget() -> Duration {
    parse_default(DEFAULT_ACQUISITION_BUDGET)
}

fn default_max_direct_attempts() -> u32 {
    DEFAULT_MAX_DIRECT_ATTEMPTS
}

fn default_generation_endpoint() -> String {
    DEFAULT_GENERATION_ENDPOINT.to_string()
}

fn default_generation_width() -> u32 {
    DEFAULT_GENERATION_WIDTH
}

fn default_generation_height() -> u32 {
    DEFAULT_GENERATION_HEIGHT
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

// Dedup defaults
fn default_dedup_max_entries() -> usize {
    DEFAULT_DEDUP_MAX_ENTRIES
}

fn default_dedup_trim_to() -> usize {
    DEFAULT_DEDUP_TRIM_TO
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            cache_path: default_cache_path(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            direct_timeout: default_direct_timeout(),
            generation_timeout: default_generation_timeout(),
            acquisition_budget: default_acquisition_budget(),
            max_direct_attempts: default_max_direct_attempts(),
            generation_endpoint: default_generation_endpoint(),
            generation_width: default_generation_width(),
            generation_height: default_generation_height(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            max_entries: default_dedup_max_entries(),
            trim_to: default_dedup_trim_to(),
        }
    }
}

impl FetchConfig {
    /// Validate timeouts, attempt count and the endpoint template
    pub fn validate(&self) -> Result<(), String> {
        if self.max_direct_attempts == 0 {
            return Err("fetch.max_direct_attempts must be at least 1".to_string());
        }
        for (name, value) in [
            ("direct_timeout", self.direct_timeout),
            ("generation_timeout", self.generation_timeout),
            ("acquisition_budget", self.acquisition_budget),
        ] {
            if value.is_zero() {
                return Err(format!("fetch.{name} must be greater than zero"));
            }
        }
        if !self.generation_endpoint.contains("{prompt}") {
            return Err(format!(
                "fetch.generation_endpoint '{}' is missing the {{prompt}} placeholder",
                self.generation_endpoint
            ));
        }
        if self.generation_width == 0 || self.generation_height == 0 {
            return Err("fetch.generation_width/height must be non-zero".to_string());
        }
        Ok(())
    }
}

impl DedupConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.trim_to >= self.max_entries {
            return Err(format!(
                "dedup.trim_to ({}) must be smaller than dedup.max_entries ({})",
                self.trim_to, self.max_entries
            ));
        }
        Ok(())
    }
}

impl SourceOverride {
    fn validate(&self, category: Category) -> Result<(), String> {
        if let Some(urls) = &self.urls {
            if urls.is_empty() {
                return Err(format!("sources.{category}.urls must not be empty"));
            }
            for raw in urls {
                url::Url::parse(raw)
                    .map_err(|e| format!("sources.{category}.urls contains invalid URL '{raw}': {e}"))?;
            }
        }
        if let Some(prompts) = &self.prompts
            && prompts.is_empty()
        {
            return Err(format!("sources.{category}.prompts must not be empty"));
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from `CONFIG_FILE` or `config.toml`
    pub fn load() -> AppResult<Self> {
        let config_file =
            std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".to_string());
        Self::load_from_file(&config_file)
    }

    /// Layer defaults, the TOML file (when present) and environment overrides
    pub fn load_from_file<P: AsRef<Path>>(config_file: P) -> AppResult<Self> {
        let path = config_file.as_ref();
        if path.exists() {
            info!("Loading configuration from: {}", path.display());
        } else {
            info!(
                "Config file {} not found, using defaults and environment",
                path.display()
            );
        }

        let config: Config = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| AppError::configuration(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field invariants
    pub fn validate(&self) -> AppResult<()> {
        self.fetch.validate().map_err(AppError::configuration)?;
        self.dedup.validate().map_err(AppError::configuration)?;
        for (category, source) in &self.sources {
            source.validate(*category).map_err(AppError::configuration)?;
        }
        Ok(())
    }
}
