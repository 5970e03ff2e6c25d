//! Configuration default values
//!
//! This module contains all the default values for configuration options,
//! making them easily changeable in one central location.

// Web server defaults
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

// Storage defaults
pub const DEFAULT_CACHE_PATH: &str = "./public/wallpapers";

// Fetch cascade defaults
pub const DEFAULT_DIRECT_TIMEOUT: &str = "12s";
pub const DEFAULT_GENERATION_TIMEOUT: &str = "20s";
pub const DEFAULT_ACQUISITION_BUDGET: &str = "60s";
pub const DEFAULT_MAX_DIRECT_ATTEMPTS: u32 = 5;
pub const DEFAULT_GENERATION_ENDPOINT: &str =
    "https://image.pollinations.ai/prompt/{prompt}?width={width}&height={height}&nologo=true";
pub const DEFAULT_GENERATION_WIDTH: u32 = 1920;
pub const DEFAULT_GENERATION_HEIGHT: u32 = 1080;
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

// Dedup defaults
pub const DEFAULT_DEDUP_MAX_ENTRIES: usize = 100;
pub const DEFAULT_DEDUP_TRIM_TO: usize = 50;

// Environment overrides
pub const ENV_PREFIX: &str = "MOOD_WALLPAPER_";
