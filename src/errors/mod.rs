//! Centralized error handling for the wallpaper service
//!
//! # Error Categories
//!
//! - **Source Errors**: upstream fetch failures (timeouts, non-200, empty bodies)
//! - **Cache Errors**: on-disk cache reads and writes
//! - **Configuration Errors**: invalid or inconsistent settings
//!
//! # Usage
//!
//! ```rust
//! use mood_wallpaper::errors::{AppError, AppResult};
//!
//! fn example_function() -> AppResult<String> {
//!     Ok("success".to_string())
//! }
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for Source Results
pub type SourceResult<T> = Result<T, SourceError>;

/// Convenience type alias for Cache Results
pub type CacheResult<T> = Result<T, CacheError>;
