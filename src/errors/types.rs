//! Error type definitions for the wallpaper service
//!
//! This module defines all error types used throughout the application,
//! providing a hierarchical error system. Errors raised inside the
//! acquisition cascade never reach the caller; they are logged and turned
//! into a fall-through to the next tier.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error type
///
/// This enum represents all possible errors that can occur in the application.
/// It uses `thiserror` to provide automatic error trait implementations and
/// proper error chaining.
#[derive(Error, Debug)]
pub enum AppError {
    /// Upstream image source errors
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// On-disk cache errors
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Image encoding/decoding errors
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Filesystem errors outside the cache
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client construction errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Upstream source specific errors
#[derive(Error, Debug)]
pub enum SourceError {
    /// Request exceeded its timeout
    #[error("Connection timeout: {url}")]
    Timeout { url: String },

    /// Upstream answered with anything but 200
    #[error("HTTP error: {status} from {url}")]
    Http { status: u16, url: String },

    /// Connection, TLS or body read failure
    #[error("Transport error for {url}: {message}")]
    Transport { url: String, message: String },

    /// Upstream answered 200 with no bytes
    #[error("Empty response body from {url}")]
    EmptyBody { url: String },
}

/// Disk cache specific errors
#[derive(Error, Debug)]
pub enum CacheError {
    /// Filesystem operation failed
    #[error("Cache I/O failed for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Atomic persist of a new entry failed
    #[error("Failed to persist cache entry {}: {message}", path.display())]
    Persist { path: PathBuf, message: String },
}

/// Convenience methods for creating common error types
impl AppError {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl SourceError {
    /// Map a reqwest failure onto the source taxonomy
    pub fn from_reqwest<S: Into<String>>(url: S, error: &reqwest::Error) -> Self {
        let url = url.into();
        if error.is_timeout() {
            Self::Timeout { url }
        } else {
            Self::Transport {
                url,
                message: error.to_string(),
            }
        }
    }
}

impl CacheError {
    pub fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
