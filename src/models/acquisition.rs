//! Result of one pass through the fallback cascade

use serde::Serialize;
use strum::{AsRefStr, Display};

use super::{Category, ContentHash};

/// Stage of the fallback cascade that produced an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tier {
    /// Primary source list fetch
    Direct,
    /// Generative image endpoint
    Generative,
    /// Random pick from the on-disk cache
    Cache,
    /// Procedural style engine
    Synthesized,
}

impl Tier {
    /// Whether results from this tier are written back into the disk cache
    pub fn is_cacheable(&self) -> bool {
        matches!(self, Tier::Direct | Tier::Generative)
    }
}

/// Bytes served for a request plus where they came from
#[derive(Debug, Clone)]
pub struct Acquisition {
    /// Normalized category actually served
    pub category: Category,
    /// Tier that produced the bytes
    pub tier: Tier,
    /// Encoded raster image, never empty
    pub bytes: Vec<u8>,
    /// Digest of `bytes` for network-sourced results
    pub content_hash: Option<ContentHash>,
}

