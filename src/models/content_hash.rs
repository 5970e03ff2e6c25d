//! Content digests used for duplicate detection and cache file naming

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Number of digest bytes kept; rendered as twice as many hex characters
const HASH_BYTES: usize = 8;

/// Truncated SHA-256 of raw image bytes.
///
/// Identifies byte-identical images only; no perceptual similarity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentHash(String);

impl ContentHash {
    /// Length of the hex rendering
    pub const HEX_LEN: usize = HASH_BYTES * 2;

    /// Digest the given bytes
    pub fn of(bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        let digest = hasher.finalize();
        Self(hex::encode(&digest[..HASH_BYTES]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Cache file name for this hash
    pub fn file_name(&self) -> String {
        format!("{}.jpg", self.0)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_fixed_length_lowercase_hex() {
        let hash = ContentHash::of(b"some image bytes");
        assert_eq!(hash.as_str().len(), ContentHash::HEX_LEN);
        assert!(hash.as_str().chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_identical_bytes_identical_hash() {
        assert_eq!(ContentHash::of(b"abc"), ContentHash::of(b"abc"));
        assert_ne!(ContentHash::of(b"abc"), ContentHash::of(b"abd"));
    }

    #[test]
    fn test_known_digest_prefix() {
        // sha256("abc") = ba7816bf8f01cfea...
        assert_eq!(ContentHash::of(b"abc").as_str(), "ba7816bf8f01cfea");
        assert_eq!(ContentHash::of(b"abc").file_name(), "ba7816bf8f01cfea.jpg");
    }
}
