//! Content-addressed on-disk store of previously served wallpapers
//!
//! Layout: `<root>/<category>/<content-hash>.jpg`. There is no index file;
//! the directory listing is the source of truth. Entries are write-once and
//! never evicted by this component.

use rand::Rng;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, trace};

use crate::errors::{CacheError, CacheResult};
use crate::models::{Category, ContentHash};

const ENTRY_EXTENSION: &str = "jpg";

/// Per-category wallpaper cache rooted at a directory
#[derive(Debug, Clone)]
pub struct DiskCache {
    root: PathBuf,
}

impl DiskCache {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding a category's entries
    pub fn category_dir(&self, category: Category) -> PathBuf {
        self.root.join(category.as_str())
    }

    /// Path an entry with `hash` would occupy
    pub fn entry_path(&self, category: Category, hash: &ContentHash) -> PathBuf {
        self.category_dir(category).join(hash.file_name())
    }

    /// Create the root and every category directory
    pub async fn ensure_layout(&self) -> CacheResult<()> {
        for category in Category::all() {
            let dir = self.category_dir(category);
            tokio::fs::create_dir_all(&dir)
                .await
                .map_err(|e| CacheError::io(&dir, e))?;
        }
        Ok(())
    }

    /// Store `bytes` under `hash` unless an entry already exists.
    ///
    /// Returns `true` when a new file was written. The file appears
    /// atomically, so concurrent readers never observe a partial entry and a
    /// racing second writer leaves the first file untouched.
    pub async fn put(
        &self,
        category: Category,
        hash: &ContentHash,
        bytes: &[u8],
    ) -> CacheResult<bool> {
        let path = self.entry_path(category, hash);
        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            trace!("Cache entry {} already present, skipping write", path.display());
            return Ok(false);
        }

        let dir = self.category_dir(category);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| CacheError::io(&dir, e))?;

        let bytes = bytes.to_vec();
        let target = path.clone();
        let written = tokio::task::spawn_blocking(move || persist_new(&dir, &target, &bytes))
            .await
            .map_err(|e| CacheError::Persist {
                path: path.clone(),
                message: e.to_string(),
            })??;

        if written {
            debug!("Cached wallpaper {} for {}", hash, category);
        }
        Ok(written)
    }

    /// Bytes of one uniformly chosen entry, or `None` when the category is empty.
    ///
    /// An entry removed after listing is skipped in favour of the others.
    pub async fn pick_random(&self, category: Category) -> CacheResult<Option<Vec<u8>>> {
        let entries = self.entries(category).await?;
        let picked = read_any(entries).await?;
        if let Some((path, _)) = &picked {
            debug!("Picked cached wallpaper {} for {}", path.display(), category);
        }
        Ok(picked.map(|(_, bytes)| bytes))
    }

    /// All entry paths for a category, sorted by file name
    pub async fn entries(&self, category: Category) -> CacheResult<Vec<PathBuf>> {
        let dir = self.category_dir(category);
        let mut read_dir = match tokio::fs::read_dir(&dir).await {
            Ok(read_dir) => read_dir,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(CacheError::io(&dir, e)),
        };

        let mut entries = Vec::new();
        while let Some(entry) = read_dir
            .next_entry()
            .await
            .map_err(|e| CacheError::io(&dir, e))?
        {
            let path = entry.path();
            let is_entry = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(ENTRY_EXTENSION));
            let is_file = entry.file_type().await.map(|t| t.is_file()).unwrap_or(false);
            if is_entry && is_file {
                entries.push(path);
            }
        }
        entries.sort();
        Ok(entries)
    }

    /// Number of cached entries for a category
    pub async fn len(&self, category: Category) -> CacheResult<usize> {
        Ok(self.entries(category).await?.len())
    }

    pub async fn contains(&self, category: Category, hash: &ContentHash) -> bool {
        tokio::fs::try_exists(self.entry_path(category, hash))
            .await
            .unwrap_or(false)
    }
}

/// Read uniformly chosen candidates until one is still present
async fn read_any(mut candidates: Vec<PathBuf>) -> CacheResult<Option<(PathBuf, Vec<u8>)>> {
    while !candidates.is_empty() {
        let index = rand::rng().random_range(0..candidates.len());
        let path = candidates.swap_remove(index);
        match tokio::fs::read(&path).await {
            Ok(bytes) => return Ok(Some((path, bytes))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Cache entry {} vanished, trying another", path.display());
            }
            Err(e) => return Err(CacheError::io(&path, e)),
        }
    }
    Ok(None)
}

/// Write into a temp file in `dir`, then link it to `target` without clobbering
fn persist_new(dir: &Path, target: &Path, bytes: &[u8]) -> CacheResult<bool> {
    let mut temp = NamedTempFile::new_in(dir).map_err(|e| CacheError::io(dir, e))?;
    temp.write_all(bytes).map_err(|e| CacheError::io(temp.path(), e))?;
    temp.flush().map_err(|e| CacheError::io(temp.path(), e))?;

    match temp.persist_noclobber(target) {
        Ok(_) => Ok(true),
        Err(e) if e.error.kind() == std::io::ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(CacheError::Persist {
            path: target.to_path_buf(),
            message: e.error.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_put_then_pick() {
        let dir = TempDir::new().unwrap();
        let cache = DiskCache::new(dir.path());
        let bytes = b"jpeg-ish bytes".to_vec();
        let hash = ContentHash::of(&bytes);

        assert!(cache.put(Category::Sad, &hash, &bytes).await.unwrap());
        assert!(cache.contains(Category::Sad, &hash).await);
        assert_eq!(cache.pick_random(Category::Sad).await.unwrap(), Some(bytes));
        assert_eq!(cache.pick_random(Category::Happy).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_is_write_once() {
        let dir = TempDir::new().unwrap();
        let cache = DiskCache::new(dir.path());
        let bytes = b"first".to_vec();
        let hash = ContentHash::of(&bytes);

        assert!(cache.put(Category::Fear, &hash, &bytes).await.unwrap());
        let path = cache.entry_path(Category::Fear, &hash);
        let mtime = std::fs::metadata(&path).unwrap().modified().unwrap();

        // Same key, different payload: the original must be kept.
        assert!(!cache.put(Category::Fear, &hash, b"second").await.unwrap());
        assert_eq!(std::fs::read(&path).unwrap(), bytes);
        assert_eq!(std::fs::metadata(&path).unwrap().modified().unwrap(), mtime);
        assert_eq!(cache.len(Category::Fear).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_entries_ignore_foreign_files() {
        let dir = TempDir::new().unwrap();
        let cache = DiskCache::new(dir.path());
        cache.ensure_layout().await.unwrap();
        let category_dir = cache.category_dir(Category::Neutral);
        std::fs::write(category_dir.join("notes.txt"), b"x").unwrap();
        std::fs::create_dir(category_dir.join("nested.jpg")).unwrap();

        assert!(cache.entries(Category::Neutral).await.unwrap().is_empty());
        assert_eq!(cache.pick_random(Category::Neutral).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_missing_root_is_empty() {
        let dir = TempDir::new().unwrap();
        let cache = DiskCache::new(dir.path().join("does-not-exist"));
        assert_eq!(cache.len(Category::Angry).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_vanished_entry_is_skipped() {
        let dir = TempDir::new().unwrap();
        let cache = DiskCache::new(dir.path());
        let kept = b"still here".to_vec();
        cache
            .put(Category::Disgust, &ContentHash::of(&kept), &kept)
            .await
            .unwrap();

        let mut candidates: Vec<PathBuf> = (0..4)
            .map(|i| cache.category_dir(Category::Disgust).join(format!("gone{i}.jpg")))
            .collect();
        candidates.extend(cache.entries(Category::Disgust).await.unwrap());

        for _ in 0..20 {
            let (_, bytes) = read_any(candidates.clone()).await.unwrap().unwrap();
            assert_eq!(bytes, kept);
        }
    }

    #[tokio::test]
    async fn test_all_vanished_is_empty() {
        let dir = TempDir::new().unwrap();
        let candidates = vec![dir.path().join("a.jpg"), dir.path().join("b.jpg")];
        assert!(read_any(candidates).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_pick_random_covers_all_entries() {
        let dir = TempDir::new().unwrap();
        let cache = DiskCache::new(dir.path());
        let payloads: Vec<Vec<u8>> = (0..3).map(|i| vec![i as u8; 16]).collect();
        for payload in &payloads {
            cache
                .put(Category::Happy, &ContentHash::of(payload), payload)
                .await
                .unwrap();
        }

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(cache.pick_random(Category::Happy).await.unwrap().unwrap());
        }
        assert_eq!(seen.len(), 3);
    }
}
