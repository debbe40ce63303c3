/* src/server/content/src/store.rs */

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use lru::LruCache;
use parking_lot::Mutex;
use tracing::warn;

use crate::error::ContentError;
use crate::model::{CollectionItem, PageContent, SharedDoc};

const PAGE_CACHE_CAP: usize = 64;
const COLLECTION_CACHE_CAP: usize = 16;
const SHARED_CACHE_CAP: usize = 64;

/// Read-only JSON document store over the content directory layout:
/// `pages/<pageId>.json`, `collections/<name>/<itemId>.json`,
/// `shared/<key>.json` (keys may be nested, e.g. `components/faq`).
///
/// Documents are parsed once and cached; caches are bounded LRU maps, so the
/// worst case after eviction is a re-read, never stale data (documents are
/// immutable for the process lifetime).
pub struct ContentStore {
  root: PathBuf,
  pages: Mutex<LruCache<String, Arc<PageContent>>>,
  collections: Mutex<LruCache<String, Arc<Vec<Arc<CollectionItem>>>>>,
  shared: Mutex<LruCache<String, Arc<SharedDoc>>>,
}

impl ContentStore {
  pub fn new(root: impl Into<PathBuf>) -> Result<Self, ContentError> {
    let root = root.into();
    if !root.is_dir() {
      return Err(ContentError::MissingContentDir(root));
    }
    Ok(Self {
      root,
      pages: Mutex::new(LruCache::new(cap(PAGE_CACHE_CAP))),
      collections: Mutex::new(LruCache::new(cap(COLLECTION_CACHE_CAP))),
      shared: Mutex::new(LruCache::new(cap(SHARED_CACHE_CAP))),
    })
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Load a static page document, cached by page id after the first read.
  /// A missing file is `Ok(None)`; malformed JSON bubbles.
  pub async fn load_page(&self, page_id: &str) -> Result<Option<Arc<PageContent>>, ContentError> {
    if let Some(page) = self.pages.lock().get(page_id) {
      return Ok(Some(page.clone()));
    }
    let path = self.root.join("pages").join(format!("{page_id}.json"));
    let Some(page) = read_json::<PageContent>(&path).await? else {
      return Ok(None);
    };
    let page = Arc::new(page);
    self.pages.lock().put(page_id.to_string(), page.clone());
    Ok(Some(page))
  }

  /// Load every item of a collection. Items are read sequentially in
  /// directory order; a missing collection directory yields an empty list.
  pub async fn load_collection(
    &self,
    collection: &str,
  ) -> Result<Arc<Vec<Arc<CollectionItem>>>, ContentError> {
    if let Some(items) = self.collections.lock().get(collection) {
      return Ok(items.clone());
    }

    let dir = self.root.join("collections").join(collection);
    let mut items = Vec::new();
    match tokio::fs::read_dir(&dir).await {
      Ok(mut entries) => {
        let mut paths = Vec::new();
        while let Some(entry) =
          entries.next_entry().await.map_err(|e| ContentError::io(&dir, e))?
        {
          let path = entry.path();
          if path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
          }
        }
        // Directory order is platform-dependent; sort for determinism.
        paths.sort();
        for path in paths {
          if let Some(item) = read_json::<CollectionItem>(&path).await? {
            items.push(Arc::new(item));
          }
        }
      }
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
        warn!(collection, "collection directory missing, treating as empty");
      }
      Err(e) => return Err(ContentError::io(&dir, e)),
    }

    let items = Arc::new(items);
    self.collections.lock().put(collection.to_string(), items.clone());
    Ok(items)
  }

  /// Load a shared fragment. Missing or malformed fragments degrade to
  /// `None` with a warning; a broken snippet must not take the page down.
  pub async fn load_shared(&self, key: &str) -> Option<Arc<SharedDoc>> {
    if key.split('/').any(|segment| segment.is_empty() || segment == "..") {
      warn!(key, "rejecting malformed shared content key");
      return None;
    }
    if let Some(doc) = self.shared.lock().get(key) {
      return Some(doc.clone());
    }
    let path = self.root.join("shared").join(format!("{key}.json"));
    match read_json::<SharedDoc>(&path).await {
      Ok(Some(doc)) => {
        let doc = Arc::new(doc);
        self.shared.lock().put(key.to_string(), doc.clone());
        Some(doc)
      }
      Ok(None) => {
        warn!(key, "shared content not found");
        None
      }
      Err(e) => {
        warn!(key, error = %e, "failed to load shared content");
        None
      }
    }
  }
}

fn cap(n: usize) -> NonZeroUsize {
  NonZeroUsize::new(n).unwrap_or(NonZeroUsize::MIN)
}

/// Read and parse one JSON document. Missing file -> `Ok(None)`.
async fn read_json<T: serde::de::DeserializeOwned>(
  path: &Path,
) -> Result<Option<T>, ContentError> {
  let raw = match tokio::fs::read_to_string(path).await {
    Ok(raw) => raw,
    Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
    Err(e) => return Err(ContentError::io(path, e)),
  };
  let value = serde_json::from_str(&raw).map_err(|e| ContentError::parse(path, e))?;
  Ok(Some(value))
}
