/* src/server/content/src/site.rs */

use std::path::Path;
use std::sync::Arc;

use crate::compose::Composer;
use crate::error::ContentError;
use crate::resolver::Resolver;
use crate::routes::RouteTable;
use crate::store::ContentStore;

/// Everything the adapter needs to serve the site: the route table, the
/// document store, the slug resolver and the component composer, built once
/// at startup and shared behind an `Arc`.
pub struct Site {
  table: Arc<RouteTable>,
  store: Arc<ContentStore>,
  resolver: Resolver,
  composer: Composer,
}

impl Site {
  /// Open a content directory. Expects `routes.json` at its root plus the
  /// `pages/`, `collections/` and `shared/` subtrees.
  pub fn open(content_dir: impl AsRef<Path>) -> Result<Self, ContentError> {
    let content_dir = content_dir.as_ref();
    let table = Arc::new(RouteTable::load(&content_dir.join("routes.json"))?);
    let store = Arc::new(ContentStore::new(content_dir)?);
    let resolver = Resolver::new(table.clone(), store.clone());
    Ok(Self { table, store, resolver, composer: Composer::new() })
  }

  pub fn table(&self) -> &RouteTable {
    &self.table
  }

  pub fn store(&self) -> &ContentStore {
    &self.store
  }

  pub fn resolver(&self) -> &Resolver {
    &self.resolver
  }

  pub fn composer(&self) -> &Composer {
    &self.composer
  }
}
