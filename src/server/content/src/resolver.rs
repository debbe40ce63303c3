/* src/server/content/src/resolver.rs */

use std::sync::Arc;

use crate::error::ContentError;
use crate::locale::Locale;
use crate::model::{CollectionItem, PageContent};
use crate::routes::RouteTable;
use crate::store::ContentStore;

/// Outcome of slug resolution: a static page or one collection item.
#[derive(Clone)]
pub enum ResolvedContent {
  Page(Arc<PageContent>),
  Item { collection: String, item: Arc<CollectionItem> },
}

pub struct Resolver {
  table: Arc<RouteTable>,
  store: Arc<ContentStore>,
}

impl Resolver {
  pub fn new(table: Arc<RouteTable>, store: Arc<ContentStore>) -> Self {
    Self { table, store }
  }

  /// Resolve a localized slug path to content.
  ///
  /// Static routes always win: a slug matching a route's localized URL is
  /// never attempted against collections, even if a same-named item exists.
  /// `Ok(None)` is the not-found outcome; only I/O and parse failures error.
  pub async fn resolve_by_slug(
    &self,
    locale: Locale,
    slug_path: &str,
  ) -> Result<Option<ResolvedContent>, ContentError> {
    if let Some(route) = self.table.find_page(locale, slug_path) {
      return Ok(self.store.load_page(&route.page_id).await?.map(ResolvedContent::Page));
    }

    let Some((category, item_slug)) = slug_path.split_once('/') else {
      return Ok(None);
    };

    let Some((collection, _)) = self.table.find_collection(locale, category) else {
      return Ok(None);
    };
    let collection = collection.to_string();

    let items = self.store.load_collection(&collection).await?;
    let found = items.iter().find(|item| item_matches(item, locale, item_slug)).cloned();
    Ok(found.map(|item| ResolvedContent::Item { collection, item }))
  }
}

/// Slug comparison per the content conventions: the stored slug is
/// URL-decoded and compared against both the encoded and decoded forms of
/// the incoming segment. Items without a slugs map match on raw `item_id`.
fn item_matches(item: &CollectionItem, locale: Locale, item_slug: &str) -> bool {
  match &item.slugs {
    Some(slugs) => slugs.get(&locale).is_some_and(|stored| {
      let stored = decode(stored);
      stored == item_slug || stored == decode(item_slug)
    }),
    None => item.item_id == item_slug,
  }
}

fn decode(s: &str) -> String {
  urlencoding::decode(s).map_or_else(|_| s.to_string(), |cow| cow.into_owned())
}
