/* src/server/content/src/routes.rs */

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::ContentError;
use crate::locale::{Locale, LocaleMap, localized};

/// Static page route: logical page id plus its localized URL slugs.
/// A route missing a locale's slug is simply not addressable in that locale.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteEntry {
  pub page_id: String,
  pub urls: LocaleMap<String>,
  #[serde(default = "default_priority")]
  pub priority: f64,
  #[serde(default = "default_changefreq")]
  pub changefreq: String,
}

/// A named collection of content items sharing a template.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionConfig {
  pub base_path: LocaleMap<String>,
  pub item_route: String,
  #[serde(default = "default_priority")]
  pub priority: f64,
  #[serde(default = "default_changefreq")]
  pub changefreq: String,
}

fn default_priority() -> f64 {
  0.5
}

fn default_changefreq() -> String {
  "monthly".to_string()
}

/// Routing table, loaded once at startup from `routes.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteTable {
  pub default_locale: Locale,
  pub supported_locales: Vec<Locale>,
  #[serde(default)]
  pub routes: Vec<RouteEntry>,
  #[serde(default)]
  pub collections: BTreeMap<String, CollectionConfig>,
}

/// One localized URL for the sitemap.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
  pub loc: String,
  pub priority: f64,
  pub changefreq: String,
}

impl RouteTable {
  pub fn load(path: &Path) -> Result<Self, ContentError> {
    let raw = std::fs::read_to_string(path).map_err(|e| ContentError::io(path, e))?;
    let table: RouteTable =
      serde_json::from_str(&raw).map_err(|e| ContentError::parse(path, e))?;
    table.validate(path)?;
    Ok(table)
  }

  fn validate(&self, path: &Path) -> Result<(), ContentError> {
    if !self.supported_locales.contains(&self.default_locale) {
      return Err(ContentError::invalid(
        path,
        format!("defaultLocale \"{}\" is not in supportedLocales", self.default_locale),
      ));
    }
    Ok(())
  }

  pub fn is_supported(&self, locale: Locale) -> bool {
    self.supported_locales.contains(&locale)
  }

  /// Exact-match lookup of a slug against every route's localized URL.
  pub fn find_page(&self, locale: Locale, slug: &str) -> Option<&RouteEntry> {
    self.routes.iter().find(|route| route.urls.get(&locale).is_some_and(|url| url == slug))
  }

  /// Match a URL category segment against collection base paths.
  pub fn find_collection(&self, locale: Locale, category: &str) -> Option<(&str, &CollectionConfig)> {
    self
      .collections
      .iter()
      .find(|(_, config)| config.base_path.get(&locale).is_some_and(|base| base == category))
      .map(|(name, config)| (name.as_str(), config))
  }

  pub fn collection(&self, name: &str) -> Option<&CollectionConfig> {
    self.collections.get(name)
  }

  /// Localized URL path for a page, e.g. `/lt/paslaugos`. The locale prefix
  /// is always present; the home page ("" slug) yields just `/lt`.
  pub fn url_for(&self, page_id: &str, locale: Locale) -> Option<String> {
    let route = self.routes.iter().find(|r| r.page_id == page_id)?;
    let slug = localized(&route.urls, locale)?;
    if slug.is_empty() { Some(format!("/{locale}")) } else { Some(format!("/{locale}/{slug}")) }
  }

  /// All localized static-page URLs with their sitemap metadata.
  pub fn sitemap_entries(&self, base_url: &str) -> Vec<SitemapEntry> {
    let base = base_url.trim_end_matches('/');
    let mut entries = Vec::new();
    for route in &self.routes {
      for locale in &self.supported_locales {
        let Some(slug) = route.urls.get(locale) else { continue };
        let loc = if slug.is_empty() {
          format!("{base}/{locale}")
        } else {
          format!("{base}/{locale}/{slug}")
        };
        entries.push(SitemapEntry {
          loc,
          priority: route.priority,
          changefreq: route.changefreq.clone(),
        });
      }
    }
    entries
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  pub(crate) fn sample_table() -> RouteTable {
    serde_json::from_value(json!({
      "defaultLocale": "en",
      "supportedLocales": ["en", "lt", "pl", "uk"],
      "routes": [
        {"pageId": "home", "urls": {"en": "", "lt": "", "pl": "", "uk": ""}, "priority": 1.0, "changefreq": "weekly"},
        {"pageId": "services", "urls": {"en": "services", "lt": "paslaugos", "pl": "uslugi", "uk": "poslugy"}, "priority": 0.9, "changefreq": "weekly"}
      ],
      "collections": {
        "news": {
          "basePath": {"en": "news", "lt": "naujienos", "pl": "aktualnosci", "uk": "novyny"},
          "itemRoute": "news/{slug}",
          "priority": 0.7,
          "changefreq": "monthly"
        }
      }
    }))
    .expect("sample route table")
  }

  #[test]
  fn find_page_matches_localized_slug() {
    let table = sample_table();
    let route = table.find_page(Locale::Lt, "paslaugos").expect("route");
    assert_eq!(route.page_id, "services");
    // The English slug does not resolve under lt
    assert!(table.find_page(Locale::Lt, "services").is_none());
  }

  #[test]
  fn find_collection_matches_localized_base_path() {
    let table = sample_table();
    let (name, _) = table.find_collection(Locale::Lt, "naujienos").expect("collection");
    assert_eq!(name, "news");
    assert!(table.find_collection(Locale::Lt, "news").is_none());
  }

  #[test]
  fn url_for_prefixes_locale() {
    let table = sample_table();
    assert_eq!(table.url_for("services", Locale::Pl).as_deref(), Some("/pl/uslugi"));
    assert_eq!(table.url_for("home", Locale::Lt).as_deref(), Some("/lt"));
    assert!(table.url_for("missing", Locale::En).is_none());
  }

  #[test]
  fn load_rejects_default_locale_outside_supported_set() {
    let dir = tempfile::TempDir::new().expect("tempdir");
    let path = dir.path().join("routes.json");
    std::fs::write(
      &path,
      serde_json::to_string(&json!({
        "defaultLocale": "uk",
        "supportedLocales": ["en", "lt"]
      }))
      .expect("json"),
    )
    .expect("write");
    let err = RouteTable::load(&path).expect_err("inconsistent table must not load");
    assert!(matches!(err, ContentError::Invalid { .. }));
    assert!(err.to_string().contains("defaultLocale \"uk\""));
  }

  #[test]
  fn sitemap_covers_every_locale() {
    let table = sample_table();
    let entries = table.sitemap_entries("https://example.com/");
    // 2 routes x 4 locales
    assert_eq!(entries.len(), 8);
    assert!(entries.iter().any(|e| e.loc == "https://example.com/uk/poslugy"));
    assert!(entries.iter().all(|e| !e.loc.contains("//uk")));
  }
}
