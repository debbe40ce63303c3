/* src/server/content/src/props.rs */

use serde_json::{Value, json};
use tracing::warn;

use crate::error::ContentError;
use crate::kind::ComponentKind;
use crate::locale::{Locale, localized, localized_value};
use crate::model::ComponentConfig;
use crate::site::Site;

/// Fully resolved props for one component instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentProps {
  pub kind: ComponentKind,
  pub data: Value,
}

const SHARED_PREFIX: &str = "shared:";

/// Resolve the content data feeding one component, then shape it per kind.
///
/// Resolution order: the localized content branch under `content_key`, then
/// an override's `custom_content` (which wins outright), then `shared:`
/// indirection. Missing content at any step degrades to an empty object.
pub async fn resolve_component_props(
  site: &Site,
  locale: Locale,
  localized_content: &Value,
  component: &ComponentConfig,
) -> Result<ComponentProps, ContentError> {
  let mut data = localized_content
    .get(&component.content_key)
    .cloned()
    .unwrap_or_else(|| json!({}));

  if let Some(custom) = &component.custom_content {
    // custom_content may be a per-locale map or raw content
    data = custom
      .get(locale.as_str())
      .or_else(|| custom.get(Locale::FALLBACK.as_str()))
      .cloned()
      .unwrap_or_else(|| custom.clone());
  } else if let Some(key) = shared_key(&data, &component.content_key) {
    data = match site.store().load_shared(&format!("components/{key}")).await {
      Some(doc) => localized_value(&doc.content, locale),
      None => json!({}),
    };
  }

  let kind = ComponentKind::parse(&component.component_type);
  let data = shape_props(site, locale, &kind, data).await?;
  Ok(ComponentProps { kind, data })
}

/// `shared:` indirection: either the resolved data is itself a
/// `"shared:<key>"` string, or the content key carries the prefix.
fn shared_key<'a>(data: &'a Value, content_key: &'a str) -> Option<&'a str> {
  if let Some(s) = data.as_str()
    && let Some(key) = s.strip_prefix(SHARED_PREFIX)
  {
    return Some(key);
  }
  content_key.strip_prefix(SHARED_PREFIX)
}

/// Per-kind prop shaping. A handful of kinds get bespoke shapes; everything
/// else renders from the generic `{translations, locale}` pair.
async fn shape_props(
  site: &Site,
  locale: Locale,
  kind: &ComponentKind,
  data: Value,
) -> Result<Value, ContentError> {
  let shaped = match kind {
    ComponentKind::PageHeader => json!({
      "title": data.get("title").cloned().unwrap_or(Value::Null),
      "subtitle": data.get("subtitle").cloned().unwrap_or(Value::Null),
      "image": data.get("image").cloned().unwrap_or(Value::Null),
      "locale": locale.as_str(),
    }),
    ComponentKind::Content => json!({
      "body": data.get("body").cloned().unwrap_or(data),
      "locale": locale.as_str(),
    }),
    ComponentKind::ContactForm => json!({
      "translations": data,
      "locale": locale.as_str(),
      "formTypes": ["technician", "contact"],
    }),
    ComponentKind::PrivacyPolicy => json!({
      "sections": data.get("sections").cloned().unwrap_or_else(|| json!([])),
      "updatedAt": data.get("updatedAt").cloned().unwrap_or(Value::Null),
      "locale": locale.as_str(),
    }),
    ComponentKind::NewsListing => news_listing_props(site, locale).await?,
    _ => json!({
      "translations": data,
      "locale": locale.as_str(),
    }),
  };
  Ok(shaped)
}

/// The news listing loads the entire collection and reshapes every article:
/// newest first, with the SEO `ogImage` falling back to the article's
/// `featuredImage`.
async fn news_listing_props(site: &Site, locale: Locale) -> Result<Value, ContentError> {
  let items = site.store().load_collection("news").await?;

  let base_path = site
    .table()
    .collection("news")
    .and_then(|config| localized(&config.base_path, locale).cloned())
    .unwrap_or_else(|| "news".to_string());

  let mut sorted: Vec<_> = items.iter().collect();
  sorted.sort_by(|a, b| b.publish_date.cmp(&a.publish_date));

  let articles: Vec<Value> = sorted
    .into_iter()
    .map(|item| {
      let content = localized_value(&item.content, locale);
      let seo = localized(&item.seo, locale).cloned().unwrap_or_default();
      let slug = item
        .slugs
        .as_ref()
        .and_then(|slugs| localized(slugs, locale).cloned())
        .unwrap_or_else(|| item.item_id.clone());
      let image = seo
        .og_image
        .clone()
        .map(Value::String)
        .or_else(|| content.get("featuredImage").cloned())
        .unwrap_or(Value::Null);
      let title = if seo.title.is_empty() {
        content.get("title").cloned().unwrap_or(Value::Null)
      } else {
        Value::String(seo.title.clone())
      };
      json!({
        "itemId": item.item_id,
        "href": format!("/{locale}/{base_path}/{slug}"),
        "slug": slug,
        "publishDate": item.publish_date,
        "author": item.author,
        "title": title,
        "excerpt": content.get("excerpt").cloned().unwrap_or_else(|| Value::String(seo.description.clone())),
        "image": image,
      })
    })
    .collect();

  if articles.is_empty() {
    warn!("news listing rendered with no articles");
  }

  Ok(json!({ "articles": articles, "locale": locale.as_str() }))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::store::tests::write_doc;
  use serde_json::json;
  use tempfile::TempDir;

  fn fixture_site() -> (TempDir, Site) {
    let dir = TempDir::new().expect("tempdir");
    write_doc(
      dir.path(),
      "routes.json",
      &json!({
        "defaultLocale": "en",
        "supportedLocales": ["en", "lt", "pl", "uk"],
        "collections": {
          "news": {
            "basePath": {"en": "news", "lt": "naujienos"},
            "itemRoute": "news/{slug}"
          }
        }
      }),
    );
    write_doc(
      dir.path(),
      "shared/components/faq.json",
      &json!({"content": {
        "en": {"items": [{"q": "Why?", "a": "Because."}]},
        "lt": {"items": [{"q": "Kodėl?", "a": "Todėl."}]}
      }}),
    );
    for (id, date) in [("a", "2024-01-01"), ("b", "2024-03-01"), ("c", "2024-02-01")] {
      write_doc(
        dir.path(),
        &format!("collections/news/{id}.json"),
        &json!({
          "itemId": id,
          "publishDate": date,
          "seo": {"en": {"title": format!("Article {id}")}},
          "content": {"en": {"featuredImage": format!("/img/{id}.webp")}}
        }),
      );
    }
    let site = Site::open(dir.path()).expect("site");
    (dir, site)
  }

  #[tokio::test]
  async fn generic_kind_gets_translations_shape() {
    let (_dir, site) = fixture_site();
    let content = json!({"hero": {"title": "Hi"}});
    let component = ComponentConfig::new("Hero", "hero");
    let props =
      resolve_component_props(&site, Locale::En, &content, &component).await.expect("resolve");
    assert_eq!(props.kind, ComponentKind::Hero);
    assert_eq!(props.data, json!({"translations": {"title": "Hi"}, "locale": "en"}));
  }

  #[tokio::test]
  async fn missing_content_key_defaults_to_empty_object() {
    let (_dir, site) = fixture_site();
    let component = ComponentConfig::new("Hero", "absent");
    let props =
      resolve_component_props(&site, Locale::En, &json!({}), &component).await.expect("resolve");
    assert_eq!(props.data["translations"], json!({}));
  }

  #[tokio::test]
  async fn custom_content_selects_locale_branch() {
    let (_dir, site) = fixture_site();
    let mut component = ComponentConfig::new("Hero", "hero");
    component.custom_content = Some(json!({"en": {"t": "hi"}, "lt": {"t": "labas"}}));
    let props =
      resolve_component_props(&site, Locale::Lt, &json!({}), &component).await.expect("resolve");
    assert_eq!(props.data["translations"], json!({"t": "labas"}));
  }

  #[tokio::test]
  async fn custom_content_falls_back_to_english_branch() {
    let (_dir, site) = fixture_site();
    let mut component = ComponentConfig::new("Hero", "hero");
    component.custom_content = Some(json!({"en": {"t": "hi"}}));
    let props =
      resolve_component_props(&site, Locale::Pl, &json!({}), &component).await.expect("resolve");
    assert_eq!(props.data["translations"], json!({"t": "hi"}));
  }

  #[tokio::test]
  async fn custom_content_raw_value_used_as_is() {
    let (_dir, site) = fixture_site();
    let mut component = ComponentConfig::new("Hero", "hero");
    component.custom_content = Some(json!({"t": "raw"}));
    let props =
      resolve_component_props(&site, Locale::Uk, &json!({}), &component).await.expect("resolve");
    assert_eq!(props.data["translations"], json!({"t": "raw"}));
  }

  #[tokio::test]
  async fn shared_prefix_in_content_key_loads_fragment() {
    let (_dir, site) = fixture_site();
    let component = ComponentConfig::new("Faq", "shared:faq");
    let props =
      resolve_component_props(&site, Locale::Lt, &json!({}), &component).await.expect("resolve");
    assert_eq!(props.data["translations"]["items"][0]["q"], "Kodėl?");
  }

  #[tokio::test]
  async fn shared_reference_in_content_value_loads_fragment() {
    let (_dir, site) = fixture_site();
    let content = json!({"faqBlock": "shared:faq"});
    let component = ComponentConfig::new("Faq", "faqBlock");
    let props =
      resolve_component_props(&site, Locale::En, &content, &component).await.expect("resolve");
    assert_eq!(props.data["translations"]["items"][0]["q"], "Why?");
  }

  #[tokio::test]
  async fn missing_shared_fragment_degrades_to_empty() {
    let (_dir, site) = fixture_site();
    let component = ComponentConfig::new("Faq", "shared:missing");
    let props =
      resolve_component_props(&site, Locale::En, &json!({}), &component).await.expect("resolve");
    assert_eq!(props.data["translations"], json!({}));
  }

  #[tokio::test]
  async fn news_listing_sorts_by_publish_date_descending() {
    let (_dir, site) = fixture_site();
    let component = ComponentConfig::new("NewsListing", "news");
    let props =
      resolve_component_props(&site, Locale::En, &json!({}), &component).await.expect("resolve");
    let dates: Vec<_> = props.data["articles"]
      .as_array()
      .expect("articles")
      .iter()
      .map(|a| a["publishDate"].as_str().map(String::from))
      .collect();
    assert_eq!(
      dates,
      [
        Some("2024-03-01".to_string()),
        Some("2024-02-01".to_string()),
        Some("2024-01-01".to_string())
      ]
    );
  }

  #[tokio::test]
  async fn news_listing_image_falls_back_to_featured_image() {
    let (_dir, site) = fixture_site();
    let component = ComponentConfig::new("NewsListing", "news");
    let props =
      resolve_component_props(&site, Locale::En, &json!({}), &component).await.expect("resolve");
    // No seo ogImage in the fixtures, so the content featuredImage wins
    assert_eq!(props.data["articles"][0]["image"], "/img/b.webp");
  }

  #[tokio::test]
  async fn news_listing_links_use_localized_base_path() {
    let (_dir, site) = fixture_site();
    let component = ComponentConfig::new("NewsListing", "news");
    let props =
      resolve_component_props(&site, Locale::Lt, &json!({}), &component).await.expect("resolve");
    assert_eq!(props.data["articles"][0]["href"], "/lt/naujienos/b");
  }

  #[tokio::test]
  async fn page_header_shape_is_bespoke() {
    let (_dir, site) = fixture_site();
    let content = json!({"header": {"title": "Services", "subtitle": "What we do"}});
    let component = ComponentConfig::new("PageHeader", "header");
    let props =
      resolve_component_props(&site, Locale::En, &content, &component).await.expect("resolve");
    assert_eq!(props.data["title"], "Services");
    assert_eq!(props.data["subtitle"], "What we do");
    assert_eq!(props.data["locale"], "en");
  }
}
