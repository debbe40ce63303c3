/* src/server/content/src/model.rs */

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::locale::LocaleMap;

/// Per-locale SEO block of a page or collection item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoData {
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub keywords: String,
  #[serde(default)]
  pub og_image: Option<String>,
  #[serde(default)]
  pub og_image_alt: Option<String>,
  #[serde(default)]
  pub structured_data: Option<Value>,
}

/// One component instance a page declares (or a processed default).
/// `content_key` names the branch of the localized content map that supplies
/// the component's props; a `shared:` prefix redirects to a shared fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentConfig {
  #[serde(rename = "type")]
  pub component_type: String,
  pub content_key: String,
  #[serde(default)]
  pub required: bool,
  /// Populated only by override application; never present in page JSON.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub custom_content: Option<Value>,
}

impl ComponentConfig {
  pub fn new(component_type: impl Into<String>, content_key: impl Into<String>) -> Self {
    Self {
      component_type: component_type.into(),
      content_key: content_key.into(),
      required: false,
      custom_content: None,
    }
  }
}

/// Customization applied to one *default* component without editing the
/// page's own component list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentOverride {
  #[serde(default)]
  pub content_key: Option<String>,
  #[serde(default)]
  pub custom_content: Option<Value>,
  #[serde(default)]
  pub disabled: bool,
  /// Zero-indexed insert position, applied after sequential placement.
  #[serde(default)]
  pub position: Option<usize>,
}

/// One JSON document per static page (`pages/<pageId>.json`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
  pub page_id: String,
  #[serde(default)]
  pub template: String,
  #[serde(default)]
  pub seo: LocaleMap<SeoData>,
  #[serde(default)]
  pub content: LocaleMap<Value>,
  #[serde(default)]
  pub components: Vec<ComponentConfig>,
  #[serde(default)]
  pub component_overrides: BTreeMap<String, ComponentOverride>,
  #[serde(default)]
  pub default_components_disabled: bool,
}

/// One JSON document per collection item
/// (`collections/<collection>/<itemId>.json`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionItem {
  pub item_id: String,
  #[serde(default)]
  pub template: String,
  /// Per-locale URL slugs. Items without a slugs map are addressed by their
  /// raw `item_id` in every locale.
  #[serde(default)]
  pub slugs: Option<LocaleMap<String>>,
  #[serde(default)]
  pub publish_date: Option<String>,
  #[serde(default)]
  pub author: Option<String>,
  #[serde(default)]
  pub seo: LocaleMap<SeoData>,
  #[serde(default)]
  pub content: LocaleMap<Value>,
  #[serde(default)]
  pub components: Vec<ComponentConfig>,
  #[serde(default)]
  pub component_overrides: BTreeMap<String, ComponentOverride>,
  #[serde(default)]
  pub default_components_disabled: bool,
}

/// Shared fragment document (`shared/<key>.json`), reused across pages.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedDoc {
  #[serde(default)]
  pub content: LocaleMap<Value>,
}
