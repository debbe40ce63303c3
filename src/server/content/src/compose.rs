/* src/server/content/src/compose.rs */

use std::collections::BTreeMap;
use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use parking_lot::Mutex;

use crate::model::{CollectionItem, ComponentConfig, ComponentOverride, PageContent};

const COMPOSE_CACHE_CAP: usize = 128;

/// The fixed shared-component list appended to every page that neither
/// disables defaults nor declares a component of the same type itself.
/// Order is part of the contract.
pub fn default_components() -> Vec<ComponentConfig> {
  [
    ("ServiceCards", "shared:serviceCards"),
    ("BenefitsGrid", "shared:benefitsGrid"),
    ("HowWeWork", "shared:howWeWork"),
    ("Testimonials", "shared:testimonials"),
    ("Faq", "shared:faq"),
    ("CallToAction", "shared:callToAction"),
    ("PartnersStrip", "shared:partnersStrip"),
    ("NewsTeaser", "shared:newsTeaser"),
    ("ContactCta", "shared:contactCta"),
  ]
  .into_iter()
  .map(|(kind, key)| ComponentConfig::new(kind, key))
  .collect()
}

/// Apply per-type overrides to the default component list.
///
/// Two passes, and the order matters: the sequential pass drops disabled
/// components and keeps the rest in original order, deferring any component
/// with a `position`; the positional pass then splices deferred components
/// into the partially built list in ascending position order. Position
/// indices are therefore evaluated against the list as built so far, not the
/// final list. This order-dependence is contract, not accident.
pub fn apply_component_overrides(
  defaults: &[ComponentConfig],
  overrides: &BTreeMap<String, ComponentOverride>,
) -> Vec<ComponentConfig> {
  let mut result = Vec::with_capacity(defaults.len());
  let mut positioned: Vec<(usize, ComponentConfig)> = Vec::new();

  for component in defaults {
    let Some(ov) = lookup_override(overrides, &component.component_type) else {
      result.push(component.clone());
      continue;
    };
    if ov.disabled {
      continue;
    }
    let mut component = component.clone();
    if let Some(key) = &ov.content_key {
      component.content_key = key.clone();
    }
    if let Some(custom) = &ov.custom_content {
      component.custom_content = Some(custom.clone());
    }
    match ov.position {
      Some(pos) => positioned.push((pos, component)),
      None => result.push(component),
    }
  }

  positioned.sort_by_key(|(pos, _)| *pos);
  for (pos, component) in positioned {
    if pos <= result.len() {
      result.insert(pos, component);
    } else {
      result.push(component);
    }
  }

  result
}

fn lookup_override<'a>(
  overrides: &'a BTreeMap<String, ComponentOverride>,
  component_type: &str,
) -> Option<&'a ComponentOverride> {
  overrides
    .iter()
    .find(|(key, _)| key.eq_ignore_ascii_case(component_type))
    .map(|(_, ov)| ov)
}

/// Component-list composer with a bounded memo cache.
///
/// The cache key is the JSON signature of `(components, overrides)`, so two
/// pages sharing identical inputs share one composed list. The computation
/// is pure; eviction only costs a recomputation.
pub struct Composer {
  defaults: Vec<ComponentConfig>,
  cache: Mutex<LruCache<String, Arc<Vec<ComponentConfig>>>>,
}

impl Default for Composer {
  fn default() -> Self {
    Self::new()
  }
}

impl Composer {
  pub fn new() -> Self {
    Self {
      defaults: default_components(),
      cache: Mutex::new(LruCache::new(
        NonZeroUsize::new(COMPOSE_CACHE_CAP).unwrap_or(NonZeroUsize::MIN),
      )),
    }
  }

  /// The exact ordered component list to render for a page.
  pub fn final_page_components(&self, page: &PageContent) -> Arc<Vec<ComponentConfig>> {
    self.merge_with_defaults(
      &page.components,
      &page.component_overrides,
      page.default_components_disabled,
    )
  }

  /// The exact ordered component list to render for a collection item.
  pub fn final_collection_components(&self, item: &CollectionItem) -> Arc<Vec<ComponentConfig>> {
    self.merge_with_defaults(
      &item.components,
      &item.component_overrides,
      item.default_components_disabled,
    )
  }

  /// Page-declared components first, then every processed default whose type
  /// the page has not already claimed. A page disabling defaults gets its
  /// own list verbatim.
  pub fn merge_with_defaults(
    &self,
    components: &[ComponentConfig],
    overrides: &BTreeMap<String, ComponentOverride>,
    defaults_disabled: bool,
  ) -> Arc<Vec<ComponentConfig>> {
    if defaults_disabled {
      return Arc::new(components.to_vec());
    }

    let signature = signature(components, overrides);
    if let Some(cached) = self.cache.lock().get(&signature) {
      return cached.clone();
    }

    let mut result = components.to_vec();
    for default in apply_component_overrides(&self.defaults, overrides) {
      let already_declared = result
        .iter()
        .any(|c| c.component_type.eq_ignore_ascii_case(&default.component_type));
      if !already_declared {
        result.push(default);
      }
    }

    let result = Arc::new(result);
    self.cache.lock().put(signature, result.clone());
    result
  }
}

fn signature(
  components: &[ComponentConfig],
  overrides: &BTreeMap<String, ComponentOverride>,
) -> String {
  // Serialization of these models cannot fail; fall back to a unique-ish
  // literal rather than panicking in the render path.
  let components = serde_json::to_string(components).unwrap_or_else(|_| "<components>".into());
  let overrides = serde_json::to_string(overrides).unwrap_or_else(|_| "<overrides>".into());
  format!("{components}|{overrides}")
}
