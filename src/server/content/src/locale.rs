/* src/server/content/src/locale.rs */

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Supported site locales. English is the required baseline: every content
/// document carries an `en` branch and every other locale falls back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
  En,
  Lt,
  Pl,
  Uk,
}

impl Locale {
  pub const FALLBACK: Locale = Locale::En;

  pub const ALL: [Locale; 4] = [Locale::En, Locale::Lt, Locale::Pl, Locale::Uk];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::En => "en",
      Self::Lt => "lt",
      Self::Pl => "pl",
      Self::Uk => "uk",
    }
  }
}

impl fmt::Display for Locale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "unknown locale \"{}\"", self.0)
  }
}

impl std::error::Error for UnknownLocale {}

impl FromStr for Locale {
  type Err = UnknownLocale;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "en" => Ok(Self::En),
      "lt" => Ok(Self::Lt),
      "pl" => Ok(Self::Pl),
      "uk" => Ok(Self::Uk),
      other => Err(UnknownLocale(other.to_string())),
    }
  }
}

/// Per-locale branches of a content value (content, SEO, slugs, base paths).
pub type LocaleMap<T> = BTreeMap<Locale, T>;

/// Select the branch for `locale`, falling back to English.
pub fn localized<T>(map: &LocaleMap<T>, locale: Locale) -> Option<&T> {
  map.get(&locale).or_else(|| map.get(&Locale::FALLBACK))
}

/// Like [`localized`] but for free-form JSON content: a missing branch
/// (even the English one) yields an empty object so the page still renders.
pub fn localized_value(map: &LocaleMap<Value>, locale: Locale) -> Value {
  localized(map, locale).cloned().unwrap_or_else(|| Value::Object(serde_json::Map::new()))
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn branches(pairs: &[(Locale, Value)]) -> LocaleMap<Value> {
    pairs.iter().cloned().collect()
  }

  #[test]
  fn parse_round_trips_all_locales() {
    for locale in Locale::ALL {
      assert_eq!(locale.as_str().parse::<Locale>(), Ok(locale));
    }
  }

  #[test]
  fn parse_rejects_unknown_tag() {
    assert!("de".parse::<Locale>().is_err());
  }

  #[test]
  fn serde_uses_lowercase_tags() {
    assert_eq!(serde_json::to_string(&Locale::Uk).ok(), Some("\"uk\"".to_string()));
    let parsed: Locale = serde_json::from_str("\"lt\"").expect("deserialize");
    assert_eq!(parsed, Locale::Lt);
  }

  #[test]
  fn localized_prefers_target_branch() {
    let map = branches(&[(Locale::En, json!({"t": "hi"})), (Locale::Lt, json!({"t": "labas"}))]);
    assert_eq!(localized_value(&map, Locale::Lt), json!({"t": "labas"}));
  }

  #[test]
  fn localized_falls_back_to_english() {
    let map = branches(&[(Locale::En, json!({"t": "hi"}))]);
    assert_eq!(localized_value(&map, Locale::Pl), json!({"t": "hi"}));
  }

  #[test]
  fn localized_empty_map_yields_empty_object() {
    let map = LocaleMap::new();
    assert_eq!(localized_value(&map, Locale::Uk), json!({}));
  }
}
