/* src/server/render/src/helpers.rs */

use serde_json::Value;

pub(crate) fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#x27;"),
      c => out.push(c),
    }
  }
  out
}

pub(crate) fn stringify(value: &Value) -> String {
  match value {
    Value::Null => String::new(),
    Value::Bool(b) => b.to_string(),
    Value::Number(n) => n.to_string(),
    Value::String(s) => s.clone(),
    other => other.to_string(),
  }
}

/// Escaped text at `data[key]`; empty string when absent. Partial content
/// renders with empty strings rather than failing the page.
pub(crate) fn text(data: &Value, key: &str) -> String {
  data.get(key).map(|v| escape_html(&stringify(v))).unwrap_or_default()
}

/// Escaped attribute value at `data[key]`.
pub(crate) fn attr(data: &Value, key: &str) -> String {
  text(data, key)
}

pub(crate) fn items<'a>(data: &'a Value, key: &str) -> &'a [Value] {
  data.get(key).and_then(Value::as_array).map_or(&[], Vec::as_slice)
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn escape_html_special_chars() {
    assert_eq!(escape_html("<>&\"'"), "&lt;&gt;&amp;&quot;&#x27;");
  }

  #[test]
  fn text_missing_key_is_empty() {
    assert_eq!(text(&json!({}), "title"), "");
    assert_eq!(text(&json!({"title": "A & B"}), "title"), "A &amp; B");
  }

  #[test]
  fn items_tolerates_non_arrays() {
    assert!(items(&json!({"list": "nope"}), "list").is_empty());
    assert_eq!(items(&json!({"list": [1, 2]}), "list").len(), 2);
  }
}
