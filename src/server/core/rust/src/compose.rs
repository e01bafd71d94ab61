/* src/server/core/rust/src/compose.rs */

// Hierarchical slug composition for path-shaped categories (pages).
//
// Input is the phase-one table: every key maps to its *leaf* rendering per
// locale ("saunas/types" -> { es: "tipos" }). Output stores, for each key,
// the full rendering built from the ancestors' leaves plus its own
// ("saunas/types" -> { es: "saunas/tipos" }). Ancestors are read from the
// leaf table only, so composition order does not matter.

use crate::slug_map::{LocaleSlugs, SlugMap};

/// Compose full-path renderings for every key of `leaves`.
///
/// Every locale in `locales` gets a value; explicit leaf values for locales
/// outside that list are composed too. Missing leaves (the key's own or an
/// ancestor's) fall back to the raw segment name.
pub fn compose_slug_map(leaves: &SlugMap, locales: &[String]) -> SlugMap {
  let mut composed = SlugMap::new();
  for entry in leaves {
    let mut row_locales: Vec<&str> = locales.iter().map(String::as_str).collect();
    for locale in entry.slugs.keys() {
      if !row_locales.contains(&locale.as_str()) {
        row_locales.push(locale);
      }
    }

    let slugs: LocaleSlugs = row_locales
      .into_iter()
      .map(|locale| (locale.to_string(), compose_key(leaves, &entry.canonical, locale)))
      .collect();
    composed.insert(entry.canonical.clone(), slugs);
  }
  composed
}

/// Rendering of `key` in `locale`: ancestor leaves then the key's own leaf.
fn compose_key(leaves: &SlugMap, key: &str, locale: &str) -> String {
  let segments: Vec<&str> = key.split('/').collect();
  let mut parts = Vec::with_capacity(segments.len());
  for depth in 1..=segments.len() {
    let prefix = segments[..depth].join("/");
    let segment = segments[depth - 1];
    parts.push(leaves.localized(&prefix, locale).unwrap_or(segment).to_string());
  }
  parts.join("/")
}

/// Leaf rendering a key gets when nothing is declared: its last segment,
/// or `""` for the root `index` page.
pub fn default_leaf(key: &str) -> &str {
  if key == "index" {
    return "";
  }
  key.rsplit('/').next().unwrap_or(key)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn locales() -> Vec<String> {
    vec!["en".into(), "es".into()]
  }

  #[test]
  fn flat_keys_keep_leaf_values() {
    let leaves = SlugMap::from_iter([
      ("index", vec![("en", ""), ("es", "")]),
      ("about", vec![("en", "about"), ("es", "sobre")]),
    ]);
    let composed = compose_slug_map(&leaves, &locales());
    assert_eq!(composed.localized("about", "es"), Some("sobre"));
    assert_eq!(composed.localized("index", "es"), Some(""));
  }

  #[test]
  fn nested_key_uses_default_ancestor() {
    let leaves = SlugMap::from_iter([
      ("saunas", vec![("en", "saunas"), ("es", "saunas")]),
      ("saunas/types", vec![("en", "types"), ("es", "tipos")]),
    ]);
    let composed = compose_slug_map(&leaves, &locales());
    assert_eq!(composed.localized("saunas/types", "en"), Some("saunas/types"));
    assert_eq!(composed.localized("saunas/types", "es"), Some("saunas/tipos"));
  }

  #[test]
  fn nested_key_uses_translated_ancestors() {
    let leaves = SlugMap::from_iter([
      ("products", vec![("es", "productos")]),
      ("products/saunas", vec![("es", "saunas-finlandesas")]),
      ("products/saunas/types", vec![("es", "tipos")]),
    ]);
    let composed = compose_slug_map(&leaves, &locales());
    assert_eq!(
      composed.localized("products/saunas/types", "es"),
      Some("productos/saunas-finlandesas/tipos")
    );
    assert_eq!(composed.localized("products/saunas/types", "en"), Some("products/saunas/types"));
  }

  #[test]
  fn missing_ancestor_uses_segment_name() {
    let leaves = SlugMap::from_iter([("docs/guide", vec![("es", "guia")])]);
    let composed = compose_slug_map(&leaves, &locales());
    assert_eq!(composed.localized("docs/guide", "es"), Some("docs/guia"));
    assert_eq!(composed.localized("docs/guide", "en"), Some("docs/guide"));
  }

  #[test]
  fn explicit_locales_outside_list_are_kept() {
    let leaves = SlugMap::from_iter([("a/b", vec![("fr", "bee")])]);
    let composed = compose_slug_map(&leaves, &locales());
    assert_eq!(composed.localized("a/b", "fr"), Some("a/bee"));
    assert_eq!(composed.get("a/b").map(|s| s.len()), Some(3));
  }

  #[test]
  fn order_is_preserved() {
    let leaves = SlugMap::from_iter([
      ("saunas/types", vec![("es", "tipos")]),
      ("saunas", vec![("es", "saunas")]),
    ]);
    let composed = compose_slug_map(&leaves, &locales());
    assert_eq!(composed.keys().collect::<Vec<_>>(), vec!["saunas/types", "saunas"]);
  }

  #[test]
  fn default_leaf_values() {
    assert_eq!(default_leaf("index"), "");
    assert_eq!(default_leaf("about"), "about");
    assert_eq!(default_leaf("saunas/types"), "types");
  }
}
