/* src/server/core/rust/src/slug_resolver.rs */

use std::sync::Arc;

use serde::Serialize;

use crate::slug_map::SlugMaps;

/// A canonical slug and its rendering in one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlugPair {
  pub canonical: String,
  pub localized: String,
}

/// Single-slug lookups scoped to a category, independent of path parsing.
#[derive(Debug, Clone)]
pub struct SlugResolver {
  maps: Arc<SlugMaps>,
  default_locale: String,
}

impl SlugResolver {
  pub fn new(maps: Arc<SlugMaps>, default_locale: impl Into<String>) -> Self {
    Self { maps, default_locale: default_locale.into() }
  }

  pub fn maps(&self) -> &SlugMaps {
    &self.maps
  }

  /// `maps[category][canonical][locale]`, or `canonical` when any level is missing.
  pub fn localized_slug(&self, category: &str, canonical: &str, locale: &str) -> String {
    self
      .maps
      .get(category)
      .and_then(|map| map.localized(canonical, locale))
      .unwrap_or(canonical)
      .to_string()
  }

  /// Reverse lookup of a localized slug.
  ///
  /// The default locale returns `localized` unchanged: default-locale slugs
  /// are taken to equal their canonical form. Other locales scan the
  /// category in stored order and return the first match, or `None`.
  pub fn canonical_slug(&self, category: &str, localized: &str, locale: &str) -> Option<String> {
    if locale == self.default_locale {
      return Some(localized.to_string());
    }
    self.maps.get(category)?.find_canonical(localized, locale).map(String::from)
  }

  /// Every canonical slug of `category` with its `locale` rendering
  /// (falling back to canonical), in stored order.
  pub fn slug_pairs(&self, category: &str, locale: &str) -> Vec<SlugPair> {
    let Some(map) = self.maps.get(category) else {
      return Vec::new();
    };
    map
      .iter()
      .map(|entry| SlugPair {
        canonical: entry.canonical.clone(),
        localized: entry.localized_or_canonical(locale).to_string(),
      })
      .collect()
  }
}
