/* src/server/core/rust/src/translate.rs */

use tracing::debug;

use crate::slug_map::{SlugEntry, SlugMaps};

/// Per-category substitution rules, compiled once from the slug maps.
///
/// Each category keeps its entries sorted by descending canonical key
/// length (stable, so equal lengths keep stored order). Composed keys like
/// `saunas/types` are therefore tried before their prefixes like `saunas`.
#[derive(Debug, Clone, Default)]
pub struct PathTranslator {
  categories: Vec<CompiledCategory>,
}

#[derive(Debug, Clone)]
struct CompiledCategory {
  name: String,
  rules: Vec<SlugEntry>,
}

impl PathTranslator {
  pub fn new(maps: &SlugMaps) -> Self {
    let categories: Vec<CompiledCategory> = maps
      .iter()
      .map(|(name, map)| {
        let mut rules: Vec<SlugEntry> = map.iter().cloned().collect();
        rules.sort_by(|a, b| b.canonical.len().cmp(&a.canonical.len()));
        CompiledCategory { name: name.to_string(), rules }
      })
      .collect();
    debug!(
      categories = categories.len(),
      rules = categories.iter().map(|c| c.rules.len()).sum::<usize>(),
      "compiled path translator"
    );
    Self { categories }
  }

  /// Canonical keys of `category` in matching order.
  pub fn match_order(&self, category: &str) -> Vec<&str> {
    self
      .categories
      .iter()
      .find(|c| c.name == category)
      .map(|c| c.rules.iter().map(|r| r.canonical.as_str()).collect())
      .unwrap_or_default()
  }

  /// Replace canonical segments with their `locale` rendering.
  /// Missing locale values fall back to the canonical key (no-op).
  /// Locale prefixes are not touched.
  pub fn localize(&self, path: &str, locale: &str) -> String {
    let mut segments = Segments::parse(path);
    for rule in self.rules() {
      let translated = rule.localized_or_canonical(locale);
      if translated != rule.canonical && !rule.canonical.is_empty() {
        segments.substitute(&rule.canonical, translated);
      }
    }
    segments.join()
  }

  /// Inverse of [`localize`](Self::localize): replace `locale` renderings with
  /// canonical keys. Only explicit values participate.
  pub fn canonicalize(&self, path: &str, locale: &str) -> String {
    let mut segments = Segments::parse(path);
    for rule in self.rules() {
      match rule.localized(locale) {
        Some(translated)
          if !translated.is_empty() && translated != rule.canonical && !rule.canonical.is_empty() =>
        {
          segments.substitute(translated, &rule.canonical);
        }
        _ => {}
      }
    }
    segments.join()
  }

  fn rules(&self) -> impl Iterator<Item = &SlugEntry> {
    self.categories.iter().flat_map(|c| c.rules.iter())
  }
}

/// A path split on `/`, remembering which segments were written by an
/// earlier substitution so later (shorter) rules cannot rewrite them.
#[derive(Debug)]
struct Segments {
  parts: Vec<Segment>,
}

#[derive(Debug)]
struct Segment {
  text: String,
  locked: bool,
}

impl Segments {
  fn parse(path: &str) -> Self {
    Self { parts: path.split('/').map(|s| Segment { text: s.to_string(), locked: false }).collect() }
  }

  /// Replace the first unlocked occurrence of `from` (as whole segments,
  /// preceded by `/`) with `to`. No occurrence leaves the path unchanged.
  fn substitute(&mut self, from: &str, to: &str) {
    if from.is_empty() {
      return;
    }
    let needle: Vec<&str> = from.split('/').collect();
    let n = needle.len();
    // parts[0] is whatever precedes the first `/`; a match must start after it.
    if self.parts.len() <= n {
      return;
    }
    let hit = (1..=self.parts.len() - n).find(|&start| {
      self.parts[start..start + n]
        .iter()
        .zip(&needle)
        .all(|(seg, want)| !seg.locked && seg.text == *want)
    });
    let Some(start) = hit else {
      return;
    };
    let replacement = to.split('/').map(|t| Segment { text: t.to_string(), locked: true });
    self.parts.splice(start..start + n, replacement);
  }

  fn join(&self) -> String {
    let texts: Vec<&str> = self.parts.iter().map(|s| s.text.as_str()).collect();
    texts.join("/")
  }
}
