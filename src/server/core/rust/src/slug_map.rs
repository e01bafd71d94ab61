/* src/server/core/rust/src/slug_map.rs */

// Ordered canonical -> locale -> slug tables, one per category.
// Key order is significant: reverse lookups and slug pair listings follow it,
// so deserialization keeps document order instead of sorting.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{SlugCollision, SlugError};

/// Locale -> localized slug for one canonical key.
pub type LocaleSlugs = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugEntry {
  pub canonical: String,
  pub slugs: LocaleSlugs,
}

impl SlugEntry {
  /// Explicit value for `locale`, if the row has one.
  pub fn localized(&self, locale: &str) -> Option<&str> {
    self.slugs.get(locale).map(String::as_str)
  }

  /// Value for `locale`, falling back to the canonical key.
  pub fn localized_or_canonical(&self, locale: &str) -> &str {
    self.localized(locale).unwrap_or(&self.canonical)
  }
}

/// Slug table of one category.
#[derive(Debug, Clone, Default)]
pub struct SlugMap {
  entries: Vec<SlugEntry>,
  index: HashMap<String, usize>,
}

impl PartialEq for SlugMap {
  fn eq(&self, other: &Self) -> bool {
    self.entries == other.entries
  }
}

impl Eq for SlugMap {}

impl SlugMap {
  pub fn new() -> Self {
    Self::default()
  }

  /// Insert a row. Re-inserting a key replaces its slugs in place and
  /// returns the previous ones; the key keeps its original position.
  pub fn insert(
    &mut self,
    canonical: impl Into<String>,
    slugs: LocaleSlugs,
  ) -> Option<LocaleSlugs> {
    let canonical = canonical.into();
    if let Some(&i) = self.index.get(&canonical) {
      return Some(std::mem::replace(&mut self.entries[i].slugs, slugs));
    }
    self.index.insert(canonical.clone(), self.entries.len());
    self.entries.push(SlugEntry { canonical, slugs });
    None
  }

  pub fn entry(&self, canonical: &str) -> Option<&SlugEntry> {
    self.index.get(canonical).map(|&i| &self.entries[i])
  }

  pub fn get(&self, canonical: &str) -> Option<&LocaleSlugs> {
    self.entry(canonical).map(|e| &e.slugs)
  }

  pub fn contains_key(&self, canonical: &str) -> bool {
    self.index.contains_key(canonical)
  }

  /// Explicit value of `canonical` in `locale`.
  pub fn localized(&self, canonical: &str, locale: &str) -> Option<&str> {
    self.entry(canonical)?.localized(locale)
  }

  /// First canonical key (stored order) whose explicit `locale` value is `localized`.
  pub fn find_canonical(&self, localized: &str, locale: &str) -> Option<&str> {
    self
      .entries
      .iter()
      .find(|e| e.localized(locale) == Some(localized))
      .map(|e| e.canonical.as_str())
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, SlugEntry> {
    self.entries.iter()
  }

  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.entries.iter().map(|e| e.canonical.as_str())
  }

  /// Explicit values shared by more than one key within a locale,
  /// ordered by (locale, localized value).
  pub fn collisions(&self, category: &str) -> Vec<SlugCollision> {
    let mut seen: BTreeMap<(&str, &str), Vec<&str>> = BTreeMap::new();
    for entry in &self.entries {
      for (locale, localized) in &entry.slugs {
        seen.entry((locale.as_str(), localized.as_str())).or_default().push(&entry.canonical);
      }
    }
    seen
      .into_iter()
      .filter(|(_, canonicals)| canonicals.len() > 1)
      .map(|((locale, localized), canonicals)| SlugCollision {
        category: category.to_string(),
        locale: locale.to_string(),
        localized: localized.to_string(),
        canonicals: canonicals.into_iter().map(String::from).collect(),
      })
      .collect()
  }
}

impl<'a> IntoIterator for &'a SlugMap {
  type Item = &'a SlugEntry;
  type IntoIter = std::slice::Iter<'a, SlugEntry>;

  fn into_iter(self) -> Self::IntoIter {
    self.entries.iter()
  }
}

impl<K, I, L, V> FromIterator<(K, I)> for SlugMap
where
  K: Into<String>,
  I: IntoIterator<Item = (L, V)>,
  L: Into<String>,
  V: Into<String>,
{
  fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
    let mut map = SlugMap::new();
    for (canonical, slugs) in iter {
      map.insert(canonical, slugs.into_iter().map(|(l, v)| (l.into(), v.into())).collect());
    }
    map
  }
}

/// All slug categories of a site, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlugMaps {
  categories: Vec<(String, SlugMap)>,
}

impl SlugMaps {
  pub fn new() -> Self {
    Self::default()
  }

  /// Add or replace a category. Replacement keeps the category's position.
  pub fn insert(&mut self, category: impl Into<String>, map: SlugMap) -> Option<SlugMap> {
    let category = category.into();
    if let Some((_, existing)) = self.categories.iter_mut().find(|(name, _)| *name == category) {
      return Some(std::mem::replace(existing, map));
    }
    self.categories.push((category, map));
    None
  }

  pub fn get(&self, category: &str) -> Option<&SlugMap> {
    self.categories.iter().find(|(name, _)| name == category).map(|(_, map)| map)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &SlugMap)> {
    self.categories.iter().map(|(name, map)| (name.as_str(), map))
  }

  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.categories.iter().map(|(name, _)| name.as_str())
  }

  pub fn len(&self) -> usize {
    self.categories.len()
  }

  pub fn is_empty(&self) -> bool {
    self.categories.is_empty()
  }

  pub fn collisions(&self) -> Vec<SlugCollision> {
    self.iter().flat_map(|(name, map)| map.collisions(name)).collect()
  }

  /// Fails on the first collision found.
  pub fn check_unique(&self) -> Result<(), SlugError> {
    match self.collisions().into_iter().next() {
      Some(collision) => Err(collision.into()),
      None => Ok(()),
    }
  }
}

impl<K: Into<String>> FromIterator<(K, SlugMap)> for SlugMaps {
  fn from_iter<T: IntoIterator<Item = (K, SlugMap)>>(iter: T) -> Self {
    let mut maps = SlugMaps::new();
    for (name, map) in iter {
      maps.insert(name, map);
    }
    maps
  }
}

// -- serde: both tables are plain maps on the wire, kept in document order --

impl Serialize for SlugMap {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(self.entries.len()))?;
    for entry in &self.entries {
      map.serialize_entry(&entry.canonical, &entry.slugs)?;
    }
    map.end()
  }
}

impl Serialize for SlugMaps {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(self.categories.len()))?;
    for (name, slugs) in &self.categories {
      map.serialize_entry(name, slugs)?;
    }
    map.end()
  }
}

/// Collects map entries in the order the deserializer yields them.
struct OrderedVisitor<V>(&'static str, PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedVisitor<V> {
  type Value = Vec<(String, V)>;

  fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.0)
  }

  fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
    let mut out = Vec::with_capacity(access.size_hint().unwrap_or(0));
    while let Some((key, value)) = access.next_entry::<String, V>()? {
      out.push((key, value));
    }
    Ok(out)
  }
}

impl<'de> Deserialize<'de> for SlugMap {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let rows = deserializer.deserialize_map(OrderedVisitor::<LocaleSlugs>(
      "a map of canonical slug to locale slugs",
      PhantomData,
    ))?;
    let mut map = SlugMap::new();
    for (canonical, slugs) in rows {
      map.insert(canonical, slugs);
    }
    Ok(map)
  }
}

impl<'de> Deserialize<'de> for SlugMaps {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let rows = deserializer
      .deserialize_map(OrderedVisitor::<SlugMap>("a map of category to slug map", PhantomData))?;
    Ok(rows.into_iter().collect())
  }
}
