/* src/cli/core/src/config/types.rs */

use std::collections::BTreeMap;
use std::fmt;

use anyhow::{Result, bail};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use slugway_core::{LocaleConfig, SlugMaps};
use slugway_loader::PageScanOptions;

#[derive(Debug, Clone, Deserialize)]
pub struct SlugwayConfig {
  pub i18n: I18nSection,
  #[serde(default)]
  pub site: SiteSection,
  #[serde(default)]
  pub discover: DiscoverSection,
  /// Maps declared inline; discovered categories replace same-named ones.
  #[serde(default)]
  pub slug_maps: SlugMaps,
}

#[derive(Debug, Clone, Deserialize)]
pub struct I18nSection {
  pub locales: Vec<String>,
  /// Falls back to the first entry of `locales`.
  #[serde(default)]
  pub default: Option<String>,
  #[serde(default)]
  pub labels: BTreeMap<String, String>,
  #[serde(default)]
  pub html_lang: BTreeMap<String, String>,
}

impl I18nSection {
  pub fn default_locale(&self) -> &str {
    match &self.default {
      Some(d) => d,
      None => self.locales.first().map_or("", String::as_str),
    }
  }

  pub fn validate(&self) -> Result<()> {
    if self.locales.is_empty() {
      bail!("i18n.locales must not be empty");
    }
    let default = self.default_locale();
    if !self.locales.iter().any(|l| l == default) {
      bail!("i18n.default \"{default}\" is not in i18n.locales {:?}", self.locales);
    }
    for key in self.labels.keys().chain(self.html_lang.keys()) {
      if !self.locales.contains(key) {
        bail!("i18n locale \"{key}\" has a label or html_lang but is not in i18n.locales");
      }
    }
    Ok(())
  }

  pub fn to_locale_config(&self) -> LocaleConfig {
    let mut config = LocaleConfig::new(self.default_locale(), self.locales.clone());
    config.labels = self.labels.clone();
    config.html_lang = self.html_lang.clone();
    config
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteSection {
  pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiscoverSection {
  pub pages_dir: Option<String>,
  #[serde(default = "default_extensions")]
  pub extensions: Vec<String>,
  /// (category, directory) in file order.
  #[serde(default, deserialize_with = "ordered_pairs")]
  pub content_dirs: Vec<(String, String)>,
}

impl Default for DiscoverSection {
  fn default() -> Self {
    Self { pages_dir: None, extensions: default_extensions(), content_dirs: Vec::new() }
  }
}

impl DiscoverSection {
  pub fn page_scan(&self, locales: &[String]) -> PageScanOptions {
    PageScanOptions { extensions: self.extensions.clone(), locales: locales.to_vec() }
  }
}

fn default_extensions() -> Vec<String> {
  vec!["astro".to_string()]
}

fn ordered_pairs<'de, D>(deserializer: D) -> Result<Vec<(String, String)>, D::Error>
where
  D: Deserializer<'de>,
{
  struct PairsVisitor;

  impl<'de> Visitor<'de> for PairsVisitor {
    type Value = Vec<(String, String)>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str("a table of category = \"directory\" entries")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
      let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
      while let Some(pair) = map.next_entry::<String, String>()? {
        pairs.push(pair);
      }
      Ok(pairs)
    }
  }

  deserializer.deserialize_map(PairsVisitor)
}

impl SlugwayConfig {
  pub fn validate(&self) -> Result<()> {
    self.i18n.validate()?;
    if self.discover.extensions.iter().any(|e| e.is_empty() || e.starts_with('.')) {
      bail!(
        "discover.extensions must be bare extensions like \"astro\", got {:?}",
        self.discover.extensions
      );
    }
    if let Some(url) = &self.site.url {
      if !(url.starts_with("http://") || url.starts_with("https://")) {
        bail!("site.url must be an absolute http(s) URL, got \"{url}\"");
      }
    }
    Ok(())
  }
}
