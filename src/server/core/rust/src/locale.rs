/* src/server/core/rust/src/locale.rs */

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::errors::SlugError;

/// Locale set of a site. Paths in `default_locale` carry no prefix,
/// every other locale is written as a leading `/<locale>` segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleConfig {
  pub default_locale: String,
  pub locales: Vec<String>,
  /// Display names for locale switchers.
  #[serde(default)]
  pub labels: BTreeMap<String, String>,
  /// HTML `lang` attribute per locale; falls back to the locale code.
  #[serde(default)]
  pub html_lang: BTreeMap<String, String>,
}

impl LocaleConfig {
  pub fn new(default_locale: impl Into<String>, locales: Vec<String>) -> Self {
    Self {
      default_locale: default_locale.into(),
      locales,
      labels: BTreeMap::new(),
      html_lang: BTreeMap::new(),
    }
  }

  pub fn validate(&self) -> Result<(), SlugError> {
    if self.locales.is_empty() {
      return Err(SlugError::invalid_config("locales must not be empty"));
    }
    let mut seen = HashSet::new();
    for locale in &self.locales {
      if locale.is_empty() || locale.contains('/') {
        return Err(SlugError::invalid_config(format!(
          "locale \"{locale}\" must be a non-empty path segment"
        )));
      }
      if !seen.insert(locale.as_str()) {
        return Err(SlugError::invalid_config(format!("duplicate locale \"{locale}\"")));
      }
    }
    if !self.is_known(&self.default_locale) {
      return Err(SlugError::invalid_config(format!(
        "default locale \"{}\" is not in locales {:?}",
        self.default_locale, self.locales
      )));
    }
    Ok(())
  }

  pub fn is_default(&self, locale: &str) -> bool {
    locale == self.default_locale
  }

  pub fn is_known(&self, locale: &str) -> bool {
    self.locales.iter().any(|l| l == locale)
  }

  /// Non-default locales in configured order.
  pub fn prefixed_locales(&self) -> impl Iterator<Item = &str> {
    self.locales.iter().map(String::as_str).filter(|l| !self.is_default(l))
  }

  /// Locale encoded in the first path segment.
  /// '/es/sobre/' -> "es", '/about/' -> default, '/' -> default.
  /// Unknown prefixes and an explicit default-locale prefix resolve to the default.
  pub fn locale_from_path(&self, path: &str) -> &str {
    match path.split('/').find(|s| !s.is_empty()) {
      Some(first) if !self.is_default(first) => self
        .locales
        .iter()
        .find(|l| *l == first)
        .map_or(self.default_locale.as_str(), String::as_str),
      _ => self.default_locale.as_str(),
    }
  }

  pub fn label<'a>(&'a self, locale: &'a str) -> &'a str {
    self.labels.get(locale).map_or(locale, String::as_str)
  }

  pub fn html_lang<'a>(&'a self, locale: &'a str) -> &'a str {
    self.html_lang.get(locale).map_or(locale, String::as_str)
  }
}
