/* src/server/core/rust/src/resolve.rs */

use crate::errors::SlugError;
use crate::locale::LocaleConfig;
use crate::slug_map::SlugMaps;
use crate::translate::PathTranslator;

/// Locale-aware path generation over a fixed locale config and slug maps.
///
/// Every locale switch passes through the canonical form: translated ->
/// canonical -> translated. Going directly between two non-default
/// renderings is not defined by the slug tables.
#[derive(Debug, Clone)]
pub struct RouteResolver {
  config: LocaleConfig,
  translator: PathTranslator,
}

impl RouteResolver {
  pub fn new(config: LocaleConfig, maps: &SlugMaps) -> Result<Self, SlugError> {
    config.validate()?;
    Ok(Self { config, translator: PathTranslator::new(maps) })
  }

  pub fn config(&self) -> &LocaleConfig {
    &self.config
  }

  pub fn translator(&self) -> &PathTranslator {
    &self.translator
  }

  /// '/es/sobre/' -> "es", '/about/' -> default locale.
  pub fn locale_from_path(&self, path: &str) -> &str {
    self.config.locale_from_path(path)
  }

  /// Build a localized path from a locale and a canonical path.
  ///
  /// locale_path("en", "/about/") -> "/about/"
  /// locale_path("es", "/about/") -> "/es/sobre/"
  /// locale_path("es", "/saunas/model-165/") -> "/es/saunas/modelo-165/"
  pub fn locale_path(&self, locale: &str, path: &str) -> String {
    let translated = self.translator.localize(path, locale);
    if self.config.is_default(locale) {
      return translated;
    }
    if translated.starts_with('/') {
      format!("/{locale}{translated}")
    } else {
      format!("/{locale}/{translated}")
    }
  }

  /// Equivalent path of `current_path` in `target_locale`.
  ///
  /// switch_locale_path("/es/saunas/modelo-165/", "en") -> "/saunas/model-165/"
  /// switch_locale_path("/about/", "es") -> "/es/sobre/"
  pub fn switch_locale_path(&self, current_path: &str, target_locale: &str) -> String {
    let canonical = self.canonical_path(current_path);
    self.locale_path(target_locale, &canonical)
  }

  /// Strip the locale prefix of `path` and reverse its slug translations.
  fn canonical_path(&self, path: &str) -> String {
    let locale = self.config.locale_from_path(path);
    let base = if self.config.is_default(locale) { path } else { strip_locale_prefix(path, locale) };
    self.translator.canonicalize(base, locale)
  }
}

/// '/es/sobre/' -> '/sobre/', '/es' -> '/'. `path` must start with the
/// `locale` segment (after any leading slashes); otherwise it is returned as is.
fn strip_locale_prefix<'a>(path: &'a str, locale: &str) -> &'a str {
  match path.trim_start_matches('/').strip_prefix(locale) {
    Some("") => "/",
    Some(rest) if rest.starts_with('/') => rest,
    _ => path,
  }
}
