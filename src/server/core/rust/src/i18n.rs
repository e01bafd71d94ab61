/* src/server/core/rust/src/i18n.rs */

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::warn;

use crate::content;
use crate::errors::{SlugCollision, SlugError};
use crate::locale::LocaleConfig;
use crate::resolve::RouteResolver;
use crate::seo::{self, HrefLang, OgLocales};
use crate::slug_map::SlugMaps;
use crate::slug_resolver::{SlugPair, SlugResolver};

/// Everything a page needs for locale-aware links, built once per site.
///
/// Immutable after construction and `Send + Sync`; share it by reference
/// (or `Arc`) across a parallel build.
#[derive(Debug, Clone)]
pub struct I18n {
  routes: RouteResolver,
  slugs: SlugResolver,
}

impl I18n {
  /// Validate the locale config and compile the slug maps.
  ///
  /// Slug collisions do not fail construction: reverse lookups keep their
  /// first-match behavior and each collision is logged. Use
  /// [`collisions`](Self::collisions) or [`SlugMaps::check_unique`] to
  /// treat them as errors.
  pub fn new(config: LocaleConfig, maps: SlugMaps) -> Result<Self, SlugError> {
    let routes = RouteResolver::new(config, &maps)?;
    for collision in maps.collisions() {
      warn!(
        category = %collision.category,
        locale = %collision.locale,
        localized = %collision.localized,
        canonicals = ?collision.canonicals,
        "slug collision, reverse lookups use the first key"
      );
    }
    let slugs = SlugResolver::new(Arc::new(maps), routes.config().default_locale.clone());
    Ok(Self { routes, slugs })
  }

  pub fn config(&self) -> &LocaleConfig {
    self.routes.config()
  }

  pub fn slug_maps(&self) -> &SlugMaps {
    self.slugs.maps()
  }

  pub fn routes(&self) -> &RouteResolver {
    &self.routes
  }

  pub fn slugs(&self) -> &SlugResolver {
    &self.slugs
  }

  pub fn locale_from_path(&self, path: &str) -> &str {
    self.routes.locale_from_path(path)
  }

  pub fn locale_path(&self, locale: &str, path: &str) -> String {
    self.routes.locale_path(locale, path)
  }

  pub fn switch_locale_path(&self, current_path: &str, target_locale: &str) -> String {
    self.routes.switch_locale_path(current_path, target_locale)
  }

  pub fn localized_slug(&self, category: &str, canonical: &str, locale: &str) -> String {
    self.slugs.localized_slug(category, canonical, locale)
  }

  pub fn canonical_slug(&self, category: &str, localized: &str, locale: &str) -> Option<String> {
    self.slugs.canonical_slug(category, localized, locale)
  }

  pub fn slug_pairs(&self, category: &str, locale: &str) -> Vec<SlugPair> {
    self.slugs.slug_pairs(category, locale)
  }

  pub fn localized<'a, T>(&self, field: &'a BTreeMap<String, T>, locale: &str) -> Option<&'a T> {
    content::localized(field, locale, &self.config().default_locale)
  }

  pub fn collisions(&self) -> Vec<SlugCollision> {
    self.slug_maps().collisions()
  }

  pub fn href_langs(&self, current_path: &str, site_url: &str) -> Vec<HrefLang> {
    seo::href_langs(&self.routes, current_path, site_url)
  }

  pub fn og_locales(&self, current_path: &str) -> OgLocales {
    seo::og_locales(&self.routes, current_path)
  }
}
