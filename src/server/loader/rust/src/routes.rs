/* src/server/loader/rust/src/routes.rs */

use serde::Serialize;
use slugway_core::LocaleConfig;

use crate::pages::PageMap;

/// A localized route the host site registers next to its file routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InjectedRoute {
  pub pattern: String,
  pub entrypoint: String,
  pub locale: String,
}

/// One route per non-default locale and page, locales in config order.
/// Default-locale pages are served by the file router as-is.
pub fn injected_routes(config: &LocaleConfig, pages: &PageMap) -> Vec<InjectedRoute> {
  let mut routes = Vec::new();
  for locale in config.prefixed_locales() {
    for page in &pages.pages {
      let slug = pages.slug_map.localized(&page.key, locale).unwrap_or(page.key.as_str());
      let pattern = if page.key == "index" || slug.is_empty() {
        format!("/{locale}")
      } else {
        format!("/{locale}/{slug}")
      };
      routes.push(InjectedRoute {
        pattern,
        entrypoint: page.entrypoint.clone(),
        locale: locale.to_string(),
      });
    }
  }
  routes
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::pages::PageEntry;
  use slugway_core::{LocaleSlugs, SlugMap};

  fn page(key: &str) -> PageEntry {
    PageEntry {
      key: key.into(),
      entrypoint: format!("src/pages/{key}.astro"),
      declared: LocaleSlugs::new(),
    }
  }

  #[test]
  fn index_and_localized_patterns() {
    let pages = PageMap {
      pages: vec![page("index"), page("about"), page("saunas/types"), page("contact")],
      slug_map: SlugMap::from_iter([
        ("index", vec![("es", ""), ("de", "")]),
        ("about", vec![("es", "sobre"), ("de", "ueber-uns")]),
        ("saunas/types", vec![("es", "saunas/tipos")]),
      ]),
    };
    let config = LocaleConfig::new("en", vec!["en".into(), "es".into(), "de".into()]);

    let routes = injected_routes(&config, &pages);
    let patterns: Vec<&str> = routes.iter().map(|r| r.pattern.as_str()).collect();
    assert_eq!(
      patterns,
      vec![
        "/es",
        "/es/sobre",
        "/es/saunas/tipos",
        "/es/contact",
        "/de",
        "/de/ueber-uns",
        "/de/saunas/types",
        "/de/contact",
      ]
    );
    assert_eq!(routes[1].entrypoint, "src/pages/about.astro");
    assert_eq!(routes[4].locale, "de");
  }

  #[test]
  fn single_locale_site_injects_nothing() {
    let pages = PageMap { pages: vec![page("about")], slug_map: SlugMap::new() };
    let config = LocaleConfig::new("en", vec!["en".into()]);
    assert!(injected_routes(&config, &pages).is_empty());
  }
}
