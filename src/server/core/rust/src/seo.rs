/* src/server/core/rust/src/seo.rs */

// Alternate-language link data for multilingual pages: hreflang entries,
// canonical URLs and Open Graph locale values.

use serde::Serialize;

use crate::resolve::RouteResolver;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HrefLang {
  pub hreflang: String,
  pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OgLocales {
  pub current: String,
  pub alternates: Vec<String>,
}

/// One entry per configured locale, then `x-default` pointing at the
/// default locale's version of the page.
pub fn href_langs(resolver: &RouteResolver, current_path: &str, site_url: &str) -> Vec<HrefLang> {
  let base = site_url.strip_suffix('/').unwrap_or(site_url);
  let config = resolver.config();

  let mut entries: Vec<HrefLang> = config
    .locales
    .iter()
    .map(|locale| HrefLang {
      hreflang: config.html_lang(locale).to_string(),
      href: format!("{base}{}", resolver.switch_locale_path(current_path, locale)),
    })
    .collect();

  let default_path = resolver.switch_locale_path(current_path, &config.default_locale);
  entries.push(HrefLang { hreflang: "x-default".to_string(), href: format!("{base}{default_path}") });
  entries
}

pub fn canonical_url(current_path: &str, site_url: &str) -> String {
  let base = site_url.strip_suffix('/').unwrap_or(site_url);
  format!("{base}{current_path}")
}

/// HTML lang value to Open Graph `xx_YY` form.
/// "en-GB" -> "en_GB", "en" -> "en_US", "pt" -> "pt_PT", "fr" -> "fr_FR".
pub fn to_og_locale(html_lang: &str) -> String {
  if let Some((lang, region)) = html_lang.split_once('-') {
    let region = region.split('-').next().unwrap_or(region);
    return format!("{lang}_{}", region.to_uppercase());
  }
  match html_lang {
    "en" => "en_US".to_string(),
    "pt" => "pt_PT".to_string(),
    _ => format!("{html_lang}_{}", html_lang.to_uppercase()),
  }
}

/// OG locale of the page's own locale plus every other configured locale.
pub fn og_locales(resolver: &RouteResolver, current_path: &str) -> OgLocales {
  let config = resolver.config();
  let current = resolver.locale_from_path(current_path);
  let alternates = config
    .locales
    .iter()
    .filter(|locale| *locale != current)
    .map(|locale| to_og_locale(config.html_lang(locale)))
    .collect();
  OgLocales { current: to_og_locale(config.html_lang(current)), alternates }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::locale::LocaleConfig;
  use crate::slug_map::{SlugMap, SlugMaps};

  fn resolver() -> RouteResolver {
    let maps = SlugMaps::from_iter([
      (
        "pages",
        SlugMap::from_iter([
          ("index", vec![("en", ""), ("es", "")]),
          ("about", vec![("en", "about"), ("es", "sobre")]),
        ]),
      ),
      ("saunas", SlugMap::from_iter([("model-165", vec![("en", "model-165"), ("es", "modelo-165")])])),
    ]);
    RouteResolver::new(LocaleConfig::new("en", vec!["en".into(), "es".into()]), &maps).unwrap()
  }

  fn entry(hreflang: &str, href: &str) -> HrefLang {
    HrefLang { hreflang: hreflang.into(), href: href.into() }
  }

  #[test]
  fn href_langs_all_locales_plus_default() {
    let entries = href_langs(&resolver(), "/about/", "https://example.com");
    assert_eq!(
      entries,
      vec![
        entry("en", "https://example.com/about/"),
        entry("es", "https://example.com/es/sobre/"),
        entry("x-default", "https://example.com/about/"),
      ]
    );
  }

  #[test]
  fn href_langs_from_prefixed_path() {
    let entries = href_langs(&resolver(), "/es/sobre/", "https://example.com");
    assert_eq!(entries[0], entry("en", "https://example.com/about/"));
    assert_eq!(entries[1], entry("es", "https://example.com/es/sobre/"));
    assert_eq!(entries[2], entry("x-default", "https://example.com/about/"));
  }

  #[test]
  fn href_langs_root_and_trailing_slash_site() {
    let entries = href_langs(&resolver(), "/", "https://example.com/");
    assert_eq!(entries[0].href, "https://example.com/");
    assert_eq!(entries[1].href, "https://example.com/es/");
    assert_eq!(entries[2].href, "https://example.com/");
  }

  #[test]
  fn href_langs_content_slugs() {
    let entries = href_langs(&resolver(), "/saunas/model-165/", "https://example.com");
    assert_eq!(entries[1].href, "https://example.com/es/saunas/modelo-165/");
  }

  #[test]
  fn href_langs_uses_html_lang() {
    let maps = SlugMaps::new();
    let mut config = LocaleConfig::new("en", vec!["en".into(), "pt".into()]);
    config.html_lang.insert("pt".into(), "pt-BR".into());
    let r = RouteResolver::new(config, &maps).unwrap();
    let entries = href_langs(&r, "/", "https://example.com");
    assert_eq!(entries[1].hreflang, "pt-BR");
  }

  #[test]
  fn canonical_url_forms() {
    assert_eq!(canonical_url("/about/", "https://example.com"), "https://example.com/about/");
    assert_eq!(canonical_url("/about/", "https://example.com/"), "https://example.com/about/");
    assert_eq!(canonical_url("/", "https://example.com"), "https://example.com/");
  }

  #[test]
  fn og_locale_simple_codes() {
    assert_eq!(to_og_locale("en"), "en_US");
    assert_eq!(to_og_locale("es"), "es_ES");
    assert_eq!(to_og_locale("fr"), "fr_FR");
    assert_eq!(to_og_locale("pt"), "pt_PT");
  }

  #[test]
  fn og_locale_region_codes() {
    assert_eq!(to_og_locale("en-GB"), "en_GB");
    assert_eq!(to_og_locale("pt-BR"), "pt_BR");
    assert_eq!(to_og_locale("zh-cn"), "zh_CN");
  }

  #[test]
  fn og_locales_current_and_alternates() {
    let r = resolver();
    assert_eq!(
      og_locales(&r, "/about/"),
      OgLocales { current: "en_US".into(), alternates: vec!["es_ES".into()] }
    );
    assert_eq!(
      og_locales(&r, "/es/sobre/"),
      OgLocales { current: "es_ES".into(), alternates: vec!["en_US".into()] }
    );
    assert_eq!(og_locales(&r, "/").current, "en_US");
  }
}
