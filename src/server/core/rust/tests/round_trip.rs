/* src/server/core/rust/tests/round_trip.rs */

use slugway_core::{I18n, LocaleConfig, SlugMap, SlugMaps, compose_slug_map};

fn site() -> I18n {
  let leaves = SlugMap::from_iter([
    ("index", vec![("en", ""), ("es", ""), ("de", "")]),
    ("about", vec![("en", "about"), ("es", "sobre"), ("de", "ueber-uns")]),
    ("contact", vec![("es", "contacto"), ("de", "kontakt")]),
    ("saunas", vec![("en", "saunas"), ("es", "saunas"), ("de", "saunen")]),
    ("saunas/types", vec![("en", "types"), ("es", "tipos"), ("de", "arten")]),
    ("saunas/types/infrared", vec![("es", "infrarrojo"), ("de", "infrarot")]),
  ]);
  let locales: Vec<String> = vec!["en".into(), "es".into(), "de".into()];
  let pages = compose_slug_map(&leaves, &locales);
  let saunas = SlugMap::from_iter([
    ("model-165", vec![("en", "model-165"), ("es", "modelo-165"), ("de", "modell-165")]),
    ("model-250", vec![("es", "modelo-250")]),
  ]);
  let maps = SlugMaps::from_iter([("pages", pages), ("saunas", saunas)]);
  I18n::new(LocaleConfig::new("en", locales), maps).unwrap()
}

const CANONICAL_PATHS: &[&str] = &[
  "/",
  "/about/",
  "/contact",
  "/saunas/",
  "/saunas/types/",
  "/saunas/types/infrared/",
  "/saunas/model-165/",
  "/saunas/model-250",
  "/blog/untracked/",
];

#[test]
fn scenario_from_readme() {
  let maps = SlugMaps::from_iter([
    ("pages", SlugMap::from_iter([("about", vec![("en", "about"), ("es", "sobre")])])),
    ("saunas", SlugMap::from_iter([("model-165", vec![("en", "model-165"), ("es", "modelo-165")])])),
  ]);
  let i18n = I18n::new(LocaleConfig::new("en", vec!["en".into(), "es".into()]), maps).unwrap();

  assert_eq!(i18n.locale_path("es", "/about/"), "/es/sobre/");
  assert_eq!(i18n.locale_path("es", "/saunas/model-165/"), "/es/saunas/modelo-165/");
  assert_eq!(i18n.switch_locale_path("/es/saunas/modelo-165/", "en"), "/saunas/model-165/");
  assert_eq!(i18n.locale_from_path("/es/sobre/"), "es");
  assert_eq!(i18n.locale_from_path("/about/"), "en");
}

#[test]
fn every_locale_round_trips_to_canonical() {
  let i18n = site();
  for locale in ["es", "de"] {
    for path in CANONICAL_PATHS {
      let localized = i18n.locale_path(locale, path);
      assert_eq!(i18n.locale_from_path(&localized), locale, "{localized}");
      assert_eq!(i18n.switch_locale_path(&localized, "en"), *path, "{locale} {localized}");
    }
  }
}

#[test]
fn switching_between_prefixed_locales_matches_direct_localization() {
  let i18n = site();
  for path in CANONICAL_PATHS {
    let es = i18n.locale_path("es", path);
    assert_eq!(i18n.switch_locale_path(&es, "de"), i18n.locale_path("de", path), "{path}");
  }
}

#[test]
fn default_locale_is_identity_without_overrides() {
  let i18n = site();
  for path in CANONICAL_PATHS {
    assert_eq!(i18n.locale_path("en", path), *path);
  }
}

#[test]
fn longest_key_wins() {
  let i18n = site();
  assert_eq!(i18n.locale_path("es", "/saunas/types/"), "/es/saunas/tipos/");
  assert_eq!(i18n.locale_path("de", "/saunas/types/"), "/de/saunen/arten/");
  assert_eq!(i18n.locale_path("de", "/saunas/types/infrared/"), "/de/saunen/arten/infrarot/");
  assert_eq!(i18n.locale_path("de", "/saunas/"), "/de/saunen/");
}

#[test]
fn nested_page_with_content_slug() {
  let i18n = site();
  assert_eq!(i18n.locale_path("de", "/saunas/model-165/"), "/de/saunen/modell-165/");
  assert_eq!(i18n.switch_locale_path("/de/saunen/modell-165/", "es"), "/es/saunas/modelo-165/");
}

#[test]
fn fallbacks_are_deterministic() {
  let i18n = site();
  assert_eq!(i18n.localized_slug("pages", "unknown-key", "es"), "unknown-key");
  assert_eq!(i18n.localized_slug("nope", "about", "es"), "about");
  assert_eq!(i18n.canonical_slug("pages", "desconocido", "es"), None);
  assert_eq!(i18n.localized_slug("saunas", "model-250", "de"), "model-250");
}

#[test]
fn resolver_is_usable_from_many_threads() {
  let i18n = site();
  std::thread::scope(|scope| {
    for locale in ["es", "de"] {
      let i18n = &i18n;
      scope.spawn(move || {
        for path in CANONICAL_PATHS {
          let localized = i18n.locale_path(locale, path);
          assert_eq!(i18n.switch_locale_path(&localized, "en"), *path);
        }
      });
    }
  });
}
