/* src/cli/core/src/site.rs */

// Turns a loaded slugway.toml into a ready resolver: discovers page and
// content slugs relative to the config's directory, then builds `I18n`.

use std::path::Path;

use anyhow::{Context, Result};
use slugway_core::I18n;
use slugway_loader::{DiscoverOptions, PageMap, discover};
use tracing::debug;

use crate::config::SlugwayConfig;

pub struct Site {
  pub i18n: I18n,
  pub pages: Option<PageMap>,
  pub url: Option<String>,
}

pub fn load_site(config: &SlugwayConfig, base_dir: &Path) -> Result<Site> {
  let options = DiscoverOptions {
    slug_maps: config.slug_maps.clone(),
    pages_dir: config.discover.pages_dir.as_ref().map(|d| base_dir.join(d)),
    page_scan: config.discover.page_scan(&config.i18n.locales),
    content_dirs: config
      .discover
      .content_dirs
      .iter()
      .map(|(category, dir)| (category.clone(), base_dir.join(dir)))
      .collect(),
  };
  let discovery = discover(options).context("slug discovery failed")?;
  debug!(categories = discovery.slug_maps.len(), "slug maps ready");

  let i18n = I18n::new(config.i18n.to_locale_config(), discovery.slug_maps)
    .context("failed to build resolver")?;
  Ok(Site { i18n, pages: discovery.pages, url: config.site.url.clone() })
}

#[cfg(test)]
mod tests {
  use std::fs;

  use super::*;

  #[test]
  fn discovers_relative_to_base_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let base = tmp.path();
    fs::create_dir_all(base.join("src/pages/saunas")).unwrap();
    fs::create_dir_all(base.join("src/content/saunas")).unwrap();
    fs::write(base.join("src/pages/index.astro"), "").unwrap();
    fs::write(base.join("src/pages/saunas/index.astro"), "").unwrap();
    fs::write(
      base.join("src/pages/about.astro"),
      "---\nexport const slugs = { es: 'sobre' };\n---\n",
    )
    .unwrap();
    fs::write(base.join("src/content/saunas/model-165.md"), "---\nslugs:\n  es: modelo-165\n---\n")
      .unwrap();

    let config: SlugwayConfig = toml::from_str(
      r#"
[i18n]
locales = ["en", "es"]

[discover]
pages_dir = "src/pages"

[discover.content_dirs]
saunas = "src/content/saunas"
"#,
    )
    .unwrap();

    let site = load_site(&config, base).unwrap();
    assert_eq!(site.pages.as_ref().unwrap().pages.len(), 3);
    assert_eq!(site.i18n.locale_path("es", "/about/"), "/es/sobre/");
    assert_eq!(site.i18n.locale_path("es", "/saunas/model-165/"), "/es/saunas/modelo-165/");
    assert_eq!(site.i18n.switch_locale_path("/es/sobre/", "en"), "/about/");
  }

  #[test]
  fn missing_pages_dir_fails_with_context() {
    let tmp = tempfile::tempdir().unwrap();
    let config: SlugwayConfig =
      toml::from_str("[i18n]\nlocales = [\"en\"]\n\n[discover]\npages_dir = \"nope\"\n").unwrap();
    let err = load_site(&config, tmp.path()).err().unwrap();
    assert_eq!(err.to_string(), "slug discovery failed");
  }
}
