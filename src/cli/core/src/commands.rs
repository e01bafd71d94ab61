/* src/cli/core/src/commands.rs */

use std::path::Path;

use anyhow::{Context, Result, bail};
use slugway_loader::injected_routes;
use tracing::warn;

use crate::site::Site;
use crate::ui::{self, CYAN, DIM, RESET};

fn check_locale(site: &Site, locale: &str) {
  if !site.i18n.config().is_known(locale) {
    warn!(locale, "locale is not configured, paths get its prefix anyway");
  }
}

/// `slugway routes`: localized routes the host registers per non-default locale.
pub fn run_routes(site: &Site, base_dir: &Path) -> Result<()> {
  let Some(pages) = &site.pages else {
    bail!("routes needs [discover].pages_dir in slugway.toml");
  };
  let routes = injected_routes(site.i18n.config(), pages);
  ui::arrow(&format!("{} pages, {} injected routes", pages.pages.len(), routes.len()));
  for route in &routes {
    let entry = Path::new(&route.entrypoint);
    let entry = entry.strip_prefix(base_dir).unwrap_or(entry);
    ui::detail(&format!("{CYAN}{}{RESET}  {DIM}{}{RESET}", route.pattern, entry.display()));
  }
  Ok(())
}

pub fn run_localize(site: &Site, path: &str, locale: &str) {
  check_locale(site, locale);
  ui::value(&site.i18n.locale_path(locale, path));
}

pub fn run_switch(site: &Site, path: &str, to: &str) {
  check_locale(site, to);
  ui::value(&site.i18n.switch_locale_path(path, to));
}

pub fn run_detect(site: &Site, path: &str) {
  ui::value(site.i18n.locale_from_path(path));
}

/// `slugway pairs`: tab-separated canonical and localized slug per line.
pub fn run_pairs(site: &Site, category: &str, locale: &str) -> Result<()> {
  if site.i18n.slug_maps().get(category).is_none() {
    let known: Vec<&str> = site.i18n.slug_maps().names().collect();
    bail!("unknown category \"{category}\"\navailable categories: {}", known.join(", "));
  }
  check_locale(site, locale);
  for pair in site.i18n.slug_pairs(category, locale) {
    ui::value(&format!("{}\t{}", pair.canonical, pair.localized));
  }
  Ok(())
}

/// `slugway hreflang`: alternate links, canonical URL and Open Graph locales.
pub fn run_hreflang(site: &Site, path: &str) -> Result<()> {
  let Some(url) = &site.url else {
    bail!("hreflang needs [site].url in slugway.toml");
  };
  let i18n = &site.i18n;
  ui::arrow(&format!("alternates for {path}"));
  for link in i18n.href_langs(path, url) {
    ui::detail(&format!("{CYAN}{:<10}{RESET} {}", link.hreflang, link.href));
  }
  ui::arrow(&format!("canonical {}", slugway_core::canonical_url(path, url)));
  let og = i18n.og_locales(path);
  ui::arrow(&format!("og:locale {}", og.current));
  for alternate in &og.alternates {
    ui::detail(&format!("{DIM}og:locale:alternate{RESET} {alternate}"));
  }
  Ok(())
}

/// `slugway check`: fails when any localized slug is shared by two keys.
pub fn run_check(site: &Site) -> Result<()> {
  ui::banner("check");
  let config = site.i18n.config();
  ui::ok(&format!(
    "{} locales, default \"{}\"",
    config.locales.len(),
    config.default_locale
  ));
  for (name, map) in site.i18n.slug_maps().iter() {
    ui::detail_ok(&format!("{name}  {DIM}({} keys){RESET}", map.len()));
    let mut stray: Vec<&str> = map
      .iter()
      .flat_map(|entry| entry.slugs.keys())
      .map(String::as_str)
      .filter(|locale| !config.is_known(locale))
      .collect();
    stray.sort_unstable();
    stray.dedup();
    if !stray.is_empty() {
      ui::warn(&format!("{name} has slugs for unconfigured locales: {}", stray.join(", ")));
    }
  }

  let collisions = site.i18n.collisions();
  if collisions.is_empty() {
    ui::ok("no slug collisions");
    return Ok(());
  }
  for collision in &collisions {
    ui::fail(&collision.to_string());
  }
  bail!("{} slug collision(s) found", collisions.len());
}

/// `slugway export`: every slug map as pretty JSON, to a file or stdout.
pub fn run_export(site: &Site, out: Option<&Path>) -> Result<()> {
  let json = serde_json::to_string_pretty(site.i18n.slug_maps())
    .context("failed to serialize slug maps")?;
  match out {
    Some(path) => {
      if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
          .with_context(|| format!("failed to create {}", parent.display()))?;
      }
      std::fs::write(path, format!("{json}\n"))
        .with_context(|| format!("failed to write {}", path.display()))?;
      ui::ok(&format!("exported {} categories to {}", site.i18n.slug_maps().len(), path.display()));
    }
    None => ui::value(&json),
  }
  Ok(())
}
