/* src/server/loader/rust/src/pages.rs */

use std::fs;
use std::path::{Component, Path};

use serde::Serialize;
use slugway_core::{LocaleSlugs, SlugMap, compose_slug_map, default_leaf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::errors::LoadError;
use crate::frontmatter::{parse_slugs_export, parse_yaml_slugs, split_frontmatter};

/// One routable file under the pages directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageEntry {
  /// Canonical key: relative path without extension, `/index` removed.
  pub key: String,
  pub entrypoint: String,
  /// Leaf slugs the file declares itself.
  pub declared: LocaleSlugs,
}

#[derive(Debug, Clone, Default)]
pub struct PageMap {
  pub pages: Vec<PageEntry>,
  /// Composed full-path renderings, one row per page key.
  pub slug_map: SlugMap,
}

#[derive(Debug, Clone)]
pub struct PageScanOptions {
  pub extensions: Vec<String>,
  /// Locales that receive a default rendering for every page.
  pub locales: Vec<String>,
}

impl Default for PageScanOptions {
  fn default() -> Self {
    Self { extensions: vec!["astro".to_string()], locales: Vec::new() }
  }
}

/// Scan `pages_dir` and build the composed `pages` slug map.
///
/// Entries whose name starts with `[` (dynamic routes) are skipped along
/// with everything below them.
pub fn load_page_map(pages_dir: &Path, options: &PageScanOptions) -> Result<PageMap, LoadError> {
  let mut pages = Vec::new();
  let mut leaves = SlugMap::new();
  let dir_str = pages_dir.to_string_lossy();
  let entry_base = dir_str.trim_end_matches('/');

  let walker = WalkDir::new(pages_dir)
    .sort_by_file_name()
    .into_iter()
    .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('['));

  for entry in walker {
    let entry =
      entry.map_err(|source| LoadError::Walk { root: pages_dir.to_path_buf(), source })?;
    if !entry.file_type().is_file() {
      continue;
    }
    let path = entry.path();
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if !options.extensions.iter().any(|e| e == ext) {
      continue;
    }
    let Ok(rel) = path.strip_prefix(pages_dir) else {
      continue;
    };
    let rel_str = slash_path(rel);
    let key = page_key(&rel_str, ext);

    let raw = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    let declared = split_frontmatter(&raw)
      .and_then(|fm| declared_slugs(fm, path))
      .unwrap_or_default();

    let mut leaf: LocaleSlugs = options
      .locales
      .iter()
      .map(|locale| (locale.clone(), default_leaf(&key).to_string()))
      .collect();
    leaf.extend(declared.clone());

    if leaves.insert(key.clone(), leaf).is_some() {
      warn!(key = %key, path = %path.display(), "duplicate page key, last file wins");
    }
    debug!(key = %key, declared = declared.len(), "page discovered");
    pages.push(PageEntry {
      key,
      entrypoint: format!("{entry_base}/{rel_str}"),
      declared,
    });
  }

  let slug_map = compose_slug_map(&leaves, &options.locales);
  debug!(dir = %pages_dir.display(), pages = pages.len(), "page map loaded");
  Ok(PageMap { pages, slug_map })
}

/// `about/index.astro` -> `about`, `index.astro` -> `index`.
fn page_key(rel: &str, ext: &str) -> String {
  let stem = rel.strip_suffix(ext).and_then(|s| s.strip_suffix('.')).unwrap_or(rel);
  stem.strip_suffix("/index").unwrap_or(stem).to_string()
}

fn slash_path(rel: &Path) -> String {
  rel
    .components()
    .filter_map(|c| match c {
      Component::Normal(s) => Some(s.to_string_lossy()),
      _ => None,
    })
    .collect::<Vec<_>>()
    .join("/")
}

/// Component export first, YAML `slugs:` otherwise.
fn declared_slugs(frontmatter: &str, path: &Path) -> Option<LocaleSlugs> {
  if let Some(slugs) = parse_slugs_export(frontmatter) {
    return Some(slugs);
  }
  match parse_yaml_slugs(frontmatter) {
    Ok(slugs) => slugs,
    Err(e) => {
      if frontmatter.contains("slugs") {
        warn!(path = %path.display(), error = %e, "unreadable slugs declaration skipped");
      }
      None
    }
  }
}
