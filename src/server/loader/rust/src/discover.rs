/* src/server/loader/rust/src/discover.rs */

use std::path::PathBuf;

use slugway_core::SlugMaps;
use tracing::debug;

use crate::content::load_content_slug_map;
use crate::errors::LoadError;
use crate::pages::{PageMap, PageScanOptions, load_page_map};

/// Category the page scan fills.
pub const PAGES_CATEGORY: &str = "pages";

#[derive(Debug, Clone, Default)]
pub struct DiscoverOptions {
  /// Maps declared up front; discovered categories replace same-named ones.
  pub slug_maps: SlugMaps,
  pub pages_dir: Option<PathBuf>,
  pub page_scan: PageScanOptions,
  /// (category, directory) pairs, in category order.
  pub content_dirs: Vec<(String, PathBuf)>,
}

#[derive(Debug, Clone, Default)]
pub struct Discovery {
  pub slug_maps: SlugMaps,
  /// Present when a pages directory was scanned.
  pub pages: Option<PageMap>,
}

pub fn discover(options: DiscoverOptions) -> Result<Discovery, LoadError> {
  let DiscoverOptions { mut slug_maps, pages_dir, page_scan, content_dirs } = options;

  let pages = match pages_dir {
    Some(dir) => {
      let page_map = load_page_map(&dir, &page_scan)?;
      slug_maps.insert(PAGES_CATEGORY, page_map.slug_map.clone());
      Some(page_map)
    }
    None => None,
  };

  for (category, dir) in content_dirs {
    let map = load_content_slug_map(&dir)?;
    debug!(category = %category, entries = map.len(), "content category discovered");
    slug_maps.insert(category, map);
  }

  Ok(Discovery { slug_maps, pages })
}
