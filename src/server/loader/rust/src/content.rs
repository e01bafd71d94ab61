/* src/server/loader/rust/src/content.rs */

use std::fs;
use std::path::Path;

use slugway_core::SlugMap;
use tracing::debug;
use walkdir::WalkDir;

use crate::errors::LoadError;
use crate::frontmatter::{parse_yaml_slugs, split_frontmatter};

/// Build a content category from the `*.md` files directly inside `dir`.
///
/// The file stem is the canonical id and the front matter `slugs` mapping
/// its row. Files without front matter or without `slugs` are left out.
pub fn load_content_slug_map(dir: &Path) -> Result<SlugMap, LoadError> {
  let mut map = SlugMap::new();
  let walker = WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name();

  for entry in walker {
    let entry = entry.map_err(|source| LoadError::Walk { root: dir.to_path_buf(), source })?;
    let path = entry.path();
    if !entry.file_type().is_file() || path.extension().is_none_or(|e| e != "md") {
      continue;
    }
    let Some(id) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
      continue;
    };

    let raw = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    let Some(frontmatter) = split_frontmatter(&raw) else {
      continue;
    };
    let slugs = parse_yaml_slugs(frontmatter)
      .map_err(|source| LoadError::Frontmatter { path: path.to_path_buf(), source })?;
    if let Some(slugs) = slugs {
      map.insert(id, slugs);
    }
  }

  debug!(dir = %dir.display(), entries = map.len(), "content slugs loaded");
  Ok(map)
}
