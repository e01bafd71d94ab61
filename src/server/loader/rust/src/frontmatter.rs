/* src/server/loader/rust/src/frontmatter.rs */

use std::sync::OnceLock;

use regex::Regex;
use slugway_core::LocaleSlugs;

fn frontmatter_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"^---\r?\n([\s\S]*?)\r?\n---").unwrap())
}

fn slugs_export_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"export\s+const\s+slugs\s*=\s*(\{[^}]+\})").unwrap())
}

fn bare_key_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"(\w+)\s*:").unwrap())
}

fn trailing_comma_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r",\s*\}").unwrap())
}

/// Body of the leading `---` block, without the delimiters.
pub fn split_frontmatter(raw: &str) -> Option<&str> {
  frontmatter_re().captures(raw).and_then(|c| c.get(1)).map(|m| m.as_str())
}

/// Parse `export const slugs = { en: 'about', es: 'sobre' }` from a
/// component front matter block. The object literal is normalized to JSON
/// (single quotes, bare keys, trailing comma); anything that still fails to
/// parse counts as no declaration.
pub fn parse_slugs_export(frontmatter: &str) -> Option<LocaleSlugs> {
  let literal = slugs_export_re().captures(frontmatter)?.get(1)?.as_str();
  let json = literal.replace('\'', "\"");
  let json = bare_key_re().replace_all(&json, "\"${1}\":");
  let json = trailing_comma_re().replace_all(&json, "}");
  serde_json::from_str(&json).ok()
}

/// The `slugs` mapping of a YAML front matter block, if any.
///
/// Front matter that parses but is not a mapping (a list, a bare scalar)
/// has no `slugs` and yields `None`; only unparseable YAML or a `slugs`
/// value that is not a locale table is an error.
pub fn parse_yaml_slugs(frontmatter: &str) -> Result<Option<LocaleSlugs>, serde_yaml::Error> {
  if frontmatter.trim().is_empty() {
    return Ok(None);
  }
  let value: serde_yaml::Value = serde_yaml::from_str(frontmatter)?;
  match value.as_mapping().and_then(|m| m.get("slugs")) {
    Some(slugs) if !slugs.is_null() => serde_yaml::from_value(slugs.clone()).map(Some),
    _ => Ok(None),
  }
}
