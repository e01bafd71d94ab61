/* src/server/core/rust/src/content.rs */

use std::collections::BTreeMap;

/// Pick the `locale` value of a per-locale content field, falling back to
/// the default locale's value. `None` only when both are missing.
pub fn localized<'a, T>(
  field: &'a BTreeMap<String, T>,
  locale: &str,
  default_locale: &str,
) -> Option<&'a T> {
  field.get(locale).or_else(|| field.get(default_locale))
}
