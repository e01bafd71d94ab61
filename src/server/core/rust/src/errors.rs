/* src/server/core/rust/src/errors.rs */

use std::fmt;

use thiserror::Error;

/// Configuration-time failures. Resolution itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
  #[error("invalid locale config: {0}")]
  InvalidLocaleConfig(String),
  #[error("{0}")]
  SlugCollision(SlugCollision),
}

impl SlugError {
  pub fn invalid_config(msg: impl Into<String>) -> Self {
    Self::InvalidLocaleConfig(msg.into())
  }

  /// Stable machine-readable code, e.g. for CLI exit reporting.
  pub fn code(&self) -> &'static str {
    match self {
      Self::InvalidLocaleConfig(_) => "INVALID_LOCALE_CONFIG",
      Self::SlugCollision(_) => "SLUG_COLLISION",
    }
  }
}

/// Two or more canonical keys of one category rendering to the same
/// localized value in one locale. Reverse lookups resolve such a value
/// to the first key in stored order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugCollision {
  pub category: String,
  pub locale: String,
  pub localized: String,
  /// Colliding canonical keys in stored order.
  pub canonicals: Vec<String>,
}

impl fmt::Display for SlugCollision {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "slug collision in category \"{}\": locale \"{}\" maps {:?} to \"{}\"",
      self.category, self.locale, self.canonicals, self.localized
    )
  }
}

impl From<SlugCollision> for SlugError {
  fn from(c: SlugCollision) -> Self {
    Self::SlugCollision(c)
  }
}
