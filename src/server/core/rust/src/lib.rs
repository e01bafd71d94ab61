/* src/server/core/rust/src/lib.rs */

pub mod compose;
pub mod content;
pub mod errors;
pub mod i18n;
pub mod locale;
pub mod resolve;
pub mod seo;
pub mod slug_map;
pub mod slug_resolver;
pub mod translate;

// Re-exports for ergonomic use
pub use compose::{compose_slug_map, default_leaf};
pub use content::localized;
pub use errors::{SlugCollision, SlugError};
pub use i18n::I18n;
pub use locale::LocaleConfig;
pub use resolve::RouteResolver;
pub use seo::{HrefLang, OgLocales, canonical_url, href_langs, og_locales, to_og_locale};
pub use slug_map::{LocaleSlugs, SlugEntry, SlugMap, SlugMaps};
pub use slug_resolver::{SlugPair, SlugResolver};
pub use translate::PathTranslator;
