/* src/server/loader/rust/src/lib.rs */

pub mod content;
pub mod discover;
pub mod errors;
pub mod frontmatter;
pub mod pages;
pub mod routes;

pub use content::load_content_slug_map;
pub use discover::{DiscoverOptions, Discovery, PAGES_CATEGORY, discover};
pub use errors::LoadError;
pub use pages::{PageEntry, PageMap, PageScanOptions, load_page_map};
pub use routes::{InjectedRoute, injected_routes};
