/* src/cli/core/src/config/mod.rs */

mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{find_slugway_config, load_slugway_config};
pub use types::SlugwayConfig;
