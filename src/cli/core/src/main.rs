/* src/cli/core/src/main.rs */

mod commands;
mod config;
mod site;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use config::{SlugwayConfig, find_slugway_config, load_slugway_config};

#[derive(Parser)]
#[command(name = "slugway", about = "Localized slug and path translation for multilingual sites")]
struct Cli {
  /// Path to slugway.toml (auto-detected if omitted)
  #[arg(short, long, global = true)]
  config: Option<PathBuf>,
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Print the localized routes injected for every non-default locale
  Routes,
  /// Localize a canonical path into a locale
  Localize {
    /// Canonical path (e.g. /about/)
    path: String,
    #[arg(short, long)]
    locale: String,
  },
  /// Rewrite a path from its own locale into another one
  Switch {
    /// Path in any locale (e.g. /es/sobre/)
    path: String,
    #[arg(short, long)]
    to: String,
  },
  /// Print the locale a path belongs to
  Detect { path: String },
  /// List canonical and localized slugs of a category
  Pairs {
    category: String,
    #[arg(short, long)]
    locale: String,
  },
  /// Print hreflang alternates, canonical URL and OG locales for a path
  Hreflang { path: String },
  /// Validate the config and fail on slug collisions
  Check,
  /// Export all slug maps as JSON
  Export {
    /// Output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
  },
}

/// `SLUGWAY_LOG` follows `RUST_LOG` syntax; warnings only by default.
fn init_tracing() {
  let filter = EnvFilter::try_from_env("SLUGWAY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

/// Resolve config path (explicit or auto-detected) and parse it
fn resolve_config(explicit: Option<PathBuf>) -> Result<(PathBuf, SlugwayConfig)> {
  let path = match explicit {
    Some(p) => p,
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      find_slugway_config(&cwd)?
    }
  };
  let config = load_slugway_config(&path)?;
  Ok((path, config))
}

fn main() -> Result<()> {
  init_tracing();
  let cli = Cli::parse();

  let (config_path, slugway_config) = resolve_config(cli.config)?;
  let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
  let site = site::load_site(&slugway_config, base_dir)?;

  match cli.command {
    Command::Routes => commands::run_routes(&site, base_dir)?,
    Command::Localize { path, locale } => commands::run_localize(&site, &path, &locale),
    Command::Switch { path, to } => commands::run_switch(&site, &path, &to),
    Command::Detect { path } => commands::run_detect(&site, &path),
    Command::Pairs { category, locale } => commands::run_pairs(&site, &category, &locale)?,
    Command::Hreflang { path } => commands::run_hreflang(&site, &path)?,
    Command::Check => commands::run_check(&site)?,
    Command::Export { out } => commands::run_export(&site, out.as_deref())?,
  }

  Ok(())
}
