//! # hostterm - Hosting Control Terminal
//!
//! A retro green-screen hosting control panel for the terminal: section
//! navigation, a handful of canned shell commands with prefix autocomplete,
//! and live (simulated) CPU / RAM / disk / network gauges.

#[macro_use]
extern crate rust_i18n;

// Load locale files from `locales/` directory, default to English
i18n!("locales", fallback = "en");

mod app;
mod config;
mod console;
pub mod constants;
mod logging;
mod models;
mod stats;
mod ui;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use app::App;
use config::Config;
use constants::{log_file_path, LANGUAGES, MIN_STATS_INTERVAL_MS};

/// hostterm - Hosting Control Terminal
#[derive(Parser, Debug)]
#[command(name = "hostterm", version, about = "A retro hosting control terminal for your terminal")]
struct Cli {
    /// Color theme (phosphor, amber, nord, dracula, or a custom theme name)
    #[arg(long, short = 't')]
    theme: Option<String>,

    /// UI language (en, ru)
    #[arg(long, short = 'l', value_name = "LANG")]
    lang: Option<String>,

    /// Stats refresh period in milliseconds
    #[arg(long, value_name = "MS")]
    stats_interval: Option<u64>,

    /// Fixed seed for the stats simulator (reproducible gauges)
    #[arg(long)]
    seed: Option<u64>,

    /// Start with an empty terminal instead of the welcome banner
    #[arg(long)]
    no_banner: bool,

    /// Config file (default: ~/.config/hostterm/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config; a broken file is reported and replaced by defaults
    let (mut config, config_error) = match Config::load(cli.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => {
            eprintln!("hostterm: {e}; using defaults");
            (Config::default(), Some(e))
        }
    };

    // Apply CLI overrides
    if let Some(ref theme_name) = cli.theme {
        config.theme = theme_name.clone();
    }
    if let Some(ref lang) = cli.lang {
        config.lang = lang.clone();
    }
    if let Some(ms) = cli.stats_interval {
        config.stats_interval_ms = ms.max(MIN_STATS_INTERVAL_MS);
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.no_banner {
        config.show_banner = false;
    }
    if let Some(ref level) = cli.log_level {
        match logging::parse_level(level) {
            Some(level) => config.log_level = level,
            None => eprintln!("hostterm: unknown log level {level:?}; keeping {}", config.log_level),
        }
    }

    if !LANGUAGES.contains(&config.lang.as_str()) {
        eprintln!("hostterm: unsupported language {:?}; using en", config.lang);
        config.lang = "en".to_string();
    }
    rust_i18n::set_locale(&config.lang);

    if let Err(e) = logging::init(&log_file_path(), config.log_level) {
        eprintln!("hostterm: logging disabled: {e:#}");
    }
    log::info!(
        "hostterm {} starting (theme={}, lang={})",
        env!("CARGO_PKG_VERSION"),
        config.theme,
        config.lang
    );
    if let Some(e) = config_error {
        log::warn!("config ignored: {}", e);
    }

    let mut app = App::new(&config);
    app.run().await
}
