use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

use crate::constants::*;
use crate::logging::parse_level;
use crate::stats::{StatRange, StatRanges};

/// Application configuration with sensible defaults.
///
/// Can be overridden via ~/.config/hostterm/config.toml, then by CLI flags.
#[derive(Debug, Clone)]
pub struct Config {
    /// UI poll interval in milliseconds
    pub tick_ms: u64,
    /// Stats simulator period in milliseconds
    pub stats_interval_ms: u64,
    /// Theme name (built-in or custom)
    pub theme: String,
    /// UI language (en, ru)
    pub lang: String,
    /// Print the welcome banner as the first scrollback entry
    pub show_banner: bool,
    pub log_level: LevelFilter,
    pub stat_ranges: StatRanges,
    /// Fixed simulator seed (CLI only)
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            stats_interval_ms: DEFAULT_STATS_INTERVAL_MS,
            theme: "phosphor".to_string(),
            lang: "en".to_string(),
            show_banner: true,
            log_level: LevelFilter::Info,
            stat_ranges: StatRanges::default(),
            seed: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid [stats] range for {field}: [{lo}, {hi})")]
    InvalidRange { field: &'static str, lo: u8, hi: u8 },
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// TOML-deserializable config file format.
/// All fields are optional; missing fields use defaults.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct FileConfig {
    tick_ms: Option<u64>,
    stats_interval_ms: Option<u64>,
    theme: Option<String>,
    lang: Option<String>,
    show_banner: Option<bool>,
    log_level: Option<String>,
    stats: Option<FileStatsConfig>,
}

/// `[stats]` section: `[lo, hi]` pairs, upper bound exclusive.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct FileStatsConfig {
    cpu: Option<[u8; 2]>,
    ram: Option<[u8; 2]>,
    disk: Option<[u8; 2]>,
    network: Option<[u8; 2]>,
}

impl Config {
    /// Load from `explicit` if given, else from the default path.
    ///
    /// A missing default file yields pure defaults; a missing explicit file
    /// is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => {
                let path = config_file_path();
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file_config: FileConfig =
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::default().merged(file_config)
    }

    /// Merge file values over `self`.
    fn merged(mut self, file_config: FileConfig) -> Result<Self, ConfigError> {
        if let Some(v) = file_config.tick_ms {
            self.tick_ms = v.max(MIN_TICK_MS);
        }
        if let Some(v) = file_config.stats_interval_ms {
            self.stats_interval_ms = v.max(MIN_STATS_INTERVAL_MS);
        }
        if let Some(v) = file_config.theme {
            if !v.is_empty() {
                self.theme = v;
            }
        }
        if let Some(v) = file_config.lang {
            if !LANGUAGES.contains(&v.as_str()) {
                return Err(ConfigError::InvalidValue { key: "lang", value: v });
            }
            self.lang = v;
        }
        if let Some(v) = file_config.show_banner {
            self.show_banner = v;
        }
        if let Some(v) = file_config.log_level {
            self.log_level = parse_level(&v)
                .ok_or(ConfigError::InvalidValue { key: "log_level", value: v })?;
        }

        if let Some(s) = file_config.stats {
            let ranges = &mut self.stat_ranges;
            merge_range(&mut ranges.cpu, "cpu", s.cpu)?;
            merge_range(&mut ranges.ram, "ram", s.ram)?;
            merge_range(&mut ranges.disk, "disk", s.disk)?;
            merge_range(&mut ranges.network, "network", s.network)?;
        }

        Ok(self)
    }
}

fn merge_range(
    target: &mut StatRange,
    field: &'static str,
    value: Option<[u8; 2]>,
) -> Result<(), ConfigError> {
    if let Some([lo, hi]) = value {
        let range = StatRange::new(lo, hi);
        if !range.is_valid() {
            return Err(ConfigError::InvalidRange { field, lo, hi });
        }
        *target = range;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn defaults() {
        let c = Config::default();
        assert_eq!(c.stats_interval_ms, 3000);
        assert_eq!(c.theme, "phosphor");
        assert_eq!(c.lang, "en");
        assert!(c.show_banner);
        assert_eq!(c.stat_ranges, StatRanges::default());
        assert_eq!(c.seed, None);
    }

    #[test]
    fn empty_file_is_defaults() {
        let f = write_config("");
        let c = Config::load_from(f.path()).unwrap();
        assert_eq!(c.tick_ms, DEFAULT_TICK_MS);
        assert_eq!(c.log_level, LevelFilter::Info);
    }

    #[test]
    fn file_values_merge_over_defaults() {
        let f = write_config(
            r#"
            stats_interval_ms = 1500
            theme = "amber"
            lang = "ru"
            show_banner = false
            log_level = "debug"

            [stats]
            cpu = [10, 20]
            "#,
        );
        let c = Config::load_from(f.path()).unwrap();
        assert_eq!(c.stats_interval_ms, 1500);
        assert_eq!(c.theme, "amber");
        assert_eq!(c.lang, "ru");
        assert!(!c.show_banner);
        assert_eq!(c.log_level, LevelFilter::Debug);
        assert_eq!(c.stat_ranges.cpu, StatRange::new(10, 20));
        assert_eq!(c.stat_ranges.ram, StatRanges::default().ram);
    }

    #[test]
    fn intervals_are_clamped() {
        let f = write_config("tick_ms = 1\nstats_interval_ms = 10\n");
        let c = Config::load_from(f.path()).unwrap();
        assert_eq!(c.tick_ms, MIN_TICK_MS);
        assert_eq!(c.stats_interval_ms, MIN_STATS_INTERVAL_MS);
    }

    #[test]
    fn empty_theme_keeps_default() {
        let f = write_config("theme = \"\"\n");
        assert_eq!(Config::load_from(f.path()).unwrap().theme, "phosphor");
    }

    #[test]
    fn invalid_range_is_rejected() {
        let f = write_config("[stats]\ndisk = [90, 70]\n");
        match Config::load_from(f.path()) {
            Err(ConfigError::InvalidRange { field, lo, hi }) => {
                assert_eq!((field, lo, hi), ("disk", 90, 70));
            }
            other => panic!("unexpected {:?}", other),
        }
        let f = write_config("[stats]\nnetwork = [0, 200]\n");
        assert!(matches!(
            Config::load_from(f.path()),
            Err(ConfigError::InvalidRange { field: "network", .. })
        ));
    }

    #[test]
    fn unknown_lang_and_level_are_rejected() {
        let f = write_config("lang = \"tlh\"\n");
        assert!(matches!(
            Config::load_from(f.path()),
            Err(ConfigError::InvalidValue { key: "lang", .. })
        ));
        let f = write_config("log_level = \"chatty\"\n");
        assert!(matches!(
            Config::load_from(f.path()),
            Err(ConfigError::InvalidValue { key: "log_level", .. })
        ));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let f = write_config("tick_ms = [oops");
        let err = Config::load_from(f.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("failed to parse"));
    }

    #[test]
    fn missing_explicit_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(
            Config::load(Some(&path)),
            Err(ConfigError::Read { .. })
        ));
    }
}
