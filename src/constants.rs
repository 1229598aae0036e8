//! Application-wide constants.
//!
//! Centralizes timing defaults, stat ranges, layout numbers and paths so
//! the rest of the codebase never carries magic numbers.

use std::path::PathBuf;

// ── Timing ────────────────────────────────────────────────────────
/// Minimum allowed UI poll interval (ms).
pub const MIN_TICK_MS: u64 = 16;
/// Default UI poll interval (ms) -- how often the loop checks for input.
pub const DEFAULT_TICK_MS: u64 = 50;
/// Minimum allowed stats refresh period (ms).
pub const MIN_STATS_INTERVAL_MS: u64 = 250;
/// Default stats refresh period (ms).
pub const DEFAULT_STATS_INTERVAL_MS: u64 = 3000;
/// Status message display duration (seconds).
pub const STATUS_MESSAGE_TIMEOUT_SECS: u64 = 4;
/// UI ticks per cursor blink phase.
pub const CURSOR_BLINK_TICKS: u64 = 10;

// ── Stats Simulator ───────────────────────────────────────────────
/// Values shown before the first simulator tick.
pub const INITIAL_CPU_PCT: u8 = 45;
pub const INITIAL_RAM_PCT: u8 = 62;
pub const INITIAL_DISK_PCT: u8 = 78;
pub const INITIAL_NETWORK_PCT: u8 = 23;
/// Default half-open ranges `[lo, hi)` per gauge.
pub const DEFAULT_CPU_RANGE: (u8, u8) = (30, 70);
pub const DEFAULT_RAM_RANGE: (u8, u8) = (50, 80);
pub const DEFAULT_DISK_RANGE: (u8, u8) = (70, 90);
pub const DEFAULT_NETWORK_RANGE: (u8, u8) = (10, 60);
/// Exclusive upper bound a configured range may use (so values stay <= 100).
pub const MAX_RANGE_UPPER: u8 = 101;
/// Samples kept per gauge for the trend strip.
pub const TREND_CAPACITY: usize = 40;

// ── Console ───────────────────────────────────────────────────────
/// One `█` per this many percent in `status` output.
pub const STATUS_BAR_STEP: u8 = 5;
/// Column width of the padded labels in `status` output.
pub const STATUS_LABEL_WIDTH: usize = 15;
/// Section selected when a session starts.
pub const DEFAULT_SECTION: &str = "home";
/// Format of the per-entry wall-clock stamp.
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S";
/// Prompt user and host shown before every command.
pub const PROMPT_USER_HOST: &str = "root@hosting";
/// Terminal product version shown in the header and banner.
pub const TERMINAL_VERSION: &str = "v2.0.1";

// ── UI Layout ─────────────────────────────────────────────────────
/// Rows taken by the header bar.
pub const HEADER_HEIGHT: u16 = 3;
/// Rows taken by the section button bar.
pub const SECTION_BAR_HEIGHT: u16 = 3;
/// Rows taken by the gauge cards.
pub const GAUGE_ROW_HEIGHT: u16 = 4;
/// Gap (columns) between section buttons.
pub const SECTION_BUTTON_GAP: u16 = 1;
/// Lines scrolled by PageUp/PageDown in the terminal panel.
pub const PAGE_SIZE: usize = 10;
/// Lines scrolled per mouse wheel notch.
pub const WHEEL_STEP: usize = 3;
/// Help overlay size.
pub const HELP_POPUP_WIDTH: u16 = 58;
pub const HELP_POPUP_HEIGHT: u16 = 22;

// ── Animation ─────────────────────────────────────────────────────
/// Header pulse glyphs, alternating every blink phase.
pub const PULSE_CHARS: &[&str] = &["●", "○"];

// ── Supported Languages ───────────────────────────────────────────
/// Available UI languages for cycling.
pub const LANGUAGES: &[&str] = &["en", "ru"];

// ── Logging ───────────────────────────────────────────────────────
/// Log file name inside the data directory.
pub const LOG_FILE_NAME: &str = "hostterm.log";

// ── Paths ─────────────────────────────────────────────────────────

/// Returns the user's home directory, falling back to /tmp.
pub fn home_dir() -> PathBuf {
    PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string()))
}

/// Returns `~/.config/hostterm/`.
pub fn config_dir() -> PathBuf {
    home_dir().join(".config").join("hostterm")
}

/// Returns `~/.config/hostterm/config.toml`.
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Returns `~/.config/hostterm/themes/<name>.toml`.
pub fn custom_theme_path(name: &str) -> PathBuf {
    config_dir().join("themes").join(format!("{}.toml", name))
}

/// Returns `~/.local/share/hostterm/`.
pub fn data_dir() -> PathBuf {
    home_dir().join(".local").join("share").join("hostterm")
}

/// Returns `~/.local/share/hostterm/hostterm.log`.
pub fn log_file_path() -> PathBuf {
    data_dir().join(LOG_FILE_NAME)
}
