//! File-backed logger for the `log` facade.
//!
//! The terminal UI owns stdout/stderr while running, so records go to
//! `~/.local/share/hostterm/hostterm.log` instead.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use chrono::{Local, SecondsFormat};
use env_logger::{Builder, Target, WriteStyle};
use log::LevelFilter;

/// Parse a level name (`off`, `error`, `warn`, `info`, `debug`, `trace`).
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse().ok()
}

/// Builder writing `<RFC3339 time> <LEVEL> <target>: <message>` lines to `file`.
fn builder(file: File, level: LevelFilter) -> Builder {
    let mut builder = Builder::new();
    builder
        .target(Target::Pipe(Box::new(file)))
        .write_style(WriteStyle::Never)
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                Local::now().to_rfc3339_opts(SecondsFormat::Millis, false),
                record.level(),
                record.target(),
                record.args()
            )
        });
    builder
}

/// Install the file logger at `path` with the given level.
///
/// `LevelFilter::Off` installs nothing and touches no files.
pub fn init(path: &Path, level: LevelFilter) -> Result<()> {
    log::set_max_level(level);
    if level == LevelFilter::Off {
        return Ok(());
    }

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    builder(file, level)
        .try_init()
        .map_err(|e| anyhow!("installing logger: {}", e))
}
