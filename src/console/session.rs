//! Console session: the scrollback history and the selected section.
//!
//! Applies dispatcher [`Outcome`]s and stamps each logged entry.

use chrono::Local;

use crate::constants::*;
use crate::models::{HistoryEntry, Stats};

use super::commands::{BANNER, BANNER_COMMAND};
use super::dispatch::{execute, Outcome};

/// Per-run console state: the scrollback and the selected section.
///
/// Only [`Session::submit`] and friends mutate it, so the dispatcher stays
/// a pure function of its inputs.
#[derive(Debug)]
pub struct Session {
    history: Vec<HistoryEntry>,
    current_section: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Empty history, `home` selected.
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            current_section: DEFAULT_SECTION.to_string(),
        }
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn current_section(&self) -> &str {
        &self.current_section
    }

    /// Run `raw` and stamp any new entry with the local wall-clock time.
    ///
    /// Returns `false` when the input was blank and nothing changed.
    pub fn submit(&mut self, raw: &str, stats: &Stats) -> bool {
        self.apply(raw, stats, || Local::now().format(TIMESTAMP_FORMAT).to_string())
    }

    /// Like [`Session::submit`] with a caller-supplied timestamp.
    #[cfg(test)]
    pub fn submit_at(&mut self, raw: &str, stats: &Stats, timestamp: &str) -> bool {
        self.apply(raw, stats, || timestamp.to_string())
    }

    fn apply(&mut self, raw: &str, stats: &Stats, stamp: impl FnOnce() -> String) -> bool {
        match execute(raw, stats, &self.current_section) {
            Outcome::Ignored => false,
            Outcome::ClearHistory => {
                log::info!("history cleared ({} entries)", self.history.len());
                self.history.clear();
                true
            }
            Outcome::Reply { lines, navigate_to } => {
                if let Some(id) = navigate_to {
                    log::info!("section {} -> {}", self.current_section, id);
                    self.current_section = id.to_string();
                }
                self.history.push(HistoryEntry::new(raw, lines, stamp()));
                true
            }
        }
    }

    /// Section-button path: runs and logs `section <id>` like a typed command.
    pub fn select_section(&mut self, id: &str, stats: &Stats) -> bool {
        self.submit(&format!("section {}", id), stats)
    }

    /// Append the startup banner entry.
    pub fn push_banner(&mut self) {
        let stamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let lines = BANNER.iter().map(|l| l.to_string()).collect();
        self.history.push(HistoryEntry::new(BANNER_COMMAND, lines, stamp));
    }
}
