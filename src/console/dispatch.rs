//! Command dispatch.
//!
//! [`execute`] is a pure function of the raw input, the current stats and
//! the current section. It never touches session state; it reports what
//! should happen as an [`Outcome`] and [`super::Session`] applies it.

use crate::constants::*;
use crate::models::{usage_bar, Gauge, Stats};

use super::commands::{help_lines, Action, COMMANDS};
use super::sections::{find_section, section_details, section_ids};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Blank input. Nothing is logged.
    Ignored,
    /// Wipe the scrollback. `clear` never logs itself.
    ClearHistory,
    /// Log an entry with these lines, optionally switching section first.
    Reply {
        lines: Vec<String>,
        navigate_to: Option<&'static str>,
    },
}

impl Outcome {
    fn reply(lines: Vec<String>) -> Self {
        Outcome::Reply {
            lines,
            navigate_to: None,
        }
    }

    /// Output lines of a reply; empty for the other outcomes.
    #[cfg(test)]
    pub fn lines(&self) -> &[String] {
        match self {
            Outcome::Reply { lines, .. } => lines,
            _ => &[],
        }
    }
}

/// Match `raw` against the command table and produce its outcome.
///
/// Matching is case-insensitive on the trimmed input; the unknown-command
/// message echoes `raw` untouched.
pub fn execute(raw: &str, stats: &Stats, current_section: &str) -> Outcome {
    let normalized = raw.trim().to_lowercase();
    if normalized.is_empty() {
        return Outcome::Ignored;
    }

    for command in COMMANDS {
        if let Some(arg) = command.match_input(&normalized) {
            log::debug!("dispatch {:?} -> {}", normalized, command.name);
            return run(command.action, arg, stats, current_section);
        }
    }

    log::debug!("unknown command {:?}", raw);
    Outcome::reply(vec![
        format!("Command not found: {}", raw),
        "Type \"help\" for available commands".to_string(),
    ])
}

fn run(action: Action, arg: &str, stats: &Stats, current_section: &str) -> Outcome {
    match action {
        Action::Help => Outcome::reply(help_lines()),
        Action::Clear => Outcome::ClearHistory,
        Action::Status => Outcome::reply(status_lines(stats)),
        Action::Navigate => match find_section(arg) {
            Some(section) => {
                let mut lines = vec![format!("Navigated to section: {}", section.name)];
                lines.extend(section.detail_lines());
                Outcome::Reply {
                    lines,
                    navigate_to: Some(section.id),
                }
            }
            None => Outcome::reply(unknown_section(arg)),
        },
        Action::Show => match find_section(arg) {
            Some(section) => Outcome::reply(section.detail_lines()),
            None => Outcome::reply(unknown_section(arg)),
        },
        Action::List => Outcome::reply(section_details(current_section)),
        Action::Text(lines) => Outcome::reply(lines.iter().map(|l| l.to_string()).collect()),
    }
}

fn status_lines(stats: &Stats) -> Vec<String> {
    let mut lines: Vec<String> = Gauge::all()
        .iter()
        .map(|gauge| {
            let value = stats.get(*gauge);
            format!(
                "{:<width$}{}% {}",
                gauge.status_label(),
                value,
                usage_bar(value),
                width = STATUS_LABEL_WIDTH
            )
        })
        .collect();
    lines.push(String::new());
    lines.push("Status: ✓ All systems operational".to_string());
    lines
}

fn unknown_section(name: &str) -> Vec<String> {
    vec![
        format!("Error: Section '{}' not found", name),
        format!("Available sections: {}", section_ids().join(", ")),
    ]
}
