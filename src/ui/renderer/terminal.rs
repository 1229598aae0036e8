//! Terminal panel: scrollback, suggestion strip, input line.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::models::HistoryEntry;
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use crate::utils::{cursor_visible, gap_before_right, truncate_to_width};

use super::helpers::{prompt_spans, prompt_width, render_scrollbar};

/// Indent of output lines under their prompt line.
const OUTPUT_INDENT: &str = "  ";

pub fn render_terminal(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let block = Block::default()
        .title(Span::styled(t!("title.terminal").to_string(), t.header_style()))
        .borders(Borders::ALL)
        .border_style(t.border_highlight_style())
        .style(Style::default().bg(t.bg_panel));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let suggestion_rows = if state.completer.suggestions().is_empty() {
        0
    } else {
        1
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),                  // Scrollback
            Constraint::Length(suggestion_rows), // Suggestions
            Constraint::Length(2),               // Separator + input
        ])
        .split(inner);

    render_history(frame, chunks[0], state);
    if suggestion_rows > 0 {
        render_suggestions(frame, chunks[1], state);
    }
    render_input(frame, chunks[2], state);
}

fn render_history(frame: &mut Frame, area: Rect, state: &AppState) {
    if area.width < 2 || area.height == 0 {
        return;
    }
    // Last column is kept for the scrollbar.
    let text_width = (area.width - 1) as usize;
    let lines = history_lines(state.session.history(), text_width, &state.theme);

    let total = lines.len();
    let max_top = total.saturating_sub(area.height as usize);
    let top = max_top - state.scroll_offset.min(max_top);

    let text_area = Rect {
        width: area.width - 1,
        ..area
    };
    let paragraph = Paragraph::new(lines).scroll((top.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(paragraph, text_area);
    render_scrollbar(frame, area, total, top);
}

/// Display lines for the whole scrollback at `width` columns.
fn history_lines(entries: &[HistoryEntry], width: usize, t: &Theme) -> Vec<Line<'static>> {
    let text_width = width.saturating_sub(OUTPUT_INDENT.len()).max(1);
    let mut lines = Vec::new();
    for (idx, entry) in entries.iter().enumerate() {
        if idx > 0 {
            lines.push(Line::raw(""));
        }
        lines.push(prompt_line(entry, width, t));
        for out in &entry.output {
            for piece in wrap_output(out, text_width) {
                lines.push(Line::from(vec![
                    Span::raw(OUTPUT_INDENT),
                    Span::styled(piece, t.output_style()),
                ]));
            }
        }
    }
    lines
}

/// `root@hosting ~ $ <command>` with the timestamp flush right.
fn prompt_line(entry: &HistoryEntry, width: usize, t: &Theme) -> Line<'static> {
    let stamp = entry.timestamp.as_str();
    let room = width.saturating_sub(prompt_width() + stamp.width() + 1);
    let command = truncate_to_width(&entry.command, room);
    let gap = gap_before_right(prompt_width() + command.width(), stamp, width);

    let mut spans = prompt_spans(t);
    spans.push(Span::styled(command, t.command_style()));
    spans.push(Span::raw(" ".repeat(gap)));
    spans.push(Span::styled(stamp.to_string(), t.timestamp_style()));
    Line::from(spans)
}

/// Fixed-layout output (tables, the banner box) is kept intact when it fits.
fn wrap_output(line: &str, width: usize) -> Vec<String> {
    if line.width() <= width {
        return vec![line.to_string()];
    }
    textwrap::wrap(line, width)
        .into_iter()
        .map(|piece| piece.into_owned())
        .collect()
}

fn render_suggestions(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let mut spans = vec![Span::styled(
        t!("terminal.suggestions").to_string(),
        Style::default().fg(t.text_dim),
    )];
    for (i, name) in state.completer.suggestions().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if i == 0 {
            Style::default()
                .fg(t.accent_cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(t.text_output)
        };
        spans.push(Span::styled(*name, style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_input(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(t.border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = prompt_spans(t);
    let cursor_pos = state.cursor_pos.min(state.input.len());
    let (before, rest) = state.input.split_at(cursor_pos);
    spans.push(Span::styled(before.to_string(), t.command_style()));

    let lit = cursor_visible(state.tick_count);
    let mut chars = rest.chars();
    match chars.next() {
        Some(under) => {
            let style = if lit {
                t.command_style().add_modifier(Modifier::REVERSED)
            } else {
                t.command_style()
            };
            spans.push(Span::styled(under.to_string(), style));
            spans.push(Span::styled(chars.as_str().to_string(), t.command_style()));
        }
        None => {
            spans.push(Span::styled(if lit { "█" } else { " " }, t.command_style()));
        }
    }

    if state.input.is_empty() {
        spans.push(Span::styled(
            format!(" {}", t!("terminal.placeholder")),
            Style::default().fg(t.text_muted),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn entry(command: &str, output: &[&str]) -> HistoryEntry {
        HistoryEntry::new(
            command,
            output.iter().map(|s| s.to_string()).collect(),
            "12:34:56".to_string(),
        )
    }

    // ── prompt_line ───────────────────────────────────────────────

    #[test]
    fn prompt_line_right_aligns_timestamp() {
        let line = prompt_line(&entry("ls", &[]), 40, &Theme::phosphor());
        let text = line_text(&line);
        assert!(text.starts_with("root@hosting ~ $ ls"));
        assert!(text.ends_with("12:34:56"));
        assert_eq!(text.width(), 40);
    }

    #[test]
    fn prompt_line_truncates_long_command() {
        let long = "x".repeat(100);
        let text = line_text(&prompt_line(&entry(&long, &[]), 40, &Theme::phosphor()));
        assert!(text.contains('…'));
        assert!(text.ends_with(" 12:34:56"));
        assert_eq!(text.width(), 40);
    }

    // ── history_lines ─────────────────────────────────────────────

    #[test]
    fn entries_are_separated_and_indented() {
        let entries = vec![entry("whoami", &["root@hosting-control"]), entry("ls", &["a"])];
        let lines = history_lines(&entries, 60, &Theme::phosphor());
        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(texts.len(), 5);
        assert_eq!(texts[1], "  root@hosting-control");
        assert_eq!(texts[2], "");
        assert!(texts[3].starts_with("root@hosting ~ $ ls"));
    }

    #[test]
    fn empty_history_has_no_lines() {
        assert!(history_lines(&[], 60, &Theme::phosphor()).is_empty());
    }

    // ── wrap_output ───────────────────────────────────────────────

    #[test]
    fn fitting_lines_keep_spacing() {
        let table = "  PID  USER     %CPU";
        assert_eq!(wrap_output(table, 40), vec![table.to_string()]);
    }

    #[test]
    fn long_lines_wrap() {
        let pieces = wrap_output("alpha beta gamma delta", 11);
        assert_eq!(pieces, vec!["alpha beta", "gamma delta"]);
    }
}
