//! Popup overlays: keyboard help.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::{HELP_POPUP_HEIGHT, HELP_POPUP_WIDTH};
use crate::ui::state::AppState;

use super::helpers::centered_rect;

pub fn render_help_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let popup_area = centered_rect(HELP_POPUP_WIDTH, HELP_POPUP_HEIGHT, area);

    frame.render_widget(Clear, popup_area);

    let help_entry = |key: &str, desc: String, color: Color| -> Line {
        Line::from(vec![
            Span::styled(
                format!("  {:<18}", key),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(desc, Style::default().fg(t.text_primary)),
        ])
    };

    let help_text = vec![
        Line::from(Span::styled(t!("help.title").to_string(), t.header_style())),
        Line::raw(""),
        help_entry("Enter", t!("help.submit").to_string(), t.accent_green),
        help_entry("Tab", t!("help.complete").to_string(), t.accent_green),
        help_entry("Backspace / Del", t!("help.edit").to_string(), t.accent_green),
        help_entry("←→ / Home / End", t!("help.move").to_string(), t.accent_green),
        help_entry("PgUp / PgDn", t!("help.scroll").to_string(), t.accent_green),
        help_entry("Alt+1 … Alt+8", t!("help.sections").to_string(), t.accent_cyan),
        help_entry("Esc", t!("help.escape").to_string(), t.accent_green),
        help_entry("Ctrl+L", t!("help.clear").to_string(), t.accent_green),
        help_entry("Ctrl+T", t!("help.theme").to_string(), t.accent_purple),
        help_entry("F1", t!("help.toggle").to_string(), t.accent_purple),
        help_entry("F2", t!("help.lang").to_string(), t.accent_purple),
        help_entry("Ctrl+C / Ctrl+Q", t!("help.quit").to_string(), t.danger),
        Line::raw(""),
        Line::from(Span::styled(
            format!("  {}", t!("help.mouse")),
            Style::default().fg(t.text_dim),
        )),
    ];

    let block = Block::default()
        .title(Span::styled(t!("help.close").to_string(), t.header_style()))
        .borders(Borders::ALL)
        .border_style(t.border_highlight_style())
        .style(Style::default().bg(t.bg_panel));
    frame.render_widget(Paragraph::new(help_text).block(block), popup_area);
}
