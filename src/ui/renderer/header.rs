//! Header bar: pulse, product name, version, clock.

use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::TERMINAL_VERSION;
use crate::ui::state::AppState;
use crate::utils::pulse_char;

pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),    // Title
            Constraint::Length(12), // Clock
        ])
        .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(pulse_char(state.tick_count), Style::default().fg(t.accent_green)),
        Span::styled(t!("app.name").to_string(), t.header_style()),
        Span::styled(TERMINAL_VERSION, Style::default().fg(t.text_dim)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_style()),
    );
    frame.render_widget(title, chunks[0]);

    let clock = Paragraph::new(Line::from(Span::styled(
        Local::now().format("%H:%M:%S").to_string(),
        Style::default().fg(t.accent_cyan),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_style()),
    );
    frame.render_widget(clock, chunks[1]);
}
